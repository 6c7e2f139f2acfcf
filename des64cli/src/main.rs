use des64::bits::BitVector;
use des64::trace::{SboxLookup, Trace};
use des64::{Block, HalfBlock, Subkey};

use anyhow::{bail, Context as _};
use argh::FromArgs;

#[derive(FromArgs)]
/// Encrypt one 64-bit block with DES
struct Args {
    /// message as a 0x/0d/0b prefixed integer
    #[argh(positional)]
    message: String,

    /// key as a 0x/0d/0b prefixed integer
    #[argh(positional)]
    key: String,

    /// print the key schedule and every round's intermediates
    #[argh(switch)]
    show_steps: bool,
}

fn main() -> anyhow::Result<()> {
    let args: Args = argh::from_env();

    let message = parse_block(&args.message).context("invalid message")?;
    let key = parse_block(&args.key).context("invalid key")?;

    let ciphertext = if args.show_steps {
        println!("Message: {}", message);
        println!("Key:     {}", key);
        des64::encrypt_block_with(message, key, &mut StepPrinter)
    } else {
        des64::encrypt_block(message, key)
    };

    println!("hex:     {}", hex::encode(ciphertext.to_u64().to_be_bytes()));
    println!("decimal: {}", ciphertext.to_u64());
    println!("binary:  {}", ciphertext);

    Ok(())
}

/// Parses `0x` (hex), `0d` (decimal) or `0b` (binary) literals of up to
/// 64 bits.
fn parse_block(s: &str) -> anyhow::Result<Block> {
    let (radix, digits) = match s.get(..2) {
        Some("0x") => (16, &s[2..]),
        Some("0d") => (10, &s[2..]),
        Some("0b") => (2, &s[2..]),
        _ => bail!("expected a 0x, 0d or 0b prefix"),
    };
    let value = u64::from_str_radix(digits, radix)
        .with_context(|| format!("not a 64-bit base-{} literal: {:?}", radix, digits))?;
    Ok(Block::from(value))
}

/// Renders trace events the way the cipher text books lay the rounds out.
struct StepPrinter;

impl Trace for StepPrinter {
    fn schedule_round(&mut self, round: usize, c: BitVector<28>, d: BitVector<28>, subkey: Subkey) {
        println!("C{}: {}", round, c);
        println!("D{}: {}", round, d);
        println!("Subkey {}: {} ({:X})", round, subkey, subkey);
    }

    fn cipher_round(
        &mut self,
        round: usize,
        left: HalfBlock,
        right: HalfBlock,
        lookups: &[SboxLookup; 8],
    ) {
        println!("Round {}:", round);
        println!("  L{}: {}", round, left);
        println!("  R{}: {}", round, right);
        for (i, lookup) in lookups.iter().enumerate() {
            println!(
                "  S{}: row {} column {} value {:X}",
                i + 1,
                lookup.row,
                lookup.column,
                lookup.value
            );
        }
    }
}

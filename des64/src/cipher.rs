//! The round function and the Feistel/block drivers.

use crate::bits::BitVector;
use crate::schedule::{generate_subkeys, generate_subkeys_with};
use crate::tables;
use crate::trace::{NoTrace, SboxLookup, Trace};
use crate::{Block, HalfBlock, Subkey};

/// The DES round function: expand, mix with the subkey, substitute
/// through the eight S-boxes, permute. Pure; identical inputs always
/// produce identical outputs.
pub fn f(half: HalfBlock, subkey: Subkey) -> HalfBlock {
    f_traced(half, subkey).0
}

fn f_traced(half: HalfBlock, subkey: Subkey) -> (HalfBlock, [SboxLookup; 8]) {
    let mixed = (half.permute(&tables::E) ^ subkey).to_u64();

    let mut lookups = [SboxLookup {
        row: 0,
        column: 0,
        value: 0,
    }; 8];
    let mut substituted = 0u64;
    for (k, lookup) in lookups.iter_mut().enumerate() {
        // chunk 0 is the most significant 6 bits of the mixed value
        let chunk = mixed >> (42 - 6 * k) & 0x3F;
        let row = (chunk >> 4 & 0b10 | chunk & 1) as usize;
        let column = (chunk >> 1 & 0xF) as usize;
        let value = tables::S_BOXES[k][row * 16 + column];
        *lookup = SboxLookup {
            row: row as u8,
            column: column as u8,
            value,
        };
        substituted = substituted << 4 | u64::from(value);
    }

    (BitVector::<32>::new(substituted).permute(&tables::P), lookups)
}

/// Encrypts one 64-bit block under a 64-bit key.
pub fn encrypt_block(plaintext: Block, key: Block) -> Block {
    encrypt_block_with(plaintext, key, &mut NoTrace)
}

/// Same as [`encrypt_block`], reporting schedule and round
/// intermediates to `trace`.
pub fn encrypt_block_with<T: Trace>(plaintext: Block, key: Block, trace: &mut T) -> Block {
    let subkeys = generate_subkeys_with(key, trace);
    run_feistel(plaintext, subkeys.iter().copied(), trace)
}

/// Decrypts one 64-bit block: the same Feistel run with the subkeys in
/// reverse order.
pub fn decrypt_block(ciphertext: Block, key: Block) -> Block {
    decrypt_block_with(ciphertext, key, &mut NoTrace)
}

/// Same as [`decrypt_block`], reporting schedule and round
/// intermediates to `trace`.
pub fn decrypt_block_with<T: Trace>(ciphertext: Block, key: Block, trace: &mut T) -> Block {
    let subkeys = generate_subkeys_with(key, trace);
    run_feistel(ciphertext, subkeys.iter().rev().copied(), trace)
}

/// Encrypts independent blocks under one key, deriving the schedule once.
pub fn encrypt_blocks(blocks: &[Block], key: Block) -> Vec<Block> {
    let subkeys = generate_subkeys(key);
    blocks
        .iter()
        .map(|&block| run_feistel(block, subkeys.iter().copied(), &mut NoTrace))
        .collect()
}

/// Decrypts independent blocks under one key, deriving the schedule once.
pub fn decrypt_blocks(blocks: &[Block], key: Block) -> Vec<Block> {
    let subkeys = generate_subkeys(key);
    blocks
        .iter()
        .map(|&block| run_feistel(block, subkeys.iter().rev().copied(), &mut NoTrace))
        .collect()
}

fn run_feistel<T: Trace>(
    block: Block,
    subkeys: impl Iterator<Item = Subkey>,
    trace: &mut T,
) -> Block {
    let permuted = block.permute(&tables::IP);
    let (mut left, mut right) = permuted.split::<32>();

    for (round, subkey) in subkeys.enumerate() {
        let (mixed, lookups) = f_traced(right, subkey);
        let next_right = left ^ mixed;
        left = right;
        right = next_right;
        trace.cipher_round(round + 1, left, right, &lookups);
    }

    // the preoutput swaps the halves: R16 || L16
    let preoutput = Block::concat(right, left);
    preoutput.permute(&tables::IP_INV)
}

//! Key schedule: PC-1, sixteen rotations of the C and D halves, PC-2.

use crate::bits::BitVector;
use crate::tables;
use crate::trace::{NoTrace, Trace};
use crate::{Block, Subkey, Subkeys, ROUNDS};

/// Derives the sixteen 48-bit round subkeys from a 64-bit key. The
/// result is owned by the caller; nothing is shared between invocations.
pub fn generate_subkeys(key: Block) -> Subkeys {
    generate_subkeys_with(key, &mut NoTrace)
}

/// Same as [`generate_subkeys`], reporting each round's C, D and subkey
/// to `trace`.
pub fn generate_subkeys_with<T: Trace>(key: Block, trace: &mut T) -> Subkeys {
    let permuted: BitVector<56> = key.permute(&tables::PC1);
    let (mut c, mut d) = permuted.split::<28>();

    let mut subkeys = [Subkey::new(0); ROUNDS];
    for round in 0..ROUNDS {
        c = c.rotate_left(tables::LEFT_SHIFTS[round]);
        d = d.rotate_left(tables::LEFT_SHIFTS[round]);
        let subkey = BitVector::<56>::concat(c, d).permute(&tables::PC2);
        trace.schedule_round(round + 1, c, d, subkey);
        subkeys[round] = subkey;
    }
    subkeys
}

#[cfg(test)]
mod tests {
    use super::*;

    // Key from the classic worked example in FIPS 46 tutorials.
    const KEY: u64 = 0x133457799BBCDFF1;

    #[test]
    fn first_and_last_subkeys_match_the_worked_example() {
        let subkeys = generate_subkeys(Block::from(KEY));
        assert_eq!(subkeys[0], Subkey::new(0x1B02EFFC7072));
        assert_eq!(subkeys[15], Subkey::new(0xCB3D8B0E17F5));
    }

    #[test]
    fn sixteen_rotations_return_the_halves_to_start() {
        let permuted: BitVector<56> = Block::from(KEY).permute(&tables::PC1);
        let (c0, d0) = permuted.split::<28>();

        struct LastHalves(Option<(BitVector<28>, BitVector<28>)>);
        impl Trace for LastHalves {
            fn schedule_round(
                &mut self,
                _round: usize,
                c: BitVector<28>,
                d: BitVector<28>,
                _subkey: Subkey,
            ) {
                self.0 = Some((c, d));
            }
        }

        let mut last = LastHalves(None);
        generate_subkeys_with(Block::from(KEY), &mut last);
        assert_eq!(last.0, Some((c0, d0)));
    }

    #[test]
    fn schedule_is_reported_in_round_order() {
        struct Rounds(Vec<usize>);
        impl Trace for Rounds {
            fn schedule_round(
                &mut self,
                round: usize,
                _c: BitVector<28>,
                _d: BitVector<28>,
                _subkey: Subkey,
            ) {
                self.0.push(round);
            }
        }

        let mut rounds = Rounds(Vec::new());
        generate_subkeys_with(Block::from(KEY), &mut rounds);
        assert_eq!(rounds.0, (1..=16).collect::<Vec<_>>());
    }
}

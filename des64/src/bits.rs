//! Fixed-width bit vectors indexed the way the DES tables are written:
//! position 1 is the most significant bit.

use std::error::Error;
use std::fmt;
use std::ops::BitXor;

/// An immutable N-bit value (N <= 64) stored in the low bits of a `u64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitVector<const N: usize>(u64);

/// Returned when a bit slice of the wrong length is offered as a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidBlockWidth {
    pub expected: usize,
    pub actual: usize,
}

impl fmt::Display for InvalidBlockWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "expected a {}-bit value but got {} bits",
            self.expected, self.actual
        )
    }
}

impl Error for InvalidBlockWidth {}

impl<const N: usize> BitVector<N> {
    const MASK: u64 = if N == 64 { u64::MAX } else { (1u64 << N) - 1 };

    /// Keeps the low N bits of `raw` and discards the rest.
    pub fn new(raw: u64) -> Self {
        Self(raw & Self::MASK)
    }

    /// Builds a vector from exactly N bits, most significant first.
    pub fn from_bits(bits: &[bool]) -> Result<Self, InvalidBlockWidth> {
        if bits.len() != N {
            return Err(InvalidBlockWidth {
                expected: N,
                actual: bits.len(),
            });
        }
        let raw = bits.iter().fold(0u64, |acc, &b| acc << 1 | u64::from(b));
        Ok(Self(raw))
    }

    pub fn to_u64(self) -> u64 {
        self.0
    }

    /// Reads the bit at `pos`, 1-indexed from the most significant bit.
    pub fn bit(self, pos: usize) -> u64 {
        debug_assert!(pos >= 1 && pos <= N);
        self.0 >> (N - pos) & 1
    }

    /// Reorders bits by a table of 1-indexed source positions. Output bit j
    /// is input bit `table[j]`. Table entries must not exceed N.
    pub fn permute<const M: usize>(self, table: &[u8; M]) -> BitVector<M> {
        let mut out = 0u64;
        for &pos in table.iter() {
            out = out << 1 | self.bit(pos as usize);
        }
        BitVector(out)
    }

    /// Circular left rotation within the N-bit width.
    pub fn rotate_left(self, n: u32) -> Self {
        debug_assert!(n > 0 && (n as usize) < N);
        Self((self.0 << n | self.0 >> (N as u32 - n)) & Self::MASK)
    }

    /// Splits into (high, low) halves of H bits each; 2 * H must equal N.
    pub fn split<const H: usize>(self) -> (BitVector<H>, BitVector<H>) {
        debug_assert_eq!(2 * H, N);
        (BitVector(self.0 >> H), BitVector(self.0 & BitVector::<H>::MASK))
    }

    /// Joins two H-bit halves into one N-bit value; 2 * H must equal N.
    pub fn concat<const H: usize>(hi: BitVector<H>, lo: BitVector<H>) -> Self {
        debug_assert_eq!(2 * H, N);
        Self(hi.0 << H | lo.0)
    }
}

impl From<u64> for BitVector<64> {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl<const N: usize> BitXor for BitVector<N> {
    type Output = Self;

    fn bitxor(self, rhs: Self) -> Self {
        Self(self.0 ^ rhs.0)
    }
}

impl<const N: usize> fmt::Display for BitVector<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for pos in 1..=N {
            write!(f, "{}", self.bit(pos))?;
        }
        Ok(())
    }
}

impl<const N: usize> fmt::UpperHex for BitVector<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:0width$X}", self.0, width = (N + 3) / 4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bit_is_indexed_from_msb() {
        let v = BitVector::<4>::new(0b1000);
        assert_eq!(v.bit(1), 1);
        assert_eq!(v.bit(4), 0);
    }

    #[test]
    fn permute_reorders_by_source_position() {
        // reverse an 8-bit value
        let table: [u8; 8] = [8, 7, 6, 5, 4, 3, 2, 1];
        let v = BitVector::<8>::new(0b1101_0010);
        assert_eq!(v.permute(&table), BitVector::<8>::new(0b0100_1011));
    }

    #[test]
    fn rotate_left_wraps_the_top_bits() {
        let v = BitVector::<28>::new(0x800_0001);
        assert_eq!(v.rotate_left(1), BitVector::<28>::new(0x3));
        assert_eq!(v.rotate_left(2), BitVector::<28>::new(0x6));
    }

    #[test]
    fn split_and_concat_are_inverses() {
        let v = BitVector::<56>::new(0xA5_A5A5_5A5A_5A5A);
        let (c, d) = v.split::<28>();
        assert_eq!(BitVector::<56>::concat(c, d), v);
    }

    #[test]
    fn from_bits_rejects_wrong_width() {
        let err = BitVector::<64>::from_bits(&[true; 56]).unwrap_err();
        assert_eq!(
            err,
            InvalidBlockWidth {
                expected: 64,
                actual: 56
            }
        );
    }

    #[test]
    fn from_bits_reads_msb_first() {
        let mut bits = [false; 8];
        bits[0] = true;
        bits[7] = true;
        assert_eq!(
            BitVector::<8>::from_bits(&bits).unwrap(),
            BitVector::<8>::new(0b1000_0001)
        );
    }

    #[test]
    fn hex_rendering_is_zero_padded() {
        assert_eq!(format!("{:X}", BitVector::<48>::new(0xABC)), "000000000ABC");
    }
}

//! Observer capability for the cipher's intermediate values. The core
//! computes the same ciphertext whether or not anything listens; a front
//! end renders the events however it likes.

use crate::bits::BitVector;
use crate::{HalfBlock, Subkey};

/// One S-box evaluation inside the round function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SboxLookup {
    pub row: u8,
    pub column: u8,
    pub value: u8,
}

/// Receives per-round intermediates from the key schedule and the
/// Feistel driver. All methods default to no-ops.
pub trait Trace {
    /// Called once per key schedule round with the rotated halves and
    /// the subkey produced from them. `round` counts from 1.
    fn schedule_round(
        &mut self,
        _round: usize,
        _c: BitVector<28>,
        _d: BitVector<28>,
        _subkey: Subkey,
    ) {
    }

    /// Called once per Feistel round with the halves after the round's
    /// update and the S-box evaluations that produced it. For decryption
    /// `round` still counts execution order, 1 to 16.
    fn cipher_round(
        &mut self,
        _round: usize,
        _left: HalfBlock,
        _right: HalfBlock,
        _lookups: &[SboxLookup; 8],
    ) {
    }
}

/// Sink used by the untraced entry points.
pub struct NoTrace;

impl Trace for NoTrace {}

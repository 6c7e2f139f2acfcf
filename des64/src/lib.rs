//! Data Encryption Standard (DES) block cipher
//!
//! https://csrc.nist.gov/csrc/media/publications/fips/46/3/archive/1999-10-25/documents/fips46-3.pdf
//!
//! Single-block DES for study: key schedule, the sixteen Feistel rounds
//! and both block directions, over fixed-width [`bits::BitVector`]
//! values so every width in the standard is carried in the type. An
//! optional [`trace::Trace`] observer receives per-round intermediates;
//! it never changes the result.
//!
//! DES is obsolete. Nothing here resists side channels or pretends to
//! be secure.

pub mod bits;
pub mod cipher;
pub mod schedule;
pub mod tables;
pub mod trace;

pub use bits::{BitVector, InvalidBlockWidth};
pub use cipher::{
    decrypt_block, decrypt_block_with, decrypt_blocks, encrypt_block, encrypt_block_with,
    encrypt_blocks, f,
};
pub use schedule::{generate_subkeys, generate_subkeys_with};

/// Feistel rounds, and with it the number of subkeys.
pub const ROUNDS: usize = 16;

/// A 64-bit plaintext, ciphertext or key.
pub type Block = BitVector<64>;
/// One 32-bit half of a permuted block.
pub type HalfBlock = BitVector<32>;
/// A 48-bit round key.
pub type Subkey = BitVector<48>;
/// The full key schedule, one subkey per round.
pub type Subkeys = [Subkey; ROUNDS];

//! Checksum combination: `crc(A || B)` from `crc(A)`, `crc(B)` and `len(B)`.
//!
//! Appending `len_b` bytes multiplies the register of `A` by `x^(8·len_b)`
//! and adds the register of `B`. Because the initial value and the final
//! xor are both all-ones, the affine parts cancel and the identity holds on
//! finalized values directly:
//!
//! ```text
//! crc(A || B) = crc(A) · x^(8·len_b) mod P  ⊕  crc(B)
//! ```
//!
//! The power is computed by square-and-multiply, so the cost is
//! `O(log len_b)` regardless of how much data `B` covered.

use crate::gf2;

/// Combine two finalized CRC-32C values.
#[inline]
#[must_use]
pub const fn crc32c_combine(crc_a: u32, crc_b: u32, len_b: usize) -> u32 {
  gf2::shift_bytes(crc_a, len_b) ^ crc_b
}

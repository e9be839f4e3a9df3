//! Compile-time tables.
//!
//! - Slicing-by-8 lookup tables for the portable step adapter.
//! - The combine-constant table used by the parallel engine to shift two of
//!   its three partial accumulators forward onto the third.
//!
//! Both are generated by `const fn`, embedded in the binary, 64-byte aligned
//! and never written after initialization.

// SAFETY: All array indexing in this module uses bounded loop indices (0..256, 0..8,
// 0..MAX_BLOCK_LEN). Clippy cannot prove this in const fn contexts, but bounds are
// statically guaranteed by the loop conditions.
#![allow(clippy::indexing_slicing)]

use crate::{
  constants::{MAX_BLOCK_LEN, POLYNOMIAL, STEP_BYTES},
  gf2,
};

/// Wrapper type to force 64-byte (cache line) alignment.
#[repr(align(64))]
#[derive(Debug)]
pub struct Aligned64<T>(pub T);

// ─────────────────────────────────────────────────────────────────────────────
// Slicing-by-8 Tables
// ─────────────────────────────────────────────────────────────────────────────

/// CRC of a single byte `index` starting from a zero register.
#[cfg_attr(feature = "no-tables", allow(dead_code))]
const fn table_entry(index: u8) -> u32 {
  let mut crc = index as u32;
  let mut i = 0;
  while i < 8 {
    crc = if crc & 1 != 0 { (crc >> 1) ^ POLYNOMIAL } else { crc >> 1 };
    i += 1;
  }
  crc
}

/// `tables[k][b]` is the register contribution of byte `b` followed by `k` zero bytes.
#[cfg(not(feature = "no-tables"))]
const fn generate_slicing_tables() -> [[u32; 256]; 8] {
  let mut tables = [[0u32; 256]; 8];

  let mut i = 0usize;
  while i < 256 {
    tables[0][i] = table_entry(i as u8);
    i += 1;
  }

  let mut k = 1usize;
  while k < 8 {
    i = 0;
    while i < 256 {
      let prev = tables[k - 1][i];
      tables[k][i] = (prev >> 8) ^ tables[0][(prev & 0xFF) as usize];
      i += 1;
    }
    k += 1;
  }

  tables
}

/// Slicing-by-8 lookup tables (8 KiB).
#[cfg(not(feature = "no-tables"))]
pub static SLICING_TABLES: Aligned64<[[u32; 256]; 8]> = Aligned64(generate_slicing_tables());

// ─────────────────────────────────────────────────────────────────────────────
// Combine Constants
// ─────────────────────────────────────────────────────────────────────────────
//
// With three streams of `n` doublewords each, the accumulators hold
//
//   crc0 = R(prefix || A)   crc1 = R(B)   crc2 = R(C)
//
// and the register for `prefix || A || B || C` is
//
//   crc0 * x^(128n) + crc1 * x^(64n) + crc2   (mod P)
//
// A reflected 32x32 carryless product carries an extra factor of x, and
// folding that product through `step8(0, _)` multiplies by x^32. The
// multipliers are therefore `x^(128n - 33)` and `x^(64n - 33)`, reflected.

/// Bit distance covered by one stream block of `block_len` doublewords.
const fn block_bits(block_len: usize) -> u64 {
  (block_len * STEP_BYTES * 8) as u64
}

/// Pack the two reflected multipliers: low half for `crc0`, high half for `crc1`.
const fn pack(two_blocks: u32, one_block: u32) -> u64 {
  (two_blocks.reverse_bits() as u64) | ((one_block.reverse_bits() as u64) << 32)
}

/// Combine constant for `block_len`, computed directly by exponentiation.
///
/// `block_len` must be at least 1.
#[must_use]
pub const fn combine_entry(block_len: usize) -> u64 {
  let bits = block_bits(block_len);
  pack(gf2::xpow_mod(2 * bits - 33), gf2::xpow_mod(bits - 33))
}

/// Build the table incrementally: consecutive entries differ by a factor of
/// `x^64` (one block) and `x^128` (two blocks).
const fn generate_combine_table() -> [u64; MAX_BLOCK_LEN] {
  let step_one = gf2::xpow_mod(block_bits(1));
  let step_two = gf2::xpow_mod(2 * block_bits(1));

  let mut table = [0u64; MAX_BLOCK_LEN];
  let mut one_block = gf2::xpow_mod(block_bits(1) - 33);
  let mut two_blocks = gf2::xpow_mod(2 * block_bits(1) - 33);

  let mut n = 0usize;
  while n < MAX_BLOCK_LEN {
    table[n] = pack(two_blocks, one_block);
    one_block = gf2::mul_mod(one_block, step_one);
    two_blocks = gf2::mul_mod(two_blocks, step_two);
    n += 1;
  }
  table
}

/// Combine constants indexed by `block_len - 1`.
pub static COMBINE_TABLE: Aligned64<[u64; MAX_BLOCK_LEN]> = Aligned64(generate_combine_table());

/// The `(two_blocks, one_block)` multipliers for `block_len` doublewords per stream.
///
/// Lengths outside the table are computed on the fly.
#[inline]
#[must_use]
pub fn combine_constant(block_len: usize) -> (u32, u32) {
  let entry = match COMBINE_TABLE.0.get(block_len.wrapping_sub(1)) {
    Some(&entry) => entry,
    None => combine_entry(block_len.max(1)),
  };
  (entry as u32, (entry >> 32) as u32)
}

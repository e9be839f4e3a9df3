//! Three-way parallel slicing engine.
//!
//! A hardware CRC step can issue every cycle but its result takes several
//! cycles to arrive. Splitting the input into three equal blocks and running
//! an independent accumulator over each keeps three dependency chains in
//! flight at once. The partial results are then merged with two carryless
//! multiplies against precomputed per-length constants (see
//! [`crate::tables`]).
//!
//! # Flow
//!
//! ```text
//! len < MIN_PARALLEL_LEN ─────────────────────────────────► fold_tail
//! len ≥ MIN_PARALLEL_LEN ─► align_head ─► [fold_iteration]* ─► fold_tail
//! ```
//!
//! Each iteration takes `block_len = min(MAX_BLOCK_LEN, len / 24)` doublewords
//! per stream and repeats while at least `MIN_PARALLEL_LEN` bytes remain.

use crate::{
  adapter::StepAdapter,
  constants::{BYTES_PER_ITER, MAX_BLOCK_LEN, MIN_PARALLEL_LEN},
  tables, tail,
};

/// Update the raw CRC-32C register `crc` with `data`.
///
/// Bit-exact with folding every byte sequentially, independent of the
/// alignment of `data` and of which path is taken.
#[inline(always)]
pub fn compute<A: StepAdapter>(steps: A, crc: u32, data: &[u8]) -> u32 {
  #[cfg(feature = "verify")]
  let (initial, whole) = (crc, data);

  let mut crc = crc;
  let mut data = data;

  if data.len() >= MIN_PARALLEL_LEN {
    // Three loads per step; keep them from straddling cache lines.
    (crc, data) = tail::align_head(steps, crc, data);

    while data.len() >= MIN_PARALLEL_LEN {
      let block_len = MAX_BLOCK_LEN.min(data.len() / BYTES_PER_ITER);
      let (iteration, rest) = data.split_at(block_len * BYTES_PER_ITER);
      crc = fold_iteration(steps, crc, iteration, block_len);
      data = rest;
    }
  }

  let crc = tail::fold_tail(steps, crc, data);

  #[cfg(feature = "verify")]
  assert_eq!(
    crc,
    crate::portable::compute(initial, whole),
    "{} diverged from the sequential oracle (len={})",
    A::NAME,
    whole.len()
  );

  crc
}

/// Fold one iteration of `3 * block_len` doublewords into `crc`.
///
/// `iteration` must be exactly `block_len * BYTES_PER_ITER` bytes.
#[inline(always)]
pub(crate) fn fold_iteration<A: StepAdapter>(steps: A, crc: u32, iteration: &[u8], block_len: usize) -> u32 {
  debug_assert!(block_len >= 1);
  debug_assert_eq!(iteration.len(), block_len * BYTES_PER_ITER);

  let (words, _) = iteration.as_chunks::<8>();
  let (first, rest) = words.split_at(block_len);
  let (second, third) = rest.split_at(block_len);

  let mut crc0 = crc;
  let mut crc1 = 0u32;
  let mut crc2 = 0u32;

  for ((a, b), c) in first.iter().zip(second).zip(third) {
    crc0 = steps.step8(crc0, u64::from_le_bytes(*a));
    crc1 = steps.step8(crc1, u64::from_le_bytes(*b));
    crc2 = steps.step8(crc2, u64::from_le_bytes(*c));
  }

  // Shift crc0 past two blocks and crc1 past one, landing both on crc2.
  let (two_blocks, one_block) = tables::combine_constant(block_len);
  let mul0 = steps.clmul(crc0, two_blocks);
  let mul1 = steps.clmul(crc1, one_block);

  steps.step8(0, mul0) ^ steps.step8(0, mul1) ^ crc2
}

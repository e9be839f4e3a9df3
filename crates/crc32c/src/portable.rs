//! Portable CRC-32C: the fallback step adapter and the sequential oracle.
//!
//! [`Portable`] implements [`StepAdapter`] with slicing-by-8 table lookups and
//! a software carryless multiply, so the parallel engine runs on every target.
//! With the `no-tables` feature the steps fall back to branchless bitwise
//! reduction and no lookup tables are embedded.
//!
//! [`compute`] is a plain sequential slicing-by-8 loop with no stream
//! splitting. It is what the `verify` feature checks the engine against.

// SAFETY: All array indexing in this module uses bounded indices:
// - table rows are selected by constants 0..8
// - entries are selected by a value masked or truncated to u8 (0..=255)
#![allow(clippy::indexing_slicing)]

use crate::{adapter::StepAdapter, gf2};

/// Portable step adapter. Always available.
#[derive(Clone, Copy, Debug, Default)]
pub struct Portable;

#[cfg(not(feature = "no-tables"))]
mod steps {
  use crate::tables::SLICING_TABLES;

  macro_rules! table {
    ($idx:expr) => {
      SLICING_TABLES.0[$idx]
    };
  }

  #[inline(always)]
  pub(super) fn step1(crc: u32, data: u8) -> u32 {
    (crc >> 8) ^ table!(0)[(crc as u8 ^ data) as usize]
  }

  #[inline(always)]
  pub(super) fn step2(crc: u32, data: u16) -> u32 {
    let v = crc ^ data as u32;
    (crc >> 16) ^ table!(1)[v as u8 as usize] ^ table!(0)[(v >> 8) as u8 as usize]
  }

  #[inline(always)]
  pub(super) fn step4(crc: u32, data: u32) -> u32 {
    let v = crc ^ data;
    table!(3)[v as u8 as usize]
      ^ table!(2)[(v >> 8) as u8 as usize]
      ^ table!(1)[(v >> 16) as u8 as usize]
      ^ table!(0)[(v >> 24) as usize]
  }

  #[inline(always)]
  pub(super) fn step8(crc: u32, data: u64) -> u32 {
    let lo = crc ^ data as u32;
    let hi = (data >> 32) as u32;

    // table[7] covers the first byte in memory order, table[0] the last.
    table!(7)[lo as u8 as usize]
      ^ table!(6)[(lo >> 8) as u8 as usize]
      ^ table!(5)[(lo >> 16) as u8 as usize]
      ^ table!(4)[(lo >> 24) as usize]
      ^ table!(3)[hi as u8 as usize]
      ^ table!(2)[(hi >> 8) as u8 as usize]
      ^ table!(1)[(hi >> 16) as u8 as usize]
      ^ table!(0)[(hi >> 24) as usize]
  }
}

#[cfg(feature = "no-tables")]
mod steps {
  use crate::constants::POLYNOMIAL;

  /// Shift `bits` bits out of the register, conditionally applying the polynomial.
  #[inline(always)]
  fn shift(mut crc: u32, bits: u32) -> u32 {
    for _ in 0..bits {
      let mask = 0u32.wrapping_sub(crc & 1);
      crc = (crc >> 1) ^ (POLYNOMIAL & mask);
    }
    crc
  }

  #[inline(always)]
  pub(super) fn step1(crc: u32, data: u8) -> u32 {
    shift(crc ^ data as u32, 8)
  }

  #[inline(always)]
  pub(super) fn step2(crc: u32, data: u16) -> u32 {
    shift(crc ^ data as u32, 16)
  }

  #[inline(always)]
  pub(super) fn step4(crc: u32, data: u32) -> u32 {
    shift(crc ^ data, 32)
  }

  #[inline(always)]
  pub(super) fn step8(crc: u32, data: u64) -> u32 {
    let crc = shift(crc ^ data as u32, 32);
    shift(crc ^ (data >> 32) as u32, 32)
  }
}

impl StepAdapter for Portable {
  #[cfg(not(feature = "no-tables"))]
  const NAME: &'static str = "portable/slice8";
  #[cfg(feature = "no-tables")]
  const NAME: &'static str = "portable/bitwise";

  #[inline(always)]
  fn step1(self, crc: u32, data: u8) -> u32 {
    steps::step1(crc, data)
  }

  #[inline(always)]
  fn step2(self, crc: u32, data: u16) -> u32 {
    steps::step2(crc, data)
  }

  #[inline(always)]
  fn step4(self, crc: u32, data: u32) -> u32 {
    steps::step4(crc, data)
  }

  #[inline(always)]
  fn step8(self, crc: u32, data: u64) -> u32 {
    steps::step8(crc, data)
  }

  #[inline(always)]
  fn clmul(self, a: u32, b: u32) -> u64 {
    gf2::clmul32(a, b)
  }
}

/// Sequential CRC-32C: eight bytes per step, then one byte at a time.
///
/// `crc` is the raw register; no init/xorout is applied.
#[inline]
#[must_use]
pub fn compute(crc: u32, data: &[u8]) -> u32 {
  let mut crc = crc;
  let (chunks, remainder) = data.as_chunks::<8>();

  for chunk in chunks {
    crc = steps::step8(crc, u64::from_le_bytes(*chunk));
  }

  for &byte in remainder {
    crc = steps::step1(crc, byte);
  }

  crc
}

/// Parallel engine over the portable adapter.
#[inline]
#[must_use]
pub fn compute_parallel(crc: u32, data: &[u8]) -> u32 {
  crate::parallel::compute(Portable, crc, data)
}

//! aarch64 step adapter: ARMv8 CRC extension + PMULL.
//!
//! # Safety
//!
//! Uses `unsafe` for ACLE intrinsics. An [`ArmCrc`] token can only be
//! obtained once `crc` and `aes` (which carries PMULL) are known to be
//! present.
#![allow(unsafe_code)]

use core::arch::aarch64::{__crc32cb, __crc32cd, __crc32ch, __crc32cw, vmull_p64};

use crate::{adapter::StepAdapter, parallel};

/// Capability token for the CRC extension + PMULL.
#[derive(Clone, Copy, Debug)]
pub struct ArmCrc {
  _private: (),
}

impl ArmCrc {
  /// Returns a token if the running CPU supports `crc` and `aes`.
  #[must_use]
  pub fn detect() -> Option<Self> {
    #[cfg(feature = "std")]
    let available = std::arch::is_aarch64_feature_detected!("crc") && std::arch::is_aarch64_feature_detected!("aes");

    #[cfg(not(feature = "std"))]
    let available = cfg!(all(target_feature = "crc", target_feature = "aes"));

    // SAFETY: both features were just confirmed.
    available.then(|| unsafe { Self::new_unchecked() })
  }

  /// Create a token without checking the CPU.
  ///
  /// # Safety
  ///
  /// The CPU must support `crc` and `aes`.
  #[inline(always)]
  #[must_use]
  pub const unsafe fn new_unchecked() -> Self {
    Self { _private: () }
  }

  /// Update the raw register with the parallel engine on this adapter.
  #[inline]
  #[must_use]
  pub fn compute(self, crc: u32, data: &[u8]) -> u32 {
    // SAFETY: holding `self` proves crc and aes are available.
    unsafe { compute_enabled(crc, data) }
  }
}

impl StepAdapter for ArmCrc {
  const NAME: &'static str = "aarch64/crc+pmull";

  #[inline(always)]
  fn step1(self, crc: u32, data: u8) -> u32 {
    // SAFETY: token proves the crc extension.
    unsafe { __crc32cb(crc, data) }
  }

  #[inline(always)]
  fn step2(self, crc: u32, data: u16) -> u32 {
    // SAFETY: token proves the crc extension.
    unsafe { __crc32ch(crc, data) }
  }

  #[inline(always)]
  fn step4(self, crc: u32, data: u32) -> u32 {
    // SAFETY: token proves the crc extension.
    unsafe { __crc32cw(crc, data) }
  }

  #[inline(always)]
  fn step8(self, crc: u32, data: u64) -> u32 {
    // SAFETY: token proves the crc extension.
    unsafe { __crc32cd(crc, data) }
  }

  #[inline(always)]
  fn clmul(self, a: u32, b: u32) -> u64 {
    // SAFETY: token proves aes (PMULL). Operands below 2^32 keep the product below 2^64.
    unsafe { vmull_p64(a as u64, b as u64) as u64 }
  }
}

/// Engine entry compiled with the adapter's features enabled.
///
/// # Safety
///
/// The CPU must support `crc` and `aes`.
#[target_feature(enable = "crc,aes")]
unsafe fn compute_enabled(crc: u32, data: &[u8]) -> u32 {
  // SAFETY: caller guarantees both features.
  let steps = unsafe { ArmCrc::new_unchecked() };
  parallel::compute(steps, crc, data)
}

/// Dispatch-table wrapper.
///
/// Only installed by the dispatcher after [`ArmCrc::detect`] succeeded.
pub(crate) fn crc32c_arm(crc: u32, data: &[u8]) -> u32 {
  // SAFETY: the dispatcher selects this kernel only after detection.
  unsafe { compute_enabled(crc, data) }
}

#[cfg(test)]
mod tests {
  extern crate std;

  use super::*;
  use crate::{adapter, portable, reference::crc32c_bitwise};

  #[test]
  fn test_contract() {
    if let Some(steps) = ArmCrc::detect() {
      adapter::tests::check_contract(steps);
    }
  }

  #[test]
  fn test_matches_portable_across_paths() {
    let Some(steps) = ArmCrc::detect() else { return };
    let data: std::vec::Vec<u8> = (0..20_000u32).map(|i| (i.wrapping_mul(2_654_435_761) >> 13) as u8).collect();
    for len in [0usize, 1, 7, 8, 599, 600, 601, 8399, 8400, 8401, 20_000 - 3] {
      for off in 0..3 {
        let slice = &data[off..off + len];
        assert_eq!(steps.compute(!0, slice), crc32c_bitwise(!0, slice), "len={len} off={off}");
        assert_eq!(steps.compute(!0, slice), portable::compute_parallel(!0, slice));
      }
    }
  }
}

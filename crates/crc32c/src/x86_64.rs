//! x86_64 step adapter: SSE4.2 `crc32` + PCLMULQDQ.
//!
//! # Safety
//!
//! Uses `unsafe` for x86 intrinsics. An [`Sse42`] token can only be obtained
//! once both features are known to be present, and every intrinsic call below
//! is reachable only through a token.
#![allow(unsafe_code)]

use core::arch::x86_64::{
  _mm_clmulepi64_si128, _mm_crc32_u8, _mm_crc32_u16, _mm_crc32_u32, _mm_crc32_u64, _mm_cvtsi32_si128,
  _mm_cvtsi128_si64,
};

use crate::{adapter::StepAdapter, parallel};

/// Capability token for SSE4.2 + PCLMULQDQ.
#[derive(Clone, Copy, Debug)]
pub struct Sse42 {
  _private: (),
}

impl Sse42 {
  /// Returns a token if the running CPU supports `sse4.2` and `pclmulqdq`.
  #[must_use]
  pub fn detect() -> Option<Self> {
    #[cfg(feature = "std")]
    let available = std::arch::is_x86_feature_detected!("sse4.2") && std::arch::is_x86_feature_detected!("pclmulqdq");

    #[cfg(not(feature = "std"))]
    let available = cfg!(all(target_feature = "sse4.2", target_feature = "pclmulqdq"));

    // SAFETY: both features were just confirmed.
    available.then(|| unsafe { Self::new_unchecked() })
  }

  /// Create a token without checking the CPU.
  ///
  /// # Safety
  ///
  /// The CPU must support `sse4.2` and `pclmulqdq`.
  #[inline(always)]
  #[must_use]
  pub const unsafe fn new_unchecked() -> Self {
    Self { _private: () }
  }

  /// Update the raw register with the parallel engine on this adapter.
  #[inline]
  #[must_use]
  pub fn compute(self, crc: u32, data: &[u8]) -> u32 {
    // SAFETY: holding `self` proves sse4.2 and pclmulqdq are available.
    unsafe { compute_enabled(crc, data) }
  }
}

impl StepAdapter for Sse42 {
  const NAME: &'static str = "x86_64/sse4.2+pclmul";

  #[inline(always)]
  fn step1(self, crc: u32, data: u8) -> u32 {
    // SAFETY: token proves sse4.2.
    unsafe { _mm_crc32_u8(crc, data) }
  }

  #[inline(always)]
  fn step2(self, crc: u32, data: u16) -> u32 {
    // SAFETY: token proves sse4.2.
    unsafe { _mm_crc32_u16(crc, data) }
  }

  #[inline(always)]
  fn step4(self, crc: u32, data: u32) -> u32 {
    // SAFETY: token proves sse4.2.
    unsafe { _mm_crc32_u32(crc, data) }
  }

  #[inline(always)]
  fn step8(self, crc: u32, data: u64) -> u32 {
    // SAFETY: token proves sse4.2. The upper half of the result is always zero.
    unsafe { _mm_crc32_u64(crc as u64, data) as u32 }
  }

  #[inline(always)]
  fn clmul(self, a: u32, b: u32) -> u64 {
    // SAFETY: token proves pclmulqdq; sse2 is baseline on x86_64.
    unsafe {
      let a = _mm_cvtsi32_si128(a as i32);
      let b = _mm_cvtsi32_si128(b as i32);
      _mm_cvtsi128_si64(_mm_clmulepi64_si128::<0x00>(a, b)) as u64
    }
  }
}

/// Engine entry compiled with the adapter's features enabled so the steps
/// inline into the loop.
///
/// # Safety
///
/// The CPU must support `sse4.2` and `pclmulqdq`.
#[target_feature(enable = "sse4.2,pclmulqdq")]
unsafe fn compute_enabled(crc: u32, data: &[u8]) -> u32 {
  // SAFETY: caller guarantees both features.
  let steps = unsafe { Sse42::new_unchecked() };
  parallel::compute(steps, crc, data)
}

/// Dispatch-table wrapper.
///
/// Only installed by the dispatcher after [`Sse42::detect`] succeeded.
pub(crate) fn crc32c_sse42(crc: u32, data: &[u8]) -> u32 {
  // SAFETY: the dispatcher selects this kernel only after detection.
  unsafe { compute_enabled(crc, data) }
}

//! CRC-32C (Castagnoli) with three-way parallel slicing.
//!
//! Long inputs are split into three equal interleaved streams whose partial
//! CRCs run concurrently through independent dependency chains, then merged
//! with two carryless multiplies by precomputed constants. Short inputs and
//! leftovers go through plain 8/4/2/1-byte steps.
//!
//! The engine is generic over a [`StepAdapter`], which supplies the primitive
//! steps:
//!
//! | Adapter | Target | Primitives |
//! |---------|--------|------------|
//! | [`Sse42`] | x86_64 | SSE4.2 `crc32`, PCLMULQDQ |
//! | [`ArmCrc`] | aarch64 | CRC extension, PMULL |
//! | [`Portable`] | any | slicing-by-8 tables, software clmul |
//!
//! The best adapter for the running CPU is chosen once and cached. Every
//! adapter produces the same results.
//!
//! # Example
//!
//! ```rust
//! use crc32c::{Checksum, ChecksumCombine, Crc32c};
//!
//! let data = b"123456789";
//! let crc = Crc32c::checksum(data);
//! assert_eq!(crc, 0xE306_9283);
//!
//! let mut hasher = Crc32c::new();
//! hasher.update(b"1234");
//! hasher.update(b"56789");
//! assert_eq!(hasher.finalize(), crc);
//!
//! let (a, b) = data.split_at(4);
//! assert_eq!(Crc32c::combine(Crc32c::checksum(a), Crc32c::checksum(b), b.len()), crc);
//! ```
//!
//! # Raw register
//!
//! [`compute`] works on the raw register. Callers apply the initial value and
//! final xor themselves:
//!
//! ```rust
//! assert_eq!(crc32c::compute(0xFFFF_FFFF, b"123456789") ^ 0xFFFF_FFFF, 0xE306_9283);
//! ```
//!
//! # no_std Support
//!
//! Disable the `std` feature for embedded use. Backend selection then relies
//! on compile-time target features only.
//!
//! ```toml
//! [dependencies]
//! crc32c = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

pub mod adapter;
#[cfg(target_arch = "aarch64")]
pub mod aarch64;
mod combine;
pub mod config;
pub mod constants;
pub mod dispatch;
mod gf2;
mod hasher;
pub mod parallel;
pub mod portable;
pub mod reference;
pub mod tables;
mod tail;
#[cfg(target_arch = "x86_64")]
pub mod x86_64;

#[cfg(test)]
mod proptests;

pub use adapter::StepAdapter;
pub use combine::crc32c_combine;
pub use hasher::Crc32c;
pub use portable::Portable;
pub use traits::{Checksum, ChecksumCombine};

#[cfg(target_arch = "aarch64")]
pub use crate::aarch64::ArmCrc;
#[cfg(target_arch = "x86_64")]
pub use crate::x86_64::Sse42;

/// Update a raw CRC-32C register with `data` using the selected backend.
///
/// No initial value or final xor is applied. An empty `data` returns `crc`
/// unchanged.
#[inline]
#[must_use]
pub fn compute(crc: u32, data: &[u8]) -> u32 {
  dispatch::compute(crc, data)
}

/// [`compute`] over a raw pointer and length.
///
/// A zero `len` returns `crc` without touching `data`, so a null or dangling
/// pointer is accepted in that case.
///
/// # Safety
///
/// When `len > 0`, `data` must be valid for reads of `len` bytes for the
/// duration of the call, and the memory must not be mutated concurrently.
#[allow(unsafe_code)]
#[inline]
#[must_use]
pub unsafe fn compute_raw(crc: u32, data: *const u8, len: usize) -> u32 {
  if len == 0 {
    return crc;
  }
  // SAFETY: the caller guarantees `data` is valid for `len` bytes.
  let data = unsafe { core::slice::from_raw_parts(data, len) };
  compute(crc, data)
}

/// Merge `crc(A)` and `crc(B)` into `crc(A || B)`.
#[inline]
#[must_use]
pub const fn combine(crc_a: u32, crc_b: u32, len_b: usize) -> u32 {
  combine::crc32c_combine(crc_a, crc_b, len_b)
}

/// Name of the backend this process uses, for diagnostics and benchmarks.
///
/// Examples: `"x86_64/sse4.2+pclmul"`, `"aarch64/crc+pmull"`,
/// `"portable/slice8"`.
#[inline]
#[must_use]
pub fn selected_backend() -> &'static str {
  dispatch::selected().name
}

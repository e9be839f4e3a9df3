//! Backend selection and caching.
//!
//! Candidates, best first:
//!
//! - x86_64: SSE4.2 `crc32` + PCLMULQDQ
//! - aarch64: CRC extension + PMULL
//! - everywhere: portable adapter
//!
//! With `std` the CPU is probed once at first use and the choice is cached
//! in a `OnceLock`; every later call is a single indirect call. Without `std`
//! only compile-time target features count, and selection folds to a
//! constant.

use crate::{adapter::StepAdapter, config::Crc32cForce, portable::Portable};

/// Signature of a full CRC-32C register update.
pub type Crc32cFn = fn(u32, &[u8]) -> u32;

/// The result of backend selection.
#[derive(Clone, Copy, Debug)]
pub struct Selected {
  /// Human-readable backend name.
  pub name: &'static str,
  /// Register update function.
  pub func: Crc32cFn,
}

impl Selected {
  #[inline]
  #[must_use]
  pub const fn new(name: &'static str, func: Crc32cFn) -> Self {
    Self { name, func }
  }
}

/// The portable backend. Always available.
#[inline]
#[must_use]
pub fn portable() -> Selected {
  Selected::new(Portable::NAME, crate::portable::compute_parallel)
}

/// The hardware backend for this CPU, if there is one.
#[must_use]
pub fn hardware() -> Option<Selected> {
  #[cfg(target_arch = "x86_64")]
  {
    use crate::x86_64::{self, Sse42};
    Sse42::detect().map(|_| Selected::new(Sse42::NAME, x86_64::crc32c_sse42))
  }

  #[cfg(target_arch = "aarch64")]
  {
    use crate::aarch64::{self, ArmCrc};
    ArmCrc::detect().map(|_| Selected::new(ArmCrc::NAME, aarch64::crc32c_arm))
  }

  #[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
  {
    None
  }
}

/// Pick the backend for an effective force mode.
fn select_for(force: Crc32cForce) -> Selected {
  match force {
    Crc32cForce::Portable => portable(),
    Crc32cForce::Auto | Crc32cForce::Hwcrc => hardware().unwrap_or_else(portable),
  }
}

fn select() -> Selected {
  select_for(crate::config::get().effective_force)
}

/// The backend `compute` uses in this process.
#[cfg(feature = "std")]
#[inline]
#[must_use]
pub fn selected() -> Selected {
  use std::sync::OnceLock;
  static SELECTED: OnceLock<Selected> = OnceLock::new();
  *SELECTED.get_or_init(select)
}

/// The backend `compute` uses in this process.
#[cfg(not(feature = "std"))]
#[inline]
#[must_use]
pub fn selected() -> Selected {
  select()
}

/// Update the raw register through the selected backend.
#[inline]
pub(crate) fn compute(crc: u32, data: &[u8]) -> u32 {
  (selected().func)(crc, data)
}

//! Backend selection configuration.
//!
//! The only knob is which class of backend the dispatcher may pick. Under
//! `std` it can be overridden with the `CRC32C_FORCE` environment variable,
//! which is read once and cached:
//!
//! | Value | Effect |
//! |-------|--------|
//! | `auto` (default) | Best available backend |
//! | `portable`, `scalar`, `table` | Always the portable adapter |
//! | `hwcrc`, `crc`, `crc32c` | Hardware adapter if present, else `auto` |
//!
//! Unrecognised values are treated as `auto`. The engine constants
//! (threshold, block length) are fixed and not configurable.

/// Requested backend class.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Crc32cForce {
  /// Use the best available backend.
  #[default]
  Auto,
  /// Force the portable adapter.
  Portable,
  /// Force the hardware adapter (clamped to `Auto` when unavailable).
  Hwcrc,
}

impl Crc32cForce {
  /// Environment variable consulted under `std`.
  pub const ENV: &'static str = "CRC32C_FORCE";

  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Auto => "auto",
      Self::Portable => "portable",
      Self::Hwcrc => "hwcrc",
    }
  }

  /// Parse an override value. Surrounding whitespace and case are ignored.
  #[must_use]
  pub fn parse(value: &str) -> Option<Self> {
    let value = value.trim();
    if value.is_empty() {
      return None;
    }

    if value.eq_ignore_ascii_case("auto") {
      return Some(Self::Auto);
    }
    if value.eq_ignore_ascii_case("portable")
      || value.eq_ignore_ascii_case("scalar")
      || value.eq_ignore_ascii_case("table")
    {
      return Some(Self::Portable);
    }
    if value.eq_ignore_ascii_case("hwcrc") || value.eq_ignore_ascii_case("crc") || value.eq_ignore_ascii_case("crc32c") {
      return Some(Self::Hwcrc);
    }

    None
  }
}

/// Resolved configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Crc32cConfig {
  /// Force mode as requested (environment or default).
  pub requested_force: Crc32cForce,
  /// Force mode clamped to what the CPU supports.
  pub effective_force: Crc32cForce,
}

#[cfg(feature = "std")]
fn requested_force() -> Crc32cForce {
  use std::sync::OnceLock;
  static FORCE: OnceLock<Crc32cForce> = OnceLock::new();
  *FORCE.get_or_init(|| {
    std::env::var(Crc32cForce::ENV).ok().as_deref().and_then(Crc32cForce::parse).unwrap_or_default()
  })
}

#[cfg(not(feature = "std"))]
fn requested_force() -> Crc32cForce {
  Crc32cForce::Auto
}

#[inline]
#[must_use]
fn clamp_force(requested: Crc32cForce, hardware_available: bool) -> Crc32cForce {
  match requested {
    Crc32cForce::Hwcrc if !hardware_available => Crc32cForce::Auto,
    other => other,
  }
}

/// Get the effective configuration for the current process.
#[inline]
#[must_use]
pub fn get() -> Crc32cConfig {
  let requested_force = requested_force();
  Crc32cConfig {
    requested_force,
    effective_force: clamp_force(requested_force, crate::dispatch::hardware().is_some()),
  }
}

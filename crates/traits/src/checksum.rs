//! Non-cryptographic checksum traits.

use core::fmt::Debug;

/// A streaming, non-cryptographic checksum.
///
/// ```rust,ignore
/// use crc32c::{Checksum, Crc32c};
///
/// let crc = Crc32c::checksum(b"hello world");
///
/// let mut hasher = Crc32c::new();
/// hasher.update(b"hello ");
/// hasher.update(b"world");
/// assert_eq!(hasher.finalize(), crc);
/// ```
///
/// # Implementor Requirements
///
/// - `new()` and `Default::default()` produce the same state.
/// - `finalize()` is idempotent and does not consume the hasher.
/// - `reset()` returns the hasher to the state it was constructed in.
/// - Splitting the input across any number of `update` calls yields the same
///   result as a single call over the concatenation.
pub trait Checksum: Clone + Default {
  /// Size of [`Output`](Self::Output) in bytes.
  const OUTPUT_SIZE: usize;

  /// The finalized checksum value.
  type Output: Copy + Eq + Debug + Default;

  /// Create a hasher with the algorithm's standard initial value.
  #[must_use]
  fn new() -> Self;

  /// Create a hasher that continues from a previously finalized checksum.
  #[must_use]
  fn with_initial(initial: Self::Output) -> Self;

  /// Fold `data` into the running checksum.
  fn update(&mut self, data: &[u8]);

  /// Fold several non-contiguous buffers, in order.
  #[inline]
  fn update_vectored(&mut self, bufs: &[&[u8]]) {
    for buf in bufs {
      self.update(buf);
    }
  }

  /// Fold `std::io::IoSlice` buffers, in order.
  #[cfg(feature = "std")]
  #[inline]
  fn update_io_slices(&mut self, bufs: &[std::io::IoSlice<'_>]) {
    for buf in bufs {
      self.update(buf);
    }
  }

  /// Return the checksum of everything folded in so far.
  #[must_use]
  fn finalize(&self) -> Self::Output;

  /// Discard all input and return to the initial state.
  fn reset(&mut self);

  /// Compute the checksum of `data` in one shot.
  #[inline]
  #[must_use]
  fn checksum(data: &[u8]) -> Self::Output {
    let mut h = Self::new();
    h.update(data);
    h.finalize()
  }

  /// Compute the checksum of several buffers as if they were concatenated.
  #[inline]
  #[must_use]
  fn checksum_vectored(bufs: &[&[u8]]) -> Self::Output {
    let mut h = Self::new();
    h.update_vectored(bufs);
    h.finalize()
  }
}

/// Checksums whose values for adjacent buffers can be merged.
///
/// `combine(checksum(A), checksum(B), B.len()) == checksum(A || B)`.
pub trait ChecksumCombine: Checksum {
  /// Merge `crc_a = checksum(A)` and `crc_b = checksum(B)` into `checksum(A || B)`.
  #[must_use]
  fn combine(crc_a: Self::Output, crc_b: Self::Output, len_b: usize) -> Self::Output;
}

#[cfg(test)]
mod tests {
  use super::*;

  /// Byte-sum "checksum" used to exercise the provided methods.
  #[derive(Clone, Default, Debug)]
  struct Sum {
    initial: u32,
    state: u32,
  }

  impl Checksum for Sum {
    const OUTPUT_SIZE: usize = 4;
    type Output = u32;

    fn new() -> Self {
      Self::default()
    }

    fn with_initial(initial: u32) -> Self {
      Self { initial, state: initial }
    }

    fn update(&mut self, data: &[u8]) {
      for &b in data {
        self.state = self.state.wrapping_add(u32::from(b));
      }
    }

    fn finalize(&self) -> u32 {
      self.state
    }

    fn reset(&mut self) {
      self.state = self.initial;
    }
  }

  impl ChecksumCombine for Sum {
    fn combine(crc_a: u32, crc_b: u32, _len_b: usize) -> u32 {
      crc_a.wrapping_add(crc_b)
    }
  }

  #[test]
  fn vectored_matches_contiguous() {
    let whole = Sum::checksum(b"abcdef");
    assert_eq!(Sum::checksum_vectored(&[b"ab", b"", b"cdef"]), whole);
  }

  #[test]
  fn reset_restores_initial() {
    let mut h = Sum::with_initial(7);
    h.update(b"xyz");
    h.reset();
    assert_eq!(h.finalize(), 7);
  }

  #[test]
  fn combine_contract() {
    let a = Sum::checksum(b"abc");
    let b = Sum::checksum(b"def");
    assert_eq!(Sum::combine(a, b, 3), Sum::checksum(b"abcdef"));
  }
}

//! Streaming CRC-32C hasher.

use traits::{Checksum, ChecksumCombine};

use crate::{constants::INIT, dispatch};

/// CRC-32C (Castagnoli) checksum.
///
/// Streaming computation over the selected backend. Every backend produces
/// identical results; only throughput differs.
///
/// # Thread Safety
///
/// `Crc32c` is `Send` and `Sync`. Independent hashers can run on different
/// threads and their results can be merged with [`combine`](Self::combine).
#[derive(Clone, Debug)]
pub struct Crc32c {
  /// Raw register (pre-xorout).
  state: u32,
  /// Register to return to on reset.
  initial: u32,
}

impl Crc32c {
  /// Create a new hasher with the standard initial value.
  #[inline]
  #[must_use]
  pub const fn new() -> Self {
    Self { state: INIT, initial: INIT }
  }

  /// Create a hasher that continues from a previously finalized checksum.
  ///
  /// # Example
  ///
  /// ```
  /// use crc32c::Crc32c;
  ///
  /// let data = b"hello world";
  /// let (first, second) = data.split_at(6);
  ///
  /// let mut hasher = Crc32c::resume(Crc32c::checksum(first));
  /// hasher.update(second);
  ///
  /// assert_eq!(hasher.finalize(), Crc32c::checksum(data));
  /// ```
  #[inline]
  #[must_use]
  pub const fn resume(crc: u32) -> Self {
    Self { state: crc ^ INIT, initial: crc ^ INIT }
  }

  /// Compute CRC-32C of `data` in one shot.
  ///
  /// ```
  /// use crc32c::Crc32c;
  ///
  /// assert_eq!(Crc32c::checksum(b"123456789"), 0xE306_9283);
  /// ```
  #[inline]
  #[must_use]
  pub fn checksum(data: &[u8]) -> u32 {
    dispatch::compute(INIT, data) ^ INIT
  }

  /// Update the hasher with additional data.
  #[inline]
  pub fn update(&mut self, data: &[u8]) {
    self.state = dispatch::compute(self.state, data);
  }

  /// Return the checksum so far. The hasher is not consumed.
  #[inline]
  #[must_use]
  pub const fn finalize(&self) -> u32 {
    self.state ^ INIT
  }

  /// Reset to the state the hasher was constructed in.
  #[inline]
  pub fn reset(&mut self) {
    self.state = self.initial;
  }

  /// Same as [`finalize`](Self::finalize).
  #[inline]
  #[must_use]
  pub const fn state(&self) -> u32 {
    self.finalize()
  }

  /// Combine two CRCs: `crc(A || B)` from `crc(A)`, `crc(B)`, `len(B)`.
  ///
  /// ```
  /// use crc32c::Crc32c;
  ///
  /// let data = b"hello world";
  /// let (a, b) = data.split_at(6);
  ///
  /// let crc_a = Crc32c::checksum(a);
  /// let crc_b = Crc32c::checksum(b);
  ///
  /// assert_eq!(Crc32c::combine(crc_a, crc_b, b.len()), Crc32c::checksum(data));
  /// ```
  #[inline]
  #[must_use]
  pub const fn combine(crc_a: u32, crc_b: u32, len_b: usize) -> u32 {
    crate::combine::crc32c_combine(crc_a, crc_b, len_b)
  }
}

impl Default for Crc32c {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

impl Checksum for Crc32c {
  const OUTPUT_SIZE: usize = 4;
  type Output = u32;

  #[inline]
  fn new() -> Self {
    Crc32c::new()
  }

  #[inline]
  fn with_initial(initial: Self::Output) -> Self {
    Crc32c::resume(initial)
  }

  #[inline]
  fn update(&mut self, data: &[u8]) {
    Crc32c::update(self, data);
  }

  #[inline]
  fn finalize(&self) -> Self::Output {
    Crc32c::finalize(self)
  }

  #[inline]
  fn reset(&mut self) {
    Crc32c::reset(self);
  }

  #[inline]
  fn checksum(data: &[u8]) -> Self::Output {
    Crc32c::checksum(data)
  }
}

impl ChecksumCombine for Crc32c {
  #[inline]
  fn combine(crc_a: Self::Output, crc_b: Self::Output, len_b: usize) -> Self::Output {
    Crc32c::combine(crc_a, crc_b, len_b)
  }
}

#[cfg(feature = "std")]
impl std::io::Write for Crc32c {
  #[inline]
  fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
    self.update(buf);
    Ok(buf.len())
  }

  #[inline]
  fn flush(&mut self) -> std::io::Result<()> {
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  extern crate std;

  use std::vec::Vec;

  use super::*;

  #[test]
  fn test_checksum() {
    assert_eq!(Crc32c::checksum(b"123456789"), 0xE306_9283);
  }

  #[test]
  fn test_empty() {
    assert_eq!(Crc32c::checksum(b""), 0);
    assert_eq!(Crc32c::new().finalize(), 0);
  }

  #[test]
  fn test_zeros_and_ones() {
    assert_eq!(Crc32c::checksum(&[0u8; 32]), 0x8A91_36AA);
    assert_eq!(Crc32c::checksum(&[0xFFu8; 32]), 0x62A8_AB43);
  }

  #[test]
  fn test_incremental() {
    let mut hasher = Crc32c::new();
    hasher.update(b"1234");
    hasher.update(b"");
    hasher.update(b"56789");
    assert_eq!(hasher.finalize(), 0xE306_9283);
  }

  #[test]
  fn test_incremental_across_threshold() {
    let data: Vec<u8> = (0..5000u32).map(|i| (i * 7 + 3) as u8).collect();
    let mut hasher = Crc32c::new();
    for chunk in data.chunks(611) {
      hasher.update(chunk);
    }
    assert_eq!(hasher.finalize(), Crc32c::checksum(&data));
  }

  #[test]
  fn test_resume() {
    let data = b"hello world";
    let (first, second) = data.split_at(6);

    let mut hasher = Crc32c::resume(Crc32c::checksum(first));
    hasher.update(second);

    assert_eq!(hasher.finalize(), Crc32c::checksum(data));
  }

  #[test]
  fn test_reset_returns_to_resume_point() {
    let mut hasher = Crc32c::resume(Crc32c::checksum(b"1234"));
    hasher.update(b"garbage");
    hasher.reset();
    hasher.update(b"56789");
    assert_eq!(hasher.finalize(), 0xE306_9283);
  }

  #[test]
  fn test_finalize_is_idempotent() {
    let mut hasher = Crc32c::new();
    hasher.update(b"1234");
    assert_eq!(hasher.finalize(), hasher.finalize());
    assert_eq!(hasher.state(), hasher.finalize());
    hasher.update(b"56789");
    assert_eq!(hasher.finalize(), 0xE306_9283);
  }

  #[test]
  fn test_clone() {
    let mut hasher = Crc32c::new();
    hasher.update(b"1234");

    let mut clone = hasher.clone();
    hasher.update(b"56789");
    clone.update(b"56789");

    assert_eq!(hasher.finalize(), clone.finalize());
  }

  #[test]
  fn test_trait_impl() {
    fn check_trait<T: Checksum>() {}
    fn check_combine<T: ChecksumCombine>() {}

    check_trait::<Crc32c>();
    check_combine::<Crc32c>();

    assert_eq!(<Crc32c as Checksum>::checksum_vectored(&[b"1234", b"567", b"89"]), 0xE306_9283);
    assert_eq!(<Crc32c as Checksum>::with_initial(0).finalize(), 0);
  }

  #[test]
  #[cfg(feature = "std")]
  fn test_update_io_slices_matches_checksum() {
    use std::io::IoSlice;

    let data: Vec<u8> = (0..3000u32).map(|i| (i ^ (i >> 5)) as u8).collect();
    let (a, rest) = data.split_at(17);
    let (b, c) = rest.split_at(1200);

    let mut hasher = Crc32c::new();
    hasher.update_io_slices(&[IoSlice::new(a), IoSlice::new(&[]), IoSlice::new(b), IoSlice::new(c)]);
    assert_eq!(hasher.finalize(), Crc32c::checksum(&data));
  }

  #[test]
  #[cfg(feature = "std")]
  fn test_io_write() {
    use std::io::Write;

    let mut hasher = Crc32c::new();
    hasher.write_all(b"12345").unwrap();
    hasher.write_all(b"6789").unwrap();
    hasher.flush().unwrap();
    assert_eq!(hasher.finalize(), 0xE306_9283);
  }
}

//! Bit-at-a-time CRC-32C, the correctness oracle.
//!
//! This mirrors the mathematical definition directly: shift the reflected
//! register one bit at a time, conditionally XORing the polynomial. It has no
//! tables and no slicing, so it shares no code with the engines it checks.
//!
//! It is intentionally slow (~8 operations per bit). Use it for tests,
//! fuzzing and generating expected values.

// SAFETY: All array indexing uses bounded loop indices (0..data.len()).
// Clippy cannot prove this in const fn contexts, but bounds are statically guaranteed.
#![allow(clippy::indexing_slicing)]

use crate::constants::{CHECK, INIT, POLYNOMIAL};

/// Bitwise CRC-32C update of the raw register.
///
/// `crc` is the register value (callers apply init/xorout themselves).
#[must_use]
pub const fn crc32c_bitwise(crc: u32, data: &[u8]) -> u32 {
  let mut crc = crc;
  let mut i: usize = 0;
  while i < data.len() {
    crc ^= data[i] as u32;
    let mut bit: u32 = 0;
    while bit < 8 {
      crc = if crc & 1 != 0 { (crc >> 1) ^ POLYNOMIAL } else { crc >> 1 };
      bit += 1;
    }
    i += 1;
  }
  crc
}

/// Finalized CRC-32C of `data` (init and xorout `0xFFFFFFFF`).
#[must_use]
pub const fn crc32c_checksum(data: &[u8]) -> u32 {
  crc32c_bitwise(INIT, data) ^ INIT
}

const _: () = assert!(crc32c_checksum(b"123456789") == CHECK);
const _: () = assert!(crc32c_checksum(b"") == 0);

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_check_value() {
    assert_eq!(crc32c_checksum(b"123456789"), 0xE306_9283);
  }

  #[test]
  fn test_single_byte() {
    assert_eq!(crc32c_checksum(&[0x00]), 0x527D_5351);
  }

  #[test]
  fn test_known_vectors() {
    // RFC 3720 (iSCSI) appendix B.4 test patterns.
    assert_eq!(crc32c_checksum(&[0u8; 32]), 0x8A91_36AA);
    assert_eq!(crc32c_checksum(&[0xFFu8; 32]), 0x62A8_AB43);

    let mut ascending = [0u8; 32];
    for (i, b) in ascending.iter_mut().enumerate() {
      *b = i as u8;
    }
    assert_eq!(crc32c_checksum(&ascending), 0x46DD_794E);

    let mut descending = [0u8; 32];
    for (i, b) in descending.iter_mut().enumerate() {
      *b = 31 - i as u8;
    }
    assert_eq!(crc32c_checksum(&descending), 0x113F_DB5C);
  }

  #[test]
  fn test_register_is_linear_in_split() {
    let data = b"the quick brown fox jumps over the lazy dog";
    let whole = crc32c_bitwise(INIT, data);
    for split in 0..=data.len() {
      let (a, b) = data.split_at(split);
      assert_eq!(crc32c_bitwise(crc32c_bitwise(INIT, a), b), whole);
    }
  }
}

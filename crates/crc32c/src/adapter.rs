//! The primitive step contract consumed by the parallel engine.
//!
//! An adapter supplies four "append these bytes to the CRC stream" steps and
//! a carryless multiply. The engine is generic over the adapter and is
//! monomorphised once per hardware target, so the steps inline into the
//! engine's loop.

/// Primitive CRC-32C operations for one hardware target.
///
/// Every step takes the current reflected register and `k` new input bytes,
/// given as the little-endian integer of those bytes, and returns the register
/// after folding them in. Any sequence of steps must reach the same register
/// as folding the same bytes one at a time; the parallel engine relies on this
/// to regroup input freely.
///
/// Adapters are `Copy` tokens. Hardware adapters can only be obtained after
/// the CPU has been checked for the instructions they use, so holding a value
/// proves the steps are safe to execute.
///
/// A wrong implementation produces wrong checksums, never undefined behaviour:
/// the engine itself is safe code.
pub trait StepAdapter: Copy {
  /// Human-readable backend name (e.g. `"x86_64/sse4.2"`).
  const NAME: &'static str;

  /// Fold one byte.
  fn step1(self, crc: u32, data: u8) -> u32;

  /// Fold two bytes.
  fn step2(self, crc: u32, data: u16) -> u32;

  /// Fold four bytes.
  fn step4(self, crc: u32, data: u32) -> u32;

  /// Fold eight bytes.
  fn step8(self, crc: u32, data: u64) -> u32;

  /// Carryless (GF(2)) 32x32 -> 64 bit multiply of the raw bit patterns.
  ///
  /// Used only to recombine partial accumulators, never to extend a stream.
  fn clmul(self, a: u32, b: u32) -> u64;
}

#[cfg(test)]
pub(crate) mod tests {
  //! Contract checks shared by every adapter's test module.

  extern crate std;

  use super::StepAdapter;
  use crate::{gf2, reference::crc32c_bitwise};

  fn gen_bytes(len: usize, seed: u64) -> std::vec::Vec<u8> {
    let mut x = seed | 1;
    (0..len)
      .map(|_| {
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        (x as u8).wrapping_add((x >> 8) as u8)
      })
      .collect()
  }

  /// Assert that `steps` honours the adapter contract.
  pub(crate) fn check_contract<A: StepAdapter>(steps: A) {
    let inits = [0u32, 0xFFFF_FFFF, 0x0123_4567, 0x89AB_CDEF];
    let data = gen_bytes(64, 0x9E37_79B9_7F4A_7C15);

    for &crc in &inits {
      for (i, &b) in data.iter().enumerate() {
        assert_eq!(steps.step1(crc, b), crc32c_bitwise(crc, &[b]), "{} step1 at {i}", A::NAME);
      }
      for chunk in data.chunks_exact(2) {
        let v = u16::from_le_bytes([chunk[0], chunk[1]]);
        assert_eq!(steps.step2(crc, v), crc32c_bitwise(crc, chunk), "{} step2", A::NAME);
      }
      for chunk in data.chunks_exact(4) {
        let v = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        assert_eq!(steps.step4(crc, v), crc32c_bitwise(crc, chunk), "{} step4", A::NAME);
      }
      for chunk in data.chunks_exact(8) {
        let mut word = [0u8; 8];
        word.copy_from_slice(chunk);
        let v = u64::from_le_bytes(word);
        assert_eq!(steps.step8(crc, v), crc32c_bitwise(crc, chunk), "{} step8", A::NAME);
      }
    }

    let operands = [0u32, 1, 2, 0x8000_0000, 0xFFFF_FFFF, 0x82F6_3B78, 0xDEAD_BEEF];
    for &a in &operands {
      for &b in &operands {
        assert_eq!(steps.clmul(a, b), gf2::clmul32(a, b), "{} clmul({a:#x}, {b:#x})", A::NAME);
      }
    }
  }
}

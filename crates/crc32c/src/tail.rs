//! Leading-alignment and trailing-remainder processing.
//!
//! Both helpers consume bytes from one end of the input with the widest step
//! that fits, and never read past the end of the slice.

use crate::adapter::StepAdapter;

/// Consume leading bytes until `data` starts on an 8-byte boundary.
///
/// Steps ascend 1 → 2 → 4, each taken only if the address needs it. Stops
/// early if the input runs out. Returns the updated register and the
/// unconsumed (aligned) remainder.
#[inline(always)]
pub(crate) fn align_head<A: StepAdapter>(steps: A, mut crc: u32, mut data: &[u8]) -> (u32, &[u8]) {
  if data.as_ptr() as usize & 1 != 0 {
    let Some((&byte, rest)) = data.split_first() else {
      return (crc, data);
    };
    crc = steps.step1(crc, byte);
    data = rest;
  }

  if data.as_ptr() as usize & 2 != 0 {
    let Some((pair, rest)) = data.split_first_chunk::<2>() else {
      return (crc, data);
    };
    crc = steps.step2(crc, u16::from_le_bytes(*pair));
    data = rest;
  }

  if data.as_ptr() as usize & 4 != 0 {
    let Some((quad, rest)) = data.split_first_chunk::<4>() else {
      return (crc, data);
    };
    crc = steps.step4(crc, u32::from_le_bytes(*quad));
    data = rest;
  }

  (crc, data)
}

/// Consume all of `data`: doublewords first, then at most one 4-, 2- and
/// 1-byte step, in that order.
#[inline(always)]
pub(crate) fn fold_tail<A: StepAdapter>(steps: A, mut crc: u32, data: &[u8]) -> u32 {
  let (words, mut rest) = data.as_chunks::<8>();
  for word in words {
    crc = steps.step8(crc, u64::from_le_bytes(*word));
  }

  if let Some((quad, tail)) = rest.split_first_chunk::<4>() {
    crc = steps.step4(crc, u32::from_le_bytes(*quad));
    rest = tail;
  }

  if let Some((pair, tail)) = rest.split_first_chunk::<2>() {
    crc = steps.step2(crc, u16::from_le_bytes(*pair));
    rest = tail;
  }

  if let Some(&byte) = rest.first() {
    crc = steps.step1(crc, byte);
  }

  crc
}

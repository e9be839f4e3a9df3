extern crate std;

use std::vec::Vec;

use crc_fast::CrcAlgorithm;
use proptest::prelude::*;

use super::*;
use crate::{constants::INIT, reference::crc32c_bitwise};

/// Copy `data` into a fresh buffer so that it starts `offset` bytes past an
/// 8-byte boundary. Returns the buffer and the start index.
fn misaligned_copy(data: &[u8], offset: usize) -> (Vec<u8>, usize) {
  let mut buf = std::vec![0u8; data.len() + 16];
  let start = buf.as_ptr().align_offset(8) + offset;
  buf[start..start + data.len()].copy_from_slice(data);
  (buf, start)
}

proptest! {
  #[test]
  fn compute_matches_bitwise_oracle(data in proptest::collection::vec(any::<u8>(), 0..=4096), seed in any::<u32>()) {
    prop_assert_eq!(compute(seed, &data), crc32c_bitwise(seed, &data));
  }

  #[test]
  fn portable_engine_matches_sequential(data in proptest::collection::vec(any::<u8>(), 0..=4096), seed in any::<u32>()) {
    prop_assert_eq!(portable::compute_parallel(seed, &data), portable::compute(seed, &data));
  }

  #[test]
  fn compute_is_incremental(
    data in proptest::collection::vec(any::<u8>(), 0..=4096),
    split in any::<usize>(),
    seed in any::<u32>()
  ) {
    let split = split % (data.len() + 1);
    let (a, b) = data.split_at(split);
    prop_assert_eq!(compute(compute(seed, a), b), compute(seed, &data));
  }

  #[test]
  fn compute_is_alignment_independent(
    data in proptest::collection::vec(any::<u8>(), 0..=2048),
    offset in 0usize..8
  ) {
    let (buf, start) = misaligned_copy(&data, offset);
    let shifted = &buf[start..start + data.len()];
    prop_assert_eq!(shifted.as_ptr() as usize % 8, offset);
    prop_assert_eq!(compute(INIT, shifted), compute(INIT, &data));
  }

  #[test]
  fn crc32c_matches_crc_fast(data in proptest::collection::vec(any::<u8>(), 0..=4096)) {
    let reference = crc_fast::checksum(CrcAlgorithm::Crc32Iscsi, &data) as u32;
    prop_assert_eq!(Crc32c::checksum(&data), reference);
  }

  #[test]
  fn crc32c_streaming_matches_crc_fast(data in proptest::collection::vec(any::<u8>(), 0..=4096), chunk in 1usize..=701) {
    let mut ours = Crc32c::new();
    let mut reference = crc_fast::Digest::new(CrcAlgorithm::Crc32Iscsi);

    for part in data.chunks(chunk) {
      ours.update(part);
      reference.update(part);
    }

    prop_assert_eq!(ours.finalize(), reference.finalize() as u32);
  }

  #[test]
  fn crc32c_streaming_resume_and_combine(
    data in proptest::collection::vec(any::<u8>(), 0..=4096),
    split in any::<usize>(),
    chunk in 1usize..=257
  ) {
    let split = split % (data.len() + 1);
    let (a, b) = data.split_at(split);

    let oneshot = Crc32c::checksum(&data);

    let mut hasher = Crc32c::new();
    for part in a.chunks(chunk) {
      hasher.update(part);
    }
    for part in b.chunks(chunk) {
      hasher.update(part);
    }
    prop_assert_eq!(hasher.finalize(), oneshot);

    let crc_a = Crc32c::checksum(a);
    let crc_b = Crc32c::checksum(b);
    prop_assert_eq!(Crc32c::combine(crc_a, crc_b, b.len()), oneshot);

    let mut resumed = Crc32c::resume(crc_a);
    resumed.update(b);
    prop_assert_eq!(resumed.finalize(), oneshot);
  }

  #[test]
  fn crc32c_combine_matches_crc_fast(data in proptest::collection::vec(any::<u8>(), 0..=4096), split in any::<usize>()) {
    let split = split % (data.len() + 1);
    let (a, b) = data.split_at(split);

    let combined = Crc32c::combine(Crc32c::checksum(a), Crc32c::checksum(b), b.len());

    let ref_crc_a = crc_fast::checksum(CrcAlgorithm::Crc32Iscsi, a);
    let ref_crc_b = crc_fast::checksum(CrcAlgorithm::Crc32Iscsi, b);
    let ref_combined = crc_fast::checksum_combine(CrcAlgorithm::Crc32Iscsi, ref_crc_a, ref_crc_b, b.len() as u64) as u32;

    prop_assert_eq!(combined, ref_combined);
  }

  #[test]
  fn combine_shift_composes(crc_a in any::<u32>(), len_b in 0u64..(1 << 40)) {
    // `crc_b = 0` isolates the shift, which must compose additively.
    let len_b = len_b as usize;
    let shifted = Crc32c::combine(crc_a, 0, len_b);
    let split = len_b / 2;
    let twice = Crc32c::combine(Crc32c::combine(crc_a, 0, split), 0, len_b - split);
    prop_assert_eq!(shifted, twice);
  }
}

//! Streaming API fuzz target.
//!
//! Checks that for any input and any chunking:
//! - streaming updates match the one-shot checksum
//! - resuming from a finalized prefix matches
//! - combining prefix and suffix checksums matches

#![no_main]

use arbitrary::Arbitrary;
use crc32c::{ChecksumCombine, Crc32c};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
  data: Vec<u8>,
  split_point: usize,
  chunk: u16,
}

fuzz_target!(|input: Input| {
  let data = &input.data;
  let split = input.split_point % (data.len() + 1);
  let chunk = usize::from(input.chunk).max(1);

  let oneshot = Crc32c::checksum(data);

  let mut hasher = Crc32c::new();
  for part in data.chunks(chunk) {
    hasher.update(part);
  }
  assert_eq!(hasher.finalize(), oneshot, "chunked mismatch (chunk={chunk})");

  let (a, b) = data.split_at(split);
  let crc_a = Crc32c::checksum(a);

  let mut resumed = Crc32c::resume(crc_a);
  resumed.update(b);
  assert_eq!(resumed.finalize(), oneshot, "resume mismatch at {split}");

  let crc_b = Crc32c::checksum(b);
  assert_eq!(<Crc32c as ChecksumCombine>::combine(crc_a, crc_b, b.len()), oneshot, "combine mismatch at {split}");
});

//! Differential fuzz target: every backend against the bitwise oracle.
//!
//! The input is placed at a fuzzer-chosen offset from an 8-byte boundary so
//! that the alignment prologue is exercised for every residue.

#![no_main]

use arbitrary::Arbitrary;
use crc32c::{dispatch, portable, reference::crc32c_bitwise};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
  seed: u32,
  offset: u8,
  data: Vec<u8>,
}

fuzz_target!(|input: Input| {
  let offset = usize::from(input.offset % 8);
  let len = input.data.len();

  let mut buf = vec![0u8; len + 16];
  let start = buf.as_ptr().align_offset(8) + offset;
  buf[start..start + len].copy_from_slice(&input.data);
  let data = &buf[start..start + len];

  let expected = crc32c_bitwise(input.seed, data);

  assert_eq!(portable::compute(input.seed, data), expected, "portable sequential");
  assert_eq!(portable::compute_parallel(input.seed, data), expected, "portable parallel");
  assert_eq!(crc32c::compute(input.seed, data), expected, "dispatch ({})", crc32c::selected_backend());

  if let Some(hw) = dispatch::hardware() {
    assert_eq!((hw.func)(input.seed, data), expected, "{}", hw.name);
  }
});

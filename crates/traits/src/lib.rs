//! Checksum traits for the crc32c workspace.
//!
//! The traits here describe what a streaming checksum looks like to callers,
//! independent of how the bytes are actually folded in. They are `no_std` and
//! have no dependencies.
//!
//! | Trait | Purpose |
//! |-------|---------|
//! | [`Checksum`] | One-shot and incremental checksum computation |
//! | [`ChecksumCombine`] | Merge checksums of adjacent buffers without rereading them |
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod checksum;

pub use checksum::{Checksum, ChecksumCombine};

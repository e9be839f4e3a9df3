//! CRC-32C (Castagnoli) constants.
//!
//! Polynomial: 0x1EDC6F41 (reflected: 0x82F63B78)
//! Used by: iSCSI, SCTP, Btrfs, ext4, RocksDB, PostgreSQL

/// CRC-32C polynomial in reflected (bit-reversed) form.
///
/// The register is processed LSB-first, so every table and bitwise step
/// uses this form.
pub const POLYNOMIAL: u32 = 0x82F6_3B78;

/// CRC-32C polynomial in normal form.
pub const POLYNOMIAL_NORMAL: u32 = 0x1EDC_6F41;

/// Normal-form polynomial with the explicit x^32 term, for GF(2) reduction.
pub const POLY_FULL: u64 = 0x1_1EDC_6F41;

/// Standard initial register value and final XOR.
pub const INIT: u32 = 0xFFFF_FFFF;

/// Check value for `b"123456789"` (init and xorout `0xFFFFFFFF`).
pub const CHECK: u32 = 0xE306_9283;

/// Width of the bulk step, in bytes.
pub const STEP_BYTES: usize = 8;

/// Number of independent accumulators interleaved by the parallel engine.
pub const STREAMS: usize = 3;

/// Bytes consumed per inner-loop step: one doubleword from each stream.
pub const BYTES_PER_ITER: usize = STREAMS * STEP_BYTES;

/// Inputs shorter than this skip the parallel engine entirely.
///
/// Below this size the fixed cost of aligning and recombining outweighs the
/// latency hidden by running three chains. It also guarantees every
/// iteration has at least `MIN_PARALLEL_LEN / BYTES_PER_ITER` doublewords
/// per stream.
pub const MIN_PARALLEL_LEN: usize = 600;

/// Largest per-stream block, in doublewords.
///
/// One iteration covers at most `MAX_BLOCK_LEN * BYTES_PER_ITER` = 8400
/// bytes. This is also the length of the combine-constant table.
pub const MAX_BLOCK_LEN: usize = 350;

const _: () = assert!(MIN_PARALLEL_LEN >= BYTES_PER_ITER);
const _: () = assert!(MAX_BLOCK_LEN * BYTES_PER_ITER >= MIN_PARALLEL_LEN);
const _: () = assert!(POLYNOMIAL_NORMAL.reverse_bits() == POLYNOMIAL);
const _: () = assert!(POLY_FULL == (1u64 << 32) | POLYNOMIAL_NORMAL as u64);

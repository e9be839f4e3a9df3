//! GF(2) polynomial arithmetic modulo the Castagnoli polynomial.
//!
//! Values here are in *normal* form: bit `i` is the coefficient of `x^i`.
//! The CRC register is reflected, so callers convert with
//! [`u32::reverse_bits`] at the boundary.
//!
//! Everything is `const fn` so the combine-constant table can be built at
//! compile time.

use crate::constants::POLY_FULL;

/// Carryless 32x32 -> 64 bit multiply.
///
/// Branchless schoolbook multiply; bit 63 of the result is always clear.
#[inline]
#[must_use]
pub const fn clmul32(a: u32, b: u32) -> u64 {
  let a = a as u64;
  let mut product: u64 = 0;
  let mut i = 0;
  while i < 32 {
    let mask = 0u64.wrapping_sub(((b >> i) & 1) as u64);
    product ^= (a << i) & mask;
    i += 1;
  }
  product
}

/// Reduce a polynomial of degree < 64 modulo `P(x)`.
#[inline]
#[must_use]
pub const fn reduce64(mut value: u64) -> u32 {
  let mut bit = 63u32;
  while bit >= 32 {
    if (value >> bit) & 1 != 0 {
      value ^= POLY_FULL << (bit - 32);
    }
    bit -= 1;
  }
  value as u32
}

/// `a * b mod P(x)`.
#[inline]
#[must_use]
pub const fn mul_mod(a: u32, b: u32) -> u32 {
  reduce64(clmul32(a, b))
}

/// `base^exp mod P(x)` by square-and-multiply.
#[must_use]
pub const fn pow_mod(base: u32, exp: u64) -> u32 {
  let mut result: u32 = 1;
  let mut base = base;
  let mut exp = exp;
  while exp > 0 {
    if exp & 1 != 0 {
      result = mul_mod(result, base);
    }
    base = mul_mod(base, base);
    exp >>= 1;
  }
  result
}

/// `x^n mod P(x)`.
#[inline]
#[must_use]
pub const fn xpow_mod(n: u64) -> u32 {
  if n < 32 {
    return 1u32 << n;
  }
  pow_mod(2, n)
}

/// Advance a reflected CRC register by `8 * len` zero bits.
///
/// Equivalent to folding `len` zero bytes into `crc`, in O(log len).
#[must_use]
pub const fn shift_bytes(crc: u32, len: usize) -> u32 {
  // x^8 in normal form.
  let factor = pow_mod(1 << 8, len as u64);
  mul_mod(crc.reverse_bits(), factor).reverse_bits()
}

/// 2^32, one past the largest value a u32 accumulator can hold.
pub const U32_RANGE: i64 = 1 << 32;

/// Reduce an intermediate value into the unsigned 32-bit range.
///
/// Every accumulator update goes through here so the wraparound happens
/// in exactly one place. This is a euclidean reduction modulo 2^32, so a
/// negative value maps to its two's complement bit pattern and any overflow
/// is discarded.
#[inline(always)]
pub fn unsigned(value: i64) -> u32 {
    value.rem_euclid(U32_RANGE) as u32
}

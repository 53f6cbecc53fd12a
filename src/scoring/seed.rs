//! Seeded pseudo-random values.
//!
//! These are fingerprints, not randomness: the same seed string yields the
//! same value on every platform, bit for bit.

/// 32-bit rolling multiply-add hash over the UTF-16 code units of `seed`.
///
/// `h = h * 31 + unit` with signed 32-bit wraparound, reinterpreted as `u32`.
pub fn seed_hash(seed: &str) -> u32 {
    let mut h: i32 = 0;
    for unit in seed.encode_utf16() {
        h = h.wrapping_mul(31).wrapping_add(i32::from(unit));
    }
    h as u32
}

/// Map `seed` into `[min, max]` and round to two decimals.
pub fn seeded_value(seed: &str, min: f64, max: f64) -> f64 {
    let unit = f64::from(seed_hash(seed)) / f64::from(u32::MAX);
    round_hundredths(unit * (max - min) + min)
}

/// Round to two decimal places using the exact binary value of `value`,
/// with exact ties going away from zero.
pub fn round_hundredths(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    if value < 0.0 {
        return -round_hundredths(-value);
    }

    let bits = value.to_bits();
    let exp_bits = ((bits >> 52) & 0x7ff) as i32;
    let fraction = bits & ((1u64 << 52) - 1);
    let (mantissa, exp) = if exp_bits == 0 {
        (fraction, -1074)
    } else {
        (fraction | (1u64 << 52), exp_bits - 1075)
    };

    // value = mantissa * 2^exp
    if exp >= 0 {
        return value;
    }
    let shift = (-exp) as u32;
    if shift > 60 {
        // value < 2^-8, well below 0.005
        return 0.0;
    }

    let scaled = u128::from(mantissa) * 100;
    let mut hundredths = scaled >> shift;
    let remainder = scaled - (hundredths << shift);
    if remainder >= 1u128 << (shift - 1) {
        hundredths += 1;
    }
    hundredths as f64 / 100.0
}

//! Sine-based hashing used to derive reproducible "random" values
//!
//! These functions must produce identical output on every platform so that a
//! layout computed ahead of time matches the one computed at display time.

/// Fractional part of a scaled sine, in `[0, 1)`
///
/// Pure function of its inputs. Each `offset` acts as an independent channel
/// for the same `seed`.
pub fn seeded_random(seed: f64, offset: f64) -> f64 {
    let x = seed.mul_add(9999.0, offset * 12345.0).sin() * 10000.0;
    let fraction = x - x.floor();
    // floor() of a tiny negative value can round the fraction up to exactly 1.0
    if fraction >= 1.0 { 0.0 } else { fraction }
}

/// 32-bit rolling string hash normalized to roughly `[0, 1]`
///
/// Walks UTF-16 code units with `hash * 31 + unit` in wrapping 32-bit
/// arithmetic, then divides the absolute value by `i32::MAX`.
pub fn hash_string(text: &str) -> f64 {
    let hash = text.encode_utf16().fold(0_i32, |hash, unit| {
        (hash << 5).wrapping_sub(hash).wrapping_add(i32::from(unit))
    });
    i64::from(hash).abs() as f64 / f64::from(i32::MAX)
}

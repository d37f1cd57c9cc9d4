use rand::Rng;
use std::fmt::Display;

pub const DEFAULT_CLAMP_MIN: f64 = 0.0;
pub const DEFAULT_CLAMP_MAX: f64 = 100.0;

/// Bounds `value` to `[min, max]`.
pub fn clamp<T: PartialOrd>(value: T, min: T, max: T) -> T {
    match value {
        below if below < min => min,
        above if above > max => max,
        within => within,
    }
}

/// [`clamp`] with the percentage range `[0, 100]`.
pub fn clamp_to_default_range(value: f64) -> f64 {
    clamp(value, DEFAULT_CLAMP_MIN, DEFAULT_CLAMP_MAX)
}

pub fn format_percent_string(number: impl Display) -> String {
    format!("{number}%")
}

/// Random integer in `[ceil(min), floor(max)]`, or `None` if that range is empty.
pub fn gen_random_in_range(min: f64, max: f64) -> Option<i64> {
    gen_random_in_range_with(&mut rand::thread_rng(), min, max)
}

pub fn gen_random_in_range_with<R: Rng + ?Sized>(rng: &mut R, min: f64, max: f64) -> Option<i64> {
    let (low, high) = (min.ceil(), max.floor());
    match (low, high) {
        (low, high) if low.is_finite() && high.is_finite() && low <= high => {
            Some(rng.gen_range(low as i64..=high as i64))
        }
        _ => None,
    }
}

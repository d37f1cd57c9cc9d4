/// Width over height.
pub fn get_aspect_ratio(height: f64, width: f64) -> f64 {
    width / height
}

/// Scales `height` by the aspect ratio and rounds to the nearest pixel,
/// i.e. the width that pairs with `height`.
pub fn get_height_from_ar(height: f64, ar: f64) -> f64 {
    (height * ar).round()
}

/// Divides `width` by the aspect ratio and rounds, i.e. the height that pairs
/// with `width`.
pub fn get_width_from_ar(width: f64, ar: f64) -> f64 {
    (width / ar).round()
}

/// Returns true if no components of `a` and `b` differ by more than
/// `tolerance` times the largest absolute value found in either slice.
///
/// `tolerance` must lie in `[0, 1]` and the slices must have equal length,
/// otherwise the slices are reported as not matching.
pub fn match_scaled(a: &[f64], b: &[f64], tolerance: f64) -> bool {
    if !(0.0..=1.0).contains(&tolerance) || a.len() != b.len() {
        return false;
    }
    let mut max_abs_value: f64 = 0.0;
    let mut max_difference: f64 = 0.0;
    for (x, y) in a.iter().zip(b) {
        max_abs_value = max_abs_value.max(x.abs()).max(y.abs());
        max_difference = max_difference.max((x - y).abs());
    }
    max_difference <= tolerance * max_abs_value
}

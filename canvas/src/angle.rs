//! Angle arithmetic on the circular right-ascension domain.

#[cfg(test)]
#[path = "angle_test.rs"]
mod angle_test;

/// Circular mean of angles in degrees, normalized into `[0, 360)`.
///
/// Each angle is treated as a unit vector and the vectors are summed, so the
/// mean of 359° and 1° is 0°, not 180°. Returns `None` for an empty input.
///
/// When the vectors cancel (e.g. exactly antipodal inputs) the result is
/// whatever `atan2` yields for the near-zero resultant, typically 0°. That
/// mean is geometrically undefined and is not special-cased.
#[must_use]
pub fn circular_mean<I>(angles_deg: I) -> Option<f64>
where
    I: IntoIterator<Item = f64>,
{
    let mut sum_sin = 0.0;
    let mut sum_cos = 0.0;
    let mut count = 0_usize;
    for deg in angles_deg {
        let (sin, cos) = deg.to_radians().sin_cos();
        sum_sin += sin;
        sum_cos += cos;
        count += 1;
    }
    if count == 0 {
        return None;
    }
    Some(normalize_deg(sum_sin.atan2(sum_cos).to_degrees()))
}

/// Normalize an angle in degrees into `[0, 360)`.
#[must_use]
pub fn normalize_deg(deg: f64) -> f64 {
    let wrapped = deg.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs.
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Shortest signed angular distance from `from` to `to`.
///
/// For inputs in `[0, 360)` the result lies in `[-180, 180]`.
#[must_use]
pub fn wrap_delta(to: f64, from: f64) -> f64 {
    let mut d = to - from;
    if d > 180.0 {
        d -= 360.0;
    }
    if d < -180.0 {
        d += 360.0;
    }
    d
}

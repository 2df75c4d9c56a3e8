//! Conversions between hue angles and unit-circle coordinates

/// Horizontal component of the unit vector at `degrees`
pub fn degrees_to_x(degrees: f64) -> f64 {
    degrees.to_radians().cos()
}

/// Vertical component of the unit vector at `degrees`
pub fn degrees_to_y(degrees: f64) -> f64 {
    degrees.to_radians().sin()
}

/// Angle of the vector `(x, y)` in degrees, normalised to `[0, 360)`
///
/// The zero vector has no direction and maps to 0.
pub fn xy_to_degrees(x: f64, y: f64) -> f64 {
    if x == 0.0 && y == 0.0 {
        return 0.0;
    }
    let degrees = y.atan2(x).to_degrees().rem_euclid(360.0);
    // rem_euclid rounds tiny negative angles up to exactly 360
    if degrees >= 360.0 { 0.0 } else { degrees }
}

/// Shortest angular separation between two hues, in `[0, 180]`
pub fn angular_distance(a: f64, b: f64) -> f64 {
    let difference = (a - b).rem_euclid(360.0);
    difference.min(360.0 - difference)
}

//! Tests for hue projection onto the unit circle and back

#[cfg(test)]
mod tests {
    use parttree::color::hue::{angular_distance, degrees_to_x, degrees_to_y, xy_to_degrees};

    // Tests projection of the cardinal angles
    // Verified by swapping sine and cosine
    #[test]
    fn test_projection_of_cardinal_angles() {
        assert!((degrees_to_x(0.0) - 1.0).abs() < 1e-12);
        assert!(degrees_to_y(0.0).abs() < 1e-12);
        assert!(degrees_to_x(90.0).abs() < 1e-12);
        assert!((degrees_to_y(90.0) - 1.0).abs() < 1e-12);
        assert!((degrees_to_x(180.0) + 1.0).abs() < 1e-12);
    }

    // Tests conversion back to degrees lands in [0, 360)
    // Verified by returning raw atan2 output
    #[test]
    fn test_xy_to_degrees_normalises_range() {
        assert!(xy_to_degrees(1.0, 0.0).abs() < 1e-12);
        assert!((xy_to_degrees(0.0, 1.0) - 90.0).abs() < 1e-12);
        assert!((xy_to_degrees(-1.0, 0.0) - 180.0).abs() < 1e-12);
        assert!((xy_to_degrees(0.0, -1.0) - 270.0).abs() < 1e-12);

        for degrees in [0.0, 1.0, 45.0, 179.5, 181.0, 300.0, 359.0] {
            let back = xy_to_degrees(degrees_to_x(degrees), degrees_to_y(degrees));
            assert!((0.0..360.0).contains(&back), "{back} out of range");
            assert!(
                angular_distance(back, degrees) < 1e-9,
                "{degrees} came back as {back}"
            );
        }
    }

    // Tests the zero vector maps to hue zero
    // Verified by removing the zero-vector guard
    #[test]
    fn test_zero_vector_maps_to_zero() {
        assert!(xy_to_degrees(0.0, 0.0).abs() < f64::EPSILON);
    }

    // Tests averaging projections across the seam stays near zero
    // Verified by averaging raw degree values instead
    #[test]
    fn test_seam_average_is_near_zero() {
        let x = (degrees_to_x(359.0) + degrees_to_x(1.0)) / 2.0;
        let y = (degrees_to_y(359.0) + degrees_to_y(1.0)) / 2.0;
        let mean = xy_to_degrees(x, y);

        assert!(angular_distance(mean, 0.0) < 1e-9, "got {mean}");
    }

    // Tests angular distance takes the short way round
    // Verified by returning the absolute difference
    #[test]
    fn test_angular_distance_is_shortest_arc() {
        assert!((angular_distance(10.0, 350.0) - 20.0).abs() < 1e-12);
        assert!((angular_distance(350.0, 10.0) - 20.0).abs() < 1e-12);
        assert!((angular_distance(0.0, 180.0) - 180.0).abs() < 1e-12);
        assert!(angular_distance(720.0, 0.0).abs() < 1e-12);
        assert!((angular_distance(90.0, 45.0) - 45.0).abs() < 1e-12);
    }
}

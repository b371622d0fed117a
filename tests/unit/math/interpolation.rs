//! Tests for natural cubic spline fitting and evaluation

#[cfg(test)]
mod tests {
    use wordshape::ErrorKind;
    use wordshape::math::interpolation::Spline;

    // Tests the spline passes through every knot
    // Verified by swapping the weights of the two neighbouring knots
    #[test]
    fn test_spline_hits_knots() {
        let knots = vec![(0.0, 3.0), (1.0, 7.0), (2.5, -1.0), (4.0, 10.0), (5.0, 2.0)];
        let spline = Spline::natural(knots.clone()).expect("Failed to fit spline");

        for (x, y) in knots {
            assert!((spline.evaluate(x) - y).abs() < 1e-9, "knot at x={x}");
        }
    }

    // Tests two knots reduce to linear interpolation
    // Verified by leaving curvature on the end knots
    #[test]
    fn test_spline_two_knots_linear() {
        let spline = Spline::natural(vec![(0.0, 0.0), (2.0, 10.0)]).expect("Failed to fit spline");
        assert!((spline.evaluate(0.5) - 2.5).abs() < 1e-9);
        assert!((spline.evaluate(1.0) - 5.0).abs() < 1e-9);
    }

    // Tests collinear knots reproduce the line between them
    // Verified by introducing a sign error in the slope change
    #[test]
    fn test_spline_collinear() {
        let knots = (0..6).map(|i| (f64::from(i), 2.0f64.mul_add(f64::from(i), 1.0))).collect();
        let spline = Spline::natural(knots).expect("Failed to fit spline");

        for step in 0..50 {
            let x = f64::from(step) * 0.1;
            assert!((spline.evaluate(x) - 2.0f64.mul_add(x, 1.0)).abs() < 1e-9);
        }
    }

    // Tests evaluation clamps outside the knot range
    // Verified by extrapolating the end segments
    #[test]
    fn test_spline_clamps() {
        let spline =
            Spline::natural(vec![(0.0, 1.0), (1.0, 4.0), (2.0, 2.0)]).expect("Failed to fit spline");
        assert!((spline.evaluate(-5.0) - 1.0).abs() < f64::EPSILON);
        assert!((spline.evaluate(9.0) - 2.0).abs() < f64::EPSILON);
    }

    // Tests values between knots stay near the data for smooth input
    // Verified by dropping the curvature term
    #[test]
    fn test_spline_smooth_between_knots() {
        let knots = (0..=8).map(|i| {
            let x = f64::from(i) * 0.25;
            (x, x * x)
        });
        let spline = Spline::natural(knots.collect()).expect("Failed to fit spline");

        let value = spline.evaluate(1.125);
        assert!((value - 1.125 * 1.125).abs() < 0.01);
    }

    // Tests invalid knot sets are rejected
    // Verified by accepting repeated x values
    #[test]
    fn test_spline_invalid_knots() {
        let single = Spline::natural(vec![(0.0, 1.0)]);
        assert!(matches!(single, Err(ref e) if e.kind() == ErrorKind::Computation));

        let repeated = Spline::natural(vec![(0.0, 1.0), (0.0, 2.0)]);
        assert!(matches!(repeated, Err(ref e) if e.kind() == ErrorKind::Computation));

        let decreasing = Spline::natural(vec![(1.0, 1.0), (0.5, 2.0), (2.0, 0.0)]);
        assert!(decreasing.is_err());
    }
}

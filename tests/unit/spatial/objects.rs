//! Tests for percentage-space geometry and object records

#[cfg(test)]
mod tests {
    use camoplace::PlacementError;
    use camoplace::spatial::objects::{check_margin, clamp_to_band, is_clear_of};
    use camoplace::spatial::{CandidateSpot, PercentPoint, PlacedObject};

    fn object_at(x: f64, y: f64) -> PlacedObject {
        PlacedObject {
            id: format!("obj-{x}-{y}"),
            x_percent: x,
            y_percent: y,
            rotation_degrees: 0.0,
            scale: 0.3,
            opacity: 0.4,
            hue_shift_degrees: 0.0,
            variant_index: 0,
            variant: String::new(),
            found: false,
        }
    }

    #[test]
    fn test_distance() {
        let a = PercentPoint::new(10.0, 10.0);
        let b = PercentPoint::new(13.0, 14.0);
        assert!((a.distance_to(b) - 5.0).abs() < 1e-12);
        assert!((b.distance_to(a) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_clamp_to_band() {
        assert!((clamp_to_band(3.0, 5.0) - 5.0).abs() < f64::EPSILON);
        assert!((clamp_to_band(97.5, 5.0) - 95.0).abs() < f64::EPSILON);
        assert!((clamp_to_band(42.0, 5.0) - 42.0).abs() < f64::EPSILON);

        let clamped = PercentPoint::new(-1.0, 120.0).clamped_to_band(5.0);
        assert!(clamped.within_band(5.0));
    }

    // Margins leaving no band collapse to the centre rather than panicking
    #[test]
    fn test_clamp_to_band_with_oversized_margin() {
        assert!((clamp_to_band(10.0, 60.0) - 50.0).abs() < f64::EPSILON);
        assert!((clamp_to_band(90.0, 50.0) - 50.0).abs() < f64::EPSILON);
        assert!((clamp_to_band(30.0, f64::NAN) - 50.0).abs() < f64::EPSILON);

        let point = PercentPoint::new(3.0, 97.0).clamped_to_band(75.0);
        assert_eq!(point, PercentPoint::new(50.0, 50.0));
    }

    #[test]
    fn test_check_margin() {
        assert!(check_margin("margin", 0.0).is_ok());
        assert!(check_margin("margin", 5.0).is_ok());
        assert!(check_margin("margin", 49.9).is_ok());

        for margin in [50.0, 80.0, -0.5, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                check_margin("margin", margin),
                Err(PlacementError::InvalidParameter {
                    parameter: "margin",
                    ..
                })
            ));
        }
    }

    #[test]
    fn test_within_band_is_inclusive() {
        assert!(PercentPoint::new(5.0, 95.0).within_band(5.0));
        assert!(!PercentPoint::new(4.99, 50.0).within_band(5.0));
        assert!(!PercentPoint::new(50.0, 95.01).within_band(5.0));
    }

    // Exactly the minimum separation is allowed, anything closer is not
    #[test]
    fn test_is_clear_of_threshold() {
        let placed = vec![object_at(50.0, 50.0)];

        assert!(is_clear_of(PercentPoint::new(56.0, 50.0), &placed, 6.0));
        assert!(!is_clear_of(PercentPoint::new(55.9, 50.0), &placed, 6.0));
        assert!(is_clear_of(PercentPoint::new(10.0, 10.0), &[], 6.0));
    }

    #[test]
    fn test_positions() {
        let spot = CandidateSpot {
            x_percent: 12.0,
            y_percent: 34.0,
            blend_score: 1.2,
        };
        assert_eq!(spot.position(), PercentPoint::new(12.0, 34.0));
        assert_eq!(object_at(7.0, 8.0).position(), PercentPoint::new(7.0, 8.0));
    }
}

//! Tests for seed composition

#[cfg(test)]
mod tests {
    use camoplace::math::seed::{coarse_time_component, compose_seed, current_timestamp_ms};

    #[test]
    fn test_compose_seed_layout() {
        assert_eq!(compose_seed(6, 2, 1_700_000_012_345), 60_000 + 2_000 + 12_345);
        assert_eq!(compose_seed(1, 1, 0), 11_000);
    }

    // Only the last five digits of the millisecond clock matter
    #[test]
    fn test_time_component_is_coarse() {
        assert_eq!(coarse_time_component(1_234_567), 34_567);
        assert_eq!(
            compose_seed(3, 3, 100_000 + 42),
            compose_seed(3, 3, 200_000 + 42)
        );
        assert_ne!(compose_seed(3, 3, 42), compose_seed(3, 3, 43));
    }

    #[test]
    fn test_compose_seed_is_pure() {
        for level in [1, 50, 1_000] {
            for multiplier in 1..=3 {
                let first = compose_seed(level, multiplier, 987_654_321);
                let second = compose_seed(level, multiplier, 987_654_321);
                assert_eq!(first, second);
            }
        }
    }

    // Huge level indices wrap instead of overflowing
    #[test]
    fn test_compose_seed_wraps() {
        let seed = compose_seed(u32::MAX, 3, 99_999);
        let expected = u32::MAX
            .wrapping_mul(10_000)
            .wrapping_add(3_000)
            .wrapping_add(99_999);
        assert_eq!(seed, expected);
    }

    #[test]
    fn test_current_timestamp_is_after_epoch() {
        assert!(current_timestamp_ms() > 1_600_000_000_000);
    }
}

//! Tests for the linear congruential sequence generator

#[cfg(test)]
mod tests {
    use camoplace::math::SequenceGenerator;
    use camoplace::math::sequence::LCG_MODULUS;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::num::NonZeroU32;

    // Same seed, same stream, for arbitrary seeds and stream lengths
    #[test]
    fn test_identical_seeds_produce_identical_sequences() {
        let mut seeds = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let seed: u32 = seeds.random();
            let draws = seeds.random_range(1..500);
            let a: Vec<f64> = SequenceGenerator::new(seed).take(draws).collect();
            let b: Vec<f64> = SequenceGenerator::new(seed).take(draws).collect();
            assert_eq!(a, b, "seed {seed} diverged");
        }
    }

    #[test]
    fn test_first_draw_matches_recurrence() {
        let mut generator = SequenceGenerator::new(1);
        let expected = f64::from(9_301 + 49_297) / LCG_MODULUS as f64;
        assert!((generator.next_unit() - expected).abs() < 1e-12);
        assert_eq!(generator.state(), 58_598);
    }

    // Known values straight from the recurrence
    #[test]
    fn test_reference_states() {
        let mut generator = SequenceGenerator::new(0);
        generator.next_unit();
        assert_eq!(generator.state(), 49_297);
        generator.next_unit();
        assert_eq!(generator.state(), (49_297 * 9_301 + 49_297) % 233_280);
    }

    // Largest seeds must not overflow the recurrence
    #[test]
    fn test_max_seed_stays_in_range() {
        let mut generator = SequenceGenerator::new(u32::MAX);
        for _ in 0..1000 {
            let value = generator.next_unit();
            assert!((0.0..1.0).contains(&value));
            assert!(generator.state() < LCG_MODULUS);
        }
    }

    #[test]
    fn test_next_int_within_bound() {
        let mut generator = SequenceGenerator::new(12_345);
        for bound in [1_u32, 2, 7, 100, 10_000].into_iter().filter_map(NonZeroU32::new) {
            for _ in 0..500 {
                assert!(generator.next_int(bound) < bound.get());
            }
        }
    }

    // One draw per call, floor of the scaled unit value
    #[test]
    fn test_next_int_consumes_one_draw() {
        let mut generator = SequenceGenerator::new(99);
        let mut reference = SequenceGenerator::new(99);

        let value = generator.next_int(NonZeroU32::MIN.saturating_add(9));
        let expected = (reference.next_unit() * 10.0).floor() as u32;
        assert_eq!(value, expected);
        assert_eq!(generator.state(), reference.state());
        assert_eq!(generator.next_int(NonZeroU32::MIN), 0);
    }

    #[test]
    fn test_next_float_within_range() {
        let mut generator = SequenceGenerator::new(4_242);
        for _ in 0..1000 {
            let value = generator.next_float(-2.0, 2.0);
            assert!((-2.0..2.0).contains(&value), "{value} outside [-2, 2)");
        }
    }

    // next_float is an affine map of the same unit draw
    #[test]
    fn test_next_float_matches_unit_draw() {
        let mut units = SequenceGenerator::new(31);
        let mut floats = SequenceGenerator::new(31);
        for _ in 0..50 {
            let unit = units.next_unit();
            let scaled = floats.next_float(10.0, 20.0);
            assert!((scaled - (10.0 + unit * 10.0)).abs() < 1e-9);
        }
    }

    // Cloning forks the stream without affecting the original
    #[test]
    fn test_clone_forks_stream() {
        let mut original = SequenceGenerator::new(5);
        original.next_unit();
        let mut fork = original.clone();

        assert_eq!(original.next_unit(), fork.next_unit());
        fork.next_unit();
        assert_ne!(original.state(), fork.state());
    }
}

//! Catch probability
//!
//! Harder Pokemon (higher base experience) are less likely to be caught,
//! but never less likely than the floor rate.

use rand::Rng;

use crate::models::Pokemon;

/// Base experience at or above which the scaled rate reaches zero
pub const MAX_BASE_EXPERIENCE: f64 = 300.0;

/// Catch rate for a Pokemon with no base experience
pub const BASE_CATCH_RATE: f64 = 0.50;

/// Lowest catch rate ever returned
pub const MIN_CATCH_RATE: f64 = 0.25;

/// Returns the probability of catching a Pokemon with the given base experience.
///
/// Missing experience counts as zero. The result is always in
/// `[MIN_CATCH_RATE, BASE_CATCH_RATE]`.
pub fn catch_chance(base_experience: Option<i64>) -> f64 {
    let experience = (base_experience.unwrap_or(0) as f64).clamp(0.0, MAX_BASE_EXPERIENCE);
    let scaled = BASE_CATCH_RATE * (1.0 - experience / MAX_BASE_EXPERIENCE);

    scaled.max(MIN_CATCH_RATE)
}

/// Rolls once against the Pokemon's catch chance.
pub fn try_catch<R: Rng + ?Sized>(pokemon: &Pokemon, rng: &mut R) -> bool {
    rng.gen::<f64>() < catch_chance(pokemon.base_experience)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn pokemon(base_experience: Option<i64>) -> Pokemon {
        Pokemon {
            name: "test".to_string(),
            base_experience,
            height: 0,
            weight: 0,
            stats: vec![],
            types: vec![],
        }
    }

    #[test]
    fn test_catch_chance_zero_experience() {
        assert_eq!(catch_chance(Some(0)), BASE_CATCH_RATE);
        assert_eq!(catch_chance(None), BASE_CATCH_RATE);
    }

    #[test]
    fn test_catch_chance_scales_linearly() {
        // 60 of 300 leaves 80% of the base rate
        assert!((catch_chance(Some(60)) - 0.40).abs() < 1e-9);
    }

    #[test]
    fn test_catch_chance_floor() {
        assert_eq!(catch_chance(Some(150)), MIN_CATCH_RATE);
        assert_eq!(catch_chance(Some(300)), MIN_CATCH_RATE);
        assert_eq!(catch_chance(Some(10_000)), MIN_CATCH_RATE);
    }

    #[test]
    fn test_catch_chance_negative_clamped() {
        assert_eq!(catch_chance(Some(-40)), BASE_CATCH_RATE);
    }

    #[test]
    fn test_try_catch_rate_close_to_chance() {
        let mut rng = StdRng::seed_from_u64(7);
        let target = pokemon(Some(60));

        let caught = (0..10_000).filter(|_| try_catch(&target, &mut rng)).count();
        let rate = caught as f64 / 10_000.0;

        assert!((rate - 0.40).abs() < 0.03, "observed rate {}", rate);
    }

    proptest! {
        #[test]
        fn prop_catch_chance_bounded(exp in any::<i64>()) {
            let chance = catch_chance(Some(exp));
            prop_assert!((MIN_CATCH_RATE..=BASE_CATCH_RATE).contains(&chance));
        }

        #[test]
        fn prop_catch_chance_non_increasing(a in 0i64..400, b in 0i64..400) {
            let (low, high) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(catch_chance(Some(low)) >= catch_chance(Some(high)));
        }
    }
}

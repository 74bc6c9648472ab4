//! Logo scramble hover effect
//!
//! A few quick ticks of uppercase noise, then the original text comes
//! back. Runs on a seeded RNG so a tick sequence is reproducible.

use rand::Rng;

/// One mid-animation frame: each character survives with probability
/// `keep_prob`, otherwise it becomes a random uppercase letter.
///
/// `keep_prob` must be within [0, 1].
pub fn scramble_tick<R: Rng>(text: &str, keep_prob: f64, rng: &mut R) -> String {
    text.chars()
        .map(|ch| {
            if rng.random_bool(keep_prob) {
                ch
            } else {
                rng.random_range('A'..='Z')
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    const LOGO: &str = "CINEMA VAULT";

    #[test]
    fn test_length_is_preserved() {
        let mut rng = Pcg32::seed_from_u64(7);
        for keep in [0.0, 0.3, 0.7, 1.0] {
            let out = scramble_tick(LOGO, keep, &mut rng);
            assert_eq!(out.chars().count(), LOGO.chars().count());
        }
    }

    #[test]
    fn test_keep_one_is_identity() {
        let mut rng = Pcg32::seed_from_u64(7);
        assert_eq!(scramble_tick(LOGO, 1.0, &mut rng), LOGO);
    }

    #[test]
    fn test_keep_zero_replaces_everything() {
        let mut rng = Pcg32::seed_from_u64(7);
        let out = scramble_tick(LOGO, 0.0, &mut rng);
        assert!(out.chars().all(|ch| ch.is_ascii_uppercase()));
        // Even the space gets swapped for a letter
        assert!(!out.contains(' '));
    }

    #[test]
    fn test_same_seed_same_noise() {
        let mut a = Pcg32::seed_from_u64(123);
        let mut b = Pcg32::seed_from_u64(123);
        assert_eq!(
            scramble_tick(LOGO, 0.5, &mut a),
            scramble_tick(LOGO, 0.5, &mut b)
        );
    }

    #[test]
    fn test_empty_text() {
        let mut rng = Pcg32::seed_from_u64(7);
        assert_eq!(scramble_tick("", 0.3, &mut rng), "");
    }
}

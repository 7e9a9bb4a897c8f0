//! Property tests: distribution invariants hold for every valid input.

use proptest::prelude::*;

use healthtrack_core::models::Measurements;
use healthtrack_prediction::{SeverityTier, StatusPredictor};

fn valid_measurements() -> impl Strategy<Value = Measurements> {
    (
        40.0f64..130.0,
        2.0f64..40.0,
        any::<bool>(),
        0u8..=10,
        0u8..=10,
        1u32..=6,
    )
        .prop_map(
            |(height_cm, weight_kg, edema, poverty_index, sanitation_index, meals_per_day)| {
                Measurements {
                    height_cm,
                    weight_kg,
                    edema,
                    poverty_index,
                    sanitation_index,
                    meals_per_day,
                }
            },
        )
}

proptest! {
    #[test]
    fn prop_probabilities_form_a_distribution(m in valid_measurements(), seed in any::<u64>()) {
        let raw = StatusPredictor::seeded(seed).predict_raw(&m).unwrap();
        let p = raw.probabilities;
        prop_assert!(p.sam >= 0.0 && p.mam >= 0.0 && p.normal >= 0.0);
        prop_assert!((p.sum() - 1.0).abs() < 1e-9);

        let rounded = raw.to_prediction(4).probabilities;
        prop_assert!((rounded.sum() - 1.0).abs() < 1e-3);
    }

    #[test]
    fn prop_status_is_argmax(m in valid_measurements(), seed in any::<u64>()) {
        let raw = StatusPredictor::seeded(seed).predict_raw(&m).unwrap();
        prop_assert_eq!(raw.status, raw.probabilities.most_likely());
        // Tier ranges never overlap on the favoured class.
        prop_assert_eq!(raw.status, raw.tier.leaning());
    }

    #[test]
    fn prop_draws_stay_in_tier_ranges(m in valid_measurements(), seed in any::<u64>()) {
        let raw = StatusPredictor::seeded(seed).predict_raw(&m).unwrap();
        let ranges = raw.tier.ranges();
        prop_assert!(ranges.sam.contains(raw.draws.sam));
        prop_assert!(ranges.mam.contains(raw.draws.mam));
        prop_assert!(ranges.normal.contains(raw.draws.normal));
    }

    #[test]
    fn prop_edema_always_severe(m in valid_measurements(), seed in any::<u64>()) {
        let m = Measurements { edema: true, ..m };
        let raw = StatusPredictor::seeded(seed).predict_raw(&m).unwrap();
        prop_assert_eq!(raw.tier, SeverityTier::Severe);
        prop_assert!(raw.draws.sam >= 0.70);
    }
}

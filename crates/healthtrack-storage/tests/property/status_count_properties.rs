use chrono::NaiveDate;
use healthtrack_core::models::{
    Gender, Measurements, NewChild, NewHealthRecord, NutritionStatus, Prediction, ReportFilter,
    StatusProbabilities,
};
use healthtrack_core::traits::IDataStore;
use healthtrack_storage::StorageEngine;
use proptest::prelude::*;

fn status_strategy() -> impl Strategy<Value = NutritionStatus> {
    prop_oneof![
        Just(NutritionStatus::Sam),
        Just(NutritionStatus::Mam),
        Just(NutritionStatus::Normal),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    /// Aggregated counts always match each child's latest record.
    #[test]
    fn counts_track_latest_status(
        children in prop::collection::vec(
            (0usize..3, prop::collection::vec(status_strategy(), 0..4)),
            1..8,
        )
    ) {
        let storage = StorageEngine::open_in_memory().unwrap();
        let centers = ["AWC-A", "AWC-B", "AWC-C"];
        let mut expected = std::collections::BTreeMap::<&str, [u64; 3]>::new();

        for (center_idx, history) in &children {
            let center = centers[*center_idx];
            let child = storage.create_child(&NewChild {
                name: "p".to_string(),
                date_of_birth: NaiveDate::from_ymd_opt(2020, 2, 2).unwrap(),
                gender: Gender::Female,
                guardian_name: "q".to_string(),
                city: "r".to_string(),
                district: "s".to_string(),
                awc_center: center.to_string(),
                healthworker_id: None,
            }).unwrap();

            for status in history {
                storage.create_health_record(&NewHealthRecord {
                    child_id: child.id.clone(),
                    measurements: Measurements {
                        height_cm: 90.0,
                        weight_kg: 12.0,
                        edema: false,
                        poverty_index: 3,
                        sanitation_index: 3,
                        meals_per_day: 3,
                    },
                    prediction: Prediction {
                        status: *status,
                        probabilities: StatusProbabilities::new(0.2, 0.3, 0.5),
                    },
                    recorded_by: None,
                }).unwrap();
            }

            let last = history.last().copied().unwrap_or(NutritionStatus::Normal);
            let slot = match last {
                NutritionStatus::Sam => 0,
                NutritionStatus::Mam => 1,
                NutritionStatus::Normal => 2,
            };
            expected.entry(center).or_default()[slot] += 1;
        }

        let counts = storage.status_counts(&ReportFilter::default()).unwrap();
        prop_assert_eq!(counts.len(), expected.len());
        for row in &counts {
            let want = expected[row.awc_center.as_str()];
            prop_assert_eq!([row.sam_count, row.mam_count, row.normal_count], want);
            prop_assert_eq!(row.total_count, want.iter().sum::<u64>());
        }
    }
}

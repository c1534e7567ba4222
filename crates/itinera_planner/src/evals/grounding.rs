use schemars::JsonSchema;
use serde::Serialize;

use crate::{catalog::PoiCatalog, model::itinerary::Itinerary};

#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct GroundingReport {
    pub pass: bool,
    pub errors: Vec<String>,
    /// Share of scheduled activities that resolve to a real catalog entry.
    pub grounding_score: u32,
}

/// Verifies that every scheduled activity refers to a catalog POI and
/// carries usable snapshot coordinates. An itinerary with no activities
/// passes trivially.
///
/// The coordinate rule inspects the activity's own snapshot, not the
/// catalog entry: a stop whose copied coordinates were zeroed is ungrounded
/// even when its `poi_id` still resolves.
pub fn evaluate_grounding(itinerary: &Itinerary, catalog: &PoiCatalog) -> GroundingReport {
    let mut errors = Vec::new();
    let mut total = 0u32;
    let mut valid = 0u32;

    for day in &itinerary.days {
        for activity in day.activities() {
            total += 1;
            if !catalog.contains(&activity.poi_id) {
                errors.push(format!(
                    "Day {}: '{}' is not present in the POI catalog.",
                    day.day_number, activity.name
                ));
            } else if activity.geo_coordinates.lat() == 0.0 {
                errors.push(format!(
                    "Day {}: '{}' has no usable coordinates.",
                    day.day_number, activity.name
                ));
            } else {
                valid += 1;
            }
        }
    }

    let grounding_score = if total == 0 {
        100
    } else {
        (valid as f64 / total as f64 * 100.0).round() as u32
    };

    GroundingReport {
        pass: errors.is_empty(),
        errors,
        grounding_score,
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        model::location::Location,
        test_utils::{sample_catalog, two_day_itinerary},
    };

    use super::*;

    #[test]
    fn test_fixture_is_fully_grounded() {
        let catalog = sample_catalog();
        let report = evaluate_grounding(&two_day_itinerary(&catalog), &catalog);
        assert!(report.pass);
        assert_eq!(report.grounding_score, 100);
    }

    #[test]
    fn test_unknown_poi_is_flagged() {
        let catalog = sample_catalog();
        let mut itinerary = two_day_itinerary(&catalog);
        itinerary.day_mut(1).unwrap().blocks[0].activities[0].poi_id =
            "poi_phantom".to_owned();

        let report = evaluate_grounding(&itinerary, &catalog);
        assert!(!report.pass);
        assert_eq!(report.grounding_score, 80);
        assert!(report.errors[0].contains("not present in the POI catalog"));
    }

    #[test]
    fn test_zeroed_snapshot_coordinates_are_flagged() {
        let catalog = sample_catalog();
        let mut itinerary = two_day_itinerary(&catalog);
        // the poi_id still resolves; only the copied coordinates are bad
        let activity = &mut itinerary.day_mut(1).unwrap().blocks[0].activities[0];
        activity.geo_coordinates = Location::new(0.0, 0.0);

        let report = evaluate_grounding(&itinerary, &catalog);
        assert!(!report.pass);
        assert_eq!(report.grounding_score, 80);
        assert!(report.errors[0].contains("no usable coordinates"));
    }

    #[test]
    fn test_empty_itinerary_passes_trivially() {
        let catalog = sample_catalog();
        let itinerary = Itinerary {
            id: "trip_empty".to_owned(),
            title: "0-Day Relaxed Trip".to_owned(),
            days: Vec::new(),
            total_duration_days: 0,
        };

        let report = evaluate_grounding(&itinerary, &catalog);
        assert!(report.pass);
        assert_eq!(report.grounding_score, 100);
    }
}

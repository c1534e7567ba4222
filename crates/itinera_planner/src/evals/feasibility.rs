use schemars::JsonSchema;
use serde::Serialize;

use crate::{builder::Pace, model::itinerary::Itinerary};

/// Hour at or after which a day's last activity may not end.
const LATEST_END_HOUR: u32 = 22;

/// Travel exceeding this share of a day draws a warning.
const TRAVEL_SHARE_WARNING: f64 = 0.3;

#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct FeasibilityDailySummary {
    pub day: u32,
    pub activity_minutes: u32,
    pub travel_minutes: u32,
    pub total_duration_minutes: u32,
}

#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct FeasibilityReport {
    pub pass: bool,
    pub warnings: Vec<String>,
    pub errors: Vec<String>,
    pub daily_summary: Vec<FeasibilityDailySummary>,
    /// 0-100; below 50 fails the check outright.
    pub feasibility_score: i32,
}

/// Checks every day's time budget against the pace profile.
///
/// Empty days only warn. A day ending at or after 22:00 or exceeding the
/// pace limit is a hard error; excessive travel share is a scored warning.
pub fn evaluate_feasibility(itinerary: &Itinerary, pace: Pace) -> FeasibilityReport {
    let mut report = FeasibilityReport {
        pass: true,
        warnings: Vec::new(),
        errors: Vec::new(),
        daily_summary: Vec::new(),
        feasibility_score: 100,
    };

    let limit_minutes = pace.daily_limit_minutes();

    for day in &itinerary.days {
        let activities: Vec<_> = day.activities().collect();

        if activities.is_empty() {
            report
                .warnings
                .push(format!("Day {} is empty.", day.day_number));
            continue;
        }

        let last = activities[activities.len() - 1];
        if last.end_time.hour() >= LATEST_END_HOUR {
            report.errors.push(format!(
                "Day {}: Last activity ends after 10 PM ({}).",
                day.day_number, last.end_time
            ));
            report.pass = false;
        }

        let activity_minutes: u32 = activities.iter().map(|a| a.duration_minutes).sum();
        let travel_minutes: u32 = activities
            .iter()
            .map(|a| a.travel_time_to_next_minutes)
            .sum();
        let total = activity_minutes + travel_minutes;

        report.daily_summary.push(FeasibilityDailySummary {
            day: day.day_number,
            activity_minutes,
            travel_minutes,
            total_duration_minutes: total,
        });

        if total > limit_minutes {
            report.errors.push(format!(
                "Day {}: Total time {}h {}m exceeds allowed window of {}h.",
                day.day_number,
                (total as f64 / 60.0).round() as u32,
                total % 60,
                limit_minutes / 60
            ));
            report.pass = false;
            report.feasibility_score -= 30;
        }

        if total > 0 && travel_minutes as f64 > total as f64 * TRAVEL_SHARE_WARNING {
            report.warnings.push(format!(
                "Day {}: Excessive travel time detected ({}% of day).",
                day.day_number,
                (travel_minutes as f64 / total as f64 * 100.0).round() as u32
            ));
            report.feasibility_score -= 10;
        }
    }

    report.feasibility_score = report.feasibility_score.clamp(0, 100);
    if report.feasibility_score < 50 {
        report.pass = false;
    }

    report
}

#[cfg(test)]
mod tests {
    use crate::{
        model::itinerary::{BlockName, Day},
        schedule::recalculate_day_schedule,
        test_utils::{activity_with_duration, sample_catalog, two_day_itinerary},
    };

    use super::*;

    fn single_day(activity_minutes: &[u32]) -> Itinerary {
        let catalog = sample_catalog();
        let palace = catalog.get("poi_city_palace").unwrap();

        let mut day = Day::empty(1);
        for &minutes in activity_minutes {
            // same POI every time: zero travel, so totals stay exact
            day.block_mut(BlockName::Morning)
                .unwrap()
                .activities
                .push(activity_with_duration(palace, minutes));
        }
        recalculate_day_schedule(&mut day);

        Itinerary {
            id: "trip_test".to_owned(),
            title: "1-Day Relaxed Trip".to_owned(),
            days: vec![day],
            total_duration_days: 1,
        }
    }

    #[test]
    fn test_fixture_passes() {
        let catalog = sample_catalog();
        let report = evaluate_feasibility(&two_day_itinerary(&catalog), Pace::Relaxed);
        assert!(report.pass);
        assert!(report.errors.is_empty());
        assert_eq!(report.daily_summary.len(), 2);
    }

    #[test]
    fn test_exactly_at_limit_passes() {
        let report = evaluate_feasibility(&single_day(&[180, 180]), Pace::Relaxed);
        assert!(report.pass, "{:?}", report.errors);
        assert_eq!(report.feasibility_score, 100);
    }

    #[test]
    fn test_one_minute_over_limit_fails() {
        let report = evaluate_feasibility(&single_day(&[180, 181]), Pace::Relaxed);
        assert!(!report.pass);
        assert_eq!(report.feasibility_score, 70);
        assert!(report.errors[0].contains("exceeds allowed window"));
    }

    #[test]
    fn test_packed_limit_is_wider() {
        let itinerary = single_day(&[180, 181]);
        assert!(evaluate_feasibility(&itinerary, Pace::Packed).pass);
    }

    #[test]
    fn test_late_end_is_a_hard_error() {
        // 12h10 of activities starting at 10:00 ends at 22:10, but the
        // total check fires first anyway; use packed and check the message
        let report = evaluate_feasibility(&single_day(&[730]), Pace::Packed);
        assert!(!report.pass);
        assert!(
            report
                .errors
                .iter()
                .any(|e| e.contains("ends after 10 PM")),
            "{:?}",
            report.errors
        );
    }

    #[test]
    fn test_empty_day_is_only_a_warning() {
        let catalog = sample_catalog();
        let mut itinerary = two_day_itinerary(&catalog);
        for block in &mut itinerary.day_mut(2).unwrap().blocks {
            block.activities.clear();
        }

        let report = evaluate_feasibility(&itinerary, Pace::Relaxed);
        assert!(report.pass);
        assert!(report.warnings.iter().any(|w| w == "Day 2 is empty."));
        assert_eq!(report.daily_summary.len(), 1);
    }

    #[test]
    fn test_excessive_travel_warns_and_scores() {
        let catalog = sample_catalog();
        let near = catalog.get("poi_city_palace").unwrap();
        let far = catalog.get("poi_saheliyon_ki_bari").unwrap();

        let mut day = Day::empty(1);
        day.block_mut(BlockName::Morning)
            .unwrap()
            .activities
            .push(activity_with_duration(near, 5));
        day.block_mut(BlockName::Morning)
            .unwrap()
            .activities
            .push(activity_with_duration(far, 5));
        recalculate_day_schedule(&mut day);

        let itinerary = Itinerary {
            id: "trip_test".to_owned(),
            title: "1-Day Relaxed Trip".to_owned(),
            days: vec![day],
            total_duration_days: 1,
        };

        let report = evaluate_feasibility(&itinerary, Pace::Relaxed);
        assert!(report.pass);
        assert_eq!(report.feasibility_score, 90);
        assert!(report.warnings[0].contains("Excessive travel time"));
    }
}

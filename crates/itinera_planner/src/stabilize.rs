use tracing::info;

use crate::{
    builder::Pace,
    catalog::PoiCatalog,
    evals::{EvaluationContext, EvaluationSummary, run_evaluations},
    model::itinerary::Itinerary,
    schedule::recalculate_day_schedule,
};

/// Upper bound on corrective passes before giving up.
pub const MAX_STABILIZATION_CYCLES: u32 = 3;

#[derive(Debug)]
pub struct StabilizationResult {
    pub itinerary: Itinerary,
    pub evaluations: EvaluationSummary,
    /// Number of corrective removals actually performed.
    pub cycles: u32,
}

impl StabilizationResult {
    pub fn was_adjusted(&self) -> bool {
        self.cycles > 0
    }
}

/// Iteratively repairs overloaded days by dropping their least popular
/// activity, up to [`MAX_STABILIZATION_CYCLES`] times.
///
/// Only duration errors are actionable here; any other failure ends the
/// loop immediately. A day already down to two activities is left alone.
pub fn stabilize(itinerary: Itinerary, catalog: &PoiCatalog, pace: Pace) -> StabilizationResult {
    let mut itinerary = itinerary;
    let context = EvaluationContext {
        pace: Some(pace),
        ..EvaluationContext::default()
    };

    let mut evaluations = run_evaluations(&itinerary, catalog, context);
    let mut cycles = 0;

    while !evaluations.passed && cycles < MAX_STABILIZATION_CYCLES {
        let Some(duration_error) = evaluations
            .feasibility
            .errors
            .iter()
            .find(|e| e.contains("exceeds allowed window"))
        else {
            break;
        };

        let day_number = parse_day_number(duration_error).unwrap_or(1);
        info!(
            cycle = cycles + 1,
            day = day_number,
            "itinerary failed feasibility, attempting correction"
        );

        let Some(day) = itinerary.day_mut(day_number) else {
            break;
        };
        if day.activity_count() <= 2 {
            break;
        }

        let lowest = day
            .activities()
            .map(|a| (catalog.popularity_of(&a.poi_id), a.poi_id.clone()))
            .min_by_key(|(score, _)| *score);
        let Some((_, poi_id)) = lowest else {
            break;
        };

        day.remove_poi(&poi_id);
        recalculate_day_schedule(day);

        evaluations = run_evaluations(&itinerary, catalog, context);
        cycles += 1;
    }

    StabilizationResult {
        itinerary,
        evaluations,
        cycles,
    }
}

/// Pulls the day number out of a feasibility error like
/// "Day 2: Total time ...".
fn parse_day_number(error: &str) -> Option<u32> {
    let rest = error.strip_prefix("Day ")?;
    let digits: String = rest.chars().take_while(char::is_ascii_digit).collect();
    digits.parse().ok()
}

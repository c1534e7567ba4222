//! Orchestrates one edit request end to end: day-reference resolution,
//! application, evaluation, one semantic retry, and a human-readable diff.

use tracing::{debug, info};

use crate::{
    builder::Pace,
    catalog::PoiCatalog,
    edit::{EditCommand, EditEngine, parse_day_reference},
    error::FlowError,
    evals::{EvaluationContext, EvaluationSummary, run_evaluations},
    model::itinerary::Itinerary,
};

#[derive(Debug)]
pub struct EditOutcome {
    pub success: bool,
    pub updated_itinerary: Option<Itinerary>,
    pub evaluations: Option<EvaluationSummary>,
    pub diff_summary: Vec<String>,
    pub failure_reason: Option<String>,
    pub op: Option<&'static str>,
}

impl EditOutcome {
    fn failure(reason: impl Into<String>, evaluations: Option<EvaluationSummary>) -> Self {
        EditOutcome {
            success: false,
            updated_itinerary: None,
            evaluations,
            diff_summary: Vec::new(),
            failure_reason: Some(reason.into()),
            op: None,
        }
    }
}

pub struct EditOrchestrator<'a> {
    catalog: &'a PoiCatalog,
    engine: EditEngine<'a>,
}

impl<'a> EditOrchestrator<'a> {
    pub fn new(catalog: &'a PoiCatalog) -> Self {
        EditOrchestrator {
            catalog,
            engine: EditEngine::new(catalog),
        }
    }

    /// Applies one interpreted command against the current itinerary.
    ///
    /// The free-text request is consulted for a day reference; when it names
    /// a day more clearly than the interpreter did, the parsed day wins. An
    /// out-of-range day is a hard error, everything downstream fails soft.
    pub fn handle_edit(
        &self,
        user_input: &str,
        mut command: EditCommand,
        current: &Itinerary,
        pace: Pace,
    ) -> Result<EditOutcome, FlowError> {
        let total_days = current.days.len() as u32;

        if let Some(day) = parse_day_reference(user_input, total_days) {
            command.set_primary_day(day);
        }

        let final_day = command.primary_day();
        if final_day < 1 || final_day > total_days {
            return Err(FlowError::DayOutOfRange {
                day: final_day,
                total_days,
            });
        }

        let mut updated = self.engine.apply(current, &command);

        if let Some(day) = updated.day(final_day) {
            let activity_minutes: u32 =
                day.activities().map(|a| a.duration_minutes).sum();
            let travel_minutes: u32 = day
                .activities()
                .map(|a| a.travel_time_to_next_minutes)
                .sum();
            debug!(
                day = final_day,
                activity_minutes, travel_minutes, "day totals after edit"
            );
        }

        let original_poi_ids = current.poi_ids();
        if original_poi_ids == updated.poi_ids() {
            return Ok(EditOutcome::failure(
                "Could you clarify what you'd like to modify? I couldn't detect any \
                 structural changes in your request.",
                None,
            ));
        }

        let context = EvaluationContext {
            pace: Some(pace),
            previous_itinerary: Some(current),
            edit_intent: Some(&command),
        };
        let mut evaluations = run_evaluations(&updated, self.catalog, context);

        // A category addition that overloads the day gets one shot at
        // trading density for feasibility.
        if !evaluations.passed
            && matches!(command, EditCommand::AddByCategory { .. })
        {
            info!(day = final_day, "category addition failed evaluation, retrying with relaxation");
            let relaxed = self.engine.apply(
                &updated,
                &EditCommand::DayRelaxation {
                    day_number: final_day,
                },
            );
            let second = run_evaluations(&relaxed, self.catalog, context);
            if second.passed {
                info!("relaxation retry successful");
                updated = relaxed;
                evaluations = second;
            }
        }

        if !evaluations.passed {
            let containment = evaluations
                .edit_correctness
                .as_ref()
                .map(|r| r.unexpected_changes.join(", "))
                .unwrap_or_default();
            return Ok(EditOutcome::failure(
                format!(
                    "Edit unsafe: {} {}",
                    evaluations.feasibility.errors.join(", "),
                    containment
                ),
                Some(evaluations),
            ));
        }

        let diff_summary = vec![self.describe(&command, &updated, &original_poi_ids, final_day)];

        Ok(EditOutcome {
            success: true,
            updated_itinerary: Some(updated),
            evaluations: Some(evaluations),
            diff_summary,
            failure_reason: None,
            op: Some(command.op_name()),
        })
    }

    fn describe(
        &self,
        command: &EditCommand,
        updated: &Itinerary,
        original_poi_ids: &[String],
        final_day: u32,
    ) -> String {
        match command {
            EditCommand::Swap { .. } => {
                format!("Swapped existing activity for new one on Day {final_day}")
            }
            EditCommand::Remove { .. } => format!("Removed activity from Day {final_day}"),
            EditCommand::Add { .. } => format!("Added new activity to Day {final_day}"),
            EditCommand::Move { .. } => format!("Moved activity to Day {final_day}"),
            EditCommand::AddByCategory { category, .. } => {
                let added = updated.day(final_day).and_then(|day| {
                    day.activities()
                        .find(|a| !original_poi_ids.contains(&a.poi_id))
                });
                match added {
                    Some(activity) => {
                        format!("Added {} to Day {final_day}", activity.name)
                    }
                    None => format!("Added new {category} to Day {final_day}"),
                }
            }
            EditCommand::ReplaceByAttribute {
                attribute,
                time_block,
                ..
            } => {
                let replacement = updated
                    .day(final_day)
                    .and_then(|day| day.block(*time_block))
                    .and_then(|block| block.activities.first());
                format!(
                    "Swapped activity for an {} alternative ({}) on Day {final_day}",
                    attribute.label(),
                    replacement.map(|a| a.name.as_str()).unwrap_or("none")
                )
            }
            EditCommand::DayRelaxation { .. } => {
                format!("Reduced activity density on Day {final_day}")
            }
            EditCommand::DayOptimization { .. } => {
                format!("Rebalanced Day {final_day}")
            }
        }
    }
}

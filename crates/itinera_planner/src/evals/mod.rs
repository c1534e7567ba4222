//! Post-hoc quality gates run on every generated or mutated itinerary.

pub mod edit_correctness;
pub mod feasibility;
pub mod grounding;

use schemars::JsonSchema;
use serde::Serialize;
use tracing::warn;

pub use edit_correctness::{EditCorrectnessReport, evaluate_edit_correctness};
pub use feasibility::{FeasibilityDailySummary, FeasibilityReport, evaluate_feasibility};
pub use grounding::{GroundingReport, evaluate_grounding};

use crate::{
    builder::Pace,
    catalog::PoiCatalog,
    edit::EditCommand,
    model::itinerary::Itinerary,
};

/// Optional inputs for the edit-aware portion of the suite.
#[derive(Debug, Clone, Copy, Default)]
pub struct EvaluationContext<'a> {
    pub pace: Option<Pace>,
    pub previous_itinerary: Option<&'a Itinerary>,
    pub edit_intent: Option<&'a EditCommand>,
}

#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct EvaluationSummary {
    pub passed: bool,
    pub feasibility: FeasibilityReport,
    pub grounding: GroundingReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edit_correctness: Option<EditCorrectnessReport>,
}

/// Runs the full evaluation suite. Edit correctness only runs when both a
/// previous itinerary and an edit intent are supplied.
pub fn run_evaluations(
    itinerary: &Itinerary,
    catalog: &PoiCatalog,
    context: EvaluationContext<'_>,
) -> EvaluationSummary {
    let pace = context.pace.unwrap_or(Pace::Relaxed);

    let feasibility = evaluate_feasibility(itinerary, pace);
    let grounding = evaluate_grounding(itinerary, catalog);

    let edit_correctness = match (context.previous_itinerary, context.edit_intent) {
        (Some(previous), Some(intent)) => {
            Some(evaluate_edit_correctness(previous, itinerary, intent))
        }
        (None, Some(intent)) => {
            warn!(op = intent.op_name(), "edit intent provided without a previous itinerary");
            None
        }
        _ => None,
    };

    let passed = feasibility.pass
        && grounding.pass
        && edit_correctness.as_ref().is_none_or(|r| r.pass);

    EvaluationSummary {
        passed,
        feasibility,
        grounding,
        edit_correctness,
    }
}

use schemars::JsonSchema;
use serde::Serialize;

use crate::{edit::EditCommand, model::itinerary::Itinerary};

#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct EditCorrectnessReport {
    pub pass: bool,
    pub unexpected_changes: Vec<String>,
}

/// Containment check: an edit targeting day 1 must leave day 2 untouched.
///
/// Days inside the command's scope are allowed to change arbitrarily;
/// every other day must compare identical, block for block.
pub fn evaluate_edit_correctness(
    before: &Itinerary,
    after: &Itinerary,
    intent: &EditCommand,
) -> EditCorrectnessReport {
    let mut report = EditCorrectnessReport {
        pass: true,
        unexpected_changes: Vec::new(),
    };

    let scoped = intent.scoped_days();
    let scoped_label = scoped
        .iter()
        .map(|d| d.to_string())
        .collect::<Vec<_>>()
        .join(",");

    let max_days = before.days.len().max(after.days.len()) as u32;

    for day_number in 1..=max_days {
        let day_before = before.day(day_number);
        let day_after = after.day(day_number);

        match (day_before, day_after) {
            (None, None) => {}
            (Some(_), None) | (None, Some(_)) => {
                report
                    .unexpected_changes
                    .push(format!("Day {day_number} existence changed."));
                report.pass = false;
            }
            (Some(b), Some(a)) => {
                if scoped.contains(&day_number) {
                    continue;
                }
                if b.blocks != a.blocks {
                    report.unexpected_changes.push(format!(
                        "Day {day_number} changed unexpectedly (Targeted: {scoped_label})."
                    ));
                    report.pass = false;
                }
            }
        }
    }

    report
}

mod sample;

use anyhow::Result;
use itinera_planner::{
    builder::{ItineraryBuilder, Pace},
    edit::EditCommand,
    flow::EditOrchestrator,
    stabilize::stabilize,
};
use mimalloc::MiMalloc;
use tracing::{Level, info, warn};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> Result<()> {
    dotenvy::from_filename("./.env.local").ok();
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let catalog = sample::udaipur_catalog();
    info!(pois = catalog.len(), "loaded Udaipur catalog");

    let itinerary = ItineraryBuilder::new(&catalog, 3, Pace::Packed)
        .with_food_preference("local cuisine")
        .build();

    let stabilized = stabilize(itinerary, &catalog, Pace::Packed);
    if stabilized.was_adjusted() {
        info!(
            cycles = stabilized.cycles,
            "plan adjusted to fit the daily window"
        );
    }
    if !stabilized.evaluations.passed {
        warn!(
            errors = ?stabilized.evaluations.feasibility.errors,
            "plan still failing after stabilization"
        );
    }

    println!("{}", serde_json::to_string_pretty(&stabilized.itinerary)?);

    let orchestrator = EditOrchestrator::new(&catalog);
    let outcome = orchestrator.handle_edit(
        "my second day looks packed, take something out",
        EditCommand::DayRelaxation { day_number: 2 },
        &stabilized.itinerary,
        Pace::Packed,
    )?;

    match outcome.success {
        true => {
            for line in &outcome.diff_summary {
                info!("{line}");
            }
            let updated = outcome
                .updated_itinerary
                .as_ref()
                .expect("successful edits carry the updated itinerary");
            println!("{}", serde_json::to_string_pretty(updated)?);
        }
        false => {
            warn!(
                reason = outcome.failure_reason.as_deref().unwrap_or("unknown"),
                "edit rejected"
            );
        }
    }

    Ok(())
}

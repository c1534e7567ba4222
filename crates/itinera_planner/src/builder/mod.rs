mod generate;
mod pace;
mod scoring;

pub use generate::ItineraryBuilder;
pub use pace::{ABSOLUTE_DAILY_CAP_MINUTES, Pace};
pub use scoring::{CandidateScorer, NOTES_BONUS, NearestNeighborScorer};

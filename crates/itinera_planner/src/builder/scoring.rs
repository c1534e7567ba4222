use crate::{
    catalog::{NotesIndex, Poi},
    travel::travel_minutes,
};

/// Added to a candidate's score when supplementary descriptive content is
/// available for it. Large enough to outrank distance between reasonably
/// close stops, small enough that a far-flung candidate still loses.
pub const NOTES_BONUS: f64 = 500.0;

/// Ranks the next candidate stop given the last placed one. The builder's
/// day-filling heuristic is deliberately pluggable so alternative
/// strategies can be swapped without touching the packing machinery.
pub trait CandidateScorer {
    fn score(&self, last: Option<&Poi>, candidate: &Poi) -> f64;
}

/// Default heuristic: closer is better, with a fixed bonus for candidates
/// present in the notes index. Ties fall back to catalog order.
#[derive(Default)]
pub struct NearestNeighborScorer<'a> {
    notes: Option<&'a NotesIndex>,
}

impl<'a> NearestNeighborScorer<'a> {
    pub fn new() -> Self {
        Self { notes: None }
    }

    pub fn with_notes(notes: &'a NotesIndex) -> Self {
        Self { notes: Some(notes) }
    }
}

impl CandidateScorer for NearestNeighborScorer<'_> {
    fn score(&self, last: Option<&Poi>, candidate: &Poi) -> f64 {
        let travel = last
            .map(|poi| travel_minutes(&poi.location, &candidate.location))
            .unwrap_or(0);

        let mut score = -(travel as f64);
        if let Some(notes) = self.notes
            && notes.has_notes(&candidate.id)
        {
            score += NOTES_BONUS;
        }

        score
    }
}

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FlowError {
    /// The user's request or the interpreter's command named a day that
    /// does not exist in the current itinerary.
    #[error("day {day} is out of range for a {total_days}-day itinerary")]
    DayOutOfRange { day: u32, total_days: u32 },
}

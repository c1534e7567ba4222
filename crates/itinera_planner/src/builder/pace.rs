use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// No day may exceed this, whatever the pace.
pub const ABSOLUTE_DAILY_CAP_MINUTES: u32 = 540;

/// Coarse daily-intensity profile controlling time budgets and stop counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Pace {
    Relaxed,
    Packed,
}

impl Pace {
    /// Daily budget for activity plus travel minutes.
    pub fn daily_limit_minutes(&self) -> u32 {
        match self {
            Pace::Relaxed => 360,
            Pace::Packed => 480,
        }
    }

    /// Target number of stops per day.
    pub fn max_stops_per_day(&self) -> usize {
        match self {
            Pace::Relaxed => 4,
            Pace::Packed => 6,
        }
    }

    pub fn title_label(&self) -> &'static str {
        match self {
            Pace::Relaxed => "Relaxed",
            Pace::Packed => "Packed",
        }
    }
}

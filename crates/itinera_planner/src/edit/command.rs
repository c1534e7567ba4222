use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::model::itinerary::BlockName;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Attribute {
    Indoor,
    Outdoor,
}

impl Attribute {
    pub fn label(&self) -> &'static str {
        match self {
            Attribute::Indoor => "indoor",
            Attribute::Outdoor => "outdoor",
        }
    }
}

/// Fame hint accepted by the command schema; the engine currently ranks by
/// popularity regardless.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Fame {
    High,
    Medium,
    Low,
}

/// One structured mutation of an itinerary, produced by the external
/// command interpreter and consumed exactly once by the edit engine.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum EditCommand {
    Remove {
        target_poi_id: String,
        day_number: u32,
    },
    Add {
        poi_id_to_add: String,
        target_day_number: u32,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        time_block: Option<BlockName>,
    },
    Swap {
        target_poi_id: String,
        replacement_poi_id: String,
        day_number: u32,
    },
    Move {
        target_poi_id: String,
        from_day: u32,
        to_day: u32,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        to_time_block: Option<BlockName>,
    },
    AddByCategory {
        category: String,
        day_number: u32,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        fame: Option<Fame>,
    },
    ReplaceByAttribute {
        attribute: Attribute,
        day_number: u32,
        time_block: BlockName,
    },
    DayRelaxation {
        day_number: u32,
    },
    /// Accepted by the schema but not implemented by the engine.
    DayOptimization {
        day_number: u32,
    },
}

impl EditCommand {
    pub fn op_name(&self) -> &'static str {
        match self {
            EditCommand::Remove { .. } => "remove",
            EditCommand::Add { .. } => "add",
            EditCommand::Swap { .. } => "swap",
            EditCommand::Move { .. } => "move",
            EditCommand::AddByCategory { .. } => "add_by_category",
            EditCommand::ReplaceByAttribute { .. } => "replace_by_attribute",
            EditCommand::DayRelaxation { .. } => "day_relaxation",
            EditCommand::DayOptimization { .. } => "day_optimization",
        }
    }

    /// The day the orchestrator validates and reports against. For `move`
    /// this is the origin day.
    pub fn primary_day(&self) -> u32 {
        match self {
            EditCommand::Remove { day_number, .. } => *day_number,
            EditCommand::Add {
                target_day_number, ..
            } => *target_day_number,
            EditCommand::Swap { day_number, .. } => *day_number,
            EditCommand::Move { from_day, .. } => *from_day,
            EditCommand::AddByCategory { day_number, .. } => *day_number,
            EditCommand::ReplaceByAttribute { day_number, .. } => *day_number,
            EditCommand::DayRelaxation { day_number } => *day_number,
            EditCommand::DayOptimization { day_number } => *day_number,
        }
    }

    /// Overrides the primary day, used when the free-text day reference is
    /// clearer than what the interpreter produced.
    pub fn set_primary_day(&mut self, day: u32) {
        match self {
            EditCommand::Remove { day_number, .. } => *day_number = day,
            EditCommand::Add {
                target_day_number, ..
            } => *target_day_number = day,
            EditCommand::Swap { day_number, .. } => *day_number = day,
            EditCommand::Move { from_day, .. } => *from_day = day,
            EditCommand::AddByCategory { day_number, .. } => *day_number = day,
            EditCommand::ReplaceByAttribute { day_number, .. } => *day_number = day,
            EditCommand::DayRelaxation { day_number } => *day_number = day,
            EditCommand::DayOptimization { day_number } => *day_number = day,
        }
    }

    /// Day numbers this edit declares as in-scope; every other day must be
    /// untouched for the edit to be considered correct.
    pub fn scoped_days(&self) -> Vec<u32> {
        match self {
            EditCommand::Remove { day_number, .. }
            | EditCommand::Swap { day_number, .. }
            | EditCommand::AddByCategory { day_number, .. }
            | EditCommand::ReplaceByAttribute { day_number, .. }
            | EditCommand::DayRelaxation { day_number } => vec![*day_number],
            EditCommand::Add {
                target_day_number, ..
            } => vec![*target_day_number],
            EditCommand::Move {
                from_day, to_day, ..
            } => vec![*from_day, *to_day],
            EditCommand::DayOptimization { .. } => vec![],
        }
    }
}

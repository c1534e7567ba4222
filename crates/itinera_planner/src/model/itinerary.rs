use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    catalog::{Poi, PoiCategory},
    model::{clock::ClockTime, location::Location},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum BlockName {
    Morning,
    Afternoon,
    Evening,
}

impl BlockName {
    /// Visiting order within a day.
    pub const ORDERED: [BlockName; 3] = [
        BlockName::Morning,
        BlockName::Afternoon,
        BlockName::Evening,
    ];

    /// Which block a stop starting at this time lands in.
    pub fn for_time(start: ClockTime) -> Self {
        if start < ClockTime::from_hm(12, 0) {
            BlockName::Morning
        } else if start < ClockTime::from_hm(17, 0) {
            BlockName::Afternoon
        } else {
            BlockName::Evening
        }
    }
}

/// A scheduled occurrence of one POI. Name, category, duration and
/// coordinates are snapshots taken at insertion time, not live references.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Activity {
    pub poi_id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub category: PoiCategory,
    pub duration_minutes: u32,
    pub start_time: ClockTime,
    pub end_time: ClockTime,
    /// Travel to the next activity of the day, 0 for the last one.
    pub travel_time_to_next_minutes: u32,
    pub geo_coordinates: Location,
}

impl Activity {
    /// Snapshot of a POI with placeholder times; the schedule recalculation
    /// stamps the real ones.
    pub fn from_poi(poi: &Poi) -> Self {
        Activity {
            poi_id: poi.id.clone(),
            name: poi.name.clone(),
            category: poi.category,
            duration_minutes: poi.avg_visit_duration_minutes,
            start_time: ClockTime::MIDNIGHT,
            end_time: ClockTime::MIDNIGHT,
            travel_time_to_next_minutes: 0,
            geo_coordinates: poi.location,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TimeBlock {
    pub name: BlockName,
    pub activities: Vec<Activity>,
}

/// One trip day. Always carries all three blocks, even when empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Day {
    pub day_number: u32,
    pub blocks: Vec<TimeBlock>,
}

impl Day {
    pub fn empty(day_number: u32) -> Self {
        Day {
            day_number,
            blocks: BlockName::ORDERED
                .into_iter()
                .map(|name| TimeBlock {
                    name,
                    activities: Vec::new(),
                })
                .collect(),
        }
    }

    pub fn block(&self, name: BlockName) -> Option<&TimeBlock> {
        self.blocks.iter().find(|block| block.name == name)
    }

    pub fn block_mut(&mut self, name: BlockName) -> Option<&mut TimeBlock> {
        self.blocks.iter_mut().find(|block| block.name == name)
    }

    /// Flattened activities in visiting order.
    pub fn activities(&self) -> impl Iterator<Item = &Activity> {
        BlockName::ORDERED
            .into_iter()
            .filter_map(|name| self.block(name))
            .flat_map(|block| block.activities.iter())
    }

    pub fn activity_count(&self) -> usize {
        self.blocks.iter().map(|block| block.activities.len()).sum()
    }

    /// Drops every activity referencing the given POI, across all blocks.
    pub fn remove_poi(&mut self, poi_id: &str) {
        for block in &mut self.blocks {
            block.activities.retain(|activity| activity.poi_id != poi_id);
        }
    }
}

/// The single mutable aggregate root of a session. Every transform clones
/// the whole value; before and after are never aliased.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Itinerary {
    pub id: String,
    pub title: String,
    pub days: Vec<Day>,
    pub total_duration_days: u32,
}

impl Itinerary {
    pub fn day(&self, day_number: u32) -> Option<&Day> {
        self.days.iter().find(|day| day.day_number == day_number)
    }

    pub fn day_mut(&mut self, day_number: u32) -> Option<&mut Day> {
        self.days.iter_mut().find(|day| day.day_number == day_number)
    }

    /// All scheduled POI ids in day order. The orchestrator compares these
    /// lists before and after an edit to detect silent no-ops.
    pub fn poi_ids(&self) -> Vec<String> {
        self.days
            .iter()
            .flat_map(|day| day.activities())
            .map(|activity| activity.poi_id.clone())
            .collect()
    }

    pub fn contains_poi(&self, poi_id: &str) -> bool {
        self.days
            .iter()
            .any(|day| day.activities().any(|activity| activity.poi_id == poi_id))
    }
}

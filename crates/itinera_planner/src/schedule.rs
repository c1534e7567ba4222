use crate::{
    model::{
        clock::ClockTime,
        itinerary::{BlockName, Day},
        location::Location,
    },
    travel::travel_minutes,
};

/// Aggregate minutes of a recalculated day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DayLoad {
    pub activity_minutes: u32,
    pub travel_minutes: u32,
}

impl DayLoad {
    pub fn total(&self) -> u32 {
        self.activity_minutes + self.travel_minutes
    }
}

/// Re-derives every timing field of a day from its activity order.
///
/// The clock starts at 10:00 and walks the flattened
/// morning -> afternoon -> evening sequence: stamp the start time, add the
/// visit duration, stamp the end time, then advance by the travel time to
/// the next stop. The last stop's travel-to-next is always 0.
///
/// This is the single source of truth for derived times; every mutation
/// path must call it on each day it touches or the times go stale.
pub fn recalculate_day_schedule(day: &mut Day) -> DayLoad {
    let mut positions: Vec<(usize, usize)> = Vec::new();
    for name in BlockName::ORDERED {
        if let Some(block_index) = day.blocks.iter().position(|block| block.name == name) {
            for activity_index in 0..day.blocks[block_index].activities.len() {
                positions.push((block_index, activity_index));
            }
        }
    }

    // Coordinates are copied out up front so each activity can be stamped
    // while knowing where the next one is.
    let coordinates: Vec<Location> = positions
        .iter()
        .map(|&(block, index)| day.blocks[block].activities[index].geo_coordinates)
        .collect();

    let mut clock = ClockTime::DAY_START;
    let mut load = DayLoad::default();

    for (i, &(block, index)) in positions.iter().enumerate() {
        let travel_to_next = if i + 1 < positions.len() {
            travel_minutes(&coordinates[i], &coordinates[i + 1])
        } else {
            0
        };

        let activity = &mut day.blocks[block].activities[index];
        activity.start_time = clock;
        clock = clock.plus_minutes(activity.duration_minutes);
        activity.end_time = clock;
        activity.travel_time_to_next_minutes = travel_to_next;

        load.activity_minutes += activity.duration_minutes;
        load.travel_minutes += travel_to_next;
        clock = clock.plus_minutes(travel_to_next);
    }

    load
}

use fxhash::FxHashSet;
use tracing::debug;

use crate::{
    catalog::{Poi, PoiCatalog},
    edit::command::{Attribute, EditCommand},
    model::itinerary::{Activity, BlockName, Day, Itinerary},
    schedule::recalculate_day_schedule,
};

const INDOOR_VOCABULARY: [&str; 5] = ["museum", "palace", "restaurant", "cafe", "temple"];
const OUTDOOR_VOCABULARY: [&str; 5] = ["lake", "ghat", "garden", "viewpoint", "zoo"];

/// Applies structured edit commands to an itinerary.
///
/// Every application starts from a deep copy; the caller's value is never
/// touched. Unresolvable targets (missing day, block, or POI) degrade to
/// silent no-ops — callers detect them by comparing content before and
/// after, not by catching errors.
pub struct EditEngine<'a> {
    catalog: &'a PoiCatalog,
}

impl<'a> EditEngine<'a> {
    pub fn new(catalog: &'a PoiCatalog) -> Self {
        Self { catalog }
    }

    pub fn apply(&self, itinerary: &Itinerary, command: &EditCommand) -> Itinerary {
        let mut next = itinerary.clone();
        debug!(op = command.op_name(), "applying edit");

        match command {
            EditCommand::Remove {
                target_poi_id,
                day_number,
            } => self.remove(&mut next, target_poi_id, *day_number),
            EditCommand::Add {
                poi_id_to_add,
                target_day_number,
                time_block,
            } => self.add(&mut next, poi_id_to_add, *target_day_number, *time_block),
            EditCommand::Swap {
                target_poi_id,
                replacement_poi_id,
                day_number,
            } => self.swap(&mut next, target_poi_id, replacement_poi_id, *day_number),
            EditCommand::Move {
                target_poi_id,
                // The origin day is discovered by search; `from_day` only
                // scopes the correctness evaluation.
                from_day: _,
                to_day,
                to_time_block,
            } => self.move_activity(&mut next, target_poi_id, *to_day, *to_time_block),
            EditCommand::AddByCategory {
                category,
                day_number,
                fame: _,
            } => self.add_by_category(&mut next, category, *day_number),
            EditCommand::ReplaceByAttribute {
                attribute,
                day_number,
                time_block,
            } => self.replace_by_attribute(&mut next, *attribute, *day_number, *time_block),
            EditCommand::DayRelaxation { day_number } => {
                self.day_relaxation(&mut next, *day_number)
            }
            // Recognized by the schema, intentionally not implemented.
            EditCommand::DayOptimization { .. } => {}
        }

        next
    }

    fn remove(&self, itinerary: &mut Itinerary, poi_id: &str, day_number: u32) {
        if let Some(day) = itinerary.day_mut(day_number) {
            day.remove_poi(poi_id);
            recalculate_day_schedule(day);
        }
    }

    fn add(
        &self,
        itinerary: &mut Itinerary,
        poi_id: &str,
        day_number: u32,
        time_block: Option<BlockName>,
    ) {
        // A missing day is created before the POI lookup; a failed lookup
        // therefore leaves the fresh empty day in place.
        if itinerary.day(day_number).is_none() {
            itinerary.days.push(Day::empty(day_number));
        }

        let Some(poi) = self.catalog.get(poi_id) else {
            return;
        };
        let Some(day) = itinerary.day_mut(day_number) else {
            return;
        };
        let Some(block) = day.block_mut(time_block.unwrap_or(BlockName::Afternoon)) else {
            return;
        };

        block.activities.push(Activity::from_poi(poi));
        recalculate_day_schedule(day);
    }

    fn add_by_category(&self, itinerary: &mut Itinerary, category: &str, day_number: u32) {
        if itinerary.day(day_number).is_none() {
            return;
        }

        let existing = scheduled_poi_ids(itinerary);
        let needle = category.to_lowercase();

        let mut candidates: Vec<&Poi> = self
            .catalog
            .iter()
            .filter(|poi| {
                !existing.contains(&poi.id)
                    && (poi.category.label().contains(&needle) || poi.has_tag_matching(&needle))
            })
            .collect();
        candidates.sort_by(|a, b| b.popularity_score.cmp(&a.popularity_score));

        let Some(best) = candidates.first().copied() else {
            return;
        };
        let Some(day) = itinerary.day_mut(day_number) else {
            return;
        };

        // Afternoon preferred; a day without one takes its second block.
        let block_index = day
            .blocks
            .iter()
            .position(|block| block.name == BlockName::Afternoon)
            .or(if day.blocks.len() > 1 { Some(1) } else { None });
        let Some(block_index) = block_index else {
            return;
        };

        day.blocks[block_index].activities.push(Activity::from_poi(best));
        recalculate_day_schedule(day);
    }

    fn replace_by_attribute(
        &self,
        itinerary: &mut Itinerary,
        attribute: Attribute,
        day_number: u32,
        time_block: BlockName,
    ) {
        let Some(day) = itinerary.day(day_number) else {
            return;
        };
        let Some(block) = day.block(time_block) else {
            return;
        };
        if block.activities.is_empty() {
            return;
        }

        let existing = scheduled_poi_ids(itinerary);
        let mut candidates: Vec<&Poi> = self
            .catalog
            .iter()
            .filter(|poi| {
                !existing.contains(&poi.id)
                    && match attribute {
                        Attribute::Indoor => matches_vocabulary(poi, &INDOOR_VOCABULARY),
                        Attribute::Outdoor => matches_vocabulary(poi, &OUTDOOR_VOCABULARY),
                    }
            })
            .collect();
        candidates.sort_by(|a, b| b.popularity_score.cmp(&a.popularity_score));

        let Some(best) = candidates.first().copied() else {
            return;
        };
        let Some(day) = itinerary.day_mut(day_number) else {
            return;
        };
        if let Some(block) = day.block_mut(time_block) {
            block.activities[0] = Activity::from_poi(best);
        }
        recalculate_day_schedule(day);
    }

    fn day_relaxation(&self, itinerary: &mut Itinerary, day_number: u32) {
        let Some(day) = itinerary.day_mut(day_number) else {
            return;
        };
        if day.activity_count() <= 1 {
            return;
        }

        let lowest = day
            .activities()
            .min_by_key(|activity| self.catalog.popularity_of(&activity.poi_id))
            .map(|activity| activity.poi_id.clone());

        if let Some(poi_id) = lowest {
            day.remove_poi(&poi_id);
            recalculate_day_schedule(day);
        }
    }

    fn move_activity(
        &self,
        itinerary: &mut Itinerary,
        poi_id: &str,
        to_day: u32,
        to_time_block: Option<BlockName>,
    ) {
        let mut detached: Option<Activity> = None;

        // The activity is searched for everywhere, and every origin day is
        // repacked after losing it.
        for day in &mut itinerary.days {
            let mut touched = false;
            for block in &mut day.blocks {
                if let Some(found) = block
                    .activities
                    .iter()
                    .find(|activity| activity.poi_id == poi_id)
                {
                    detached = Some(found.clone());
                    block.activities.retain(|activity| activity.poi_id != poi_id);
                    touched = true;
                }
            }
            if touched {
                recalculate_day_schedule(day);
            }
        }

        let Some(activity) = detached else {
            return;
        };
        let Some(day) = itinerary.day_mut(to_day) else {
            return;
        };
        let Some(block) = day.block_mut(to_time_block.unwrap_or(BlockName::Afternoon)) else {
            return;
        };

        block.activities.push(activity);
        recalculate_day_schedule(day);
    }

    fn swap(
        &self,
        itinerary: &mut Itinerary,
        target_poi_id: &str,
        replacement_poi_id: &str,
        day_number: u32,
    ) {
        let Some(day) = itinerary.day_mut(day_number) else {
            return;
        };
        let Some(replacement) = self.catalog.get(replacement_poi_id) else {
            return;
        };

        for block in &mut day.blocks {
            for activity in &mut block.activities {
                if activity.poi_id == target_poi_id {
                    // Position and previously computed times stay put until
                    // the repack below.
                    activity.poi_id = replacement.id.clone();
                    activity.name = replacement.name.clone();
                    activity.category = replacement.category;
                    activity.duration_minutes = replacement.avg_visit_duration_minutes;
                    activity.geo_coordinates = replacement.location;
                }
            }
        }
        recalculate_day_schedule(day);
    }
}

fn scheduled_poi_ids(itinerary: &Itinerary) -> FxHashSet<String> {
    itinerary.poi_ids().into_iter().collect()
}

fn matches_vocabulary(poi: &Poi, vocabulary: &[&str]) -> bool {
    let category = poi.category.label();
    vocabulary.iter().any(|word| category.contains(word))
        || poi
            .tags
            .iter()
            .any(|tag| vocabulary.contains(&tag.to_lowercase().as_str()))
}

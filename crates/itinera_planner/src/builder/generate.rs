use std::cmp;

use fxhash::{FxHashMap, FxHashSet};
use tracing::{debug, info};
use uuid::Uuid;

use crate::{
    builder::{
        pace::{ABSOLUTE_DAILY_CAP_MINUTES, Pace},
        scoring::{CandidateScorer, NearestNeighborScorer},
    },
    catalog::{NotesIndex, Poi, PoiCatalog, PoiCategory},
    model::{
        clock::ClockTime,
        itinerary::{Activity, BlockName, Day, Itinerary},
    },
    schedule::recalculate_day_schedule,
    travel::travel_minutes,
};

/// Greedy multi-day itinerary construction.
///
/// Each day gets a proportional share of the remaining non-food POIs,
/// consumes its pinned POIs first, inserts one food stop once the clock
/// passes 13:00, and otherwise picks the best-scoring remaining sight until
/// the share is met or nothing fits the pace and absolute time caps.
pub struct ItineraryBuilder<'a> {
    catalog: &'a PoiCatalog,
    days: u32,
    pace: Pace,
    food_preference: Option<String>,
    pinned: FxHashMap<u32, Vec<String>>,
    scorer: Box<dyn CandidateScorer + 'a>,
}

impl<'a> ItineraryBuilder<'a> {
    pub fn new(catalog: &'a PoiCatalog, days: u32, pace: Pace) -> Self {
        Self {
            catalog,
            days,
            pace,
            food_preference: None,
            pinned: FxHashMap::default(),
            scorer: Box::new(NearestNeighborScorer::new()),
        }
    }

    pub fn with_food_preference(mut self, preference: impl Into<String>) -> Self {
        self.food_preference = Some(preference.into());
        self
    }

    /// Forces the given POIs onto the given day, ahead of any greedy pick.
    pub fn with_pinned(mut self, day_number: u32, poi_ids: Vec<String>) -> Self {
        self.pinned.entry(day_number).or_default().extend(poi_ids);
        self
    }

    pub fn with_notes(mut self, notes: &'a NotesIndex) -> Self {
        self.scorer = Box::new(NearestNeighborScorer::with_notes(notes));
        self
    }

    pub fn with_scorer(mut self, scorer: impl CandidateScorer + 'a) -> Self {
        self.scorer = Box::new(scorer);
        self
    }

    pub fn build(self) -> Itinerary {
        let target_limit = self.pace.daily_limit_minutes();
        let max_stops = self.pace.max_stops_per_day();

        let sights: Vec<&Poi> = self
            .catalog
            .iter()
            .filter(|poi| poi.category != PoiCategory::Food)
            .collect();
        let food_pool: Vec<&Poi> = self
            .catalog
            .iter()
            .filter(|poi| poi.category == PoiCategory::Food)
            .collect();
        let total_sights = sights.len();
        let mut used: FxHashSet<String> = FxHashSet::default();

        info!(
            days = self.days,
            pace = ?self.pace,
            pool = self.catalog.len(),
            "generating itinerary"
        );

        let mut itinerary = Itinerary {
            id: format!("trip_{}", Uuid::new_v4().simple()),
            title: format!("{}-Day {} Trip", self.days, self.pace.title_label()),
            days: Vec::with_capacity(self.days as usize),
            total_duration_days: self.days,
        };

        for day_number in 1..=self.days {
            let remaining_days = (self.days - day_number + 1) as usize;
            let used_sights = sights.iter().filter(|poi| used.contains(&poi.id)).count();
            let remaining_sights = total_sights - used_sights;

            // Even split of what is left across the remaining days. Packed
            // days may take up to two extra stops, as long as every later
            // day still has at least one candidate left.
            let mut day_target = remaining_sights.div_ceil(remaining_days);
            if self.pace == Pace::Packed {
                let reserved_for_others = remaining_days - 1;
                let fair_share =
                    cmp::max(1, remaining_sights as i64 - reserved_for_others as i64) as usize;
                day_target = cmp::min(cmp::min(day_target + 2, fair_share), max_stops);
            }

            let mut day = Day::empty(day_number);
            let mut clock = ClockTime::DAY_START;
            let mut total_day_minutes: u32 = 0;
            let mut last_poi: Option<&Poi> = None;
            let mut sights_in_day = 0usize;
            let mut food_added = false;

            // Pinned POIs consume their slots unconditionally, caps or not.
            if let Some(pinned) = self.pinned.get(&day_number) {
                for poi_id in pinned {
                    let Some(poi) = self.catalog.get(poi_id) else {
                        continue;
                    };
                    if used.contains(&poi.id) {
                        continue;
                    }

                    let travel = travel_from(last_poi, poi);
                    push_activity(&mut day, poi, travel, clock);
                    used.insert(poi.id.clone());

                    let cost = poi.avg_visit_duration_minutes + travel;
                    clock = clock.plus_minutes(cost);
                    total_day_minutes += cost;
                    if poi.category == PoiCategory::Food {
                        food_added = true;
                    } else {
                        sights_in_day += 1;
                    }
                    last_poi = Some(poi);
                }
            }

            loop {
                // Meal rule: once past 13:00 without a food stop, place one.
                if !food_added && clock >= ClockTime::LUNCH {
                    let mut food_candidates: Vec<&Poi> = food_pool
                        .iter()
                        .copied()
                        .filter(|poi| !used.contains(&poi.id))
                        .collect();

                    if let Some(preference) = &self.food_preference {
                        let preference = preference.to_lowercase();
                        if preference != "no preference" {
                            let matched: Vec<&Poi> = food_candidates
                                .iter()
                                .copied()
                                .filter(|poi| matches_food_preference(poi, &preference))
                                .collect();
                            if !matched.is_empty() {
                                food_candidates = matched;
                            }
                        }
                    }

                    if !food_candidates.is_empty() {
                        let food_poi = match last_poi {
                            Some(last) => nearest(&food_candidates, last),
                            None => food_candidates[0],
                        };

                        let travel = travel_from(last_poi, food_poi);
                        let cost = food_poi.avg_visit_duration_minutes + travel;

                        if total_day_minutes + cost <= target_limit {
                            push_activity(&mut day, food_poi, travel, clock);
                            used.insert(food_poi.id.clone());
                            clock = clock.plus_minutes(cost);
                            total_day_minutes += cost;
                            food_added = true;
                            last_poi = Some(food_poi);
                            continue;
                        }

                        // Over the pace target: squeeze the meal under the
                        // absolute cap if possible, then end the day.
                        if total_day_minutes + cost <= ABSOLUTE_DAILY_CAP_MINUTES {
                            push_activity(&mut day, food_poi, travel, clock);
                            used.insert(food_poi.id.clone());
                        }
                        break;
                    }
                }

                let food_remaining = food_pool.iter().any(|poi| !used.contains(&poi.id));
                if sights_in_day >= day_target && (food_added || !food_remaining) {
                    break;
                }

                let candidates: Vec<&Poi> = sights
                    .iter()
                    .copied()
                    .filter(|poi| !used.contains(&poi.id))
                    .collect();

                if candidates.is_empty() {
                    if !food_added && food_remaining {
                        clock = cmp::max(clock, ClockTime::LUNCH);
                        continue;
                    }
                    break;
                }

                let mut best = candidates[0];
                let mut best_score = f64::NEG_INFINITY;
                for &candidate in &candidates {
                    let score = self.scorer.score(last_poi, candidate);
                    if score > best_score {
                        best_score = score;
                        best = candidate;
                    }
                }

                let travel = travel_from(last_poi, best);
                let cost = best.avg_visit_duration_minutes + travel;
                if total_day_minutes + cost > target_limit
                    || total_day_minutes + cost > ABSOLUTE_DAILY_CAP_MINUTES
                {
                    // The pick doesn't fit; give the meal rule one chance
                    // before closing the day.
                    if !food_added && food_remaining {
                        clock = cmp::max(clock, ClockTime::LUNCH);
                        continue;
                    }
                    break;
                }

                push_activity(&mut day, best, travel, clock);
                used.insert(best.id.clone());
                clock = clock.plus_minutes(cost);
                total_day_minutes += cost;
                sights_in_day += 1;
                last_poi = Some(best);
            }

            let load = recalculate_day_schedule(&mut day);
            debug!(
                day = day_number,
                stops = day.activity_count(),
                total_minutes = load.total(),
                "day filled"
            );
            itinerary.days.push(day);
        }

        itinerary
    }
}

fn travel_from(last: Option<&Poi>, next: &Poi) -> u32 {
    last.map(|poi| travel_minutes(&poi.location, &next.location))
        .unwrap_or(0)
}

fn nearest<'a>(candidates: &[&'a Poi], from: &Poi) -> &'a Poi {
    let mut best = candidates[0];
    let mut best_travel = u32::MAX;
    for &candidate in candidates {
        let travel = travel_minutes(&from.location, &candidate.location);
        if travel < best_travel {
            best_travel = travel;
            best = candidate;
        }
    }
    best
}

fn matches_food_preference(poi: &Poi, preference_lowercase: &str) -> bool {
    poi.tags.iter().any(|tag| {
        let tag = tag.to_lowercase();
        tag == preference_lowercase || tag.split(' ').any(|word| word == preference_lowercase)
    })
}

/// Appends a stop to the block its start time falls in, recording the
/// travel gap on the previously placed stop of the day.
fn push_activity(day: &mut Day, poi: &Poi, travel_from_last: u32, start: ClockTime) {
    for block in day.blocks.iter_mut().rev() {
        if let Some(last) = block.activities.last_mut() {
            last.travel_time_to_next_minutes = travel_from_last;
            break;
        }
    }

    let mut activity = Activity::from_poi(poi);
    activity.start_time = start;
    activity.end_time = start.plus_minutes(poi.avg_visit_duration_minutes);

    if let Some(block) = day.block_mut(BlockName::for_time(start)) {
        block.activities.push(activity);
    }
}

use crate::{
    catalog::{Poi, PoiCatalog, PoiCategory},
    model::{
        itinerary::{Activity, BlockName, Day, Itinerary},
        location::Location,
    },
    schedule::recalculate_day_schedule,
};

pub(crate) fn poi(
    id: &str,
    name: &str,
    lat: f64,
    lon: f64,
    category: PoiCategory,
    duration_minutes: u32,
    popularity: u32,
    tags: &[&str],
) -> Poi {
    Poi {
        id: id.to_owned(),
        name: name.to_owned(),
        location: Location::new(lat, lon),
        category,
        avg_visit_duration_minutes: duration_minutes,
        popularity_score: popularity,
        opening_hours: "09:00-18:00".to_owned(),
        tags: tags.iter().map(|tag| (*tag).to_owned()).collect(),
    }
}

/// Udaipur-flavoured catalog: eight sights and two food stops around the
/// old town, with tag vocabulary covering the indoor/outdoor attributes.
pub(crate) fn sample_catalog() -> PoiCatalog {
    PoiCatalog::new(vec![
        poi(
            "poi_city_palace",
            "City Palace",
            24.5764,
            73.6835,
            PoiCategory::Sight,
            120,
            95,
            &["history", "architecture"],
        ),
        poi(
            "poi_lake_pichola",
            "Lake Pichola",
            24.5733,
            73.6756,
            PoiCategory::Sight,
            60,
            98,
            &["nature", "boating", "lake"],
        ),
        poi(
            "poi_jagdish_temple",
            "Jagdish Temple",
            24.5794,
            73.6845,
            PoiCategory::Sight,
            45,
            90,
            &["temple", "architecture"],
        ),
        poi(
            "poi_ambrai_ghat",
            "Ambrai Ghat",
            24.5700,
            73.6800,
            PoiCategory::Sight,
            45,
            85,
            &["sunset", "ghat"],
        ),
        poi(
            "poi_bagore_ki_haveli",
            "Bagore Ki Haveli",
            24.5790,
            73.6800,
            PoiCategory::Sight,
            90,
            80,
            &["history", "museum"],
        ),
        poi(
            "poi_saheliyon_ki_bari",
            "Saheliyon-ki-Bari",
            24.6033,
            73.6917,
            PoiCategory::Sight,
            60,
            88,
            &["garden", "nature"],
        ),
        poi(
            "poi_vintage_car_museum",
            "Vintage Car Museum",
            24.5745,
            73.6977,
            PoiCategory::Sight,
            60,
            70,
            &["museum", "history"],
        ),
        poi(
            "poi_monsoon_palace",
            "Monsoon Palace",
            24.5926,
            73.6533,
            PoiCategory::Sight,
            90,
            75,
            &["viewpoint", "sunset"],
        ),
        poi(
            "poi_street_food",
            "Street Food Lane",
            24.5780,
            73.6820,
            PoiCategory::Food,
            45,
            65,
            &["street food", "local cuisine"],
        ),
        poi(
            "poi_fine_dining",
            "Ambrai Restaurant",
            24.5705,
            73.6795,
            PoiCategory::Food,
            90,
            82,
            &["fine dining", "restaurant"],
        ),
    ])
}

/// `count` sights, 90 minutes each, stepped along a short stretch of the
/// lakefront. No food at all.
pub(crate) fn sight_only_catalog(count: usize) -> PoiCatalog {
    let pois = (0..count)
        .map(|i| {
            poi(
                &format!("poi_sight_{i}"),
                &format!("Sight {i}"),
                24.57 + i as f64 * 0.002,
                73.68,
                PoiCategory::Sight,
                90,
                80 - i as u32,
                &[],
            )
        })
        .collect();

    PoiCatalog::new(pois)
}

/// A cluster of 60-minute stops: `sights` sights followed by `food` food
/// POIs, all within a couple of minutes of travel of each other.
pub(crate) fn spread_catalog(sights: usize, food: usize) -> PoiCatalog {
    let mut pois: Vec<Poi> = (0..sights)
        .map(|i| {
            poi(
                &format!("poi_sight_{i}"),
                &format!("Sight {i}"),
                24.57 + i as f64 * 0.001,
                73.68,
                PoiCategory::Sight,
                60,
                90 - i as u32,
                &[],
            )
        })
        .collect();

    pois.extend((0..food).map(|i| {
        poi(
            &format!("poi_food_{i}"),
            &format!("Food {i}"),
            24.57 + i as f64 * 0.001,
            73.681,
            PoiCategory::Food,
            60,
            70 - i as u32,
            &["local cuisine"],
        )
    }));

    PoiCatalog::new(pois)
}

pub(crate) fn activity_with_duration(poi: &Poi, duration_minutes: u32) -> Activity {
    let mut activity = Activity::from_poi(poi);
    activity.duration_minutes = duration_minutes;
    activity
}

fn push(catalog: &PoiCatalog, day: &mut Day, block: BlockName, poi_id: &str) {
    let poi = catalog
        .get(poi_id)
        .unwrap_or_else(|| panic!("fixture poi {poi_id} missing"));
    day.block_mut(block)
        .unwrap()
        .activities
        .push(Activity::from_poi(poi));
}

/// Deterministic two-day fixture built by hand from [`sample_catalog`]:
///
/// - day 1: City Palace (morning), Jagdish Temple + Lake Pichola (afternoon)
/// - day 2: Ambrai Ghat (morning), Bagore Ki Haveli (afternoon)
///
/// Leaves the garden, both palaces outside town, the museum and both food
/// stops unscheduled, so ranked-insertion edits always have candidates.
pub(crate) fn two_day_itinerary(catalog: &PoiCatalog) -> Itinerary {
    let mut day1 = Day::empty(1);
    push(catalog, &mut day1, BlockName::Morning, "poi_city_palace");
    push(catalog, &mut day1, BlockName::Afternoon, "poi_jagdish_temple");
    push(catalog, &mut day1, BlockName::Afternoon, "poi_lake_pichola");
    recalculate_day_schedule(&mut day1);

    let mut day2 = Day::empty(2);
    push(catalog, &mut day2, BlockName::Morning, "poi_ambrai_ghat");
    push(catalog, &mut day2, BlockName::Afternoon, "poi_bagore_ki_haveli");
    recalculate_day_schedule(&mut day2);

    Itinerary {
        id: "trip_fixture".to_owned(),
        title: "2-Day Relaxed Trip".to_owned(),
        days: vec![day1, day2],
        total_duration_days: 2,
    }
}

//! Udaipur dataset used by the demo driver.

use itinera_planner::{
    catalog::{Poi, PoiCatalog, PoiCategory},
    model::location::Location,
};

fn poi(
    id: &str,
    name: &str,
    lat: f64,
    lon: f64,
    category: PoiCategory,
    duration: u32,
    popularity: u32,
    opening_hours: &str,
    tags: &[&str],
) -> Poi {
    Poi {
        id: id.to_owned(),
        name: name.to_owned(),
        location: Location::new(lat, lon),
        category,
        avg_visit_duration_minutes: duration,
        popularity_score: popularity,
        opening_hours: opening_hours.to_owned(),
        tags: tags.iter().map(|t| (*t).to_owned()).collect(),
    }
}

pub fn udaipur_catalog() -> PoiCatalog {
    use PoiCategory::{Food, Sight};

    PoiCatalog::new(vec![
        poi(
            "osm_node_936651777",
            "City Palace",
            24.5764,
            73.6835,
            Sight,
            120,
            95,
            "09:30-17:30",
            &["history", "architecture", "lake_view"],
        ),
        poi(
            "node/789012",
            "Lake Pichola",
            24.5733,
            73.6756,
            Sight,
            60,
            98,
            "00:00-24:00",
            &["nature", "boating"],
        ),
        poi(
            "osm_node_6687057486",
            "Ambrai Ghat",
            24.5700,
            73.6800,
            Sight,
            45,
            85,
            "06:00-22:00",
            &["sunset", "viewpoint"],
        ),
        poi(
            "osm_way_111321620",
            "Jagdish Temple",
            24.5794,
            73.6845,
            Sight,
            45,
            90,
            "05:00-22:00",
            &["religion", "architecture", "history"],
        ),
        poi(
            "osm_way_108781864",
            "Saheliyon-ki-Bari",
            24.6033,
            73.6917,
            Sight,
            60,
            88,
            "09:00-19:00",
            &["nature", "garden", "history"],
        ),
        poi(
            "osm_node_7332544542",
            "Bagore Ki Haveli",
            24.5790,
            73.6800,
            Sight,
            90,
            92,
            "10:00-19:00",
            &["history", "culture", "museum"],
        ),
        poi(
            "node/444555",
            "Fateh Sagar Lake",
            24.6000,
            73.6750,
            Sight,
            90,
            94,
            "00:00-24:00",
            &["nature", "boating", "sunset"],
        ),
        poi(
            "osm_way_111334933",
            "Monsoon Palace (Sajjangarh)",
            24.5900,
            73.6300,
            Sight,
            120,
            89,
            "09:00-18:00",
            &["history", "architecture", "viewpoint"],
        ),
        poi(
            "osm_node_4830850421",
            "Jag Mandir",
            24.5680,
            73.6770,
            Sight,
            90,
            91,
            "10:00-18:00",
            &["history", "architecture", "lake_view"],
        ),
        poi(
            "node/777888",
            "Shilpgram",
            24.6050,
            73.6450,
            Sight,
            120,
            80,
            "11:00-19:00",
            &["culture", "craft", "village"],
        ),
        poi(
            "osm_node_3898009271",
            "Vintage Car Museum",
            24.5750,
            73.6930,
            Sight,
            60,
            82,
            "09:00-21:00",
            &["museum", "cars", "history"],
        ),
        poi(
            "node/999000",
            "Gulab Bagh & Zoo",
            24.5720,
            73.6950,
            Sight,
            90,
            75,
            "08:00-18:00",
            &["nature", "garden", "zoo"],
        ),
        poi(
            "osm_node_655410653",
            "Ambrai Restaurant",
            24.5760,
            73.6800,
            Food,
            90,
            96,
            "12:00-23:00",
            &["fine dining", "local cuisine", "lake view"],
        ),
        poi(
            "food/002",
            "Lakeside Street Food Stalls",
            24.5800,
            73.6850,
            Food,
            45,
            92,
            "16:00-22:00",
            &["street food", "local cuisine", "vegetarian"],
        ),
        poi(
            "osm_node_10881009914",
            "Millets of Mewar",
            24.5780,
            73.6820,
            Food,
            75,
            89,
            "11:00-22:30",
            &["vegetarian", "local cuisine", "healthy"],
        ),
        poi(
            "food/004",
            "Upre by 1500 AD",
            24.5740,
            73.6780,
            Food,
            90,
            94,
            "12:30-23:00",
            &["fine dining", "non-vegetarian", "rooftop"],
        ),
        poi(
            "osm_node_4086293817",
            "Jheel's Ginger Coffee Bar",
            24.5795,
            73.6815,
            Food,
            60,
            91,
            "09:00-21:00",
            &["cafe", "vegetarian", "bakery"],
        ),
    ])
}

use fxhash::{FxHashMap, FxHashSet};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::model::location::Location;

/// Popularity assumed for activities whose POI is unknown to the catalog.
pub const DEFAULT_POPULARITY: u32 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum PoiCategory {
    Sight,
    Food,
    Rest,
    Activity,
    Shopping,
    Other,
}

impl PoiCategory {
    pub fn label(&self) -> &'static str {
        match self {
            PoiCategory::Sight => "sight",
            PoiCategory::Food => "food",
            PoiCategory::Rest => "rest",
            PoiCategory::Activity => "activity",
            PoiCategory::Shopping => "shopping",
            PoiCategory::Other => "other",
        }
    }
}

/// Immutable point-of-interest record. Loaded once at startup and never
/// mutated; itineraries copy the fields they need at insertion time.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Poi {
    pub id: String,
    pub name: String,
    pub location: Location,
    pub category: PoiCategory,
    pub avg_visit_duration_minutes: u32,
    /// 0-100 ranking score.
    pub popularity_score: u32,
    /// Standardized format, e.g. "09:00-17:00".
    pub opening_hours: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl Poi {
    pub fn has_tag_matching(&self, needle_lowercase: &str) -> bool {
        self.tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(needle_lowercase))
    }
}

/// Read-only POI catalog with an id index.
pub struct PoiCatalog {
    pois: Vec<Poi>,
    index: FxHashMap<String, usize>,
}

impl PoiCatalog {
    pub fn new(pois: Vec<Poi>) -> Self {
        let index = pois
            .iter()
            .enumerate()
            .map(|(i, poi)| (poi.id.clone(), i))
            .collect();

        Self { pois, index }
    }

    pub fn get(&self, poi_id: &str) -> Option<&Poi> {
        self.index.get(poi_id).map(|&i| &self.pois[i])
    }

    pub fn contains(&self, poi_id: &str) -> bool {
        self.index.contains_key(poi_id)
    }

    /// Catalog order is the tie-break order for every ranked selection.
    pub fn iter(&self) -> impl Iterator<Item = &Poi> {
        self.pois.iter()
    }

    pub fn len(&self) -> usize {
        self.pois.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pois.is_empty()
    }

    pub fn popularity_of(&self, poi_id: &str) -> u32 {
        self.get(poi_id)
            .map(|poi| poi.popularity_score)
            .unwrap_or(DEFAULT_POPULARITY)
    }
}

/// Ids of POIs that have supplementary descriptive content available.
/// The builder rewards these with a scoring bonus; where the content itself
/// comes from is not this crate's concern.
#[derive(Debug, Default, Clone)]
pub struct NotesIndex {
    ids: FxHashSet<String>,
}

impl NotesIndex {
    pub fn new<I>(ids: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        Self {
            ids: ids.into_iter().collect(),
        }
    }

    pub fn insert(&mut self, poi_id: impl Into<String>) {
        self.ids.insert(poi_id.into());
    }

    pub fn has_notes(&self, poi_id: &str) -> bool {
        self.ids.contains(poi_id)
    }
}

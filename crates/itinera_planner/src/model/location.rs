use geo::{Distance, Haversine};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A WGS84 coordinate. Serialized as `{ "lat": .., "lon": .. }`, the shape
/// the POI catalog and the itinerary wire format both use.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Location {
    lat: f64,
    lon: f64,
}

impl Location {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lon(&self) -> f64 {
        self.lon
    }

    pub fn haversine_km(&self, to: &Location) -> f64 {
        let haversine = Haversine;

        haversine.distance(geo::Point::from(self), geo::Point::from(to)) / 1000.0
    }
}

impl From<&Location> for geo::Point<f64> {
    fn from(location: &Location) -> Self {
        geo::Point::new(location.lon, location.lat)
    }
}

use crate::model::location::Location;

/// Uniform city travel speed, regardless of category or time of day.
pub const ASSUMED_SPEED_KMH: f64 = 20.0;

pub fn distance_km(from: &Location, to: &Location) -> f64 {
    from.haversine_km(to)
}

/// Estimated travel time between two stops, rounded up to whole minutes.
pub fn travel_minutes(from: &Location, to: &Location) -> u32 {
    let hours = distance_km(from, to) / ASSUMED_SPEED_KMH;

    (hours * 60.0).ceil() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_point_is_free() {
        let here = Location::new(24.5764, 73.6835);
        assert_eq!(travel_minutes(&here, &here), 0);
    }

    #[test]
    fn test_minutes_round_up() {
        // ~3.1 km at 20 km/h is ~9.3 min, which must round up to 10
        let a = Location::new(24.5764, 73.6835);
        let b = Location::new(24.6033, 73.6917);
        let minutes = travel_minutes(&a, &b);

        let exact = distance_km(&a, &b) / ASSUMED_SPEED_KMH * 60.0;
        assert_eq!(minutes, exact.ceil() as u32);
        assert!(minutes >= 1);
    }
}

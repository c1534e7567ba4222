pub mod clock;
pub mod itinerary;
pub mod location;

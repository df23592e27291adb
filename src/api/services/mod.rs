pub mod health;
pub mod listings;

pub use health::{AppStartTime, HealthService, health_routes};
pub use listings::{ListingResponse, PostNewListing, listing_routes};

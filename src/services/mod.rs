pub mod listing_service;
pub mod rating;

pub use listing_service::{ContactInfo, ListingService, NewListing};
pub use rating::rating;

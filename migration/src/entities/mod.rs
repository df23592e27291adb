pub mod listing;

pub use listing::Entity as ListingEntity;

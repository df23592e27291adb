//! Listing management service
//!
//! Provides unified business logic for listing operations: validated
//! creation, filtered listing, counter updates, and the contact reveal.
//! HTTP handlers stay thin and call into this service.

use std::sync::Arc;

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::config::get_config;
use crate::errors::{Result, ScrapTradeError};
use crate::storage::{Listing, ListingFilter, ListingKind, SeaOrmStorage};

// ============ Request/Response DTOs ============

/// Request to create a new listing
///
/// Fields arrive as the caller sent them; required-field checks happen in
/// [`ListingService::create`], not at deserialization time, so a missing
/// field produces a `Validation` error instead of a framework 400 blob.
#[derive(Debug, Clone, Default)]
pub struct NewListing {
    /// "buy" or "sell"
    pub kind: Option<String>,
    pub category: Option<String>,
    pub details: Option<String>,
    /// Price per unit
    pub rate: Option<f64>,
    pub unit: Option<String>,
    pub city: Option<String>,
    pub user_name: Option<String>,
}

/// Static contact payload returned by a contact reveal
#[derive(Debug, Clone)]
pub struct ContactInfo {
    pub email: String,
    pub message: String,
}

// ============ ListingService Implementation ============

/// Service for listing management operations
pub struct ListingService {
    storage: Arc<SeaOrmStorage>,
}

impl ListingService {
    pub fn new(storage: Arc<SeaOrmStorage>) -> Self {
        Self { storage }
    }

    /// Create a listing from caller-supplied fields.
    ///
    /// `type`, `category` and `rate` are required; the rest default to empty
    /// strings. Counters start at zero and `created_at` is stamped here.
    pub async fn create(&self, request: NewListing) -> Result<Listing> {
        let kind = request
            .kind
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(|| ScrapTradeError::validation("Missing required field: type"))?
            .parse::<ListingKind>()
            .map_err(ScrapTradeError::validation)?;

        let category = request
            .category
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(|| ScrapTradeError::validation("Missing required field: category"))?;

        let rate = request
            .rate
            .ok_or_else(|| ScrapTradeError::validation("Missing required field: rate"))?;
        if !rate.is_finite() {
            return Err(ScrapTradeError::validation(
                "Field 'rate' must be a finite number",
            ));
        }

        let record = Listing {
            id: Uuid::new_v4().to_string(),
            kind,
            category,
            details: request.details.unwrap_or_default(),
            rate,
            unit: request.unit.unwrap_or_default(),
            city: request.city.unwrap_or_default(),
            user_name: request.user_name.unwrap_or_default(),
            views: 0,
            clicks: 0,
            created_at: Utc::now(),
        };

        self.storage.insert(&record).await?;

        info!(
            "Listing {} created: {} {} in {}",
            record.id, record.kind, record.category, record.city
        );
        Ok(record)
    }

    /// Load listings matching `filter`, newest first.
    pub async fn list(&self, filter: ListingFilter) -> Result<Vec<Listing>> {
        self.storage.load_filtered(filter).await
    }

    /// Re-filter an already-fetched set without another round trip.
    ///
    /// Case-insensitive substring match; criteria that are absent (or blank)
    /// always match, present criteria must all match.
    pub fn apply_local_filter(
        listings: &[Listing],
        category: Option<&str>,
        city: Option<&str>,
    ) -> Vec<Listing> {
        let category = category
            .map(str::to_lowercase)
            .filter(|s| !s.trim().is_empty());
        let city = city.map(str::to_lowercase).filter(|s| !s.trim().is_empty());

        listings
            .iter()
            .filter(|l| {
                let category_match = category
                    .as_deref()
                    .is_none_or(|c| l.category.to_lowercase().contains(c));
                let city_match = city
                    .as_deref()
                    .is_none_or(|c| l.city.to_lowercase().contains(c));

                category_match && city_match
            })
            .cloned()
            .collect()
    }

    /// Bump a listing's view counter.
    pub async fn record_view(&self, id: &str) -> Result<()> {
        self.storage.increment_views(id).await
    }

    /// Bump a listing's reveal counter and return the contact payload.
    ///
    /// The payload is static (configured), not per-listing.
    pub async fn record_contact_reveal(&self, id: &str) -> Result<ContactInfo> {
        self.storage.increment_clicks(id).await?;

        let config = get_config();
        Ok(ContactInfo {
            email: config.contact.email.clone(),
            message: config.contact.message.clone(),
        })
    }
}

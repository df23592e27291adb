use tracing::error;

use crate::storage::models::{Listing, ListingKind};
use migration::entities::listing;

/// 将 Sea-ORM Model 转换为 Listing
pub fn model_to_listing(model: listing::Model) -> Listing {
    let kind = model.kind.parse::<ListingKind>().unwrap_or_else(|e| {
        // 数据库中的值只会由已校验的写路径产生，这里兜底
        error!("Corrupt listing kind for id {}: {}", model.id, e);
        ListingKind::Sell
    });

    Listing {
        id: model.id,
        kind,
        category: model.category,
        details: model.details,
        rate: model.rate,
        unit: model.unit,
        city: model.city,
        user_name: model.user_name,
        views: model.views.max(0) as usize,
        clicks: model.clicks.max(0) as usize,
        created_at: model.created_at,
    }
}

/// 将 Listing 转换为 ActiveModel（用于插入）
pub fn listing_to_active_model(listing: &Listing) -> listing::ActiveModel {
    use sea_orm::ActiveValue::Set;

    listing::ActiveModel {
        id: Set(listing.id.clone()),
        kind: Set(listing.kind.to_string()),
        category: Set(listing.category.clone()),
        details: Set(listing.details.clone()),
        rate: Set(listing.rate),
        unit: Set(listing.unit.clone()),
        city: Set(listing.city.clone()),
        user_name: Set(listing.user_name.clone()),
        views: Set(listing.views as i64),
        clicks: Set(listing.clicks as i64),
        created_at: Set(listing.created_at),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn create_test_model() -> listing::Model {
        listing::Model {
            id: "c4b57e52-0000-4000-8000-000000000001".to_string(),
            kind: "sell".to_string(),
            category: "Copper".to_string(),
            details: "Clean scrap copper wire".to_string(),
            rate: 450.0,
            unit: "kg".to_string(),
            city: "Pune".to_string(),
            user_name: "A".to_string(),
            views: 12,
            clicks: 3,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn model_converts_to_listing() {
        let model = create_test_model();
        let listing = model_to_listing(model.clone());

        assert_eq!(listing.id, model.id);
        assert_eq!(listing.kind, ListingKind::Sell);
        assert_eq!(listing.category, "Copper");
        assert_eq!(listing.views, 12);
        assert_eq!(listing.clicks, 3);
    }

    #[test]
    fn negative_counters_clamp_to_zero() {
        let mut model = create_test_model();
        model.views = -5;
        model.clicks = -1;

        let listing = model_to_listing(model);
        assert_eq!(listing.views, 0);
        assert_eq!(listing.clicks, 0);
    }

    #[test]
    fn corrupt_kind_falls_back_to_sell() {
        let mut model = create_test_model();
        model.kind = "lease".to_string();

        let listing = model_to_listing(model);
        assert_eq!(listing.kind, ListingKind::Sell);
    }

    #[test]
    fn active_model_round_trip() {
        let model = create_test_model();
        let listing = model_to_listing(model.clone());
        let active = listing_to_active_model(&listing);

        use sea_orm::ActiveValue;
        assert_eq!(active.id, ActiveValue::Set(model.id));
        assert_eq!(active.kind, ActiveValue::Set("sell".to_string()));
        assert_eq!(active.views, ActiveValue::Set(12));
    }
}

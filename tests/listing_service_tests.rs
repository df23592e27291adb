//! ListingService tests
//!
//! Tests for the listing management service layer.

use std::sync::Arc;
use std::sync::Once;
use std::time::Duration;

use chrono::Utc;
use scraptrade::config::init_config;
use scraptrade::errors::ScrapTradeError;
use scraptrade::services::{ListingService, NewListing, rating};
use scraptrade::storage::backend::SeaOrmStorage;
use scraptrade::storage::{Listing, ListingFilter, ListingKind};
use tempfile::TempDir;

// =============================================================================
// Test Setup
// =============================================================================

static INIT: Once = Once::new();

fn init_test_config() {
    INIT.call_once(|| {
        init_config();
    });
}

async fn create_test_service() -> (ListingService, TempDir) {
    init_test_config();

    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let db_url = format!("sqlite://{}?mode=rwc", db_path.display());

    let storage = SeaOrmStorage::new(&db_url, "sqlite")
        .await
        .expect("Failed to create storage");

    (ListingService::new(Arc::new(storage)), temp_dir)
}

fn sell_request(category: &str, city: &str) -> NewListing {
    NewListing {
        kind: Some("sell".to_string()),
        category: Some(category.to_string()),
        details: Some(format!("{} scrap lot", category)),
        rate: Some(450.0),
        unit: Some("kg".to_string()),
        city: Some(city.to_string()),
        user_name: Some("A".to_string()),
    }
}

// =============================================================================
// 创建与校验
// =============================================================================

#[tokio::test]
async fn test_create_assigns_id_and_zeroes_counters() {
    let (service, _tmp) = create_test_service().await;

    let created = service.create(sell_request("Copper", "Pune")).await.unwrap();

    assert!(!created.id.is_empty());
    assert_eq!(created.kind, ListingKind::Sell);
    assert_eq!(created.category, "Copper");
    assert_eq!(created.rate, 450.0);
    assert_eq!(created.views, 0);
    assert_eq!(created.clicks, 0);
    assert!(created.created_at <= Utc::now());
}

#[tokio::test]
async fn test_create_missing_required_fields_is_validation_error() {
    let (service, _tmp) = create_test_service().await;

    let mut no_kind = sell_request("Copper", "Pune");
    no_kind.kind = None;
    let err = service.create(no_kind).await.unwrap_err();
    assert!(matches!(err, ScrapTradeError::Validation(_)));

    let mut no_category = sell_request("Copper", "Pune");
    no_category.category = Some("   ".to_string());
    let err = service.create(no_category).await.unwrap_err();
    assert!(matches!(err, ScrapTradeError::Validation(_)));

    let mut no_rate = sell_request("Copper", "Pune");
    no_rate.rate = None;
    let err = service.create(no_rate).await.unwrap_err();
    assert!(matches!(err, ScrapTradeError::Validation(_)));
}

#[tokio::test]
async fn test_create_rejects_unknown_kind() {
    let (service, _tmp) = create_test_service().await;

    let mut bad_kind = sell_request("Copper", "Pune");
    bad_kind.kind = Some("rent".to_string());
    let err = service.create(bad_kind).await.unwrap_err();
    assert!(matches!(err, ScrapTradeError::Validation(_)));
}

#[tokio::test]
async fn test_create_optional_fields_default_to_empty() {
    let (service, _tmp) = create_test_service().await;

    let request = NewListing {
        kind: Some("buy".to_string()),
        category: Some("Iron".to_string()),
        rate: Some(30.0),
        ..Default::default()
    };
    let created = service.create(request).await.unwrap();

    assert_eq!(created.details, "");
    assert_eq!(created.unit, "");
    assert_eq!(created.city, "");
    assert_eq!(created.user_name, "");
}

// =============================================================================
// 列表
// =============================================================================

#[tokio::test]
async fn test_list_returns_new_record_first() {
    let (service, _tmp) = create_test_service().await;

    service.create(sell_request("Copper", "Pune")).await.unwrap();
    tokio::time::sleep(Duration::from_millis(5)).await;
    let newest = service.create(sell_request("Brass", "Mumbai")).await.unwrap();

    let all = service.list(ListingFilter::default()).await.unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].id, newest.id);
}

#[tokio::test]
async fn test_list_city_filter_is_substring_match() {
    let (service, _tmp) = create_test_service().await;

    service.create(sell_request("Iron", "Delhi")).await.unwrap();
    service.create(sell_request("Iron", "Pune")).await.unwrap();

    let filter = ListingFilter {
        city: Some("ELH".to_string()),
        ..Default::default()
    };
    let matches = service.list(filter).await.unwrap();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].city, "Delhi");
}

// =============================================================================
// 本地再过滤
// =============================================================================

fn local_listing(category: &str, city: &str) -> Listing {
    Listing {
        id: format!("{}-{}", category, city),
        kind: ListingKind::Sell,
        category: category.to_string(),
        details: String::new(),
        rate: 1.0,
        unit: "kg".to_string(),
        city: city.to_string(),
        user_name: "tester".to_string(),
        views: 0,
        clicks: 0,
        created_at: Utc::now(),
    }
}

#[test]
fn test_local_filter_absent_criteria_match_everything() {
    let listings = vec![local_listing("Copper", "Pune"), local_listing("Iron", "Delhi")];

    let result = ListingService::apply_local_filter(&listings, None, None);
    assert_eq!(result.len(), 2);

    // 空白字符串等同于未给出
    let result = ListingService::apply_local_filter(&listings, Some(""), Some("  "));
    assert_eq!(result.len(), 2);
}

#[test]
fn test_local_filter_criteria_are_anded() {
    let listings = vec![
        local_listing("Copper", "Pune"),
        local_listing("Copper", "Delhi"),
        local_listing("Iron", "Pune"),
    ];

    let result = ListingService::apply_local_filter(&listings, Some("copp"), Some("pun"));
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].category, "Copper");
    assert_eq!(result[0].city, "Pune");
}

#[test]
fn test_local_filter_is_case_insensitive_substring() {
    let listings = vec![local_listing("Copper Wire", "New Delhi")];

    let result = ListingService::apply_local_filter(&listings, Some("WIRE"), Some("delhi"));
    assert_eq!(result.len(), 1);

    let result = ListingService::apply_local_filter(&listings, Some("gold"), None);
    assert!(result.is_empty());
}

// =============================================================================
// 计数与联系方式揭示
// =============================================================================

#[tokio::test]
async fn test_record_view_twice_increments_by_two() {
    let (service, _tmp) = create_test_service().await;

    let created = service.create(sell_request("Steel", "Chennai")).await.unwrap();

    service.record_view(&created.id).await.unwrap();
    service.record_view(&created.id).await.unwrap();

    let all = service.list(ListingFilter::default()).await.unwrap();
    assert_eq!(all[0].views, 2);
}

#[tokio::test]
async fn test_record_view_unknown_id_is_not_found() {
    let (service, _tmp) = create_test_service().await;

    let err = service.record_view("no-such-id").await.unwrap_err();
    assert!(matches!(err, ScrapTradeError::NotFound(_)));
}

#[tokio::test]
async fn test_contact_reveal_unknown_id_is_not_found() {
    let (service, _tmp) = create_test_service().await;

    let err = service.record_contact_reveal("no-such-id").await.unwrap_err();
    assert!(matches!(err, ScrapTradeError::NotFound(_)));
}

#[tokio::test]
async fn test_end_to_end_scenario() {
    let (service, _tmp) = create_test_service().await;

    // create listing {type:"sell", category:"Copper", rate:450, unit:"kg", city:"Pune", userName:"A"}
    let created = service.create(sell_request("Copper", "Pune")).await.unwrap();
    assert_eq!(created.views, 0);
    assert_eq!(created.clicks, 0);

    // reveal contact
    let contact = service.record_contact_reveal(&created.id).await.unwrap();
    assert!(!contact.email.is_empty());

    let all = service.list(ListingFilter::default()).await.unwrap();
    assert_eq!(all[0].clicks, 1);
    assert_eq!(all[0].views, 0);

    // 未被浏览过的挂单，即使有点击也只有一星
    assert_eq!(rating(all[0].views, all[0].clicks), 1);
}

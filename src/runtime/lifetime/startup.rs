use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::{debug, info};

use crate::services::ListingService;
use crate::storage::{SeaOrmStorage, StorageFactory};

pub struct StartupContext {
    pub storage: Arc<SeaOrmStorage>,
    pub listing_service: Arc<ListingService>,
}

/// 准备服务器启动的上下文
///
/// 连接存储后端（自动跑迁移）并装配业务服务。
pub async fn prepare_server_startup() -> Result<StartupContext> {
    let start_time = std::time::Instant::now();
    debug!("Starting pre-startup processing...");

    let storage = StorageFactory::create()
        .await
        .context("Failed to create storage backend")?;
    info!("Using storage backend: {}", storage.backend_name());

    let listing_service = Arc::new(ListingService::new(storage.clone()));

    debug!("Pre-startup processing done in {:?}", start_time.elapsed());

    Ok(StartupContext {
        storage,
        listing_service,
    })
}

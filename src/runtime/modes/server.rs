//! Server mode
//!
//! This module contains the HTTP server startup logic.
//! It configures and starts the HTTP server with all necessary routes.

use actix_cors::Cors;
use actix_web::{
    App, HttpServer,
    middleware::{Compress, from_fn},
    web,
};
use anyhow::Result;
use tracing::warn;

use crate::api::middleware::RequestIdMiddleware;
use crate::api::services::{AppStartTime, health_routes, listing_routes};
use crate::config::CorsConfig;
use crate::runtime::lifetime;

/// Build CORS middleware from configuration
///
/// Disabled config falls back to the browser's same-origin policy.
fn build_cors_middleware(cors_config: &CorsConfig) -> Cors {
    if !cors_config.enabled {
        return Cors::default();
    }

    let is_any_origin = cors_config.allowed_origins.iter().any(|o| o == "*");

    let mut cors = Cors::default();
    if is_any_origin {
        cors = cors.allow_any_origin();
    } else {
        if cors_config.allowed_origins.is_empty() {
            warn!("CORS enabled but allowed_origins is empty; no cross-origin requests will be allowed");
        }
        for origin in &cors_config.allowed_origins {
            cors = cors.allowed_origin(origin);
        }
    }

    let methods: Vec<actix_web::http::Method> = cors_config
        .allowed_methods
        .iter()
        .filter_map(|m| m.parse().ok())
        .collect();
    if !methods.is_empty() {
        cors = cors.allowed_methods(methods);
    }

    for header in &cors_config.allowed_headers {
        cors = cors.allowed_header(header);
    }

    cors = cors.max_age(cors_config.max_age as usize);

    // any_origin + credentials 组合会让任意站点带凭证跨域，强制不开启
    if cors_config.allow_credentials && !is_any_origin {
        cors = cors.supports_credentials();
    } else if cors_config.allow_credentials {
        tracing::error!(
            "CORS allow_credentials ignored: incompatible with wildcard allowed_origins"
        );
    }

    cors
}

/// Run the HTTP server
///
/// **Note**: Logging system must be initialized before calling this function
pub async fn run_server() -> Result<()> {
    // Record application start time
    let app_start_time = AppStartTime {
        start_datetime: chrono::Utc::now(),
    };

    let startup = lifetime::startup::prepare_server_startup()
        .await
        .map_err(|e| {
            tracing::error!("Server startup failed: {}", e);
            e
        })?;

    let storage = startup.storage.clone();
    let listing_service = startup.listing_service.clone();

    let config = crate::config::get_config();

    let cpu_count = config.server.cpu_count.min(32);
    let bind_address = format!("{}:{}", config.server.host, config.server.port);

    warn!(
        "Starting server at http://{} with {} workers",
        bind_address, cpu_count
    );

    let cors_config = config.cors.clone();

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(storage.clone()))
            .app_data(web::Data::new(listing_service.clone()))
            .app_data(web::Data::new(app_start_time.clone()))
            .wrap(Compress::default())
            .wrap(build_cors_middleware(&cors_config))
            .wrap(from_fn(RequestIdMiddleware::inject))
            .service(listing_routes())
            .service(health_routes())
    })
    .workers(cpu_count)
    .bind(&bind_address)?
    .run()
    .await?;

    Ok(())
}

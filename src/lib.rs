//! ScrapTrade - a lightweight scrap-materials classifieds service
//!
//! This library provides the core functionality for the ScrapTrade service:
//! buy/sell listings over a SeaORM storage backend, engagement counters,
//! and the derived star rating.
//!
//! # Architecture
//! - `storage`: SeaORM storage backend and data access
//! - `services`: Business logic (listing management, rating engine)
//! - `api`: HTTP services and middleware
//! - `config`: Configuration management
//! - `runtime`: Application lifecycle and server mode
//! - `system`: Logging and platform utilities

pub mod api;
pub mod config;
pub mod errors;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod system;

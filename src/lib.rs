//! Shelfwatch - price tracking and pricing advice for self-published titles.
//!
//! This crate tracks digital and print titles, records their market history
//! as append-only snapshots, flags significant price/rating movements as
//! notifications, and recommends list prices from competitor statistics.
//!
//! # Architecture
//!
//! The engine is a set of synchronous, request-scoped computations over an
//! injected catalog store:
//!
//! - **`pricing::competitors`** - same-category peer aggregation
//! - **`pricing::suggestion`** - list-price heuristic with clamped band
//! - **`pricing::profit`** - tiered royalty profit model
//! - **`detector`** - significant-change detection on updates
//!
//! A price/rating update always passes through the change detector and
//! commits the field update, a snapshot, and any notifications as one unit.
//!
//! # Modules
//!
//! - [`config`] - Configuration loading from TOML files
//! - [`domain`] - Plain records: titles, snapshots, notifications, watchlists
//! - [`detector`] - Significant-change detection
//! - [`pricing`] - Suggestion and profit calculators
//! - [`store`] - Catalog persistence (SQLite via Diesel, in-memory for tests)
//! - [`service`] - Orchestration of store and engine
//! - [`cli`] - Command-line surface
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```no_run
//! use shelfwatch::detector::DetectorConfig;
//! use shelfwatch::pricing::{ProfitConfig, SuggestionConfig};
//! use shelfwatch::service::Tracker;
//! use shelfwatch::store::MemoryCatalog;
//!
//! let tracker = Tracker::new(
//!     MemoryCatalog::new(),
//!     SuggestionConfig::default(),
//!     DetectorConfig::default(),
//!     ProfitConfig::default(),
//! );
//! ```

pub mod cli;
pub mod config;
pub mod detector;
pub mod domain;
pub mod error;
pub mod pricing;
pub mod service;
pub mod store;

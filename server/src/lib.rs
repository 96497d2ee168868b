//! Job Scrape Proxy Server
//!
//! Accepts job searches over HTTP, forwards them to the scraping backend and
//! returns normalized, salary-filtered listings.

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;
pub mod telemetry;

pub use config::{BackendConfig, Config, ConfigError};
pub use error::AppError;
pub use router::create_router;
pub use state::AppState;

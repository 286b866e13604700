//! Encrypted admin navigation service.
//!
//! Resolves obfuscated back-office paths (`/<token>/<token>[/new | /<id>/edit]`)
//! to the page component that serves them, and generates the matching links.

pub mod api;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod routing;

pub use config::AppConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use routing::{EncryptedRouter, Resolution, SegmentCodec};

//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware)
//!     → request.rs (request ID)
//!     → routing::EncryptedRouter (resolve path)
//!     → JSON navigation state, or redirect home
//! ```

pub mod error;
pub mod request;
pub mod server;

pub use error::AppError;
pub use request::{MakeRequestUuidV4, X_REQUEST_ID};
pub use server::{AppState, HttpServer};

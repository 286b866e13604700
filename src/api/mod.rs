//! Route introspection API.
//!
//! Read-only endpoints over the codec and registry, used by the CLI and by
//! front-end tooling that needs tokens without embedding the vocabulary.

pub mod handlers;

use axum::{routing::get, Router};

use self::handlers::*;
use crate::http::server::AppState;

pub fn setup_api_router(state: AppState) -> Router {
    Router::new()
        .route("/_routes/status", get(get_status))
        .route("/_routes/sidebar", get(get_sidebar))
        .route("/_routes/encode/{word}", get(encode_word))
        .route("/_routes/decode/{token}", get(decode_token))
        .with_state(state)
}

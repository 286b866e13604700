use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use crate::http::error::AppError;
use crate::http::server::AppState;
use crate::observability::metrics;
use crate::routing::links::{sidebar, MenuSection};
use crate::routing::Segment;

#[derive(Serialize)]
pub struct SystemStatus {
    pub version: &'static str,
    pub status: &'static str,
    pub vocabulary: usize,
    pub routes: usize,
    pub home_path: String,
}

#[derive(Serialize)]
pub struct TokenMapping {
    pub word: Segment,
    pub token: String,
}

pub async fn get_status(State(state): State<AppState>) -> Json<SystemStatus> {
    let settings = state.settings.load();
    Json(SystemStatus {
        version: env!("CARGO_PKG_VERSION"),
        status: "operational",
        vocabulary: state.router.codec().len(),
        routes: state.router.registry().len(),
        home_path: settings.home_path.clone(),
    })
}

pub async fn get_sidebar(State(state): State<AppState>) -> Json<Vec<MenuSection>> {
    Json(sidebar(state.router.codec(), state.router.registry()))
}

pub async fn encode_word(
    State(state): State<AppState>,
    Path(word): Path<String>,
) -> Result<Json<TokenMapping>, AppError> {
    let segment = word.parse::<Segment>();
    metrics::record_codec_lookup("encode", segment.is_ok());
    let segment = segment?;

    Ok(Json(TokenMapping {
        word: segment,
        token: state.router.codec().encode(segment).to_string(),
    }))
}

pub async fn decode_token(
    State(state): State<AppState>,
    Path(token): Path<String>,
) -> Result<Json<TokenMapping>, AppError> {
    let decoded = state.router.codec().decode(&token);
    metrics::record_codec_lookup("decode", decoded.is_some());

    match decoded {
        Some(word) => Ok(Json(TokenMapping { word, token })),
        None => Err(AppError::UnknownToken(token)),
    }
}

//! Axum route handlers for the Writing API.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::state::AppState;
use crate::writing::generator::{GenerationResult, RequestFields};
use crate::writing::mode::{Mode, ModeFamily};
use crate::writing::templates::Template;
use crate::writing::tone::Depth;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct WriteRequest {
    #[serde(default)]
    pub mode: String,
    #[serde(flatten)]
    pub fields: RequestFields,
}

#[derive(Debug, Serialize)]
pub struct ModeInfo {
    pub mode: &'static str,
    pub family: ModeFamily,
    pub aliases: &'static [&'static str],
    pub date_aware: bool,
}

#[derive(Debug, Serialize)]
pub struct ModesResponse {
    pub modes: Vec<ModeInfo>,
    pub depths: Vec<Depth>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/write
///
/// Runs the writing pipeline. Blocked, unavailable and fallback outcomes are
/// all 200 responses; only malformed or oversized input is rejected here.
pub async fn handle_write(
    State(state): State<AppState>,
    payload: Result<Json<WriteRequest>, JsonRejection>,
) -> Result<Json<GenerationResult>, AppError> {
    let Json(request) = payload?;
    let chars = request.fields.char_count();
    if chars > state.config.max_input_chars {
        return Err(AppError::Validation(format!(
            "input is {chars} characters; the limit is {}",
            state.config.max_input_chars
        )));
    }

    let result = state.writer.generate(&request.mode, &request.fields).await;
    Ok(Json(result))
}

/// GET /api/v1/modes
///
/// Lists every supported mode with its accepted aliases, plus the depth tiers.
pub async fn handle_list_modes() -> Json<ModesResponse> {
    let modes = Mode::ALL
        .into_iter()
        .map(|mode| ModeInfo {
            mode: mode.as_str(),
            family: mode.family(),
            aliases: mode.names(),
            date_aware: Template::for_mode(mode).is_date_aware(),
        })
        .collect();

    Json(ModesResponse {
        modes,
        depths: Depth::ALL.to_vec(),
    })
}

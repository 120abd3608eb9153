//! Axum route handlers for the relay widgets.

use axum::{extract::State, Json};
use tracing::{info_span, Instrument};
use uuid::Uuid;

use crate::errors::AppError;
use crate::relay::chat::{ask, ChatReply, ChatRequest};
use crate::relay::fit_check::{analyze, FitCheckReply, FitCheckRequest};
use crate::state::AppState;

/// POST /api/v1/assistant/ask
///
/// Answers one visitor question. Model failures are rendered as fallback text,
/// so a non-empty question always yields 200.
pub async fn handle_ask(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatReply>, AppError> {
    let span = info_span!("chat", request_id = %Uuid::new_v4());
    let reply = ask(state.generator.as_ref(), &state.profile, &request.query)
        .instrument(span)
        .await?;
    Ok(Json(reply))
}

/// POST /api/v1/fit-check
///
/// Compares the profile with a pasted job description.
/// `analysis` is null when the model call failed.
pub async fn handle_fit_check(
    State(state): State<AppState>,
    Json(request): Json<FitCheckRequest>,
) -> Result<Json<FitCheckReply>, AppError> {
    let span = info_span!("fit_check", request_id = %Uuid::new_v4());
    let reply = analyze(state.generator.as_ref(), &state.profile, &request.jd_text)
        .instrument(span)
        .await?;
    Ok(Json(reply))
}

//! Axum route handlers for the public page and the profile record.

use axum::{
    extract::{Path, State},
    response::{Html, Redirect},
    Json,
};
use tracing::debug;

use crate::profile::Profile;
use crate::site::nav::resolve;
use crate::site::render::render_page;
use crate::state::AppState;

/// GET /
pub async fn handle_page(State(state): State<AppState>) -> Html<String> {
    Html(render_page(&state.profile))
}

/// GET /go/:section
///
/// 303 to the section anchor, the resume document, or the top of the page.
pub async fn handle_go(State(state): State<AppState>, Path(section): Path<String>) -> Redirect {
    let target = resolve(&section, &state.profile);
    debug!("Navigation '{section}' -> {target:?}");
    Redirect::to(&target.location())
}

/// GET /api/v1/profile
pub async fn handle_profile(State(state): State<AppState>) -> Json<Profile> {
    Json(state.profile.as_ref().clone())
}

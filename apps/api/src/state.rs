use std::sync::Arc;

use crate::config::Config;
use crate::profile::Profile;
use crate::relay::TextGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
/// Everything in here is read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub profile: Arc<Profile>,
    /// Pluggable text generator. Default: `LlmClient` against the hosted model.
    pub generator: Arc<dyn TextGenerator>,
    pub config: Config,
}

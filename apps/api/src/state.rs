use std::sync::Arc;

use crate::assistant::SuggestionProvider;

/// Shared application state injected into route handlers via Axum extractors.
/// Holds no resume data; documents travel with each request.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable assistant backend. Default: CannedSuggestionProvider.
    pub suggestions: Arc<dyn SuggestionProvider>,
}

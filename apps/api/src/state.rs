use std::sync::Arc;

use crate::analysis::resources::TextResources;
use crate::config::Config;
use crate::documents::TextExtractor;

/// Shared application state injected into all route handlers via Axum extractors.
/// Everything in here is read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Process-wide stopwords + tokenizer, prepared once at startup.
    pub resources: Arc<TextResources>,
    /// Pluggable resume decoder. Default: DefaultTextExtractor.
    pub extractor: Arc<dyn TextExtractor>,
}

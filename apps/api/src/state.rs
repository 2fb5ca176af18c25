use std::sync::Arc;

use crate::config::Config;
use crate::matching::extractor::ResumeExtractor;
use crate::models::job::JobCatalog;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Preprocessed job catalog. Built once at startup, read-only afterward;
    /// request-scoped scores live in the response, never here.
    pub catalog: Arc<JobCatalog>,
    /// Pluggable résumé text extractor. Default: PdfResumeExtractor.
    pub extractor: Arc<dyn ResumeExtractor>,
    /// Kept for handlers that need runtime settings; nothing reads it yet.
    #[allow(dead_code)]
    pub config: Config,
}

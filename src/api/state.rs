use std::path::Path;
use std::sync::Arc;

use crate::error::{AppError, AppResult};
use crate::services::SentimentRecommender;

/// Shared application state: the loaded engine, or the load error that
/// prevented it from starting.
///
/// Artifacts are read-only after load, so the engine is shared behind an
/// `Arc` with no locking.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<Result<SentimentRecommender, String>>,
}

impl AppState {
    /// Loads the engine from `root`. A load failure produces a degraded
    /// state that reports the error on every API call instead of aborting
    /// the process.
    pub fn from_model_root(root: &Path) -> Self {
        let inner = match SentimentRecommender::load(root) {
            Ok(engine) => Ok(engine),
            Err(e) => {
                tracing::error!(error = %e, "Failed to load artifacts; serving in degraded state");
                Err(e.to_string())
            }
        };
        Self {
            inner: Arc::new(inner),
        }
    }

    /// Wraps an already-constructed engine.
    pub fn with_engine(engine: SentimentRecommender) -> Self {
        Self {
            inner: Arc::new(Ok(engine)),
        }
    }

    /// The engine, or `Unavailable` while in the degraded state.
    pub fn engine(&self) -> AppResult<&SentimentRecommender> {
        match self.inner.as_ref() {
            Ok(engine) => Ok(engine),
            Err(message) => Err(AppError::Unavailable(format!("model load error: {message}"))),
        }
    }
}

//! Application state shared across request handlers.

use std::sync::Arc;
use std::time::Duration;

use crate::metrics::MetricsRecorder;
use crate::processor::EventProcessor;

const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Shared application state.
///
/// This is passed to all request handlers via Axum's state extractor.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    processor: Arc<EventProcessor>,
    metrics: Arc<dyn MetricsRecorder>,
    request_timeout: Duration,
}

impl AppState {
    /// Create a new application state.
    pub fn new(processor: Arc<EventProcessor>, metrics: Arc<dyn MetricsRecorder>) -> Self {
        Self::with_request_timeout(processor, metrics, DEFAULT_REQUEST_TIMEOUT)
    }

    /// Create a new application state with a custom request timeout.
    pub fn with_request_timeout(
        processor: Arc<EventProcessor>,
        metrics: Arc<dyn MetricsRecorder>,
        request_timeout: Duration,
    ) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                processor,
                metrics,
                request_timeout,
            }),
        }
    }

    /// Get a reference to the event processor.
    pub fn processor(&self) -> &EventProcessor {
        &self.inner.processor
    }

    /// Metrics recorder, for outcomes decided before the processor runs.
    pub fn metrics(&self) -> &dyn MetricsRecorder {
        self.inner.metrics.as_ref()
    }

    pub fn request_timeout(&self) -> Duration {
        self.inner.request_timeout
    }
}

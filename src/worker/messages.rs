//! Worker thread message types for cross-thread communication.
//!
//! Requests flow from the plugin thread to the catalog worker as
//! [`WorkerMessage`]; results come back as [`WorkerResponse`]. Both travel as
//! JSON over Zellij's plugin message channel. Requests carry an optional
//! [`TraceContext`] so worker spans join the trace that caused them.

use crate::domain::Short;
use serde::{Deserialize, Serialize};

/// Distributed tracing context for cross-thread span propagation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceContext {
    /// OpenTelemetry trace ID as a 32-digit hex string.
    pub trace_id: String,

    /// Parent span ID as a 16-digit hex string.
    pub parent_span_id: String,
}

impl TraceContext {
    /// Captures the trace and span IDs of the current tracing span.
    ///
    /// Returns `None` when the current span carries no valid OpenTelemetry
    /// context, e.g. when tracing was never initialized.
    #[must_use]
    pub fn from_current() -> Option<Self> {
        use opentelemetry::trace::TraceContextExt;
        use tracing_opentelemetry::OpenTelemetrySpanExt;

        let otel_context = tracing::Span::current().context();
        let span_ref = otel_context.span();
        let span_context = span_ref.span_context();

        if !span_context.is_valid() {
            return None;
        }

        Some(Self {
            trace_id: format!("{:032x}", span_context.trace_id()),
            parent_span_id: format!("{:016x}", span_context.span_id()),
        })
    }
}

/// Messages sent from the plugin thread to the worker thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkerMessage {
    /// Read the catalog at `path` and return every short in it.
    LoadCatalog {
        /// Catalog file location inside the plugin sandbox.
        path: String,

        /// Trace context for linking spans across threads.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        trace_context: Option<TraceContext>,
    },
}

impl WorkerMessage {
    /// Creates a `LoadCatalog` message carrying the current trace context.
    #[must_use]
    pub fn load_catalog(path: String) -> Self {
        Self::LoadCatalog {
            path,
            trace_context: TraceContext::from_current(),
        }
    }

    #[must_use]
    pub const fn trace_context(&self) -> Option<&TraceContext> {
        match self {
            Self::LoadCatalog { trace_context, .. } => trace_context.as_ref(),
        }
    }
}

/// Responses sent from the worker thread back to the plugin thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkerResponse {
    /// The catalog was read successfully.
    CatalogLoaded {
        /// Shorts in catalog order.
        shorts: Vec<Short>,

        /// Unix timestamp of the read.
        loaded_at: i64,
    },

    /// The worker operation failed.
    Error {
        /// Human-readable error message.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_without_trace_context_round_trips_through_json() {
        let message = WorkerMessage::LoadCatalog {
            path: "/host/shorts.json".to_string(),
            trace_context: None,
        };

        let payload = serde_json::to_string(&message).unwrap();
        assert!(!payload.contains("trace_context"));
        let decoded: WorkerMessage = serde_json::from_str(&payload).unwrap();
        assert_eq!(decoded, message);
    }

    #[test]
    fn test_builder_without_tracing_has_no_context() {
        let message = WorkerMessage::load_catalog("/host/shorts.json".to_string());
        assert!(message.trace_context().is_none());
    }

    #[test]
    fn test_response_carries_shorts() {
        let response = WorkerResponse::CatalogLoaded {
            shorts: vec![Short::new(1, "Cat Jump").with_tags(["cats"])],
            loaded_at: 1_700_000_000,
        };

        let payload = serde_json::to_string(&response).unwrap();
        let decoded: WorkerResponse = serde_json::from_str(&payload).unwrap();
        assert_eq!(decoded, response);
    }
}

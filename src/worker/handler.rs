//! Catalog worker.
//!
//! Runs on the Zellij worker thread so catalog I/O never blocks rendering. The
//! type here is host-independent: it turns a JSON request payload into a JSON
//! response payload. The plugin binary wraps it in the `ZellijWorker` shim that
//! posts the response back.

use crate::domain::Result;
use crate::storage::{Catalog, JsonCatalog};
use crate::worker::{WorkerMessage, WorkerResponse};
use serde::{Deserialize, Serialize};

/// Worker thread state.
///
/// Stateless apart from a load counter; every request names the catalog it
/// reads.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ReelboxWorker {
    #[serde(skip)]
    loads: u64,
}

impl ReelboxWorker {
    /// Number of catalog loads handled so far.
    #[must_use]
    pub const fn loads(&self) -> u64 {
        self.loads
    }

    /// Loads every short from `catalog` and stamps the result with the current time.
    ///
    /// # Errors
    ///
    /// Propagates the catalog's error.
    pub fn load_from(&mut self, catalog: &dyn Catalog) -> Result<WorkerResponse> {
        let shorts = catalog.load_shorts()?;
        self.loads += 1;

        tracing::debug!(count = shorts.len(), loads = self.loads, "catalog loaded");
        Ok(WorkerResponse::CatalogLoaded {
            shorts,
            loaded_at: chrono::Utc::now().timestamp(),
        })
    }

    fn handle_load_catalog(&mut self, path: &str) -> WorkerResponse {
        let catalog = JsonCatalog::new(path);
        self.load_from(&catalog).unwrap_or_else(|e| {
            tracing::warn!(path = %path, error = %e, "catalog load failed");
            WorkerResponse::Error {
                message: format!("load catalog: {e}"),
            }
        })
    }

    /// Attaches the sender's trace context to this thread so worker spans join
    /// the plugin-side trace. The guard must outlive the handling span.
    fn attach_parent_trace_context(message: &WorkerMessage) -> Option<opentelemetry::ContextGuard> {
        use opentelemetry::trace::{SpanContext, SpanId, TraceContextExt, TraceFlags, TraceId, TraceState};

        let trace_context = message.trace_context()?;
        let trace_id = TraceId::from_hex(&trace_context.trace_id).ok()?;
        let span_id = SpanId::from_hex(&trace_context.parent_span_id).ok()?;

        let span_context = SpanContext::new(trace_id, span_id, TraceFlags::SAMPLED, true, TraceState::default());
        Some(opentelemetry::Context::current().with_remote_span_context(span_context).attach())
    }

    /// Processes a worker message and returns the response.
    pub fn handle_message(&mut self, message: WorkerMessage) -> WorkerResponse {
        let _context_guard = Self::attach_parent_trace_context(&message);
        let _span = tracing::debug_span!("worker_handle_message", message_type = ?message).entered();

        match message {
            WorkerMessage::LoadCatalog { path, .. } => self.handle_load_catalog(&path),
        }
    }

    /// Decodes a JSON request, handles it, and encodes the response.
    ///
    /// Returns `None` if the payload is not a valid request or the response
    /// cannot be encoded; both are logged.
    pub fn respond(&mut self, payload: &str) -> Option<String> {
        let message: WorkerMessage = match serde_json::from_str(payload) {
            Ok(message) => message,
            Err(e) => {
                tracing::warn!(error = %e, "failed to deserialize worker message");
                return None;
            }
        };

        let response = self.handle_message(message);

        serde_json::to_string(&response)
            .map_err(|e| tracing::warn!(error = %e, "failed to serialize worker response"))
            .ok()
    }
}

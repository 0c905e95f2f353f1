//! Background worker for catalog I/O.
//!
//! - `messages`: Request/response protocol with trace context propagation
//! - `handler`: Host-independent message processing

pub mod handler;
pub mod messages;

pub use handler::ReelboxWorker;
pub use messages::{TraceContext, WorkerMessage, WorkerResponse};

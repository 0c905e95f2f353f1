//! Application layer coordinating state, events, and actions.
//!
//! Sits between the plugin runtime (main.rs) and the domain, storage and worker
//! layers.
//!
//! ```text
//! Key / Host Event → Event → handle_event → AppState mutations → Actions → Side Effects
//!                                 ↑                                    ↓
//!                                 └────────── Worker Responses ────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`filter`]: Query and tag filtering ([`FilterEngine`])
//! - [`handler`]: Event processing and state transitions
//! - [`modes`]: Input mode state
//! - [`selection`]: Preview selection with scroll lock and escape handling
//! - [`state`]: Central state container and view model computation

pub mod actions;
pub mod filter;
pub mod handler;
pub mod modes;
pub mod selection;
pub mod state;

pub use actions::Action;
pub use filter::{distinct_tags, visible_items, FilterEngine, FilterState};
pub use handler::{handle_event, Event};
pub use modes::InputMode;
pub use selection::{
    EscapeSubscription, NoScrollLock, ScrollLock, SelectionController, SelectionState, ViewportLock,
};
pub use state::AppState;

//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler returns a `Vec<Action>` after processing each event. The
//! plugin shim executes them in order; nothing in the application layer talks to
//! Zellij directly.
//!
//! # Example
//!
//! ```rust
//! use reelbox::app::Action;
//! use reelbox::worker::WorkerMessage;
//!
//! let actions = vec![
//!     Action::PostToWorker(WorkerMessage::load_catalog("/tmp/shorts.json".to_string())),
//! ];
//! # assert_eq!(actions.len(), 1);
//! ```

use crate::worker::WorkerMessage;

/// Commands representing side effects to be executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    CloseFocus,

    /// Posts a message to the background worker thread.
    PostToWorker(WorkerMessage),

    /// Hands a video URL to the configured external player.
    PlayVideo {
        /// URL of the video to play.
        url: String,
    },
}

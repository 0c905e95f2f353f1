//! Event handling and state transition logic.
//!
//! [`handle_event`] is the only place application state changes in response to
//! the outside world. The plugin shim maps key presses and host events to
//! [`Event`]s; the handler mutates [`AppState`] and returns whether a re-render
//! is needed plus the [`Action`]s to execute.
//!
//! # Event Types
//!
//! - **Grid**: `KeyDown`, `KeyUp`, `OpenSelected`, `ItemClicked`
//! - **Query**: `SearchMode`, `ExitSearch`, `Char`, `Backspace`, `ClearQuery`, `QueryChanged`
//! - **Tags**: `TagMode`, `ExitTagMode`, `TagLeft`, `TagRight`, `ToggleTagAtCursor`, `TagClicked`
//! - **Preview**: `CloseRequested`, `EscapeKey`, `PlayVideo`
//! - **System**: `CloseFocus`, `ReloadCatalog`, `WorkerResponse`
//!
//! # Example
//!
//! ```rust
//! use reelbox::app::{handle_event, AppState, Event};
//! use reelbox::domain::Short;
//! use reelbox::ui::Theme;
//!
//! let mut state = AppState::new(vec![Short::new(1, "Cat Jump")], Theme::default());
//! let (should_render, actions) = handle_event(&mut state, &Event::OpenSelected)?;
//! assert!(should_render);
//! assert!(actions.is_empty());
//! assert!(state.selection.is_open());
//! # Ok::<(), reelbox::domain::ReelboxError>(())
//! ```

use super::modes::InputMode;
use crate::app::{Action, AppState};
use crate::domain::{Result, ShortId};
use crate::worker::{WorkerMessage, WorkerResponse};

/// Events triggered by user input, host changes, or worker responses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Moves the grid cursor down (wraps to top).
    KeyDown,
    /// Moves the grid cursor up (wraps to bottom).
    KeyUp,
    /// Opens the short under the grid cursor in the preview.
    OpenSelected,
    /// Hides the plugin pane.
    CloseFocus,

    /// Focuses the search input.
    SearchMode,
    /// Returns to Browse, keeping the query.
    ExitSearch,
    /// Appends a character to the query.
    Char(char),
    /// Removes the last character of the query.
    Backspace,
    /// Empties the query.
    ClearQuery,
    /// Replaces the whole query.
    QueryChanged(String),

    /// Focuses the tag chips.
    TagMode,
    /// Returns to Browse from the tag chips.
    ExitTagMode,
    TagLeft,
    TagRight,
    /// Toggles the tag under the chip cursor.
    ToggleTagAtCursor,
    /// Toggles a tag by name.
    TagClicked(String),

    /// Opens a short by id.
    ItemClicked(ShortId),
    /// Explicit close of the preview.
    CloseRequested,
    /// Escape key pressed. Only closes the preview while the listener is attached.
    EscapeKey,
    /// Plays the open short in the external player.
    PlayVideo,

    /// Asks the worker to re-read the catalog.
    ReloadCatalog,
    /// Wraps a response from the background worker.
    WorkerResponse(WorkerResponse),
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// Returns `(should_render, actions)`. Events that change nothing visible return
/// `false` so the shim can skip the redraw.
///
/// # Errors
///
/// Currently infallible; the `Result` is kept so state operations can propagate
/// errors without changing the shim.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::KeyDown => Ok((state.move_cursor_down(), vec![])),
        Event::KeyUp => Ok((state.move_cursor_up(), vec![])),
        Event::OpenSelected => Ok((state.open_cursor(), vec![])),
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),

        Event::SearchMode => {
            tracing::debug!("entering search mode");
            state.input_mode = InputMode::Search;
            Ok((true, vec![]))
        }
        Event::ExitSearch => {
            tracing::debug!(query = %state.filter.query(), "exiting search mode");
            state.input_mode = InputMode::Browse;
            Ok((true, vec![]))
        }
        Event::Char(c) => {
            if state.input_mode != InputMode::Search {
                return Ok((false, vec![]));
            }
            state.push_query_char(*c);
            Ok((true, vec![]))
        }
        Event::Backspace => {
            if state.input_mode != InputMode::Search {
                return Ok((false, vec![]));
            }
            Ok((state.pop_query_char(), vec![]))
        }
        Event::ClearQuery => {
            state.clear_query();
            Ok((true, vec![]))
        }
        Event::QueryChanged(text) => {
            state.set_query(text.as_str());
            Ok((true, vec![]))
        }

        Event::TagMode => {
            state.input_mode = InputMode::Tags;
            Ok((true, vec![]))
        }
        Event::ExitTagMode => {
            state.input_mode = InputMode::Browse;
            Ok((true, vec![]))
        }
        Event::TagLeft => Ok((state.move_tag_cursor_left(), vec![])),
        Event::TagRight => Ok((state.move_tag_cursor_right(), vec![])),
        Event::ToggleTagAtCursor => {
            let Some(tag) = state.tag_under_cursor().map(str::to_string) else {
                return Ok((false, vec![]));
            };
            state.toggle_tag(&tag);
            Ok((true, vec![]))
        }
        Event::TagClicked(tag) => {
            state.toggle_tag(tag);
            Ok((true, vec![]))
        }

        Event::ItemClicked(id) => Ok((state.open(*id), vec![])),
        Event::CloseRequested => Ok((state.selection.close(), vec![])),
        Event::EscapeKey => Ok((state.selection.on_escape_key(), vec![])),
        Event::PlayVideo => {
            let Some(short) = state.open_short() else {
                return Ok((false, vec![]));
            };
            if short.video_url.is_empty() {
                tracing::debug!(short_id = %short.id, "short has no video url");
                return Ok((false, vec![]));
            }
            tracing::info!(short_id = %short.id, url = %short.video_url, "playing video");
            Ok((false, vec![Action::PlayVideo { url: short.video_url.clone() }]))
        }

        Event::ReloadCatalog => {
            tracing::debug!(path = %state.catalog_path, "reloading catalog");
            Ok((
                false,
                vec![Action::PostToWorker(WorkerMessage::load_catalog(state.catalog_path.clone()))],
            ))
        }
        Event::WorkerResponse(response) => match response {
            WorkerResponse::CatalogLoaded { shorts, loaded_at } => {
                if &state.shorts == shorts && state.status.is_none() {
                    tracing::debug!("catalog unchanged, skipping render");
                    state.loaded_at = Some(*loaded_at);
                    return Ok((false, vec![]));
                }
                state.set_shorts(shorts.clone(), Some(*loaded_at));
                Ok((true, vec![]))
            }
            WorkerResponse::Error { message } => {
                tracing::error!(error = %message, "worker error");
                state.status = Some(message.clone());
                Ok((true, vec![]))
            }
        },
    }
}

//! Zellij plugin wrapper and entry point.
//!
//! Thin integration layer between the reelbox library and Zellij. Everything
//! that calls into the host lives here; the library stays testable natively.
//!
//! ```text
//! ┌─────────────────────────┐
//! │   Zellij Main Thread    │
//! │  ┌──────────────────┐   │
//! │  │  State (plugin)  │   │  ← UI state, key mapping, actions
//! │  └──────────────────┘   │
//! │          │ IPC (JSON)   │
//! │          ▼              │
//! │  ┌──────────────────┐   │
//! │  │  GalleryWorker   │   │  ← Catalog reads
//! │  └──────────────────┘   │
//! └─────────────────────────┘
//! ```
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `AppState`, request
//!    permissions and subscribe to events
//! 2. **Permission granted**: Ask the worker to load the catalog
//! 3. **Update**: Map keys and host events to library events, execute actions
//! 4. **File change**: Reload when the catalog file is written
//! 5. **Render**: Delegate to the library renderer
//!
//! # Keybindings
//!
//! While a preview is open:
//! - `Esc`: Close (via the escape listener)
//! - `q`/`Enter`: Close
//! - `p`: Play
//!
//! Browse mode:
//! - `j`/`Down`, `k`/`Up`, `Ctrl+n`/`Ctrl+p`: Move
//! - `Enter`: Preview
//! - `/`: Search, `t`: Tags, `x`: Clear query, `r`: Reload, `q`: Close plugin
//!
//! Search mode:
//! - Characters and `Backspace` edit the query, `Ctrl+u` clears it
//! - `Ctrl+n`/`Ctrl+p`, `Down`/`Up`: Move
//! - `Enter`/`Esc`: Back to Browse
//!
//! Tags mode:
//! - `h`/`Left`, `l`/`Right`: Move between chips
//! - `Enter`/`Space`: Toggle
//! - `Esc`/`t`: Back to Browse

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use std::path::PathBuf;
use zellij_tile::prelude::*;
use zellij_tile::shim::{post_message_to, post_message_to_plugin};

use reelbox::infrastructure::is_catalog_path;
use reelbox::worker::{ReelboxWorker, WorkerMessage, WorkerResponse};
use reelbox::{handle_event, Action, Config, Event, InputMode};

register_plugin!(State);
register_worker!(GalleryWorker, reelbox_worker, REELBOX_WORKER);

const WORKER_NAME: &str = "reelbox";

/// Zellij-facing wrapper around the library worker.
#[derive(Default, serde::Serialize, serde::Deserialize)]
struct GalleryWorker {
    inner: ReelboxWorker,
    #[serde(skip)]
    tracing_ready: bool,
}

impl ZellijWorker<'_> for GalleryWorker {
    fn on_message(&mut self, message: String, payload: String) {
        if !self.tracing_ready {
            reelbox::observability::init_tracing(&Config::default());
            self.tracing_ready = true;
        }

        if let Some(payload) = self.inner.respond(&payload) {
            post_message_to_plugin(PluginMessage {
                name: message,
                payload,
                worker_name: None,
            });
        }
    }
}

/// Plugin state wrapper.
struct State {
    app: reelbox::AppState,
    player: String,
    permissions_granted: bool,
}

impl Default for State {
    fn default() -> Self {
        let config = Config::default();
        Self {
            app: reelbox::initialize(&config),
            player: config.player,
            permissions_granted: false,
        }
    }
}

impl ZellijPlugin for State {
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        reelbox::observability::init_tracing(&config);

        let _span = tracing::debug_span!("plugin_load").entered();
        tracing::debug!(catalog_path = %config.catalog_path, player = %config.player, "parsed configuration");

        self.app = reelbox::initialize(&config);
        self.player.clone_from(&config.player);

        request_permission(&[
            PermissionType::ReadApplicationState,
            PermissionType::RunCommands,
            PermissionType::FullHdAccess,
        ]);

        subscribe(&[
            EventType::Key,
            EventType::CustomMessage,
            EventType::PermissionRequestResult,
            EventType::FileSystemUpdate,
        ]);

        tracing::debug!("plugin load complete - waiting for permissions");
    }

    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let _span = tracing::debug_span!("plugin_update_event", event_type = %event_name).entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::CustomMessage(message, payload) => {
                match Self::map_custom_message_event(&message, &payload) {
                    Some(event) => event,
                    None => return false,
                }
            }
            zellij_tile::prelude::Event::FileSystemUpdate(paths) => {
                match self.map_file_system_update(&paths) {
                    Some(event) => event,
                    None => return false,
                }
            }
            zellij_tile::prelude::Event::PermissionRequestResult(permissions) => {
                match self.handle_permission_result(permissions) {
                    Some(event) => event,
                    None => return false,
                }
            }
            _ => return false,
        };

        match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                for action in &actions {
                    self.execute_action(action);
                }
                should_render
            }
            Err(e) => {
                tracing::warn!(error = %e, "error handling event");
                false
            }
        }
    }

    fn render(&mut self, rows: usize, cols: usize) {
        reelbox::ui::render(&self.app, rows, cols);
    }
}

impl State {
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::CustomMessage(msg, _) => format!("CustomMessage({msg})"),
            zellij_tile::prelude::Event::PermissionRequestResult(..) => "PermissionRequestResult".to_string(),
            zellij_tile::prelude::Event::FileSystemUpdate(..) => "FileSystemUpdate".to_string(),
            _ => "Other".to_string(),
        }
    }

    /// Maps a key to a library event.
    ///
    /// An open preview takes every key first; otherwise the input mode decides.
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        let ctrl = key.has_modifiers(&[KeyModifier::Ctrl]);

        if self.app.selection.is_open() {
            return match key.bare_key {
                BareKey::Esc if self.app.selection.escape_subscribed() => Some(Event::EscapeKey),
                BareKey::Char('q') | BareKey::Enter => Some(Event::CloseRequested),
                BareKey::Char('p') => Some(Event::PlayVideo),
                _ => None,
            };
        }

        if ctrl {
            return match key.bare_key {
                BareKey::Char('n') => Some(Event::KeyDown),
                BareKey::Char('p') => Some(Event::KeyUp),
                BareKey::Char('u') if self.app.input_mode == InputMode::Search => Some(Event::ClearQuery),
                _ => None,
            };
        }

        Some(match self.app.input_mode {
            InputMode::Browse => match key.bare_key {
                BareKey::Down | BareKey::Char('j') => Event::KeyDown,
                BareKey::Up | BareKey::Char('k') => Event::KeyUp,
                BareKey::Enter => Event::OpenSelected,
                BareKey::Char('/') => Event::SearchMode,
                BareKey::Char('t') => Event::TagMode,
                BareKey::Char('x') => Event::ClearQuery,
                BareKey::Char('r') => Event::ReloadCatalog,
                BareKey::Char('q') => Event::CloseFocus,
                _ => return None,
            },
            InputMode::Search => match key.bare_key {
                BareKey::Down => Event::KeyDown,
                BareKey::Up => Event::KeyUp,
                BareKey::Enter | BareKey::Esc => Event::ExitSearch,
                BareKey::Backspace => Event::Backspace,
                BareKey::Char(c) => Event::Char(c),
                _ => return None,
            },
            InputMode::Tags => match key.bare_key {
                BareKey::Left | BareKey::Char('h') => Event::TagLeft,
                BareKey::Right | BareKey::Char('l') => Event::TagRight,
                BareKey::Enter | BareKey::Char(' ') => Event::ToggleTagAtCursor,
                BareKey::Esc | BareKey::Char('t') => Event::ExitTagMode,
                BareKey::Down | BareKey::Char('j') => Event::KeyDown,
                BareKey::Up | BareKey::Char('k') => Event::KeyUp,
                _ => return None,
            },
        })
    }

    /// Requests the first catalog load once permissions are granted.
    fn handle_permission_result(&mut self, permissions: PermissionStatus) -> Option<Event> {
        match permissions {
            PermissionStatus::Granted => {
                tracing::debug!("permissions granted - loading catalog");
                self.permissions_granted = true;
                Some(Event::ReloadCatalog)
            }
            PermissionStatus::Denied => {
                tracing::warn!("permissions denied - catalog cannot be read");
                None
            }
        }
    }

    fn map_custom_message_event(message: &str, payload: &str) -> Option<Event> {
        if message != WORKER_NAME {
            tracing::debug!(message_name = %message, "ignoring custom message with unknown name");
            return None;
        }

        match serde_json::from_str::<WorkerResponse>(payload) {
            Ok(response) => Some(Event::WorkerResponse(response)),
            Err(e) => {
                tracing::warn!(error = %e, "failed to deserialize worker response");
                None
            }
        }
    }

    fn map_file_system_update(&self, paths: &[(PathBuf, Option<FileMetadata>)]) -> Option<Event> {
        if !self.permissions_granted {
            return None;
        }

        paths
            .iter()
            .any(|(path, _)| is_catalog_path(path, &self.app.catalog_path))
            .then(|| {
                tracing::debug!("catalog file changed - reloading");
                Event::ReloadCatalog
            })
    }

    fn post_worker_message(message: &WorkerMessage) {
        match serde_json::to_string(message) {
            Ok(payload) => post_message_to(PluginMessage {
                worker_name: Some(WORKER_NAME.to_string()),
                name: WORKER_NAME.to_string(),
                payload,
            }),
            Err(e) => tracing::warn!(error = %e, "failed to serialize worker message"),
        }
    }

    #[tracing::instrument(level = "debug", skip(self))]
    fn execute_action(&self, action: &Action) {
        match action {
            Action::CloseFocus => hide_self(),
            Action::PostToWorker(message) => Self::post_worker_message(message),
            Action::PlayVideo { url } => {
                tracing::info!(player = %self.player, url = %url, "launching player");
                run_command(&[self.player.as_str(), url.as_str()], BTreeMap::new());
            }
        }
    }
}

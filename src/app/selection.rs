//! Single-slot preview selection with scroll locking and escape cancellation.
//!
//! [`SelectionController`] tracks which short, if any, is open in the preview.
//! Opening engages an injected [`ScrollLock`] and attaches an
//! [`EscapeSubscription`]; closing releases both. While nothing is open there is
//! no escape subscription, so the escape key is inert.
//!
//! # State Machine
//!
//! ```text
//!            open(id)                 open(id2)
//! Closed ───────────────► Open(id) ───────────────► Open(id2)
//!   ▲                        │
//!   └── close() / escape ────┘        close() while Closed: no-op
//! ```

use crate::domain::ShortId;

/// Host capability that suspends background scrolling.
///
/// Implementations are boolean toggles: calling `lock` twice is the same as
/// calling it once.
pub trait ScrollLock {
    fn lock(&mut self);
    fn unlock(&mut self);
}

/// Scroll lock over the gallery grid viewport.
///
/// Grid navigation consults [`ViewportLock::is_locked`] and refuses to move the
/// cursor while a preview is open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewportLock {
    locked: bool,
}

impl ViewportLock {
    #[must_use]
    pub const fn is_locked(&self) -> bool {
        self.locked
    }
}

impl ScrollLock for ViewportLock {
    fn lock(&mut self) {
        self.locked = true;
    }

    fn unlock(&mut self) {
        self.locked = false;
    }
}

/// No-op scroll lock for hosts without a scrollable surface.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoScrollLock;

impl ScrollLock for NoScrollLock {
    fn lock(&mut self) {}
    fn unlock(&mut self) {}
}

/// Which short is open for preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionState {
    #[default]
    Closed,
    Open(ShortId),
}

/// Proof that the escape-key listener is attached.
///
/// Created on the `Closed → Open` transition and dropped on `Open → Closed`.
#[derive(Debug, PartialEq, Eq)]
pub struct EscapeSubscription {
    _private: (),
}

/// Owner of [`SelectionState`], its scroll lock, and its escape subscription.
///
/// # Example
///
/// ```rust
/// use reelbox::app::selection::{SelectionController, SelectionState, ViewportLock};
/// use reelbox::domain::ShortId;
///
/// let mut selection = SelectionController::new(ViewportLock::default());
/// selection.open(ShortId(1));
/// assert!(selection.scroll_lock().is_locked());
/// assert!(selection.on_escape_key());
/// assert_eq!(selection.state(), SelectionState::Closed);
/// assert!(!selection.scroll_lock().is_locked());
/// ```
#[derive(Debug)]
pub struct SelectionController<L: ScrollLock> {
    state: SelectionState,
    scroll_lock: L,
    escape: Option<EscapeSubscription>,
}

impl<L: ScrollLock> SelectionController<L> {
    pub const fn new(scroll_lock: L) -> Self {
        Self {
            state: SelectionState::Closed,
            scroll_lock,
            escape: None,
        }
    }

    #[must_use]
    pub const fn state(&self) -> SelectionState {
        self.state
    }

    /// Returns the id of the open short, if any.
    #[must_use]
    pub const fn open_item(&self) -> Option<ShortId> {
        match self.state {
            SelectionState::Open(id) => Some(id),
            SelectionState::Closed => None,
        }
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self.state, SelectionState::Open(_))
    }

    #[must_use]
    pub const fn scroll_lock(&self) -> &L {
        &self.scroll_lock
    }

    /// Returns `true` while the escape-key listener is attached.
    #[must_use]
    pub const fn escape_subscribed(&self) -> bool {
        self.escape.is_some()
    }

    /// Opens `id` for preview, replacing any open short.
    pub fn open(&mut self, id: ShortId) {
        let previous = self.open_item();
        self.state = SelectionState::Open(id);
        self.scroll_lock.lock();
        if self.escape.is_none() {
            self.escape = Some(EscapeSubscription { _private: () });
            tracing::trace!("escape listener attached");
        }
        tracing::debug!(short_id = %id, previous = ?previous, "preview opened");
    }

    /// Closes the preview. Returns `false` if nothing was open.
    pub fn close(&mut self) -> bool {
        let SelectionState::Open(id) = self.state else {
            return false;
        };
        self.state = SelectionState::Closed;
        self.scroll_lock.unlock();
        self.escape = None;
        tracing::debug!(short_id = %id, "preview closed");
        true
    }

    /// Handles an escape key press. Only acts while the listener is attached.
    pub fn on_escape_key(&mut self) -> bool {
        if self.escape.is_none() {
            tracing::trace!("escape ignored, no listener attached");
            return false;
        }
        self.close()
    }
}

impl Default for SelectionController<ViewportLock> {
    fn default() -> Self {
        Self::new(ViewportLock::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default)]
    struct RecordingLock {
        locked: bool,
        locks: usize,
        unlocks: usize,
    }

    impl ScrollLock for RecordingLock {
        fn lock(&mut self) {
            self.locked = true;
            self.locks += 1;
        }

        fn unlock(&mut self) {
            self.locked = false;
            self.unlocks += 1;
        }
    }

    fn controller() -> SelectionController<RecordingLock> {
        SelectionController::new(RecordingLock::default())
    }

    #[test]
    fn test_starts_closed_without_listener() {
        let selection = controller();
        assert_eq!(selection.state(), SelectionState::Closed);
        assert!(!selection.escape_subscribed());
        assert!(!selection.scroll_lock().locked);
    }

    #[test]
    fn test_open_engages_lock_and_listener() {
        let mut selection = controller();
        selection.open(ShortId(1));

        assert_eq!(selection.state(), SelectionState::Open(ShortId(1)));
        assert!(selection.scroll_lock().locked);
        assert!(selection.escape_subscribed());
    }

    #[test]
    fn test_open_replaces_without_close() {
        let mut selection = controller();
        selection.open(ShortId(1));
        selection.open(ShortId(2));

        assert_eq!(selection.open_item(), Some(ShortId(2)));
        assert!(selection.scroll_lock().locked);
        assert_eq!(selection.scroll_lock().unlocks, 0);
        assert!(selection.escape_subscribed());
    }

    #[test]
    fn test_close_while_closed_is_noop() {
        let mut selection = controller();
        assert!(!selection.close());
        assert_eq!(selection.state(), SelectionState::Closed);
        assert_eq!(selection.scroll_lock().unlocks, 0);
    }

    #[test]
    fn test_close_releases_lock_once() {
        let mut selection = controller();
        selection.open(ShortId(1));
        assert!(selection.close());
        assert!(!selection.close());

        assert!(!selection.scroll_lock().locked);
        assert_eq!(selection.scroll_lock().unlocks, 1);
        assert!(!selection.escape_subscribed());
    }

    #[test]
    fn test_escape_closes_then_close_is_noop() {
        let mut selection = controller();
        selection.open(ShortId(1));
        assert!(selection.scroll_lock().locked);

        assert!(selection.on_escape_key());
        assert_eq!(selection.state(), SelectionState::Closed);
        assert!(!selection.scroll_lock().locked);

        assert!(!selection.close());
        assert_eq!(selection.scroll_lock().unlocks, 1);
    }

    #[test]
    fn test_escape_while_closed_does_nothing() {
        let mut selection = controller();
        assert!(!selection.on_escape_key());
        assert_eq!(selection.scroll_lock().locks, 0);
        assert_eq!(selection.scroll_lock().unlocks, 0);
    }

    #[test]
    fn test_lock_tracks_open_state() {
        let mut selection = controller();
        for step in 0..6u64 {
            if step % 3 == 2 {
                selection.close();
            } else {
                selection.open(ShortId(step));
            }
            assert_eq!(selection.is_open(), selection.scroll_lock().locked);
        }
    }

    #[test]
    fn test_viewport_lock_is_boolean() {
        let mut lock = ViewportLock::default();
        lock.lock();
        lock.lock();
        assert!(lock.is_locked());
        lock.unlock();
        assert!(!lock.is_locked());
    }

    #[test]
    fn test_no_scroll_lock_substitutes() {
        let mut selection = SelectionController::new(NoScrollLock);
        selection.open(ShortId(9));
        assert!(selection.on_escape_key());
        assert!(!selection.is_open());
    }
}

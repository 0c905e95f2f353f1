//! End-to-end flows through the public API: filtering, selection, and the
//! worker round trip feeding `AppState`.

use reelbox::app::filter::{distinct_tags, visible_items, FilterEngine};
use reelbox::app::selection::{ScrollLock, SelectionController, SelectionState};
use reelbox::domain::{Short, ShortId};
use reelbox::worker::{ReelboxWorker, WorkerMessage, WorkerResponse};
use reelbox::{handle_event, AppState, Event, Theme};
use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;

fn cat_and_dog() -> Vec<Short> {
    vec![
        Short::new(1, "Cat Jump").with_tags(["funny", "cats"]),
        Short::new(2, "Dog Run").with_tags(["funny", "dogs"]),
    ]
}

fn ids(shorts: &[&Short]) -> Vec<u64> {
    shorts.iter().map(|s| s.id.0).collect()
}

/// Shared lock log so the test can inspect calls after handing the lock over.
#[derive(Clone, Default)]
struct SharedLock(Rc<RefCell<Vec<&'static str>>>);

impl ScrollLock for SharedLock {
    fn lock(&mut self) {
        self.0.borrow_mut().push("lock");
    }

    fn unlock(&mut self) {
        self.0.borrow_mut().push("unlock");
    }
}

#[test]
fn query_and_tag_filters_combine_then_reset() {
    let items = cat_and_dog();
    let mut filter = FilterEngine::default();

    filter.set_query("dog");
    assert_eq!(ids(&filter.apply(&items)), vec![2]);

    filter.toggle_tag("funny");
    assert_eq!(filter.query(), "dog");
    assert_eq!(ids(&filter.apply(&items)), vec![2]);

    filter.clear_query();
    filter.toggle_tag("funny");
    assert_eq!(filter.selected_tag(), None);
    assert_eq!(ids(&filter.apply(&items)), vec![1, 2]);
}

#[test]
fn escape_releases_scroll_lock_and_later_close_is_noop() {
    let lock = SharedLock::default();
    let log = Rc::clone(&lock.0);
    let mut selection = SelectionController::new(lock);

    selection.open(ShortId(1));
    assert_eq!(*log.borrow(), vec!["lock"]);

    assert!(selection.on_escape_key());
    assert_eq!(selection.state(), SelectionState::Closed);
    assert_eq!(*log.borrow(), vec!["lock", "unlock"]);

    assert!(!selection.close());
    assert_eq!(selection.state(), SelectionState::Closed);
    assert_eq!(log.borrow().len(), 2);
}

#[test]
fn visible_items_is_an_order_preserving_subsequence() {
    let items: Vec<Short> = (0..20u64)
        .map(|i| {
            let tag = if i % 3 == 0 { "triple" } else { "other" };
            Short::new(i, format!("Clip {i}")).with_tags([tag])
        })
        .collect();

    for query in ["", "clip 1", "TRIPLE", "x"] {
        for tag in [None, Some("triple"), Some("other")] {
            let visible = ids(&visible_items(&items, query, tag));
            let mut sorted = visible.clone();
            sorted.sort_unstable();
            assert_eq!(visible, sorted, "order broken for {query:?}/{tag:?}");
        }
    }

    assert_eq!(visible_items(&items, "", None).len(), items.len());
    assert_eq!(visible_items(&items, "CLIP 1", None), visible_items(&items, "clip 1", None));
}

#[test]
fn distinct_tags_has_no_duplicates() {
    let tags = distinct_tags(&cat_and_dog());
    let mut unique = tags.clone();
    unique.sort();
    unique.dedup();
    assert_eq!(tags.len(), unique.len());
    assert_eq!(tags.len(), 3);
}

#[test]
fn worker_response_drives_app_state() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(
        br#"{"version": 1, "shorts": [
            {"id": 1, "title": "Cat Jump", "tags": ["funny", "cats"], "videoUrl": "https://example.com/cat"},
            {"id": 2, "title": "Dog Run", "tags": ["funny", "dogs"]}
        ]}"#,
    )
    .unwrap();
    let path = file.path().display().to_string();

    let mut state = AppState::new(vec![], Theme::default()).with_catalog_path(path.clone());

    let (_, actions) = handle_event(&mut state, &Event::ReloadCatalog).unwrap();
    let [reelbox::Action::PostToWorker(message)] = actions.as_slice() else {
        panic!("expected a single worker message, got {actions:?}");
    };
    assert!(matches!(message, WorkerMessage::LoadCatalog { path: p, .. } if *p == path));

    let response = ReelboxWorker::default().handle_message(message.clone());
    assert!(matches!(response, WorkerResponse::CatalogLoaded { .. }));

    let (render, _) = handle_event(&mut state, &Event::WorkerResponse(response)).unwrap();
    assert!(render);
    assert_eq!(state.tags, vec!["funny", "cats", "dogs"]);

    handle_event(&mut state, &Event::OpenSelected).unwrap();
    let (_, actions) = handle_event(&mut state, &Event::PlayVideo).unwrap();
    assert_eq!(
        actions,
        vec![reelbox::Action::PlayVideo { url: "https://example.com/cat".to_string() }]
    );

    handle_event(&mut state, &Event::EscapeKey).unwrap();
    assert!(!state.selection.is_open());
    assert!(!state.selection.scroll_lock().is_locked());
}

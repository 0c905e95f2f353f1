//! Query and tag filtering over the short catalog.
//!
//! [`FilterEngine`] owns the two user-controlled filter inputs, the free-text
//! query and the single selected tag, and [`visible_items`] derives the displayed
//! subset from them. [`distinct_tags`] computes the tag universe used to render
//! filter chips.
//!
//! # Matching Rules
//!
//! An item is visible iff both predicates hold:
//!
//! - **Query**: empty query, or the lowercased query is a substring of the
//!   lowercased title or of any one lowercased tag
//! - **Tag**: no selected tag, or the selected tag is one of the item's tags
//!   (exact, case-sensitive)
//!
//! The two predicates use different casing rules. See
//! `test_tag_filter_is_case_sensitive_while_query_is_not`.

use crate::domain::Short;
use std::collections::HashSet;

/// User-controlled filter inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    /// Free-text search query. Never trimmed.
    pub query: String,
    /// Currently selected tag chip, if any.
    pub selected_tag: Option<String>,
}

/// Owner of [`FilterState`] and its mutation rules.
///
/// # Example
///
/// ```rust
/// use reelbox::app::filter::FilterEngine;
///
/// let mut filter = FilterEngine::default();
/// filter.toggle_tag("funny");
/// filter.toggle_tag("cats");
/// assert_eq!(filter.selected_tag(), Some("cats"));
/// filter.toggle_tag("cats");
/// assert_eq!(filter.selected_tag(), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct FilterEngine {
    state: FilterState,
}

impl FilterEngine {
    #[must_use]
    pub const fn state(&self) -> &FilterState {
        &self.state
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.state.query
    }

    #[must_use]
    pub fn selected_tag(&self) -> Option<&str> {
        self.state.selected_tag.as_deref()
    }

    /// Replaces the query unconditionally.
    pub fn set_query(&mut self, text: impl Into<String>) {
        self.state.query = text.into();
        tracing::trace!(query = %self.state.query, "query set");
    }

    /// Clears the query. Behaves exactly like `set_query("")`.
    pub fn clear_query(&mut self) {
        self.set_query(String::new());
    }

    /// Selects `tag`, or clears the selection if `tag` is already selected.
    ///
    /// Selecting a different tag replaces the current one.
    pub fn toggle_tag(&mut self, tag: &str) {
        if self.state.selected_tag.as_deref() == Some(tag) {
            self.state.selected_tag = None;
        } else {
            self.state.selected_tag = Some(tag.to_string());
        }
        tracing::debug!(selected_tag = ?self.state.selected_tag, "tag toggled");
    }

    /// Applies the current filter state to `items`.
    #[must_use]
    pub fn apply<'a>(&self, items: &'a [Short]) -> Vec<&'a Short> {
        visible_items(items, &self.state.query, self.state.selected_tag.as_deref())
    }
}

/// Returns the items matching both the query and the tag predicate, in input order.
///
/// # Example
///
/// ```rust
/// use reelbox::app::filter::visible_items;
/// use reelbox::domain::Short;
///
/// let items = vec![
///     Short::new(1, "Cat Jump").with_tags(["funny", "cats"]),
///     Short::new(2, "Dog Run").with_tags(["funny", "dogs"]),
/// ];
/// let visible = visible_items(&items, "DOG", Some("funny"));
/// assert_eq!(visible.len(), 1);
/// assert_eq!(visible[0].title, "Dog Run");
/// ```
#[must_use]
pub fn visible_items<'a>(items: &'a [Short], query: &str, selected_tag: Option<&str>) -> Vec<&'a Short> {
    let needle = (!query.is_empty()).then(|| query.to_lowercase());

    items
        .iter()
        .filter(|short| needle.as_deref().map_or(true, |n| short.matches_lowercase(n)))
        .filter(|short| selected_tag.map_or(true, |tag| short.has_tag(tag)))
        .collect()
}

/// Returns every tag used by `items` exactly once.
///
/// Tags are listed in first-seen order. Callers must not rely on the order.
#[must_use]
pub fn distinct_tags(items: &[Short]) -> Vec<String> {
    let mut seen = HashSet::new();
    items
        .iter()
        .flat_map(|short| short.tags.iter())
        .filter(|tag| seen.insert(tag.as_str()))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Short> {
        vec![
            Short::new(1, "Cat Jump").with_tags(["funny", "cats"]),
            Short::new(2, "Dog Run").with_tags(["funny", "dogs"]),
            Short::new(3, "Sunset Timelapse").with_tags(["nature", "Calm"]),
        ]
    }

    fn ids(items: &[&Short]) -> Vec<u64> {
        items.iter().map(|s| s.id.0).collect()
    }

    #[test]
    fn test_no_filters_is_identity() {
        let items = sample();
        assert_eq!(ids(&visible_items(&items, "", None)), vec![1, 2, 3]);
    }

    #[test]
    fn test_query_is_case_insensitive() {
        let items = sample();
        assert_eq!(
            visible_items(&items, "ABC", None),
            visible_items(&items, "abc", None)
        );
        assert_eq!(
            ids(&visible_items(&items, "SUNSET", None)),
            ids(&visible_items(&items, "sunset", None))
        );
    }

    #[test]
    fn test_query_matches_tags() {
        let items = sample();
        assert_eq!(ids(&visible_items(&items, "dog", None)), vec![2]);
        assert_eq!(ids(&visible_items(&items, "calm", None)), vec![3]);
    }

    #[test]
    fn test_query_is_not_trimmed() {
        let items = sample();
        assert!(visible_items(&items, " cat", None).is_empty());
        assert_eq!(ids(&visible_items(&items, "cat ", None)), vec![1]);
    }

    #[test]
    fn test_result_preserves_input_order() {
        let items = sample();
        let visible = visible_items(&items, "u", None);
        let positions: Vec<usize> = visible
            .iter()
            .map(|v| items.iter().position(|i| i.id == v.id).unwrap())
            .collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
    }

    #[test]
    fn test_query_and_tag_combine_with_and() {
        let items = sample();
        assert_eq!(ids(&visible_items(&items, "dog", Some("funny"))), vec![2]);
        assert!(visible_items(&items, "dog", Some("cats")).is_empty());
    }

    #[test]
    fn test_tag_filter_is_case_sensitive_while_query_is_not() {
        let items = sample();
        assert_eq!(ids(&visible_items(&items, "calm", None)), vec![3]);
        assert!(visible_items(&items, "", Some("calm")).is_empty());
        assert_eq!(ids(&visible_items(&items, "", Some("Calm"))), vec![3]);
    }

    #[test]
    fn test_no_match_is_empty_not_error() {
        let items = sample();
        assert!(visible_items(&items, "zebra", None).is_empty());
        assert!(visible_items(&[], "anything", Some("tag")).is_empty());
    }

    #[test]
    fn test_toggle_tag_twice_clears() {
        let mut filter = FilterEngine::default();
        filter.toggle_tag("funny");
        filter.toggle_tag("funny");
        assert_eq!(filter.selected_tag(), None);
    }

    #[test]
    fn test_toggle_other_tag_replaces() {
        let mut filter = FilterEngine::default();
        filter.toggle_tag("funny");
        filter.toggle_tag("cats");
        assert_eq!(filter.selected_tag(), Some("cats"));
    }

    #[test]
    fn test_clear_query_matches_set_empty() {
        let mut a = FilterEngine::default();
        let mut b = FilterEngine::default();
        a.set_query("dog");
        b.set_query("dog");
        a.clear_query();
        b.set_query("");
        assert_eq!(a.state(), b.state());
        assert_eq!(a.query(), "");
    }

    #[test]
    fn test_apply_uses_current_state() {
        let items = sample();
        let mut filter = FilterEngine::default();
        filter.set_query("dog");
        filter.toggle_tag("funny");
        assert_eq!(ids(&filter.apply(&items)), vec![2]);
    }

    #[test]
    fn test_distinct_tags_has_no_duplicates() {
        let mut items = sample();
        items.push(Short::new(4, "Again").with_tags(["cats", "cats", "funny"]));

        let tags = distinct_tags(&items);
        let unique: HashSet<&String> = tags.iter().collect();
        assert_eq!(tags.len(), unique.len());
        assert_eq!(tags.len(), 5);
    }

    #[test]
    fn test_distinct_tags_of_empty_catalog() {
        assert!(distinct_tags(&[]).is_empty());
    }
}

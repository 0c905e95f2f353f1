//! Short video domain model.
//!
//! This module defines the `Short` type, the read-only item record supplied by the
//! catalog. Shorts are never mutated by the application; the filter and selection
//! layers only derive views over them or refer to them by [`ShortId`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier of a short within a catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShortId(pub u64);

impl fmt::Display for ShortId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ShortId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// A short video item as listed in the gallery.
///
/// # Fields
///
/// - `id`: Catalog-unique identifier
/// - `title`: Display title, searched case-insensitively
/// - `description`: Free text shown in the preview
/// - `tags`: Ordered tag list; duplicates are preserved as supplied
/// - `video_url`: Location handed to the configured player
/// - `duration`: Pre-formatted duration label (e.g. `"0:45"`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Short {
    pub id: ShortId,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub video_url: String,
    pub duration: String,
}

impl Short {
    /// Creates a short with the given id and title and empty remaining fields.
    ///
    /// # Examples
    ///
    /// ```
    /// use reelbox::domain::Short;
    ///
    /// let short = Short::new(1, "Cat Jump").with_tags(["funny", "cats"]);
    /// assert_eq!(short.title, "Cat Jump");
    /// assert_eq!(short.tags, vec!["funny", "cats"]);
    /// ```
    #[must_use]
    pub fn new(id: impl Into<ShortId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            tags: Vec::new(),
            video_url: String::new(),
            duration: String::new(),
        }
    }

    /// Replaces the tag list.
    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the video URL and duration label.
    #[must_use]
    pub fn with_video(mut self, video_url: impl Into<String>, duration: impl Into<String>) -> Self {
        self.video_url = video_url.into();
        self.duration = duration.into();
        self
    }

    /// Returns `true` if `needle` occurs in the title or in any single tag,
    /// ignoring case.
    ///
    /// `needle` must already be lowercased; callers lowercase the query once per
    /// filter pass rather than once per item.
    #[must_use]
    pub fn matches_lowercase(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.tags.iter().any(|tag| tag.to_lowercase().contains(needle))
    }

    /// Returns `true` if `tag` is one of this short's tags (exact, case-sensitive).
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_lowercase_checks_title_and_each_tag() {
        let short = Short::new(1, "Cat Jump").with_tags(["Funny", "cats"]);

        assert!(short.matches_lowercase("cat j"));
        assert!(short.matches_lowercase("funn"));
        assert!(!short.matches_lowercase("dog"));
    }

    #[test]
    fn test_matches_lowercase_does_not_span_tag_boundaries() {
        let short = Short::new(1, "Clip").with_tags(["ab", "cd"]);

        assert!(!short.matches_lowercase("bc"));
        assert!(!short.matches_lowercase("abcd"));
    }

    #[test]
    fn test_has_tag_is_case_sensitive() {
        let short = Short::new(1, "Clip").with_tags(["Funny"]);

        assert!(short.has_tag("Funny"));
        assert!(!short.has_tag("funny"));
    }

    #[test]
    fn test_short_id_display() {
        assert_eq!(ShortId(42).to_string(), "42");
    }
}

//! Identifiers for feed items and display templates.
//!
//! These types keep item coordinates and template reuse identifiers from being
//! confused with plain integers and strings at API boundaries.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Position of a section in the ordered section list.
pub type SectionIndex = usize;

/// Identity of an item: its section and its index within that section.
///
/// Ordering is section-major, which is also the flow order of the feed.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct ItemPath {
    pub section: SectionIndex,
    pub item: usize,
}

impl ItemPath {
    pub fn new(section: SectionIndex, item: usize) -> Self {
        Self { section, item }
    }
}

impl From<(usize, usize)> for ItemPath {
    fn from((section, item): (usize, usize)) -> Self {
        Self { section, item }
    }
}

impl fmt::Display for ItemPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.section, self.item)
    }
}

/// A reuse identifier for a display template (cell class) registered by a section.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct TemplateId(Arc<str>);

impl TemplateId {
    pub fn new(id: impl Into<Arc<str>>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for TemplateId {
    fn from(s: String) -> Self {
        Self(s.into())
    }
}

impl From<&str> for TemplateId {
    fn from(s: &str) -> Self {
        Self(s.into())
    }
}

impl AsRef<str> for TemplateId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_path_orders_section_major() {
        let mut paths = vec![
            ItemPath::new(2, 0),
            ItemPath::new(0, 3),
            ItemPath::new(1, 1),
            ItemPath::new(0, 1),
        ];
        paths.sort();
        assert_eq!(
            paths,
            vec![
                ItemPath::new(0, 1),
                ItemPath::new(0, 3),
                ItemPath::new(1, 1),
                ItemPath::new(2, 0),
            ]
        );
        assert_eq!(ItemPath::from((1, 4)).to_string(), "[1, 4]");
    }

    #[test]
    fn test_template_id_creation() {
        let a = TemplateId::new("favorites.tile");
        let b = TemplateId::from("favorites.tile");
        let c = TemplateId::from(String::from("favorites.tile"));
        assert_eq!(a, b);
        assert_eq!(b, c);
        assert_eq!(a.as_str(), "favorites.tile");
    }

    #[test]
    fn test_template_id_serializes_as_plain_string() {
        let id = TemplateId::new("credit.button");
        assert_eq!(serde_json::to_string(&id).unwrap(), r#""credit.button""#);

        let parsed: TemplateId = serde_json::from_str(r#""stats.card""#).unwrap();
        assert_eq!(parsed.as_str(), "stats.card");
    }
}

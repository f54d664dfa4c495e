//! Per-section insets and spacing.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt::Debug;
use tabfeed_types::{EdgeInsets, SectionIndex};

/// Insets and spacing for one section.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SectionSpacing {
    pub insets: EdgeInsets,
    /// Minimum vertical distance between rows.
    pub line_spacing: f32,
    /// Minimum horizontal distance between items on the same row.
    pub interitem_spacing: f32,
}

impl SectionSpacing {
    pub fn new(insets: EdgeInsets, line_spacing: f32, interitem_spacing: f32) -> Self {
        Self {
            insets,
            line_spacing,
            interitem_spacing,
        }
    }
}

impl Default for SectionSpacing {
    fn default() -> Self {
        Self {
            insets: EdgeInsets::zero(),
            line_spacing: 10.0,
            interitem_spacing: 10.0,
        }
    }
}

/// Answers inset/spacing queries for a section.
pub trait SpacingProvider: Debug {
    /// Returns `None` to decline, in which case the engine's defaults apply.
    fn spacing(&self, section: SectionIndex) -> Option<SectionSpacing>;
}

/// A table of per-section overrides with an optional fallback.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SpacingTable {
    sections: HashMap<SectionIndex, SectionSpacing>,
    fallback: Option<SectionSpacing>,
}

impl SpacingTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spacing used for every section without an explicit entry.
    pub fn with_fallback(mut self, spacing: SectionSpacing) -> Self {
        self.fallback = Some(spacing);
        self
    }

    pub fn with_section(mut self, section: SectionIndex, spacing: SectionSpacing) -> Self {
        self.sections.insert(section, spacing);
        self
    }

    pub fn set(&mut self, section: SectionIndex, spacing: SectionSpacing) {
        self.sections.insert(section, spacing);
    }

    pub fn remove(&mut self, section: SectionIndex) -> Option<SectionSpacing> {
        self.sections.remove(&section)
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

impl SpacingProvider for SpacingTable {
    fn spacing(&self, section: SectionIndex) -> Option<SectionSpacing> {
        self.sections.get(&section).copied().or(self.fallback)
    }
}

use serde::{Deserialize, Serialize};
use tabfeed_traits::SectionSpacing;
use tabfeed_types::SectionIndex;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LayoutConfig {
    /// The section that stretches to fill the remaining viewport height.
    ///
    /// Must name an existing section holding exactly one item; otherwise the pass
    /// falls back to the natural layout and reports a degradation.
    pub gap_section: Option<SectionIndex>,
    /// Height kept free below the gap section, measured up from the bottom of the
    /// safe area. Negative values are treated as zero.
    pub gap_height_reserve: f32,
    /// Spacing used for sections whose spacing provider declines to answer.
    ///
    /// Defaults to zero insets and 10pt line and inter-item spacing.
    pub default_spacing: SectionSpacing,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            gap_section: None,
            gap_height_reserve: 0.0,
            default_spacing: SectionSpacing::default(),
        }
    }
}

impl LayoutConfig {
    pub fn with_gap(mut self, section: SectionIndex, reserve: f32) -> Self {
        self.gap_section = Some(section);
        self.gap_height_reserve = reserve;
        self
    }

    pub fn with_default_spacing(mut self, spacing: SectionSpacing) -> Self {
        self.default_spacing = spacing;
        self
    }

    /// The reserve as used by a pass. An infinite reserve leaves no room for the
    /// gap; negative or NaN reserves count as zero.
    pub(crate) fn effective_reserve(&self) -> f32 {
        if self.gap_height_reserve == f32::INFINITY {
            return f32::MAX;
        }
        crate::util::non_negative(self.gap_height_reserve).0
    }
}

//! Ways a layout pass can degrade instead of failing.
//!
//! None of these are returned as errors. A pass that hits one still produces
//! the best layout it can, records the degradation and logs it once.

use tabfeed_types::SectionIndex;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutDegradation {
    #[error("No hosting surface is available; layout is not computable yet.")]
    MissingHost,

    #[error("Gap section {index} is out of range ({section_count} sections); using natural layout.")]
    OutOfRangeGapSection {
        index: SectionIndex,
        section_count: usize,
    },

    #[error("Gap section {index} has {item_count} items instead of exactly one; using natural layout.")]
    GapSectionNotSingular {
        index: SectionIndex,
        item_count: usize,
    },

    #[error("Viewport of {width:.2}x{height:.2} is degenerate; frames collapse to zero.")]
    DegenerateViewport { width: f32, height: f32 },

    #[error("Provider answer for {subject} was clamped: {detail}")]
    InconsistentProviderAnswer { subject: String, detail: String },

    #[error("Natural flow could not be solved: {reason}")]
    SolverFailed { reason: String },
}

impl LayoutDegradation {
    pub(crate) fn clamped(subject: impl Into<String>, detail: impl Into<String>) -> Self {
        LayoutDegradation::InconsistentProviderAnswer {
            subject: subject.into(),
            detail: detail.into(),
        }
    }

    /// True when the pass can still place items at their natural positions.
    pub fn keeps_natural_layout(&self) -> bool {
        matches!(
            self,
            LayoutDegradation::OutOfRangeGapSection { .. }
                | LayoutDegradation::GapSectionNotSingular { .. }
                | LayoutDegradation::InconsistentProviderAnswer { .. }
        )
    }
}

//! Flow layout engine for the New Tab Page feed.
//!
//! Given an immutable [`LayoutInputs`] snapshot (sections, item sizes, spacing,
//! viewport and safe area), [`FlowLayout`] produces a frame for every item and
//! the total content extent. Items flow left to right and wrap inside each
//! section, sections stack vertically, single-item sections are pinned to their
//! leading inset, and an optional gap section stretches so that the sections
//! after it sit at the bottom of the viewport.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    #[error("Flow solver failed while {stage}: {message}")]
    Solver { stage: &'static str, message: String },
}

pub mod algorithms;
pub mod config;
pub mod degradation;
pub mod engine;
pub mod interface;
pub mod util;

pub use self::config::LayoutConfig;
pub use self::degradation::LayoutDegradation;
pub use self::engine::{FlowLayout, LayoutPass, PlacedFrame};
pub use self::interface::{LayoutContext, LayoutInputs, SectionMetrics};
pub use self::algorithms::gap::GapGeometry;

// Re-export geometry types so hosts don't need a direct dependency on the types crate.
pub use tabfeed_types::geometry::{EdgeInsets, Rect, Size};
pub use tabfeed_types::ids::{ItemPath, SectionIndex};

#[cfg(test)]
mod test_utils;

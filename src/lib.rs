//! Host integration for the New Tab Page feed.
//!
//! [`FeedHost`] owns the sections, the hosting surface and the flow layout
//! engine, and decides when to lay out again based on the events the sections
//! report. [`Scenario`] loads a complete host description from JSON.

pub mod error;
pub mod host;
pub mod scenario;
pub mod scheduler;

pub use error::FeedError;
pub use host::{FeedHost, FeedLayout, GapReport};
pub use scenario::{Scenario, parse_region};
pub use scheduler::{RelayoutReason, RelayoutScheduler};

pub use tabfeed_layout::{
    EdgeInsets, FlowLayout, ItemPath, LayoutConfig, LayoutDegradation, PlacedFrame, Rect, Size,
};
pub use tabfeed_sections::{
    CalloutSection, CreditButtonSection, FavoritesSection, Section, SectionEvent, SectionKind,
    SectionList, Site, SpacerSection, StatsSection,
};
pub use tabfeed_traits::{SectionSpacing, SpacingTable, Surface};

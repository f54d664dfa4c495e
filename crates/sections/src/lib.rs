//! The New Tab Page's section kinds.
//!
//! Every kind implements [`FeedSection`]; the closed [`Section`] enum dispatches
//! to them and [`SectionList`] exposes the whole feed to the layout engine as a
//! `SectionSource`. Sections never trigger layout themselves: content changes are
//! reported as [`SectionEvent`]s for the host to act on.

pub mod events;
pub mod kinds;
pub mod list;
pub mod section;
pub mod templates;
pub mod text;

pub use events::{EventSink, SectionEvent, event_channel};
pub use kinds::{
    CalloutSection, CreditButtonSection, FavoritesSection, Site, SpacerSection, StatCounter,
    StatsSection,
};
pub use list::{Section, SectionList};
pub use section::{CellDescriptor, FeedSection, SectionKind};
pub use templates::TemplateRegistry;
pub use text::TextStyle;

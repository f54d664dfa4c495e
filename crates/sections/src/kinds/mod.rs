mod callout;
mod credit;
mod favorites;
mod spacer;
mod stats;

pub use callout::CalloutSection;
pub use credit::CreditButtonSection;
pub use favorites::{FavoritesSection, Site};
pub use spacer::SpacerSection;
pub use stats::{StatCounter, StatsSection};

#[cfg(test)]
mod kinds_test;

pub mod section;
pub mod spacing;
pub mod viewport;

pub use section::{InMemoryItem, InMemorySectionSource, SectionSource, SizeRequest};
pub use spacing::{SectionSpacing, SpacingProvider, SpacingTable};
pub use viewport::{Surface, ViewportProvider};

//! SectionSource trait for abstracting the feed's section/item collaborators.
//!
//! The layout engine only needs item counts and sizes. Concrete section kinds
//! (stats, favorites, callouts...) live behind this trait so the engine never
//! depends on them.

use std::fmt::Debug;
use tabfeed_types::{ItemPath, SectionIndex, Size};

/// How an item wants to be sized.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SizeRequest {
    /// An explicit size in points.
    Fixed(Size),
    /// Compute the size from content, bounded to the available width.
    Automatic,
}

/// Supplies the ordered list of sections, their item counts and item sizes.
///
/// # Implementations
///
/// - `InMemorySectionSource`: a static table of sizes, used by tests and tools
/// - `SectionList` in `tabfeed-sections`: the real feed sections
pub trait SectionSource: Debug {
    fn section_count(&self) -> usize;

    fn item_count(&self, section: SectionIndex) -> usize;

    fn size_request(&self, item: ItemPath) -> SizeRequest;

    /// Fits an `Automatic` item to `available_width`.
    ///
    /// Must be a pure function of the item's content and the width: the engine
    /// may call it more than once per pass and expects identical answers.
    fn fit_size(&self, item: ItemPath, available_width: f32) -> Size;

    /// Returns a human-readable name for this source (for logging/debugging).
    fn name(&self) -> &'static str;
}

/// A single item in an `InMemorySectionSource`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InMemoryItem {
    Fixed(Size),
    /// An automatic item that fills the available width at a fixed height.
    FillWidth { height: f32 },
}

/// A section source backed by a static table.
#[derive(Debug, Default, Clone)]
pub struct InMemorySectionSource {
    sections: Vec<Vec<InMemoryItem>>,
}

impl InMemorySectionSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_section(mut self, items: Vec<InMemoryItem>) -> Self {
        self.sections.push(items);
        self
    }

    /// Appends a section of `count` items that all share `size`.
    pub fn with_fixed_section(self, count: usize, size: Size) -> Self {
        self.with_section(vec![InMemoryItem::Fixed(size); count])
    }

    pub fn with_empty_section(self) -> Self {
        self.with_section(Vec::new())
    }

    fn item(&self, path: ItemPath) -> Option<&InMemoryItem> {
        self.sections.get(path.section)?.get(path.item)
    }
}

impl SectionSource for InMemorySectionSource {
    fn section_count(&self) -> usize {
        self.sections.len()
    }

    fn item_count(&self, section: SectionIndex) -> usize {
        self.sections.get(section).map_or(0, Vec::len)
    }

    fn size_request(&self, item: ItemPath) -> SizeRequest {
        match self.item(item) {
            Some(InMemoryItem::Fixed(size)) => SizeRequest::Fixed(*size),
            Some(InMemoryItem::FillWidth { .. }) => SizeRequest::Automatic,
            None => SizeRequest::Fixed(Size::zero()),
        }
    }

    fn fit_size(&self, item: ItemPath, available_width: f32) -> Size {
        match self.item(item) {
            Some(InMemoryItem::FillWidth { height }) => Size::new(available_width, *height),
            Some(InMemoryItem::Fixed(size)) => *size,
            None => Size::zero(),
        }
    }

    fn name(&self) -> &'static str {
        "InMemorySectionSource"
    }
}

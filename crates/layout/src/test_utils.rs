use crate::{FlowLayout, LayoutConfig, LayoutInputs};
use tabfeed_traits::{
    InMemoryItem, InMemorySectionSource, SectionSource, SectionSpacing, SpacingTable, Surface,
};
use tabfeed_types::{EdgeInsets, Size};

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn phone(height: f32) -> Surface {
    Surface::new(Size::new(340.0, height), EdgeInsets::zero())
}

/// Three sections: a wrapping grid, a single-item gap candidate and a footer.
///
/// - section 0: three 100x50 tiles, insets 8/16/8/16, spacing 10
/// - section 1: one full-width item of height 80, no insets
/// - section 2: one 200x40 item, horizontal insets 16
pub fn feed_source() -> InMemorySectionSource {
    InMemorySectionSource::new()
        .with_fixed_section(3, Size::new(100.0, 50.0))
        .with_section(vec![InMemoryItem::FillWidth { height: 80.0 }])
        .with_fixed_section(1, Size::new(200.0, 40.0))
}

pub fn feed_spacing() -> SpacingTable {
    SpacingTable::new()
        .with_section(
            0,
            SectionSpacing::new(EdgeInsets::new(8.0, 16.0, 8.0, 16.0), 10.0, 10.0),
        )
        .with_section(1, SectionSpacing::new(EdgeInsets::zero(), 0.0, 0.0))
        .with_section(
            2,
            SectionSpacing::new(EdgeInsets::symmetric(16.0, 0.0), 0.0, 0.0),
        )
}

pub fn capture(source: &dyn SectionSource, spacing: &SpacingTable, surface: &Surface) -> LayoutInputs {
    LayoutInputs::capture(
        source,
        Some(spacing),
        Some(surface),
        LayoutConfig::default().default_spacing,
    )
}

pub fn feed_inputs(surface: &Surface) -> LayoutInputs {
    capture(&feed_source(), &feed_spacing(), surface)
}

pub fn gap_engine(reserve: f32) -> FlowLayout {
    FlowLayout::new(LayoutConfig::default().with_gap(1, reserve))
}

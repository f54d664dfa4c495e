#![allow(dead_code)]

use tabfeed::{
    CalloutSection, CreditButtonSection, EdgeInsets, FavoritesSection, FeedHost, LayoutConfig,
    Section, SectionSpacing, Site, Size, SpacerSection, SpacingTable, StatsSection, Surface,
};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A 340pt wide phone without safe-area insets.
pub fn phone(height: f32) -> Surface {
    Surface::new(Size::new(340.0, height), EdgeInsets::zero())
}

pub fn sites(count: usize) -> Vec<Site> {
    (0..count)
        .map(|i| Site::new(format!("Site {i}"), format!("https://site{i}.example")))
        .collect()
}

/// Favorites of three 100x50 tiles, an 80pt spacer and a credit button.
pub fn new_tab_sections() -> Vec<Section> {
    vec![
        FavoritesSection::new(sites(3))
            .with_tile_size(Size::new(100.0, 50.0))
            .into(),
        SpacerSection::new(80.0).into(),
        CreditButtonSection::new("Photo by Ann").into(),
    ]
}

pub fn new_tab_spacing() -> SpacingTable {
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

/// The standard feed on a phone of `height`, with the spacer as gap section.
pub fn new_tab_host(height: f32, reserve: f32) -> FeedHost {
    init_logging();
    FeedHost::new(new_tab_sections())
        .with_spacing(new_tab_spacing())
        .with_config(LayoutConfig::default().with_gap(1, reserve))
        .with_surface(phone(height))
}

/// Callout, stats card, spacer and credit, all without insets or spacing.
pub fn flat_host(height: f32) -> FeedHost {
    init_logging();
    let sections: Vec<Section> = vec![
        CalloutSection::new("Set as default browser").into(),
        StatsSection::new("Privacy")
            .with_counter("trackers blocked", 12)
            .into(),
        SpacerSection::new(0.0).into(),
        CreditButtonSection::new("Photo by Ann").into(),
    ];
    FeedHost::new(sections)
        .with_config(
            LayoutConfig::default()
                .with_default_spacing(SectionSpacing::new(EdgeInsets::zero(), 0.0, 0.0)),
        )
        .with_spacer_gap(0.0)
        .with_surface(phone(height))
}

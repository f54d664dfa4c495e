use super::*;
use crate::section::{FeedSection, SectionKind};
use tabfeed_traits::SizeRequest;
use tabfeed_types::Size;

#[test]
fn test_stats_card_spans_width_and_grows_with_counters() {
    let stats = StatsSection::new("Privacy")
        .with_counter("trackers blocked", 120)
        .with_counter("data saved", 3);

    assert_eq!(stats.item_count(), 1);
    assert_eq!(stats.intrinsic_size(0), SizeRequest::Automatic);
    // One 22pt title line, two 44pt counter rows, 16pt padding on both sides.
    assert_eq!(stats.fit(0, 308.0), Size::new(308.0, 142.0));
}

#[test]
fn test_stats_without_counters_is_empty() {
    let stats = StatsSection::new("Privacy");
    assert_eq!(stats.item_count(), 0);
    assert!(stats.cell(0).is_none());
}

#[test]
fn test_callout_height_follows_wrapped_message() {
    let callout = CalloutSection::new("Set as default browser");

    assert_eq!(callout.fit(0, 200.0).height, 44.0);
    // 76pt of text width fits "Set as", then "default", then "browser".
    assert_eq!(callout.fit(0, 100.0).height, 84.0);

    let with_action = callout.clone().with_action("Open settings");
    assert_eq!(with_action.fit(0, 100.0).height, 128.0);
}

#[test]
fn test_dismissed_callout_has_no_items() {
    let mut callout = CalloutSection::new("Hello");
    assert!(callout.dismiss());
    assert!(!callout.dismiss());
    assert_eq!(callout.item_count(), 0);
    assert!(callout.cell(0).is_none());
}

#[test]
fn test_favorites_are_fixed_tiles_capped_by_rows() {
    let sites: Vec<Site> = (0..10)
        .map(|i| Site::new(format!("Site {i}"), format!("https://site{i}.example")))
        .collect();
    let favorites = FavoritesSection::new(sites).with_max_rows(1);

    assert_eq!(favorites.item_count(), 4);
    assert_eq!(
        favorites.intrinsic_size(3),
        SizeRequest::Fixed(Size::new(80.0, 100.0))
    );
    let cell = favorites.cell(1).unwrap();
    assert_eq!(cell.title, "Site 1");
    assert_eq!(cell.subtitle.as_deref(), Some("https://site1.example"));
    assert!(favorites.cell(4).is_none());
}

#[test]
fn test_favorites_columns_never_drop_below_one() {
    let favorites = FavoritesSection::default();
    assert_eq!(favorites.columns_for(40.0, 10.0), 1);
    assert_eq!(favorites.columns_for(340.0, 10.0), 3);
    assert_eq!(favorites.columns_for(350.0, 10.0), 4);
}

#[test]
fn test_spacer_is_one_full_width_item() {
    let spacer = SpacerSection::new(24.0);
    assert_eq!(spacer.item_count(), 1);
    assert_eq!(spacer.fit(0, 320.0), Size::new(320.0, 24.0));
    assert_eq!(spacer.kind(), SectionKind::Spacer);
}

#[test]
fn test_credit_button_sized_from_label() {
    let credit = CreditButtonSection::new("Photo by Ann");
    // 12 columns at 6pt plus 12pt padding on each side.
    assert_eq!(credit.fit(0, 300.0), Size::new(96.0, 34.0));
    assert_eq!(credit.fit(0, 50.0), Size::new(50.0, 34.0));
}

#[test]
fn test_credit_cell_links_to_photo() {
    let credit = CreditButtonSection::new("Photo by Ann").with_url("https://photos.example/ann");
    let cell = credit.cell(0).unwrap();
    assert_eq!(cell.template.as_str(), "credit.button");
    assert_eq!(cell.subtitle.as_deref(), Some("https://photos.example/ann"));
    assert!(credit.cell(1).is_none());
}

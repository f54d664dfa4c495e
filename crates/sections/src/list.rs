use crate::events::{EventSink, SectionEvent};
use crate::kinds::{
    CalloutSection, CreditButtonSection, FavoritesSection, SpacerSection, StatsSection,
};
use crate::section::{CellDescriptor, FeedSection, SectionKind};
use crate::templates::TemplateRegistry;
use log::trace;
use serde::{Deserialize, Serialize};
use tabfeed_traits::{SectionSource, SizeRequest};
use tabfeed_types::{ItemPath, SectionIndex, Size};

/// Every section kind the feed can show.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Section {
    Stats(StatsSection),
    Favorites(FavoritesSection),
    Callout(CalloutSection),
    Spacer(SpacerSection),
    CreditButton(CreditButtonSection),
}

impl Section {
    fn as_feed_section(&self) -> &dyn FeedSection {
        match self {
            Section::Stats(s) => s,
            Section::Favorites(s) => s,
            Section::Callout(s) => s,
            Section::Spacer(s) => s,
            Section::CreditButton(s) => s,
        }
    }
}

impl FeedSection for Section {
    fn kind(&self) -> SectionKind {
        self.as_feed_section().kind()
    }

    fn item_count(&self) -> usize {
        self.as_feed_section().item_count()
    }

    fn intrinsic_size(&self, item: usize) -> SizeRequest {
        self.as_feed_section().intrinsic_size(item)
    }

    fn fit(&self, item: usize, available_width: f32) -> Size {
        self.as_feed_section().fit(item, available_width)
    }

    fn register_templates(&self, registry: &mut TemplateRegistry) {
        self.as_feed_section().register_templates(registry)
    }

    fn cell(&self, item: usize) -> Option<CellDescriptor> {
        self.as_feed_section().cell(item)
    }
}

impl From<StatsSection> for Section {
    fn from(s: StatsSection) -> Self {
        Section::Stats(s)
    }
}

impl From<FavoritesSection> for Section {
    fn from(s: FavoritesSection) -> Self {
        Section::Favorites(s)
    }
}

impl From<CalloutSection> for Section {
    fn from(s: CalloutSection) -> Self {
        Section::Callout(s)
    }
}

impl From<SpacerSection> for Section {
    fn from(s: SpacerSection) -> Self {
        Section::Spacer(s)
    }
}

impl From<CreditButtonSection> for Section {
    fn from(s: CreditButtonSection) -> Self {
        Section::CreditButton(s)
    }
}

/// The ordered sections of the feed.
///
/// Mutations report what changed through the attached [`EventSink`]; the list
/// never asks for layout itself.
#[derive(Debug, Clone, Default)]
pub struct SectionList {
    sections: Vec<Section>,
    events: Option<EventSink>,
}

impl SectionList {
    pub fn new(sections: Vec<Section>) -> Self {
        Self {
            sections,
            events: None,
        }
    }

    pub fn with_events(mut self, sink: EventSink) -> Self {
        self.events = Some(sink);
        self
    }

    pub fn push(mut self, section: impl Into<Section>) -> Self {
        self.sections.push(section.into());
        self
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn get(&self, index: SectionIndex) -> Option<&Section> {
        self.sections.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter()
    }

    /// Index of the first section of `kind`.
    pub fn index_of(&self, kind: SectionKind) -> Option<SectionIndex> {
        self.sections.iter().position(|s| s.kind() == kind)
    }

    pub fn cell(&self, path: ItemPath) -> Option<CellDescriptor> {
        self.sections.get(path.section)?.cell(path.item)
    }

    pub fn register_templates(&self, registry: &mut TemplateRegistry) {
        for section in &self.sections {
            section.register_templates(registry);
        }
    }

    /// Replaces the section at `index`. Returns `false` if there is none.
    pub fn replace(&mut self, index: SectionIndex, section: impl Into<Section>) -> bool {
        let Some(slot) = self.sections.get_mut(index) else {
            return false;
        };
        *slot = section.into();
        self.notify(SectionEvent::ContentChanged(index));
        true
    }

    /// Replaces every section.
    pub fn reload(&mut self, sections: Vec<Section>) {
        self.sections = sections;
        self.notify(SectionEvent::DataReloaded);
    }

    /// Dismisses the callout at `index`. Only callouts can be dismissed.
    pub fn dismiss(&mut self, index: SectionIndex) -> bool {
        let dismissed = match self.sections.get_mut(index) {
            Some(Section::Callout(callout)) => callout.dismiss(),
            _ => false,
        };
        if dismissed {
            self.notify(SectionEvent::Dismissed(index));
        }
        dismissed
    }

    /// Updates a stats counter. Returns `false` when nothing changed.
    pub fn update_stat(&mut self, index: SectionIndex, label: &str, value: u64) -> bool {
        let changed = match self.sections.get_mut(index) {
            Some(Section::Stats(stats)) => stats.set_counter(label, value),
            _ => false,
        };
        if changed {
            self.notify(SectionEvent::ContentChanged(index));
        }
        changed
    }

    /// Recomputes favorites columns for the given per-section width.
    ///
    /// Called by the host before capturing a snapshot, so no event is sent.
    pub fn fit_columns(&mut self, mut row_width: impl FnMut(SectionIndex) -> (f32, f32)) {
        for (index, section) in self.sections.iter_mut().enumerate() {
            if let Section::Favorites(favorites) = section {
                let (available_width, interitem_spacing) = row_width(index);
                if favorites.fit_columns(available_width, interitem_spacing) {
                    trace!(
                        "Favorites section {} now shows {} columns",
                        index, favorites.columns
                    );
                }
            }
        }
    }

    fn notify(&self, event: SectionEvent) {
        if let Some(sink) = &self.events {
            sink.emit(event);
        }
    }
}

impl SectionSource for SectionList {
    fn section_count(&self) -> usize {
        self.sections.len()
    }

    fn item_count(&self, section: SectionIndex) -> usize {
        self.sections.get(section).map_or(0, |s| s.item_count())
    }

    fn size_request(&self, item: ItemPath) -> SizeRequest {
        match self.sections.get(item.section) {
            Some(section) if item.item < section.item_count() => section.intrinsic_size(item.item),
            _ => SizeRequest::Fixed(Size::zero()),
        }
    }

    fn fit_size(&self, item: ItemPath, available_width: f32) -> Size {
        self.sections
            .get(item.section)
            .map_or(Size::zero(), |s| s.fit(item.item, available_width))
    }

    fn name(&self) -> &'static str {
        "SectionList"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::event_channel;
    use crate::kinds::Site;

    fn feed() -> SectionList {
        SectionList::default()
            .push(StatsSection::new("Privacy").with_counter("trackers blocked", 12))
            .push(CalloutSection::new("Set as default browser"))
            .push(SpacerSection::new(0.0))
            .push(CreditButtonSection::new("Photo by Ann"))
    }

    #[test]
    fn test_section_source_counts() {
        let list = feed();
        assert_eq!(list.section_count(), 4);
        assert_eq!(list.item_count(0), 1);
        assert_eq!(list.item_count(9), 0);
        assert_eq!(list.index_of(SectionKind::Spacer), Some(2));
    }

    #[test]
    fn test_unknown_item_has_zero_fixed_size() {
        let list = feed();
        assert_eq!(
            list.size_request(ItemPath::new(0, 3)),
            SizeRequest::Fixed(Size::zero())
        );
    }

    #[test]
    fn test_dismiss_emits_event_and_empties_callout() {
        let (sink, receiver) = event_channel();
        let mut list = feed().with_events(sink);

        assert!(list.dismiss(1));
        assert_eq!(list.item_count(1), 0);
        assert_eq!(receiver.try_recv(), Ok(SectionEvent::Dismissed(1)));

        assert!(!list.dismiss(1));
        assert!(!list.dismiss(0));
        assert!(receiver.is_empty());
    }

    #[test]
    fn test_update_stat_only_reports_real_changes() {
        let (sink, receiver) = event_channel();
        let mut list = feed().with_events(sink);

        assert!(!list.update_stat(0, "trackers blocked", 12));
        assert!(list.update_stat(0, "trackers blocked", 13));
        assert!(!list.update_stat(0, "unknown", 1));
        assert_eq!(receiver.try_recv(), Ok(SectionEvent::ContentChanged(0)));
        assert!(receiver.is_empty());
    }

    #[test]
    fn test_reload_and_replace() {
        let (sink, receiver) = event_channel();
        let mut list = feed().with_events(sink);

        assert!(list.replace(3, CreditButtonSection::new("Photo by Bo")));
        assert!(!list.replace(7, SpacerSection::new(1.0)));
        list.reload(vec![SpacerSection::new(4.0).into()]);

        assert_eq!(list.len(), 1);
        assert_eq!(receiver.try_recv(), Ok(SectionEvent::ContentChanged(3)));
        assert_eq!(receiver.try_recv(), Ok(SectionEvent::DataReloaded));
    }

    #[test]
    fn test_fit_columns_changes_favorites_capacity() {
        let sites = (0..12)
            .map(|i| Site::new(format!("Site {i}"), format!("https://{i}.example")))
            .collect();
        let mut list = SectionList::default().push(FavoritesSection::new(sites));
        assert_eq!(list.item_count(0), 8);

        // 80pt tiles with 10pt spacing: (300 + 10) / 90 = 3 columns.
        list.fit_columns(|_| (300.0, 10.0));
        assert_eq!(list.item_count(0), 6);
    }

    #[test]
    fn test_register_templates_once_per_kind() {
        let list = feed().push(SpacerSection::new(2.0));
        let mut registry = TemplateRegistry::new();
        list.register_templates(&mut registry);
        assert_eq!(registry.len(), 4);
        assert_eq!(
            registry.kind_of(&"spacer".into()),
            Some(SectionKind::Spacer)
        );
    }

    #[test]
    fn test_sections_deserialize_from_tagged_json() {
        let json = r#"[
            {"kind": "callout", "message": "Hi", "action": "Go"},
            {"kind": "spacer", "minHeight": 20},
            {"kind": "favorites", "sites": [{"title": "A", "url": "https://a"}], "maxRows": 1},
            {"kind": "creditButton", "label": "Photo"}
        ]"#;
        let sections: Vec<Section> = serde_json::from_str(json).unwrap();
        let list = SectionList::new(sections);

        assert_eq!(list.get(1), Some(&Section::Spacer(SpacerSection::new(20.0))));
        assert_eq!(list.item_count(2), 1);
        assert_eq!(list.get(3).map(|s| s.kind()), Some(SectionKind::CreditButton));
    }
}

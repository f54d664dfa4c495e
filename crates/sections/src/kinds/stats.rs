use crate::section::{CellDescriptor, FeedSection, SectionKind};
use crate::templates::TemplateRegistry;
use crate::text::TextStyle;
use serde::{Deserialize, Serialize};
use tabfeed_traits::SizeRequest;
use tabfeed_types::Size;

const CARD_TEMPLATE: &str = "stats.card";
const CARD_PADDING: f32 = 16.0;
const COUNTER_ROW_HEIGHT: f32 = 44.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatCounter {
    pub label: String,
    pub value: u64,
}

impl StatCounter {
    pub fn new(label: impl Into<String>, value: u64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Privacy statistics shown as a single card spanning the available width.
///
/// The card's height follows its title, wrapped at the card's inner width, plus
/// one row per counter. Without counters the section is empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsSection {
    pub title: String,
    #[serde(default)]
    pub counters: Vec<StatCounter>,
}

impl StatsSection {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            counters: Vec::new(),
        }
    }

    pub fn with_counter(mut self, label: impl Into<String>, value: u64) -> Self {
        self.counters.push(StatCounter::new(label, value));
        self
    }

    pub fn set_counter(&mut self, label: &str, value: u64) -> bool {
        match self.counters.iter_mut().find(|c| c.label == label) {
            Some(counter) if counter.value != value => {
                counter.value = value;
                true
            }
            _ => false,
        }
    }

    fn summary(&self) -> String {
        self.counters
            .iter()
            .map(|c| format!("{} {}", c.value, c.label))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl FeedSection for StatsSection {
    fn kind(&self) -> SectionKind {
        SectionKind::Stats
    }

    fn item_count(&self) -> usize {
        usize::from(!self.counters.is_empty())
    }

    fn intrinsic_size(&self, _item: usize) -> SizeRequest {
        SizeRequest::Automatic
    }

    fn fit(&self, _item: usize, available_width: f32) -> Size {
        let inner = (available_width - 2.0 * CARD_PADDING).max(0.0);
        let title = TextStyle::headline().measure(&self.title, inner);
        let counters = self.counters.len() as f32 * COUNTER_ROW_HEIGHT;
        Size::new(available_width, title.height + counters + 2.0 * CARD_PADDING)
    }

    fn register_templates(&self, registry: &mut TemplateRegistry) {
        registry.register(CARD_TEMPLATE, self.kind());
    }

    fn cell(&self, item: usize) -> Option<CellDescriptor> {
        (item < self.item_count())
            .then(|| CellDescriptor::new(CARD_TEMPLATE, &self.title).with_subtitle(self.summary()))
    }
}

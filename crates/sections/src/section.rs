use crate::templates::TemplateRegistry;
use serde::{Deserialize, Serialize};
use tabfeed_traits::SizeRequest;
use tabfeed_types::{Size, TemplateId};

/// The kind of a feed section.
///
/// Used for template registration and lookups instead of stringly-typed names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SectionKind {
    Stats,
    Favorites,
    Callout,
    Spacer,
    CreditButton,
}

impl SectionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionKind::Stats => "Stats",
            SectionKind::Favorites => "Favorites",
            SectionKind::Callout => "Callout",
            SectionKind::Spacer => "Spacer",
            SectionKind::CreditButton => "CreditButton",
        }
    }
}

/// What a host needs to build the cell for one item.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CellDescriptor {
    pub template: TemplateId,
    pub title: String,
    pub subtitle: Option<String>,
}

impl CellDescriptor {
    pub fn new(template: impl Into<TemplateId>, title: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            title: title.into(),
            subtitle: None,
        }
    }

    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }
}

/// The capability set every section kind provides.
///
/// The layout engine only reaches sections through `SectionList`, which calls
/// `item_count`, `intrinsic_size` and `fit`. The remaining methods serve the host.
pub trait FeedSection {
    fn kind(&self) -> SectionKind;

    fn item_count(&self) -> usize;

    fn intrinsic_size(&self, item: usize) -> SizeRequest;

    /// Sizes an automatic item for `available_width`. Pure.
    fn fit(&self, item: usize, available_width: f32) -> Size;

    fn register_templates(&self, registry: &mut TemplateRegistry);

    fn cell(&self, item: usize) -> Option<CellDescriptor>;
}

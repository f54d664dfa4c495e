use crate::section::{CellDescriptor, FeedSection, SectionKind};
use crate::templates::TemplateRegistry;
use crate::text::TextStyle;
use serde::{Deserialize, Serialize};
use tabfeed_traits::SizeRequest;
use tabfeed_types::Size;

const BUTTON_TEMPLATE: &str = "credit.button";
const BUTTON_HEIGHT: f32 = 34.0;
const LABEL_PADDING: f32 = 12.0;

/// Attribution for the wallpaper, drawn as one button sized to its label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditButtonSection {
    pub label: String,
    #[serde(default)]
    pub url: Option<String>,
}

impl CreditButtonSection {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: None,
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }
}

impl FeedSection for CreditButtonSection {
    fn kind(&self) -> SectionKind {
        SectionKind::CreditButton
    }

    fn item_count(&self) -> usize {
        1
    }

    fn intrinsic_size(&self, _item: usize) -> SizeRequest {
        SizeRequest::Automatic
    }

    fn fit(&self, _item: usize, available_width: f32) -> Size {
        let label = TextStyle::caption().line_width(&self.label);
        Size::new((label + 2.0 * LABEL_PADDING).min(available_width), BUTTON_HEIGHT)
    }

    fn register_templates(&self, registry: &mut TemplateRegistry) {
        registry.register(BUTTON_TEMPLATE, self.kind());
    }

    fn cell(&self, item: usize) -> Option<CellDescriptor> {
        if item != 0 {
            return None;
        }
        let cell = CellDescriptor::new(BUTTON_TEMPLATE, &self.label);
        Some(match &self.url {
            Some(url) => cell.with_subtitle(url),
            None => cell,
        })
    }
}

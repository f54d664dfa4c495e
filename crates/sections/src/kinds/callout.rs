use crate::section::{CellDescriptor, FeedSection, SectionKind};
use crate::templates::TemplateRegistry;
use crate::text::TextStyle;
use serde::{Deserialize, Serialize};
use tabfeed_traits::SizeRequest;
use tabfeed_types::Size;

const BANNER_TEMPLATE: &str = "callout.banner";
const BANNER_PADDING: f32 = 12.0;
const ACTION_HEIGHT: f32 = 44.0;

/// A dismissible message banner whose height follows its wrapped text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalloutSection {
    pub message: String,
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default)]
    pub dismissed: bool,
}

impl CalloutSection {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            action: None,
            dismissed: false,
        }
    }

    pub fn with_action(mut self, label: impl Into<String>) -> Self {
        self.action = Some(label.into());
        self
    }

    /// Returns `false` if the callout was already dismissed.
    pub fn dismiss(&mut self) -> bool {
        !std::mem::replace(&mut self.dismissed, true)
    }
}

impl FeedSection for CalloutSection {
    fn kind(&self) -> SectionKind {
        SectionKind::Callout
    }

    fn item_count(&self) -> usize {
        usize::from(!self.dismissed)
    }

    fn intrinsic_size(&self, _item: usize) -> SizeRequest {
        SizeRequest::Automatic
    }

    fn fit(&self, _item: usize, available_width: f32) -> Size {
        let inner = (available_width - 2.0 * BANNER_PADDING).max(0.0);
        let text = TextStyle::body().measure(&self.message, inner);
        let action = if self.action.is_some() { ACTION_HEIGHT } else { 0.0 };
        Size::new(available_width, text.height + action + 2.0 * BANNER_PADDING)
    }

    fn register_templates(&self, registry: &mut TemplateRegistry) {
        registry.register(BANNER_TEMPLATE, self.kind());
    }

    fn cell(&self, item: usize) -> Option<CellDescriptor> {
        if item >= self.item_count() {
            return None;
        }
        let cell = CellDescriptor::new(BANNER_TEMPLATE, &self.message);
        Some(match &self.action {
            Some(label) => cell.with_subtitle(label),
            None => cell,
        })
    }
}

use crate::section::{CellDescriptor, FeedSection, SectionKind};
use crate::templates::TemplateRegistry;
use serde::{Deserialize, Serialize};
use tabfeed_traits::SizeRequest;
use tabfeed_types::Size;

const SPACER_TEMPLATE: &str = "spacer";

/// One empty item spanning the available width. The usual gap section.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SpacerSection {
    pub min_height: f32,
}

impl SpacerSection {
    pub fn new(min_height: f32) -> Self {
        Self { min_height }
    }
}

impl FeedSection for SpacerSection {
    fn kind(&self) -> SectionKind {
        SectionKind::Spacer
    }

    fn item_count(&self) -> usize {
        1
    }

    fn intrinsic_size(&self, _item: usize) -> SizeRequest {
        SizeRequest::Automatic
    }

    fn fit(&self, _item: usize, available_width: f32) -> Size {
        Size::new(available_width, self.min_height)
    }

    fn register_templates(&self, registry: &mut TemplateRegistry) {
        registry.register(SPACER_TEMPLATE, self.kind());
    }

    fn cell(&self, item: usize) -> Option<CellDescriptor> {
        (item == 0).then(|| CellDescriptor::new(SPACER_TEMPLATE, ""))
    }
}

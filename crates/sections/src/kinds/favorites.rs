use crate::section::{CellDescriptor, FeedSection, SectionKind};
use crate::templates::TemplateRegistry;
use serde::{Deserialize, Serialize};
use tabfeed_traits::SizeRequest;
use tabfeed_types::Size;

const TILE_TEMPLATE: &str = "favorites.tile";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Site {
    pub title: String,
    pub url: String,
}

impl Site {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
        }
    }
}

/// Pinned and top sites as fixed-size tiles.
///
/// At most `max_rows * columns` tiles are shown. `columns` is derived from the
/// available width by [`FavoritesSection::fit_columns`] before a pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FavoritesSection {
    pub sites: Vec<Site>,
    pub tile_size: Size,
    pub max_rows: usize,
    pub columns: usize,
}

impl Default for FavoritesSection {
    fn default() -> Self {
        Self {
            sites: Vec::new(),
            tile_size: Size::new(80.0, 100.0),
            max_rows: 2,
            columns: 4,
        }
    }
}

impl FavoritesSection {
    pub fn new(sites: Vec<Site>) -> Self {
        Self {
            sites,
            ..Self::default()
        }
    }

    pub fn with_tile_size(mut self, tile_size: Size) -> Self {
        self.tile_size = tile_size;
        self
    }

    pub fn with_max_rows(mut self, max_rows: usize) -> Self {
        self.max_rows = max_rows;
        self
    }

    /// Number of tiles that fit on one row of `available_width`, never less than one.
    pub fn columns_for(&self, available_width: f32, interitem_spacing: f32) -> usize {
        let stride = self.tile_size.width + interitem_spacing.max(0.0);
        if stride <= 0.0 || !available_width.is_finite() {
            return 1;
        }
        (((available_width + interitem_spacing.max(0.0)) / stride).floor() as usize).max(1)
    }

    /// Updates `columns` for a new width. Returns whether the item count may have changed.
    pub fn fit_columns(&mut self, available_width: f32, interitem_spacing: f32) -> bool {
        let columns = self.columns_for(available_width, interitem_spacing);
        let changed = columns != self.columns;
        self.columns = columns;
        changed
    }

    fn capacity(&self) -> usize {
        self.max_rows.saturating_mul(self.columns)
    }
}

impl FeedSection for FavoritesSection {
    fn kind(&self) -> SectionKind {
        SectionKind::Favorites
    }

    fn item_count(&self) -> usize {
        self.sites.len().min(self.capacity())
    }

    fn intrinsic_size(&self, _item: usize) -> SizeRequest {
        SizeRequest::Fixed(self.tile_size)
    }

    fn fit(&self, _item: usize, _available_width: f32) -> Size {
        self.tile_size
    }

    fn register_templates(&self, registry: &mut TemplateRegistry) {
        registry.register(TILE_TEMPLATE, self.kind());
    }

    fn cell(&self, item: usize) -> Option<CellDescriptor> {
        if item >= self.item_count() {
            return None;
        }
        let site = &self.sites[item];
        Some(CellDescriptor::new(TILE_TEMPLATE, &site.title).with_subtitle(&site.url))
    }
}

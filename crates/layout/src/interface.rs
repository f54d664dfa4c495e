use crate::LayoutDegradation;
use crate::util::non_negative;
use log::{trace, warn};
use tabfeed_traits::{SectionSource, SectionSpacing, SizeRequest, SpacingProvider, ViewportProvider};
use tabfeed_types::{EdgeInsets, ItemPath, SectionIndex, Size};

// --- Context ---

/// Geometry of the hosting surface for one pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutContext {
    pub viewport: Size,
    pub safe_area: EdgeInsets,
}

impl LayoutContext {
    pub fn new(viewport: Size, safe_area: EdgeInsets) -> Self {
        Self {
            viewport,
            safe_area,
        }
    }

    /// Width available to sections: the viewport minus the horizontal safe area.
    pub fn content_width(&self) -> f32 {
        (self.viewport.width - self.safe_area.horizontal()).max(0.0)
    }

    pub fn is_degenerate(&self) -> bool {
        self.viewport.is_degenerate()
    }

    /// The y coordinate the gap section stretches down to.
    pub fn gap_limit(&self, reserve: f32) -> f32 {
        self.viewport.height - self.safe_area.bottom - reserve
    }
}

// --- Snapshot ---

/// Resolved spacing and item sizes for one section.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionMetrics {
    pub spacing: SectionSpacing,
    pub items: Vec<Size>,
}

impl SectionMetrics {
    pub fn new(spacing: SectionSpacing, items: Vec<Size>) -> Self {
        Self { spacing, items }
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn is_single_item(&self) -> bool {
        self.items.len() == 1
    }

    /// Width left for items once the section's own insets are taken out.
    pub fn available_width(&self, content_width: f32) -> f32 {
        (content_width - self.spacing.insets.horizontal()).max(0.0)
    }
}

/// An immutable snapshot of everything a layout pass reads.
///
/// Providers are queried exactly once, here. A new snapshot is captured whenever
/// the viewport or the content changes; nothing computed from an older snapshot
/// is reused.
#[derive(Debug, Clone, Default)]
pub struct LayoutInputs {
    context: Option<LayoutContext>,
    sections: Vec<SectionMetrics>,
    degradations: Vec<LayoutDegradation>,
}

impl LayoutInputs {
    /// Queries the providers and resolves every item to a concrete size.
    ///
    /// A missing viewport provider yields a snapshot with no context. Provider
    /// answers that are negative or not finite are clamped to zero.
    pub fn capture(
        source: &dyn SectionSource,
        spacing: Option<&dyn SpacingProvider>,
        viewport: Option<&dyn ViewportProvider>,
        default_spacing: SectionSpacing,
    ) -> Self {
        let mut degradations = Vec::new();

        let context = match viewport {
            Some(provider) => {
                let reported = provider.safe_area();
                let safe_area = reported.clamped();
                if safe_area != reported {
                    degradations.push(LayoutDegradation::clamped(
                        "safe area",
                        format!("{reported:?}"),
                    ));
                }
                Some(LayoutContext::new(provider.bounds(), safe_area))
            }
            None => {
                degradations.push(LayoutDegradation::MissingHost);
                None
            }
        };

        let fitting_enabled = match context {
            Some(ctx) if ctx.is_degenerate() => {
                degradations.push(LayoutDegradation::DegenerateViewport {
                    width: ctx.viewport.width,
                    height: ctx.viewport.height,
                });
                false
            }
            Some(_) => true,
            None => false,
        };
        let content_width = context.map_or(0.0, |ctx| ctx.content_width());

        let section_count = source.section_count();
        let mut sections = Vec::with_capacity(section_count);
        for index in 0..section_count {
            let requested = spacing
                .and_then(|provider| provider.spacing(index))
                .unwrap_or(default_spacing);
            let spacing = sanitize_spacing(index, requested, &mut degradations);
            let available = (content_width - spacing.insets.horizontal()).max(0.0);

            let item_count = source.item_count(index);
            let mut items = Vec::with_capacity(item_count);
            for item in 0..item_count {
                let path = ItemPath::new(index, item);
                items.push(if fitting_enabled {
                    resolve_item_size(source, path, available, &mut degradations)
                } else {
                    Size::zero()
                });
            }

            sections.push(SectionMetrics::new(spacing, items));
        }

        for degradation in &degradations {
            warn!("{} ({})", degradation, source.name());
        }

        Self {
            context,
            sections,
            degradations,
        }
    }

    pub fn context(&self) -> Option<&LayoutContext> {
        self.context.as_ref()
    }

    pub fn sections(&self) -> &[SectionMetrics] {
        &self.sections
    }

    pub fn section(&self, index: SectionIndex) -> Option<&SectionMetrics> {
        self.sections.get(index)
    }

    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    pub fn item_count(&self, section: SectionIndex) -> usize {
        self.sections.get(section).map_or(0, SectionMetrics::item_count)
    }

    pub fn contains(&self, item: ItemPath) -> bool {
        item.item < self.item_count(item.section)
    }

    /// Degradations found while capturing (missing host, clamped answers...).
    pub fn degradations(&self) -> &[LayoutDegradation] {
        &self.degradations
    }
}

fn sanitize_spacing(
    section: SectionIndex,
    requested: SectionSpacing,
    degradations: &mut Vec<LayoutDegradation>,
) -> SectionSpacing {
    let insets = requested.insets.clamped();
    let (line_spacing, line_clamped) = non_negative(requested.line_spacing);
    let (interitem_spacing, interitem_clamped) = non_negative(requested.interitem_spacing);

    if insets != requested.insets || line_clamped || interitem_clamped {
        degradations.push(LayoutDegradation::clamped(
            format!("section {section}"),
            format!("{requested:?}"),
        ));
    }

    SectionSpacing::new(insets, line_spacing, interitem_spacing)
}

fn resolve_item_size(
    source: &dyn SectionSource,
    path: ItemPath,
    available_width: f32,
    degradations: &mut Vec<LayoutDegradation>,
) -> Size {
    let requested = match source.size_request(path) {
        SizeRequest::Fixed(size) => size,
        SizeRequest::Automatic => {
            let fitted = source.fit_size(path, available_width);
            trace!("Fitted item {path} to {fitted:?} within {available_width:.2}");
            fitted
        }
    };

    let (width, width_clamped) = non_negative(requested.width);
    let (height, height_clamped) = non_negative(requested.height);
    if width_clamped || height_clamped {
        degradations.push(LayoutDegradation::clamped(
            format!("item {path}"),
            format!("{requested:?}"),
        ));
    }

    // Items never overflow their section horizontally.
    Size::new(width.min(available_width), height)
}

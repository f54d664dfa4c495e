use crate::scheduler::{RelayoutReason, RelayoutScheduler};
use log::{debug, info};
use serde::{Serialize, Serializer};
use tabfeed_layout::{
    FlowLayout, GapGeometry, LayoutConfig, LayoutDegradation, LayoutInputs, LayoutPass,
    PlacedFrame,
};
use tabfeed_sections::{
    CellDescriptor, EventSink, Section, SectionEvent, SectionKind, SectionList, TemplateRegistry,
    event_channel,
};
use tabfeed_traits::{SpacingProvider, SpacingTable, Surface, ViewportProvider};
use tabfeed_types::{ItemPath, Rect, SectionIndex, Size};

/// The resolved gap section of a pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GapReport {
    pub section: SectionIndex,
    pub natural_height: f32,
    pub height: f32,
    /// Distance the sections after the gap moved down.
    pub shift: f32,
}

impl From<&GapGeometry> for GapReport {
    fn from(gap: &GapGeometry) -> Self {
        Self {
            section: gap.section,
            natural_height: gap.natural.height,
            height: gap.height,
            shift: gap.downstream_shift(),
        }
    }
}

/// The outcome of one layout pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedLayout {
    pub frames: Vec<PlacedFrame>,
    pub content_extent: Size,
    pub gap: Option<GapReport>,
    #[serde(rename = "warnings", serialize_with = "as_messages")]
    pub degradations: Vec<LayoutDegradation>,
}

impl FeedLayout {
    fn from_pass(pass: &LayoutPass<'_>, region: Option<Rect>) -> Self {
        let frames = match region {
            Some(region) => pass.frames_in_region(region),
            None => pass.all_frames(),
        };
        Self {
            frames,
            content_extent: pass.content_extent(),
            gap: pass.gap().map(GapReport::from),
            degradations: pass.degradations().to_vec(),
        }
    }

    pub fn frame(&self, item: ItemPath) -> Option<Rect> {
        self.frames.iter().find(|p| p.item == item).map(|p| p.frame)
    }

    /// True when the pass could not place anything, e.g. without a surface.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

fn as_messages<S: Serializer>(
    degradations: &[LayoutDegradation],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(degradations.iter().map(|d| d.to_string()))
}

/// Owns everything the feed needs between passes.
///
/// Inputs change only through `&mut self`, and every pass captures a fresh
/// snapshot, so frames never mix old and new inputs.
#[derive(Debug)]
pub struct FeedHost {
    sections: SectionList,
    surface: Option<Surface>,
    spacing: SpacingTable,
    engine: FlowLayout,
    scheduler: RelayoutScheduler,
    events: EventSink,
    templates: TemplateRegistry,
    /// Reserve for a gap that follows the first spacer section, if enabled.
    spacer_gap: Option<f32>,
}

impl FeedHost {
    pub fn new(sections: Vec<Section>) -> Self {
        let (events, receiver) = event_channel();
        let sections = SectionList::new(sections).with_events(events.clone());
        let mut templates = TemplateRegistry::new();
        sections.register_templates(&mut templates);

        Self {
            sections,
            surface: None,
            spacing: SpacingTable::new(),
            engine: FlowLayout::default(),
            scheduler: RelayoutScheduler::new(receiver),
            events,
            templates,
            spacer_gap: None,
        }
    }

    pub fn with_surface(mut self, surface: Surface) -> Self {
        self.surface = Some(surface);
        self
    }

    pub fn with_spacing(mut self, spacing: SpacingTable) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn with_config(mut self, config: LayoutConfig) -> Self {
        self.engine = FlowLayout::new(config);
        self
    }

    /// Uses the first spacer section as the gap section.
    ///
    /// The spacer is looked up again before every pass, so the gap follows it
    /// when sections are replaced.
    pub fn with_spacer_gap(mut self, reserve: f32) -> Self {
        self.spacer_gap = Some(reserve);
        self.follow_spacer();
        self
    }

    pub fn sections(&self) -> &SectionList {
        &self.sections
    }

    /// Mutable access to the sections. Changes report themselves as events.
    pub fn sections_mut(&mut self) -> &mut SectionList {
        &mut self.sections
    }

    pub fn surface(&self) -> Option<&Surface> {
        self.surface.as_ref()
    }

    pub fn config(&self) -> &LayoutConfig {
        self.engine.config()
    }

    pub fn templates(&self) -> &TemplateRegistry {
        &self.templates
    }

    /// A sender for changes that originate outside the sections, e.g. theming.
    pub fn event_sink(&self) -> EventSink {
        self.events.clone()
    }

    pub fn notify_theme_changed(&self) {
        self.events.emit(SectionEvent::ThemeChanged);
    }

    /// Attaches, replaces or detaches the hosting surface.
    pub fn set_surface(&mut self, surface: Option<Surface>) {
        if self.surface != surface {
            self.surface = surface;
            self.scheduler.request(RelayoutReason::Geometry);
        }
    }

    pub fn set_spacing(&mut self, spacing: SpacingTable) {
        self.spacing = spacing;
        self.scheduler.request(RelayoutReason::Geometry);
    }

    /// Replaces every section and registers their templates.
    pub fn set_sections(&mut self, sections: Vec<Section>) {
        self.sections.reload(sections);
        self.sections.register_templates(&mut self.templates);
    }

    /// Pins the gap to `gap_section`, replacing any spacer-following gap.
    pub fn configure_gap(&mut self, gap_section: Option<SectionIndex>, reserve: f32) {
        self.spacer_gap = None;
        self.engine.configure(gap_section, reserve);
        self.scheduler.request(RelayoutReason::Geometry);
    }

    /// Why another pass is needed, if anything changed since the last call.
    pub fn pending_relayout(&mut self) -> Option<RelayoutReason> {
        self.scheduler.take()
    }

    /// Captures a fresh snapshot and lays out every item.
    pub fn layout_pass(&mut self) -> FeedLayout {
        self.run(None)
    }

    /// Like [`Self::layout_pass`], reporting only the items visible in `region`.
    pub fn layout_region(&mut self, region: Rect) -> FeedLayout {
        self.run(Some(region))
    }

    pub fn cell(&self, item: ItemPath) -> Option<CellDescriptor> {
        self.sections.cell(item)
    }

    fn run(&mut self, region: Option<Rect>) -> FeedLayout {
        self.follow_spacer();
        self.fit_favorites();

        let inputs = LayoutInputs::capture(
            &self.sections,
            Some(&self.spacing as &dyn SpacingProvider),
            self.surface.as_ref().map(|s| s as &dyn ViewportProvider),
            self.engine.config().default_spacing,
        );
        let pass = self.engine.prepare(&inputs);
        let layout = FeedLayout::from_pass(&pass, region);

        debug!(
            "Feed pass placed {} frames, extent {}x{}",
            layout.frames.len(),
            layout.content_extent.width,
            layout.content_extent.height
        );
        if let Some(gap) = &layout.gap {
            info!(
                "Gap section {} stretched from {} to {}",
                gap.section, gap.natural_height, gap.height
            );
        }
        layout
    }

    fn follow_spacer(&mut self) {
        if let Some(reserve) = self.spacer_gap {
            let gap = self.sections.index_of(SectionKind::Spacer);
            self.engine.configure(gap, reserve);
        }
    }

    fn fit_favorites(&mut self) {
        let Some(surface) = self.surface else {
            return;
        };
        let content_width = surface.bounds.width - surface.safe_area.horizontal();
        let defaults = self.engine.config().default_spacing;
        let spacing = &self.spacing;
        self.sections.fit_columns(|index| {
            let spacing = spacing.spacing(index).unwrap_or(defaults);
            (
                (content_width - spacing.insets.horizontal()).max(0.0),
                spacing.interitem_spacing,
            )
        });
    }
}

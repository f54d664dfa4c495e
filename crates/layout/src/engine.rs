use crate::LayoutConfig;
use crate::LayoutDegradation;
use crate::algorithms::flow_solver::{NaturalFlow, solve_natural_flow};
use crate::algorithms::gap::{GapGeometry, resolve_gap};
use crate::interface::LayoutInputs;
use log::{debug, error, warn};
use serde::Serialize;
use tabfeed_types::{ItemPath, Rect, SectionIndex, Size};

/// A frame together with the item it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlacedFrame {
    pub item: ItemPath,
    pub frame: Rect,
}

/// The flow layout engine.
///
/// Holds nothing but its configuration between passes. Every query runs against
/// a [`LayoutPass`] prepared from a snapshot, so `configure` (which needs
/// `&mut self`) cannot happen while a pass is alive.
#[derive(Debug, Clone, Default)]
pub struct FlowLayout {
    config: LayoutConfig,
}

impl FlowLayout {
    pub fn new(config: LayoutConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Sets the gap section and the height kept free below it.
    pub fn configure(&mut self, gap_section: Option<SectionIndex>, gap_height_reserve: f32) {
        self.config.gap_section = gap_section;
        self.config.gap_height_reserve = gap_height_reserve;
    }

    /// Solves the natural flow for `inputs` and resolves the gap section.
    pub fn prepare<'a>(&self, inputs: &'a LayoutInputs) -> LayoutPass<'a> {
        let mut degradations = inputs.degradations().to_vec();

        let state = match inputs.context() {
            None => PassState::NotComputable,
            Some(context) if context.is_degenerate() => PassState::Collapsed,
            Some(context) => match solve_natural_flow(context, inputs.sections()) {
                Ok(flow) => PassState::Natural(flow),
                Err(err) => {
                    error!("{err}");
                    degradations.push(LayoutDegradation::SolverFailed {
                        reason: err.to_string(),
                    });
                    PassState::NotComputable
                }
            },
        };

        let gap = match (&state, inputs.context()) {
            (PassState::Natural(flow), Some(context)) => {
                match resolve_gap(&self.config, context, inputs.sections(), flow) {
                    Ok(gap) => gap,
                    Err(degradation) => {
                        warn!("{degradation}");
                        degradations.push(degradation);
                        None
                    }
                }
            }
            _ => None,
        };

        let pass = LayoutPass {
            inputs,
            state,
            gap,
            degradations,
        };
        debug!(
            "Prepared layout pass: {} sections, extent {:?}, gap {:?}",
            inputs.section_count(),
            pass.content_extent(),
            pass.gap
        );
        pass
    }

    /// The frame of a single item, or `None` if it cannot be computed yet.
    pub fn compute_frame(&self, inputs: &LayoutInputs, item: ItemPath) -> Option<Rect> {
        self.prepare(inputs).frame(item)
    }

    pub fn compute_content_extent(&self, inputs: &LayoutInputs) -> Size {
        self.prepare(inputs).content_extent()
    }

    pub fn compute_frames_in_region(&self, inputs: &LayoutInputs, region: Rect) -> Vec<PlacedFrame> {
        self.prepare(inputs).frames_in_region(region)
    }
}

#[derive(Debug, Clone)]
enum PassState {
    /// No hosting surface (or the solver failed): nothing can be placed.
    NotComputable,
    /// Degenerate viewport: every item collapses to a zero rect.
    Collapsed,
    Natural(NaturalFlow),
}

/// One layout pass over a snapshot.
///
/// Borrows the snapshot it was prepared from, so it cannot outlive the inputs.
#[derive(Debug, Clone)]
pub struct LayoutPass<'a> {
    inputs: &'a LayoutInputs,
    state: PassState,
    gap: Option<GapGeometry>,
    degradations: Vec<LayoutDegradation>,
}

impl<'a> LayoutPass<'a> {
    pub fn inputs(&self) -> &'a LayoutInputs {
        self.inputs
    }

    /// The resolved gap section, if one is in effect for this pass.
    pub fn gap(&self) -> Option<&GapGeometry> {
        self.gap.as_ref()
    }

    /// Everything that degraded while capturing the snapshot and preparing the pass.
    pub fn degradations(&self) -> &[LayoutDegradation] {
        &self.degradations
    }

    /// The item's frame from the flow alone, before any override.
    pub fn natural_frame(&self, item: ItemPath) -> Option<Rect> {
        if !self.inputs.contains(item) {
            return None;
        }
        match &self.state {
            PassState::NotComputable => None,
            PassState::Collapsed => Some(Rect::zero()),
            PassState::Natural(flow) => flow.item(item),
        }
    }

    /// The item's frame with the single-item and gap overrides applied.
    ///
    /// Sections after the gap are not moved here; see [`Self::positioned_frame`].
    pub fn frame(&self, item: ItemPath) -> Option<Rect> {
        let mut frame = self.natural_frame(item)?;
        if !matches!(self.state, PassState::Natural(_)) {
            return Some(frame);
        }

        let section = self.inputs.section(item.section)?;
        if section.is_single_item() {
            frame.x = section.spacing.insets.left;
        }
        if let Some(gap) = self.gap.as_ref().filter(|gap| gap.section == item.section) {
            frame.height = gap.height;
        }
        Some(frame)
    }

    /// The item's frame including the downward shift of sections after the gap.
    pub fn positioned_frame(&self, item: ItemPath) -> Option<Rect> {
        let frame = self.frame(item)?;
        Some(frame.offset_y(self.shift_for(item.section)))
    }

    /// Total scrollable size: the natural flow plus whatever the gap gained.
    pub fn content_extent(&self) -> Size {
        match &self.state {
            PassState::NotComputable | PassState::Collapsed => Size::zero(),
            PassState::Natural(flow) => {
                let grown = self.gap.as_ref().map_or(0.0, GapGeometry::downstream_shift);
                Size::new(flow.content_size.width, flow.content_size.height + grown)
            }
        }
    }

    /// Frames of every item whose natural frame intersects `region`, in flow order.
    pub fn frames_in_region(&self, region: Rect) -> Vec<PlacedFrame> {
        let PassState::Natural(flow) = &self.state else {
            return Vec::new();
        };

        flow.items()
            .filter(|(_, natural)| natural.intersects(&region))
            .filter_map(|(item, _)| {
                self.positioned_frame(item)
                    .map(|frame| PlacedFrame { item, frame })
            })
            .collect()
    }

    /// Frames of every item in flow order.
    pub fn all_frames(&self) -> Vec<PlacedFrame> {
        let mut frames = Vec::new();
        for (section, metrics) in self.inputs.sections().iter().enumerate() {
            for item in 0..metrics.item_count() {
                let item = ItemPath::new(section, item);
                if let Some(frame) = self.positioned_frame(item) {
                    frames.push(PlacedFrame { item, frame });
                }
            }
        }
        frames
    }

    fn shift_for(&self, section: SectionIndex) -> f32 {
        match &self.gap {
            Some(gap) if section > gap.section => gap.downstream_shift(),
            _ => 0.0,
        }
    }
}

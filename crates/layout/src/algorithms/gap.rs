//! Resolution of the elastic gap section.

use crate::LayoutConfig;
use crate::LayoutDegradation;
use crate::algorithms::flow_solver::NaturalFlow;
use crate::interface::{LayoutContext, SectionMetrics};
use tabfeed_types::{ItemPath, Rect, SectionIndex};

/// The gap item of a pass, before and after stretching.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GapGeometry {
    pub section: SectionIndex,
    /// The gap item's naturally flowed frame.
    pub natural: Rect,
    /// The stretched height. Never negative.
    pub height: f32,
}

impl GapGeometry {
    /// Height gained (positive) or lost (negative) by stretching.
    pub fn extra_height(&self) -> f32 {
        self.height - self.natural.height
    }

    /// Distance the sections after the gap move down. Zero unless the gap grew.
    pub fn downstream_shift(&self) -> f32 {
        let extra = self.extra_height();
        if extra > 0.0 { extra } else { 0.0 }
    }
}

/// Height of a gap item whose top edge sits at `origin_y`, stretched to `limit`.
pub fn stretched_height(limit: f32, origin_y: f32) -> f32 {
    (limit - origin_y).max(0.0)
}

/// Validates the configured gap section and stretches it.
///
/// Returns `Ok(None)` when no gap is configured, and a degradation when the
/// configured index cannot act as a gap for this snapshot.
pub fn resolve_gap(
    config: &LayoutConfig,
    context: &LayoutContext,
    sections: &[SectionMetrics],
    flow: &NaturalFlow,
) -> Result<Option<GapGeometry>, LayoutDegradation> {
    let Some(index) = config.gap_section else {
        return Ok(None);
    };

    let out_of_range = LayoutDegradation::OutOfRangeGapSection {
        index,
        section_count: sections.len(),
    };
    let Some(section) = sections.get(index) else {
        return Err(out_of_range);
    };
    if !section.is_single_item() {
        return Err(LayoutDegradation::GapSectionNotSingular {
            index,
            item_count: section.item_count(),
        });
    }
    let natural = flow.item(ItemPath::new(index, 0)).ok_or(out_of_range)?;

    let limit = context.gap_limit(config.effective_reserve());
    Ok(Some(GapGeometry {
        section: index,
        natural,
        height: stretched_height(limit, natural.y),
    }))
}

//! Natural placement of items, before any feed-specific override.
//!
//! Each section is solved as a wrapping flex row by taffy: items keep their
//! resolved size, rows are separated by the line spacing, items on a row by at
//! least the inter-item spacing, and any free space on a row is spread between
//! its items. A row holding a single item is centered instead. Sections are then
//! stacked top to bottom below the previous section's bottom inset, separated
//! from it by that section's line spacing.

use crate::LayoutError;
use crate::interface::{LayoutContext, SectionMetrics};
use crate::util::{EPSILON, approx_eq};
use std::fmt::Debug;
use tabfeed_types::{ItemPath, Rect, Size};
use taffy::TaffyTree;
use taffy::style::{
    AlignContent, AlignItems, AvailableSpace, Dimension, Display, FlexDirection, FlexWrap,
    JustifyContent, LengthPercentage, Style,
};

#[derive(Debug, Clone, PartialEq)]
pub struct NaturalSection {
    /// The section box including its insets.
    pub frame: Rect,
    pub items: Vec<Rect>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NaturalFlow {
    pub sections: Vec<NaturalSection>,
    pub content_size: Size,
}

impl NaturalFlow {
    pub fn item(&self, path: ItemPath) -> Option<Rect> {
        self.sections.get(path.section)?.items.get(path.item).copied()
    }

    /// All item frames in flow order.
    pub fn items(&self) -> impl Iterator<Item = (ItemPath, Rect)> + '_ {
        self.sections.iter().enumerate().flat_map(|(section, solved)| {
            solved
                .items
                .iter()
                .enumerate()
                .map(move |(item, frame)| (ItemPath::new(section, item), *frame))
        })
    }
}

pub fn solve_natural_flow(
    context: &LayoutContext,
    sections: &[SectionMetrics],
) -> Result<NaturalFlow, LayoutError> {
    let content_width = context.content_width();

    let mut taffy: TaffyTree<()> = TaffyTree::new();
    taffy.disable_rounding();

    let available_space = taffy::geometry::Size {
        width: AvailableSpace::Definite(content_width),
        height: AvailableSpace::MaxContent,
    };

    let mut solved = Vec::with_capacity(sections.len());
    let mut cursor_y = 0.0;
    let mut separation = 0.0;

    for section in sections {
        cursor_y += separation;

        let mut leaves = Vec::with_capacity(section.items.len());
        for size in &section.items {
            let leaf = taffy
                .new_leaf(item_style(*size))
                .map_err(solver_error("creating an item leaf"))?;
            leaves.push(leaf);
        }

        let root = taffy
            .new_with_children(section_style(section, content_width), &leaves)
            .map_err(solver_error("creating a section container"))?;

        taffy
            .compute_layout(root, available_space)
            .map_err(solver_error("computing a section layout"))?;

        let section_height = taffy
            .layout(root)
            .map_err(solver_error("reading a section layout"))?
            .size
            .height;

        let mut items = Vec::with_capacity(leaves.len());
        for (leaf, size) in leaves.iter().zip(&section.items) {
            let location = taffy
                .layout(*leaf)
                .map_err(solver_error("reading an item layout"))?
                .location;
            items.push(Rect::new(
                location.x,
                cursor_y + location.y,
                size.width,
                size.height,
            ));
        }

        center_lone_rows(
            &mut items,
            section.spacing.insets.left,
            section.available_width(content_width),
        );

        solved.push(NaturalSection {
            frame: Rect::new(0.0, cursor_y, content_width, section_height),
            items,
        });
        cursor_y += section_height;
        separation = section.spacing.line_spacing;
    }

    Ok(NaturalFlow {
        sections: solved,
        content_size: Size::new(content_width, cursor_y),
    })
}

/// Centers every row that holds exactly one item within the inner width.
///
/// Items on the same row share their top edge and advance along `x`. Zero-height
/// rows can share a `y`, so a row also ends where an item starts before the
/// previous one ends.
pub(crate) fn center_lone_rows(items: &mut [Rect], leading: f32, inner_width: f32) {
    let mut start = 0;
    while start < items.len() {
        let mut end = start + 1;
        while end < items.len() && same_row(&items[end - 1], &items[end]) {
            end += 1;
        }

        if end - start == 1 {
            let item = &mut items[start];
            item.x = leading + (inner_width - item.width).max(0.0) / 2.0;
        }
        start = end;
    }
}

fn same_row(previous: &Rect, next: &Rect) -> bool {
    approx_eq(previous.y, next.y) && next.x + EPSILON >= previous.max_x()
}

fn item_style(size: Size) -> Style {
    Style {
        size: taffy::geometry::Size {
            width: Dimension::length(size.width),
            height: Dimension::length(size.height),
        },
        flex_grow: 0.0,
        flex_shrink: 0.0,
        ..Default::default()
    }
}

fn section_style(section: &SectionMetrics, content_width: f32) -> Style {
    let insets = section.spacing.insets;
    Style {
        display: Display::Flex,
        flex_direction: FlexDirection::Row,
        flex_wrap: FlexWrap::Wrap,
        justify_content: Some(JustifyContent::SpaceBetween),
        align_items: Some(AlignItems::FlexStart),
        align_content: Some(AlignContent::FlexStart),
        gap: taffy::geometry::Size {
            width: LengthPercentage::length(section.spacing.interitem_spacing),
            height: LengthPercentage::length(section.spacing.line_spacing),
        },
        padding: taffy::geometry::Rect {
            left: LengthPercentage::length(insets.left),
            right: LengthPercentage::length(insets.right),
            top: LengthPercentage::length(insets.top),
            bottom: LengthPercentage::length(insets.bottom),
        },
        size: taffy::geometry::Size {
            width: Dimension::length(content_width),
            height: Dimension::auto(),
        },
        ..Default::default()
    }
}

fn solver_error<E: Debug>(stage: &'static str) -> impl Fn(E) -> LayoutError {
    move |err| LayoutError::Solver {
        stage,
        message: format!("{err:?}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_lone_rows_only_touches_single_item_rows() {
        let mut items = vec![
            Rect::new(16.0, 8.0, 100.0, 50.0),
            Rect::new(224.0, 8.0, 100.0, 50.0),
            Rect::new(16.0, 68.0, 100.0, 50.0),
        ];
        center_lone_rows(&mut items, 16.0, 308.0);

        assert_eq!(items[0].x, 16.0);
        assert_eq!(items[1].x, 224.0);
        assert_eq!(items[2].x, 120.0);
    }

    #[test]
    fn test_zero_height_items_on_separate_lines_are_separate_rows() {
        let mut items = vec![Rect::new(0.0, 0.0, 200.0, 0.0); 3];
        center_lone_rows(&mut items, 0.0, 340.0);
        assert!(items.iter().all(|item| item.x == 70.0), "{items:?}");

        let mut shared = vec![Rect::new(0.0, 0.0, 100.0, 0.0), Rect::new(120.0, 0.0, 100.0, 0.0)];
        center_lone_rows(&mut shared, 0.0, 340.0);
        assert_eq!(shared[0].x, 0.0);
        assert_eq!(shared[1].x, 120.0);
    }

    #[test]
    fn test_center_lone_rows_full_width_item_stays_at_leading_edge() {
        let mut items = vec![Rect::new(16.0, 0.0, 308.0, 40.0)];
        center_lone_rows(&mut items, 16.0, 308.0);
        assert_eq!(items[0].x, 16.0);
    }
}

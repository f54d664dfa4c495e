//! Geometry primitives shared by the layout engine and its collaborators.
//!
//! All values are in points. Frames live in content coordinates: `x = 0` is the
//! leading edge of the safe area and `y = 0` is the top of the scrollable content.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn zero() -> Self {
        Self::default()
    }

    pub fn max_x(&self) -> f32 {
        self.x + self.width
    }

    pub fn max_y(&self) -> f32 {
        self.y + self.height
    }

    /// True when the two rectangles overlap on both axes.
    ///
    /// Touching edges do not count as an intersection. A rectangle with zero
    /// width or height intersects another when that edge lies inside it, so a
    /// collapsed frame at `y = 10` intersects a region spanning `0..100` but not
    /// one that ends at `10`.
    pub fn intersects(&self, other: &Rect) -> bool {
        spans_overlap(self.x, self.width, other.x, other.width)
            && spans_overlap(self.y, self.height, other.y, other.height)
    }

    /// Returns a copy moved vertically by `dy`.
    pub fn offset_y(self, dy: f32) -> Self {
        Self {
            y: self.y + dy,
            ..self
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn zero() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
        }
    }

    /// A size is degenerate when either dimension is zero, negative or not finite.
    pub fn is_degenerate(&self) -> bool {
        !(self.width.is_finite() && self.height.is_finite())
            || self.width <= 0.0
            || self.height <= 0.0
    }
}

/// Padding on the four edges of a box.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EdgeInsets {
    pub top: f32,
    pub left: f32,
    pub bottom: f32,
    pub right: f32,
}

impl EdgeInsets {
    pub fn new(top: f32, left: f32, bottom: f32, right: f32) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    pub fn zero() -> Self {
        Self::default()
    }

    pub fn all(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    /// Insets with `horizontal` on the left/right edges and `vertical` on top/bottom.
    pub fn symmetric(horizontal: f32, vertical: f32) -> Self {
        Self::new(vertical, horizontal, vertical, horizontal)
    }

    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }

    pub fn is_non_negative(&self) -> bool {
        [self.top, self.left, self.bottom, self.right]
            .iter()
            .all(|v| v.is_finite() && *v >= 0.0)
    }

    /// Replaces negative or non-finite edges with zero.
    pub fn clamped(self) -> Self {
        let fix = |v: f32| if v.is_finite() { v.max(0.0) } else { 0.0 };
        Self {
            top: fix(self.top),
            left: fix(self.left),
            bottom: fix(self.bottom),
            right: fix(self.right),
        }
    }
}

/// Half-open overlap of `[a, a + a_len)` and `[b, b + b_len)`. An empty span
/// overlaps when its position lies inside the other span.
fn spans_overlap(a: f32, a_len: f32, b: f32, b_len: f32) -> bool {
    match (a_len > 0.0, b_len > 0.0) {
        (true, true) => a < b + b_len && b < a + a_len,
        (false, true) => b <= a && a < b + b_len,
        (true, false) => a <= b && b < a + a_len,
        (false, false) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_touching_rects_do_not_intersect() {
        let a = Rect::new(0.0, 0.0, 100.0, 50.0);
        let b = Rect::new(0.0, 50.0, 100.0, 50.0);
        assert!(!a.intersects(&b));
        assert!(a.intersects(&Rect::new(99.0, 49.0, 10.0, 10.0)));
    }

    #[test]
    fn test_zero_height_rect_intersects_when_inside() {
        let collapsed = Rect::new(10.0, 10.0, 50.0, 0.0);
        let region = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert!(collapsed.intersects(&region));
        assert!(region.intersects(&collapsed));

        // At the region's top edge it is inside; at the bottom edge it is not.
        assert!(collapsed.intersects(&Rect::new(0.0, 10.0, 100.0, 20.0)));
        assert!(!collapsed.intersects(&Rect::new(0.0, 0.0, 100.0, 10.0)));
        assert!(!collapsed.intersects(&Rect::new(0.0, 10.0, 100.0, 0.0)));
    }

    #[test]
    fn test_degenerate_sizes() {
        assert!(Size::zero().is_degenerate());
        assert!(Size::new(320.0, -1.0).is_degenerate());
        assert!(Size::new(f32::NAN, 10.0).is_degenerate());
        assert!(!Size::new(320.0, 640.0).is_degenerate());
    }

    #[test]
    fn test_insets_clamping() {
        let insets = EdgeInsets::new(-4.0, 16.0, f32::INFINITY, 8.0);
        assert!(!insets.is_non_negative());
        assert_eq!(insets.clamped(), EdgeInsets::new(0.0, 16.0, 0.0, 8.0));
        assert_eq!(EdgeInsets::symmetric(16.0, 4.0).horizontal(), 32.0);
    }

    #[test]
    fn test_insets_deserialize_partial() {
        let insets: EdgeInsets = serde_json::from_str(r#"{"left": 16.0}"#).unwrap();
        assert_eq!(insets, EdgeInsets::new(0.0, 16.0, 0.0, 0.0));
    }
}

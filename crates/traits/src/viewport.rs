//! The hosting surface: viewport bounds and safe-area insets.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use tabfeed_types::{EdgeInsets, Size};

/// Reports the current geometry of the hosting surface.
///
/// The engine re-queries on every capture and never caches the answer.
pub trait ViewportProvider: Debug {
    fn bounds(&self) -> Size;

    fn safe_area(&self) -> EdgeInsets;
}

/// A fixed surface, e.g. a device profile in a scenario file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Surface {
    pub bounds: Size,
    #[serde(default)]
    pub safe_area: EdgeInsets,
}

impl Surface {
    pub fn new(bounds: Size, safe_area: EdgeInsets) -> Self {
        Self { bounds, safe_area }
    }

    /// Swaps width and height, keeping the safe area as-is.
    pub fn rotated(self) -> Self {
        Self {
            bounds: Size::new(self.bounds.height, self.bounds.width),
            ..self
        }
    }
}

impl ViewportProvider for Surface {
    fn bounds(&self) -> Size {
        self.bounds
    }

    fn safe_area(&self) -> EdgeInsets {
        self.safe_area
    }
}

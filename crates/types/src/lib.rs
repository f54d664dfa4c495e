pub mod geometry;
pub mod ids;

pub use geometry::{EdgeInsets, Rect, Size};
pub use ids::{ItemPath, SectionIndex, TemplateId};

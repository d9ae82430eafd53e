pub mod outline;
pub mod point;

pub use outline::{Outline, OutlineExt};
pub use point::{PatternPoint, PointKind};

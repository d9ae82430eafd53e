pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod pattern;
pub mod piece;

pub use error::{ParseError, PatternError, Result, TailorError};
pub use geometry::{Outline, OutlineExt, PatternPoint, PointKind};
pub use operations::grading::{GradedPattern, Size};
pub use pattern::{Pattern, PatternEngine, Units};
pub use piece::{PatternPiece, PieceId, PieceOptions};

mod grade_pattern;
mod size;

pub use grade_pattern::{grade_piece, GradePattern, GradedPattern, GradedSize};
pub use size::{size_run, Size};

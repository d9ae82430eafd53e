mod polygon_offset;
mod seam_allowance;

pub use polygon_offset::offset_polygon;
pub use seam_allowance::SeamAllowance;

use serde::{Deserialize, Serialize};

use super::PieceId;
use crate::math::Vector2;

slotmap::new_key_type! {
    /// Unique identifier for a grading rule within its piece.
    pub struct GradingRuleId;
}

/// Per-grade-step displacement of one outline point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradingRule {
    pub id: GradingRuleId,
    pub piece_id: PieceId,
    /// Index into the outline as it was when the rule was added. Rules whose
    /// index no longer exists are skipped when grading.
    pub point_index: usize,
    pub x_grade: f64,
    pub y_grade: f64,
}

impl GradingRule {
    /// Displacement applied to the point at signed grade step `grade`.
    #[must_use]
    pub fn displacement(&self, grade: i32) -> Vector2 {
        let g = f64::from(grade);
        Vector2::new(self.x_grade * g, self.y_grade * g)
    }
}

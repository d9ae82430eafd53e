use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::Size;
use crate::geometry::Outline;
use crate::pattern::Pattern;
use crate::piece::{PatternPiece, PieceId};

/// Outlines of every piece at one target size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradedSize {
    pub name: String,
    pub grade: i32,
    pub outlines: BTreeMap<PieceId, Outline>,
}

impl GradedSize {
    /// Graded outline of one piece.
    #[must_use]
    pub fn outline(&self, piece: PieceId) -> Option<&Outline> {
        self.outlines.get(&piece)
    }
}

/// Result of grading a pattern, in the order the sizes were requested.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GradedPattern {
    sizes: Vec<GradedSize>,
}

impl GradedPattern {
    /// Looks up a size by name. With duplicate names the first one wins.
    #[must_use]
    pub fn get(&self, size: &str) -> Option<&GradedSize> {
        self.sizes.iter().find(|s| s.name == size)
    }

    /// Iterates over the graded sizes in request order.
    pub fn iter(&self) -> impl Iterator<Item = &GradedSize> {
        self.sizes.iter()
    }

    /// Size names in request order.
    #[must_use]
    pub fn size_names(&self) -> Vec<&str> {
        self.sizes.iter().map(|s| s.name.as_str()).collect()
    }

    /// Number of graded sizes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    /// Whether no sizes were graded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }
}

impl IntoIterator for GradedPattern {
    type Item = GradedSize;
    type IntoIter = std::vec::IntoIter<GradedSize>;

    fn into_iter(self) -> Self::IntoIter {
        self.sizes.into_iter()
    }
}

/// Grades every piece of a pattern into a list of sizes.
///
/// Each rule moves its outline point by `(x_grade * g, y_grade * g)` for grade
/// step `g`. Points without rules keep their base position, rules addressing
/// the same point add up, and rules whose index fell off the outline are
/// skipped. Pieces without rules appear with their base outline. The base
/// pattern is never modified and the result depends only on the pieces, their
/// rules and the sizes.
#[derive(Debug)]
pub struct GradePattern {
    sizes: Vec<Size>,
}

impl GradePattern {
    /// Creates a new `GradePattern` operation.
    #[must_use]
    pub fn new(sizes: Vec<Size>) -> Self {
        Self { sizes }
    }

    /// Executes the grading.
    #[must_use]
    pub fn execute(&self, pattern: &Pattern) -> GradedPattern {
        let sizes = self
            .sizes
            .iter()
            .map(|size| GradedSize {
                name: size.name.clone(),
                grade: size.grade,
                outlines: pattern
                    .pieces()
                    .map(|piece| (piece.id, grade_piece(piece, size.grade)))
                    .collect(),
            })
            .collect();
        GradedPattern { sizes }
    }
}

/// Outline of a single piece at grade step `grade`.
#[must_use]
pub fn grade_piece(piece: &PatternPiece, grade: i32) -> Outline {
    let mut outline = piece.outline.clone();
    if grade == 0 {
        return outline;
    }
    for rule in piece.grading_rules.values() {
        if let Some(point) = outline.get_mut(rule.point_index) {
            *point = point.translated(rule.displacement(grade));
        } else {
            tracing::debug!(
                piece = %piece.id,
                point_index = rule.point_index,
                points = piece.outline.len(),
                "skipping grading rule with stale point index"
            );
        }
    }
    outline
}

pub mod dart;
pub mod grading;
pub mod grainline;
pub mod notch;

pub use dart::{Dart, DartId, DartKind, DartSpec, FoldDirection};
pub use grading::{GradingRule, GradingRuleId};
pub use grainline::{GrainKind, Grainline};
pub use notch::{Notch, NotchId, NotchKind};

use std::fmt;

use serde::{Deserialize, Serialize};
use slotmap::SlotMap;
use uuid::Uuid;

use crate::geometry::{Outline, OutlineExt, PatternPoint};
use crate::math::Point2;
use crate::operations::offset::offset_polygon;

/// Globally unique identifier of a pattern piece, generated at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PieceId(Uuid);

impl PieceId {
    /// Generates a fresh random identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Optional settings for [`PatternPiece::new`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PieceOptions {
    pub seam_allowance: Option<f64>,
}

impl PieceOptions {
    /// Sets the seam allowance stored on the piece.
    #[must_use]
    pub fn with_seam_allowance(mut self, allowance: f64) -> Self {
        self.seam_allowance = Some(allowance);
        self
    }
}

/// A single pattern piece: its cut outline plus drafting annotations.
///
/// Annotations are append-only. Notches, darts and grading rules live in
/// per-piece arenas whose ids are generated on insertion; with no removals
/// their iteration order is insertion order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatternPiece {
    pub id: PieceId,
    pub name: String,
    pub outline: Outline,
    pub seam_allowance: f64,
    pub notches: SlotMap<NotchId, Notch>,
    pub darts: SlotMap<DartId, Dart>,
    pub grainline: Option<Grainline>,
    pub grading_rules: SlotMap<GradingRuleId, GradingRule>,
}

impl PatternPiece {
    /// Creates a piece with a fresh id. The outline is copied, so the caller's
    /// points may change afterwards without affecting the piece.
    #[must_use]
    pub fn new(name: impl Into<String>, outline: &[PatternPoint], options: PieceOptions) -> Self {
        Self {
            id: PieceId::generate(),
            name: name.into(),
            outline: outline.to_vec(),
            seam_allowance: options.seam_allowance.unwrap_or(0.0),
            notches: SlotMap::with_key(),
            darts: SlotMap::with_key(),
            grainline: None,
            grading_rules: SlotMap::with_key(),
        }
    }

    /// Appends a notch at perimeter fraction `position`, clamped into `[0, 1]`.
    pub fn add_notch(&mut self, position: f64, kind: NotchKind) -> Notch {
        let clamped = notch::clamp_position(position);
        if clamped.to_bits() != position.to_bits() {
            tracing::debug!(piece = %self.id, position, clamped, "notch position clamped");
        }
        let piece_id = self.id;
        let id = self.notches.insert_with_key(|id| Notch {
            id,
            piece_id,
            position: clamped,
            kind,
        });
        self.notches[id].clone()
    }

    /// Appends a dart exactly as specified.
    pub fn add_dart(&mut self, spec: DartSpec) -> Dart {
        if !spec.is_well_formed() {
            tracing::debug!(
                piece = %self.id,
                width = spec.width,
                length = spec.length,
                "storing ill-formed dart"
            );
        }
        let id = self.darts.insert_with_key(|id| Dart { id, spec });
        self.darts[id].clone()
    }

    /// Replaces the piece's grainline.
    pub fn set_grainline(&mut self, grainline: Grainline) {
        self.grainline = Some(grainline);
    }

    /// Appends a grading rule for the outline point at `point_index`.
    pub fn add_grading_rule(
        &mut self,
        point_index: usize,
        x_grade: f64,
        y_grade: f64,
    ) -> GradingRule {
        if point_index >= self.outline.len() {
            tracing::debug!(
                piece = %self.id,
                point_index,
                points = self.outline.len(),
                "grading rule addresses a point outside the outline"
            );
        }
        let piece_id = self.id;
        let id = self.grading_rules.insert_with_key(|id| GradingRule {
            id,
            piece_id,
            point_index,
            x_grade,
            y_grade,
        });
        self.grading_rules[id].clone()
    }

    /// Outline expanded by `allowance`; the piece itself is not modified.
    #[must_use]
    pub fn offset_outline(&self, allowance: f64) -> Outline {
        offset_polygon(&self.outline, allowance)
    }

    /// Cutting line at the piece's own stored seam allowance.
    #[must_use]
    pub fn seam_outline(&self) -> Outline {
        self.offset_outline(self.seam_allowance)
    }

    /// Location of a notch on the current outline.
    #[must_use]
    pub fn notch_point(&self, id: NotchId) -> Option<Point2> {
        let notch = self.notches.get(id)?;
        self.outline.point_at_fraction(notch.position)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::TOLERANCE;

    fn rectangle() -> Vec<PatternPoint> {
        vec![
            PatternPoint::corner(0.0, 0.0),
            PatternPoint::corner(20.0, 0.0),
            PatternPoint::corner(20.0, 10.0),
            PatternPoint::corner(0.0, 10.0),
        ]
    }

    #[test]
    fn new_copies_outline_and_applies_options() {
        let mut points = rectangle();
        let piece = PatternPiece::new(
            "Yoke",
            &points,
            PieceOptions::default().with_seam_allowance(1.5),
        );
        points[0].x = 99.0;

        assert_eq!(piece.name, "Yoke");
        assert!(piece.outline[0].x.abs() < TOLERANCE);
        assert!((piece.seam_allowance - 1.5).abs() < TOLERANCE);
        assert!(piece.notches.is_empty() && piece.darts.is_empty());
        assert!(piece.grainline.is_none());
    }

    #[test]
    fn default_seam_allowance_is_zero() {
        let piece = PatternPiece::new("Cuff", &rectangle(), PieceOptions::default());
        assert!(piece.seam_allowance.abs() < TOLERANCE);
    }

    #[test]
    fn pieces_get_distinct_ids() {
        let a = PatternPiece::new("A", &rectangle(), PieceOptions::default());
        let b = PatternPiece::new("B", &rectangle(), PieceOptions::default());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn notch_is_clamped_and_located() {
        let mut piece = PatternPiece::new("Panel", &rectangle(), PieceOptions::default());
        let over = piece.add_notch(1.7, NotchKind::Double);
        assert!((over.position - 1.0).abs() < TOLERANCE);
        assert_eq!(over.piece_id, piece.id);

        // Half of the 60-unit perimeter is the far corner.
        let half = piece.add_notch(0.5, NotchKind::Single);
        let p = piece.notch_point(half.id).unwrap();
        assert!(
            (p.x - 20.0).abs() < TOLERANCE && (p.y - 10.0).abs() < TOLERANCE
        );
        assert_eq!(piece.notches.len(), 2);
    }

    #[test]
    fn annotations_keep_insertion_order() {
        let mut piece = PatternPiece::new("Panel", &rectangle(), PieceOptions::default());
        let first = piece.add_grading_rule(2, 1.0, 0.5);
        let second = piece.add_grading_rule(0, -1.0, 0.0);
        let ids: Vec<_> = piece.grading_rules.keys().collect();
        assert_eq!(ids, vec![first.id, second.id]);
    }

    #[test]
    fn seam_outline_does_not_mutate_piece() {
        let piece = PatternPiece::new(
            "Panel",
            &rectangle(),
            PieceOptions::default().with_seam_allowance(1.0),
        );
        let seam = piece.seam_outline();
        assert!(
            (seam[0].x + 1.0).abs() < 1e-9 && (seam[0].y + 1.0).abs() < 1e-9
        );
        assert!(piece.outline[0].x.abs() < TOLERANCE);
    }
}

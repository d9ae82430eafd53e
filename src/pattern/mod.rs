mod engine;
mod units;

pub use engine::PatternEngine;
pub use units::Units;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::PatternError;
use crate::geometry::PatternPoint;
use crate::operations::grading::{size_run, GradePattern, GradedPattern, Size};
use crate::piece::{
    Dart, DartSpec, GradingRule, GrainKind, Grainline, Notch, NotchKind, PatternPiece, PieceId,
};

/// Base size used when none is given.
pub const DEFAULT_BASE_SIZE: &str = "M";

/// Pattern-level settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternMetadata {
    pub units: Units,
}

/// Root aggregate owning every piece of one drafting session.
///
/// Pieces are kept in an arena keyed by [`PieceId`]; annotation mutators look
/// the piece up by id and modify the owned value in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pattern {
    pub name: String,
    pub base_size: String,
    pub metadata: PatternMetadata,
    pieces: BTreeMap<PieceId, PatternPiece>,
}

impl Pattern {
    /// Creates an empty pattern.
    #[must_use]
    pub fn new(name: impl Into<String>, base_size: impl Into<String>, units: Units) -> Self {
        Self {
            name: name.into(),
            base_size: base_size.into(),
            metadata: PatternMetadata { units },
            pieces: BTreeMap::new(),
        }
    }

    /// Creates an empty pattern with base size `"M"` in centimeters.
    #[must_use]
    pub fn with_defaults(name: impl Into<String>) -> Self {
        Self::new(name, DEFAULT_BASE_SIZE, Units::default())
    }

    /// Unit system of the pattern.
    #[must_use]
    pub fn units(&self) -> Units {
        self.metadata.units
    }

    // --- Piece operations ---

    /// Inserts a piece, replacing any stored piece with the same id.
    pub fn add_piece(&mut self, piece: PatternPiece) {
        tracing::debug!(
            pattern = %self.name,
            piece = %piece.id,
            name = %piece.name,
            "adding piece"
        );
        self.pieces.insert(piece.id, piece);
    }

    /// Replaces the stored piece keyed by `piece.id` wholesale.
    ///
    /// Unknown ids are inserted, matching [`Pattern::add_piece`].
    pub fn update_piece(&mut self, piece: PatternPiece) {
        if self.pieces.insert(piece.id, piece).is_none() {
            tracing::debug!(pattern = %self.name, "update_piece inserted a new piece");
        }
    }

    /// Returns a reference to the piece, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the piece is not part of this pattern.
    pub fn piece(&self, id: PieceId) -> Result<&PatternPiece, PatternError> {
        self.pieces.get(&id).ok_or(PatternError::PieceNotFound(id))
    }

    /// Returns a mutable reference to the piece, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the piece is not part of this pattern.
    pub fn piece_mut(&mut self, id: PieceId) -> Result<&mut PatternPiece, PatternError> {
        self.pieces
            .get_mut(&id)
            .ok_or(PatternError::PieceNotFound(id))
    }

    /// Iterates over all pieces in id order.
    pub fn pieces(&self) -> impl Iterator<Item = &PatternPiece> {
        self.pieces.values()
    }

    /// Number of pieces in the pattern.
    #[must_use]
    pub fn piece_count(&self) -> usize {
        self.pieces.len()
    }

    // --- Annotation operations ---

    /// Adds a notch to a piece; `position` is clamped into `[0, 1]`.
    ///
    /// # Errors
    ///
    /// Returns an error if the piece is not part of this pattern.
    pub fn add_notch(
        &mut self,
        piece: PieceId,
        position: f64,
        kind: NotchKind,
    ) -> Result<Notch, PatternError> {
        Ok(self.piece_mut(piece)?.add_notch(position, kind))
    }

    /// Adds a caller-specified dart to a piece.
    ///
    /// # Errors
    ///
    /// Returns an error if the piece is not part of this pattern.
    pub fn add_dart(&mut self, piece: PieceId, spec: DartSpec) -> Result<Dart, PatternError> {
        Ok(self.piece_mut(piece)?.add_dart(spec))
    }

    /// Sets or overwrites a piece's grainline.
    ///
    /// # Errors
    ///
    /// Returns an error if the piece is not part of this pattern.
    pub fn set_grainline(
        &mut self,
        piece: PieceId,
        start: PatternPoint,
        end: PatternPoint,
        kind: GrainKind,
    ) -> Result<(), PatternError> {
        self.piece_mut(piece)?
            .set_grainline(Grainline::new(start, end, kind));
        Ok(())
    }

    /// Adds a grading rule to a piece.
    ///
    /// # Errors
    ///
    /// Returns an error if the piece is not part of this pattern.
    pub fn add_grading_rule(
        &mut self,
        piece: PieceId,
        point_index: usize,
        x_grade: f64,
        y_grade: f64,
    ) -> Result<GradingRule, PatternError> {
        Ok(self
            .piece_mut(piece)?
            .add_grading_rule(point_index, x_grade, y_grade))
    }

    // --- Grading ---

    /// Builds a size run graded around this pattern's base size.
    #[must_use]
    pub fn size_run(&self, names: &[&str]) -> Vec<Size> {
        size_run(names, &self.base_size)
    }

    /// Grades every piece into the requested sizes.
    #[must_use]
    pub fn grade(&self, sizes: &[Size]) -> GradedPattern {
        GradePattern::new(sizes.to_vec()).execute(self)
    }
}

use crate::error::Result;
use crate::geometry::Outline;
use crate::pattern::Pattern;
use crate::piece::PieceId;

/// Previews the cutting line of a stored piece at a given seam allowance.
///
/// The stored piece is left untouched, so callers can try several allowances
/// before committing one to [`crate::piece::PatternPiece::seam_allowance`].
#[derive(Debug)]
pub struct SeamAllowance {
    piece: PieceId,
    allowance: f64,
}

impl SeamAllowance {
    /// Creates a new `SeamAllowance` query.
    #[must_use]
    pub fn new(piece: PieceId, allowance: f64) -> Self {
        Self { piece, allowance }
    }

    /// Executes the query, returning the offset outline.
    ///
    /// # Errors
    ///
    /// Returns an error if the piece is not part of the pattern.
    pub fn execute(&self, pattern: &Pattern) -> Result<Outline> {
        let piece = pattern.piece(self.piece)?;
        Ok(piece.offset_outline(self.allowance))
    }
}

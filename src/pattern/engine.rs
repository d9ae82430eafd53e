use crate::error::PatternError;
use crate::geometry::{Outline, PatternPoint};
use crate::operations::drafting::{BodiceBack, BodiceFront, SkirtFront, Sleeve};
use crate::operations::grading::{GradedPattern, Size};
use crate::piece::{
    Dart, DartSpec, GradingRule, GrainKind, Notch, NotchKind, PatternPiece, PieceId, PieceOptions,
};

use super::{Pattern, Units, DEFAULT_BASE_SIZE};

/// Drafting session holding at most one current [`Pattern`].
///
/// This is the authoring-tool surface: lookups and annotations that miss (no
/// current pattern, unknown piece id) return `None` or do nothing instead of
/// failing, and the miss is logged at `debug` level. Use the [`Pattern`]
/// methods directly to observe the typed errors.
#[derive(Debug, Default)]
pub struct PatternEngine {
    current: Option<Pattern>,
}

impl PatternEngine {
    /// Creates an engine with no current pattern.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Pattern lifecycle ---

    /// Starts a new pattern, replacing the current one.
    pub fn create_pattern(
        &mut self,
        name: impl Into<String>,
        base_size: impl Into<String>,
        units: Units,
    ) -> &Pattern {
        let pattern = Pattern::new(name, base_size, units);
        if let Some(previous) = &self.current {
            tracing::debug!(
                previous = %previous.name,
                next = %pattern.name,
                "replacing current pattern"
            );
        }
        self.current.insert(pattern)
    }

    /// Starts a new pattern with base size `"M"` in centimeters.
    pub fn create_default_pattern(&mut self, name: impl Into<String>) -> &Pattern {
        self.create_pattern(name, DEFAULT_BASE_SIZE, Units::default())
    }

    /// The current pattern, if any.
    #[must_use]
    pub fn pattern(&self) -> Option<&Pattern> {
        self.current.as_ref()
    }

    /// Mutable access to the current pattern, if any.
    pub fn pattern_mut(&mut self) -> Option<&mut Pattern> {
        self.current.as_mut()
    }

    /// Ends the session, handing the current pattern back to the caller.
    pub fn close_pattern(&mut self) -> Option<Pattern> {
        self.current.take()
    }

    // --- Pieces ---

    /// Creates a detached piece with a fresh id.
    #[allow(clippy::unused_self)]
    #[must_use]
    pub fn create_piece(
        &self,
        name: impl Into<String>,
        outline: &[PatternPoint],
        options: PieceOptions,
    ) -> PatternPiece {
        PatternPiece::new(name, outline, options)
    }

    /// Adds a piece to the current pattern, replacing one with the same id.
    pub fn add_piece(&mut self, piece: PatternPiece) {
        self.absorb("add_piece", |pattern| {
            pattern.add_piece(piece);
            Ok(())
        });
    }

    /// Looks up a piece of the current pattern.
    #[must_use]
    pub fn piece(&self, id: PieceId) -> Option<&PatternPiece> {
        let pattern = self.current.as_ref()?;
        match pattern.piece(id) {
            Ok(piece) => Some(piece),
            Err(err) => {
                tracing::debug!(%err, "piece lookup missed");
                None
            }
        }
    }

    /// Replaces a stored piece wholesale, keyed by `piece.id`.
    pub fn update_piece(&mut self, piece: PatternPiece) {
        self.absorb("update_piece", |pattern| {
            pattern.update_piece(piece);
            Ok(())
        });
    }

    // --- Drafting ---

    /// Drafts a front bodice block. The piece is not added to the pattern.
    #[allow(clippy::unused_self)]
    #[must_use]
    pub fn create_basic_bodice_front(
        &self,
        bust: f64,
        waist: f64,
        hip: f64,
        shoulder: f64,
        center_front_length: f64,
    ) -> PatternPiece {
        BodiceFront::new(bust, waist, hip, shoulder, center_front_length).execute()
    }

    /// Drafts a back bodice block. The piece is not added to the pattern.
    #[allow(clippy::unused_self)]
    #[must_use]
    pub fn create_basic_bodice_back(
        &self,
        bust: f64,
        waist: f64,
        shoulder: f64,
        center_back_length: f64,
    ) -> PatternPiece {
        BodiceBack::new(bust, waist, shoulder, center_back_length).execute()
    }

    /// Drafts a sleeve block. The piece is not added to the pattern.
    #[allow(clippy::unused_self)]
    #[must_use]
    pub fn create_basic_sleeve(&self, armhole: f64, length: f64, wrist: f64) -> PatternPiece {
        Sleeve::new(armhole, length, wrist).execute()
    }

    /// Drafts a front skirt block. The piece is not added to the pattern.
    #[allow(clippy::unused_self)]
    #[must_use]
    pub fn create_basic_skirt_front(
        &self,
        waist: f64,
        hip: f64,
        length: f64,
        waist_to_hip: f64,
    ) -> PatternPiece {
        SkirtFront::new(waist, hip, length, waist_to_hip).execute()
    }

    // --- Annotations ---

    /// Previews a piece's outline at the given seam allowance.
    #[allow(clippy::unused_self)]
    #[must_use]
    pub fn add_seam_allowance(&self, piece: &PatternPiece, allowance: f64) -> Outline {
        piece.offset_outline(allowance)
    }

    /// Adds a notch; `position` is clamped into `[0, 1]`.
    pub fn add_notch(&mut self, piece: PieceId, position: f64, kind: NotchKind) -> Option<Notch> {
        self.absorb("add_notch", |pattern| {
            pattern.add_notch(piece, position, kind)
        })
    }

    /// Adds a caller-specified dart.
    pub fn add_dart(&mut self, piece: PieceId, spec: DartSpec) -> Option<Dart> {
        self.absorb("add_dart", |pattern| pattern.add_dart(piece, spec))
    }

    /// Sets or overwrites a piece's grainline.
    pub fn set_grainline(
        &mut self,
        piece: PieceId,
        start: PatternPoint,
        end: PatternPoint,
        kind: GrainKind,
    ) {
        self.absorb("set_grainline", |pattern| {
            pattern.set_grainline(piece, start, end, kind)
        });
    }

    /// Adds a grading rule for the outline point at `point_index`.
    pub fn add_grading_rule(
        &mut self,
        piece: PieceId,
        point_index: usize,
        x_grade: f64,
        y_grade: f64,
    ) -> Option<GradingRule> {
        self.absorb("add_grading_rule", |pattern| {
            pattern.add_grading_rule(piece, point_index, x_grade, y_grade)
        })
    }

    // --- Grading ---

    /// Grades the current pattern; empty without a current pattern.
    #[must_use]
    pub fn grade_pattern(&self, sizes: &[Size]) -> GradedPattern {
        if let Some(pattern) = &self.current {
            pattern.grade(sizes)
        } else {
            tracing::debug!(error = %PatternError::NoActivePattern, "grade_pattern");
            GradedPattern::default()
        }
    }

    /// Runs `f` on the current pattern, turning failures into `None`.
    fn absorb<T>(
        &mut self,
        operation: &'static str,
        f: impl FnOnce(&mut Pattern) -> Result<T, PatternError>,
    ) -> Option<T> {
        let outcome = match self.current.as_mut() {
            Some(pattern) => f(pattern),
            None => Err(PatternError::NoActivePattern),
        };
        outcome
            .map_err(|err| tracing::debug!(operation, %err, "ignored"))
            .ok()
    }
}

//! Flat-pattern drafting blocks.
//!
//! Each block turns body measurements into a [`PatternPiece`] with a fixed
//! name. Blocks are drafted as half patterns: the center line sits on `x = 0`,
//! the waist (or hem, for sleeves) on `y = 0`, `y` grows upward and outlines
//! wind counter-clockwise. Measurements are taken as given, in the pattern's
//! unit system; zero or negative values produce degenerate outlines rather
//! than errors.

mod bodice_back;
mod bodice_front;
mod skirt_front;
mod sleeve;

pub use bodice_back::BodiceBack;
pub use bodice_front::BodiceFront;
pub use skirt_front::SkirtFront;
pub use sleeve::Sleeve;

use crate::geometry::PatternPoint;
use crate::piece::{
    DartKind, DartSpec, FoldDirection, GrainKind, Grainline, PatternPiece, PieceOptions,
};

pub const BODICE_FRONT: &str = "Bodice Front";
pub const BODICE_BACK: &str = "Bodice Back";
pub const SLEEVE: &str = "Sleeve";
pub const SKIRT_FRONT: &str = "Skirt Front";

/// Creates the piece and attaches the block's darts and grainline.
fn assemble(
    name: &str,
    outline: &[PatternPoint],
    darts: &[DartSpec],
    grainline: Grainline,
) -> PatternPiece {
    let mut piece = PatternPiece::new(name, outline, PieceOptions::default());
    for dart in darts {
        piece.add_dart(*dart);
    }
    piece.set_grainline(grainline);
    piece
}

/// A straight dart read back from its three outline points, pressed toward
/// the center line.
fn waist_dart(left_leg: PatternPoint, tip: PatternPoint, right_leg: PatternPoint) -> DartSpec {
    DartSpec::from_legs(
        tip,
        left_leg,
        right_leg,
        FoldDirection::Left,
        DartKind::Straight,
    )
}

/// A straight-grain line parallel to the center line.
fn vertical_grainline(x: f64, from_y: f64, to_y: f64) -> Grainline {
    Grainline::new(
        PatternPoint::corner(x, from_y),
        PatternPoint::corner(x, to_y),
        GrainKind::Straight,
    )
}

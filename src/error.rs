use thiserror::Error;

use crate::piece::PieceId;

/// Top-level error type for the Tailor drafting engine.
#[derive(Debug, Error)]
pub enum TailorError {
    #[error(transparent)]
    Pattern(#[from] PatternError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Errors raised by the pattern aggregate.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PatternError {
    #[error("piece not found: {0}")]
    PieceNotFound(PieceId),

    #[error("no active pattern")]
    NoActivePattern,
}

/// Errors raised when parsing tag strings into model enums.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("unknown unit system: {0:?} (expected \"cm\" or \"inches\")")]
    UnknownUnits(String),

    #[error("unknown point kind: {0:?}")]
    UnknownPointKind(String),

    #[error("unknown notch kind: {0:?}")]
    UnknownNotchKind(String),

    #[error("unknown dart kind: {0:?}")]
    UnknownDartKind(String),

    #[error("unknown fold direction: {0:?}")]
    UnknownFoldDirection(String),

    #[error("unknown grain kind: {0:?}")]
    UnknownGrainKind(String),
}

/// Convenience type alias for results using [`TailorError`].
pub type Result<T> = std::result::Result<T, TailorError>;

use thiserror::Error;

use crate::geometry::Degeneracy;

/// Top-level error type for the numgeom kernel.
#[derive(Debug, Error)]
pub enum NumgeomError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Errors related to geometric computations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GeometryError {
    #[error("degenerate geometry: {0}")]
    Degenerate(Degeneracy),
}

/// Errors produced while reading the text encoding of a primitive.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("missing separator `{0}`")]
    MissingSeparator(&'static str),

    #[error("invalid number `{0}`")]
    InvalidNumber(String),

    #[error("expected {expected} components, found {found}")]
    ComponentCount { expected: usize, found: usize },
}

/// Convenience type alias for results using [`NumgeomError`].
pub type Result<T> = std::result::Result<T, NumgeomError>;

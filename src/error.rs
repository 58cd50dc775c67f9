use thiserror::Error;

/// Top-level error type for the projection kernel.
#[derive(Debug, Error)]
pub enum ShadowcastError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Input(#[from] InputError),
}

/// Errors raised by the projection math.
#[derive(Debug, Error, PartialEq)]
pub enum GeometryError {
    /// A direction vector had zero length and could not be normalized.
    #[error("degenerate direction: {0}")]
    DegenerateDirection(String),

    /// A projection ray runs parallel to the ground plane.
    #[error("direction {direction:?} is parallel to the projection plane")]
    ParallelDirection { direction: [f64; 3] },
}

/// Errors raised at the text boundary, before any geometry is touched.
#[derive(Debug, Error, PartialEq)]
pub enum InputError {
    #[error("invalid input for {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },

    #[error("unknown projection kind: {0:?}")]
    UnknownProjectionKind(String),
}

/// Convenience type alias for results using [`ShadowcastError`].
pub type Result<T> = std::result::Result<T, ShadowcastError>;

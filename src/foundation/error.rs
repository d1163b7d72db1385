/// Convenience result type used across the crate.
pub type TexturedResult<T> = Result<T, TexturedError>;

/// Top-level error taxonomy used by rendering APIs.
#[derive(thiserror::Error, Debug)]
pub enum TexturedError {
    /// Invalid user-provided style, plot or surface data.
    #[error("validation error: {0}")]
    Validation(String),

    /// The polyline cannot be interpolated.
    #[error("interpolation error: {0}")]
    Interpolation(#[from] InterpolationError),

    /// Errors raised by a drawing surface or raster backend.
    #[error("render error: {0}")]
    Render(String),

    /// Errors when serializing or deserializing scene data.
    #[error("serialization error: {0}")]
    Serde(String),

    /// A scene line failed to build or draw; `line` is its zero-based index.
    #[error("line {line}: {source}")]
    Line {
        line: usize,
        #[source]
        source: Box<TexturedError>,
    },

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Reasons a set of knots does not define a piecewise-linear interpolant.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum InterpolationError {
    /// Fewer than two knots were supplied.
    #[error("insufficient points: need at least 2, got {0}")]
    InsufficientPoints(usize),

    /// The x and y sequences differ in length.
    #[error("coordinate length mismatch: {xs} x-values vs {ys} y-values")]
    LengthMismatch {
        /// Number of x-values.
        xs: usize,
        /// Number of y-values.
        ys: usize,
    },

    /// Every knot shares the same x, so the domain has zero width.
    #[error("interpolation undefined: all x-values equal {0}")]
    DegenerateDomain(f64),

    /// Knot x-values must be strictly increasing.
    #[error("invalid points: x-values must be strictly increasing (x = {prev} then {next} at index {index})")]
    NonIncreasingX {
        /// Index of the first offending knot.
        index: usize,
        /// Value at `index`.
        prev: f64,
        /// Value at `index + 1`.
        next: f64,
    },

    /// A knot coordinate is NaN or infinite.
    #[error("invalid points: non-finite coordinate at index {0}")]
    NonFinite(usize),

    /// Evaluation was requested outside `[x_min, x_max]`.
    #[error("x = {x} lies outside the interpolation domain [{min}, {max}]")]
    OutOfDomain {
        /// Requested abscissa.
        x: f64,
        /// Domain start.
        min: f64,
        /// Domain end.
        max: f64,
    },
}

impl TexturedError {
    /// Build a [`TexturedError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`TexturedError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`TexturedError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Attach the index of the scene line that produced this error.
    pub fn at_line(self, line: usize) -> Self {
        Self::Line {
            line,
            source: Box::new(self),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;

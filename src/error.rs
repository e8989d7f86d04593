use thiserror::Error;

/// Top-level error type for shape2d.
///
/// Floating-point degeneracies (division by zero, unit vector of a zero
/// vector) are not errors: they produce infinite or NaN components.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Shape2dError {
    /// A value was built from arguments of the wrong shape, e.g. a vector
    /// from a sequence that does not hold exactly two numbers.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Indexed access outside the fixed-size component view.
    #[error("index {index} is out of range for {len} components")]
    IndexOutOfRange { index: isize, len: usize },
}

/// Convenience type alias for results using [`Shape2dError`].
pub type Result<T> = std::result::Result<T, Shape2dError>;

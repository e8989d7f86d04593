pub mod format;
pub mod scalar;
pub mod tolerance;

pub use format::{format_fixed, format_float};
pub use scalar::{floor_div, normalize_index};
pub use tolerance::{approx_equal, approx_equal_with};

/// Default relative tolerance for approximate comparisons.
pub const REL_TOL: f64 = 1e-9;

/// Default absolute tolerance for approximate comparisons.
pub const ABS_TOL: f64 = 0.0;

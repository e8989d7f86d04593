pub mod error;
pub mod geometry;
pub mod math;

pub use error::{Result, Shape2dError};
pub use geometry::{Matrix, Vector};

pub mod greeting;
pub mod geometry;

pub use greeting::say_hello;
pub use geometry::{area, perimeter, circle_area, Rectangle, Circle};

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

pub type CoreResult<T> = Result<T, CoreError>;

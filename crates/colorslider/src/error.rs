//! Error types for the slider crate.

use colorslider_render::RenderError;
use thiserror::Error;

/// Errors raised by rejected configuration changes.
///
/// Whenever a setter returns one of these, the control's prior state is left
/// untouched.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SliderError {
    /// The change would leave `minimum >= maximum`.
    #[error("minimum {minimum} must be lower than maximum {maximum}")]
    RangeInverted { minimum: i32, maximum: i32 },

    /// A value was assigned outside `[minimum, maximum]`.
    #[error("value {value} is outside the range [{minimum}, {maximum}]")]
    ValueOutOfRange { value: i32, minimum: i32, maximum: i32 },

    /// The thumb size must lie strictly between zero and the primary axis length.
    #[error("thumb size {size} must be greater than 0 and lower than {axis_length}")]
    ThumbSizeOutOfRange { size: i32, axis_length: i32 },

    /// The wheel partition count must be positive.
    #[error("mouse wheel bar partitions must be greater than 0, got {0}")]
    InvalidWheelPartitions(i32),

    /// A drawing resource was unusable, such as an empty thumb outline.
    #[error("render error: {0}")]
    Render(#[from] RenderError),
}

/// Result type for slider operations.
pub type SliderResult<T> = Result<T, SliderError>;

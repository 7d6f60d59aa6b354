//! Fills and pens.

use crate::types::{Color, Point, Rect};

/// How a shape's interior is colored.
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Solid(Color),
    LinearGradient(LinearGradient),
}

impl Paint {
    #[inline]
    pub const fn solid(color: Color) -> Self {
        Self::Solid(color)
    }

    /// Two stops, `top` at the upper edge of `rect` and `bottom` at its lower
    /// edge. The thumb is filled this way.
    pub fn vertical_gradient(rect: Rect, top: Color, bottom: Color) -> Self {
        Self::LinearGradient(LinearGradient {
            start: Point::new(rect.left(), rect.top()),
            end: Point::new(rect.left(), rect.bottom()),
            stops: vec![GradientStop::new(0.0, top), GradientStop::new(1.0, bottom)],
        })
    }

    /// The color of a solid paint, or `None` for gradients.
    pub fn as_solid(&self) -> Option<Color> {
        match self {
            Paint::Solid(color) => Some(*color),
            Paint::LinearGradient(_) => None,
        }
    }
}

impl From<Color> for Paint {
    fn from(color: Color) -> Self {
        Self::Solid(color)
    }
}

impl Default for Paint {
    fn default() -> Self {
        Self::Solid(Color::BLACK)
    }
}

/// Color interpolated between `start` and `end`. Points beyond either end
/// take the nearest stop's color.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    pub start: Point,
    pub end: Point,
    /// Ordered by `offset`.
    pub stops: Vec<GradientStop>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    /// 0.0 at `start`, 1.0 at `end`.
    pub offset: f32,
    pub color: Color,
}

impl GradientStop {
    #[inline]
    pub const fn new(offset: f32, color: Color) -> Self {
        Self { offset, color }
    }
}

/// Outline style for lines and path strokes.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    pub paint: Paint,
    /// In pixels.
    pub width: f32,
    /// `None` draws a continuous line.
    pub dash_pattern: Option<DashPattern>,
}

impl Default for Stroke {
    fn default() -> Self {
        Self::pen(Color::BLACK)
    }
}

impl Stroke {
    #[inline]
    pub fn new(paint: impl Into<Paint>, width: f32) -> Self {
        Self {
            paint: paint.into(),
            width,
            dash_pattern: None,
        }
    }

    /// A continuous one pixel pen. Every line the slider draws uses one.
    #[inline]
    pub fn pen(color: Color) -> Self {
        Self::new(color, 1.0)
    }

    #[inline]
    pub fn with_dash(mut self, pattern: DashPattern) -> Self {
        self.dash_pattern = Some(pattern);
        self
    }

    #[inline]
    pub fn is_dashed(&self) -> bool {
        self.dash_pattern.is_some()
    }
}

/// Alternating on/off run lengths, starting `offset` pixels into the
/// pattern.
#[derive(Debug, Clone, PartialEq)]
pub struct DashPattern {
    pub pattern: Vec<f32>,
    pub offset: f32,
}

impl DashPattern {
    #[inline]
    pub fn new(pattern: Vec<f32>, offset: f32) -> Self {
        Self { pattern, offset }
    }

    /// One pixel on, one pixel off. Used for the focus outline.
    #[inline]
    pub fn dot() -> Self {
        Self::new(vec![1.0, 1.0], 0.0)
    }
}

/// Which regions of a self-intersecting path count as inside.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FillRule {
    #[default]
    NonZero,
    EvenOdd,
}

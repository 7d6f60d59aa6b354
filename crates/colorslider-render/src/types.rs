//! Geometry and color value types.
//!
//! Geometry is `f32` in control-local pixels, with `y` growing downward.
//! Colors are 8-bit RGBA with straight alpha, which is how palettes are
//! written down.

/// A position in local pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn offset(self, dx: f32, dy: f32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Neither coordinate is NaN or infinite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x, y)
    }
}

/// Integer pixel coordinates, as produced by layout math.
impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x as f32, y as f32)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Self = Self::new(0.0, 0.0);

    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Width and height swapped, as when a slider changes orientation.
    #[inline]
    pub fn transposed(self) -> Self {
        Self::new(self.height, self.width)
    }
}

impl From<(f32, f32)> for Size {
    fn from((width, height): (f32, f32)) -> Self {
        Self::new(width, height)
    }
}

/// An axis-aligned rectangle: top-left `origin` plus `size`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub const ZERO: Self = Self {
        origin: Point::ZERO,
        size: Size::ZERO,
    };

    #[inline]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    #[inline]
    pub fn from_pixels(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self::new(x as f32, y as f32, width as f32, height as f32)
    }

    /// The rectangle spanning `min` to `max`.
    #[inline]
    pub fn from_corners(min: Point, max: Point) -> Self {
        Self::new(min.x, min.y, max.x - min.x, max.y - min.y)
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.origin.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.origin.y
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.origin.x + self.size.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.origin.y + self.size.height
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.size.width
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.size.height
    }

    #[inline]
    pub fn center(&self) -> Point {
        Point::new(
            self.origin.x + self.size.width / 2.0,
            self.origin.y + self.size.height / 2.0,
        )
    }

    /// Hit test with the left and top edges inclusive, right and bottom
    /// exclusive.
    #[inline]
    pub fn contains(&self, point: Point) -> bool {
        (self.left()..self.right()).contains(&point.x)
            && (self.top()..self.bottom()).contains(&point.y)
    }

    /// Hit test excluding every edge. Used for thumb hover.
    #[inline]
    pub fn contains_strict(&self, point: Point) -> bool {
        point.x > self.left()
            && point.x < self.right()
            && point.y > self.top()
            && point.y < self.bottom()
    }
}

/// A rectangle whose four corners are quarter ellipses of equal size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RoundedRect {
    pub rect: Rect,
    pub radii: CornerRadii,
}

impl RoundedRect {
    #[inline]
    pub fn new(rect: Rect, radii: CornerRadii) -> Self {
        Self { rect, radii }
    }

    /// `corner` is the full size of the corner ellipse, so each radius is
    /// half of it.
    #[inline]
    pub fn from_corner_size(rect: Rect, corner: Size) -> Self {
        Self::new(
            rect,
            CornerRadii::elliptical(corner.width / 2.0, corner.height / 2.0),
        )
    }
}

/// Horizontal and vertical corner radius, shared by every corner.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CornerRadii {
    pub x: f32,
    pub y: f32,
}

impl CornerRadii {
    pub const ZERO: Self = Self::uniform(0.0);

    #[inline]
    pub const fn uniform(radius: f32) -> Self {
        Self::elliptical(radius, radius)
    }

    #[inline]
    pub const fn elliptical(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// An 8-bit RGBA color with straight alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const TRANSPARENT: Self = Self::from_rgba8(0, 0, 0, 0);
    pub const BLACK: Self = Self::from_rgb8(0, 0, 0);
    pub const WHITE: Self = Self::from_rgb8(255, 255, 255);
    pub const GRAY: Self = Self::from_rgb8(128, 128, 128);
    pub const RED: Self = Self::from_rgb8(255, 0, 0);
    pub const GREEN: Self = Self::from_rgb8(0, 128, 0);
    pub const BLUE: Self = Self::from_rgb8(0, 0, 255);
    /// Transparency key for thumb images.
    pub const MAGENTA: Self = Self::from_rgb8(255, 0, 255);

    #[inline]
    pub const fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Fully opaque.
    #[inline]
    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba8(r, g, b, 255)
    }

    #[inline]
    pub const fn with_alpha(self, alpha: u8) -> Self {
        Self { a: alpha, ..self }
    }

    #[inline]
    pub const fn to_rgba8(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl From<[u8; 4]> for Color {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self::from_rgba8(r, g, b, a)
    }
}

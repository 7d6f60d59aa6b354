//! Mapping between slider values and pixel geometry.
//!
//! Everything here is a pure function of its arguments. Offsets are integer
//! pixels measured from the start of the primary axis: left for horizontal
//! sliders, top for vertical ones. Vertical sliders are inverted so the
//! maximum sits at the top.

use colorslider_render::Rect;

use crate::error::{SliderError, SliderResult};

/// Direction of the slider's primary axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum Orientation {
    /// Values grow left to right.
    #[default]
    Horizontal,
    /// Values grow bottom to top.
    Vertical,
}

impl Orientation {
    /// Pick the component of `(width, height)` that runs along this axis.
    #[inline]
    pub fn primary<T>(self, width: T, height: T) -> T {
        match self {
            Orientation::Horizontal => width,
            Orientation::Vertical => height,
        }
    }

    /// The other orientation.
    #[inline]
    pub fn flipped(self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }
}

/// A non-empty integer range with `minimum < maximum`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ValueRange {
    minimum: i32,
    maximum: i32,
}

impl ValueRange {
    /// Create a range, rejecting `minimum >= maximum`.
    pub fn new(minimum: i32, maximum: i32) -> SliderResult<Self> {
        if minimum < maximum {
            Ok(Self { minimum, maximum })
        } else {
            Err(SliderError::RangeInverted { minimum, maximum })
        }
    }

    /// Lower bound, inclusive.
    #[inline]
    pub fn minimum(&self) -> i32 {
        self.minimum
    }

    /// Upper bound, inclusive.
    #[inline]
    pub fn maximum(&self) -> i32 {
        self.maximum
    }

    /// `maximum - minimum`, always positive.
    #[inline]
    pub fn span(&self) -> i64 {
        self.maximum as i64 - self.minimum as i64
    }

    /// Check whether `value` lies within the range.
    #[inline]
    pub fn contains(&self, value: i32) -> bool {
        (self.minimum..=self.maximum).contains(&value)
    }

    /// Clamp `value` into the range.
    #[inline]
    pub fn clamp(&self, value: i64) -> i32 {
        value.clamp(self.minimum as i64, self.maximum as i64) as i32
    }
}

impl Default for ValueRange {
    fn default() -> Self {
        Self {
            minimum: 0,
            maximum: 100,
        }
    }
}

/// Which end of the range a pointer position was clamped to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    /// Clamped to the minimum.
    First,
    /// Clamped to the maximum.
    Last,
}

/// The value under a pointer position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MappedValue {
    /// The value, already clamped to the range.
    pub value: i32,
    /// Set when the raw mapping landed on or beyond a range end.
    pub boundary: Option<Boundary>,
}

/// Offset of the thumb's leading edge for `value`.
///
/// The thumb travels over `axis_length - thumb_extent` pixels. Horizontal
/// offsets grow with the value, vertical offsets shrink.
pub fn value_to_offset(
    value: i32,
    range: ValueRange,
    orientation: Orientation,
    axis_length: i32,
    thumb_extent: i32,
) -> i32 {
    let travel = axis_length as i64 - thumb_extent as i64;
    let distance = match orientation {
        Orientation::Horizontal => value as i64 - range.minimum as i64,
        Orientation::Vertical => range.maximum as i64 - value as i64,
    };
    (distance * travel / range.span()) as i32
}

/// Value under a pointer at `position` along the primary axis.
///
/// The pointer is centered on the thumb by subtracting half of
/// `thumb_extent` first. Results on or past either end are clamped and
/// tagged with the [`Boundary`] they hit.
pub fn offset_to_value(
    position: f32,
    range: ValueRange,
    orientation: Orientation,
    axis_length: i32,
    thumb_extent: i32,
) -> MappedValue {
    let margin = thumb_extent >> 1;
    let p = position - margin as f32;
    let usable = (axis_length - 2 * margin).max(1);
    let coef = range.span() as f32 / usable as f32;

    // Pointer coordinates are unbounded, so keep the step count within
    // [0, span] before adding it to an end of the range.
    let steps = ((p * coef) as i64).clamp(0, range.span());
    let raw = match orientation {
        Orientation::Horizontal => range.minimum as i64 + steps,
        Orientation::Vertical => range.maximum as i64 - steps,
    };

    if raw <= range.minimum as i64 {
        MappedValue {
            value: range.minimum,
            boundary: Some(Boundary::First),
        }
    } else if raw >= range.maximum as i64 {
        MappedValue {
            value: range.maximum,
            boundary: Some(Boundary::Last),
        }
    } else {
        MappedValue {
            value: raw as i32,
            boundary: None,
        }
    }
}

// =========================================================================
// Frame layout
// =========================================================================

/// Inputs for [`SliderLayout::compute`].
#[derive(Debug, Clone, Copy)]
pub struct LayoutInput {
    pub orientation: Orientation,
    pub range: ValueRange,
    pub value: i32,
    /// Client area width in whole pixels.
    pub width: i32,
    /// Client area height in whole pixels.
    pub height: i32,
    pub thumb_size: i32,
    /// Pixel size of the thumb image, when one replaces the drawn thumb.
    pub image_size: Option<(i32, i32)>,
}

/// The rectangles one frame is drawn from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderLayout {
    /// Thumb bounds.
    pub thumb: Rect,
    /// The bar, inset from the client area by a third on the cross axis.
    pub bar: Rect,
    /// Length of the elapsed segment, measured from the minimum end of the bar.
    pub elapsed: i32,
}

impl SliderLayout {
    /// Derive the frame layout from the current state.
    pub fn compute(input: &LayoutInput) -> Self {
        let LayoutInput {
            orientation,
            range,
            value,
            width,
            height,
            thumb_size,
            image_size,
        } = *input;

        let axis_length = orientation.primary(width, height);
        let extent = match image_size {
            Some((w, h)) => orientation.primary(w, h),
            None => thumb_size,
        };
        let track = value_to_offset(value, range, orientation, axis_length, extent);

        let (tx, ty, tw, th) = match (orientation, image_size) {
            (Orientation::Horizontal, Some((iw, ih))) => (track, height / 2 - ih / 2, iw, ih),
            (Orientation::Horizontal, None) => (track, 1, thumb_size - 1, height - 3),
            (Orientation::Vertical, Some((iw, ih))) => (width / 2 - iw / 2, track, iw, ih),
            (Orientation::Vertical, None) => (1, track, width - 3, thumb_size - 1),
        };

        let (bx, by, bw, bh) = match orientation {
            Orientation::Horizontal => {
                let dy = height / 3;
                (1, dy, width - 2, height - 2 * dy)
            }
            Orientation::Vertical => {
                let dx = width / 3;
                (dx, 1, width - 2 * dx, height - 2)
            }
        };

        let elapsed = match orientation {
            Orientation::Horizontal => tx + thumb_size / 2,
            Orientation::Vertical => bh - (ty + thumb_size / 2),
        };

        Self {
            thumb: Rect::from_pixels(tx, ty, tw, th),
            bar: Rect::from_pixels(bx, by, bw, bh),
            elapsed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(min: i32, max: i32) -> ValueRange {
        ValueRange::new(min, max).unwrap()
    }

    #[test]
    fn test_range_rejects_inverted_bounds() {
        assert_eq!(
            ValueRange::new(10, 10),
            Err(SliderError::RangeInverted {
                minimum: 10,
                maximum: 10
            })
        );
        assert!(ValueRange::new(-5, 5).is_ok());
    }

    #[test]
    fn test_horizontal_offset_grows_with_value() {
        let r = range(0, 100);
        assert_eq!(value_to_offset(0, r, Orientation::Horizontal, 200, 16), 0);
        assert_eq!(value_to_offset(50, r, Orientation::Horizontal, 200, 16), 92);
        assert_eq!(value_to_offset(100, r, Orientation::Horizontal, 200, 16), 184);
    }

    #[test]
    fn test_vertical_offset_is_inverted() {
        let r = range(0, 100);
        assert_eq!(value_to_offset(100, r, Orientation::Vertical, 200, 16), 0);
        assert_eq!(value_to_offset(0, r, Orientation::Vertical, 200, 16), 184);

        let shifted = range(-50, 50);
        assert_eq!(value_to_offset(50, shifted, Orientation::Vertical, 200, 16), 0);
        assert_eq!(value_to_offset(-50, shifted, Orientation::Vertical, 200, 16), 184);
    }

    #[test]
    fn test_round_trip_within_one_step() {
        for (min, max) in [(0, 100), (-50, 50), (10, 1000), (0, 7)] {
            let r = range(min, max);
            for orientation in [Orientation::Horizontal, Orientation::Vertical] {
                for value in min..=max {
                    let offset = value_to_offset(value, r, orientation, 200, 16);
                    let back = offset_to_value(offset as f32 + 8.0, r, orientation, 200, 16);
                    let tolerance = (r.span() as f32 / 184.0).ceil() as i32 + 1;
                    assert!(
                        (back.value - value).abs() <= tolerance,
                        "{orientation:?} [{min},{max}] value {value} came back as {}",
                        back.value
                    );
                }
            }
        }
    }

    #[test]
    fn test_press_at_edges_clamps_and_tags() {
        let r = range(0, 100);
        let first = offset_to_value(0.0, r, Orientation::Horizontal, 200, 16);
        assert_eq!(
            first,
            MappedValue {
                value: 0,
                boundary: Some(Boundary::First)
            }
        );

        let last = offset_to_value(200.0, r, Orientation::Horizontal, 200, 16);
        assert_eq!(
            last,
            MappedValue {
                value: 100,
                boundary: Some(Boundary::Last)
            }
        );

        let inside = offset_to_value(100.0, r, Orientation::Horizontal, 200, 16);
        assert_eq!(inside.boundary, None);
        assert_eq!(inside.value, 50);
    }

    #[test]
    fn test_vertical_pointer_at_top_is_maximum() {
        let r = range(0, 100);
        let top = offset_to_value(0.0, r, Orientation::Vertical, 200, 16);
        assert_eq!(top.value, 100);
        assert_eq!(top.boundary, Some(Boundary::Last));

        let bottom = offset_to_value(250.0, r, Orientation::Vertical, 200, 16);
        assert_eq!(bottom.value, 0);
        assert_eq!(bottom.boundary, Some(Boundary::First));
    }

    #[test]
    fn test_extreme_pointer_positions_clamp() {
        let r = range(1, 100);
        for orientation in [Orientation::Horizontal, Orientation::Vertical] {
            let far = offset_to_value(f32::MAX, r, orientation, 200, 16);
            let near = offset_to_value(-f32::MAX, r, orientation, 200, 16);
            let (far_value, near_value) = match orientation {
                Orientation::Horizontal => (100, 1),
                Orientation::Vertical => (1, 100),
            };
            assert_eq!(far.value, far_value, "{orientation:?}");
            assert_eq!(near.value, near_value, "{orientation:?}");
            assert!(far.boundary.is_some() && near.boundary.is_some());
        }

        let wide = range(i32::MIN, i32::MAX);
        let mapped = offset_to_value(1e30, wide, Orientation::Horizontal, 200, 16);
        assert_eq!(mapped.value, i32::MAX);
        assert_eq!(mapped.boundary, Some(Boundary::Last));
    }

    #[test]
    fn test_degenerate_axis_does_not_divide_by_zero() {
        let mapped = offset_to_value(5.0, range(0, 10), Orientation::Horizontal, 16, 16);
        assert_eq!(mapped.boundary, Some(Boundary::Last));
    }

    #[test]
    fn test_layout_horizontal_default() {
        let layout = SliderLayout::compute(&LayoutInput {
            orientation: Orientation::Horizontal,
            range: range(0, 100),
            value: 30,
            width: 200,
            height: 48,
            thumb_size: 16,
            image_size: None,
        });
        // 30 * 184 / 100 = 55
        assert_eq!(layout.thumb, Rect::new(55.0, 1.0, 15.0, 45.0));
        assert_eq!(layout.bar, Rect::new(1.0, 16.0, 198.0, 16.0));
        assert_eq!(layout.elapsed, 63);
    }

    #[test]
    fn test_layout_vertical_default() {
        let layout = SliderLayout::compute(&LayoutInput {
            orientation: Orientation::Vertical,
            range: range(0, 100),
            value: 30,
            width: 48,
            height: 200,
            thumb_size: 16,
            image_size: None,
        });
        // (100 - 30) * 184 / 100 = 128
        assert_eq!(layout.thumb, Rect::new(1.0, 128.0, 45.0, 15.0));
        assert_eq!(layout.bar, Rect::new(16.0, 1.0, 16.0, 198.0));
        assert_eq!(layout.elapsed, 198 - 136);
    }

    #[test]
    fn test_layout_with_image_centers_on_cross_axis() {
        let layout = SliderLayout::compute(&LayoutInput {
            orientation: Orientation::Horizontal,
            range: range(0, 100),
            value: 100,
            width: 200,
            height: 48,
            thumb_size: 16,
            image_size: Some((20, 30)),
        });
        assert_eq!(layout.thumb, Rect::new(180.0, 9.0, 20.0, 30.0));
    }
}

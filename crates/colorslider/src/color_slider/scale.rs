//! Tick mark and label layout.

use super::geometry::{Orientation, ValueRange};

/// Length of a division tick, in pixels.
pub const MAJOR_TICK_LENGTH: i32 = 5;

/// Length of a subdivision tick, in pixels.
pub const MINOR_TICK_LENGTH: i32 = 3;

/// Font size used for division labels.
pub const LABEL_FONT_SIZE: f32 = 6.0;

/// Where tick marks are drawn relative to the bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum TickStyle {
    /// No tick marks.
    None,
    /// Above a horizontal slider, left of a vertical one.
    #[default]
    TopLeft,
    /// Below a horizontal slider, right of a vertical one.
    BottomRight,
    /// On both sides.
    Both,
}

impl TickStyle {
    /// Ticks on the top or left side.
    pub fn near(self) -> bool {
        matches!(self, TickStyle::TopLeft | TickStyle::Both)
    }

    /// Ticks on the bottom or right side.
    pub fn far(self) -> bool {
        matches!(self, TickStyle::BottomRight | TickStyle::Both)
    }
}

/// One tick mark.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tick {
    /// Offset along the usable bar length, starting at zero.
    pub position: i32,
    /// Division label. Present on every major tick.
    pub label: Option<String>,
    /// Whether this tick marks a division rather than a subdivision.
    pub is_major: bool,
}

/// Whether `subdivisions` leaves at least one value unit per subdivision.
///
/// Subdivision ticks are only drawn when this holds; otherwise they are
/// quietly turned off.
pub fn subdivisions_fit(range: ValueRange, divisions: i32, subdivisions: i32) -> bool {
    subdivisions > 0
        && divisions > 0
        && range.span() / ((subdivisions as i64 + 1) * divisions as i64) > 0
}

/// Lay out every tick for a scale.
///
/// Returns `1 + divisions * (subdivisions + 1)` ticks spaced evenly over
/// `usable_length`. Labels count up from the minimum on horizontal sliders
/// and down from the maximum on vertical ones, stepping by
/// `(max - min) / divisions`. Identical inputs always yield identical output.
///
/// When there are more ticks than pixels, each pixel keeps one tick,
/// preferring a major one, so the result never exceeds `usable_length + 1`
/// entries.
pub fn compute_ticks(
    divisions: i32,
    subdivisions: i32,
    range: ValueRange,
    usable_length: i32,
    orientation: Orientation,
) -> Vec<Tick> {
    if divisions <= 0 {
        return Vec::new();
    }
    let per_division = subdivisions.max(0) as i64 + 1;
    let layout = TickLayout {
        per_division,
        last_index: divisions as i64 * per_division,
        length: usable_length.max(0) as i64,
        step: range.span() / divisions as i64,
        range,
        orientation,
    };

    if layout.last_index <= layout.length {
        (0..=layout.last_index).map(|idx| layout.tick(idx)).collect()
    } else {
        (0..=layout.length)
            .map(|pixel| layout.tick(layout.index_for_pixel(pixel)))
            .collect()
    }
}

struct TickLayout {
    per_division: i64,
    last_index: i64,
    length: i64,
    step: i64,
    range: ValueRange,
    orientation: Orientation,
}

impl TickLayout {
    fn position(&self, idx: i64) -> i32 {
        (idx as i128 * self.length as i128 / self.last_index as i128) as i32
    }

    /// The tick drawn at `pixel` when several share it: the first major
    /// tick landing there, else the first tick.
    fn index_for_pixel(&self, pixel: i64) -> i64 {
        let last = self.last_index as i128;
        let length = self.length as i128;
        let first_at = |p: i128| if p == 0 { 0 } else { (p * last + length - 1) / length };

        let lo = first_at(pixel as i128);
        let hi = if pixel == self.length {
            last
        } else {
            first_at(pixel as i128 + 1) - 1
        };
        let per = self.per_division as i128;
        let major = (lo + per - 1) / per * per;
        (if major <= hi { major } else { lo }) as i64
    }

    fn tick(&self, idx: i64) -> Tick {
        let is_major = idx % self.per_division == 0;
        let label = is_major.then(|| {
            let division = idx / self.per_division;
            let value = match self.orientation {
                Orientation::Horizontal => self.range.minimum() as i64 + division * self.step,
                Orientation::Vertical => self.range.maximum() as i64 - division * self.step,
            };
            value.to_string()
        });
        Tick {
            position: self.position(idx),
            label,
            is_major,
        }
    }
}

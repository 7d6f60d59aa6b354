//! Slider colors and the transforms that derive state-specific palettes.

use colorslider_render::Color;

/// Number of colors in a [`Palette`].
pub const PALETTE_LEN: usize = 9;

/// The nine colors a slider is drawn with.
///
/// [`Palette::to_array`] and [`Palette::from_array`] use a fixed order:
/// thumb outer, thumb inner, thumb pen, bar inner, elapsed top, elapsed
/// bottom, remaining top, remaining bottom, elapsed inner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Palette {
    /// Top color of the thumb gradient.
    pub thumb_outer: Color,
    /// Bottom color of the thumb gradient.
    pub thumb_inner: Color,
    /// Thumb outline.
    pub thumb_pen: Color,
    /// Center line of the whole bar.
    pub bar_inner: Color,
    pub elapsed_top: Color,
    pub elapsed_bottom: Color,
    pub remaining_top: Color,
    pub remaining_bottom: Color,
    /// Center line of the elapsed segment.
    pub elapsed_inner: Color,
}

impl Palette {
    /// Colors in the fixed palette order.
    pub fn to_array(&self) -> [Color; PALETTE_LEN] {
        [
            self.thumb_outer,
            self.thumb_inner,
            self.thumb_pen,
            self.bar_inner,
            self.elapsed_top,
            self.elapsed_bottom,
            self.remaining_top,
            self.remaining_bottom,
            self.elapsed_inner,
        ]
    }

    /// Build a palette from colors in the fixed palette order.
    pub fn from_array(colors: [Color; PALETTE_LEN]) -> Self {
        let [
            thumb_outer,
            thumb_inner,
            thumb_pen,
            bar_inner,
            elapsed_top,
            elapsed_bottom,
            remaining_top,
            remaining_bottom,
            elapsed_inner,
        ] = colors;
        Self {
            thumb_outer,
            thumb_inner,
            thumb_pen,
            bar_inner,
            elapsed_top,
            elapsed_bottom,
            remaining_top,
            remaining_bottom,
            elapsed_inner,
        }
    }

    /// The grayed-out palette used while the slider is disabled.
    pub fn desaturated(&self) -> Self {
        Self::from_array(self.to_array().map(desaturate_color))
    }

    /// The brightened palette used while the pointer hovers the slider.
    pub fn lightened(&self) -> Self {
        Self::from_array(self.to_array().map(lighten_color))
    }
}

impl Default for Palette {
    fn default() -> Self {
        ColorSchema::BlueColors.palette()
    }
}

/// Built-in palette presets.
///
/// Applying a schema copies its colors into the slider; later edits to
/// individual colors are not tracked back to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum ColorSchema {
    #[default]
    BlueColors,
    RedColors,
    GreenColors,
}

impl ColorSchema {
    /// Every preset, in declaration order.
    pub const ALL: [ColorSchema; 3] = [
        ColorSchema::BlueColors,
        ColorSchema::RedColors,
        ColorSchema::GreenColors,
    ];

    /// The preset's colors.
    pub const fn palette(self) -> Palette {
        const REMAINING_TOP: Color = Color::from_rgb8(55, 60, 74);
        const REMAINING_BOTTOM: Color = Color::from_rgb8(87, 94, 110);

        match self {
            ColorSchema::BlueColors => {
                let blue = Color::from_rgb8(21, 56, 152);
                Palette {
                    thumb_outer: Color::WHITE,
                    thumb_inner: blue,
                    thumb_pen: blue,
                    bar_inner: Color::BLACK,
                    elapsed_top: Color::from_rgb8(95, 140, 180),
                    elapsed_bottom: Color::from_rgb8(99, 130, 208),
                    remaining_top: REMAINING_TOP,
                    remaining_bottom: REMAINING_BOTTOM,
                    elapsed_inner: blue,
                }
            }
            ColorSchema::RedColors => Palette {
                thumb_outer: Color::WHITE,
                thumb_inner: Color::RED,
                thumb_pen: Color::RED,
                bar_inner: Color::BLACK,
                elapsed_top: Color::from_rgb8(240, 128, 128),
                elapsed_bottom: Color::from_rgb8(250, 128, 114),
                remaining_top: REMAINING_TOP,
                remaining_bottom: REMAINING_BOTTOM,
                elapsed_inner: Color::RED,
            },
            ColorSchema::GreenColors => Palette {
                thumb_outer: Color::WHITE,
                thumb_inner: Color::GREEN,
                thumb_pen: Color::GREEN,
                bar_inner: Color::BLACK,
                elapsed_top: Color::from_rgb8(0, 255, 127),
                elapsed_bottom: Color::from_rgb8(144, 238, 144),
                remaining_top: REMAINING_TOP,
                remaining_bottom: REMAINING_BOTTOM,
                elapsed_inner: Color::GREEN,
            },
        }
    }
}

// =========================================================================
// Color transforms
// =========================================================================

/// Replace each color with an opaque gray of the same luma.
///
/// Luma uses the 0.3 / 0.6 / 0.1 weights, truncated.
pub fn desaturate(colors: &[Color]) -> Vec<Color> {
    colors.iter().copied().map(desaturate_color).collect()
}

/// Move every channel halfway toward 255, keeping alpha.
pub fn lighten(colors: &[Color]) -> Vec<Color> {
    colors.iter().copied().map(lighten_color).collect()
}

/// Halve every channel, keeping alpha.
pub fn darken(colors: &[Color]) -> Vec<Color> {
    colors.iter().copied().map(darken_color).collect()
}

pub(crate) fn desaturate_color(color: Color) -> Color {
    let luma = (3 * color.r as u32 + 6 * color.g as u32 + color.b as u32) / 10;
    let gray = luma as u8;
    Color::from_rgb8(gray, gray, gray)
}

pub(crate) fn lighten_color(color: Color) -> Color {
    let up = |c: u8| c + (255 - c) / 2;
    Color::from_rgba8(up(color.r), up(color.g), up(color.b), color.a)
}

pub(crate) fn darken_color(color: Color) -> Color {
    Color::from_rgba8(color.r / 2, color.g / 2, color.b / 2, color.a)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_array_order_round_trips() {
        let palette = ColorSchema::RedColors.palette();
        let colors = palette.to_array();
        assert_eq!(colors[0], palette.thumb_outer);
        assert_eq!(colors[3], palette.bar_inner);
        assert_eq!(colors[8], palette.elapsed_inner);
        assert_eq!(Palette::from_array(colors), palette);
    }

    #[test]
    fn test_red_preset_literals() {
        let red = ColorSchema::RedColors.palette();
        assert_eq!(red.thumb_outer, Color::WHITE);
        assert_eq!(red.thumb_inner, Color::from_rgb8(255, 0, 0));
        assert_eq!(red.elapsed_top, Color::from_rgb8(240, 128, 128));
        assert_eq!(red.elapsed_bottom, Color::from_rgb8(250, 128, 114));
        assert_eq!(red.remaining_top, Color::from_rgb8(55, 60, 74));
        assert_eq!(red.remaining_bottom, Color::from_rgb8(87, 94, 110));
    }

    #[test]
    fn test_default_palette_is_blue() {
        assert_eq!(Palette::default(), ColorSchema::BlueColors.palette());
        assert_eq!(
            Palette::default().thumb_inner,
            Color::from_rgb8(21, 56, 152)
        );
    }

    #[test]
    fn test_desaturate_uses_luma_weights() {
        let out = desaturate(&[Color::from_rgba8(100, 200, 50, 10)]);
        // 0.3 * 100 + 0.6 * 200 + 0.1 * 50 = 155
        assert_eq!(out, vec![Color::from_rgb8(155, 155, 155)]);
    }

    #[test]
    fn test_desaturate_is_idempotent_on_grays() {
        for level in 0..=255u8 {
            let gray = Color::from_rgb8(level, level, level);
            let once = desaturate(&[gray]);
            assert_eq!(once, vec![gray]);
            assert_eq!(desaturate(&once), once);
        }
    }

    #[test]
    fn test_lighten_never_decreases_a_channel() {
        for schema in ColorSchema::ALL {
            let base = schema.palette().to_array();
            let light = lighten(&base);
            assert_eq!(light.len(), base.len());
            for (before, after) in base.iter().zip(&light) {
                assert!(after.r >= before.r && after.g >= before.g && after.b >= before.b);
                assert_eq!(after.a, before.a);
            }
        }
        assert_eq!(lighten(&[Color::BLACK]), vec![Color::from_rgb8(127, 127, 127)]);
        assert_eq!(lighten(&[Color::WHITE]), vec![Color::WHITE]);
    }

    #[test]
    fn test_darken_halves_channels() {
        let out = darken(&[Color::from_rgba8(200, 101, 0, 175)]);
        assert_eq!(out, vec![Color::from_rgba8(100, 50, 0, 175)]);
    }

    #[test]
    fn test_transforms_preserve_order() {
        let base = ColorSchema::GreenColors.palette();
        let gray = base.desaturated();
        assert_eq!(gray.thumb_outer, Color::WHITE);
        assert_eq!(gray.bar_inner, Color::BLACK);
        assert_eq!(gray.thumb_inner, desaturate_color(base.thumb_inner));
        assert_eq!(base.lightened().elapsed_inner, lighten_color(base.elapsed_inner));
    }
}

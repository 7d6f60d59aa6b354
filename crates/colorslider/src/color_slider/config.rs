//! Construction-time configuration for [`ColorSlider`](super::ColorSlider).

use colorslider_render::{Color, Path, Size, ThumbImage};

use super::geometry::Orientation;
use super::palette::{ColorSchema, Palette};
use super::scale::TickStyle;

/// Every configurable property of a slider with its default.
///
/// Pass it to [`ColorSlider::from_config`](super::ColorSlider::from_config),
/// which validates it through the same setters used at runtime.
///
/// # Example
///
/// ```
/// use colorslider::{ColorSchema, ColorSlider, Orientation, SliderConfig};
///
/// let config = SliderConfig::default()
///     .with_orientation(Orientation::Vertical)
///     .with_size(48.0, 200.0)
///     .with_range(-50, 50, 0)
///     .with_color_schema(ColorSchema::GreenColors);
///
/// let slider = ColorSlider::from_config(config).unwrap();
/// assert_eq!(slider.value(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct SliderConfig {
    pub name: String,
    pub size: Size,
    pub orientation: Orientation,
    pub minimum: i32,
    pub maximum: i32,
    pub value: i32,
    pub thumb_size: i32,
    /// Outline that replaces the rounded-rect thumb.
    pub thumb_custom_shape: Option<Path>,
    pub thumb_round_rect_size: Size,
    pub border_round_rect_size: Size,
    pub small_change: u32,
    pub large_change: u32,
    pub draw_focus_rectangle: bool,
    pub draw_semitransparent_thumb: bool,
    /// Lighten on hover and darken the thumb outline while it is active.
    pub mouse_effects: bool,
    /// One wheel notch moves the value by `(max - min) / partitions`.
    pub mouse_wheel_bar_partitions: i32,
    pub thumb_image: Option<ThumbImage>,
    pub palette: Palette,
    pub tick_color: Color,
    pub tick_style: TickStyle,
    pub scale_divisions: i32,
    pub scale_subdivisions: i32,
    pub show_small_scale: bool,
    pub show_divisions_text: bool,
    /// Fill for the client area. `None` leaves it to the host.
    pub background_color: Option<Color>,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            name: "ColorSlider".to_string(),
            size: Size::new(200.0, 48.0),
            orientation: Orientation::Horizontal,
            minimum: 0,
            maximum: 100,
            value: 30,
            thumb_size: 16,
            thumb_custom_shape: None,
            thumb_round_rect_size: Size::new(16.0, 16.0),
            border_round_rect_size: Size::new(8.0, 8.0),
            small_change: 1,
            large_change: 5,
            draw_focus_rectangle: false,
            draw_semitransparent_thumb: true,
            mouse_effects: true,
            mouse_wheel_bar_partitions: 10,
            thumb_image: None,
            palette: ColorSchema::BlueColors.palette(),
            tick_color: Color::WHITE,
            tick_style: TickStyle::TopLeft,
            scale_divisions: 10,
            scale_subdivisions: 5,
            show_small_scale: false,
            show_divisions_text: true,
            background_color: Some(Color::from_rgb8(70, 77, 95)),
        }
    }
}

impl SliderConfig {
    /// Set the name used in log output.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the initial client size.
    pub fn with_size(mut self, width: f32, height: f32) -> Self {
        self.size = Size::new(width, height);
        self
    }

    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Set the range and the starting value together.
    pub fn with_range(mut self, minimum: i32, maximum: i32, value: i32) -> Self {
        self.minimum = minimum;
        self.maximum = maximum;
        self.value = value;
        self
    }

    pub fn with_thumb_size(mut self, size: i32) -> Self {
        self.thumb_size = size;
        self
    }

    pub fn with_thumb_custom_shape(mut self, shape: Path) -> Self {
        self.thumb_custom_shape = Some(shape);
        self
    }

    pub fn with_thumb_round_rect_size(mut self, width: f32, height: f32) -> Self {
        self.thumb_round_rect_size = Size::new(width, height);
        self
    }

    pub fn with_border_round_rect_size(mut self, width: f32, height: f32) -> Self {
        self.border_round_rect_size = Size::new(width, height);
        self
    }

    /// Set the keyboard arrow and page step sizes.
    pub fn with_steps(mut self, small_change: u32, large_change: u32) -> Self {
        self.small_change = small_change;
        self.large_change = large_change;
        self
    }

    pub fn with_draw_focus_rectangle(mut self, draw: bool) -> Self {
        self.draw_focus_rectangle = draw;
        self
    }

    pub fn with_draw_semitransparent_thumb(mut self, draw: bool) -> Self {
        self.draw_semitransparent_thumb = draw;
        self
    }

    pub fn with_mouse_effects(mut self, enabled: bool) -> Self {
        self.mouse_effects = enabled;
        self
    }

    pub fn with_mouse_wheel_bar_partitions(mut self, partitions: i32) -> Self {
        self.mouse_wheel_bar_partitions = partitions;
        self
    }

    pub fn with_thumb_image(mut self, image: ThumbImage) -> Self {
        self.thumb_image = Some(image);
        self
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Replace the palette with a preset.
    pub fn with_color_schema(mut self, schema: ColorSchema) -> Self {
        self.palette = schema.palette();
        self
    }

    pub fn with_tick_color(mut self, color: Color) -> Self {
        self.tick_color = color;
        self
    }

    pub fn with_tick_style(mut self, style: TickStyle) -> Self {
        self.tick_style = style;
        self
    }

    /// Set division and subdivision counts.
    pub fn with_scale(mut self, divisions: i32, subdivisions: i32) -> Self {
        self.scale_divisions = divisions;
        self.scale_subdivisions = subdivisions;
        self
    }

    pub fn with_show_small_scale(mut self, show: bool) -> Self {
        self.show_small_scale = show;
        self
    }

    pub fn with_show_divisions_text(mut self, show: bool) -> Self {
        self.show_divisions_text = show;
        self
    }

    pub fn with_background_color(mut self, color: Option<Color>) -> Self {
        self.background_color = color;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SliderConfig::default();
        assert_eq!(config.name, "ColorSlider");
        assert_eq!((config.minimum, config.maximum, config.value), (0, 100, 30));
        assert_eq!(config.thumb_size, 16);
        assert_eq!(config.mouse_wheel_bar_partitions, 10);
        assert_eq!(config.tick_style, TickStyle::TopLeft);
        assert_eq!(config.palette, Palette::default());
        assert!(!config.show_small_scale);
        assert!(config.show_divisions_text);
    }

    #[test]
    fn test_builders_chain() {
        let config = SliderConfig::default()
            .with_name("volume")
            .with_range(-10, 10, 2)
            .with_steps(2, 4)
            .with_color_schema(ColorSchema::RedColors)
            .with_background_color(None);
        assert_eq!(config.name, "volume");
        assert_eq!((config.minimum, config.maximum, config.value), (-10, 10, 2));
        assert_eq!((config.small_change, config.large_change), (2, 4));
        assert_eq!(config.palette, ColorSchema::RedColors.palette());
        assert!(config.background_color.is_none());
    }
}

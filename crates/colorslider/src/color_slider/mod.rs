//! The [`ColorSlider`] range control.
//!
//! The control is split along its concerns:
//!
//! - [`geometry`] maps values to pixels and back
//! - [`scale`] lays out tick marks and labels
//! - [`palette`] holds the colors and derives hover and disabled variants
//! - `interaction` turns input events into value changes
//! - `painting` emits one frame of drawing primitives
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicI32, Ordering};
//!
//! use colorslider::ColorSlider;
//!
//! let mut slider = ColorSlider::with_range(0, 10, 3).unwrap();
//!
//! let changes = Arc::new(AtomicI32::new(0));
//! let changes_clone = changes.clone();
//! slider.value_changed.connect(move |_| {
//!     changes_clone.fetch_add(1, Ordering::SeqCst);
//! });
//!
//! slider.set_value(7).unwrap();
//! assert!(slider.set_value(11).is_err());
//! assert_eq!(slider.value(), 7);
//! assert_eq!(changes.load(Ordering::SeqCst), 1);
//! ```

mod config;
pub mod geometry;
mod interaction;
mod painting;
pub mod palette;
pub mod scale;

use colorslider_core::Signal;
use colorslider_render::{Color, Path, Rect, Size, ThumbImage};

use crate::error::{SliderError, SliderResult};
use crate::widget::{PaintContext, Widget, WidgetBase, WidgetEvent};

pub use config::SliderConfig;
pub use geometry::{Orientation, ValueRange};
pub use interaction::{InteractionState, ScrollEvent, ScrollEventKind, WHEEL_DELTA};
pub use palette::{ColorSchema, Palette};
pub use scale::{Tick, TickStyle};

use geometry::{LayoutInput, SliderLayout};

/// Pixels keyed out of thumb images when they are assigned.
pub const THUMB_IMAGE_COLOR_KEY: Color = Color::MAGENTA;

/// A custom-drawn slider for picking an integer from a range.
///
/// The slider is driven entirely through [`Widget::event`] and drawn through
/// [`Widget::paint`]. Every configuration change requests a repaint.
///
/// # Signals
///
/// - `value_changed(())`: the value was set or re-asserted. Drags notify on
///   every pointer step, even if the value did not move.
/// - `scroll(ScrollEvent)`: why the value changed and what it is now.
pub struct ColorSlider {
    base: WidgetBase,

    orientation: Orientation,
    range: ValueRange,
    value: i32,

    /// Thumb length along the primary axis.
    thumb_size: i32,
    thumb_custom_shape: Option<Path>,
    thumb_round_rect_size: Size,
    border_round_rect_size: Size,
    thumb_image: Option<ThumbImage>,

    small_change: u32,
    large_change: u32,
    mouse_wheel_bar_partitions: i32,

    draw_focus_rectangle: bool,
    draw_semitransparent_thumb: bool,
    mouse_effects: bool,

    palette: Palette,
    background_color: Option<Color>,

    tick_color: Color,
    tick_style: TickStyle,
    scale_divisions: i32,
    scale_subdivisions: i32,
    show_small_scale: bool,
    show_divisions_text: bool,

    interaction: InteractionState,

    /// Signal emitted when the value is set.
    pub value_changed: Signal<()>,

    /// Signal emitted with the reason for each value change.
    pub scroll: Signal<ScrollEvent>,
}

impl ColorSlider {
    /// Create a slider with the default configuration.
    pub fn new() -> Self {
        let config = SliderConfig::default();
        let mut base = WidgetBase::new(config.name);
        base.set_focusable(true);
        base.resize(config.size.width, config.size.height);

        Self {
            base,
            orientation: config.orientation,
            range: ValueRange::default(),
            value: config.value,
            thumb_size: config.thumb_size,
            thumb_custom_shape: None,
            thumb_round_rect_size: config.thumb_round_rect_size,
            border_round_rect_size: config.border_round_rect_size,
            thumb_image: None,
            small_change: config.small_change,
            large_change: config.large_change,
            mouse_wheel_bar_partitions: config.mouse_wheel_bar_partitions,
            draw_focus_rectangle: config.draw_focus_rectangle,
            draw_semitransparent_thumb: config.draw_semitransparent_thumb,
            mouse_effects: config.mouse_effects,
            palette: config.palette,
            background_color: config.background_color,
            tick_color: config.tick_color,
            tick_style: config.tick_style,
            scale_divisions: config.scale_divisions,
            scale_subdivisions: config.scale_subdivisions,
            show_small_scale: config.show_small_scale,
            show_divisions_text: config.show_divisions_text,
            interaction: InteractionState::default(),
            value_changed: Signal::new(),
            scroll: Signal::new(),
        }
    }

    /// Create a slider with the given range and starting value.
    pub fn with_range(minimum: i32, maximum: i32, value: i32) -> SliderResult<Self> {
        Self::from_config(SliderConfig::default().with_range(minimum, maximum, value))
    }

    /// Create a slider from a configuration.
    ///
    /// Every field goes through the runtime setters, so an invalid
    /// configuration fails with the same error a setter would return.
    pub fn from_config(config: SliderConfig) -> SliderResult<Self> {
        let mut slider = Self::new();
        slider.base.set_name(config.name);
        slider.base.resize(config.size.width, config.size.height);
        slider.orientation = config.orientation;

        slider.set_range(config.minimum, config.maximum)?;
        slider.set_value(config.value)?;

        match config.thumb_custom_shape {
            Some(shape) => slider.set_thumb_custom_shape(Some(shape))?,
            None => slider.set_thumb_size(config.thumb_size)?,
        }
        slider.set_thumb_round_rect_size(config.thumb_round_rect_size);
        slider.set_border_round_rect_size(config.border_round_rect_size);
        slider.set_thumb_image(config.thumb_image);

        slider.set_small_change(config.small_change);
        slider.set_large_change(config.large_change);
        slider.set_mouse_wheel_bar_partitions(config.mouse_wheel_bar_partitions)?;

        slider.set_draw_focus_rectangle(config.draw_focus_rectangle);
        slider.set_draw_semitransparent_thumb(config.draw_semitransparent_thumb);
        slider.set_mouse_effects(config.mouse_effects);

        slider.set_palette(config.palette);
        slider.set_background_color(config.background_color);
        slider.set_tick_color(config.tick_color);
        slider.set_tick_style(config.tick_style);
        slider.set_scale_divisions(config.scale_divisions);
        slider.set_scale_subdivisions(config.scale_subdivisions);
        slider.set_show_small_scale(config.show_small_scale);
        slider.set_show_divisions_text(config.show_divisions_text);

        Ok(slider)
    }

    /// Log a rejected mutation and hand the error back.
    fn reject<T>(&self, setter: &'static str, error: SliderError) -> SliderResult<T> {
        colorslider_core::slider_debug!(
            name = self.base.name(),
            setter,
            %error,
            "rejected configuration"
        );
        Err(error)
    }

    fn ignore(&self, setter: &'static str, value: i32) {
        colorslider_core::slider_debug!(
            name = self.base.name(),
            setter,
            value,
            "ignored scale configuration"
        );
    }

    // =========================================================================
    // Orientation
    // =========================================================================

    /// Get the orientation.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Set the orientation.
    ///
    /// Swaps the widget's width and height. With a custom thumb shape the
    /// thumb size is re-derived from the shape along the new axis.
    pub fn set_orientation(&mut self, orientation: Orientation) {
        if self.orientation == orientation {
            return;
        }
        self.orientation = orientation;
        let size = self.base.size().transposed();
        self.base.set_size(size);
        if let Some(size) = self.custom_shape_thumb_size() {
            self.thumb_size = size;
        }
        self.base.update();
    }

    // =========================================================================
    // Value and Range
    // =========================================================================

    /// Get the current value.
    pub fn value(&self) -> i32 {
        self.value
    }

    /// Set the value.
    ///
    /// Out-of-range values are rejected. `value_changed` is emitted even if
    /// the value is unchanged.
    pub fn set_value(&mut self, value: i32) -> SliderResult<()> {
        if !self.range.contains(value) {
            return self.reject(
                "value",
                SliderError::ValueOutOfRange {
                    value,
                    minimum: self.range.minimum(),
                    maximum: self.range.maximum(),
                },
            );
        }
        self.value = value;
        self.value_changed.emit(());
        self.base.update();
        Ok(())
    }

    /// Get the minimum value.
    pub fn minimum(&self) -> i32 {
        self.range.minimum()
    }

    /// Set the minimum value, pulling the value up if it falls below.
    pub fn set_minimum(&mut self, minimum: i32) -> SliderResult<()> {
        match ValueRange::new(minimum, self.range.maximum()) {
            Ok(range) => {
                self.apply_range(range);
                Ok(())
            }
            Err(error) => self.reject("minimum", error),
        }
    }

    /// Get the maximum value.
    pub fn maximum(&self) -> i32 {
        self.range.maximum()
    }

    /// Set the maximum value, pulling the value down if it rises above.
    pub fn set_maximum(&mut self, maximum: i32) -> SliderResult<()> {
        match ValueRange::new(self.range.minimum(), maximum) {
            Ok(range) => {
                self.apply_range(range);
                Ok(())
            }
            Err(error) => self.reject("maximum", error),
        }
    }

    /// Get the range.
    pub fn range(&self) -> ValueRange {
        self.range
    }

    /// Set both bounds at once.
    pub fn set_range(&mut self, minimum: i32, maximum: i32) -> SliderResult<()> {
        match ValueRange::new(minimum, maximum) {
            Ok(range) => {
                self.apply_range(range);
                Ok(())
            }
            Err(error) => self.reject("range", error),
        }
    }

    fn apply_range(&mut self, range: ValueRange) {
        self.range = range;
        let clamped = range.clamp(self.value as i64);
        if clamped != self.value {
            self.value = clamped;
            self.value_changed.emit(());
        }
        self.base.update();
    }

    // =========================================================================
    // Step Sizes
    // =========================================================================

    /// Step for the arrow keys.
    pub fn small_change(&self) -> u32 {
        self.small_change
    }

    pub fn set_small_change(&mut self, step: u32) {
        self.small_change = step;
        self.base.update();
    }

    /// Step for Page Up and Page Down.
    pub fn large_change(&self) -> u32 {
        self.large_change
    }

    pub fn set_large_change(&mut self, step: u32) {
        self.large_change = step;
        self.base.update();
    }

    /// Number of wheel notches that span the whole range.
    pub fn mouse_wheel_bar_partitions(&self) -> i32 {
        self.mouse_wheel_bar_partitions
    }

    /// Set the wheel partitions. Must be positive.
    pub fn set_mouse_wheel_bar_partitions(&mut self, partitions: i32) -> SliderResult<()> {
        if partitions <= 0 {
            return self.reject(
                "mouse_wheel_bar_partitions",
                SliderError::InvalidWheelPartitions(partitions),
            );
        }
        self.mouse_wheel_bar_partitions = partitions;
        self.base.update();
        Ok(())
    }

    // =========================================================================
    // Thumb
    // =========================================================================

    /// Thumb length along the primary axis, in pixels.
    pub fn thumb_size(&self) -> i32 {
        self.thumb_size
    }

    /// Set the thumb length. It must be positive and shorter than the
    /// widget along the primary axis.
    pub fn set_thumb_size(&mut self, size: i32) -> SliderResult<()> {
        let axis_length = self.axis_length();
        if size <= 0 || size >= axis_length {
            return self.reject(
                "thumb_size",
                SliderError::ThumbSizeOutOfRange { size, axis_length },
            );
        }
        self.thumb_size = size;
        self.base.update();
        Ok(())
    }

    pub fn thumb_custom_shape(&self) -> Option<&Path> {
        self.thumb_custom_shape.as_ref()
    }

    /// Replace the rounded-rect thumb with an outline.
    ///
    /// The thumb size becomes the shape's extent along the primary axis plus
    /// one. Shapes without points are rejected.
    pub fn set_thumb_custom_shape(&mut self, shape: Option<Path>) -> SliderResult<()> {
        if let Some(path) = &shape
            && path.bounds().is_none()
        {
            return self.reject(
                "thumb_custom_shape",
                SliderError::Render(colorslider_render::RenderError::EmptyPath),
            );
        }
        self.thumb_custom_shape = shape;
        if let Some(size) = self.custom_shape_thumb_size() {
            self.thumb_size = size;
        }
        self.base.update();
        Ok(())
    }

    fn custom_shape_thumb_size(&self) -> Option<i32> {
        let bounds = self.thumb_custom_shape.as_ref()?.bounds()?;
        let extent = self.orientation.primary(bounds.width(), bounds.height());
        Some(extent as i32 + 1)
    }

    /// Corner ellipse size of the rounded-rect thumb.
    pub fn thumb_round_rect_size(&self) -> Size {
        self.thumb_round_rect_size
    }

    /// Set the thumb corner size. Non-positive dimensions become 1.
    pub fn set_thumb_round_rect_size(&mut self, size: Size) {
        self.thumb_round_rect_size = at_least_one(size);
        self.base.update();
    }

    /// Corner ellipse size of the focus outline.
    pub fn border_round_rect_size(&self) -> Size {
        self.border_round_rect_size
    }

    /// Set the focus outline corner size. Non-positive dimensions become 1.
    pub fn set_border_round_rect_size(&mut self, size: Size) {
        self.border_round_rect_size = at_least_one(size);
        self.base.update();
    }

    pub fn thumb_image(&self) -> Option<&ThumbImage> {
        self.thumb_image.as_ref()
    }

    /// Draw an image in place of the thumb outline.
    ///
    /// Pixels matching [`THUMB_IMAGE_COLOR_KEY`] become transparent.
    pub fn set_thumb_image(&mut self, image: Option<ThumbImage>) {
        self.thumb_image = image.map(|img| img.with_color_key(THUMB_IMAGE_COLOR_KEY));
        self.base.update();
    }

    /// Current thumb bounds in local coordinates.
    pub fn thumb_rect(&self) -> Rect {
        self.layout().thumb
    }

    // =========================================================================
    // Appearance
    // =========================================================================

    pub fn draw_focus_rectangle(&self) -> bool {
        self.draw_focus_rectangle
    }

    pub fn set_draw_focus_rectangle(&mut self, draw: bool) {
        self.draw_focus_rectangle = draw;
        self.base.update();
    }

    pub fn draw_semitransparent_thumb(&self) -> bool {
        self.draw_semitransparent_thumb
    }

    pub fn set_draw_semitransparent_thumb(&mut self, draw: bool) {
        self.draw_semitransparent_thumb = draw;
        self.base.update();
    }

    pub fn mouse_effects(&self) -> bool {
        self.mouse_effects
    }

    /// Enable hover lightening and thumb outline darkening.
    pub fn set_mouse_effects(&mut self, enabled: bool) {
        self.mouse_effects = enabled;
        self.base.update();
    }

    /// The base palette, before hover or disabled adjustments.
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn set_palette(&mut self, palette: Palette) {
        self.palette = palette;
        self.base.update();
    }

    /// Overwrite all nine palette colors with a preset.
    pub fn set_color_schema(&mut self, schema: ColorSchema) {
        self.set_palette(schema.palette());
    }

    pub fn background_color(&self) -> Option<Color> {
        self.background_color
    }

    pub fn set_background_color(&mut self, color: Option<Color>) {
        self.background_color = color;
        self.base.update();
    }

    // =========================================================================
    // Tick Marks
    // =========================================================================

    pub fn tick_color(&self) -> Color {
        self.tick_color
    }

    pub fn set_tick_color(&mut self, color: Color) {
        self.tick_color = color;
        self.base.update();
    }

    pub fn tick_style(&self) -> TickStyle {
        self.tick_style
    }

    pub fn set_tick_style(&mut self, style: TickStyle) {
        self.tick_style = style;
        self.base.update();
    }

    /// Number of labelled divisions.
    pub fn scale_divisions(&self) -> i32 {
        self.scale_divisions
    }

    /// Set the division count. Non-positive counts are ignored.
    pub fn set_scale_divisions(&mut self, divisions: i32) {
        if divisions <= 0 {
            self.ignore("scale_divisions", divisions);
            return;
        }
        self.scale_divisions = divisions;
        self.base.update();
    }

    /// Number of subdivision ticks between two divisions.
    pub fn scale_subdivisions(&self) -> i32 {
        self.scale_subdivisions
    }

    /// Set the subdivision count.
    ///
    /// Ignored unless every subdivision still spans at least one value unit.
    pub fn set_scale_subdivisions(&mut self, subdivisions: i32) {
        if !scale::subdivisions_fit(self.range, self.scale_divisions, subdivisions) {
            self.ignore("scale_subdivisions", subdivisions);
            return;
        }
        self.scale_subdivisions = subdivisions;
        self.base.update();
    }

    /// Whether subdivision ticks are drawn.
    pub fn show_small_scale(&self) -> bool {
        self.show_small_scale
    }

    /// Show subdivision ticks.
    ///
    /// Turning them on only sticks when the current subdivisions fit the
    /// range; otherwise they stay off.
    pub fn set_show_small_scale(&mut self, show: bool) {
        let fits =
            scale::subdivisions_fit(self.range, self.scale_divisions, self.scale_subdivisions);
        if show && !fits {
            self.ignore("show_small_scale", self.scale_subdivisions);
        }
        self.show_small_scale = show && fits;
        self.base.update();
    }

    /// Whether division labels are drawn.
    pub fn show_divisions_text(&self) -> bool {
        self.show_divisions_text
    }

    pub fn set_show_divisions_text(&mut self, show: bool) {
        self.show_divisions_text = show;
        self.base.update();
    }

    // =========================================================================
    // State
    // =========================================================================

    /// Snapshot of the pointer state.
    pub fn interaction_state(&self) -> InteractionState {
        self.interaction
    }

    /// Whether a drag is in progress.
    pub fn is_captured(&self) -> bool {
        self.interaction.captured
    }

    // =========================================================================
    // Geometry Helpers
    // =========================================================================

    fn axis_length(&self) -> i32 {
        let size = self.base.size();
        self.orientation.primary(size.width, size.height) as i32
    }

    fn layout(&self) -> SliderLayout {
        let size = self.base.size();
        SliderLayout::compute(&LayoutInput {
            orientation: self.orientation,
            range: self.range,
            value: self.value,
            width: size.width as i32,
            height: size.height as i32,
            thumb_size: self.thumb_size,
            image_size: self
                .thumb_image
                .as_ref()
                .map(|img| (img.width() as i32, img.height() as i32)),
        })
    }
}

macro_rules! palette_setters {
    ($($(#[$doc:meta])* $setter:ident => $field:ident),+ $(,)?) => {
        impl ColorSlider {
            $(
                $(#[$doc])*
                pub fn $setter(&mut self, color: Color) {
                    self.palette.$field = color;
                    self.base.update();
                }
            )+
        }
    };
}

// Single-color edits of the palette. Read colors back through `palette()`.
palette_setters!(
    /// Top of the thumb gradient.
    set_thumb_outer_color => thumb_outer,
    /// Bottom of the thumb gradient.
    set_thumb_inner_color => thumb_inner,
    set_thumb_pen_color => thumb_pen,
    set_bar_inner_color => bar_inner,
    set_elapsed_top_color => elapsed_top,
    set_elapsed_bottom_color => elapsed_bottom,
    set_elapsed_inner_color => elapsed_inner,
    set_remaining_top_color => remaining_top,
    set_remaining_bottom_color => remaining_bottom,
);

fn at_least_one(size: Size) -> Size {
    Size::new(
        if size.width <= 0.0 { 1.0 } else { size.width },
        if size.height <= 0.0 { 1.0 } else { size.height },
    )
}

impl Default for ColorSlider {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ColorSlider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ColorSlider")
            .field("name", &self.base.name())
            .field("orientation", &self.orientation)
            .field("range", &self.range)
            .field("value", &self.value)
            .field("thumb_size", &self.thumb_size)
            .field("interaction", &self.interaction)
            .finish_non_exhaustive()
    }
}

impl Widget for ColorSlider {
    fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn paint(&self, ctx: &mut PaintContext<'_>) {
        let rect = ctx.rect();
        self.paint_frame(ctx.renderer(), rect);
    }

    fn event(&mut self, event: &mut WidgetEvent) -> bool {
        let enabled = self.base.is_enabled();
        match event {
            WidgetEvent::MousePress(e) if enabled => {
                if self.handle_mouse_press(e) {
                    event.accept();
                    return true;
                }
            }
            WidgetEvent::MouseRelease(e) if enabled => {
                if self.handle_mouse_release(e) {
                    event.accept();
                    return true;
                }
            }
            WidgetEvent::MouseMove(e) if enabled => {
                if self.handle_mouse_move(e) {
                    event.accept();
                    return true;
                }
            }
            WidgetEvent::Wheel(e) if enabled => {
                if self.handle_wheel(e) {
                    event.accept();
                    return true;
                }
            }
            WidgetEvent::KeyPress(e) if enabled => {
                if self.handle_key_press(e) {
                    event.accept();
                    return true;
                }
            }
            WidgetEvent::Enter(e) => {
                self.handle_enter(e.local_pos);
            }
            WidgetEvent::Leave(_) => {
                self.handle_leave();
            }
            WidgetEvent::FocusIn(_) => {
                self.base.set_focused(true);
            }
            WidgetEvent::FocusOut(_) => {
                self.base.set_focused(false);
                self.cancel_interaction();
            }
            WidgetEvent::Hide(_) => {
                self.cancel_interaction();
            }
            WidgetEvent::Show(_) => {
                self.base.update();
            }
            WidgetEvent::Resize(e) => {
                self.base.set_size(e.new_size);
            }
            WidgetEvent::EnabledChange(e) => {
                self.base.set_enabled(e.enabled);
                if !e.enabled {
                    self.cancel_interaction();
                }
                self.base.update();
            }
            _ => {}
        }
        false
    }
}

// Ensure ColorSlider is Send + Sync
static_assertions::assert_impl_all!(ColorSlider: Send, Sync);

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicI32, Ordering};

    use colorslider_render::Point;

    use super::*;

    fn count_value_changes(slider: &ColorSlider) -> Arc<AtomicI32> {
        let count = Arc::new(AtomicI32::new(0));
        let count_clone = count.clone();
        slider.value_changed.connect(move |_| {
            count_clone.fetch_add(1, Ordering::SeqCst);
        });
        count
    }

    #[test]
    fn test_slider_creation() {
        let slider = ColorSlider::new();
        assert_eq!(slider.orientation(), Orientation::Horizontal);
        assert_eq!(slider.minimum(), 0);
        assert_eq!(slider.maximum(), 100);
        assert_eq!(slider.value(), 30);
        assert_eq!(slider.thumb_size(), 16);
        assert_eq!(slider.small_change(), 1);
        assert_eq!(slider.large_change(), 5);
        assert_eq!(slider.tick_style(), TickStyle::TopLeft);
        assert_eq!(slider.size(), Size::new(200.0, 48.0));
        assert!(slider.widget_base().is_focusable());
    }

    #[test]
    fn test_set_value_rejects_out_of_range() {
        let mut slider = ColorSlider::new();
        let count = count_value_changes(&slider);

        assert_eq!(
            slider.set_value(101),
            Err(SliderError::ValueOutOfRange {
                value: 101,
                minimum: 0,
                maximum: 100
            })
        );
        assert_eq!(slider.value(), 30);
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_set_value_always_notifies() {
        let mut slider = ColorSlider::new();
        let count = count_value_changes(&slider);
        slider.set_value(30).unwrap();
        slider.set_value(30).unwrap();
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_minimum_above_value_clamps_once() {
        let mut slider = ColorSlider::new();
        let count = count_value_changes(&slider);

        slider.set_minimum(40).unwrap();
        assert_eq!(slider.value(), 40);
        assert_eq!(count.load(Ordering::SeqCst), 1);

        slider.set_minimum(10).unwrap();
        assert_eq!(slider.value(), 40);
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_maximum_below_value_clamps_once() {
        let mut slider = ColorSlider::new();
        let count = count_value_changes(&slider);

        slider.set_maximum(20).unwrap();
        assert_eq!(slider.value(), 20);
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_inverted_range_is_rejected() {
        let mut slider = ColorSlider::new();
        assert_eq!(
            slider.set_minimum(100),
            Err(SliderError::RangeInverted {
                minimum: 100,
                maximum: 100
            })
        );
        assert!(slider.set_maximum(-1).is_err());
        assert!(slider.set_range(5, 5).is_err());
        assert_eq!((slider.minimum(), slider.maximum()), (0, 100));
    }

    #[test]
    fn test_with_range_validates_value() {
        assert!(ColorSlider::with_range(0, 10, 11).is_err());
        assert!(ColorSlider::with_range(10, 0, 5).is_err());
        let slider = ColorSlider::with_range(-5, 5, -5).unwrap();
        assert_eq!(slider.value(), -5);
    }

    #[test]
    fn test_thumb_size_bounds() {
        let mut slider = ColorSlider::new();
        assert!(slider.set_thumb_size(0).is_err());
        assert_eq!(
            slider.set_thumb_size(200),
            Err(SliderError::ThumbSizeOutOfRange {
                size: 200,
                axis_length: 200
            })
        );
        slider.set_thumb_size(199).unwrap();
        assert_eq!(slider.thumb_size(), 199);
    }

    #[test]
    fn test_wheel_partitions_must_be_positive() {
        let mut slider = ColorSlider::new();
        assert_eq!(
            slider.set_mouse_wheel_bar_partitions(0),
            Err(SliderError::InvalidWheelPartitions(0))
        );
        assert_eq!(slider.mouse_wheel_bar_partitions(), 10);
    }

    #[test]
    fn test_orientation_swaps_size() {
        let mut slider = ColorSlider::new();
        slider.set_orientation(Orientation::Vertical);
        assert_eq!(slider.size(), Size::new(48.0, 200.0));
        slider.set_orientation(Orientation::Vertical);
        assert_eq!(slider.size(), Size::new(48.0, 200.0));
    }

    #[test]
    fn test_custom_shape_sets_thumb_size_per_axis() {
        let mut shape = Path::new();
        shape
            .move_to(Point::new(0.0, 0.0))
            .line_to(Point::new(10.0, 0.0))
            .line_to(Point::new(10.0, 20.5))
            .close();

        let mut slider = ColorSlider::new();
        slider.set_thumb_custom_shape(Some(shape)).unwrap();
        assert_eq!(slider.thumb_size(), 11);

        // Not axis-symmetric: the size follows the new axis.
        slider.set_orientation(Orientation::Vertical);
        assert_eq!(slider.thumb_size(), 21);

        assert!(slider.set_thumb_custom_shape(Some(Path::new())).is_err());
        assert!(slider.thumb_custom_shape().is_some());
    }

    #[test]
    fn test_round_rect_sizes_coerce_non_positive() {
        let mut slider = ColorSlider::new();
        slider.set_thumb_round_rect_size(Size::new(0.0, -3.0));
        assert_eq!(slider.thumb_round_rect_size(), Size::new(1.0, 1.0));
        slider.set_border_round_rect_size(Size::new(4.0, 0.0));
        assert_eq!(slider.border_round_rect_size(), Size::new(4.0, 1.0));
    }

    #[test]
    fn test_scale_configuration_guards() {
        let mut slider = ColorSlider::new();

        slider.set_scale_divisions(0);
        assert_eq!(slider.scale_divisions(), 10);

        slider.set_scale_subdivisions(10);
        assert_eq!(slider.scale_subdivisions(), 5);

        slider.set_show_small_scale(true);
        assert!(slider.show_small_scale());

        slider.set_scale_divisions(50);
        slider.set_show_small_scale(true);
        assert!(!slider.show_small_scale());
    }

    #[test]
    fn test_color_schema_has_no_binding() {
        let mut slider = ColorSlider::new();
        slider.set_color_schema(ColorSchema::RedColors);
        assert_eq!(*slider.palette(), ColorSchema::RedColors.palette());

        let mut edited = *slider.palette();
        edited.bar_inner = Color::WHITE;
        slider.set_palette(edited);
        assert_eq!(slider.palette().bar_inner, Color::WHITE);
        assert_eq!(slider.palette().thumb_inner, Color::RED);
    }

    #[test]
    fn test_single_palette_color_setters() {
        let mut slider = ColorSlider::new();
        let before = *slider.palette();
        slider.widget_base_mut().clear_repaint_flag();

        slider.set_thumb_inner_color(Color::GREEN);
        assert!(slider.needs_repaint());
        slider.set_remaining_bottom_color(Color::MAGENTA);

        let after = *slider.palette();
        assert_eq!(after.thumb_inner, Color::GREEN);
        assert_eq!(after.remaining_bottom, Color::MAGENTA);
        assert_eq!(after.thumb_outer, before.thumb_outer);
        assert_eq!(after.elapsed_inner, before.elapsed_inner);
    }

    #[test]
    fn test_thumb_image_is_color_keyed() {
        let image = ThumbImage::from_rgba(&[255, 0, 255, 255, 1, 2, 3, 255], 2, 1).unwrap();
        let mut slider = ColorSlider::new();
        slider.set_thumb_image(Some(image));

        let keyed = slider.thumb_image().unwrap();
        assert_eq!(keyed.pixel(0, 0), Some(Color::TRANSPARENT));
        assert_eq!(keyed.pixel(1, 0), Some(Color::from_rgb8(1, 2, 3)));
        assert_eq!(slider.thumb_rect().size, Size::new(2.0, 1.0));
    }

    #[test]
    fn test_from_config_uses_setter_validation() {
        let bad = SliderConfig::default().with_mouse_wheel_bar_partitions(-2);
        assert_eq!(
            ColorSlider::from_config(bad).err(),
            Some(SliderError::InvalidWheelPartitions(-2))
        );

        let too_big = SliderConfig::default().with_thumb_size(48).with_size(40.0, 48.0);
        assert!(ColorSlider::from_config(too_big).is_err());

        let slider = ColorSlider::from_config(
            SliderConfig::default()
                .with_name("gain")
                .with_orientation(Orientation::Vertical)
                .with_size(48.0, 200.0),
        )
        .unwrap();
        assert_eq!(slider.widget_base().name(), "gain");
        assert_eq!(slider.orientation(), Orientation::Vertical);
    }

    #[test]
    fn test_configuration_requests_repaint() {
        let mut slider = ColorSlider::new();
        slider.widget_base_mut().clear_repaint_flag();
        slider.set_tick_color(Color::BLACK);
        assert!(slider.needs_repaint());
    }
}

//! Frame rendering.
//!
//! A frame is drawn in a fixed order: background, bar lines, thumb, focus
//! outline, then ticks and labels. Every primitive is emitted on every
//! frame.

use colorslider_core::PerfSpan;
use colorslider_core::logging::{span_names, targets};
use colorslider_render::{
    Color, DashPattern, FillRule, Paint, Path, Point, Rect, RenderResult, Renderer, RoundedRect,
    Stroke,
};

use super::ColorSlider;
use super::geometry::{Orientation, SliderLayout};
use super::palette::{Palette, darken_color};
use super::scale::{self, LABEL_FONT_SIZE, MAJOR_TICK_LENGTH, MINOR_TICK_LENGTH};

/// Thumb gradient alpha while a semi-transparent thumb is being dragged.
pub const DRAG_THUMB_ALPHA: u8 = 175;

/// Alpha of the focus outline.
pub const FOCUS_OUTLINE_ALPHA: u8 = 200;

/// Pixel-aligned copy of a rectangle.
#[derive(Clone, Copy)]
struct PixelRect {
    x: i32,
    y: i32,
    w: i32,
    h: i32,
}

impl From<Rect> for PixelRect {
    fn from(rect: Rect) -> Self {
        Self {
            x: rect.left() as i32,
            y: rect.top() as i32,
            w: rect.width() as i32,
            h: rect.height() as i32,
        }
    }
}

fn line(
    renderer: &mut dyn Renderer,
    (x1, y1): (i32, i32),
    (x2, y2): (i32, i32),
    color: Color,
) -> RenderResult<()> {
    renderer.draw_line(
        Point::from((x1, y1)),
        Point::from((x2, y2)),
        &Stroke::pen(color),
    )
}

impl ColorSlider {
    /// The palette the next frame will use.
    ///
    /// Disabled sliders are desaturated. With mouse effects on, a hovered
    /// slider is lightened.
    pub fn active_palette(&self) -> Palette {
        if !self.base.is_enabled() {
            self.palette.desaturated()
        } else if self.mouse_effects && self.interaction.pointer_over_control {
            self.palette.lightened()
        } else {
            self.palette
        }
    }

    /// Draw one frame, logging and swallowing any renderer failure.
    pub(super) fn paint_frame(&self, renderer: &mut dyn Renderer, client: Rect) {
        let _span = PerfSpan::new(span_names::PAINT);
        if let Err(error) = self.draw(renderer, client) {
            tracing::warn!(
                target: targets::PAINT,
                name = self.base.name(),
                %error,
                "paint failed, frame left incomplete"
            );
        }
    }

    fn draw(&self, renderer: &mut dyn Renderer, client: Rect) -> RenderResult<()> {
        let palette = self.active_palette();
        let layout = self.layout();

        if let Some(background) = self.background_color {
            renderer.fill_rect(client, &Paint::solid(background))?;
        }
        self.paint_bar(renderer, &layout, &palette)?;
        self.paint_thumb(renderer, &layout, &palette)?;
        self.paint_focus_indicator(renderer, &palette)?;
        self.paint_ticks(renderer, &layout)?;
        Ok(())
    }

    // =========================================================================
    // Painting
    // =========================================================================

    fn paint_bar(
        &self,
        renderer: &mut dyn Renderer,
        layout: &SliderLayout,
        palette: &Palette,
    ) -> RenderResult<()> {
        let bar = PixelRect::from(layout.bar);
        let elapsed = layout.elapsed;

        match self.orientation {
            Orientation::Horizontal => {
                let cy = bar.y + bar.h / 2;
                let (left, split, right) = (bar.x, bar.x + elapsed, bar.x + bar.w);

                line(renderer, (left, cy), (right, cy), palette.bar_inner)?;
                line(renderer, (left, cy), (split, cy), palette.elapsed_inner)?;

                line(renderer, (left, cy - 1), (split, cy - 1), palette.elapsed_top)?;
                line(renderer, (left, cy + 1), (split, cy + 1), palette.elapsed_bottom)?;
                line(renderer, (split, cy - 1), (right, cy - 1), palette.remaining_top)?;
                line(renderer, (split, cy + 1), (right, cy + 1), palette.remaining_bottom)?;

                // End caps
                line(renderer, (left, cy - 1), (left, cy + 1), palette.remaining_top)?;
                line(renderer, (right, cy - 1), (right, cy + 1), palette.remaining_bottom)?;
            }
            Orientation::Vertical => {
                let cx = bar.x + bar.w / 2;
                let (top, split, bottom) = (bar.y, bar.y + bar.h - elapsed, bar.y + bar.h);

                line(renderer, (cx, top), (cx, bottom), palette.bar_inner)?;
                line(renderer, (cx, split), (cx, bottom), palette.elapsed_inner)?;

                line(renderer, (cx - 1, split), (cx - 1, bottom), palette.elapsed_top)?;
                line(renderer, (cx + 1, split), (cx + 1, bottom), palette.elapsed_bottom)?;
                line(renderer, (cx - 1, top), (cx - 1, split), palette.remaining_top)?;
                line(renderer, (cx + 1, top), (cx + 1, split), palette.remaining_bottom)?;

                // End caps
                line(renderer, (cx - 1, top), (cx + 1, top), palette.remaining_top)?;
                line(renderer, (cx - 1, bottom), (cx + 1, bottom), palette.remaining_bottom)?;
            }
        }
        Ok(())
    }

    fn paint_thumb(
        &self,
        renderer: &mut dyn Renderer,
        layout: &SliderLayout,
        palette: &Palette,
    ) -> RenderResult<()> {
        let thumb = layout.thumb;
        let path = match &self.thumb_custom_shape {
            Some(shape) => shape.aligned_to(thumb.origin),
            None => Path::from(RoundedRect::from_corner_size(
                thumb,
                self.thumb_round_rect_size,
            )),
        };

        let (mut outer, mut inner) = (palette.thumb_outer, palette.thumb_inner);
        if self.interaction.captured && self.draw_semitransparent_thumb {
            outer = outer.with_alpha(DRAG_THUMB_ALPHA);
            inner = inner.with_alpha(DRAG_THUMB_ALPHA);
        }

        let gradient_rect = match self.orientation {
            Orientation::Horizontal => thumb,
            Orientation::Vertical => {
                let half_width = (thumb.width() as i32 / 2) as f32;
                Rect::new(thumb.left(), thumb.top(), half_width, thumb.height())
            }
        };
        let fill = Paint::vertical_gradient(gradient_rect, outer, inner);
        renderer.fill_path(&path, &fill, FillRule::NonZero)?;

        let mut pen = palette.thumb_pen;
        if self.mouse_effects
            && (self.interaction.captured || self.interaction.pointer_over_thumb)
        {
            pen = darken_color(pen);
        }

        match &self.thumb_image {
            Some(image) => renderer.draw_image(image, thumb),
            None => renderer.stroke_path(&path, &Stroke::pen(pen)),
        }
    }

    fn paint_focus_indicator(
        &self,
        renderer: &mut dyn Renderer,
        palette: &Palette,
    ) -> RenderResult<()> {
        if !(self.base.has_focus() && self.draw_focus_rectangle) {
            return Ok(());
        }

        let size = self.base.size();
        let rect = Rect::from_pixels(1, 0, size.width as i32 - 2, size.height as i32 - 1);
        let outline = Path::from(RoundedRect::from_corner_size(
            rect,
            self.border_round_rect_size,
        ));
        let stroke = Stroke::pen(palette.elapsed_top.with_alpha(FOCUS_OUTLINE_ALPHA))
            .with_dash(DashPattern::dot());
        renderer.stroke_path(&outline, &stroke)
    }

    fn paint_ticks(&self, renderer: &mut dyn Renderer, layout: &SliderLayout) -> RenderResult<()> {
        let style = self.tick_style;
        if !(style.near() || style.far()) {
            return Ok(());
        }

        let size = self.base.size();
        let (width, height) = (size.width as i32, size.height as i32);
        let bar = PixelRect::from(layout.bar);
        let thumb = PixelRect::from(layout.thumb);

        let (start, usable) = match self.orientation {
            Orientation::Horizontal => (thumb.w / 2, bar.w - thumb.w),
            Orientation::Vertical => (thumb.h / 2, bar.h - thumb.h),
        };
        let ticks = scale::compute_ticks(
            self.scale_divisions,
            self.scale_subdivisions,
            self.range,
            usable,
            self.orientation,
        );

        let color = self.tick_color;
        let widest = renderer.measure_text(&self.range.maximum().to_string(), LABEL_FONT_SIZE);
        let mut start_div = 0;

        for tick in &ticks {
            if !tick.is_major && !self.show_small_scale {
                continue;
            }
            let length = if tick.is_major {
                MAJOR_TICK_LENGTH
            } else {
                MINOR_TICK_LENGTH
            };

            match self.orientation {
                Orientation::Horizontal => {
                    let x = start + bar.x + tick.position;

                    if let Some(label) = tick.label.as_deref()
                        && self.show_divisions_text
                    {
                        let text = renderer.measure_text(label, LABEL_FONT_SIZE);
                        let tx = x as f32 - text.width * 0.5;
                        if style.near() {
                            renderer.draw_text(label, Point::new(tx, 0.0), LABEL_FONT_SIZE, color)?;
                        }
                        if style.far() {
                            let ty = height as f32 - text.height + 3.0;
                            renderer.draw_text(label, Point::new(tx, ty), LABEL_FONT_SIZE, color)?;
                        }
                        start_div = text.height as i32;
                    }

                    if style.near() {
                        line(renderer, (x, start_div), (x, start_div + length), color)?;
                    }
                    if style.far() {
                        line(
                            renderer,
                            (x, height - start_div),
                            (x, height - length - start_div),
                            color,
                        )?;
                    }
                }
                Orientation::Vertical => {
                    let y = start + bar.y + tick.position;

                    if let Some(label) = tick.label.as_deref()
                        && self.show_divisions_text
                    {
                        let text = renderer.measure_text(label, LABEL_FONT_SIZE);
                        let ty = y as f32 - text.height * 0.5;
                        if style.near() {
                            let tx = widest.width / 2.0 - text.width / 2.0;
                            renderer.draw_text(label, Point::new(tx, ty), LABEL_FONT_SIZE, color)?;
                        }
                        if style.far() {
                            let tx = width as f32 - widest.width / 2.0 - text.width / 2.0;
                            renderer.draw_text(label, Point::new(tx, ty), LABEL_FONT_SIZE, color)?;
                        }
                        start_div = widest.width as i32 + 3;
                    }

                    if style.near() {
                        line(renderer, (start_div, y), (start_div + length, y), color)?;
                    }
                    if style.far() {
                        line(
                            renderer,
                            (width - start_div, y),
                            (width - length - start_div, y),
                            color,
                        )?;
                    }
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use colorslider_render::{DisplayList, DrawCommand};

    use super::*;
    use crate::color_slider::TickStyle;
    use crate::widget::{PaintContext, Widget};

    fn render(slider: &ColorSlider) -> Vec<DrawCommand> {
        let mut list = DisplayList::new();
        let rect = slider.rect();
        slider.paint(&mut PaintContext::new(&mut list, rect));
        list.into_commands()
    }

    fn bare_slider() -> ColorSlider {
        let mut slider = ColorSlider::new();
        slider.set_tick_style(TickStyle::None);
        slider.set_background_color(None);
        slider
    }

    #[test]
    fn test_bare_frame_sequence() {
        let commands = render(&bare_slider());
        let kinds: Vec<_> = commands.iter().map(DrawCommand::kind).collect();
        assert_eq!(
            kinds,
            [
                "line", "line", "line", "line", "line", "line", "line", "line", "fill_path",
                "stroke_path"
            ]
        );
    }

    #[test]
    fn test_horizontal_bar_lines() {
        let commands = render(&bare_slider());
        // bar = (1, 16, 198, 16), elapsed = 55 + 8 = 63, cy = 24
        let expected = [
            ((1.0, 24.0), (199.0, 24.0)),
            ((1.0, 24.0), (64.0, 24.0)),
            ((1.0, 23.0), (64.0, 23.0)),
            ((1.0, 25.0), (64.0, 25.0)),
            ((64.0, 23.0), (199.0, 23.0)),
            ((64.0, 25.0), (199.0, 25.0)),
            ((1.0, 23.0), (1.0, 25.0)),
            ((199.0, 23.0), (199.0, 25.0)),
        ];
        for (command, (from, to)) in commands.iter().zip(expected) {
            match command {
                DrawCommand::Line { from: f, to: t, .. } => {
                    assert_eq!((f.x, f.y), from);
                    assert_eq!((t.x, t.y), to);
                }
                other => panic!("expected a line, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_disabled_palette_is_gray() {
        let mut slider = bare_slider();
        slider.widget_base_mut().set_enabled(false);
        let palette = slider.active_palette();
        for color in palette.to_array() {
            assert_eq!(color.r, color.g);
            assert_eq!(color.g, color.b);
        }
    }

    #[test]
    fn test_focus_outline_needs_flag_and_focus() {
        let mut slider = bare_slider();
        slider.widget_base_mut().set_focused(true);
        assert_eq!(render(&slider).len(), 10);

        slider.set_draw_focus_rectangle(true);
        let commands = render(&slider);
        assert_eq!(commands.len(), 11);
        match &commands[10] {
            DrawCommand::StrokePath { stroke, .. } => {
                assert!(stroke.is_dashed());
                assert_eq!(
                    stroke.paint.as_solid(),
                    Some(slider.palette().elapsed_top.with_alpha(200))
                );
            }
            other => panic!("expected the focus outline, got {other:?}"),
        }
    }
}

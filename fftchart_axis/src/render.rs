// Copyright 2025 the fftchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis draw command generation.
//!
//! [`AxisRenderer::render`] walks the tick list of an [`AxisModel`] once and
//! produces an [`AxisScene`]: one gridline per visible tick plus, where it
//! does not collide with the previously drawn one, a label. Rasterizing the
//! commands is left to the caller's drawing backend.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use fftchart_text::{HeuristicTextMeasurer, TextMeasurer, TextStyle};
use kurbo::{Insets, Line, Point, Rect, Size};
use peniko::Brush;
use peniko::color::palette::css;

use crate::format::format_tick;
use crate::model::{AxisDirection, AxisModel};

/// Ticks this close outside the plot rectangle still count as inside.
const CULL_TOLERANCE: f64 = 1.0e-9;

/// A paint + width pair for stroked lines.
#[derive(Clone, Debug, PartialEq)]
pub struct StrokeStyle {
    /// Stroke paint.
    pub brush: Brush,
    /// Stroke width in pixels.
    pub stroke_width: f64,
}

impl StrokeStyle {
    /// Convenience for a solid stroke.
    pub fn solid(brush: impl Into<Brush>, stroke_width: f64) -> Self {
        Self {
            brush: brush.into(),
            stroke_width,
        }
    }
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self::solid(css::BLACK.with_alpha(0.1), 1.0)
    }
}

/// How large a label's bounding box is.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LabelBox {
    /// Every label reserves the same box; no text measurement happens.
    Fixed(Size),
    /// The box is the measured text extent grown by `pad` on every side.
    ///
    /// Measured with the measurer passed to [`AxisRenderer::render`], or with
    /// [`HeuristicTextMeasurer`] when none is given.
    Measured {
        /// Extra space around the measured text.
        pad: f64,
    },
}

impl Default for LabelBox {
    fn default() -> Self {
        Self::Fixed(Size::new(50.0, 20.0))
    }
}

/// Axis styling defaults.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisStyle {
    /// Gridline stroke.
    pub grid: StrokeStyle,
    /// Label text paint.
    pub label_fill: Brush,
    /// Pen width used for label text.
    pub label_stroke_width: f64,
    /// Label font.
    pub label_font: TextStyle,
    /// Horizontal gap between a vertical axis' labels and the plot edge.
    pub label_gap: f64,
    /// Label box sizing.
    pub label_box: LabelBox,
}

impl Default for AxisStyle {
    fn default() -> Self {
        Self {
            grid: StrokeStyle::default(),
            label_fill: Brush::Solid(css::BLACK),
            label_stroke_width: 2.0,
            label_font: TextStyle::new(10.0),
            label_gap: 5.0,
            label_box: LabelBox::default(),
        }
    }
}

impl AxisStyle {
    /// Set the gridline stroke.
    pub fn with_grid(mut self, grid: StrokeStyle) -> Self {
        self.grid = grid;
        self
    }

    /// Set the label paint.
    pub fn with_label_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.label_fill = fill.into();
        self
    }

    /// Set the label font.
    pub fn with_label_font(mut self, font: TextStyle) -> Self {
        self.label_font = font;
        self
    }

    /// Set the gap between vertical-axis labels and the plot edge.
    pub fn with_label_gap(mut self, gap: f64) -> Self {
        self.label_gap = gap;
        self
    }

    /// Set the label box sizing policy.
    pub fn with_label_box(mut self, label_box: LabelBox) -> Self {
        self.label_box = label_box;
        self
    }
}

/// Where label text sits inside its box.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LabelAlign {
    /// Top edge, horizontally centred (horizontal axes).
    TopCenter,
    /// Right edge, vertically centred (vertical axes).
    MiddleRight,
}

/// A label to draw.
#[derive(Clone, Debug, PartialEq)]
pub struct LabelCommand {
    /// Label text, already multiplied by the unit scale and formatted.
    pub text: String,
    /// Box the text is laid out in.
    pub bounds: Rect,
    /// Text alignment within `bounds`.
    pub align: LabelAlign,
}

/// One visible tick: its gridline and, unless suppressed, its label.
#[derive(Clone, Debug, PartialEq)]
pub struct DrawCommand {
    /// Tick value in data-domain units.
    pub value: f64,
    /// Gridline from the axis edge of the plot to the opposite edge.
    pub line: Line,
    /// Label, or `None` when it would overlap the previous label.
    pub label: Option<LabelCommand>,
}

/// Output of one render pass.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AxisScene {
    /// Commands in tick order.
    pub commands: Vec<DrawCommand>,
}

impl AxisScene {
    /// Iterates over all gridlines.
    pub fn lines(&self) -> impl Iterator<Item = Line> + '_ {
        self.commands.iter().map(|c| c.line)
    }

    /// Iterates over the labels that survived overlap suppression.
    pub fn labels(&self) -> impl Iterator<Item = &LabelCommand> + '_ {
        self.commands.iter().filter_map(|c| c.label.as_ref())
    }
}

/// Geometry shared by every tick of one pass.
#[derive(Clone, Copy, Debug)]
struct Frame {
    direction: AxisDirection,
    size: Size,
    padding: Insets,
    plot: Rect,
    length: f64,
    /// Gap between neighbouring ticks in displayed units, 0 when unknown.
    label_step: f64,
}

/// Fold state: emitted commands and the last label actually drawn.
#[derive(Debug, Default)]
struct Pass {
    commands: Vec<DrawCommand>,
    last_label: Option<Rect>,
}

/// Turns an [`AxisModel`] into draw commands.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AxisRenderer {
    /// Styling applied to every command.
    pub style: AxisStyle,
}

impl AxisRenderer {
    /// Creates a renderer with the given style.
    pub fn new(style: AxisStyle) -> Self {
        Self { style }
    }

    /// Generates the draw commands for the model's current ticks and size.
    ///
    /// Ticks outside the logarithmic domain and ticks outside the padded plot
    /// rectangle are skipped. A label overlapping the previously drawn label is
    /// dropped while its gridline is kept.
    ///
    /// `measurer` is only consulted for [`LabelBox::Measured`] boxes.
    pub fn render(&self, model: &AxisModel, measurer: Option<&dyn TextMeasurer>) -> AxisScene {
        let measurer = measurer.unwrap_or(&HeuristicTextMeasurer);
        let frame = Frame {
            direction: model.direction(),
            size: model.size(),
            padding: model.padding(),
            plot: model.plot_rect(),
            length: model.axis_length(),
            label_step: tick_step(model.ticks()) * model.unit_scale().abs(),
        };
        let pass = model
            .ticks()
            .iter()
            .copied()
            .fold(Pass::default(), |pass, value| {
                self.place_tick(model, &frame, measurer, pass, value)
            });
        tracing::trace!(
            ticks = model.ticks().len(),
            drawn = pass.commands.len(),
            "axis rendered"
        );
        AxisScene {
            commands: pass.commands,
        }
    }

    fn place_tick(
        &self,
        model: &AxisModel,
        frame: &Frame,
        measurer: &dyn TextMeasurer,
        mut pass: Pass,
        value: f64,
    ) -> Pass {
        let t = match model.value_to_coord(value, frame.length) {
            Ok(t) => t,
            Err(err) => {
                tracing::debug!(value, error = %err, "skipping tick");
                return pass;
            }
        };

        let (p1, p2) = gridline(frame, t);
        if !contains(frame.plot, p1) || !contains(frame.plot, p2) {
            return pass;
        }

        let text = format_tick(value * model.unit_scale(), frame.label_step);
        let size = self.label_size(&text, measurer);
        let (bounds, align) = match frame.direction {
            AxisDirection::Horizontal => (
                Rect::from_origin_size((p1.x - 0.5 * size.width, p1.y), size),
                LabelAlign::TopCenter,
            ),
            AxisDirection::Vertical => (
                Rect::from_origin_size(
                    (
                        p1.x - size.width - self.style.label_gap,
                        p1.y - 0.5 * size.height,
                    ),
                    size,
                ),
                LabelAlign::MiddleRight,
            ),
        };

        let label = if pass.last_label.is_none_or(|last| !overlaps(last, bounds)) {
            pass.last_label = Some(bounds);
            Some(LabelCommand {
                text,
                bounds,
                align,
            })
        } else {
            tracing::trace!(value, "label overlaps the previous one");
            None
        };

        pass.commands.push(DrawCommand {
            value,
            line: Line::new(p1, p2),
            label,
        });
        pass
    }

    fn label_size(&self, text: &str, measurer: &dyn TextMeasurer) -> Size {
        match self.style.label_box {
            LabelBox::Fixed(size) => size,
            LabelBox::Measured { pad } => {
                let metrics = measurer.measure(text, &self.style.label_font);
                Size::new(
                    metrics.advance_width + 2.0 * pad,
                    metrics.line_height() + 2.0 * pad,
                )
            }
        }
    }
}

/// Smallest positive gap between neighbouring ticks, or 0 with fewer than two distinct ticks.
fn tick_step(ticks: &[f64]) -> f64 {
    let step = ticks
        .windows(2)
        .map(|w| (w[1] - w[0]).abs())
        .filter(|d| *d > 0.0)
        .fold(f64::INFINITY, f64::min);
    if step.is_finite() { step } else { 0.0 }
}

/// Endpoints of the gridline at axis coordinate `t`, axis edge first.
fn gridline(frame: &Frame, t: f64) -> (Point, Point) {
    let Frame { size, padding, .. } = *frame;
    match frame.direction {
        AxisDirection::Horizontal => {
            let x = padding.x0 + t;
            (
                Point::new(x, size.height - padding.y1),
                Point::new(x, padding.y0),
            )
        }
        AxisDirection::Vertical => {
            let y = size.height - padding.y1 - t;
            (
                Point::new(padding.x0, y),
                Point::new(size.width - padding.x1, y),
            )
        }
    }
}

fn contains(rect: Rect, p: Point) -> bool {
    p.x >= rect.x0 - CULL_TOLERANCE
        && p.x <= rect.x1 + CULL_TOLERANCE
        && p.y >= rect.y0 - CULL_TOLERANCE
        && p.y <= rect.y1 + CULL_TOLERANCE
}

fn overlaps(a: Rect, b: Rect) -> bool {
    a.intersect(b).area() > 0.0
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::vec::Vec;

    use super::*;
    use crate::ScaleType;

    fn horizontal(width: f64, min: f64, max: f64, ticks: usize) -> AxisModel {
        let mut axis = AxisModel::horizontal();
        axis.configure(ScaleType::Linear, min, max, ticks, 1.0).unwrap();
        axis.on_resize(width, 100.0);
        axis
    }

    #[test]
    fn horizontal_gridlines_span_the_plot_height() {
        // length = 460 - 60 = 400
        let axis = horizontal(460.0, 0.0, 100.0, 4);
        let scene = AxisRenderer::default().render(&axis, None);
        let xs: Vec<f64> = scene.lines().map(|l| l.p0.x).collect();
        assert_eq!(xs, [50.0, 150.0, 250.0, 350.0, 450.0]);
        for line in scene.lines() {
            assert_eq!(line.p0.y, 80.0);
            assert_eq!(line.p1.y, 10.0);
        }
        assert_eq!(scene.labels().count(), 5);
    }

    #[test]
    fn vertical_gridlines_grow_upward() {
        let mut axis = AxisModel::vertical();
        axis.configure(ScaleType::Linear, 0.0, 100.0, 2, 1.0).unwrap();
        axis.on_resize(300.0, 230.0);
        let scene = AxisRenderer::default().render(&axis, None);
        let ys: Vec<f64> = scene.lines().map(|l| l.p0.y).collect();
        assert_eq!(ys, [210.0, 110.0, 10.0]);

        let first = scene.commands[0].label.as_ref().expect("label");
        assert_eq!(first.align, LabelAlign::MiddleRight);
        assert_eq!(first.bounds, Rect::new(-5.0, 200.0, 45.0, 220.0));
        assert_eq!(scene.commands[0].line.p1.x, 290.0);
    }

    #[test]
    fn overlapping_label_is_dropped_but_gridline_kept() {
        // length = 100, ticks 25 px apart, labels 50 px wide.
        let axis = horizontal(160.0, 0.0, 100.0, 4);
        let scene = AxisRenderer::default().render(&axis, None);
        assert_eq!(scene.commands.len(), 5);
        let drawn: Vec<bool> = scene.commands.iter().map(|c| c.label.is_some()).collect();
        assert_eq!(drawn, [true, false, true, false, true]);
    }

    #[test]
    fn suppression_compares_against_last_drawn_label_only() {
        let mut axis = horizontal(160.0, 0.0, 100.0, 4);
        // 0 and 100 are far apart, 60 overlaps 100 but not 0.
        axis.set_ticks([0.0, 100.0, 60.0]);
        let scene = AxisRenderer::default().render(&axis, None);
        let drawn: Vec<bool> = scene.commands.iter().map(|c| c.label.is_some()).collect();
        assert_eq!(drawn, [true, true, false]);
    }

    #[test]
    fn ticks_outside_the_plot_are_culled() {
        let mut axis = horizontal(460.0, 0.0, 100.0, 4);
        axis.set_max(50.0);
        let scene = AxisRenderer::default().render(&axis, None);
        let values: Vec<f64> = scene.commands.iter().map(|c| c.value).collect();
        assert_eq!(values, [0.0, 25.0, 50.0]);
    }

    #[test]
    fn log_domain_errors_skip_only_that_tick() {
        let mut axis = AxisModel::horizontal();
        axis.set_ticks([0.0, 100.0, -3.0, 1000.0]);
        axis.configure(ScaleType::Logarithmic, 20.0, 20_000.0, 0, 1.0).unwrap();
        axis.on_resize(1060.0, 100.0);
        let scene = AxisRenderer::default().render(&axis, None);
        let values: Vec<f64> = scene.commands.iter().map(|c| c.value).collect();
        assert_eq!(values, [100.0, 1000.0]);
    }

    #[test]
    fn labels_apply_unit_scale_and_short_format() {
        let mut axis = AxisModel::horizontal();
        axis.configure(ScaleType::Linear, 0.0, 4.0, 2, 1000.0).unwrap();
        axis.on_resize(460.0, 100.0);
        let scene = AxisRenderer::default().render(&axis, None);
        let texts: Vec<&str> = scene.labels().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, ["0", "2k", "4k"]);
    }

    #[test]
    fn measured_label_boxes_follow_text_width() {
        let axis = horizontal(460.0, 0.0, 100.0, 4);
        let renderer =
            AxisRenderer::new(AxisStyle::default().with_label_box(LabelBox::Measured { pad: 1.0 }));
        let scene = renderer.render(&axis, Some(&HeuristicTextMeasurer));
        let widths: Vec<f64> = scene.labels().map(|l| l.bounds.width()).collect();
        // "0" is one glyph, "100" three, at 10 px font.
        assert!((widths[0] - 8.0).abs() < 1e-9);
        assert!((widths[4] - 20.0).abs() < 1e-9);
    }

    #[test]
    fn measured_label_boxes_fall_back_to_heuristic_measurer() {
        let axis = horizontal(460.0, 0.0, 100.0, 4);
        let renderer =
            AxisRenderer::new(AxisStyle::default().with_label_box(LabelBox::Measured { pad: 1.0 }));
        let with = renderer.render(&axis, Some(&HeuristicTextMeasurer));
        let without = renderer.render(&axis, None);
        assert_eq!(with, without);
    }

    #[test]
    fn fixed_label_boxes_need_no_measurer() {
        let axis = horizontal(460.0, 0.0, 100.0, 4);
        let scene = AxisRenderer::default().render(&axis, None);
        for label in scene.labels() {
            assert_eq!(label.bounds.size(), Size::new(50.0, 20.0));
        }
    }

    #[test]
    fn fine_steps_keep_labels_distinct() {
        // length = 1000, ticks 250 px apart.
        let axis = horizontal(1060.0, 0.0, 0.004, 4);
        let scene = AxisRenderer::default().render(&axis, None);
        let texts: Vec<&str> = scene.labels().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, ["0", "0.001", "0.002", "0.003", "0.004"]);
    }

    #[test]
    fn fine_steps_on_large_values_keep_full_precision() {
        let axis = horizontal(1060.0, 1000.0, 1010.0, 4);
        let scene = AxisRenderer::default().render(&axis, None);
        let texts: Vec<&str> = scene.labels().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, ["1000", "1002.5", "1005", "1007.5", "1010"]);
    }

    #[test]
    fn small_unit_scale_scales_label_precision() {
        let mut axis = AxisModel::horizontal();
        axis.configure(ScaleType::Linear, 0.0, 4.0, 2, 0.001).unwrap();
        axis.on_resize(460.0, 100.0);
        let scene = AxisRenderer::default().render(&axis, None);
        let texts: Vec<&str> = scene.labels().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, ["0", "0.002", "0.004"]);
    }

    #[test]
    fn tick_step_is_smallest_positive_gap() {
        assert_eq!(tick_step(&[0.0, 12.0, -12.0, 24.0, -24.0]), 12.0);
        assert_eq!(tick_step(&[5.0]), 0.0);
        assert_eq!(tick_step(&[]), 0.0);
    }

    #[test]
    fn zero_size_renders_nothing_visible() {
        let mut axis = AxisModel::horizontal();
        axis.configure(ScaleType::Linear, 0.0, 100.0, 4, 1.0).unwrap();
        let scene = AxisRenderer::default().render(&axis, None);
        assert!(scene.commands.is_empty());
    }
}

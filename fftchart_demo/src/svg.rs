// Copyright 2025 the fftchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal SVG dump of axis draw commands.

use fftchart_axis::{AxisScene, AxisStyle, LabelAlign, LabelCommand};
use kurbo::{Line, Size};
use peniko::Brush;

#[derive(Debug, Default)]
pub(crate) struct SvgScene {
    size: Size,
    lines: Vec<(Line, Brush, f64)>,
    labels: Vec<(LabelCommand, Brush, f64)>,
}

impl SvgScene {
    pub(crate) fn new(size: Size) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    /// Appends one axis' commands. Gridlines are always painted before labels.
    pub(crate) fn push_axis(&mut self, scene: &AxisScene, style: &AxisStyle) {
        for line in scene.lines() {
            self.lines
                .push((line, style.grid.brush.clone(), style.grid.stroke_width));
        }
        for label in scene.labels() {
            self.labels.push((
                label.clone(),
                style.label_fill.clone(),
                style.label_font.font_size,
            ));
        }
    }

    pub(crate) fn to_svg_string(&self) -> String {
        let mut out = String::new();

        out.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg" "#);
        out.push_str(&format!(
            r#"viewBox="0 0 {w} {h}" width="{w}" height="{h}">"#,
            w = self.size.width,
            h = self.size.height,
        ));
        out.push('\n');

        for (line, brush, width) in &self.lines {
            out.push_str(&format!(
                r#"<line x1="{}" y1="{}" x2="{}" y2="{}""#,
                line.p0.x, line.p0.y, line.p1.x, line.p1.y
            ));
            write_paint_attr(&mut out, "stroke", brush);
            out.push_str(&format!(r#" stroke-width="{width}"/>"#));
            out.push('\n');
        }

        for (label, brush, font_size) in &self.labels {
            let b = label.bounds;
            let (x, y, anchor, baseline) = match label.align {
                LabelAlign::TopCenter => (b.center().x, b.y0, "middle", "hanging"),
                LabelAlign::MiddleRight => (b.x1, b.center().y, "end", "middle"),
            };
            out.push_str(&format!(
                r#"<text x="{x}" y="{y}" font-size="{font_size}" text-anchor="{anchor}" dominant-baseline="{baseline}""#
            ));
            write_paint_attr(&mut out, "fill", brush);
            out.push('>');
            out.push_str(&escape_xml(&label.text));
            out.push_str("</text>\n");
        }

        out.push_str("</svg>\n");
        out
    }
}

fn svg_paint(brush: &Brush) -> (String, Option<f64>) {
    match brush {
        Brush::Solid(color) => {
            let rgba = color.to_rgba8();
            let paint = format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b);
            let opacity = if rgba.a == 255 {
                None
            } else {
                Some(f64::from(rgba.a) / 255.0)
            };
            (paint, opacity)
        }
        _ => ("none".to_string(), None),
    }
}

fn write_paint_attr(out: &mut String, name: &str, brush: &Brush) {
    let (value, opacity) = svg_paint(brush);
    out.push_str(&format!(r#" {name}="{value}""#));
    if let Some(o) = opacity {
        out.push_str(&format!(r#" {name}-opacity="{o}""#));
    }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use fftchart_axis::{AxisModel, AxisRenderer, ScaleType};

    use super::*;

    #[test]
    fn svg_contains_one_element_per_command() {
        let mut axis = AxisModel::horizontal();
        axis.configure(ScaleType::Linear, 0.0, 100.0, 4, 1.0).unwrap();
        axis.on_resize(460.0, 100.0);
        let renderer = AxisRenderer::default();
        let scene = renderer.render(&axis, None);

        let mut svg = SvgScene::new(axis.size());
        svg.push_axis(&scene, &renderer.style);
        let out = svg.to_svg_string();

        assert_eq!(out.matches("<line ").count(), 5);
        assert_eq!(out.matches("<text ").count(), 5);
        assert!(out.contains(">100</text>"));
        assert!(out.contains(r#"stroke-opacity="#));
    }

    #[test]
    fn label_text_is_escaped() {
        assert_eq!(escape_xml("<1k & up>"), "&lt;1k &amp; up&gt;");
    }
}

// Copyright 2025 the fftchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text measurement hooks for axis label placement.
//!
//! The axis renderer decides whether two tick labels collide by comparing their
//! bounding boxes. Glyph shaping stays with whatever backend finally draws the
//! text, so the renderer only depends on the tiny [`TextMeasurer`] interface
//! defined here.
//!
//! [`HeuristicTextMeasurer`] estimates the box from the character count and is
//! used whenever no backend measurer is supplied.

#![no_std]

/// A minimal text measurement interface used by the axis renderer.
pub trait TextMeasurer {
    /// Measure a single line of text.
    ///
    /// `text` is treated as a single line; tick labels never wrap.
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics;
}

/// Text styling inputs relevant to measurement.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    /// Font size in pixels.
    pub font_size: f64,
    /// Generic font family.
    pub font_family: FontFamily,
}

impl TextStyle {
    /// Creates a sans-serif `TextStyle` with the given `font_size`.
    #[must_use]
    pub fn new(font_size: f64) -> Self {
        Self {
            font_size,
            font_family: FontFamily::SansSerif,
        }
    }

    /// Sets the font family.
    #[must_use]
    pub fn with_family(mut self, font_family: FontFamily) -> Self {
        self.font_family = font_family;
        self
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self::new(12.0)
    }
}

/// Generic font family selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FontFamily {
    /// A generic sans-serif family (CSS `sans-serif`).
    SansSerif,
    /// A generic monospace family (CSS `monospace`).
    Monospace,
}

impl FontFamily {
    /// Returns the font family string for CSS-style font declarations.
    #[must_use]
    pub fn as_css_family(&self) -> &'static str {
        match self {
            Self::SansSerif => "sans-serif",
            Self::Monospace => "monospace",
        }
    }

    /// Average glyph advance as a fraction of the font size.
    fn average_advance(self) -> f64 {
        match self {
            Self::SansSerif => 0.6,
            Self::Monospace => 0.62,
        }
    }
}

/// Measured metrics for a single line of text.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextMetrics {
    /// The advance width.
    pub advance_width: f64,
    /// Distance from baseline to the top of typical glyphs.
    pub ascent: f64,
    /// Distance from baseline to the bottom of typical glyphs.
    pub descent: f64,
}

impl TextMetrics {
    /// Returns `ascent + descent`.
    #[must_use]
    pub fn line_height(&self) -> f64 {
        self.ascent + self.descent
    }
}

/// A tiny heuristic text measurer.
///
/// It assumes an average glyph width of ~0.6em and a baseline at ~0.8em.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeuristicTextMeasurer;

impl TextMeasurer for HeuristicTextMeasurer {
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics {
        let glyphs = text.chars().count() as f64;
        TextMetrics {
            advance_width: style.font_family.average_advance() * style.font_size * glyphs,
            ascent: 0.8 * style.font_size,
            descent: 0.2 * style.font_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heuristic_width_grows_with_text() {
        let m = HeuristicTextMeasurer;
        let style = TextStyle::new(10.0);
        let short = m.measure("5", &style);
        let long = m.measure("31.5", &style);
        assert!(long.advance_width > short.advance_width);
        assert!((short.line_height() - 10.0).abs() < 1e-9);
    }
}

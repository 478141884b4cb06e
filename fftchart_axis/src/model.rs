// Copyright 2025 the fftchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis range state and value/coordinate conversion.
//!
//! An [`AxisModel`] is owned by a single chart view. The view feeds it size
//! changes through [`AxisModel::on_resize`], reconfigures it with
//! [`AxisModel::configure`] or the interactive [`AxisModel::set_min`] /
//! [`AxisModel::set_max`] pair, and listens for [`RepaintReason`]s to schedule
//! its next paint.

extern crate alloc;

use alloc::boxed::Box;
use alloc::vec::Vec;

use kurbo::{Insets, Rect, Size};

use crate::labels::{ISO_LABELS, TickValues, auto_labels};
use crate::scale::{ScaleMapping, ScaleType};
use crate::AxisError;

/// Padding used when none is given: 50 px left, 10 px top, 10 px right, 20 px bottom.
pub const DEFAULT_PADDING: Insets = Insets {
    x0: 50.0,
    y0: 10.0,
    x1: 10.0,
    y1: 20.0,
};

/// Axis direction, fixed at construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AxisDirection {
    /// Values grow left to right; gridlines are vertical.
    Horizontal,
    /// Values grow bottom to top; gridlines are horizontal.
    Vertical,
}

/// Why an axis asked its owner for a repaint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RepaintReason {
    /// [`AxisModel::configure`] succeeded.
    Configured,
    /// `min` or `max` was edited.
    RangeChanged,
    /// The tick list was replaced.
    TicksChanged,
    /// The owning container changed size.
    Resized,
}

type RepaintListener = Box<dyn FnMut(RepaintReason)>;

/// Range, scale and tick state of a single chart axis.
pub struct AxisModel {
    direction: AxisDirection,
    scale_type: ScaleType,
    min: f64,
    max: f64,
    low_limit: f64,
    high_limit: f64,
    unit_scale: f64,
    ticks: TickValues,
    size: Size,
    padding: Insets,
    dirty: bool,
    listeners: Vec<RepaintListener>,
}

impl core::fmt::Debug for AxisModel {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AxisModel")
            .field("direction", &self.direction)
            .field("scale_type", &self.scale_type)
            .field("min", &self.min)
            .field("max", &self.max)
            .field("low_limit", &self.low_limit)
            .field("high_limit", &self.high_limit)
            .field("unit_scale", &self.unit_scale)
            .field("ticks", &self.ticks)
            .field("size", &self.size)
            .field("padding", &self.padding)
            .field("dirty", &self.dirty)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl AxisModel {
    /// Creates an axis over `[0, 1]` with a linear scale, no ticks and
    /// [`DEFAULT_PADDING`].
    pub fn new(direction: AxisDirection) -> Self {
        Self {
            direction,
            scale_type: ScaleType::Linear,
            min: 0.0,
            max: 1.0,
            low_limit: 0.0,
            high_limit: 1.0,
            unit_scale: 1.0,
            ticks: TickValues::new(),
            size: Size::ZERO,
            padding: DEFAULT_PADDING,
            dirty: true,
            listeners: Vec::new(),
        }
    }

    /// Convenience constructor for a horizontal axis.
    pub fn horizontal() -> Self {
        Self::new(AxisDirection::Horizontal)
    }

    /// Convenience constructor for a vertical axis.
    pub fn vertical() -> Self {
        Self::new(AxisDirection::Vertical)
    }

    /// Sets the padding reserved around the drawable area.
    pub fn with_padding(mut self, padding: Insets) -> Self {
        self.padding = padding;
        self
    }

    /// Reconfigures the axis.
    ///
    /// `[min, max]` becomes both the visible range and the hard limits for later
    /// [`set_min`](Self::set_min) / [`set_max`](Self::set_max) calls; a reversed
    /// pair is reordered. For [`ScaleType::Linear`] the tick list is regenerated
    /// from `tick_count`; for [`ScaleType::Logarithmic`] it is kept as is.
    ///
    /// Everything is validated first, so on error the axis is unchanged.
    pub fn configure(
        &mut self,
        scale_type: ScaleType,
        min: f64,
        max: f64,
        tick_count: usize,
        unit_scale: f64,
    ) -> Result<(), AxisError> {
        if !min.is_finite() || !max.is_finite() || !unit_scale.is_finite() {
            return Err(AxisError::NonFinite);
        }
        let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
        if scale_type == ScaleType::Logarithmic && lo <= 0.0 {
            return Err(AxisError::Domain { value: lo });
        }
        let ticks = match scale_type {
            ScaleType::Linear => Some(auto_labels(lo, hi, tick_count)?),
            ScaleType::Logarithmic => None,
        };

        self.scale_type = scale_type;
        self.low_limit = lo;
        self.high_limit = hi;
        self.min = lo;
        self.max = hi;
        self.unit_scale = unit_scale;
        if let Some(ticks) = ticks {
            self.ticks = ticks;
        }
        self.request_repaint(RepaintReason::Configured);
        Ok(())
    }

    /// Sets the visible minimum, clamped into `[low_limit, max]`.
    ///
    /// NaN is ignored.
    pub fn set_min(&mut self, v: f64) {
        if v.is_nan() {
            return;
        }
        self.min = v.min(self.max).max(self.low_limit);
        self.request_repaint(RepaintReason::RangeChanged);
    }

    /// Sets the visible maximum, clamped into `[min, high_limit]`.
    ///
    /// NaN is ignored.
    pub fn set_max(&mut self, v: f64) {
        if v.is_nan() {
            return;
        }
        self.max = v.max(self.min).min(self.high_limit);
        self.request_repaint(RepaintReason::RangeChanged);
    }

    /// Replaces the tick list with caller-supplied values.
    pub fn set_ticks(&mut self, ticks: impl IntoIterator<Item = f64>) {
        self.ticks = ticks.into_iter().collect();
        self.request_repaint(RepaintReason::TicksChanged);
    }

    /// Uses the one-third-octave [`ISO_LABELS`] as ticks.
    pub fn use_iso_ticks(&mut self) {
        self.set_ticks(ISO_LABELS);
    }

    /// Stores the new size of the owning container.
    ///
    /// Geometry is not recomputed here; the next render reads the size back.
    pub fn on_resize(&mut self, width: f64, height: f64) {
        self.size = Size::new(width.max(0.0), height.max(0.0));
        self.request_repaint(RepaintReason::Resized);
    }

    /// Registers a repaint listener.
    ///
    /// Listeners are invoked in registration order every time the axis state
    /// changes.
    pub fn on_repaint(&mut self, listener: impl FnMut(RepaintReason) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    fn request_repaint(&mut self, reason: RepaintReason) {
        self.dirty = true;
        for listener in &mut self.listeners {
            listener(reason);
        }
    }

    /// Whether state changed since the last [`clear_dirty`](Self::clear_dirty).
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Marks the current state as painted.
    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }

    /// Returns the scale for the current range.
    pub fn scale(&self) -> ScaleMapping {
        ScaleMapping::new(self.scale_type, self.min, self.max)
    }

    /// Maps `value` onto `[0, length]`.
    ///
    /// Fails with [`AxisError::Domain`] for non-positive values on a log axis.
    pub fn value_to_coord(&self, value: f64, length: f64) -> Result<f64, AxisError> {
        self.scale().map(value, length)
    }

    /// Maps a coordinate in `[0, length]` back to a value. Never fails.
    pub fn coord_to_value(&self, coord: f64, length: f64) -> f64 {
        self.scale().invert(coord, length)
    }

    /// Usable axis length in pixels: the size along the axis minus padding on both ends.
    pub fn axis_length(&self) -> f64 {
        let length = match self.direction {
            AxisDirection::Horizontal => self.size.width - self.padding.x0 - self.padding.x1,
            AxisDirection::Vertical => self.size.height - self.padding.y0 - self.padding.y1,
        };
        length.max(0.0)
    }

    /// The padded drawable rectangle in item coordinates (y grows downward).
    pub fn plot_rect(&self) -> Rect {
        Rect::new(
            self.padding.x0,
            self.padding.y0,
            self.size.width - self.padding.x1,
            self.size.height - self.padding.y1,
        )
    }

    /// Converts a raw item coordinate (x for horizontal, y for vertical axes)
    /// to a displayed value, including the unit scale.
    pub fn screen_to_value(&self, raw: f64) -> f64 {
        let coord = match self.direction {
            AxisDirection::Horizontal => raw - self.padding.x0,
            AxisDirection::Vertical => self.size.height - raw - self.padding.y1,
        };
        self.coord_to_value(coord, self.axis_length()) * self.unit_scale
    }

    /// Axis direction.
    pub fn direction(&self) -> AxisDirection {
        self.direction
    }

    /// Scale family.
    pub fn scale_type(&self) -> ScaleType {
        self.scale_type
    }

    /// Visible minimum.
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Visible maximum.
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Hard lower bound for [`set_min`](Self::set_min).
    pub fn low_limit(&self) -> f64 {
        self.low_limit
    }

    /// Hard upper bound for [`set_max`](Self::set_max).
    pub fn high_limit(&self) -> f64 {
        self.high_limit
    }

    /// Display-only multiplier applied to label text.
    pub fn unit_scale(&self) -> f64 {
        self.unit_scale
    }

    /// Current tick values, in emission order.
    pub fn ticks(&self) -> &[f64] {
        &self.ticks
    }

    /// Last size reported through [`on_resize`](Self::on_resize).
    pub fn size(&self) -> Size {
        self.size
    }

    /// Padding around the drawable area.
    pub fn padding(&self) -> Insets {
        self.padding
    }
}

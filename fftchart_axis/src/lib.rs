// Copyright 2025 the fftchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart axis coordinate engine.
//!
//! This crate maps between a data domain and pixel coordinates for a single
//! chart axis and decides what the axis should draw:
//! - **[`AxisModel`]** holds the visible range, its hard limits, the scale
//!   family, the unit scale and the tick list, and converts values to
//!   coordinates and back.
//! - **Tick planning** ([`auto_labels`]) lays ticks out symmetrically around
//!   zero or in uniform steps; [`ISO_LABELS`] is the usual preset for
//!   logarithmic frequency axes.
//! - **[`AxisRenderer`]** turns a model into gridline and label commands,
//!   culling ticks outside the plot and dropping labels that would overlap the
//!   previously drawn one.
//!
//! Rasterization is out of scope; the output is plain `kurbo` geometry plus
//! label strings.

#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod error;
#[cfg(not(feature = "std"))]
mod float;
mod format;
mod labels;
mod model;
mod render;
mod scale;

pub use error::AxisError;
pub use format::format_tick;
pub use labels::{ISO_LABELS, TickPolicy, TickValues, auto_labels, policy_for};
pub use model::{AxisDirection, AxisModel, DEFAULT_PADDING, RepaintReason};
pub use render::{
    AxisRenderer, AxisScene, AxisStyle, DrawCommand, LabelAlign, LabelBox, LabelCommand,
    StrokeStyle,
};
pub use scale::{ScaleLinear, ScaleLog, ScaleMapping, ScaleType};

pub use fftchart_text::{FontFamily, HeuristicTextMeasurer, TextMeasurer, TextMetrics, TextStyle};

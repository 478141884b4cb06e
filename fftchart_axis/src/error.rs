// Copyright 2025 the fftchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis error type.

use thiserror::Error;

/// Errors reported by axis configuration and coordinate conversion.
///
/// None of these are fatal: the renderer treats [`AxisError::Domain`] as "skip
/// this tick", and a failed [`crate::AxisModel::configure`] leaves the model as
/// it was.
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum AxisError {
    /// The logarithm of a zero or negative value was requested.
    #[error("value {value} is outside the logarithmic domain (must be > 0)")]
    Domain {
        /// The offending value.
        value: f64,
    },
    /// The tick planner was asked for fewer ticks than its policy needs.
    #[error("tick count {requested} is too small, at least {minimum} required")]
    TickCount {
        /// Tick count passed by the caller.
        requested: usize,
        /// Smallest tick count the selected policy accepts.
        minimum: usize,
    },
    /// A range bound or the unit scale was NaN or infinite.
    #[error("axis range and unit scale must be finite")]
    NonFinite,
}

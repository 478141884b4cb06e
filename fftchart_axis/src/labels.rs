// Copyright 2025 the fftchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tick value planning.
//!
//! Two policies are supported:
//! - **Symmetric**: when zero sits well inside the range, ticks are laid out as
//!   `0, +step, -step, +2*step, -2*step, ...` so the grid is balanced around zero.
//! - **Uniform**: otherwise, `tick_count` equal intervals from `min` to `max`.
//!
//! Logarithmic frequency axes usually skip planning and use [`ISO_LABELS`].

use smallvec::SmallVec;

use crate::AxisError;

/// Tick values in data-domain units, in emission order (not necessarily sorted).
pub type TickValues = SmallVec<[f64; 16]>;

/// Standard one-third-octave band centre frequencies used as frequency axis ticks, in Hz.
pub const ISO_LABELS: [f64; 10] = [
    31.5, 63.0, 125.0, 250.0, 500.0, 1000.0, 2000.0, 4000.0, 8000.0, 16000.0,
];

/// Which layout [`auto_labels`] picks for a range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TickPolicy {
    /// Pairs of ticks mirrored around zero.
    Symmetric,
    /// Equal steps from `min` to `max`, both inclusive.
    Uniform,
}

impl TickPolicy {
    /// Smallest tick count this policy accepts.
    pub fn minimum_ticks(self) -> usize {
        match self {
            Self::Symmetric => 2,
            Self::Uniform => 1,
        }
    }
}

/// Returns the policy [`auto_labels`] uses for `(min, max)`.
///
/// The range is treated as symmetric when the magnitude of its midpoint sum is
/// smaller than its largest extreme, i.e. zero falls strictly inside it.
pub fn policy_for(min: f64, max: f64) -> TickPolicy {
    if (min + max).abs() < min.abs().max(max.abs()) {
        TickPolicy::Symmetric
    } else {
        TickPolicy::Uniform
    }
}

/// Generates tick values for `(min, max)`.
///
/// Fails with [`AxisError::TickCount`] when `tick_count` is below
/// [`TickPolicy::minimum_ticks`] for the selected policy.
pub fn auto_labels(min: f64, max: f64, tick_count: usize) -> Result<TickValues, AxisError> {
    let policy = policy_for(min, max);
    let minimum = policy.minimum_ticks();
    if tick_count < minimum {
        return Err(AxisError::TickCount {
            requested: tick_count,
            minimum,
        });
    }

    let mut out = TickValues::new();
    match policy {
        TickPolicy::Symmetric => {
            // Zero takes one slot; the rest are spent in +/- pairs.
            let slots = tick_count - 1;
            let step = 2.0 * min.abs().max(max.abs()) / slots as f64;
            out.push(0.0);
            for i in 1..=slots / 2 {
                let v = step * i as f64;
                out.push(v);
                out.push(-v);
            }
        }
        TickPolicy::Uniform => {
            let step = (max - min).abs() / tick_count as f64;
            out.extend((0..=tick_count).map(|i| min + step * i as f64));
        }
    }
    Ok(out)
}

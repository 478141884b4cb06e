// Copyright 2025 the fftchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Short tick label text.

extern crate alloc;

use alloc::format;
use alloc::string::String;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// Decimals used when the tick step is unknown.
const DEFAULT_DECIMALS: i32 = 2;
/// Upper bound on the decimals derived from a tick step.
const MAX_DECIMALS: i32 = 12;
/// Smallest step for which values of 1000 and above switch to the `k` suffix.
const KILO_MIN_STEP: f64 = 10.0;

/// Formats a tick value as short label text, with a precision fitted to `step`.
///
/// `step` is the distance between neighbouring ticks in displayed units; zero or
/// a non-finite step means "unknown" and falls back to two decimals. The number
/// of decimals is the count needed to resolve `step` plus one (so steps like
/// `2.5` or `31.5` keep their fraction), and trailing zeros are dropped.
///
/// Values of 1000 and above use a `k` suffix (`16000` -> `16k`) unless the step
/// is finer than 10, where the suffix would hide the difference between ticks.
pub fn format_tick(value: f64, step: f64) -> String {
    if !value.is_finite() {
        return format!("{value}");
    }
    let step = step.abs();
    let known = step.is_finite() && step > 0.0;
    let decimals = |step: f64| {
        if known {
            decimals_for(step)
        } else {
            DEFAULT_DECIMALS
        }
    };

    let plain = round_to(value, decimals(step));
    if plain.abs() >= 1000.0 && (!known || step >= KILO_MIN_STEP) {
        return format!("{}k", round_to(value / 1000.0, decimals(step / 1000.0)));
    }
    format!("{plain}")
}

fn decimals_for(step: f64) -> i32 {
    let d = (-step.log10())
        .ceil()
        .clamp(0.0, f64::from(MAX_DECIMALS - 1));
    #[allow(
        clippy::cast_possible_truncation,
        reason = "clamped to a small non-negative range"
    )]
    {
        d as i32 + 1
    }
}

fn round_to(v: f64, decimals: i32) -> f64 {
    let scale = 10_f64.powi(decimals);
    // `+ 0.0` folds `-0.0` into `0.0` so it never prints as "-0".
    (v * scale).round() / scale + 0.0
}

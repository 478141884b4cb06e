// Copyright 2025 the fftchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Linear and logarithmic value/coordinate mappings.
//!
//! A scale maps a data domain `(min, max)` onto `[0, length]` pixels measured
//! from the axis origin. Both directions are provided: [`ScaleMapping::map`]
//! can fail on the logarithmic domain, [`ScaleMapping::invert`] never does.

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use crate::AxisError;

/// The mapping family between data values and pixel coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ScaleType {
    /// Affine mapping.
    #[default]
    Linear,
    /// Natural-log mapping; the domain must be strictly positive.
    Logarithmic,
}

/// An affine mapping from `domain` onto `[0, length]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleLinear {
    domain: (f64, f64),
}

impl ScaleLinear {
    /// Creates a new linear scale over `domain`.
    pub fn new(domain: (f64, f64)) -> Self {
        Self { domain }
    }

    /// Maps a domain value to a coordinate in `[0, length]`.
    pub fn map(&self, value: f64, length: f64) -> f64 {
        let (d0, d1) = self.domain;
        let denom = d1 - d0;
        if denom == 0.0 {
            return 0.0;
        }
        length * (value - d0) / denom
    }

    /// Maps a coordinate in `[0, length]` back to the domain.
    pub fn invert(&self, coord: f64, length: f64) -> f64 {
        let (d0, d1) = self.domain;
        if length <= 0.0 {
            return d0;
        }
        coord * (d1 - d0) / length + d0
    }
}

/// A natural-log mapping from a positive `domain` onto `[0, length]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleLog {
    domain: (f64, f64),
}

impl ScaleLog {
    /// Creates a new log scale over `domain`.
    ///
    /// The domain is not validated here; [`crate::AxisModel::configure`] rejects
    /// non-positive minimums before a log scale is ever built from them.
    pub fn new(domain: (f64, f64)) -> Self {
        Self { domain }
    }

    fn span(&self) -> f64 {
        let (d0, d1) = self.domain;
        (d1 / d0).ln()
    }

    /// Maps a domain value to a coordinate in `[0, length]`.
    ///
    /// Fails with [`AxisError::Domain`] for `value <= 0`.
    pub fn map(&self, value: f64, length: f64) -> Result<f64, AxisError> {
        if value <= 0.0 || value.is_nan() {
            return Err(AxisError::Domain { value });
        }
        let span = self.span();
        if span == 0.0 || !span.is_finite() {
            return Ok(0.0);
        }
        Ok(length * (value.ln() - self.domain.0.ln()) / span)
    }

    /// Maps a coordinate in `[0, length]` back to the domain.
    pub fn invert(&self, coord: f64, length: f64) -> f64 {
        let d0 = self.domain.0;
        let span = self.span();
        if length <= 0.0 || !span.is_finite() {
            return d0;
        }
        d0 * (coord * span / length).exp()
    }
}

/// A scale instance of either family.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScaleMapping {
    /// Linear scale.
    Linear(ScaleLinear),
    /// Log scale.
    Log(ScaleLog),
}

impl ScaleMapping {
    /// Builds the mapping of the given family over `(min, max)`.
    pub fn new(scale_type: ScaleType, min: f64, max: f64) -> Self {
        match scale_type {
            ScaleType::Linear => Self::Linear(ScaleLinear::new((min, max))),
            ScaleType::Logarithmic => Self::Log(ScaleLog::new((min, max))),
        }
    }

    /// Maps a value into `[0, length]`.
    pub fn map(&self, value: f64, length: f64) -> Result<f64, AxisError> {
        match self {
            Self::Linear(s) => Ok(s.map(value, length)),
            Self::Log(s) => s.map(value, length),
        }
    }

    /// Maps a coordinate in `[0, length]` back into the domain.
    pub fn invert(&self, coord: f64, length: f64) -> f64 {
        match self {
            Self::Linear(s) => s.invert(coord, length),
            Self::Log(s) => s.invert(coord, length),
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn linear_maps_endpoints_to_range() {
        let s = ScaleLinear::new((-10.0, 30.0));
        assert!((s.map(-10.0, 400.0) - 0.0).abs() < 1e-9);
        assert!((s.map(30.0, 400.0) - 400.0).abs() < 1e-9);
        assert!((s.map(10.0, 400.0) - 200.0).abs() < 1e-9);
    }

    #[test]
    fn log_maps_endpoints_to_range() {
        let s = ScaleLog::new((1.0, 100.0));
        assert!((s.map(1.0, 10.0).unwrap() - 0.0).abs() < 1e-9);
        assert!((s.map(100.0, 10.0).unwrap() - 10.0).abs() < 1e-9);
        assert!((s.map(10.0, 10.0).unwrap() - 5.0).abs() < 1e-9);
    }

    #[test]
    fn log_rejects_zero_and_negative_values() {
        let s = ScaleLog::new((20.0, 20_000.0));
        assert_eq!(s.map(0.0, 1000.0), Err(AxisError::Domain { value: 0.0 }));
        assert_eq!(s.map(-5.0, 1000.0), Err(AxisError::Domain { value: -5.0 }));
    }

    #[test]
    fn degenerate_domains_collapse_to_origin() {
        let lin = ScaleLinear::new((5.0, 5.0));
        assert_eq!(lin.map(5.0, 100.0), 0.0);
        let log = ScaleLog::new((5.0, 5.0));
        assert_eq!(log.map(5.0, 100.0), Ok(0.0));
        assert_eq!(log.invert(50.0, 100.0), 5.0);
        assert_eq!(lin.invert(50.0, 0.0), 5.0);
    }

    #[test]
    fn mapping_dispatches_on_scale_type() {
        let lin = ScaleMapping::new(ScaleType::Linear, 0.0, 10.0);
        let log = ScaleMapping::new(ScaleType::Logarithmic, 1.0, 10.0);
        assert!(matches!(lin, ScaleMapping::Linear(_)));
        assert!(matches!(log, ScaleMapping::Log(_)));
        assert!((lin.invert(50.0, 100.0) - 5.0).abs() < 1e-9);
        assert!((log.invert(100.0, 100.0) - 10.0).abs() < 1e-9);
    }
}

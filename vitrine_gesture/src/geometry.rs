// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Small geometric helpers shared by the classifier and the accumulator.

use kurbo::Point;

/// Default distance (in pointer units) below which two contacts count as coincident.
pub const DEFAULT_DISTANCE_EPSILON: f64 = 1e-3;

/// Euclidean distance between two contact positions.
#[must_use]
pub(crate) fn pair_distance(a: Point, b: Point) -> f64 {
    a.distance(b)
}

/// Midpoint of two contact positions.
#[must_use]
pub(crate) fn midpoint(a: Point, b: Point) -> Point {
    a.midpoint(b)
}

/// Clamps `value` into `[min, max]`.
///
/// Unlike [`f64::clamp`] this never panics: a reversed range collapses onto
/// `min`, and a NaN `value` resolves to `min`.
#[must_use]
pub(crate) fn clamp(value: f64, min: f64, max: f64) -> f64 {
    if value.is_nan() || value < min {
        min
    } else if value > max {
        max.max(min)
    } else {
        value
    }
}

/// Scale ratio between a live distance and an origin distance.
///
/// Returns `None` while the origin distance is degenerate (at or below
/// `epsilon`), so callers can hold the current scale instead of dividing by zero.
#[must_use]
pub(crate) fn distance_ratio(current: f64, origin: f64, epsilon: f64) -> Option<f64> {
    if origin <= epsilon || !origin.is_finite() || !current.is_finite() {
        return None;
    }
    Some(current / origin)
}

/// Returns `true` when both coordinates are finite.
#[must_use]
pub(crate) fn is_finite_point(p: Point) -> bool {
    p.x.is_finite() && p.y.is_finite()
}

// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-surface configuration and its presets.

use crate::geometry::DEFAULT_DISTANCE_EPSILON;
use crate::transform::{PanClamp, PinchFocus};

/// Per-surface behavior of a [`GestureEngine`](crate::GestureEngine).
///
/// Values are normalized rather than rejected: reversed zoom limits are
/// swapped, and non-finite or non-positive values fall back to the defaults.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureConfig {
    /// Snap back to rest on every release (feed-style) instead of keeping an
    /// intentional zoom (viewer-style).
    pub elastic: bool,
    /// Lower zoom bound. Also the scale treated as "un-zoomed".
    pub min_scale: f64,
    /// Upper zoom bound.
    pub max_scale: f64,
    /// Scale applied by a double activation on a resting surface.
    pub double_tap_scale: f64,
    /// Origin distance at or below which a pinch is considered degenerate.
    pub distance_epsilon: f64,
    /// Translation policy while pinching.
    pub pinch_focus: PinchFocus,
    /// Translation bounds policy.
    pub pan_clamp: PanClamp,
}

impl GestureConfig {
    /// Default minimum scale.
    pub const DEFAULT_MIN_SCALE: f64 = 1.0;
    /// Default maximum scale.
    pub const DEFAULT_MAX_SCALE: f64 = 5.0;
    /// Default double-activation preset.
    pub const DEFAULT_DOUBLE_TAP_SCALE: f64 = 2.5;

    /// Viewer-style defaults: zoom persists after release.
    #[must_use]
    pub const fn viewer() -> Self {
        Self {
            elastic: false,
            min_scale: Self::DEFAULT_MIN_SCALE,
            max_scale: Self::DEFAULT_MAX_SCALE,
            double_tap_scale: Self::DEFAULT_DOUBLE_TAP_SCALE,
            distance_epsilon: DEFAULT_DISTANCE_EPSILON,
            pinch_focus: PinchFocus::Fixed,
            pan_clamp: PanClamp::None,
        }
    }

    /// Feed-style defaults: every release snaps back to rest.
    #[must_use]
    pub const fn feed() -> Self {
        Self {
            elastic: true,
            ..Self::viewer()
        }
    }

    /// Sets the elastic release policy.
    #[must_use]
    pub fn with_elastic(mut self, elastic: bool) -> Self {
        self.elastic = elastic;
        self
    }

    /// Sets the zoom limits.
    #[must_use]
    pub fn with_scale_limits(mut self, min_scale: f64, max_scale: f64) -> Self {
        self.min_scale = min_scale;
        self.max_scale = max_scale;
        self
    }

    /// Sets the double-activation preset.
    #[must_use]
    pub fn with_double_tap_scale(mut self, scale: f64) -> Self {
        self.double_tap_scale = scale;
        self
    }

    /// Sets the degenerate pinch distance.
    #[must_use]
    pub fn with_distance_epsilon(mut self, epsilon: f64) -> Self {
        self.distance_epsilon = epsilon;
        self
    }

    /// Sets the pinch translation policy.
    #[must_use]
    pub fn with_pinch_focus(mut self, focus: PinchFocus) -> Self {
        self.pinch_focus = focus;
        self
    }

    /// Sets the pan bounds policy.
    #[must_use]
    pub fn with_pan_clamp(mut self, clamp: PanClamp) -> Self {
        self.pan_clamp = clamp;
        self
    }

    /// Returns a copy with every numeric field made usable.
    #[must_use]
    pub fn normalized(self) -> Self {
        let positive_or = |v: f64, fallback: f64| {
            if v.is_finite() && v > 0.0 { v } else { fallback }
        };
        let a = positive_or(self.min_scale, Self::DEFAULT_MIN_SCALE);
        let b = positive_or(self.max_scale, Self::DEFAULT_MAX_SCALE);
        let (min_scale, max_scale) = if a <= b { (a, b) } else { (b, a) };
        let double_tap_scale = positive_or(self.double_tap_scale, Self::DEFAULT_DOUBLE_TAP_SCALE)
            .clamp(min_scale, max_scale);
        let distance_epsilon = if self.distance_epsilon.is_finite() && self.distance_epsilon >= 0.0
        {
            self.distance_epsilon
        } else {
            DEFAULT_DISTANCE_EPSILON
        };
        Self {
            min_scale,
            max_scale,
            double_tap_scale,
            distance_epsilon,
            ..self
        }
    }
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self::viewer()
    }
}

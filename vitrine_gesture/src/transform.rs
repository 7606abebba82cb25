// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The surface transform and the policies that shape it during a gesture.

use kurbo::{Affine, Size, Vec2};

use crate::geometry::clamp;

/// Scale-and-translate transform applied by the host renderer to one surface.
///
/// The host is expected to apply it as `translate(translate_x, translate_y)`
/// followed by `scale(scale)` about its own transform origin, which is what
/// [`Transform::to_affine`] produces.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    /// Uniform zoom factor.
    pub scale: f64,
    /// Horizontal offset in pointer units.
    pub translate_x: f64,
    /// Vertical offset in pointer units.
    pub translate_y: f64,
}

impl Transform {
    /// The canonical un-zoomed, un-panned transform.
    pub const REST: Self = Self {
        scale: 1.0,
        translate_x: 0.0,
        translate_y: 0.0,
    };

    /// Creates a transform from its components.
    #[must_use]
    pub const fn new(scale: f64, translate_x: f64, translate_y: f64) -> Self {
        Self {
            scale,
            translate_x,
            translate_y,
        }
    }

    /// Creates an un-panned transform at `scale`.
    #[must_use]
    pub const fn scaled(scale: f64) -> Self {
        Self::new(scale, 0.0, 0.0)
    }

    /// Translation as a vector.
    #[must_use]
    pub fn translation(&self) -> Vec2 {
        Vec2::new(self.translate_x, self.translate_y)
    }

    /// Returns a copy with the translation replaced.
    #[must_use]
    pub fn with_translation(self, t: Vec2) -> Self {
        Self::new(self.scale, t.x, t.y)
    }

    /// Returns a copy with the scale replaced.
    #[must_use]
    pub fn with_scale(self, scale: f64) -> Self {
        Self::new(scale, self.translate_x, self.translate_y)
    }

    /// Returns `true` for exactly [`Transform::REST`].
    #[must_use]
    pub fn is_at_rest(&self) -> bool {
        *self == Self::REST
    }

    /// Returns `true` when the scale is above the resting scale.
    #[must_use]
    pub fn is_zoomed(&self) -> bool {
        self.scale > Self::REST.scale
    }

    /// The equivalent affine map, `translate * scale`.
    #[must_use]
    pub fn to_affine(&self) -> Affine {
        Affine::translate(self.translation()) * Affine::scale(self.scale)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::REST
    }
}

/// Policy for bounding pan translation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PanClamp {
    /// Translation is unbounded; a zoomed surface may be panned fully off-screen.
    #[default]
    None,
    /// Keep the scaled surface covering its own frame.
    ///
    /// With a centered transform origin, each axis is limited to
    /// `extent * (scale - 1) / 2`. Needs a surface size; without one this
    /// behaves like [`PanClamp::None`].
    ContentEdges,
}

/// Policy for translation while pinching.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PinchFocus {
    /// Translation is held at its value from the start of the pinch.
    ///
    /// Zooming does not happen "around" the finger midpoint.
    #[default]
    Fixed,
    /// Keep the content under the initial finger midpoint beneath the live
    /// midpoint, so the surface zooms around and follows the fingers.
    Midpoint,
}

/// Limits translation so the scaled surface still covers its frame.
///
/// Returns `translation` unchanged when `size` is empty.
#[must_use]
pub fn clamp_translation(translation: Vec2, scale: f64, size: Size) -> Vec2 {
    if size.width <= 0.0 || size.height <= 0.0 {
        return translation;
    }
    let excess = (scale - 1.0).max(0.0);
    let max_x = size.width * excess * 0.5;
    let max_y = size.height * excess * 0.5;
    Vec2::new(
        clamp(translation.x, -max_x, max_x),
        clamp(translation.y, -max_y, max_y),
    )
}

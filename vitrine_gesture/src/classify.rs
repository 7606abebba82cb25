// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture classification from contact cardinality and zoom state.

/// What the current contact set means for the transform.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GestureKind {
    /// Nothing to apply: no contacts, or a single contact on an un-zoomed surface.
    None,
    /// A single contact dragging a zoomed surface.
    Pan,
    /// Two (or more) contacts; only the first two are used.
    Pinch,
}

/// Classifies a contact set.
///
/// `zoomed` is `true` when the current scale is above the resting scale.
#[must_use]
pub fn classify(active: usize, zoomed: bool) -> GestureKind {
    match active {
        0 => GestureKind::None,
        1 if zoomed => GestureKind::Pan,
        1 => GestureKind::None,
        _ => GestureKind::Pinch,
    }
}

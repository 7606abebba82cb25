// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture anchors: the reference snapshot for one continuous contact phase.
//!
//! ## Usage
//!
//! 1) Capture an anchor with [`GestureAnchor::capture`] when a gesture begins,
//!    and again whenever the number of contacts changes.
//! 2) On each move, compute the pan offset with [`GestureAnchor::pan_offset`]
//!    or the pinch ratio with [`GestureAnchor::pinch_ratio`], and apply them to
//!    [`GestureAnchor::origin_transform`].
//!
//! Deltas are always measured against the anchor, never accumulated from the
//! previous move, so a dropped move event cannot introduce drift.
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use vitrine_gesture::{ActivePointerSet, GestureAnchor, Transform};
//!
//! let mut pointers = ActivePointerSet::new();
//! pointers.insert(1_u32, Point::new(10.0, 20.0));
//!
//! let anchor = GestureAnchor::capture(&pointers, Transform::scaled(2.0)).unwrap();
//! assert_eq!(anchor.pan_offset(Point::new(15.0, 25.0)), Vec2::new(5.0, 5.0));
//! ```

use kurbo::{Point, Vec2};
use smallvec::SmallVec;

use crate::geometry::{distance_ratio, midpoint, pair_distance};
use crate::pointer::ActivePointerSet;
use crate::transform::Transform;

/// Snapshot of contact positions and transform at the start of a contact phase.
#[derive(Clone, Debug, PartialEq)]
pub struct GestureAnchor {
    origin_positions: SmallVec<[Point; 2]>,
    origin_transform: Transform,
    origin_distance: f64,
}

impl GestureAnchor {
    /// Captures an anchor from the first two tracked contacts and `transform`.
    ///
    /// Returns `None` if no contacts are tracked. With a single contact the
    /// origin distance is `0.0`.
    #[must_use]
    pub fn capture<P: Copy + PartialEq>(
        pointers: &ActivePointerSet<P>,
        transform: Transform,
    ) -> Option<Self> {
        let origin_positions: SmallVec<[Point; 2]> =
            pointers.samples().iter().take(2).map(|s| s.pos).collect();
        if origin_positions.is_empty() {
            return None;
        }
        let origin_distance = match origin_positions.as_slice() {
            [a, b] => pair_distance(*a, *b),
            _ => 0.0,
        };
        Some(Self {
            origin_positions,
            origin_transform: transform,
            origin_distance,
        })
    }

    /// Contact positions at capture time, in arrival order (one or two entries).
    #[must_use]
    pub fn origin_positions(&self) -> &[Point] {
        &self.origin_positions
    }

    /// Transform at capture time.
    #[must_use]
    pub fn origin_transform(&self) -> Transform {
        self.origin_transform
    }

    /// Distance between the two contacts at capture time, or `0.0` for one contact.
    #[must_use]
    pub fn origin_distance(&self) -> f64 {
        self.origin_distance
    }

    /// Midpoint of the two origin contacts, if this is a two-contact anchor.
    #[must_use]
    pub fn origin_midpoint(&self) -> Option<Point> {
        match self.origin_positions.as_slice() {
            [a, b] => Some(midpoint(*a, *b)),
            _ => None,
        }
    }

    /// Offset of `current` from the first origin contact.
    #[must_use]
    pub fn pan_offset(&self, current: Point) -> Vec2 {
        current - self.origin_positions[0]
    }

    /// Ratio of `current_distance` to the origin distance.
    ///
    /// Returns `None` while the origin distance is at or below `epsilon`.
    #[must_use]
    pub fn pinch_ratio(&self, current_distance: f64, epsilon: f64) -> Option<f64> {
        distance_ratio(current_distance, self.origin_distance, epsilon)
    }

    /// Returns `true` if the two origin contacts were (nearly) coincident.
    #[must_use]
    pub fn is_degenerate(&self, epsilon: f64) -> bool {
        self.origin_distance <= epsilon
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_pointers() -> ActivePointerSet<u32> {
        let mut set = ActivePointerSet::new();
        set.insert(1, Point::new(100.0, 100.0));
        set.insert(2, Point::new(140.0, 100.0));
        set
    }

    #[test]
    fn empty_set_has_no_anchor() {
        let set = ActivePointerSet::<u32>::new();
        assert_eq!(GestureAnchor::capture(&set, Transform::REST), None);
    }

    #[test]
    fn single_contact_anchor() {
        let mut set = ActivePointerSet::new();
        set.insert(5_u32, Point::new(10.0, 10.0));
        let anchor = GestureAnchor::capture(&set, Transform::scaled(2.0)).unwrap();

        assert_eq!(anchor.origin_positions(), &[Point::new(10.0, 10.0)]);
        assert_eq!(anchor.origin_distance(), 0.0);
        assert_eq!(anchor.origin_midpoint(), None);
        assert_eq!(anchor.origin_transform(), Transform::scaled(2.0));
        assert_eq!(anchor.pan_offset(Point::new(4.0, 16.0)), Vec2::new(-6.0, 6.0));
    }

    #[test]
    fn two_contact_anchor_measures_distance() {
        let anchor = GestureAnchor::capture(&two_pointers(), Transform::REST).unwrap();
        assert_eq!(anchor.origin_distance(), 40.0);
        assert_eq!(anchor.origin_midpoint(), Some(Point::new(120.0, 100.0)));
        assert_eq!(anchor.pinch_ratio(80.0, 1e-3), Some(2.0));
        assert!(!anchor.is_degenerate(1e-3));
    }

    #[test]
    fn third_contact_is_not_captured() {
        let mut set = two_pointers();
        set.insert(3, Point::new(0.0, 0.0));
        let anchor = GestureAnchor::capture(&set, Transform::REST).unwrap();
        assert_eq!(anchor.origin_positions().len(), 2);
        assert_eq!(anchor.origin_distance(), 40.0);
    }

    #[test]
    fn coincident_contacts_are_degenerate() {
        let mut set = ActivePointerSet::new();
        set.insert(1_u32, Point::new(50.0, 50.0));
        set.insert(2, Point::new(50.0, 50.0));
        let anchor = GestureAnchor::capture(&set, Transform::REST).unwrap();
        assert!(anchor.is_degenerate(1e-3));
        assert_eq!(anchor.pinch_ratio(30.0, 1e-3), None);
    }
}

// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer tracking table: last-known position of every active contact.
//!
//! The table preserves arrival order. Only the first two contacts are used to
//! classify gestures; any further contacts are tracked so that their eventual
//! release is handled correctly, but they never steer the transform.

use kurbo::Point;
use smallvec::SmallVec;

/// Last observed position of one active contact.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerSample<P> {
    /// Host-assigned pointer identity.
    pub id: P,
    /// Last known position, in the host's client coordinates.
    pub pos: Point,
}

/// Ordered-by-arrival map from pointer identity to [`PointerSample`].
///
/// Keys are unique. Lookups are linear; real contact sets are tiny, so the
/// samples live inline for up to four simultaneous contacts.
#[derive(Clone, Debug)]
pub struct ActivePointerSet<P> {
    samples: SmallVec<[PointerSample<P>; 4]>,
}

impl<P> Default for ActivePointerSet<P> {
    fn default() -> Self {
        Self {
            samples: SmallVec::new(),
        }
    }
}

impl<P: Copy + PartialEq> ActivePointerSet<P> {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a contact, or updates its position if `id` is already tracked.
    ///
    /// Returns `true` if the contact was newly inserted.
    pub fn insert(&mut self, id: P, pos: Point) -> bool {
        if let Some(sample) = self.samples.iter_mut().find(|s| s.id == id) {
            sample.pos = pos;
            false
        } else {
            self.samples.push(PointerSample { id, pos });
            true
        }
    }

    /// Updates the position of a tracked contact.
    ///
    /// Returns `false` (and changes nothing) if `id` is not tracked.
    pub fn update(&mut self, id: P, pos: Point) -> bool {
        match self.samples.iter_mut().find(|s| s.id == id) {
            Some(sample) => {
                sample.pos = pos;
                true
            }
            None => false,
        }
    }

    /// Removes a contact, returning its last sample if it was tracked.
    ///
    /// Removal is idempotent: removing an untracked id is a no-op.
    pub fn remove(&mut self, id: P) -> Option<PointerSample<P>> {
        let index = self.samples.iter().position(|s| s.id == id)?;
        Some(self.samples.remove(index))
    }

    /// Drops every tracked contact.
    pub fn clear(&mut self) {
        self.samples.clear();
    }

    /// Returns the sample for `id`, if tracked.
    #[must_use]
    pub fn get(&self, id: P) -> Option<&PointerSample<P>> {
        self.samples.iter().find(|s| s.id == id)
    }

    /// Returns `true` if `id` is tracked.
    #[must_use]
    pub fn contains(&self, id: P) -> bool {
        self.get(id).is_some()
    }

    /// Number of tracked contacts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns `true` if no contacts are tracked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// The earliest-arrived contact, if any.
    #[must_use]
    pub fn primary(&self) -> Option<&PointerSample<P>> {
        self.samples.first()
    }

    /// The first two contacts in arrival order, if at least two are tracked.
    #[must_use]
    pub fn pair(&self) -> Option<(Point, Point)> {
        match self.samples.as_slice() {
            [a, b, ..] => Some((a.pos, b.pos)),
            _ => None,
        }
    }

    /// All tracked samples in arrival order.
    #[must_use]
    pub fn samples(&self) -> &[PointerSample<P>] {
        &self.samples
    }

    /// Ids of all tracked contacts in arrival order.
    pub fn ids(&self) -> impl Iterator<Item = P> + '_ {
        self.samples.iter().map(|s| s.id)
    }
}

// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer events in, outcomes and interaction edges out.

use kurbo::Point;

/// Lifecycle phase of a pointer event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerPhase {
    /// Contact started.
    Down,
    /// Contact moved.
    Move,
    /// Contact ended normally.
    Up,
    /// The platform revoked the contact (system gesture, lost capture).
    Cancel,
    /// The contact left the surface.
    Leave,
}

impl PointerPhase {
    /// Returns `true` for phases that end a contact.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Up | Self::Cancel | Self::Leave)
    }
}

/// One raw pointer event for a surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent<P> {
    /// Host-assigned pointer identity.
    pub id: P,
    /// Position in client coordinates. Ignored for terminal phases.
    pub pos: Point,
    /// Event phase.
    pub phase: PointerPhase,
}

impl<P> PointerEvent<P> {
    /// Creates an event.
    #[must_use]
    pub fn new(id: P, pos: impl Into<Point>, phase: PointerPhase) -> Self {
        Self {
            id,
            pos: pos.into(),
            phase,
        }
    }

    /// A [`PointerPhase::Down`] event.
    #[must_use]
    pub fn down(id: P, pos: impl Into<Point>) -> Self {
        Self::new(id, pos, PointerPhase::Down)
    }

    /// A [`PointerPhase::Move`] event.
    #[must_use]
    pub fn moved(id: P, pos: impl Into<Point>) -> Self {
        Self::new(id, pos, PointerPhase::Move)
    }

    /// A [`PointerPhase::Up`] event.
    #[must_use]
    pub fn up(id: P, pos: impl Into<Point>) -> Self {
        Self::new(id, pos, PointerPhase::Up)
    }

    /// A [`PointerPhase::Cancel`] event.
    #[must_use]
    pub fn cancel(id: P) -> Self {
        Self::new(id, Point::ZERO, PointerPhase::Cancel)
    }

    /// A [`PointerPhase::Leave`] event.
    #[must_use]
    pub fn leave(id: P, pos: impl Into<Point>) -> Self {
        Self::new(id, pos, PointerPhase::Leave)
    }
}

/// Interaction start/end notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Interaction {
    /// The surface started owning input (pinch, zoomed pan, double-tap zoom-in).
    Started,
    /// The surface released input.
    Ended,
}

/// Result of feeding one input to the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Outcome {
    /// The transform changed.
    pub transform_changed: bool,
    /// Interaction notification raised by this input.
    pub interaction: Option<Interaction>,
    /// The host should suppress the event's default action (native scrolling).
    pub suppress_default: bool,
}

impl Outcome {
    /// Nothing happened.
    pub const IGNORED: Self = Self {
        transform_changed: false,
        interaction: None,
        suppress_default: false,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_phases() {
        assert!(!PointerPhase::Down.is_terminal());
        assert!(!PointerPhase::Move.is_terminal());
        assert!(PointerPhase::Up.is_terminal());
        assert!(PointerPhase::Cancel.is_terminal());
        assert!(PointerPhase::Leave.is_terminal());
    }

    #[test]
    fn constructors_accept_tuples() {
        let e = PointerEvent::down(4_u8, (1.0, 2.0));
        assert_eq!(e.pos, Point::new(1.0, 2.0));
        assert_eq!(e.phase, PointerPhase::Down);
        assert_eq!(Outcome::default(), Outcome::IGNORED);
    }
}

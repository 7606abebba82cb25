// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Double-tap recognition with spatial and temporal tolerance.
//!
//! The engine itself only consumes a discrete double-activation signal
//! ([`GestureEngine::double_activate`](crate::GestureEngine::double_activate)).
//! Hosts without a native double-click event (touch screens, mostly) can feed
//! the same pointer events to a [`DoubleTapRecognizer`] and forward a
//! recognized double tap to the engine:
//!
//! ```
//! use vitrine_gesture::{DoubleTapRecognizer, GestureEngine, PointerEvent};
//!
//! let mut engine = GestureEngine::<u32>::default();
//! let mut taps = DoubleTapRecognizer::default();
//!
//! let stream = [
//!     (PointerEvent::down(1, (50.0, 50.0)), 0),
//!     (PointerEvent::up(1, (50.0, 50.0)), 60),
//!     (PointerEvent::down(2, (52.0, 49.0)), 180),
//!     (PointerEvent::up(2, (52.0, 49.0)), 240),
//! ];
//! for (event, time_ms) in stream {
//!     engine.handle(event);
//!     if taps.on_event(&event, time_ms) {
//!         engine.double_activate();
//!     }
//! }
//! assert_eq!(engine.transform().scale, 2.5);
//! ```

use kurbo::Point;

use crate::event::{PointerEvent, PointerPhase};
use crate::pointer::ActivePointerSet;

/// Tolerances for [`DoubleTapRecognizer`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DoubleTapConfig {
    /// How far a contact may travel and still count as a tap.
    pub tap_slop: f64,
    /// How far apart the two taps may land.
    pub double_tap_slop: f64,
    /// Longest gap between the two releases, in milliseconds.
    pub max_interval_ms: u64,
}

impl Default for DoubleTapConfig {
    fn default() -> Self {
        Self {
            tap_slop: 8.0,
            double_tap_slop: 40.0,
            max_interval_ms: 300,
        }
    }
}

#[derive(Clone, Copy, Debug)]
struct Press<P> {
    id: P,
    origin: Point,
}

/// Turns single-contact taps into double-tap signals.
///
/// A tap is a lone contact released within `tap_slop` of where it went down.
/// Two taps whose releases fall within `max_interval_ms` and whose positions
/// fall within `double_tap_slop` form a double tap. A second simultaneous
/// contact, or a contact that travels too far, discards any pending tap.
#[derive(Clone, Debug)]
pub struct DoubleTapRecognizer<P> {
    config: DoubleTapConfig,
    contacts: ActivePointerSet<P>,
    press: Option<Press<P>>,
    last_tap: Option<(Point, u64)>,
}

impl<P: Copy + PartialEq> Default for DoubleTapRecognizer<P> {
    fn default() -> Self {
        Self::new(DoubleTapConfig::default())
    }
}

impl<P: Copy + PartialEq> DoubleTapRecognizer<P> {
    /// Creates a recognizer with the given tolerances.
    #[must_use]
    pub fn new(config: DoubleTapConfig) -> Self {
        Self {
            config,
            contacts: ActivePointerSet::new(),
            press: None,
            last_tap: None,
        }
    }

    /// Tolerances in use.
    #[must_use]
    pub fn config(&self) -> &DoubleTapConfig {
        &self.config
    }

    /// Feeds one pointer event observed at `time_ms`.
    ///
    /// Returns `true` exactly when this event completes a double tap.
    pub fn on_event(&mut self, event: &PointerEvent<P>, time_ms: u64) -> bool {
        match event.phase {
            PointerPhase::Down => {
                self.contacts.insert(event.id, event.pos);
                if self.contacts.len() > 1 {
                    self.discard();
                } else {
                    self.press = Some(Press {
                        id: event.id,
                        origin: event.pos,
                    });
                }
                false
            }
            PointerPhase::Move => {
                self.contacts.update(event.id, event.pos);
                if let Some(press) = self.press
                    && press.id == event.id
                    && press.origin.distance(event.pos) > self.config.tap_slop
                {
                    self.discard();
                }
                false
            }
            PointerPhase::Up => {
                self.contacts.remove(event.id);
                match self.press.take() {
                    Some(press) if press.id == event.id => self.complete_tap(press.origin, time_ms),
                    other => {
                        self.press = other;
                        false
                    }
                }
            }
            PointerPhase::Cancel | PointerPhase::Leave => {
                self.contacts.remove(event.id);
                if self.press.is_some_and(|p| p.id == event.id) {
                    self.discard();
                }
                false
            }
        }
    }

    /// Forgets pending taps and tracked contacts.
    pub fn reset(&mut self) {
        self.contacts.clear();
        self.discard();
    }

    fn complete_tap(&mut self, pos: Point, time_ms: u64) -> bool {
        let is_double = self.last_tap.is_some_and(|(prev, at)| {
            time_ms.saturating_sub(at) <= self.config.max_interval_ms
                && prev.distance(pos) <= self.config.double_tap_slop
        });
        self.last_tap = if is_double { None } else { Some((pos, time_ms)) };
        is_double
    }

    fn discard(&mut self) {
        self.press = None;
        self.last_tap = None;
    }
}

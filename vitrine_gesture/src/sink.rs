// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Interaction notification sinks.
//!
//! Hosts that prefer callbacks over inspecting [`Outcome`](crate::Outcome)
//! pass an [`InteractionSink`] to
//! [`GestureEngine::handle_with`](crate::GestureEngine::handle_with). Typical
//! uses are pausing an auto-advancing story timer while an image is zoomed.

use alloc::vec::Vec;

use crate::event::Interaction;

/// Receives interaction start/end notifications.
///
/// Starts arrive each time the engine engages or a double activation zooms
/// in; ends arrive each time an engaged gesture lifts its last contact or a
/// double activation returns to rest.
pub trait InteractionSink {
    /// The surface started owning input.
    fn interaction_started(&mut self);

    /// The surface released input.
    fn interaction_ended(&mut self);

    /// Dispatches an [`Interaction`] edge to the matching method.
    fn notify(&mut self, interaction: Interaction) {
        match interaction {
            Interaction::Started => self.interaction_started(),
            Interaction::Ended => self.interaction_ended(),
        }
    }
}

impl InteractionSink for () {
    fn interaction_started(&mut self) {}

    fn interaction_ended(&mut self) {}
}

/// A `(on_start, on_end)` closure pair.
impl<S, E> InteractionSink for (S, E)
where
    S: FnMut(),
    E: FnMut(),
{
    fn interaction_started(&mut self) {
        (self.0)();
    }

    fn interaction_ended(&mut self) {
        (self.1)();
    }
}

impl<T: InteractionSink + ?Sized> InteractionSink for &mut T {
    fn interaction_started(&mut self) {
        (**self).interaction_started();
    }

    fn interaction_ended(&mut self) {
        (**self).interaction_ended();
    }
}

/// Records every notification in order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InteractionLog {
    events: Vec<Interaction>,
}

impl InteractionLog {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded notifications, oldest first.
    #[must_use]
    pub fn events(&self) -> &[Interaction] {
        &self.events
    }

    /// Number of recorded starts.
    #[must_use]
    pub fn starts(&self) -> usize {
        self.count(Interaction::Started)
    }

    /// Number of recorded ends.
    #[must_use]
    pub fn ends(&self) -> usize {
        self.count(Interaction::Ended)
    }

    /// Forgets everything recorded so far.
    pub fn clear(&mut self) {
        self.events.clear();
    }

    fn count(&self, kind: Interaction) -> usize {
        self.events.iter().filter(|e| **e == kind).count()
    }
}

impl InteractionSink for InteractionLog {
    fn interaction_started(&mut self) {
        self.events.push(Interaction::Started);
    }

    fn interaction_ended(&mut self) {
        self.events.push(Interaction::Ended);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closure_pair_dispatches() {
        let mut starts = 0;
        let mut ends = 0;
        {
            let mut sink = (|| starts += 1, || ends += 1);
            sink.notify(Interaction::Started);
            sink.notify(Interaction::Ended);
            sink.notify(Interaction::Started);
        }
        assert_eq!((starts, ends), (2, 1));
    }

    #[test]
    fn log_records_in_order() {
        let mut log = InteractionLog::new();
        log.notify(Interaction::Started);
        log.notify(Interaction::Ended);
        assert_eq!(log.events(), &[Interaction::Started, Interaction::Ended]);
        assert_eq!((log.starts(), log.ends()), (1, 1));
        log.clear();
        assert!(log.events().is_empty());
    }
}

// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Interaction modes and the transition table between them.

/// Who owns the surface's pointer input right now.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum InteractionMode {
    /// No contacts.
    #[default]
    Idle,
    /// One contact on an un-zoomed surface. Positions are recorded, the
    /// transform is untouched, and the parent may scroll.
    PassiveTrack,
    /// The engine owns the contacts (pinch, or pan of a zoomed surface).
    Engaged,
}

/// Native scroll permission the host should apply to the surface's container.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum ScrollHint {
    /// Native horizontal and vertical panning stay enabled.
    #[default]
    AllowPan,
    /// Native scrolling is suppressed; the surface owns every contact.
    Block,
}

impl ScrollHint {
    /// Hint for a surface that is (or is not) zoomed in.
    #[must_use]
    pub fn for_zoomed(zoomed: bool) -> Self {
        if zoomed { Self::Block } else { Self::AllowPan }
    }

    /// Returns `true` for [`ScrollHint::Block`].
    #[must_use]
    pub fn blocks(self) -> bool {
        self == Self::Block
    }

    /// Equivalent CSS `touch-action` value, for web hosts.
    #[must_use]
    pub fn touch_action(self) -> &'static str {
        match self {
            Self::AllowPan => "pan-x pan-y",
            Self::Block => "none",
        }
    }
}

/// Mode after a contact is added.
///
/// `active` is the contact count after insertion.
#[must_use]
pub(crate) fn after_down(
    current: InteractionMode,
    active: usize,
    zoomed: bool,
) -> InteractionMode {
    match (current, active) {
        (_, 0) => InteractionMode::Idle,
        (InteractionMode::Engaged, _) => InteractionMode::Engaged,
        (_, 1) if !zoomed => InteractionMode::PassiveTrack,
        _ => InteractionMode::Engaged,
    }
}

/// Mode after a contact is removed.
///
/// An engaged gesture stays engaged until the last contact lifts.
#[must_use]
pub(crate) fn after_release(current: InteractionMode, active: usize) -> InteractionMode {
    match (current, active) {
        (_, 0) => InteractionMode::Idle,
        (InteractionMode::Idle, _) => InteractionMode::PassiveTrack,
        (mode, _) => mode,
    }
}

/// Mode after a double activation changes the zoom under held contacts.
///
/// Unlike [`after_down`], an engaged pinch at rest with one contact left
/// returns to passive tracking, and a passive contact engages once zoomed.
#[must_use]
pub(crate) fn after_toggle(active: usize, zoomed: bool) -> InteractionMode {
    match active {
        0 => InteractionMode::Idle,
        1 if !zoomed => InteractionMode::PassiveTrack,
        _ => InteractionMode::Engaged,
    }
}

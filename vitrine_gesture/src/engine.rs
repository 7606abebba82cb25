// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The gesture engine: a synchronous reducer from pointer events to a transform.
//!
//! ## Lifecycle
//!
//! - **Down**: the contact is tracked. A lone contact on an un-zoomed surface
//!   is only tracked passively so the parent container may scroll. A second
//!   contact, or any contact on a zoomed surface, engages the engine and
//!   captures a fresh [`GestureAnchor`].
//! - **Move**: while engaged, two contacts pinch (scale follows the distance
//!   ratio against the anchor) and one contact pans a zoomed surface (the
//!   translation follows the contact's offset from the anchor).
//! - **Up / Cancel / Leave**: the contact is dropped. If contacts remain while
//!   engaged, the anchor is recaptured from the *current* transform so lifting
//!   one finger of a pinch never makes the surface jump. When the last contact
//!   lifts, the release policy runs: elastic surfaces snap to rest, others snap
//!   to rest only when not zoomed in.
//!
//! Interaction start is reported each time the engine becomes engaged, and
//! interaction end each time an engaged gesture releases its last contact.
//! A double activation reports exactly one edge per toggle: start when zooming
//! in, end when returning to rest.
//!
//! Nothing here panics or reports errors. Moves and releases for untracked
//! contacts, non-finite coordinates and degenerate pinch geometry all degrade
//! to [`Outcome::IGNORED`] or a held transform.

use kurbo::{Point, Size, Vec2};
use smallvec::SmallVec;

use crate::anchor::GestureAnchor;
use crate::classify::{GestureKind, classify};
use crate::config::GestureConfig;
use crate::event::{Interaction, Outcome, PointerEvent, PointerPhase};
use crate::geometry::{clamp, is_finite_point, midpoint, pair_distance};
use crate::mode::{self, InteractionMode, ScrollHint};
use crate::pointer::ActivePointerSet;
use crate::sink::InteractionSink;
use crate::transform::{PanClamp, PinchFocus, Transform, clamp_translation};

/// Pan/pinch/double-tap engine for one surface.
///
/// `P` is the host's pointer identity type.
#[derive(Clone, Debug)]
pub struct GestureEngine<P> {
    config: GestureConfig,
    pointers: ActivePointerSet<P>,
    anchor: Option<GestureAnchor>,
    transform: Transform,
    mode: InteractionMode,
    interacting: bool,
    transform_origin: Point,
    surface_size: Size,
}

impl<P: Copy + PartialEq> Default for GestureEngine<P> {
    fn default() -> Self {
        Self::new(GestureConfig::default())
    }
}

impl<P: Copy + PartialEq> GestureEngine<P> {
    /// Creates an idle engine at rest.
    #[must_use]
    pub fn new(config: GestureConfig) -> Self {
        let config = config.normalized();
        Self {
            config,
            pointers: ActivePointerSet::new(),
            anchor: None,
            transform: Transform::scaled(config.min_scale),
            mode: InteractionMode::Idle,
            interacting: false,
            transform_origin: Point::ZERO,
            surface_size: Size::ZERO,
        }
    }

    /// Current configuration (normalized).
    #[must_use]
    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// Replaces the configuration.
    ///
    /// The current scale is clamped into the new limits and an engaged
    /// gesture is re-anchored so it continues without a jump.
    pub fn set_config(&mut self, config: GestureConfig) {
        self.config = config.normalized();
        let scale = clamp(
            self.transform.scale,
            self.config.min_scale,
            self.config.max_scale,
        );
        self.transform = self.bounded(self.transform.with_scale(scale));
        self.reanchor();
    }

    /// Sets the point (in client coordinates) the host scales the surface about.
    ///
    /// Only used by [`PinchFocus::Midpoint`].
    pub fn set_transform_origin(&mut self, origin: Point) {
        self.transform_origin = origin;
    }

    /// Sets the unscaled surface size.
    ///
    /// Only used by [`PanClamp::ContentEdges`]; the current transform is
    /// re-bounded immediately.
    pub fn set_surface_size(&mut self, size: Size) {
        self.surface_size = size;
        self.transform = self.bounded(self.transform);
        self.reanchor();
    }

    /// The transform the renderer should apply.
    #[must_use]
    pub fn transform(&self) -> Transform {
        self.transform
    }

    /// Current interaction mode.
    #[must_use]
    pub fn mode(&self) -> InteractionMode {
        self.mode
    }

    /// Whether the most recent notification was a start.
    #[must_use]
    pub fn is_interacting(&self) -> bool {
        self.interacting
    }

    /// Returns `true` when the surface is zoomed in.
    #[must_use]
    pub fn is_zoomed(&self) -> bool {
        self.transform.scale > self.config.min_scale
    }

    /// Whether the container must suppress native scrolling.
    ///
    /// Equivalent to [`is_zoomed`](Self::is_zoomed).
    #[must_use]
    pub fn blocks_ambient_scroll(&self) -> bool {
        self.is_zoomed()
    }

    /// Native scroll permission for the container.
    #[must_use]
    pub fn scroll_hint(&self) -> ScrollHint {
        ScrollHint::for_zoomed(self.blocks_ambient_scroll())
    }

    /// Tracked contacts.
    #[must_use]
    pub fn active_pointers(&self) -> &ActivePointerSet<P> {
        &self.pointers
    }

    /// The anchor of the current engaged phase, if any.
    #[must_use]
    pub fn anchor(&self) -> Option<&GestureAnchor> {
        self.anchor.as_ref()
    }

    /// Feeds one pointer event.
    pub fn handle(&mut self, event: PointerEvent<P>) -> Outcome {
        self.handle_with(event, &mut ())
    }

    /// Feeds one pointer event, reporting interaction edges to `sink`.
    pub fn handle_with(
        &mut self,
        event: PointerEvent<P>,
        sink: &mut impl InteractionSink,
    ) -> Outcome {
        let outcome = match event.phase {
            PointerPhase::Down => self.on_down(event.id, event.pos),
            PointerPhase::Move => self.on_move(event.id, event.pos),
            PointerPhase::Up | PointerPhase::Cancel | PointerPhase::Leave => {
                self.on_release(event.id)
            }
        };
        notify(sink, outcome)
    }

    /// Toggles between rest and the double-activation preset.
    pub fn double_activate(&mut self) -> Outcome {
        self.double_activate_with(&mut ())
    }

    /// [`double_activate`](Self::double_activate), reporting to `sink`.
    pub fn double_activate_with(&mut self, sink: &mut impl InteractionSink) -> Outcome {
        let (target, interaction) = if self.is_zoomed() {
            (self.rest(), Interaction::Ended)
        } else {
            (
                Transform::scaled(self.config.double_tap_scale),
                Interaction::Started,
            )
        };
        let transform_changed = self.replace_transform(target);
        // Held contacts follow the new zoom: a lone contact pans once zoomed
        // and hands scrolling back to the container at rest.
        self.set_mode(mode::after_toggle(self.pointers.len(), self.is_zoomed()));
        self.reanchor();
        notify(
            sink,
            Outcome {
                transform_changed,
                interaction: Some(self.emit(interaction)),
                suppress_default: false,
            },
        )
    }

    /// Cancels every tracked contact, as if each received a cancel event.
    ///
    /// Hosts call this on window blur or visibility loss, where the platform
    /// may never deliver the matching up events.
    pub fn blur(&mut self) -> Outcome {
        self.blur_with(&mut ())
    }

    /// [`blur`](Self::blur), reporting to `sink`.
    pub fn blur_with(&mut self, sink: &mut impl InteractionSink) -> Outcome {
        let ids: SmallVec<[P; 4]> = self.pointers.ids().collect();
        let mut merged = Outcome::IGNORED;
        for id in ids {
            let outcome = self.handle_with(PointerEvent::cancel(id), sink);
            merged.transform_changed |= outcome.transform_changed;
            merged.interaction = outcome.interaction.or(merged.interaction);
        }
        merged
    }

    /// Drops all contacts and returns to rest.
    pub fn reset(&mut self) -> Outcome {
        self.reset_with(&mut ())
    }

    /// [`reset`](Self::reset), reporting to `sink`.
    pub fn reset_with(&mut self, sink: &mut impl InteractionSink) -> Outcome {
        self.pointers.clear();
        self.anchor = None;
        self.set_mode(InteractionMode::Idle);
        let interaction = if self.interacting {
            Some(self.emit(Interaction::Ended))
        } else {
            None
        };
        let transform_changed = self.replace_transform(self.rest());
        notify(
            sink,
            Outcome {
                transform_changed,
                interaction,
                suppress_default: false,
            },
        )
    }

    /// Snapshot of the engine state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> GestureDebugInfo {
        GestureDebugInfo {
            mode: self.mode,
            transform: self.transform,
            active_pointers: self.pointers.len(),
            anchor: self.anchor.clone(),
            interacting: self.interacting,
            scroll_hint: self.scroll_hint(),
        }
    }

    fn on_down(&mut self, id: P, pos: Point) -> Outcome {
        if !is_finite_point(pos) {
            trace_ignored("down with non-finite position");
            return Outcome::IGNORED;
        }
        self.pointers.insert(id, pos);
        let next = mode::after_down(self.mode, self.pointers.len(), self.is_zoomed());
        let mut outcome = Outcome::IGNORED;
        if next == InteractionMode::Engaged && self.mode != InteractionMode::Engaged {
            outcome.interaction = Some(self.emit(Interaction::Started));
        }
        self.set_mode(next);
        self.reanchor();
        outcome.suppress_default = self.suppresses_default();
        outcome
    }

    fn on_move(&mut self, id: P, pos: Point) -> Outcome {
        if !is_finite_point(pos) {
            trace_ignored("move with non-finite position");
            return Outcome::IGNORED;
        }
        if !self.pointers.update(id, pos) {
            trace_ignored("move for untracked pointer");
            return Outcome::IGNORED;
        }
        if self.mode != InteractionMode::Engaged {
            return Outcome::IGNORED;
        }
        let next = match classify(self.pointers.len(), self.is_zoomed()) {
            GestureKind::Pinch => self.pinch(),
            GestureKind::Pan => self.pan(),
            GestureKind::None => self.transform,
        };
        Outcome {
            transform_changed: self.replace_transform(next),
            interaction: None,
            suppress_default: self.suppresses_default(),
        }
    }

    fn on_release(&mut self, id: P) -> Outcome {
        if self.pointers.remove(id).is_none() {
            trace_ignored("release for untracked pointer");
            return Outcome::IGNORED;
        }
        let next = mode::after_release(self.mode, self.pointers.len());
        let mut outcome = Outcome::IGNORED;
        if !self.pointers.is_empty() {
            self.set_mode(next);
            self.reanchor();
            outcome.suppress_default = self.suppresses_default();
            return outcome;
        }

        if self.mode == InteractionMode::Engaged {
            outcome.interaction = Some(self.emit(Interaction::Ended));
        }
        self.set_mode(next);
        self.anchor = None;
        let settled = if self.config.elastic || !self.is_zoomed() {
            self.rest()
        } else {
            self.transform
        };
        outcome.transform_changed = self.replace_transform(settled);
        outcome
    }

    fn pinch(&mut self) -> Transform {
        let Some((a, b)) = self.pointers.pair() else {
            return self.transform;
        };
        let Some(anchor) = self.anchor.as_ref() else {
            return self.transform;
        };
        let distance = pair_distance(a, b);
        let epsilon = self.config.distance_epsilon;
        let Some(ratio) = anchor.pinch_ratio(distance, epsilon) else {
            // Fingers started on top of each other; hold the scale until they
            // separate, then measure from there.
            if distance > epsilon {
                self.reanchor();
            }
            return self.transform;
        };

        let origin = anchor.origin_transform();
        let scale = clamp(
            origin.scale * ratio,
            self.config.min_scale,
            self.config.max_scale,
        );
        let translation = match (self.config.pinch_focus, anchor.origin_midpoint()) {
            (PinchFocus::Midpoint, Some(m0)) => {
                let c = self.transform_origin.to_vec2();
                let m1 = midpoint(a, b).to_vec2();
                (m1 - c) - (m0.to_vec2() - c - origin.translation()) * (scale / origin.scale)
            }
            _ => origin.translation(),
        };
        self.bounded(Transform::new(scale, translation.x, translation.y))
    }

    fn pan(&self) -> Transform {
        let (Some(primary), Some(anchor)) = (self.pointers.primary(), self.anchor.as_ref()) else {
            return self.transform;
        };
        let translation: Vec2 =
            anchor.origin_transform().translation() + anchor.pan_offset(primary.pos);
        self.bounded(self.transform.with_translation(translation))
    }

    fn bounded(&self, t: Transform) -> Transform {
        match self.config.pan_clamp {
            PanClamp::None => t,
            PanClamp::ContentEdges => {
                t.with_translation(clamp_translation(t.translation(), t.scale, self.surface_size))
            }
        }
    }

    fn rest(&self) -> Transform {
        Transform::scaled(self.config.min_scale)
    }

    fn reanchor(&mut self) {
        self.anchor = if self.mode == InteractionMode::Engaged {
            GestureAnchor::capture(&self.pointers, self.transform)
        } else {
            None
        };
    }

    fn suppresses_default(&self) -> bool {
        self.mode == InteractionMode::Engaged
            && (self.pointers.len() >= 2 || self.blocks_ambient_scroll())
    }

    fn replace_transform(&mut self, next: Transform) -> bool {
        if next == self.transform {
            return false;
        }
        self.transform = next;
        true
    }

    fn emit(&mut self, interaction: Interaction) -> Interaction {
        self.interacting = matches!(interaction, Interaction::Started);
        interaction
    }

    fn set_mode(&mut self, next: InteractionMode) {
        if self.mode == next {
            return;
        }
        #[cfg(feature = "log")]
        log::debug!("gesture mode {:?} -> {:?}", self.mode, next);
        self.mode = next;
    }
}

fn notify(sink: &mut impl InteractionSink, outcome: Outcome) -> Outcome {
    if let Some(interaction) = outcome.interaction {
        sink.notify(interaction);
    }
    outcome
}

#[cfg_attr(
    not(feature = "log"),
    expect(unused_variables, reason = "only logged with the `log` feature")
)]
fn trace_ignored(reason: &str) {
    #[cfg(feature = "log")]
    log::trace!("gesture event ignored: {reason}");
}

/// Debug snapshot of a [`GestureEngine`] state.
#[derive(Clone, Debug, PartialEq)]
pub struct GestureDebugInfo {
    /// Current interaction mode.
    pub mode: InteractionMode,
    /// Current transform.
    pub transform: Transform,
    /// Number of tracked contacts.
    pub active_pointers: usize,
    /// Anchor of the current engaged phase.
    pub anchor: Option<GestureAnchor>,
    /// Whether the most recent notification was a start.
    pub interacting: bool,
    /// Native scroll permission.
    pub scroll_hint: ScrollHint,
}

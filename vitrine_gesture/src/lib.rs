// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=vitrine_gesture --heading-base-level=0

//! Vitrine Gesture: pan, pinch-zoom and double-tap handling for photo surfaces.
//!
//! This crate provides a headless gesture engine for one visual surface (one
//! image). It consumes the raw, time-ordered pointer stream the host receives
//! for that surface and produces:
//! - A [`Transform`] (scale plus translation) for the renderer to apply.
//! - A [`ScrollHint`] telling the surrounding scroll container whether it may
//!   keep handling swipes natively.
//! - Interaction start/end edges, used to pause unrelated ambient behavior
//!   such as an auto-advancing story timer.
//!
//! It does **not** render, hit test, or listen for events itself. Callers are
//! expected to:
//! - Route down/move/up/cancel/leave events for the surface into
//!   [`GestureEngine::handle`].
//! - Call [`GestureEngine::double_activate`] on a double click, or wire a
//!   [`DoubleTapRecognizer`] for touch input.
//! - Apply [`GestureEngine::transform`] and [`GestureEngine::scroll_hint`]
//!   after each event, and honor [`Outcome::suppress_default`].
//!
//! ## Minimal example
//!
//! ```rust
//! use vitrine_gesture::{GestureConfig, GestureEngine, InteractionMode, PointerEvent};
//!
//! let mut engine = GestureEngine::new(GestureConfig::viewer());
//!
//! // One finger on an un-zoomed image: tracked passively, the carousel may scroll.
//! let out = engine.handle(PointerEvent::down(1_u32, (100.0, 100.0)));
//! assert_eq!(engine.mode(), InteractionMode::PassiveTrack);
//! assert!(!out.suppress_default);
//!
//! // A second finger engages the engine; spreading them to twice the
//! // distance doubles the scale.
//! engine.handle(PointerEvent::down(2, (140.0, 100.0)));
//! engine.handle(PointerEvent::moved(2, (180.0, 100.0)));
//! assert_eq!(engine.transform().scale, 2.0);
//! assert!(engine.blocks_ambient_scroll());
//!
//! // Lifting both keeps the zoom on a viewer surface.
//! engine.handle(PointerEvent::up(2, (180.0, 100.0)));
//! engine.handle(PointerEvent::up(1, (100.0, 100.0)));
//! assert_eq!(engine.transform().scale, 2.0);
//! ```
//!
//! ## Feed surfaces
//!
//! Images inside a scrolling feed usually zoom only momentarily. With
//! [`GestureConfig::feed`] every release snaps the surface back to
//! [`Transform::REST`]:
//!
//! ```rust
//! use vitrine_gesture::{GestureConfig, GestureEngine, InteractionLog, PointerEvent, Transform};
//!
//! let mut engine = GestureEngine::new(GestureConfig::feed());
//! let mut log = InteractionLog::new();
//!
//! engine.handle_with(PointerEvent::down(1_u32, (0.0, 0.0)), &mut log);
//! engine.handle_with(PointerEvent::down(2, (50.0, 0.0)), &mut log);
//! engine.handle_with(PointerEvent::moved(2, (150.0, 0.0)), &mut log);
//! engine.handle_with(PointerEvent::cancel(1), &mut log);
//! engine.handle_with(PointerEvent::cancel(2), &mut log);
//!
//! assert_eq!(engine.transform(), Transform::REST);
//! assert_eq!((log.starts(), log.ends()), (1, 1));
//! ```
//!
//! ## Design notes
//!
//! - The engine is a synchronous reducer; there are no timers and no
//!   suspension points. Each surface owns an independent engine.
//! - Modes are explicit: [`InteractionMode::Idle`],
//!   [`InteractionMode::PassiveTrack`] and [`InteractionMode::Engaged`].
//! - Only the first two contacts drive a gesture; further contacts are tracked
//!   and ignored.
//! - By default translation is held during a pinch and pans are unbounded;
//!   [`PinchFocus::Midpoint`] and [`PanClamp::ContentEdges`] opt into zooming
//!   around the fingers and keeping the surface within its frame.
//! - No input is an error. Unknown contacts, non-finite coordinates and
//!   coincident pinch starts degrade to no-ops.
//!
//! ## Features
//!
//! - `std` (default): build Kurbo with the standard library.
//! - `libm`: `no_std` float math for Kurbo.
//! - `log` (default): report mode transitions and ignored events through the
//!   `log` facade.
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

mod anchor;
mod classify;
mod config;
mod double_tap;
mod engine;
mod event;
mod geometry;
mod mode;
mod pointer;
mod sink;
mod transform;

pub use anchor::GestureAnchor;
pub use classify::{GestureKind, classify};
pub use config::GestureConfig;
pub use double_tap::{DoubleTapConfig, DoubleTapRecognizer};
pub use engine::{GestureDebugInfo, GestureEngine};
pub use event::{Interaction, Outcome, PointerEvent, PointerPhase};
pub use geometry::DEFAULT_DISTANCE_EPSILON;
pub use mode::{InteractionMode, ScrollHint};
pub use pointer::{ActivePointerSet, PointerSample};
pub use sink::{InteractionLog, InteractionSink};
pub use transform::{PanClamp, PinchFocus, Transform, clamp_translation};

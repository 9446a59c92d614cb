// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_ray_focus --heading-base-level=0

//! Understory Ray Focus: directional focus targeting for analog input.
//!
//! Keyboard-style focus navigation moves in four fixed directions. Analog input
//! such as a gamepad stick (or an on-screen stick driven by a pointer drag)
//! points in any direction, and the user expects the element they are
//! "pointing at" to light up. This crate resolves that intent:
//!
//! - A **[`Target`]** is a focusable element: a caller-chosen key, a bounds
//!   snapshot, and two independent affordance flags, *targeted* (hover-like)
//!   and *focused* (committed).
//! - A **[`Ray`]** tests the horizontal midline of every target and reports the
//!   nearest crossing as an [`Intersection`].
//! - A **[`RayFan`]** is a fixed set of rays at symmetric angular offsets around
//!   the stick direction. The center ray has priority 1; priorities fall off
//!   linearly towards the edges of the fan.
//! - A **[`TargetResolver`]** owns the targets, casts the fan from the focus
//!   anchor on every direction update, ranks hits by
//!   `distance * (1 - priority)` and drives the flags. On release the
//!   targeted element becomes focused and its center becomes the new anchor.
//!
//! The ranking lets a target that lies exactly on the stick axis win at any
//! distance, while a target only grazed by an outer ray must be much closer
//! to compete.
//!
//! ## Minimal example
//!
//! Two buttons in a column; the stick points down twice.
//!
//! ```rust
//! use core::f64::consts::FRAC_PI_2;
//! use kurbo::{Rect, Size, Vec2};
//! use understory_ray_focus::{Affordance, ResolverConfig, TargetResolver};
//!
//! let layout = |id: &u32| match *id {
//!     1 => Some(Rect::new(80.0, 140.0, 120.0, 160.0)),
//!     2 => Some(Rect::new(80.0, 240.0, 120.0, 260.0)),
//!     _ => None,
//! };
//!
//! let mut resolver = TargetResolver::new(ResolverConfig::new(Size::new(200.0, 200.0))).unwrap();
//! resolver.register([1_u32, 2], &layout).unwrap();
//!
//! // Paint affordances however you like; here we just log them.
//! let mut changes = Vec::new();
//! let mut visuals = |id: &u32, kind: Affordance, on: bool| changes.push((*id, kind, on));
//!
//! let down = Vec2::new(0.0, 1.0);
//! assert_eq!(resolver.on_direction_update(FRAC_PI_2, down, &mut visuals), Ok(Some(1)));
//! assert_eq!(resolver.on_release(&mut visuals), Some(1));
//!
//! // The anchor moved to the first button, so the next cast reaches the second.
//! assert_eq!(resolver.on_direction_update(FRAC_PI_2, down, &mut visuals), Ok(Some(2)));
//! assert_eq!(resolver.on_release(&mut visuals), Some(2));
//! assert_eq!(resolver.focused().map(|t| *t.id()), Some(2));
//! ```
//!
//! ## Geometry
//!
//! All bounds handed to one resolver share a coordinate space with `+y`
//! pointing down, and angles are in radians (`π/2` is "down"). Bounds are
//! snapshots taken by [`TargetResolver::register`] and
//! [`TargetResolver::refresh`]; layout changes are invisible until the host
//! refreshes.
//!
//! Rays only test each target's horizontal midline. A ray that runs parallel
//! to a midline never hits it, so a stick pointing exactly sideways reaches
//! neighbours through the tilted side rays of the fan.
//!
//! Every update costs one test per ray and target, which suits UI-sized
//! registries of tens of elements.
//!
//! ## Host seams
//!
//! - [`BoundsSource`] supplies element bounds (any `Fn(&K) -> Option<Rect>`).
//! - [`VisualAdapter`] receives affordance changes (any `FnMut(&K, Affordance, bool)`,
//!   or [`NoVisuals`]). It is called exactly once per actual flag change.
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for dependencies such as `kurbo`.
//! - `libm`: enables `no_std` + `alloc` builds that rely on `libm` for floating-point math.
//! - `stick_adapter`: enables the [`adapters::stick`] module, which routes
//!   `understory_stick` events into a [`TargetResolver`].
//! - `serde`: derives `Serialize`/`Deserialize` for the configuration types.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

#[cfg(feature = "stick_adapter")]
pub mod adapters;

mod error;
mod fan;
mod ray;
mod resolver;
mod target;

pub use error::{ConfigError, ResolverError};
pub use fan::{FanHits, RayFan, RayFanConfig};
pub use ray::{Intersection, MidlineHit, Ray, midline_hit};
pub use resolver::{ResolverConfig, TargetResolver, rank};
pub use target::{Affordance, Affordances, BoundsSource, NoVisuals, Target, VisualAdapter};

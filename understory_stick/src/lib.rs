// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Stick: a pointer-drag joystick emulator.
//!
//! This crate turns a plain pointer drag (down, move, up) into the event stream a
//! physical analog stick would produce: a grab, a series of moves carrying a
//! direction angle and a normalized deflection, and a release.
//!
//! It does not hit test and it does not paint. Feed it pointer positions from
//! your windowing layer and forward the returned [`StickEvent`] values to a
//! consumer such as `understory_ray_focus`.
//!
//! ## Usage
//!
//! ```
//! use kurbo::Point;
//! use understory_stick::{StickConfig, StickEmulator, StickEvent};
//!
//! // A 75px stick with a 30px margin leaves 45px of usable travel.
//! let mut stick = StickEmulator::new(StickConfig::default()).unwrap();
//!
//! let grab = stick.on_drag_start(Point::new(100.0, 100.0));
//! assert!(matches!(grab, StickEvent::Grab { .. }));
//!
//! // Drag straight down by the full travel.
//! let StickEvent::Move(motion) = stick.on_drag(Point::new(100.0, 145.0)).unwrap() else {
//!     unreachable!();
//! };
//! assert!((motion.angle - core::f64::consts::FRAC_PI_2).abs() < 1e-12);
//! assert!((motion.distance - 1.0).abs() < 1e-12);
//!
//! assert_eq!(stick.on_drag_end().unwrap(), StickEvent::Release);
//! ```
//!
//! ## Coordinates
//!
//! Angles are in radians and follow the screen convention used by [`kurbo`]:
//! `+x` points right, `+y` points down, so an angle of `π/2` means "down".
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for `kurbo`.
//! - `libm`: `no_std` floating-point math through `kurbo`'s `libm` support.
//! - `serde`: derives `Serialize`/`Deserialize` for [`StickConfig`].
//!
//! This crate is `no_std`.

#![no_std]

mod emulator;

pub use emulator::{StickConfig, StickEmulator, StickError, StickEvent, StickMotion};

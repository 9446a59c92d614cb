// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adapters to integrate with other Understory crates.
//!
//! Each adapter is gated behind a feature flag to keep the core resolver lightweight and `no_std` by default.
//!
//! ## Available Adapters
//!
//! - [`stick`] (`stick_adapter` feature): Integration with [`understory_stick`]. Routes grab, move and
//!   release events from a stick emulator into a [`TargetResolver`](crate::TargetResolver).

#[cfg(feature = "stick_adapter")]
pub mod stick;

// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types.

use kurbo::{Rect, Vec2};
use thiserror::Error;

/// Invalid construction parameters for a [`RayFan`](crate::RayFan) or
/// [`TargetResolver`](crate::TargetResolver).
#[derive(Copy, Clone, Debug, PartialEq, Error)]
pub enum ConfigError {
    /// A fan needs a center ray and at least one side ray.
    #[error("a ray fan needs at least 2 rays, got {0}")]
    TooFewRays(usize),
    /// The angular spread was negative, NaN or infinite.
    #[error("ray fan spread must be finite and non-negative, got {0} degrees")]
    InvalidSpread(f64),
    /// The viewport size was negative, NaN or infinite.
    #[error("viewport must have a finite, non-negative size, got {width}x{height}")]
    InvalidViewport {
        /// Configured width.
        width: f64,
        /// Configured height.
        height: f64,
    },
}

/// Malformed input rejected by a [`TargetResolver`](crate::TargetResolver).
#[derive(Copy, Clone, Debug, PartialEq, Error)]
pub enum ResolverError {
    /// The bounds source had no rectangle for an element.
    ///
    /// `index` is the element's position in the batch passed to
    /// `register`, or its registry index for `refresh`.
    #[error("no bounds available for element #{index}")]
    MissingBounds {
        /// Position of the offending element.
        index: usize,
    },
    /// The bounds source returned a non-finite or inverted rectangle.
    #[error("element #{index} has malformed bounds {bounds:?}")]
    MalformedBounds {
        /// Position of the offending element.
        index: usize,
        /// The rejected rectangle.
        bounds: Rect,
    },
    /// A direction update carried a NaN or infinite angle.
    #[error("direction angle must be finite, got {0}")]
    InvalidAngle(f64),
    /// A direction update carried a NaN or infinite stick position.
    #[error("stick position must be finite, got {0:?}")]
    InvalidPosition(Vec2),
}

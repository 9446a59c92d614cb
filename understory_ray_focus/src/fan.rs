// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A fan of prioritized rays around a center direction.

use kurbo::{Line, Point};
use smallvec::SmallVec;

use crate::error::ConfigError;
use crate::ray::{Intersection, Ray};
use crate::target::Target;

/// Intersections collected from one fan cast, in fan order.
pub type FanHits = SmallVec<[Intersection; 10]>;

/// Shape of a [`RayFan`].
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RayFanConfig {
    /// Number of rays, center included. Must be at least 2.
    pub count: usize,
    /// Angular step basis in degrees: neighbouring rays are
    /// `spread / (count - 1)` degrees apart.
    pub spread: f64,
}

impl Default for RayFanConfig {
    fn default() -> Self {
        Self {
            count: 10,
            spread: 20.0,
        }
    }
}

/// A fixed set of rays at symmetric offsets around a center direction.
///
/// Ray 0 points along the center with priority 1. The remaining rays
/// alternate sides, stepping outwards once per pair: ray `i` sits `k` steps
/// from the center with `k = (i + 1) / 2`, on the positive side for odd `i`
/// and the negative side for even `i`. Its priority is `1 - k / count`.
///
/// ```
/// use understory_ray_focus::{RayFan, RayFanConfig};
///
/// let fan = RayFan::new(RayFanConfig { count: 3, spread: 20.0 }).unwrap();
/// let offsets: Vec<f64> = fan.rays().iter().map(|r| r.offset().to_degrees()).collect();
/// assert!((offsets[0] - 0.0).abs() < 1e-9);
/// assert!((offsets[1] - 10.0).abs() < 1e-9);
/// assert!((offsets[2] + 10.0).abs() < 1e-9);
/// ```
#[derive(Clone, Debug)]
pub struct RayFan {
    config: RayFanConfig,
    rays: SmallVec<[Ray; 10]>,
}

impl RayFan {
    /// Build the fan described by `config`.
    pub fn new(config: RayFanConfig) -> Result<Self, ConfigError> {
        if config.count < 2 {
            return Err(ConfigError::TooFewRays(config.count));
        }
        if !config.spread.is_finite() || config.spread < 0.0 {
            return Err(ConfigError::InvalidSpread(config.spread));
        }

        let count = config.count as f64;
        let step = (config.spread / (count - 1.0)).to_radians();

        let rays = (0..config.count)
            .map(|i| {
                let pair = (i + 1) / 2;
                let k = pair as f64;
                let side = if i % 2 == 1 { 1.0 } else { -1.0 };
                // Ray 0 has k = 0, so its side does not matter.
                let offset = if pair == 0 { 0.0 } else { side * k * step };
                Ray::new(offset, 1.0 - k / count)
            })
            .collect();

        Ok(Self { config, rays })
    }

    /// The configuration the fan was built from.
    pub fn config(&self) -> &RayFanConfig {
        &self.config
    }

    /// Rays in fan order, center first.
    pub fn rays(&self) -> &[Ray] {
        &self.rays
    }

    /// Number of rays.
    pub fn len(&self) -> usize {
        self.rays.len()
    }

    /// Always `false`: a fan has at least two rays.
    pub fn is_empty(&self) -> bool {
        self.rays.is_empty()
    }

    /// Cast every ray from `origin` around `center_angle` and collect the hits.
    ///
    /// Each ray contributes at most one hit: the nearest target it crosses.
    pub fn cast<K>(
        &mut self,
        origin: Point,
        center_angle: f64,
        targets: &[Target<K>],
    ) -> FanHits {
        self.rays
            .iter_mut()
            .filter_map(|ray| {
                let angle = center_angle + ray.offset();
                ray.cast(origin, angle, targets)
            })
            .collect()
    }

    /// Debug overlay segments of `length` for the last cast, with each ray's priority.
    pub fn debug_lines(&self, length: f64) -> impl Iterator<Item = (Line, f64)> + '_ {
        self.rays
            .iter()
            .map(move |ray| (ray.debug_line(length), ray.priority()))
    }
}

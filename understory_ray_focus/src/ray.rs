// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rays and ray/target intersection.

use kurbo::{Line, Point, Rect, Vec2};

use crate::target::Target;

/// A hit between a [`Ray`] and a [`Target`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Intersection {
    /// Where the ray crosses the target's midline.
    pub point: Point,
    /// Index of the target in the slice the ray was cast against.
    pub target: usize,
    /// Distance from the ray origin to `point`.
    pub distance: f64,
    /// Priority of the ray that produced the hit.
    pub priority: f64,
}

impl Intersection {
    /// Ranking score: `distance * (1 - priority)`. Lower is better.
    ///
    /// An on-axis hit (priority 1) scores zero at any distance, while hits from
    /// outer rays have to be close to compete.
    pub fn score(&self) -> f64 {
        self.distance * (1.0 - self.priority)
    }
}

/// Result of [`midline_hit`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MidlineHit {
    /// Intersection point.
    pub point: Point,
    /// Position along the midline, from the left edge (0) to the right edge (1).
    pub t: f64,
    /// Position along the ray, in multiples of `direction`.
    pub u: f64,
}

/// Intersect the ray from `origin` along `direction` with the midline of `bounds`.
///
/// The midline is the horizontal segment at the vertical middle of `bounds`.
/// Endpoints are excluded (`0 < t < 1`), as are hits at or behind the origin
/// (`u > 0`). A ray parallel to the midline never hits, and neither does a
/// zero-width rectangle.
pub fn midline_hit(origin: Point, direction: Vec2, bounds: Rect) -> Option<MidlineHit> {
    let y = bounds.center().y;
    let (x1, y1, x2, y2) = (bounds.x0, y, bounds.x1, y);
    let (x3, y3) = (origin.x, origin.y);
    let (x4, y4) = (origin.x + direction.x, origin.y + direction.y);

    let den = (x1 - x2) * (y3 - y4) - (y1 - y2) * (x3 - x4);
    if den == 0.0 {
        return None;
    }

    let t = ((x1 - x3) * (y3 - y4) - (y1 - y3) * (x3 - x4)) / den;
    let u = -((x1 - x2) * (y1 - y3) - (y1 - y2) * (x1 - x3)) / den;

    (t > 0.0 && t < 1.0 && u > 0.0).then(|| MidlineHit {
        point: Point::new(x1 + t * (x2 - x1), y1 + t * (y2 - y1)),
        t,
        u,
    })
}

/// A ray of a [`RayFan`](crate::RayFan).
///
/// The offset from the fan's center and the priority are fixed at
/// construction. Origin and angle are those of the most recent cast, kept so
/// hosts can draw a debug overlay with [`Ray::debug_line`].
#[derive(Clone, Debug)]
pub struct Ray {
    offset: f64,
    priority: f64,
    origin: Point,
    angle: f64,
    direction: Vec2,
}

impl Ray {
    /// Create a ray with a fixed angular `offset` (radians) and `priority`.
    pub fn new(offset: f64, priority: f64) -> Self {
        Self {
            offset,
            priority,
            origin: Point::ORIGIN,
            angle: offset,
            direction: Vec2::from_angle(offset),
        }
    }

    /// Angular offset from the fan's center, in radians.
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Ranking weight in `[0, 1]`.
    pub fn priority(&self) -> f64 {
        self.priority
    }

    /// Origin of the last cast.
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Absolute angle of the last cast, in radians.
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Unit direction of the last cast.
    pub fn direction(&self) -> Vec2 {
        self.direction
    }

    /// Cast from `origin` at absolute `angle` and return the nearest hit.
    ///
    /// Ties in distance keep the target that comes first in `targets`.
    pub fn cast<K>(
        &mut self,
        origin: Point,
        angle: f64,
        targets: &[Target<K>],
    ) -> Option<Intersection> {
        self.origin = origin;
        self.angle = angle;
        self.direction = Vec2::from_angle(angle);

        let direction = self.direction;
        let priority = self.priority;
        targets
            .iter()
            .enumerate()
            .filter_map(|(index, target)| {
                let hit = midline_hit(origin, direction, target.bounds())?;
                Some(Intersection {
                    point: hit.point,
                    target: index,
                    distance: origin.distance(hit.point),
                    priority,
                })
            })
            .fold(None, |nearest: Option<Intersection>, hit| match nearest {
                Some(best) if best.distance <= hit.distance => Some(best),
                _ => Some(hit),
            })
    }

    /// Segment of `length` from the last cast origin along the last cast direction.
    pub fn debug_line(&self, length: f64) -> Line {
        Line::new(self.origin, self.origin + self.direction * length)
    }
}

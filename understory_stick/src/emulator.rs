// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag-to-stick state machine.

use kurbo::{Point, Vec2};
use thiserror::Error;

/// Geometry of the emulated stick.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StickConfig {
    /// Visual radius of the stick base, in pointer units.
    pub radius: f64,
    /// Part of the radius that the knob cannot travel into.
    pub margin: f64,
}

impl StickConfig {
    /// Maximum knob deflection: `radius - margin`.
    pub fn travel(&self) -> f64 {
        self.radius - self.margin
    }
}

impl Default for StickConfig {
    fn default() -> Self {
        Self {
            radius: 75.0,
            margin: 30.0,
        }
    }
}

/// Errors reported by [`StickEmulator`].
#[derive(Copy, Clone, Debug, PartialEq, Error)]
pub enum StickError {
    /// The configured travel (`radius - margin`) is not a positive, finite number.
    #[error("stick travel must be positive and finite (radius {radius}, margin {margin})")]
    InvalidTravel {
        /// Configured radius.
        radius: f64,
        /// Configured margin.
        margin: f64,
    },
    /// A move or release arrived without a preceding grab.
    #[error("stick is not grabbed")]
    NotGrabbed,
    /// The pointer position contained a NaN or infinite coordinate.
    #[error("pointer position {0:?} is not finite")]
    NonFinitePosition(Point),
}

/// Knob state reported with every move.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct StickMotion {
    /// Direction of the knob from the stick center, in radians.
    pub angle: f64,
    /// Change of `angle` since the previous move.
    pub angle_delta: f64,
    /// Normalized deflection in `[0, 1]`.
    pub distance: f64,
    /// Change of `distance` since the previous move.
    pub distance_delta: f64,
    /// Knob offset from center, in pointer units, clamped to the travel.
    pub position: Vec2,
    /// Change of `position` since the previous move.
    pub position_delta: Vec2,
    /// Knob offset divided by the travel; each component is in `[-1, 1]`.
    pub relative_position: Vec2,
    /// Change of `relative_position` since the previous move.
    pub relative_position_delta: Vec2,
}

/// Event emitted by the emulator.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum StickEvent {
    /// The pointer went down on the stick.
    Grab {
        /// Pointer position where the drag started.
        position: Point,
    },
    /// The knob moved.
    Move(StickMotion),
    /// The pointer was released and the knob returned to rest.
    Release,
}

/// Converts pointer drags into [`StickEvent`] values.
///
/// The emulator is a small state machine: [`on_drag_start`](Self::on_drag_start)
/// grabs the stick, [`on_drag`](Self::on_drag) reports knob motion relative to
/// the grab point, and [`on_drag_end`](Self::on_drag_end) releases it. Moves and
/// releases without a grab are rejected with [`StickError::NotGrabbed`].
#[derive(Clone, Debug)]
pub struct StickEmulator {
    config: StickConfig,
    grab: Option<Point>,
    angle: f64,
    distance: f64,
    position: Vec2,
    relative_position: Vec2,
}

impl StickEmulator {
    /// Create an emulator, validating the stick geometry.
    pub fn new(config: StickConfig) -> Result<Self, StickError> {
        let travel = config.travel();
        if !travel.is_finite() || travel <= 0.0 {
            return Err(StickError::InvalidTravel {
                radius: config.radius,
                margin: config.margin,
            });
        }
        Ok(Self {
            config,
            grab: None,
            angle: 0.0,
            distance: 0.0,
            position: Vec2::ZERO,
            relative_position: Vec2::ZERO,
        })
    }

    /// The stick geometry.
    pub fn config(&self) -> &StickConfig {
        &self.config
    }

    /// Whether a drag is in progress.
    pub fn is_grabbed(&self) -> bool {
        self.grab.is_some()
    }

    /// Last reported angle, in radians.
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Last reported normalized deflection.
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Last reported knob offset.
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Last reported knob offset relative to the travel.
    pub fn relative_position(&self) -> Vec2 {
        self.relative_position
    }

    /// Record a pointer down. A repeated grab restarts the drag from `position`.
    pub fn on_drag_start(&mut self, position: Point) -> StickEvent {
        log::trace!("stick grabbed at {position:?}");
        self.grab = Some(position);
        StickEvent::Grab { position }
    }

    /// Record a pointer move and report the knob motion.
    pub fn on_drag(&mut self, position: Point) -> Result<StickEvent, StickError> {
        let start = self.grab.ok_or(StickError::NotGrabbed)?;
        if !position.is_finite() {
            return Err(StickError::NonFinitePosition(position));
        }

        let travel = self.config.travel();
        let offset = position - start;
        let angle = offset.angle();
        let clamped = offset.hypot().min(travel);
        let distance = clamped / travel;
        let knob = Vec2::from_angle(angle) * clamped;
        let relative = knob / travel;

        let motion = StickMotion {
            angle,
            angle_delta: angle - self.angle,
            distance,
            distance_delta: distance - self.distance,
            position: knob,
            position_delta: knob - self.position,
            relative_position: relative,
            relative_position_delta: relative - self.relative_position,
        };

        self.angle = angle;
        self.distance = distance;
        self.position = knob;
        self.relative_position = relative;

        Ok(StickEvent::Move(motion))
    }

    /// Record a pointer up; the knob snaps back to rest.
    pub fn on_drag_end(&mut self) -> Result<StickEvent, StickError> {
        if self.grab.take().is_none() {
            return Err(StickError::NotGrabbed);
        }
        log::trace!("stick released");
        self.angle = 0.0;
        self.distance = 0.0;
        self.position = Vec2::ZERO;
        self.relative_position = Vec2::ZERO;
        Ok(StickEvent::Release)
    }
}

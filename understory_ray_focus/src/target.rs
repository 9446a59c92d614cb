// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Focusable targets, their affordance flags, and the host-facing seams.

use kurbo::{Line, Point, Rect};

bitflags::bitflags! {
    /// Affordances currently shown on a [`Target`].
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Affordances: u8 {
        /// The target is under the stick's aim (hover-equivalent).
        const TARGETED = 0b0000_0001;
        /// The target holds committed focus.
        const FOCUSED  = 0b0000_0010;
    }
}

/// A single affordance kind, as reported to a [`VisualAdapter`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Affordance {
    /// See [`Affordances::TARGETED`].
    Targeted,
    /// See [`Affordances::FOCUSED`].
    Focused,
}

impl Affordance {
    /// The flag backing this affordance.
    pub const fn flag(self) -> Affordances {
        match self {
            Self::Targeted => Affordances::TARGETED,
            Self::Focused => Affordances::FOCUSED,
        }
    }
}

/// Receiver of affordance changes, typically the layer that paints hover and
/// focus styling.
///
/// The resolver only calls this when a flag actually flips, so implementations
/// can toggle styles without tracking state of their own.
pub trait VisualAdapter<K> {
    /// Show (`on = true`) or hide an affordance on `target`.
    fn set_affordance(&mut self, target: &K, kind: Affordance, on: bool);
}

impl<K, F> VisualAdapter<K> for F
where
    F: FnMut(&K, Affordance, bool),
{
    fn set_affordance(&mut self, target: &K, kind: Affordance, on: bool) {
        self(target, kind, on);
    }
}

/// A [`VisualAdapter`] that ignores every change.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoVisuals;

impl<K> VisualAdapter<K> for NoVisuals {
    fn set_affordance(&mut self, _target: &K, _kind: Affordance, _on: bool) {}
}

/// Provider of element bounds, queried when elements are registered or refreshed.
///
/// All rectangles handed to one resolver must share a coordinate space.
pub trait BoundsSource<K> {
    /// Current bounds of `element`, or `None` if the element is unknown.
    fn bounds(&self, element: &K) -> Option<Rect>;
}

impl<K, F> BoundsSource<K> for F
where
    F: Fn(&K) -> Option<Rect>,
{
    fn bounds(&self, element: &K) -> Option<Rect> {
        self(element)
    }
}

/// A registered focusable candidate.
///
/// Bounds are a snapshot: they change only when the owning resolver is
/// refreshed.
#[derive(Clone, Debug)]
pub struct Target<K> {
    id: K,
    bounds: Rect,
    affordances: Affordances,
}

impl<K> Target<K> {
    /// Create an untargeted, unfocused target.
    pub fn new(id: K, bounds: Rect) -> Self {
        Self {
            id,
            bounds,
            affordances: Affordances::empty(),
        }
    }

    /// The element key.
    pub fn id(&self) -> &K {
        &self.id
    }

    /// Bounds snapshot.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Top-left corner of the bounds.
    pub fn position(&self) -> Point {
        self.bounds.origin()
    }

    /// Center of the bounds; becomes the focus anchor when this target is focused.
    pub fn center(&self) -> Point {
        self.bounds.center()
    }

    /// The horizontal segment through the vertical middle of the bounds.
    ///
    /// Rays are tested against this segment rather than the full rectangle.
    pub fn midline(&self) -> Line {
        let y = self.bounds.center().y;
        Line::new((self.bounds.x0, y), (self.bounds.x1, y))
    }

    /// Currently shown affordances.
    pub fn affordances(&self) -> Affordances {
        self.affordances
    }

    /// Whether the target is under the stick's aim.
    pub fn is_targeted(&self) -> bool {
        self.affordances.contains(Affordances::TARGETED)
    }

    /// Whether the target holds committed focus.
    pub fn is_focused(&self) -> bool {
        self.affordances.contains(Affordances::FOCUSED)
    }

    /// Set the targeted flag. Returns `true` if it changed.
    pub fn set_targeted<V: VisualAdapter<K>>(&mut self, on: bool, visuals: &mut V) -> bool {
        self.set_affordance(Affordance::Targeted, on, visuals)
    }

    /// Set the focused flag. Returns `true` if it changed.
    pub fn set_focused<V: VisualAdapter<K>>(&mut self, on: bool, visuals: &mut V) -> bool {
        self.set_affordance(Affordance::Focused, on, visuals)
    }

    pub(crate) fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    fn set_affordance<V: VisualAdapter<K>>(
        &mut self,
        kind: Affordance,
        on: bool,
        visuals: &mut V,
    ) -> bool {
        let flag = kind.flag();
        if self.affordances.contains(flag) == on {
            return false;
        }
        self.affordances.set(flag, on);
        visuals.set_affordance(&self.id, kind, on);
        true
    }
}

/// Whether `bounds` can be used as a target snapshot.
pub(crate) fn bounds_are_valid(bounds: &Rect) -> bool {
    bounds.is_finite() && bounds.x1 >= bounds.x0 && bounds.y1 >= bounds.y0
}

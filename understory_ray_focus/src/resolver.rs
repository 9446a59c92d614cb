// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Target registry and the targeted/focused state machine.

use alloc::vec::Vec;

use kurbo::{Point, Rect, Size, Vec2};

use crate::error::{ConfigError, ResolverError};
use crate::fan::{FanHits, RayFan, RayFanConfig};
use crate::ray::Intersection;
use crate::target::{BoundsSource, Target, VisualAdapter, bounds_are_valid};

/// Construction parameters for a [`TargetResolver`].
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResolverConfig {
    /// Size of the surface the targets live on. Its center is the initial
    /// focus anchor.
    pub viewport: Size,
    /// Shape of the ray fan.
    pub fan: RayFanConfig,
}

impl ResolverConfig {
    /// Configuration for `viewport` with the default fan.
    pub fn new(viewport: Size) -> Self {
        Self {
            viewport,
            fan: RayFanConfig::default(),
        }
    }
}

/// Pick the hit with the lowest [`Intersection::score`].
///
/// Ties keep the earliest hit. Returns `None` for an empty slice.
pub fn rank(hits: &[Intersection]) -> Option<Intersection> {
    hits.iter().copied().fold(None, |best, hit| match best {
        Some(current) if hit.score() < current.score() => Some(hit),
        None => Some(hit),
        keep => keep,
    })
}

/// Directional targeting over a registry of [`Target`]s.
///
/// The resolver casts its [`RayFan`] from the focus anchor whenever the stick
/// direction changes and marks the best hit as targeted. On release the best
/// hit is committed as focused and its center becomes the new anchor.
///
/// Flags only change through the resolver: every change is reported once to
/// the [`VisualAdapter`] passed to the call that made it. A cast that finds
/// nothing leaves the current targeted and focused targets as they are.
///
/// Targets are only ever appended (or dropped all at once by
/// [`clear`](Self::clear)), so the indices reported in [`Intersection`]s and
/// by [`targeted_index`](Self::targeted_index) stay valid between calls.
#[derive(Clone, Debug)]
pub struct TargetResolver<K> {
    config: ResolverConfig,
    fan: RayFan,
    targets: Vec<Target<K>>,
    anchor: Point,
    angle: f64,
    direction: Vec2,
    stick_position: Vec2,
    targeted: Option<usize>,
    focused: Option<usize>,
}

impl<K: Clone> TargetResolver<K> {
    /// Create an empty resolver anchored at the center of the viewport.
    pub fn new(config: ResolverConfig) -> Result<Self, ConfigError> {
        let Size { width, height } = config.viewport;
        if !(width.is_finite() && height.is_finite()) || width < 0.0 || height < 0.0 {
            return Err(ConfigError::InvalidViewport { width, height });
        }
        let fan = RayFan::new(config.fan)?;
        Ok(Self {
            config,
            fan,
            targets: Vec::new(),
            anchor: config.viewport.to_rect().center(),
            angle: 0.0,
            direction: Vec2::from_angle(0.0),
            stick_position: Vec2::ZERO,
            targeted: None,
            focused: None,
        })
    }

    /// The configuration the resolver was built from.
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// The ray fan, with the origins and angles of the last cast.
    pub fn fan(&self) -> &RayFan {
        &self.fan
    }

    /// Registered targets, in registration order.
    pub fn targets(&self) -> &[Target<K>] {
        &self.targets
    }

    /// Point the next cast starts from.
    pub fn anchor(&self) -> Point {
        self.anchor
    }

    /// Last stick angle, in radians.
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Unit vector for [`angle`](Self::angle).
    pub fn direction(&self) -> Vec2 {
        self.direction
    }

    /// Last reported stick position.
    pub fn stick_position(&self) -> Vec2 {
        self.stick_position
    }

    /// Index of the targeted target, if any.
    pub fn targeted_index(&self) -> Option<usize> {
        self.targeted
    }

    /// Index of the focused target, if any.
    pub fn focused_index(&self) -> Option<usize> {
        self.focused
    }

    /// The targeted target, if any.
    pub fn targeted(&self) -> Option<&Target<K>> {
        self.targeted.and_then(|i| self.targets.get(i))
    }

    /// The focused target, if any.
    pub fn focused(&self) -> Option<&Target<K>> {
        self.focused.and_then(|i| self.targets.get(i))
    }

    /// Append `elements`, snapshotting their bounds from `source`.
    ///
    /// Elements are not de-duplicated: registering the same key twice yields two
    /// targets. If any element has missing or malformed bounds, nothing is
    /// registered.
    pub fn register<I, B>(&mut self, elements: I, source: &B) -> Result<(), ResolverError>
    where
        I: IntoIterator<Item = K>,
        B: BoundsSource<K> + ?Sized,
    {
        let elements: Vec<K> = elements.into_iter().collect();
        let bounds = snapshot(&elements, source)?;
        let added = elements.len();
        self.targets.extend(
            elements
                .into_iter()
                .zip(bounds)
                .map(|(id, bounds)| Target::new(id, bounds)),
        );
        log::debug!(
            "registered {added} targets ({} total)",
            self.targets.len()
        );
        Ok(())
    }

    /// Re-snapshot the bounds of every registered target from `source`.
    ///
    /// Membership, flags and the focus anchor are left alone. If any target
    /// has missing or malformed bounds, no bounds change.
    pub fn refresh<B>(&mut self, source: &B) -> Result<(), ResolverError>
    where
        B: BoundsSource<K> + ?Sized,
    {
        let bounds = snapshot(self.targets.iter().map(Target::id), source)?;
        for (target, bounds) in self.targets.iter_mut().zip(bounds) {
            target.set_bounds(bounds);
        }
        log::debug!("refreshed {} targets", self.targets.len());
        Ok(())
    }

    /// Drop every target, hiding any shown affordance first, and return the
    /// anchor to the viewport center.
    pub fn clear<V: VisualAdapter<K>>(&mut self, visuals: &mut V) {
        for target in &mut self.targets {
            target.set_targeted(false, visuals);
            target.set_focused(false, visuals);
        }
        self.targets.clear();
        self.targeted = None;
        self.focused = None;
        self.anchor = self.config.viewport.to_rect().center();
        log::debug!("cleared targets");
    }

    /// The stick was grabbed. Targeting starts with the first move, so this
    /// does not change any state.
    pub fn on_grab(&mut self, position: Point) {
        log::trace!("stick grabbed at {position:?}");
    }

    /// The stick points at `angle` (radians) with relative deflection `position`.
    ///
    /// Casts the fan and marks the best hit as the only targeted target.
    /// Returns its key, or `None` when nothing was hit; in that case the
    /// previous target stays targeted.
    pub fn on_direction_update<V: VisualAdapter<K>>(
        &mut self,
        angle: f64,
        position: Vec2,
        visuals: &mut V,
    ) -> Result<Option<K>, ResolverError> {
        if !angle.is_finite() {
            return Err(ResolverError::InvalidAngle(angle));
        }
        if !position.is_finite() {
            return Err(ResolverError::InvalidPosition(position));
        }
        self.angle = angle;
        self.direction = Vec2::from_angle(angle);
        self.stick_position = position;

        let Some(best) = self.resolve() else {
            log::trace!("nothing at {angle:.3} rad, keeping current target");
            return Ok(None);
        };
        let index = best.target;
        if self.targeted != Some(index) {
            log::debug!(
                "targeting #{index} (distance {:.1}, priority {:.2})",
                best.distance,
                best.priority
            );
        }
        self.targeted = Some(index);
        let targets = &mut self.targets;
        targets[index].set_targeted(true, visuals);
        for (i, target) in targets.iter_mut().enumerate() {
            if i != index {
                target.set_targeted(false, visuals);
            }
        }
        Ok(Some(targets[index].id().clone()))
    }

    /// The stick was released: commit the best hit for the last direction as
    /// the only focused target and move the anchor to its center.
    ///
    /// Returns the newly focused key, or `None` (leaving focus and anchor
    /// unchanged) when nothing was hit.
    pub fn on_release<V: VisualAdapter<K>>(&mut self, visuals: &mut V) -> Option<K> {
        let Some(best) = self.resolve() else {
            log::trace!("released without a target, keeping focus");
            return None;
        };
        let index = best.target;
        let targets = &mut self.targets;
        targets[index].set_focused(true, visuals);
        for (i, target) in targets.iter_mut().enumerate() {
            if i != index {
                target.set_focused(false, visuals);
            }
        }
        self.focused = Some(index);
        self.anchor = targets[index].center();
        log::debug!("focused #{index}, anchor now {:?}", self.anchor);
        Some(targets[index].id().clone())
    }

    /// Cast the fan for the current anchor and angle and rank the hits.
    pub fn resolve(&mut self) -> Option<Intersection> {
        rank(&self.intersections())
    }

    /// Cast the fan for the current anchor and angle.
    pub fn intersections(&mut self) -> FanHits {
        self.fan.cast(self.anchor, self.angle, &self.targets)
    }
}

fn snapshot<'a, K, B>(
    elements: impl IntoIterator<Item = &'a K>,
    source: &B,
) -> Result<Vec<Rect>, ResolverError>
where
    K: 'a,
    B: BoundsSource<K> + ?Sized,
{
    elements
        .into_iter()
        .enumerate()
        .map(|(index, element)| {
            let bounds = source
                .bounds(element)
                .ok_or(ResolverError::MissingBounds { index })?;
            if bounds_are_valid(&bounds) {
                Ok(bounds)
            } else {
                Err(ResolverError::MalformedBounds { index, bounds })
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::target::{Affordance, NoVisuals};
    use alloc::vec;
    use core::f64::consts::FRAC_PI_2;

    const DOWN: f64 = FRAC_PI_2;
    const UP: f64 = -FRAC_PI_2;

    #[derive(Default)]
    struct Recorder(Vec<(u32, Affordance, bool)>);

    impl VisualAdapter<u32> for Recorder {
        fn set_affordance(&mut self, target: &u32, kind: Affordance, on: bool) {
            self.0.push((*target, kind, on));
        }
    }

    fn layout(items: &[(u32, Rect)]) -> impl Fn(&u32) -> Option<Rect> + '_ {
        move |id| items.iter().find(|(k, _)| k == id).map(|&(_, r)| r)
    }

    /// Resolver anchored at the origin.
    fn resolver() -> TargetResolver<u32> {
        TargetResolver::new(ResolverConfig::new(Size::ZERO)).unwrap()
    }

    fn hit(target: usize, distance: f64, priority: f64) -> Intersection {
        Intersection {
            point: Point::ORIGIN,
            target,
            distance,
            priority,
        }
    }

    #[test]
    fn starts_at_viewport_center_with_nothing_selected() {
        let r: TargetResolver<u32> =
            TargetResolver::new(ResolverConfig::new(Size::new(800.0, 600.0))).unwrap();
        assert_eq!(r.anchor(), Point::new(400.0, 300.0));
        assert!(r.targeted().is_none());
        assert!(r.focused().is_none());
        assert!(r.targets().is_empty());
        assert_eq!(r.fan().len(), 10);
    }

    #[test]
    fn rejects_bad_configuration() {
        let err = TargetResolver::<u32>::new(ResolverConfig::new(Size::new(-1.0, 10.0)));
        assert!(matches!(err, Err(ConfigError::InvalidViewport { .. })));

        let err = TargetResolver::<u32>::new(ResolverConfig::new(Size::new(f64::NAN, 10.0)));
        assert!(matches!(err, Err(ConfigError::InvalidViewport { .. })));

        let err = TargetResolver::<u32>::new(ResolverConfig {
            viewport: Size::new(100.0, 100.0),
            fan: RayFanConfig {
                count: 1,
                spread: 20.0,
            },
        });
        assert!(matches!(err, Err(ConfigError::TooFewRays(1))));
    }

    #[test]
    fn rank_minimizes_weighted_distance() {
        // Near but off-axis (50 * 0.7 = 35) against far but on-axis (80 * 0 = 0).
        let hits = [hit(0, 50.0, 0.3), hit(1, 80.0, 1.0)];
        assert_eq!(rank(&hits).map(|h| h.target), Some(1));

        let hits = [hit(0, 50.0, 0.3), hit(1, 80.0, 0.5)];
        assert_eq!(rank(&hits).map(|h| h.target), Some(0));
    }

    #[test]
    fn rank_ties_keep_first() {
        let hits = [hit(3, 10.0, 0.5), hit(4, 20.0, 0.75), hit(5, 40.0, 1.0)];
        assert_eq!(rank(&hits).map(|h| h.target), Some(5));

        let hits = [hit(3, 10.0, 0.5), hit(4, 20.0, 0.75)];
        assert_eq!(rank(&hits).map(|h| h.target), Some(3));
    }

    #[test]
    fn rank_of_nothing_is_none() {
        assert!(rank(&[]).is_none());
    }

    #[test]
    fn single_target_ahead_is_targeted_by_center_ray() {
        let items = [(1, Rect::new(-10.0, 95.0, 10.0, 105.0))];
        let mut r = resolver();
        r.register([1], &layout(&items)).unwrap();

        let mut rec = Recorder::default();
        let got = r
            .on_direction_update(DOWN, Vec2::new(0.0, 1.0), &mut rec)
            .unwrap();
        assert_eq!(got, Some(1));
        assert_eq!(rec.0, [(1, Affordance::Targeted, true)]);
        assert!(r.targets()[0].is_targeted());
        assert_eq!(r.targeted_index(), Some(0));

        let best = r.resolve().unwrap();
        assert_eq!(best.priority, 1.0);
        assert!((best.distance - 100.0).abs() < 1e-9);
    }

    #[test]
    fn on_axis_beats_nearer_off_axis() {
        let items = [
            // Only crossed by a side ray (priority 0.6) about 50 units out.
            (1, Rect::new(-8.5, 44.4, -7.0, 54.4)),
            // Only crossed by the center ray, 80 units out.
            (2, Rect::new(-2.0, 75.0, 2.0, 85.0)),
        ];
        let mut r = resolver();
        r.register([1, 2], &layout(&items)).unwrap();

        let got = r
            .on_direction_update(DOWN, Vec2::new(0.0, 1.0), &mut NoVisuals)
            .unwrap();
        assert_eq!(got, Some(2));

        let hits = r.intersections();
        assert_eq!(hits.len(), 2);
        let side = hits.iter().find(|h| h.target == 0).unwrap();
        assert!((side.priority - 0.6).abs() < 1e-12);
        assert!((side.distance - 50.0).abs() < 0.1);
    }

    #[test]
    fn nearer_off_axis_wins_without_competition() {
        let items = [(1, Rect::new(-8.5, 44.4, -7.0, 54.4))];
        let mut r = resolver();
        r.register([1], &layout(&items)).unwrap();
        let got = r
            .on_direction_update(DOWN, Vec2::new(0.0, 1.0), &mut NoVisuals)
            .unwrap();
        assert_eq!(got, Some(1));
    }

    #[test]
    fn side_rays_reach_horizontal_neighbours() {
        // Pointing straight right, the center ray runs parallel to every
        // midline, so only the rays tilted upwards can reach this target.
        let items = [(1, Rect::new(100.0, -30.0, 140.0, -10.0))];
        let mut r = resolver();
        r.register([1], &layout(&items)).unwrap();
        let got = r
            .on_direction_update(0.0, Vec2::new(1.0, 0.0), &mut NoVisuals)
            .unwrap();
        assert_eq!(got, Some(1));
        assert!(r.resolve().unwrap().priority < 1.0);
    }

    #[test]
    fn empty_registry_keeps_state() {
        let mut r = resolver();
        let mut rec = Recorder::default();
        assert_eq!(
            r.on_direction_update(DOWN, Vec2::new(0.0, 1.0), &mut rec),
            Ok(None)
        );
        assert!(r.targeted().is_none());
        assert!(rec.0.is_empty());
        // The direction is still recorded.
        assert_eq!(r.angle(), DOWN);
    }

    #[test]
    fn missed_cast_keeps_previous_target() {
        let items = [(1, Rect::new(-10.0, 95.0, 10.0, 105.0))];
        let mut r = resolver();
        r.register([1], &layout(&items)).unwrap();

        let mut rec = Recorder::default();
        r.on_direction_update(DOWN, Vec2::new(0.0, 1.0), &mut rec)
            .unwrap();
        assert_eq!(
            r.on_direction_update(UP, Vec2::new(0.0, -1.0), &mut rec),
            Ok(None)
        );

        assert_eq!(r.targeted_index(), Some(0));
        assert!(r.targets()[0].is_targeted());
        assert_eq!(rec.0.len(), 1);
    }

    #[test]
    fn invalid_direction_is_rejected_without_side_effects() {
        let mut r = resolver();
        assert!(matches!(
            r.on_direction_update(f64::NAN, Vec2::ZERO, &mut NoVisuals),
            Err(ResolverError::InvalidAngle(_))
        ));
        assert!(matches!(
            r.on_direction_update(DOWN, Vec2::new(f64::INFINITY, 0.0), &mut NoVisuals),
            Err(ResolverError::InvalidPosition(_))
        ));
        assert_eq!(r.angle(), 0.0);
        assert_eq!(r.stick_position(), Vec2::ZERO);
    }

    #[test]
    fn release_without_winner_keeps_focus_and_anchor() {
        let items = [(1, Rect::new(-10.0, 95.0, 10.0, 105.0))];
        let mut r = resolver();
        r.register([1], &layout(&items)).unwrap();

        // Never moved: the default angle points right, along the midline.
        let mut rec = Recorder::default();
        assert_eq!(r.on_release(&mut rec), None);
        assert!(r.focused().is_none());
        assert_eq!(r.anchor(), Point::ORIGIN);

        // Focus it, then release while pointing away.
        r.on_direction_update(DOWN, Vec2::new(0.0, 1.0), &mut rec)
            .unwrap();
        assert_eq!(r.on_release(&mut rec), Some(1));
        let anchor = r.anchor();
        r.on_direction_update(UP, Vec2::new(0.0, -1.0), &mut rec)
            .unwrap();
        assert_eq!(r.on_release(&mut rec), None);
        assert_eq!(r.focused_index(), Some(0));
        assert_eq!(r.anchor(), anchor);
    }

    #[test]
    fn release_moves_focus_and_anchor_down_a_column() {
        let items = [
            (1, Rect::new(80.0, 140.0, 120.0, 160.0)),
            (2, Rect::new(80.0, 240.0, 120.0, 260.0)),
        ];
        let mut r: TargetResolver<u32> =
            TargetResolver::new(ResolverConfig::new(Size::new(200.0, 200.0))).unwrap();
        r.register([1, 2], &layout(&items)).unwrap();
        let mut rec = Recorder::default();

        assert_eq!(
            r.on_direction_update(DOWN, Vec2::new(0.0, 1.0), &mut rec),
            Ok(Some(1))
        );
        assert_eq!(r.on_release(&mut rec), Some(1));
        assert_eq!(r.anchor(), Point::new(100.0, 150.0));

        // Casting from the first target's center skips the first target itself.
        assert_eq!(
            r.on_direction_update(DOWN, Vec2::new(0.0, 1.0), &mut rec),
            Ok(Some(2))
        );
        assert_eq!(r.on_release(&mut rec), Some(2));
        assert_eq!(r.anchor(), Point::new(100.0, 250.0));

        assert_eq!(
            rec.0,
            [
                (1, Affordance::Targeted, true),
                (1, Affordance::Focused, true),
                (2, Affordance::Targeted, true),
                (1, Affordance::Targeted, false),
                (2, Affordance::Focused, true),
                (1, Affordance::Focused, false),
            ]
        );
        assert_eq!(r.focused().map(|t| *t.id()), Some(2));
        assert_eq!(r.targeted().map(|t| *t.id()), Some(2));
    }

    #[test]
    fn repeated_updates_do_not_renotify() {
        let items = [(1, Rect::new(-10.0, 95.0, 10.0, 105.0))];
        let mut r = resolver();
        r.register([1], &layout(&items)).unwrap();
        let mut rec = Recorder::default();
        for _ in 0..3 {
            r.on_direction_update(DOWN, Vec2::new(0.0, 1.0), &mut rec)
                .unwrap();
        }
        assert_eq!(rec.0.len(), 1);
    }

    #[test]
    fn duplicate_registration_keeps_a_single_target_flag() {
        let items = [(1, Rect::new(-10.0, 95.0, 10.0, 105.0))];
        let mut r = resolver();
        r.register([1], &layout(&items)).unwrap();
        r.register([1], &layout(&items)).unwrap();
        assert_eq!(r.targets().len(), 2);

        r.on_direction_update(DOWN, Vec2::new(0.0, 1.0), &mut NoVisuals)
            .unwrap();
        let flagged = r.targets().iter().filter(|t| t.is_targeted()).count();
        assert_eq!(flagged, 1);
        assert_eq!(r.targeted_index(), Some(0));
    }

    #[test]
    fn register_is_all_or_nothing() {
        let items = [
            (1, Rect::new(0.0, 0.0, 10.0, 10.0)),
            (2, Rect::new(10.0, 0.0, 0.0, 10.0)),
        ];
        let mut r = resolver();
        assert_eq!(
            r.register([1, 2], &layout(&items)),
            Err(ResolverError::MalformedBounds {
                index: 1,
                bounds: Rect::new(10.0, 0.0, 0.0, 10.0),
            })
        );
        assert_eq!(
            r.register([1, 3], &layout(&items)),
            Err(ResolverError::MissingBounds { index: 1 })
        );
        assert!(r.targets().is_empty());
    }

    #[test]
    fn refresh_updates_bounds_only() {
        let before = [
            (1, Rect::new(-10.0, 95.0, 10.0, 105.0)),
            (2, Rect::new(-10.0, 195.0, 10.0, 205.0)),
        ];
        let mut r = resolver();
        r.register([1, 2], &layout(&before)).unwrap();
        r.on_direction_update(DOWN, Vec2::new(0.0, 1.0), &mut NoVisuals)
            .unwrap();
        r.on_release(&mut NoVisuals);
        let anchor = r.anchor();

        let after = [
            (1, Rect::new(-10.0, 295.0, 10.0, 305.0)),
            (2, Rect::new(50.0, 50.0, 60.0, 60.0)),
        ];
        r.refresh(&layout(&after)).unwrap();

        assert_eq!(r.targets().len(), 2);
        assert_eq!(r.targets()[0].bounds(), after[0].1);
        assert_eq!(r.targets()[1].bounds(), after[1].1);
        assert!(r.targets()[0].is_targeted() && r.targets()[0].is_focused());
        assert!(!r.targets()[1].is_targeted() && !r.targets()[1].is_focused());
        assert_eq!(r.anchor(), anchor);
    }

    #[test]
    fn refresh_failure_leaves_bounds_untouched() {
        let before = [
            (1, Rect::new(0.0, 0.0, 10.0, 10.0)),
            (2, Rect::new(20.0, 0.0, 30.0, 10.0)),
        ];
        let mut r = resolver();
        r.register([1, 2], &layout(&before)).unwrap();

        let partial = [(1, Rect::new(5.0, 5.0, 15.0, 15.0))];
        assert_eq!(
            r.refresh(&layout(&partial)),
            Err(ResolverError::MissingBounds { index: 1 })
        );
        assert_eq!(r.targets()[0].bounds(), before[0].1);
    }

    #[test]
    fn clear_hides_affordances_and_resets_anchor() {
        let items = [(1, Rect::new(-10.0, 95.0, 10.0, 105.0))];
        let mut r = resolver();
        r.register([1], &layout(&items)).unwrap();
        let mut rec = Recorder::default();
        r.on_direction_update(DOWN, Vec2::new(0.0, 1.0), &mut rec)
            .unwrap();
        r.on_release(&mut rec);
        rec.0.clear();

        r.clear(&mut rec);
        assert_eq!(
            rec.0,
            [
                (1, Affordance::Targeted, false),
                (1, Affordance::Focused, false),
            ]
        );
        assert!(r.targets().is_empty());
        assert!(r.targeted().is_none() && r.focused().is_none());
        assert_eq!(r.anchor(), Point::ORIGIN);
    }

    #[test]
    fn grab_changes_nothing() {
        let mut r = resolver();
        r.on_grab(Point::new(3.0, 4.0));
        assert_eq!(r.anchor(), Point::ORIGIN);
        assert_eq!(r.angle(), 0.0);
    }

    #[test]
    fn bounds_source_can_be_a_trait_object() {
        let items = vec![(1, Rect::new(0.0, 0.0, 10.0, 10.0))];
        let source = layout(&items);
        let dyn_source: &dyn BoundsSource<u32> = &source;
        let mut r = resolver();
        r.register([1], dyn_source).unwrap();
        assert_eq!(r.targets()[0].position(), Point::ORIGIN);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn config_round_trips_through_json() {
        let config = ResolverConfig::new(Size::new(1280.0, 720.0));
        let json = serde_json::to_string(&config).unwrap();
        let back: ResolverConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}

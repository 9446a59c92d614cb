// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adapter for Understory Stick.
//!
//! ## Feature
//!
//! Enable with `stick_adapter`.
//!
//! ## Notes
//!
//! [`handle`] maps one [`StickEvent`] onto the matching resolver call. Events
//! are applied in the order `handle` is called; each call runs to completion,
//! so a move always observes the state left by the previous move or release.

use understory_stick::StickEvent;

use crate::error::ResolverError;
use crate::resolver::TargetResolver;
use crate::target::VisualAdapter;

/// What a handled event did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Handled<K> {
    /// The stick was grabbed; nothing changed.
    Grabbed,
    /// A move was resolved. Holds the targeted key, or `None` if the cast hit
    /// nothing and the previous target was kept.
    Targeted(Option<K>),
    /// A release was resolved. Holds the newly focused key, or `None` if focus
    /// was kept.
    Focused(Option<K>),
}

/// Apply one stick event to `resolver`.
///
/// Moves drive [`TargetResolver::on_direction_update`] with the stick angle and
/// its relative position; releases drive [`TargetResolver::on_release`].
pub fn handle<K, V>(
    resolver: &mut TargetResolver<K>,
    event: &StickEvent,
    visuals: &mut V,
) -> Result<Handled<K>, ResolverError>
where
    K: Clone,
    V: VisualAdapter<K>,
{
    match *event {
        StickEvent::Grab { position } => {
            resolver.on_grab(position);
            Ok(Handled::Grabbed)
        }
        StickEvent::Move(motion) => resolver
            .on_direction_update(motion.angle, motion.relative_position, visuals)
            .map(Handled::Targeted),
        StickEvent::Release => Ok(Handled::Focused(resolver.on_release(visuals))),
    }
}

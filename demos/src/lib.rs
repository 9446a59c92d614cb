// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared scaffolding for the Understory ray focus demos.
//!
//! A [`Page`] stands in for a laid-out document: named buttons with bounds.
//! [`PageStyles`] stands in for the styling layer that shows hover and focus
//! affordances.

use std::collections::BTreeMap;

use kurbo::{Rect, Size};
use understory_ray_focus::{Affordance, Affordances, VisualAdapter};

/// A grid of named buttons.
#[derive(Clone, Debug, Default)]
pub struct Page {
    buttons: BTreeMap<&'static str, Rect>,
}

impl Page {
    /// Lay out `names` row by row, `columns` per row, each button `button`
    /// sized with `gap` between neighbours, starting at the top-left corner.
    pub fn grid(names: &[&'static str], columns: usize, button: Size, gap: f64) -> Self {
        let mut buttons = BTreeMap::new();
        for (i, name) in names.iter().enumerate() {
            let (row, col) = (i / columns, i % columns);
            let x = gap + col as f64 * (button.width + gap);
            let y = gap + row as f64 * (button.height + gap);
            buttons.insert(*name, Rect::from_origin_size((x, y), button));
        }
        Self { buttons }
    }

    /// Button names in a stable order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.buttons.keys().copied()
    }

    /// Current bounds of a button.
    pub fn bounds(&self, name: &&'static str) -> Option<Rect> {
        self.buttons.get(name).copied()
    }

    /// Move a button, as a layout pass would.
    pub fn move_button(&mut self, name: &'static str, bounds: Rect) {
        self.buttons.insert(name, bounds);
    }

    /// Smallest size containing every button plus a trailing gap.
    pub fn viewport(&self, gap: f64) -> Size {
        let extent = self
            .buttons
            .values()
            .fold(Rect::ZERO, |acc, rect| acc.union(*rect));
        Size::new(extent.x1 + gap, extent.y1 + gap)
    }
}

/// Hover/focus classes per button, toggled by the resolver.
#[derive(Clone, Debug, Default)]
pub struct PageStyles {
    classes: BTreeMap<&'static str, Affordances>,
}

impl PageStyles {
    /// Affordances currently shown on `name`.
    pub fn classes(&self, name: &str) -> Affordances {
        self.classes.get(name).copied().unwrap_or_default()
    }
}

impl VisualAdapter<&'static str> for PageStyles {
    fn set_affordance(&mut self, target: &&'static str, kind: Affordance, on: bool) {
        let class = match kind {
            Affordance::Targeted => "hover",
            Affordance::Focused => "focus",
        };
        let entry = self.classes.entry(*target).or_default();
        entry.set(kind.flag(), on);
        if on {
            log::info!("{target}: +{class}");
        } else {
            log::info!("{target}: -{class}");
        }
    }
}

// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stick-driven focus over a grid of buttons.
//!
//! This example shows how to combine:
//! - `understory_stick` to turn a pointer drag into stick events,
//! - `understory_ray_focus` to resolve the targeted and focused button,
//! - a channel between the input side and the resolver, so events are
//!   handled strictly in arrival order.
//!
//! Run:
//! - `RUST_LOG=info cargo run -p understory_demos --example stick_navigation`

use std::sync::mpsc;
use std::thread;

use kurbo::{Point, Rect, Size, Vec2};
use understory_demos::{Page, PageStyles};
use understory_ray_focus::adapters::stick::{Handled, handle};
use understory_ray_focus::{ResolverConfig, TargetResolver};
use understory_stick::{StickConfig, StickEmulator, StickEvent};

const GAP: f64 = 20.0;

/// A scripted drag: grab at `from`, move through `path`, release.
fn drag(stick: &mut StickEmulator, from: Point, path: &[Vec2], tx: &mpsc::Sender<StickEvent>) {
    let _ = tx.send(stick.on_drag_start(from));
    for step in path {
        match stick.on_drag(from + *step) {
            Ok(event) => {
                let _ = tx.send(event);
            }
            Err(err) => log::warn!("dropped drag step: {err}"),
        }
    }
    if let Ok(event) = stick.on_drag_end() {
        let _ = tx.send(event);
    }
}

fn main() {
    env_logger::init();

    let names = ["a1", "a2", "a3", "b1", "b2", "b3", "c1", "c2", "c3"];
    let mut page = Page::grid(&names, 3, Size::new(120.0, 40.0), GAP);

    let mut resolver = TargetResolver::new(ResolverConfig::new(page.viewport(GAP)))
        .expect("default fan and a non-empty viewport are valid");
    resolver
        .register(page.names(), &|name: &&'static str| page.bounds(name))
        .expect("every button has bounds");
    let mut styles = PageStyles::default();

    // Input side: a drag down, a drag down-right, and a drag up.
    let (tx, rx) = mpsc::channel();
    let input = thread::spawn(move || {
        let mut stick = StickEmulator::new(StickConfig::default()).expect("default stick is valid");
        let origin = Point::new(600.0, 400.0);
        drag(&mut stick, origin, &[Vec2::new(0.0, 10.0), Vec2::new(2.0, 40.0)], &tx);
        drag(&mut stick, origin, &[Vec2::new(30.0, 30.0)], &tx);
        drag(&mut stick, origin, &[Vec2::new(0.0, -45.0)], &tx);
    });

    for event in rx {
        match handle(&mut resolver, &event, &mut styles) {
            Ok(Handled::Focused(Some(name))) => {
                log::info!("focused {name}, anchor {:?}", resolver.anchor());
            }
            Ok(Handled::Focused(None)) => log::info!("release kept focus"),
            Ok(_) => {}
            Err(err) => log::warn!("ignored stick event: {err}"),
        }
    }
    input.join().expect("input thread panicked");

    // A layout change is invisible until the resolver is refreshed.
    page.move_button("a1", Rect::new(GAP, 300.0, GAP + 120.0, 340.0));
    resolver
        .refresh(&|name: &&'static str| page.bounds(name))
        .expect("every button still has bounds");

    for name in page.names() {
        log::info!("{name}: {:?}", styles.classes(name));
    }
    for (line, priority) in resolver.fan().debug_lines(200.0) {
        log::debug!("ray {:?} -> {:?} (priority {priority:.2})", line.p0, line.p1);
    }
}

//! Bits shared by the demos.

#![allow(dead_code)]

use std::thread;
use std::time::Duration;

use zgraphics::{Key, Shape};

/// Run `scene` inside the frontend, logging its error if it fails.
pub fn launch(scene: fn() -> zgraphics::Result<()>) -> zgraphics::Result<()> {
    zgraphics::run(move || {
        if let Err(e) = scene() {
            log::error!("{e}");
        }
    })
}

/// offset an arrow key stands for, `step` user units per press
pub fn arrow_offset(key: Key, step: f64) -> Option<(f64, f64)> {
    match key {
        Key::Up => Some((0.0, step)),
        Key::Down => Some((0.0, -step)),
        Key::Left => Some((-step, 0.0)),
        Key::Right => Some((step, 0.0)),
        _ => None,
    }
}

/// move `shape` (if any) when `key` is an arrow
pub fn nudge(shape: Option<&mut Shape>, key: Key) -> zgraphics::Result<()> {
    if let (Some(shape), Some((dx, dy))) = (shape, arrow_offset(key, 0.1)) {
        shape.move_by(dx, dy)?;
    }
    Ok(())
}

/// pause between polls so checking input doesn't spin a core
pub fn idle() {
    thread::sleep(Duration::from_millis(10));
}

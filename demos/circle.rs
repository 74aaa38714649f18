//! Each click moves a hot pink circle to the mouse. Arrow keys nudge it.

mod common;

use zgraphics::{GraphWin, Shape};

fn scene() -> zgraphics::Result<()> {
    let win = GraphWin::new("Test Circle", 600, 600)?;
    win.set_background("green")?;
    win.set_coords(-0.1, -0.1, 1.1, 1.1)?;

    let mut circle: Option<Shape> = None;
    while win.is_open() {
        if let Some(p) = win.check_mouse() {
            if let Some(old) = circle.as_mut() {
                old.undraw();
            }
            let mut new = Shape::circle(p, 0.1);
            new.set_outline("black")?;
            new.set_fill("hotpink")?;
            new.draw(&win);
            circle = Some(new);
        }
        if let Some(key) = win.check_key() {
            common::nudge(circle.as_mut(), key)?;
        }
        common::idle();
    }
    Ok(())
}

fn main() -> zgraphics::Result<()> {
    common::launch(scene)
}

//! Two clicks give the corners of a new rectangle, replacing the old one. Arrow
//! keys move it.

mod common;

use zgraphics::{GraphWin, Point, Shape};

fn scene() -> zgraphics::Result<()> {
    let win = GraphWin::new("Test Rectangle", 600, 600)?;
    win.set_background("light blue")?;
    win.set_coords(-0.1, -0.1, 1.1, 1.1)?;

    let mut corner: Option<Point> = None;
    let mut rectangle: Option<Shape> = None;
    while win.is_open() {
        if let Some(p) = win.check_mouse() {
            match corner.take() {
                None => corner = Some(p),
                Some(first) => {
                    if let Some(old) = rectangle.as_mut() {
                        old.undraw();
                    }
                    let mut new = Shape::rectangle(first, p);
                    new.set_outline("black")?;
                    new.set_fill("dark green")?;
                    new.draw(&win);
                    rectangle = Some(new);
                }
            }
        }
        if let Some(key) = win.check_key() {
            common::nudge(rectangle.as_mut(), key)?;
        }
        common::idle();
    }
    Ok(())
}

fn main() -> zgraphics::Result<()> {
    common::launch(scene)
}

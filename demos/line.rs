//! Every two clicks make a new line, replacing the old one. Arrow keys move
//! the line.

mod common;

use zgraphics::{GraphWin, Point, Shape};

fn scene() -> zgraphics::Result<()> {
    let win = GraphWin::new("My Window", 600, 600)?;
    win.set_background("gray")?;
    win.set_coords(0.1, 0.1, 1.2, 1.2)?;

    let mut start: Option<Point> = None;
    let mut line: Option<Shape> = None;
    while win.is_open() {
        if let Some(p) = win.check_mouse() {
            match start.take() {
                None => start = Some(p),
                Some(first) => {
                    if let Some(old) = line.as_mut() {
                        old.undraw();
                    }
                    let mut new = Shape::line(first, p);
                    new.set_outline("maroon")?;
                    new.draw(&win);
                    line = Some(new);
                }
            }
        }
        if let Some(key) = win.check_key() {
            common::nudge(line.as_mut(), key)?;
        }
        common::idle();
    }
    Ok(())
}

fn main() -> zgraphics::Result<()> {
    common::launch(scene)
}

//! An orchid square, plus a polygon that grows a corner with every click.
//! Clicking inward makes it concave. Arrow keys move the newest polygon.

mod common;

use zgraphics::{GraphWin, Point, Shape};

fn scene() -> zgraphics::Result<()> {
    let win = GraphWin::new("Test Polygon", 600, 600)?;
    win.set_background("light blue")?;
    win.set_coords(-0.1, -0.1, 1.1, 1.1)?;

    let mut square = Shape::polygon([
        Point::new(0.0, 0.0),
        Point::new(1.0, 0.0),
        Point::new(1.0, 1.0),
        Point::new(0.0, 1.0),
    ]);
    square.set_outline("black")?;
    square.set_fill("orchid")?;
    square.draw(&win);

    let mut corners = Vec::new();
    let mut polygon: Option<Shape> = None;
    while win.is_open() {
        if let Some(p) = win.check_mouse() {
            // keep corners where the polygon currently is
            if let Some(mut old) = polygon.take() {
                corners = old.points();
                old.undraw();
            }
            corners.push(p);
            let mut new = Shape::polygon(corners.iter().copied());
            new.set_outline("black")?;
            new.set_fill("dark green")?;
            new.draw(&win);
            polygon = Some(new);
        }
        if let Some(key) = win.check_key() {
            common::nudge(polygon.as_mut(), key)?;
        }
        common::idle();
    }
    Ok(())
}

fn main() -> zgraphics::Result<()> {
    common::launch(scene)
}

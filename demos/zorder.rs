//! Five overlapping circles. The red one is drawn first, so the green ones
//! cover it; move it around with the arrow keys.

mod common;

use zgraphics::{GraphWin, Point, Shape};

fn scene() -> zgraphics::Result<()> {
    let win = GraphWin::new("Z-Order", 600, 600)?;
    win.set_background("gray")?;
    win.set_coords(-0.1, -0.1, 1.1, 1.1)?;

    let mut red = Shape::circle(Point::new(0.5, 0.5), 0.2);
    red.set_fill("red")?;
    red.draw(&win);

    let mut greens = Vec::new();
    for (x, y) in [(0.25, 0.25), (0.75, 0.25), (0.75, 0.75), (0.25, 0.75)] {
        let mut c = Shape::circle(Point::new(x, y), 0.2);
        c.set_fill("green")?;
        c.draw(&win);
        greens.push(c);
    }

    while let Some(key) = win.get_key() {
        common::nudge(Some(&mut red), key)?;
    }
    Ok(())
}

fn main() -> zgraphics::Result<()> {
    common::launch(scene)
}

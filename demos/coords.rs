//! Prints each click in user coordinates and the pixel it maps to.

mod common;

use zgraphics::GraphWin;

fn scene() -> zgraphics::Result<()> {
    let win = GraphWin::new("My Window", 600, 600)?;
    win.set_coords(-0.1, -0.1, 1.1, 1.1)?;

    while win.is_open() {
        if let Some(p) = win.check_mouse() {
            println!("Mouse: {:.2} {:.2}", p.x, p.y);
            let (x, y) = win.to_pixel(p);
            println!("Screen: {x} {y}");
        }
        common::idle();
    }
    Ok(())
}

fn main() -> zgraphics::Result<()> {
    common::launch(scene)
}

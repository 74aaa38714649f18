//! Prints every click and key press until the window is closed.

mod common;

use zgraphics::GraphWin;

fn scene() -> zgraphics::Result<()> {
    let win = GraphWin::new("Test Input", 600, 600)?;

    while win.is_open() {
        if let Some(p) = win.check_mouse() {
            println!("Mouse: {:.2} {:.2}", p.x, p.y);
        }
        if let Some(key) = win.check_key() {
            println!("Key: {key}");
        }
        common::idle();
    }
    println!("Closed now.");
    Ok(())
}

fn main() -> zgraphics::Result<()> {
    common::launch(scene)
}

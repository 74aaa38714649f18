//! Zelle's first example: a circle that stays up until you click.

use zgraphics::{GraphWin, Point, Shape};

fn main() -> zgraphics::Result<()> {
    zgraphics::run(|| {
        let win = match GraphWin::new("My Circle", 100, 100) {
            Ok(win) => win,
            Err(e) => {
                log::error!("could not open window: {e}");
                return;
            }
        };
        let mut c = Shape::circle(Point::new(50.0, 50.0), 10.0);
        c.draw(&win);
        win.get_mouse(); // pause to view result
        win.close();
    })
}

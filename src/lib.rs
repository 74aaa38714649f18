//! A small graphics library for beginners, modelled on John Zelle's
//! `graphics.py`.
//!
//! Open a [`GraphWin`], build [`Shape`]s out of [`Point`]s, and draw them:
//!
//! ```no_run
//! use zgraphics::{GraphWin, Point, Shape};
//!
//! zgraphics::run(|| {
//!     let win = GraphWin::new("Click me", 300, 300).unwrap();
//!     win.set_coords(0.0, 0.0, 10.0, 10.0).unwrap();
//!     let mut sun = Shape::circle(Point::new(5.0, 5.0), 2.0);
//!     sun.set_fill("yellow").unwrap();
//!     sun.draw(&win);
//!     while let Some(p) = win.get_mouse() {
//!         let c = sun.center().unwrap();
//!         sun.move_by(p.x - c.x, p.y - c.y).unwrap();
//!     }
//! })
//! .unwrap();
//! ```
//!
//! Shapes are drawn in the order they were drawn; later ones cover earlier
//! ones. Input is polled: a window remembers only the most recent click and
//! the most recent key press.

mod app;
mod color;
mod error;
mod geometry;
mod input;
mod render;
mod shape;
mod transform;
mod window;
mod x11_colors;

pub use app::run;
pub use color::{BLACK, Color, ColorTableRow, IntoColor, WHITE, color_rgb, parse_color_table_line};
pub use error::{GraphicsError, Result};
pub use geometry::{Circle, Figure, Line, Oval, Point, Polygon, Rectangle};
pub use input::{InputEvent, Key};
pub use render::{Canvas, DrawOp, Paint, Primitive, Recorder, Triangles, fill_triangles};
pub use shape::{Capability, Shape, ShapeId, ShapeKind, Style};
pub use transform::Transform;
pub use window::{GraphWin, WindowOptions};

/// Device-space geometry, re-exported so `Primitive`s can be inspected.
pub use kurbo;

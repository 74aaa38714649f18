use kurbo::Point as ScreenPoint;

use crate::error::{GraphicsError, Result};
use crate::geometry::Point;

/// Maps user coordinates onto the pixels of a window.
///
/// `(xmin, ymin)` from `set_coords` lands on the lower-left corner of the
/// window and `(xmax, ymax)` on the upper-right, so user y grows upward
/// while device y grows downward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    width: u32,
    height: u32,
    x_scale: f64,
    y_scale: f64,
    x_offset: f64,
    y_offset: f64,
}

impl Transform {
    /// user coordinates equal device pixels: origin top-left, y down.
    pub fn identity(width: u32, height: u32) -> Self {
        Transform {
            width,
            height,
            x_scale: 1.0,
            y_scale: -1.0,
            x_offset: 0.0,
            y_offset: height as f64 - 1.0,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// remap the window so `(xmin, ymin)` is the lower-left corner and
    /// `(xmax, ymax)` the upper-right one. Zero-width or zero-height spans
    /// are rejected and leave the transform as it was.
    pub fn set_coords(&mut self, xmin: f64, ymin: f64, xmax: f64, ymax: f64) -> Result<()> {
        let dx = xmax - xmin;
        let dy = ymax - ymin;
        if dx == 0.0 || dy == 0.0 || !dx.is_finite() || !dy.is_finite() {
            return Err(GraphicsError::DegenerateCoords {
                xmin,
                ymin,
                xmax,
                ymax,
            });
        }

        self.x_scale = self.width as f64 / dx;
        self.y_scale = self.height as f64 / dy;
        self.x_offset = xmin;
        self.y_offset = ymin;
        Ok(())
    }

    /// given a point in the user's coordinate system,
    /// return the point in device space.
    pub fn to_screen(&self, p: Point) -> ScreenPoint {
        ScreenPoint::new(
            (p.x - self.x_offset) * self.x_scale,
            self.bottom() - (p.y - self.y_offset) * self.y_scale,
        )
    }

    pub fn to_user(&self, s: ScreenPoint) -> Point {
        Point::new(
            s.x / self.x_scale + self.x_offset,
            (self.bottom() - s.y) / self.y_scale + self.y_offset,
        )
    }

    /// whole device pixel for `p`: truncated toward zero, then clamped to
    /// `0..=width` horizontally and `0..=height-1` vertically.
    pub fn to_pixel(&self, p: Point) -> (i32, i32) {
        // clamp while still in f64; far-off points would overflow i32
        let x = ((p.x - self.x_offset) * self.x_scale).trunc();
        let y = self.bottom() - ((p.y - self.y_offset) * self.y_scale).trunc();
        (
            x.clamp(0.0, self.width as f64) as i32,
            y.clamp(0.0, self.bottom().max(0.0)) as i32,
        )
    }

    /// a horizontal user distance in pixels
    pub fn x_dist(&self, dx: f64) -> f64 {
        dx * self.x_scale
    }

    /// a vertical user distance in pixels (negative when the axis is flipped)
    pub fn y_dist(&self, dy: f64) -> f64 {
        dy * self.y_scale
    }

    // last pixel row
    fn bottom(&self) -> f64 {
        self.height as f64 - 1.0
    }
}

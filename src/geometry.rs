//! User-space geometry: points and the figures shapes are made of.
//!
//! Everything here is plain data. `Point` is `Copy`, so a figure built from a
//! point always owns its own copy and later changes to the caller's point
//! never reach the figure.

use kurbo::{Ellipse, Line as KLine, Rect};

use crate::render::Primitive;
use crate::transform::Transform;

/// A point in user coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.x += dx;
        self.y += dy;
    }

    pub fn midpoint(a: Point, b: Point) -> Point {
        Point::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    p1: Point,
    p2: Point,
}

impl Line {
    pub fn new(p1: Point, p2: Point) -> Self {
        Line { p1, p2 }
    }

    pub fn p1(&self) -> Point {
        self.p1
    }

    pub fn p2(&self) -> Point {
        self.p2
    }

    pub fn center(&self) -> Point {
        Point::midpoint(self.p1, self.p2)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    center: Point,
    radius: f64,
}

impl Circle {
    pub fn new(center: Point, radius: f64) -> Self {
        Circle { center, radius }
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// lower-left corner of the bounding box
    pub fn p1(&self) -> Point {
        Point::new(self.center.x - self.radius, self.center.y - self.radius)
    }

    /// upper-right corner of the bounding box
    pub fn p2(&self) -> Point {
        Point::new(self.center.x + self.radius, self.center.y + self.radius)
    }
}

/// An ellipse inscribed in the box with corners `p1` and `p2`.
#[derive(Debug, Clone, PartialEq)]
pub struct Oval {
    p1: Point,
    p2: Point,
}

impl Oval {
    pub fn new(p1: Point, p2: Point) -> Self {
        Oval { p1, p2 }
    }

    pub fn p1(&self) -> Point {
        self.p1
    }

    pub fn p2(&self) -> Point {
        self.p2
    }

    pub fn center(&self) -> Point {
        Point::midpoint(self.p1, self.p2)
    }
}

/// An axis-aligned rectangle with opposite corners `p1` and `p2`.
/// The corners are kept in the order they were given.
#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    p1: Point,
    p2: Point,
}

impl Rectangle {
    pub fn new(p1: Point, p2: Point) -> Self {
        Rectangle { p1, p2 }
    }

    pub fn p1(&self) -> Point {
        self.p1
    }

    pub fn p2(&self) -> Point {
        self.p2
    }

    pub fn center(&self) -> Point {
        Point::midpoint(self.p1, self.p2)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    points: Vec<Point>,
}

impl Polygon {
    pub fn new(points: impl IntoIterator<Item = Point>) -> Self {
        Polygon {
            points: points.into_iter().collect(),
        }
    }

    /// a copy of the vertices, in order.
    pub fn points(&self) -> Vec<Point> {
        self.points.clone()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// The closed set of things a shape can be.
#[derive(Debug, Clone, PartialEq)]
pub enum Figure {
    Point(Point),
    Line(Line),
    Circle(Circle),
    Oval(Oval),
    Rectangle(Rectangle),
    Polygon(Polygon),
}

impl Figure {
    /// move the geometry by (dx, dy) in user coordinates
    pub fn translate(&mut self, dx: f64, dy: f64) {
        match self {
            Figure::Point(p) => p.translate(dx, dy),
            Figure::Line(l) => {
                l.p1.translate(dx, dy);
                l.p2.translate(dx, dy);
            }
            Figure::Circle(c) => c.center.translate(dx, dy),
            Figure::Oval(o) => {
                o.p1.translate(dx, dy);
                o.p2.translate(dx, dy);
            }
            Figure::Rectangle(r) => {
                r.p1.translate(dx, dy);
                r.p2.translate(dx, dy);
            }
            Figure::Polygon(poly) => {
                for p in &mut poly.points {
                    p.translate(dx, dy);
                }
            }
        }
    }

    /// map the figure into device space.
    ///
    /// Rectangles and ovals are normalised here (`Rect::from_points`), so a
    /// box given as upper-right then lower-left renders the same as the
    /// other way round while the stored corners stay untouched.
    pub fn to_device(&self, tf: &Transform) -> Primitive {
        match self {
            Figure::Point(p) => Primitive::Dot(tf.to_screen(*p)),
            Figure::Line(l) => Primitive::Segment(KLine::new(tf.to_screen(l.p1), tf.to_screen(l.p2))),
            Figure::Circle(c) => {
                // y scale is negative under the default flip, radii are not
                let radii = (tf.x_dist(c.radius).abs(), tf.y_dist(c.radius).abs());
                Primitive::Ellipse(Ellipse::new(tf.to_screen(c.center), radii, 0.0))
            }
            Figure::Oval(o) => {
                let bounds = Rect::from_points(tf.to_screen(o.p1), tf.to_screen(o.p2));
                Primitive::Ellipse(Ellipse::from_rect(bounds))
            }
            Figure::Rectangle(r) => {
                Primitive::Rect(Rect::from_points(tf.to_screen(r.p1), tf.to_screen(r.p2)))
            }
            Figure::Polygon(poly) => {
                Primitive::Polygon(poly.points.iter().map(|p| tf.to_screen(*p)).collect())
            }
        }
    }
}

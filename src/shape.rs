use std::fmt;
use std::sync::Weak;
use std::sync::atomic::{AtomicU64, Ordering};

use log::debug;

use crate::color::{BLACK, Color, IntoColor};
use crate::error::{GraphicsError, Result};
use crate::geometry::{Circle, Figure, Line, Oval, Point, Polygon, Rectangle};
use crate::render::DrawOp;
use crate::transform::Transform;
use crate::window::{GraphWin, WindowShared};

/// Identity of a shape. Display lists find their entries by id, never by
/// comparing geometry, so two identical circles are still two shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShapeId(u64);

impl ShapeId {
    fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        ShapeId(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Point,
    Line,
    Circle,
    Oval,
    Rectangle,
    Polygon,
}

/// Optional operations a shape may or may not have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    Fill,
    Outline,
    Width,
}

impl ShapeKind {
    pub fn supports(self, capability: Capability) -> bool {
        match capability {
            Capability::Outline => true,
            Capability::Fill => !matches!(self, ShapeKind::Point | ShapeKind::Line),
            Capability::Width => self != ShapeKind::Point,
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ShapeKind::Point => "point",
            ShapeKind::Line => "line",
            ShapeKind::Circle => "circle",
            ShapeKind::Oval => "oval",
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Polygon => "polygon",
        };
        f.write_str(name)
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Capability::Fill => "fill",
            Capability::Outline => "outline",
            Capability::Width => "width",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Style {
    pub outline: Color,
    // None = unfilled
    pub fill: Option<Color>,
    pub width: f32,
}

impl Default for Style {
    fn default() -> Self {
        Style {
            outline: BLACK,
            fill: None,
            width: 1.0,
        }
    }
}

impl Figure {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Figure::Point(_) => ShapeKind::Point,
            Figure::Line(_) => ShapeKind::Line,
            Figure::Circle(_) => ShapeKind::Circle,
            Figure::Oval(_) => ShapeKind::Oval,
            Figure::Rectangle(_) => ShapeKind::Rectangle,
            Figure::Polygon(_) => ShapeKind::Polygon,
        }
    }
}

/// render a figure with its style: the interior first (if filled), then
/// the outline on top of it.
pub(crate) fn render(figure: &Figure, style: &Style, tf: &Transform) -> Vec<DrawOp> {
    let primitive = figure.to_device(tf);
    let mut ops = Vec::with_capacity(2);
    if let Some(fill) = style.fill {
        if figure.kind().supports(Capability::Fill) {
            ops.push(DrawOp::fill(primitive.clone(), fill));
        }
    }
    ops.push(DrawOp::stroke(primitive, style.outline, style.width));
    ops
}

/// A drawable figure.
///
/// Shapes start out detached. `draw` puts a copy into a window's display
/// list and remembers the window through a weak handle; from then on style
/// changes and moves are pushed to that copy until `undraw`.
#[derive(Debug)]
pub struct Shape {
    id: ShapeId,
    figure: Figure,
    style: Style,
    window: Option<Weak<WindowShared>>,
}

impl Shape {
    pub fn new(figure: Figure) -> Self {
        Shape {
            id: ShapeId::next(),
            figure,
            style: Style::default(),
            window: None,
        }
    }

    pub fn point(p: Point) -> Self {
        Shape::new(Figure::Point(p))
    }

    pub fn line(p1: Point, p2: Point) -> Self {
        Shape::new(Figure::Line(Line::new(p1, p2)))
    }

    pub fn circle(center: Point, radius: f64) -> Self {
        Shape::new(Figure::Circle(Circle::new(center, radius)))
    }

    pub fn oval(p1: Point, p2: Point) -> Self {
        Shape::new(Figure::Oval(Oval::new(p1, p2)))
    }

    pub fn rectangle(p1: Point, p2: Point) -> Self {
        Shape::new(Figure::Rectangle(Rectangle::new(p1, p2)))
    }

    pub fn polygon(points: impl IntoIterator<Item = Point>) -> Self {
        Shape::new(Figure::Polygon(Polygon::new(points)))
    }

    pub fn id(&self) -> ShapeId {
        self.id
    }

    pub fn kind(&self) -> ShapeKind {
        self.figure.kind()
    }

    pub fn supports(&self, capability: Capability) -> bool {
        self.kind().supports(capability)
    }

    pub fn figure(&self) -> &Figure {
        &self.figure
    }

    pub fn style(&self) -> &Style {
        &self.style
    }

    pub fn is_drawn(&self) -> bool {
        self.window().is_some()
    }

    /// first defining point: a line's start, a box's first corner, a
    /// circle's lower-left bounding corner. `None` for points and polygons.
    pub fn p1(&self) -> Option<Point> {
        match &self.figure {
            Figure::Line(l) => Some(l.p1()),
            Figure::Circle(c) => Some(c.p1()),
            Figure::Oval(o) => Some(o.p1()),
            Figure::Rectangle(r) => Some(r.p1()),
            Figure::Point(_) | Figure::Polygon(_) => None,
        }
    }

    pub fn p2(&self) -> Option<Point> {
        match &self.figure {
            Figure::Line(l) => Some(l.p2()),
            Figure::Circle(c) => Some(c.p2()),
            Figure::Oval(o) => Some(o.p2()),
            Figure::Rectangle(r) => Some(r.p2()),
            Figure::Point(_) | Figure::Polygon(_) => None,
        }
    }

    pub fn center(&self) -> Option<Point> {
        match &self.figure {
            Figure::Point(p) => Some(*p),
            Figure::Line(l) => Some(l.center()),
            Figure::Circle(c) => Some(c.center()),
            Figure::Oval(o) => Some(o.center()),
            Figure::Rectangle(r) => Some(r.center()),
            Figure::Polygon(_) => None,
        }
    }

    pub fn radius(&self) -> Option<f64> {
        match &self.figure {
            Figure::Circle(c) => Some(c.radius()),
            _ => None,
        }
    }

    /// the points the shape was built from (copies).
    pub fn points(&self) -> Vec<Point> {
        match &self.figure {
            Figure::Point(p) => vec![*p],
            Figure::Line(l) => vec![l.p1(), l.p2()],
            Figure::Circle(c) => vec![c.center()],
            Figure::Oval(o) => vec![o.p1(), o.p2()],
            Figure::Rectangle(r) => vec![r.p1(), r.p2()],
            Figure::Polygon(poly) => poly.points(),
        }
    }

    pub fn set_outline(&mut self, color: impl IntoColor) -> Result<()> {
        self.require(Capability::Outline)?;
        self.style.outline = color.into_color()?;
        self.sync(true);
        Ok(())
    }

    pub fn set_fill(&mut self, color: impl IntoColor) -> Result<()> {
        self.require(Capability::Fill)?;
        self.style.fill = Some(color.into_color()?);
        self.sync(true);
        Ok(())
    }

    /// outline width in pixels
    pub fn set_width(&mut self, pixels: f32) -> Result<()> {
        self.require(Capability::Width)?;
        self.style.width = pixels;
        self.sync(true);
        Ok(())
    }

    /// Add the shape to the window's display list and render it.
    /// Does nothing if the shape is already drawn somewhere.
    pub fn draw(&mut self, win: &GraphWin) {
        if self.is_drawn() {
            debug!("{} {:?} is already drawn, ignoring draw", self.kind(), self.id);
            return;
        }
        win.shared().attach(self.id, self.figure.clone(), self.style);
        self.window = Some(win.downgrade());
    }

    /// Remove the shape from its window. Does nothing if it isn't drawn.
    pub fn undraw(&mut self) {
        if let Some(win) = self.window.take().and_then(|w| w.upgrade()) {
            win.detach(self.id);
        }
    }

    /// Move a drawn shape by (dx, dy) user units and repaint its window.
    pub fn move_by(&mut self, dx: f64, dy: f64) -> Result<()> {
        let win = self.window().ok_or(GraphicsError::NotDrawn)?;
        self.figure.translate(dx, dy);
        win.update(self.id, &self.figure, &self.style, true);
        Ok(())
    }

    /// Move the geometry by (dx, dy) user units. Works on detached shapes;
    /// a drawn shape shows the new position at its window's next repaint.
    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.figure.translate(dx, dy);
        self.sync(false);
    }

    fn window(&self) -> Option<std::sync::Arc<WindowShared>> {
        self.window.as_ref().and_then(Weak::upgrade)
    }

    fn require(&self, capability: Capability) -> Result<()> {
        if self.supports(capability) {
            Ok(())
        } else {
            Err(GraphicsError::Unsupported {
                kind: self.kind(),
                capability,
            })
        }
    }

    // push the current geometry and style into the window's copy
    fn sync(&self, repaint: bool) {
        if let Some(win) = self.window() {
            win.update(self.id, &self.figure, &self.style, repaint);
        }
    }
}

/// Copies geometry and style. The copy is a new, undrawn shape.
impl Clone for Shape {
    fn clone(&self) -> Self {
        Shape {
            id: ShapeId::next(),
            figure: self.figure.clone(),
            style: self.style,
            window: None,
        }
    }
}

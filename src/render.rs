//! Device-space drawing operations.
//!
//! Shapes never talk to a GUI directly. Rendering a shape produces a short
//! list of `DrawOp`s (fill first, then outline) which a window keeps as its
//! current frame, and any `Canvas` can replay that frame.

use kurbo::{Ellipse, Line, PathEl, Point as ScreenPoint, Rect, Shape as _};
use log::warn;
use lyon_tessellation::math::point;
use lyon_tessellation::path::Path;
use lyon_tessellation::{BuffersBuilder, FillOptions, FillTessellator, FillVertex, VertexBuffers};

use crate::color::Color;

/// Triangles covering the inside of a closed outline.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Triangles {
    pub vertices: Vec<ScreenPoint>,
    /// three indices into `vertices` per triangle
    pub indices: Vec<u32>,
}

impl Triangles {
    pub fn iter(&self) -> impl Iterator<Item = [ScreenPoint; 3]> + '_ {
        self.indices.chunks_exact(3).map(|t| {
            [
                self.vertices[t[0] as usize],
                self.vertices[t[1] as usize],
                self.vertices[t[2] as usize],
            ]
        })
    }
}

/// Tessellate the inside of a closed polyline with the even-odd rule, so
/// concave and self-crossing outlines fill the way they are drawn.
pub fn fill_triangles(outline: &[ScreenPoint]) -> Triangles {
    if outline.len() < 3 {
        return Triangles::default();
    }

    let mut builder = Path::builder();
    builder.begin(point(outline[0].x as f32, outline[0].y as f32));
    for p in &outline[1..] {
        builder.line_to(point(p.x as f32, p.y as f32));
    }
    builder.end(true);
    let path = builder.build();

    let mut buffers: VertexBuffers<ScreenPoint, u32> = VertexBuffers::new();
    let result = FillTessellator::new().tessellate_path(
        &path,
        &FillOptions::even_odd(),
        &mut BuffersBuilder::new(&mut buffers, |v: FillVertex| {
            let p = v.position();
            ScreenPoint::new(p.x as f64, p.y as f64)
        }),
    );
    if let Err(e) = result {
        warn!("could not fill outline of {} points: {e:?}", outline.len());
        return Triangles::default();
    }

    Triangles {
        vertices: buffers.vertices,
        indices: buffers.indices,
    }
}

/// Geometry in device pixels.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Dot(ScreenPoint),
    Segment(Line),
    Rect(Rect),
    Ellipse(Ellipse),
    Polygon(Vec<ScreenPoint>),
}

impl Primitive {
    /// the boundary as a closed polyline; curves are flattened to within
    /// `tolerance` pixels
    pub fn outline(&self, tolerance: f64) -> Vec<ScreenPoint> {
        match self {
            Primitive::Dot(p) => vec![*p],
            Primitive::Segment(line) => vec![line.p0, line.p1],
            Primitive::Rect(r) => vec![
                ScreenPoint::new(r.x0, r.y0),
                ScreenPoint::new(r.x1, r.y0),
                ScreenPoint::new(r.x1, r.y1),
                ScreenPoint::new(r.x0, r.y1),
            ],
            Primitive::Ellipse(e) => {
                let mut points = Vec::new();
                kurbo::flatten(e.path_elements(tolerance), tolerance, |el| match el {
                    PathEl::MoveTo(p) | PathEl::LineTo(p) => points.push(p),
                    _ => {}
                });
                points
            }
            Primitive::Polygon(points) => points.clone(),
        }
    }
}

/// How a primitive is painted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Paint {
    Fill(Color),
    Stroke { color: Color, width: f32 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct DrawOp {
    pub primitive: Primitive,
    pub paint: Paint,
}

impl DrawOp {
    pub fn fill(primitive: Primitive, color: Color) -> Self {
        DrawOp {
            primitive,
            paint: Paint::Fill(color),
        }
    }

    pub fn stroke(primitive: Primitive, color: Color, width: f32) -> Self {
        DrawOp {
            primitive,
            paint: Paint::Stroke { color, width },
        }
    }
}

/// Something a window's frame can be presented on.
///
/// - `clear` is called once per presentation, before any op
/// - `paint` is called for every op, in display-list order
pub trait Canvas {
    fn clear(&mut self, background: Color);

    fn paint(&mut self, op: &DrawOp);
}

/// A canvas that just keeps what it was asked to draw.
#[derive(Debug, Default, Clone)]
pub struct Recorder {
    pub background: Option<Color>,
    pub ops: Vec<DrawOp>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Canvas for Recorder {
    fn clear(&mut self, background: Color) {
        self.background = Some(background);
        self.ops.clear();
    }

    fn paint(&mut self, op: &DrawOp) {
        self.ops.push(op.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ellipse_outline_stays_on_the_ellipse() {
        let e = Ellipse::new((50.0, 40.0), (20.0, 10.0), 0.0);
        let outline = Primitive::Ellipse(e).outline(0.1);
        assert!(outline.len() > 8);
        for p in outline {
            let nx = (p.x - 50.0) / 20.0;
            let ny = (p.y - 40.0) / 10.0;
            let r = nx * nx + ny * ny;
            assert!((r - 1.0).abs() < 0.05, "{p:?} is off the ellipse");
        }
    }

    #[test]
    fn rect_outline_is_its_corners() {
        let r = Rect::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(
            Primitive::Rect(r).outline(0.1),
            vec![
                ScreenPoint::new(1.0, 2.0),
                ScreenPoint::new(3.0, 2.0),
                ScreenPoint::new(3.0, 4.0),
                ScreenPoint::new(1.0, 4.0),
            ]
        );
    }

    // barycentric sign test, edges included
    fn covers(tri: [ScreenPoint; 3], p: ScreenPoint) -> bool {
        let side = |a: ScreenPoint, b: ScreenPoint| (b.x - a.x) * (p.y - a.y) - (b.y - a.y) * (p.x - a.x);
        let d = [side(tri[0], tri[1]), side(tri[1], tri[2]), side(tri[2], tri[0])];
        let neg = d.iter().any(|&v| v < 0.0);
        let pos = d.iter().any(|&v| v > 0.0);
        !(neg && pos)
    }

    fn l_shape() -> Vec<ScreenPoint> {
        // 0..20 square with its top-right 10x10 quarter cut away
        [(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (20.0, 10.0), (20.0, 20.0), (0.0, 20.0)]
            .into_iter()
            .map(ScreenPoint::from)
            .collect()
    }

    #[test]
    fn concave_fill_stays_inside_the_outline() {
        let tris = fill_triangles(&l_shape());
        assert!(!tris.indices.is_empty());
        assert_eq!(tris.indices.len() % 3, 0);

        let notch = ScreenPoint::new(15.0, 5.0);
        assert!(tris.iter().all(|t| !covers(t, notch)), "fill leaked into the notch");
        for inside in [ScreenPoint::new(5.0, 5.0), ScreenPoint::new(15.0, 15.0)] {
            assert!(tris.iter().any(|t| covers(t, inside)), "{inside:?} left unfilled");
        }
    }

    #[test]
    fn fewer_than_three_points_fill_nothing() {
        let two = [ScreenPoint::new(0.0, 0.0), ScreenPoint::new(5.0, 5.0)];
        assert_eq!(fill_triangles(&two), Triangles::default());
    }

    #[test]
    fn recorder_clear_drops_old_ops() {
        let mut rec = Recorder::new();
        rec.paint(&DrawOp::fill(Primitive::Dot(ScreenPoint::ORIGIN), Color::rgb(1, 1, 1)));
        rec.clear(Color::rgb(9, 9, 9));
        assert!(rec.ops.is_empty());
        assert_eq!(rec.background, Some(Color::rgb(9, 9, 9)));
    }
}

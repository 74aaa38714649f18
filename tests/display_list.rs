use test_log::test;
use zgraphics::kurbo;
use zgraphics::{
    Color, DrawOp, GraphWin, GraphicsError, Paint, Point, Primitive, Recorder, Shape, WindowOptions,
};

fn square(x: f64, y: f64) -> Shape {
    Shape::rectangle(Point::new(x, y), Point::new(x + 10.0, y + 10.0))
}

#[test]
fn undraw_leaves_only_the_remaining_shape() {
    let win = GraphWin::headless(100, 100);
    let mut a = square(0.0, 0.0);
    let mut b = square(50.0, 50.0);
    b.set_fill("blue").unwrap();
    a.draw(&win);
    b.draw(&win);
    assert_eq!(win.drawn_count(), 2);

    a.undraw();
    assert_eq!(win.drawn_count(), 1);
    assert!(!a.is_drawn());

    let alone = GraphWin::headless(100, 100);
    let mut b2 = b.clone();
    b2.draw(&alone);
    assert_eq!(win.snapshot(), alone.snapshot());
}

#[test]
fn identical_shapes_are_removed_by_identity() {
    let win = GraphWin::headless(100, 100);
    let mut a = square(0.0, 0.0);
    let mut b = a.clone();
    b.set_outline("red").unwrap();
    a.draw(&win);
    b.draw(&win);

    b.undraw();
    let frame = win.snapshot();
    assert_eq!(frame.len(), 1);
    assert!(matches!(
        frame[0].paint,
        Paint::Stroke { color, .. } if color == Color::rgb(0, 0, 0)
    ));
}

#[test]
fn later_shapes_paint_over_earlier_ones() {
    let win = GraphWin::headless(100, 100);
    let mut bottom = square(0.0, 0.0);
    let mut top = Shape::circle(Point::new(5.0, 5.0), 3.0);
    bottom.set_fill("green").unwrap();
    top.set_fill("red").unwrap();
    bottom.draw(&win);
    top.draw(&win);

    let frame = win.snapshot();
    assert_eq!(frame.len(), 4);
    assert!(matches!(frame[0].primitive, Primitive::Rect(_)));
    assert_eq!(frame[0].paint, Paint::Fill(Color::named("green").unwrap()));
    assert!(matches!(frame[2].primitive, Primitive::Ellipse(_)));
    assert_eq!(frame[2].paint, Paint::Fill(Color::rgb(255, 0, 0)));
}

#[test]
fn drawing_twice_is_ignored() {
    let win = GraphWin::headless(100, 100);
    let other = GraphWin::headless(100, 100);
    let mut s = square(1.0, 1.0);
    s.draw(&win);
    s.draw(&win);
    s.draw(&other);
    assert_eq!(win.drawn_count(), 1);
    assert_eq!(other.drawn_count(), 0);

    // once undrawn it can go somewhere else
    s.undraw();
    s.draw(&other);
    assert_eq!(win.drawn_count(), 0);
    assert_eq!(other.drawn_count(), 1);
}

#[test]
fn move_repaints_right_away() {
    let win = GraphWin::headless(100, 100);
    let mut s = Shape::line(Point::new(0.0, 0.0), Point::new(10.0, 0.0));
    s.draw(&win);
    s.move_by(5.0, 0.0).unwrap();

    let frame = win.snapshot();
    assert_eq!(frame.len(), 1);
    let Primitive::Segment(line) = frame[0].primitive else {
        panic!("expected a segment, got {:?}", frame[0].primitive);
    };
    assert_eq!(line.p0, kurbo::Point::new(5.0, 0.0));
    assert_eq!(line.p1, kurbo::Point::new(15.0, 0.0));
    assert_eq!(s.p1(), Some(Point::new(5.0, 0.0)));
    assert!(!win.is_dirty());
}

#[test]
fn without_autoflush_changes_wait_for_flush() {
    let win = GraphWin::headless_with(WindowOptions::new("t", 100, 100).autoflush(false));
    let mut a = square(0.0, 0.0);
    let mut b = square(20.0, 20.0);
    a.draw(&win);
    b.draw(&win);
    // drawing still shows up immediately
    assert_eq!(win.snapshot().len(), 2);

    a.undraw();
    b.move_by(1.0, 1.0).unwrap();
    assert!(win.is_dirty());
    assert_eq!(win.snapshot().len(), 2);

    win.flush();
    assert!(!win.is_dirty());
    let frame = win.snapshot();
    assert_eq!(frame.len(), 1);
    let Primitive::Rect(r) = frame[0].primitive else {
        panic!("expected a rect");
    };
    assert_eq!((r.x0, r.x1), (21.0, 31.0));
}

#[test]
fn translate_waits_for_the_next_repaint() {
    let win = GraphWin::headless(100, 100);
    let mut s = Shape::point(Point::new(1.0, 1.0));
    s.draw(&win);
    let before = win.snapshot();

    s.translate(2.0, 2.0);
    assert_eq!(win.snapshot(), before);
    assert!(win.is_dirty());

    win.update();
    assert_eq!(
        win.snapshot()[0].primitive,
        Primitive::Dot(kurbo::Point::new(3.0, 3.0))
    );
}

#[test]
fn style_changes_reach_the_window() {
    let win = GraphWin::headless(100, 100);
    let mut s = Shape::oval(Point::new(10.0, 10.0), Point::new(30.0, 20.0));
    s.draw(&win);
    assert_eq!(win.snapshot().len(), 1);

    s.set_fill("yellow").unwrap();
    s.set_width(3.0).unwrap();
    let frame = win.snapshot();
    assert_eq!(frame.len(), 2);
    assert_eq!(frame[0].paint, Paint::Fill(Color::rgb(255, 255, 0)));
    assert!(matches!(frame[1].paint, Paint::Stroke { width, .. } if width == 3.0));
}

#[test]
fn coordinates_apply_on_draw() {
    let win = GraphWin::headless(200, 200);
    win.set_coords(0.0, 0.0, 100.0, 100.0).unwrap();
    let mut s = Shape::rectangle(Point::new(0.0, 0.0), Point::new(100.0, 100.0));
    s.draw(&win);

    let ops: Vec<DrawOp> = win.snapshot();
    let Primitive::Rect(r) = ops[0].primitive else {
        panic!("expected a rect");
    };
    assert_eq!((r.x0, r.y0, r.x1, r.y1), (0.0, -1.0, 200.0, 199.0));
    assert_eq!(win.to_pixel(Point::new(0.0, 0.0)), (0, 199));
    assert_eq!(win.to_pixel(Point::new(100.0, 100.0)), (200, 0));
}

#[test]
fn dropped_window_detaches_its_shapes() {
    let win = GraphWin::headless(100, 100);
    let mut s = square(0.0, 0.0);
    s.draw(&win);
    assert!(s.is_drawn());

    drop(win);
    assert!(!s.is_drawn());
    assert!(matches!(s.move_by(1.0, 1.0), Err(GraphicsError::NotDrawn)));
    s.undraw();
    s.set_fill("red").unwrap();
}

#[test]
fn present_replays_onto_a_canvas() {
    let win = GraphWin::headless(50, 50);
    win.set_background((10u8, 20u8, 30u8)).unwrap();
    let mut s = Shape::polygon([
        Point::new(0.0, 0.0),
        Point::new(10.0, 0.0),
        Point::new(5.0, 8.0),
    ]);
    s.draw(&win);

    let mut canvas = Recorder::new();
    win.present(&mut canvas);
    assert_eq!(canvas.background, Some(Color::rgb(10, 20, 30)));
    assert_eq!(canvas.ops, win.snapshot());
}

//! `GraphWin`: a window with a display list, a coordinate transform, and
//! polled mouse/keyboard input.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use eframe::egui;
use kurbo::Point as ScreenPoint;
use log::{debug, info};

use crate::color::{Color, IntoColor, WHITE};
use crate::error::Result;
use crate::geometry::{Figure, Point};
use crate::input::{InputEvent, InputSlots, Key};
use crate::render::{Canvas, DrawOp};
use crate::shape::{ShapeId, Style, render};
use crate::transform::Transform;

/// Settings for a new window.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowOptions {
    pub title: String,
    pub width: u32,
    pub height: u32,
    /// repaint after every undraw, move and style change. When off, those
    /// only show up after `flush`.
    pub autoflush: bool,
    pub background: Color,
}

impl Default for WindowOptions {
    fn default() -> Self {
        WindowOptions {
            title: "Graphics Window".to_string(),
            width: 600,
            height: 600,
            autoflush: true,
            background: WHITE,
        }
    }
}

impl WindowOptions {
    pub fn new(title: &str, width: u32, height: u32) -> Self {
        WindowOptions {
            title: title.to_string(),
            width,
            height,
            ..Default::default()
        }
    }

    pub fn autoflush(mut self, autoflush: bool) -> Self {
        self.autoflush = autoflush;
        self
    }

    pub fn background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }
}

#[derive(Debug)]
struct Entry {
    id: ShapeId,
    figure: Figure,
    style: Style,
}

#[derive(Debug)]
struct Scene {
    transform: Transform,
    background: Color,
    // drawn shapes, oldest (bottom) first
    display: Vec<Entry>,
    // what is currently on screen
    frame: Vec<DrawOp>,
    autoflush: bool,
    dirty: bool,
}

impl Scene {
    fn repaint(&mut self) {
        let tf = self.transform;
        self.frame = self
            .display
            .iter()
            .flat_map(|e| render(&e.figure, &e.style, &tf))
            .collect();
        self.dirty = false;
    }

    // repaint now, or leave it for the next flush
    fn invalidate(&mut self) {
        if self.autoflush {
            self.repaint();
        } else {
            self.dirty = true;
        }
    }
}

pub(crate) type WindowId = u64;

/// State shared between `GraphWin` handles, the shapes drawn in the
/// window (weakly) and the frontend.
pub(crate) struct WindowShared {
    id: WindowId,
    title: String,
    width: u32,
    height: u32,
    scene: Mutex<Scene>,
    input: InputSlots,
    waker: Mutex<Option<egui::Context>>,
}

impl WindowShared {
    fn new(options: WindowOptions) -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);

        WindowShared {
            id: NEXT.fetch_add(1, Ordering::Relaxed),
            scene: Mutex::new(Scene {
                transform: Transform::identity(options.width, options.height),
                background: options.background,
                display: Vec::new(),
                frame: Vec::new(),
                autoflush: options.autoflush,
                dirty: false,
            }),
            title: options.title,
            width: options.width,
            height: options.height,
            input: InputSlots::default(),
            waker: Mutex::new(None),
        }
    }

    pub(crate) fn id(&self) -> WindowId {
        self.id
    }

    pub(crate) fn title(&self) -> &str {
        &self.title
    }

    pub(crate) fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub(crate) fn background(&self) -> Color {
        self.scene().background
    }

    pub(crate) fn is_closed(&self) -> bool {
        self.input.is_closed()
    }

    pub(crate) fn post(&self, event: InputEvent) {
        self.input.post(event);
    }

    /// append to the display list and draw just this shape on top of what
    /// is already there
    pub(crate) fn attach(&self, id: ShapeId, figure: Figure, style: Style) {
        let kind = figure.kind();
        let mut scene = self.scene();
        let ops = render(&figure, &style, &scene.transform);
        scene.frame.extend(ops);
        scene.display.push(Entry { id, figure, style });
        debug!(
            "window {}: drew {kind} {id:?} ({} on display list)",
            self.id,
            scene.display.len()
        );
        drop(scene);
        self.wake();
    }

    pub(crate) fn detach(&self, id: ShapeId) {
        let mut scene = self.scene();
        if let Some(pos) = scene.display.iter().position(|e| e.id == id) {
            scene.display.remove(pos);
            debug!("window {}: undrew {:?}", self.id, id);
        }
        scene.invalidate();
        drop(scene);
        self.wake();
    }

    /// replace the window's copy of a shape
    pub(crate) fn update(&self, id: ShapeId, figure: &Figure, style: &Style, repaint: bool) {
        let mut scene = self.scene();
        let Some(entry) = scene.display.iter_mut().find(|e| e.id == id) else {
            return;
        };
        entry.figure = figure.clone();
        entry.style = *style;
        if repaint {
            scene.invalidate();
        } else {
            scene.dirty = true;
        }
        drop(scene);
        self.wake();
    }

    pub(crate) fn present(&self, canvas: &mut dyn Canvas) {
        let scene = self.scene();
        canvas.clear(scene.background);
        for op in &scene.frame {
            canvas.paint(op);
        }
    }

    pub(crate) fn set_waker(&self, ctx: egui::Context) {
        *self.waker.lock().unwrap_or_else(PoisonError::into_inner) = Some(ctx);
    }

    // ask the frontend for a new frame
    fn wake(&self) {
        if let Some(ctx) = self.waker.lock().unwrap_or_else(PoisonError::into_inner).as_ref() {
            ctx.request_repaint_of(egui::ViewportId::ROOT);
        }
    }

    fn scene(&self) -> MutexGuard<'_, Scene> {
        self.scene.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// A window that shapes can be drawn in.
///
/// `GraphWin` is a cheap handle: clones refer to the same window.
#[derive(Clone)]
pub struct GraphWin {
    shared: Arc<WindowShared>,
}

impl fmt::Debug for GraphWin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GraphWin")
            .field("id", &self.shared.id)
            .field("title", &self.shared.title)
            .field("width", &self.shared.width)
            .field("height", &self.shared.height)
            .field("closed", &self.is_closed())
            .finish()
    }
}

impl GraphWin {
    /// Open a window of `width` x `height` pixels. Must be called from the
    /// program running inside `zgraphics::run`.
    pub fn new(title: &str, width: u32, height: u32) -> Result<Self> {
        Self::with_options(WindowOptions::new(title, width, height))
    }

    pub fn with_options(options: WindowOptions) -> Result<Self> {
        let win = Self::headless_with(options);
        crate::app::register(Arc::clone(&win.shared))?;
        info!(
            "opened window {} {:?} ({}x{})",
            win.shared.id, win.shared.title, win.shared.width, win.shared.height
        );
        Ok(win)
    }

    /// A window with no native surface. It keeps a display list and a
    /// frame like any other window; `present` and `snapshot` read it back.
    pub fn headless(width: u32, height: u32) -> Self {
        Self::headless_with(WindowOptions::new("headless", width, height))
    }

    pub fn headless_with(options: WindowOptions) -> Self {
        GraphWin {
            shared: Arc::new(WindowShared::new(options)),
        }
    }

    pub fn title(&self) -> &str {
        &self.shared.title
    }

    pub fn width(&self) -> u32 {
        self.shared.width
    }

    pub fn height(&self) -> u32 {
        self.shared.height
    }

    /// Map `(xmin, ymin)` to the lower-left corner and `(xmax, ymax)` to
    /// the upper-right corner of the window.
    ///
    /// Shapes already on screen keep their pixels until the next repaint.
    pub fn set_coords(&self, xmin: f64, ymin: f64, xmax: f64, ymax: f64) -> Result<()> {
        self.shared.scene().transform.set_coords(xmin, ymin, xmax, ymax)?;
        debug!(
            "window {}: coords ({xmin}, {ymin}) .. ({xmax}, {ymax})",
            self.shared.id
        );
        Ok(())
    }

    pub fn transform(&self) -> Transform {
        self.shared.scene().transform
    }

    pub fn to_screen(&self, p: Point) -> ScreenPoint {
        self.transform().to_screen(p)
    }

    pub fn to_user(&self, s: ScreenPoint) -> Point {
        self.transform().to_user(s)
    }

    pub fn to_pixel(&self, p: Point) -> (i32, i32) {
        self.transform().to_pixel(p)
    }

    pub fn x_dist(&self, dx: f64) -> f64 {
        self.transform().x_dist(dx)
    }

    pub fn y_dist(&self, dy: f64) -> f64 {
        self.transform().y_dist(dy)
    }

    pub fn set_background(&self, color: impl IntoColor) -> Result<()> {
        let color = color.into_color()?;
        self.shared.scene().background = color;
        self.shared.wake();
        Ok(())
    }

    pub fn background(&self) -> Color {
        self.shared.background()
    }

    pub fn set_autoflush(&self, autoflush: bool) {
        self.shared.scene().autoflush = autoflush;
    }

    pub fn autoflush(&self) -> bool {
        self.shared.scene().autoflush
    }

    /// Repaint the whole display list.
    pub fn flush(&self) {
        self.shared.scene().repaint();
        self.shared.wake();
    }

    /// Same as `flush`.
    pub fn update(&self) {
        self.flush();
    }

    /// Whether changes are waiting for a `flush`.
    pub fn is_dirty(&self) -> bool {
        self.shared.scene().dirty
    }

    /// Number of shapes on the display list.
    pub fn drawn_count(&self) -> usize {
        self.shared.scene().display.len()
    }

    /// The draw operations currently on screen, bottom first.
    pub fn snapshot(&self) -> Vec<DrawOp> {
        self.shared.scene().frame.clone()
    }

    /// Replay the current frame onto `canvas`.
    pub fn present(&self, canvas: &mut dyn Canvas) {
        self.shared.present(canvas);
    }

    /// Wait for a mouse click and return where it happened, in the current
    /// user coordinates. `None` once the window is closed.
    pub fn get_mouse(&self) -> Option<Point> {
        let at = self.shared.input.wait_mouse()?;
        Some(self.to_user(at))
    }

    /// The last click since the previous `get_mouse`/`check_mouse`, if any.
    pub fn check_mouse(&self) -> Option<Point> {
        let at = self.shared.input.take_mouse()?;
        Some(self.to_user(at))
    }

    /// Wait for a key press. `None` once the window is closed.
    pub fn get_key(&self) -> Option<Key> {
        self.shared.input.wait_key()
    }

    /// The last key pressed since the previous `get_key`/`check_key`, if any.
    pub fn check_key(&self) -> Option<Key> {
        self.shared.input.take_key()
    }

    pub fn is_open(&self) -> bool {
        !self.is_closed()
    }

    pub fn is_closed(&self) -> bool {
        self.shared.is_closed()
    }

    /// Close the window. Anything blocked in `get_mouse`/`get_key` returns
    /// `None`.
    pub fn close(&self) {
        if self.is_closed() {
            return;
        }
        info!("closing window {} {:?}", self.shared.id, self.shared.title);
        self.shared.post(InputEvent::Closed);
        self.shared.wake();
    }

    /// Feed an event into the window as if it came from the frontend.
    pub fn post_event(&self, event: InputEvent) {
        self.shared.post(event);
    }

    pub(crate) fn shared(&self) -> &Arc<WindowShared> {
        &self.shared
    }

    pub(crate) fn downgrade(&self) -> Weak<WindowShared> {
        Arc::downgrade(&self.shared)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Recorder;
    use crate::shape::Shape;
    use test_log::test;

    #[test]
    fn options_builder() {
        let opts = WindowOptions::new("t", 10, 20)
            .autoflush(false)
            .background(Color::rgb(1, 1, 1));
        assert_eq!(opts.title, "t");
        assert_eq!((opts.width, opts.height), (10, 20));
        assert!(!opts.autoflush);
        assert_eq!(opts.background, Color::rgb(1, 1, 1));
        assert!(WindowOptions::default().autoflush);
    }

    #[test]
    fn present_clears_then_replays_the_frame() {
        let win = GraphWin::headless(100, 100);
        win.set_background("gray").unwrap();
        let mut a = Shape::rectangle(Point::new(1.0, 1.0), Point::new(5.0, 5.0));
        a.draw(&win);

        let mut canvas = Recorder::new();
        canvas.ops.push(win.snapshot()[0].clone());
        win.present(&mut canvas);
        assert_eq!(canvas.background, Some(Color::named("gray").unwrap()));
        assert_eq!(canvas.ops, win.snapshot());
    }

    #[test]
    fn set_coords_does_not_rescale_until_repaint() {
        let win = GraphWin::headless(200, 200);
        let mut p = Shape::point(Point::new(10.0, 10.0));
        p.draw(&win);
        let before = win.snapshot();

        win.set_coords(0.0, 0.0, 100.0, 100.0).unwrap();
        assert_eq!(win.snapshot(), before);

        win.flush();
        assert_ne!(win.snapshot(), before);
    }

    #[test]
    fn degenerate_coords_keep_the_old_transform() {
        let win = GraphWin::headless(50, 50);
        let before = win.transform();
        assert!(win.set_coords(0.0, 0.0, 0.0, 1.0).is_err());
        assert_eq!(win.transform(), before);
    }

    #[test]
    fn clicks_are_converted_with_the_current_transform() {
        let win = GraphWin::headless(200, 200);
        win.post_event(InputEvent::Click(ScreenPoint::new(100.0, 99.0)));
        win.set_coords(0.0, 0.0, 100.0, 100.0).unwrap();
        let p = win.check_mouse().unwrap();
        assert!((p.x - 50.0).abs() < 1e-9);
        assert!((p.y - 50.0).abs() < 1e-9);
        assert_eq!(win.check_mouse(), None);
    }

    #[test]
    fn close_is_idempotent() {
        let win = GraphWin::headless(10, 10);
        assert!(win.is_open());
        win.close();
        win.close();
        assert!(win.is_closed());
        assert_eq!(win.get_key(), None);
    }

    #[test]
    fn new_outside_run_reports_no_frontend() {
        assert!(matches!(
            GraphWin::new("x", 10, 10),
            Err(crate::error::GraphicsError::NoFrontend)
        ));
    }
}

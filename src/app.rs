//! The native frontend: an `eframe::App` that shows every open `GraphWin`
//! and feeds clicks, keys and close requests back into them.
//!
//! eframe needs the main thread, so `run` keeps it there and moves the
//! user's program onto a worker thread. Windows opened by the program reach
//! the frontend through a channel; the first one becomes the root native
//! window and later ones are shown as extra viewports.

use std::panic;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread;
use std::time::Duration;

use eframe::egui::{self, Color32, Event, Pos2, Sense, Stroke, Vec2, ViewportBuilder, ViewportCommand, ViewportId};
use kurbo::Point as ScreenPoint;
use log::{debug, info, warn};
use once_cell::sync::Lazy;

use crate::color::Color;
use crate::error::{GraphicsError, Result};
use crate::input::{InputEvent, Key};
use crate::render::{Canvas, DrawOp, Paint, Primitive, Triangles, fill_triangles};
use crate::window::WindowShared;

// max error (in pixels) when curves are turned into polylines for egui
const FLATTEN_TOLERANCE: f64 = 0.25;

// how long `run` waits for the program to notice its windows closed
const PROGRAM_EXIT_GRACE: Duration = Duration::from_secs(2);

enum Message {
    Open(Arc<WindowShared>),
    ProgramDone,
}

struct Frontend {
    messages: Sender<Message>,
    // set once the event loop is up
    ctx: Option<egui::Context>,
}

static FRONTEND: Lazy<Mutex<Option<Frontend>>> = Lazy::new(|| Mutex::new(None));

fn frontend() -> MutexGuard<'static, Option<Frontend>> {
    FRONTEND.lock().unwrap_or_else(PoisonError::into_inner)
}

/// hand a freshly created window to the running frontend
pub(crate) fn register(win: Arc<WindowShared>) -> Result<()> {
    let guard = frontend();
    let frontend = guard.as_ref().ok_or(GraphicsError::NoFrontend)?;
    if let Some(ctx) = &frontend.ctx {
        win.set_waker(ctx.clone());
    }
    frontend
        .messages
        .send(Message::Open(win))
        .map_err(|_| GraphicsError::FrontendGone)?;
    if let Some(ctx) = &frontend.ctx {
        ctx.request_repaint_of(ViewportId::ROOT);
    }
    Ok(())
}

// tells the frontend and `run` that the program is over, even if it panicked
struct ProgramDone {
    messages: Sender<Message>,
    finished: Sender<()>,
}

impl Drop for ProgramDone {
    fn drop(&mut self) {
        let _ = self.messages.send(Message::ProgramDone);
        let _ = self.finished.send(());
    }
}

/// Run `program` with a graphics frontend.
///
/// The native event loop takes over the calling thread (it must be the main
/// thread on some platforms) and `program` runs on its own thread, where it
/// can open windows and block on input:
///
/// ```no_run
/// use zgraphics::{GraphWin, Point, Shape};
///
/// zgraphics::run(|| {
///     let win = GraphWin::new("My Circle", 100, 100).unwrap();
///     let mut c = Shape::circle(Point::new(50.0, 50.0), 10.0);
///     c.draw(&win);
///     win.get_mouse();
///     win.close();
/// })
/// .unwrap();
/// ```
///
/// Returns once the root window is closed. A panic in `program` is
/// re-raised here.
pub fn run<F>(program: F) -> Result<()>
where
    F: FnOnce() + Send + 'static,
{
    // Default filter is "info" if RUST_LOG is not set.
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .try_init();

    let (tx, rx) = mpsc::channel();
    {
        let mut frontend = frontend();
        if frontend.is_some() {
            return Err(GraphicsError::Frontend("a frontend is already running".to_string()));
        }
        *frontend = Some(Frontend {
            messages: tx.clone(),
            ctx: None,
        });
    }

    let (finished_tx, finished) = mpsc::channel();
    let program = thread::Builder::new()
        .name("graphics-program".to_string())
        .spawn(move || {
            let _done = ProgramDone {
                messages: tx,
                finished: finished_tx,
            };
            program();
        })
        .map_err(|e| GraphicsError::Frontend(e.to_string()))?;

    let registry: Arc<Mutex<Vec<Arc<WindowShared>>>> = Arc::default();

    // the root native window is sized after the first GraphWin
    let result = match rx.recv() {
        Ok(Message::Open(root)) => show(root, rx, Arc::clone(&registry)),
        Ok(Message::ProgramDone) | Err(_) => {
            debug!("program finished without opening a window");
            Ok(())
        }
    };

    *frontend() = None;
    for win in registry.lock().unwrap_or_else(PoisonError::into_inner).iter() {
        win.post(InputEvent::Closed);
    }

    if !finished_within(&finished, PROGRAM_EXIT_GRACE) {
        warn!("program is still running after its windows closed; leaving it behind");
        return result;
    }
    if let Err(payload) = program.join() {
        panic::resume_unwind(payload);
    }
    result
}

// a disconnect counts as finished: the thread is gone either way
fn finished_within(finished: &Receiver<()>, grace: Duration) -> bool {
    !matches!(finished.recv_timeout(grace), Err(RecvTimeoutError::Timeout))
}

fn show(
    root: Arc<WindowShared>,
    messages: Receiver<Message>,
    registry: Arc<Mutex<Vec<Arc<WindowShared>>>>,
) -> Result<()> {
    let title = root.title().to_string();
    let native_options = eframe::NativeOptions {
        viewport: viewport_builder(&root),
        ..Default::default()
    };
    info!("starting frontend with root window {:?}", title);
    eframe::run_native(
        &title,
        native_options,
        Box::new(|cc| Ok(Box::new(Viewer::new(cc, root, messages, registry)))),
    )
    .map_err(|e| GraphicsError::Frontend(e.to_string()))
}

fn viewport_builder(win: &WindowShared) -> ViewportBuilder {
    let (width, height) = win.size();
    ViewportBuilder::default()
        .with_title(win.title())
        .with_inner_size([width as f32, height as f32])
        .with_resizable(false)
}

/// main frontend state
struct Viewer {
    // root first, then every window opened after it
    windows: Vec<Arc<WindowShared>>,
    messages: Receiver<Message>,
    registry: Arc<Mutex<Vec<Arc<WindowShared>>>>,
}

impl Viewer {
    fn new(
        cc: &eframe::CreationContext<'_>,
        root: Arc<WindowShared>,
        messages: Receiver<Message>,
        registry: Arc<Mutex<Vec<Arc<WindowShared>>>>,
    ) -> Self {
        let ctx = cc.egui_ctx.clone();
        if let Some(frontend) = frontend().as_mut() {
            frontend.ctx = Some(ctx.clone());
        }
        root.set_waker(ctx);
        registry
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Arc::clone(&root));

        Viewer {
            windows: vec![root],
            messages,
            registry,
        }
    }

    fn accept_messages(&mut self, ctx: &egui::Context) {
        while let Ok(message) = self.messages.try_recv() {
            match message {
                Message::Open(win) => {
                    debug!("frontend: new window {} {:?}", win.id(), win.title());
                    win.set_waker(ctx.clone());
                    self.registry
                        .lock()
                        .unwrap_or_else(PoisonError::into_inner)
                        .push(Arc::clone(&win));
                    self.windows.push(win);
                }
                Message::ProgramDone => info!("program finished; windows stay open until closed"),
            }
        }
    }
}

impl eframe::App for Viewer {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.accept_messages(ctx);

        let root = Arc::clone(&self.windows[0]);
        show_window(ctx, &root);
        if root.is_closed() {
            ctx.send_viewport_cmd(ViewportCommand::Close);
        }

        // closed extra windows are simply not shown any more, which closes
        // their viewport
        for win in self.windows.iter().skip(1).filter(|w| !w.is_closed()) {
            let id = ViewportId::from_hash_of(("graphwin", win.id()));
            ctx.show_viewport_immediate(id, viewport_builder(win), |ctx, _class| {
                show_window(ctx, win);
            });
        }
    }
}

fn show_window(ctx: &egui::Context, win: &WindowShared) {
    if ctx.input(|i| i.viewport().close_requested()) && !win.is_closed() {
        info!("window {} {:?} closed by the user", win.id(), win.title());
        win.post(InputEvent::Closed);
        ctx.request_repaint_of(ViewportId::ROOT);
    }

    egui::CentralPanel::default()
        .frame(egui::Frame::default())
        .show(ctx, |ui| {
            let (width, height) = win.size();
            let (response, painter) =
                ui.allocate_painter(Vec2::new(width as f32, height as f32), Sense::click());

            let mut canvas = EguiCanvas {
                painter: &painter,
                origin: response.rect.min,
            };
            win.present(&mut canvas);

            let events = ctx.input(|i| {
                i.events
                    .iter()
                    .filter_map(|event| translate_event(event, response.rect))
                    .collect::<Vec<_>>()
            });
            for event in events {
                win.post(event);
            }
        });
}

/// turn an egui event into a window event; clicks are made relative to the
/// top-left corner of the drawing area
fn translate_event(event: &Event, area: egui::Rect) -> Option<InputEvent> {
    match event {
        Event::PointerButton {
            pos,
            button: egui::PointerButton::Primary,
            pressed: false,
            ..
        } if area.contains(*pos) => {
            let local = *pos - area.min;
            Some(InputEvent::Click(ScreenPoint::new(local.x as f64, local.y as f64)))
        }
        Event::Text(text) => text.chars().last().map(|c| InputEvent::Key(Key::Char(c))),
        Event::Key {
            key, pressed: true, ..
        } => special_key(*key).map(InputEvent::Key),
        _ => None,
    }
}

fn special_key(key: egui::Key) -> Option<Key> {
    let key = match key {
        egui::Key::ArrowLeft => Key::Left,
        egui::Key::ArrowRight => Key::Right,
        egui::Key::ArrowUp => Key::Up,
        egui::Key::ArrowDown => Key::Down,
        egui::Key::Home => Key::Home,
        egui::Key::End => Key::End,
        egui::Key::F1 => Key::F1,
        egui::Key::Enter => Key::Return,
        egui::Key::Escape => Key::Escape,
        egui::Key::Backspace => Key::BackSpace,
        // printable keys arrive as Event::Text
        _ => return None,
    };
    Some(key)
}

/// Paints draw ops with an egui `Painter`, offset to the drawing area.
struct EguiCanvas<'a> {
    painter: &'a egui::Painter,
    origin: Pos2,
}

impl EguiCanvas<'_> {
    fn pos(&self, p: ScreenPoint) -> Pos2 {
        self.origin + Vec2::new(p.x as f32, p.y as f32)
    }

    fn rect(&self, r: &kurbo::Rect) -> egui::Rect {
        egui::Rect::from_min_max(
            self.pos(ScreenPoint::new(r.x0, r.y0)),
            self.pos(ScreenPoint::new(r.x1, r.y1)),
        )
    }

    // ellipses and polygons both go through their flattened outline
    fn area(&self, primitive: &Primitive, paint: Paint) {
        let outline = primitive.outline(FLATTEN_TOLERANCE);
        let shape = match (primitive, paint) {
            // polygons may be concave, so their inside is triangulated
            (Primitive::Polygon(_), Paint::Fill(color)) => self.mesh(&fill_triangles(&outline), color),
            (_, Paint::Fill(color)) => egui::Shape::convex_polygon(
                self.positions(&outline),
                Color32::from(color),
                Stroke::NONE,
            ),
            (_, Paint::Stroke { color, width }) => {
                egui::Shape::closed_line(self.positions(&outline), stroke(color, width))
            }
        };
        self.painter.add(shape);
    }

    fn positions(&self, points: &[ScreenPoint]) -> Vec<Pos2> {
        points.iter().map(|p| self.pos(*p)).collect()
    }

    fn mesh(&self, triangles: &Triangles, color: Color) -> egui::Shape {
        let color = Color32::from(color);
        let mut mesh = egui::Mesh::default();
        for v in &triangles.vertices {
            mesh.colored_vertex(self.pos(*v), color);
        }
        for t in triangles.indices.chunks_exact(3) {
            mesh.add_triangle(t[0], t[1], t[2]);
        }
        egui::Shape::mesh(mesh)
    }
}

fn stroke(color: Color, width: f32) -> Stroke {
    Stroke::new(width, Color32::from(color))
}

impl Canvas for EguiCanvas<'_> {
    fn clear(&mut self, background: Color) {
        self.painter
            .rect_filled(self.painter.clip_rect(), 0.0, Color32::from(background));
    }

    fn paint(&mut self, op: &DrawOp) {
        match (&op.primitive, op.paint) {
            (Primitive::Dot(p), Paint::Fill(color) | Paint::Stroke { color, .. }) => {
                let pixel = egui::Rect::from_min_size(self.pos(*p), Vec2::splat(1.0));
                self.painter.rect_filled(pixel, 0.0, Color32::from(color));
            }
            (Primitive::Segment(line), Paint::Stroke { color, width }) => {
                self.painter
                    .line_segment([self.pos(line.p0), self.pos(line.p1)], stroke(color, width));
            }
            // a line has no inside
            (Primitive::Segment(_), Paint::Fill(_)) => {}
            (Primitive::Rect(r), Paint::Fill(color)) => {
                self.painter.rect_filled(self.rect(r), 0.0, Color32::from(color));
            }
            (Primitive::Rect(r), Paint::Stroke { color, width }) => {
                self.painter.rect_stroke(
                    self.rect(r),
                    0.0,
                    stroke(color, width),
                    egui::StrokeKind::Middle,
                );
            }
            (primitive @ (Primitive::Ellipse(_) | Primitive::Polygon(_)), paint) => {
                self.area(primitive, paint);
            }
        }
    }
}

use std::thread;
use std::time::Duration;

use test_log::test;
use zgraphics::kurbo;
use zgraphics::{GraphWin, InputEvent, Key, Point};

#[test]
fn check_mouse_reports_a_click_once() {
    let win = GraphWin::headless(100, 100);
    assert_eq!(win.check_mouse(), None);
    win.post_event(InputEvent::Click(kurbo::Point::new(12.0, 34.0)));
    assert_eq!(win.check_mouse(), Some(Point::new(12.0, 34.0)));
    assert_eq!(win.check_mouse(), None);
}

#[test]
fn only_the_latest_key_is_kept() {
    let win = GraphWin::headless(100, 100);
    win.post_event(InputEvent::Key(Key::Char('a')));
    win.post_event(InputEvent::Key(Key::Left));
    let key = win.check_key().unwrap();
    assert_eq!(key, Key::Left);
    assert!(key == "leftarrow");
    assert_eq!(win.check_key(), None);
}

#[test]
fn get_mouse_blocks_until_a_click() {
    let win = GraphWin::headless(200, 200);
    win.set_coords(0.0, 0.0, 100.0, 100.0).unwrap();

    let poster = {
        let win = win.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(30));
            win.post_event(InputEvent::Click(kurbo::Point::new(50.0, 199.0)));
        })
    };
    let p = win.get_mouse().unwrap();
    assert!((p.x - 25.0).abs() < 1e-9);
    assert!(p.y.abs() < 1e-9);
    poster.join().unwrap();
}

#[test]
fn closing_wakes_blocked_readers() {
    let win = GraphWin::headless(100, 100);
    let reader = {
        let win = win.clone();
        thread::spawn(move || win.get_key())
    };
    thread::sleep(Duration::from_millis(30));
    win.close();
    assert_eq!(reader.join().unwrap(), None);
    assert!(win.is_closed());
    assert_eq!(win.get_mouse(), None);
}

#[test]
fn closed_event_from_the_frontend_closes_the_window() {
    let win = GraphWin::headless(100, 100);
    win.post_event(InputEvent::Click(kurbo::Point::new(1.0, 1.0)));
    win.post_event(InputEvent::Closed);
    assert!(!win.is_open());
    assert_eq!(win.check_mouse(), None);
}

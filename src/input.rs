//! Single-slot input buffers shared between the frontend thread, which
//! posts events, and the program thread, which polls or blocks on them.

use std::fmt;
use std::sync::{Condvar, Mutex, MutexGuard, PoisonError};

use kurbo::Point as ScreenPoint;

/// A key press: either a printable character or one of the named keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
    F1,
    Return,
    Escape,
    BackSpace,
}

impl Key {
    /// the symbolic name of a special key, `None` for characters.
    pub fn name(&self) -> Option<&'static str> {
        let name = match self {
            Key::Char(_) => return None,
            Key::Left => "leftarrow",
            Key::Right => "rightarrow",
            Key::Up => "uparrow",
            Key::Down => "downarrow",
            Key::Home => "home",
            Key::End => "end",
            Key::F1 => "F1",
            Key::Return => "Return",
            Key::Escape => "Escape",
            Key::BackSpace => "BackSpace",
        };
        Some(name)
    }
}

/// Characters print as themselves, special keys by name ("uparrow").
impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self, self.name()) {
            (Key::Char(c), _) => write!(f, "{c}"),
            (_, Some(name)) => f.write_str(name),
            (_, None) => Ok(()),
        }
    }
}

impl PartialEq<str> for Key {
    fn eq(&self, other: &str) -> bool {
        match self {
            Key::Char(c) => {
                let mut chars = other.chars();
                chars.next() == Some(*c) && chars.next().is_none()
            }
            _ => self.name() == Some(other),
        }
    }
}

impl PartialEq<&str> for Key {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

/// Something that happened to a window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// mouse click at a device position
    Click(ScreenPoint),
    Key(Key),
    Closed,
}

#[derive(Debug, Default)]
struct InputState {
    mouse: Option<ScreenPoint>,
    key: Option<Key>,
    closed: bool,
}

/// Latest-value-wins slots for one mouse click and one key press.
#[derive(Debug, Default)]
pub(crate) struct InputSlots {
    state: Mutex<InputState>,
    ready: Condvar,
}

impl InputSlots {
    pub(crate) fn post(&self, event: InputEvent) {
        let mut state = self.lock();
        match event {
            InputEvent::Click(at) => state.mouse = Some(at),
            InputEvent::Key(key) => state.key = Some(key),
            InputEvent::Closed => state.closed = true,
        }
        drop(state);
        self.ready.notify_all();
    }

    pub(crate) fn is_closed(&self) -> bool {
        self.lock().closed
    }

    pub(crate) fn take_mouse(&self) -> Option<ScreenPoint> {
        self.take(|s| s.mouse.take())
    }

    pub(crate) fn take_key(&self) -> Option<Key> {
        self.take(|s| s.key.take())
    }

    pub(crate) fn wait_mouse(&self) -> Option<ScreenPoint> {
        self.wait(|s| s.mouse.take())
    }

    pub(crate) fn wait_key(&self) -> Option<Key> {
        self.wait(|s| s.key.take())
    }

    // nothing is handed out once the window is closed, even if a value
    // was still buffered
    fn take<T>(&self, slot: impl FnOnce(&mut InputState) -> Option<T>) -> Option<T> {
        let mut state = self.lock();
        if state.closed {
            return None;
        }
        slot(&mut state)
    }

    fn wait<T>(&self, mut slot: impl FnMut(&mut InputState) -> Option<T>) -> Option<T> {
        let mut state = self.lock();
        loop {
            if state.closed {
                return None;
            }
            if let Some(value) = slot(&mut state) {
                return Some(value);
            }
            state = self.ready.wait(state).unwrap_or_else(PoisonError::into_inner);
        }
    }

    fn lock(&self) -> MutexGuard<'_, InputState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;
    use std::time::Duration;
    use test_log::test;

    #[test]
    fn key_strings() {
        assert_eq!(Key::Char('x').to_string(), "x");
        assert_eq!(Key::Up.to_string(), "uparrow");
        assert_eq!(Key::F1.to_string(), "F1");
        assert!(Key::Char('x') == "x");
        assert!(Key::Left == "leftarrow");
        assert!(Key::Char('x') != "xy");
        assert!(Key::Home != "h");
        assert_eq!(Key::Char('q').name(), None);
    }

    #[test]
    fn check_consumes_the_slot() {
        let slots = InputSlots::default();
        slots.post(InputEvent::Click(ScreenPoint::new(3.0, 4.0)));
        assert_eq!(slots.take_mouse(), Some(ScreenPoint::new(3.0, 4.0)));
        assert_eq!(slots.take_mouse(), None);
    }

    #[test]
    fn newer_events_overwrite_unread_ones() {
        let slots = InputSlots::default();
        slots.post(InputEvent::Key(Key::Char('a')));
        slots.post(InputEvent::Key(Key::Down));
        assert_eq!(slots.take_key(), Some(Key::Down));
        assert_eq!(slots.take_key(), None);
    }

    #[test]
    fn mouse_and_key_slots_are_independent() {
        let slots = InputSlots::default();
        slots.post(InputEvent::Key(Key::Char('k')));
        slots.post(InputEvent::Click(ScreenPoint::new(1.0, 1.0)));
        assert_eq!(slots.take_key(), Some(Key::Char('k')));
        assert!(slots.take_mouse().is_some());
    }

    #[test]
    fn closed_window_hands_out_nothing() {
        let slots = InputSlots::default();
        slots.post(InputEvent::Key(Key::Char('a')));
        slots.post(InputEvent::Closed);
        assert!(slots.is_closed());
        assert_eq!(slots.take_key(), None);
        assert_eq!(slots.wait_key(), None);
        assert_eq!(slots.wait_mouse(), None);
    }

    #[test]
    fn wait_wakes_on_event() {
        let slots = Arc::new(InputSlots::default());
        let poster = {
            let slots = Arc::clone(&slots);
            thread::spawn(move || {
                thread::sleep(Duration::from_millis(20));
                slots.post(InputEvent::Click(ScreenPoint::new(7.0, 8.0)));
            })
        };
        assert_eq!(slots.wait_mouse(), Some(ScreenPoint::new(7.0, 8.0)));
        poster.join().unwrap();
    }

    #[test]
    fn wait_returns_none_when_closed() {
        let slots = Arc::new(InputSlots::default());
        let closer = {
            let slots = Arc::clone(&slots);
            thread::spawn(move || {
                thread::sleep(Duration::from_millis(20));
                slots.post(InputEvent::Closed);
            })
        };
        assert_eq!(slots.wait_key(), None);
        closer.join().unwrap();
    }
}

//! Input events as delivered by the host input layer.
//!
//! A [`KeyEvent`] carries a key identifier plus ctrl/meta modifier flags and
//! a consume flag. Consuming an event tells the host it must not propagate
//! further (the palette hotkey and every handled navigation key are
//! consumed; everything else falls through to the focused text input).

/// Key identifiers the core reacts to. Printable characters arrive as
/// `Char`; anything else the host sends is ignored by the dispatcher.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Enter,
    Escape,
    Char(char),
}

/// One keystroke, processed to completion before the next is accepted.
#[derive(Clone, Debug)]
pub struct KeyEvent {
    pub key: Key,
    pub ctrl: bool,
    pub meta: bool,
    consumed: bool,
}

impl KeyEvent {
    pub fn new(key: Key) -> Self {
        Self {
            key,
            ctrl: false,
            meta: false,
            consumed: false,
        }
    }

    pub fn ctrl(key: Key) -> Self {
        Self {
            ctrl: true,
            ..Self::new(key)
        }
    }

    pub fn meta(key: Key) -> Self {
        Self {
            meta: true,
            ..Self::new(key)
        }
    }

    /// Stop propagation: the host must not forward this event anywhere else.
    pub fn consume(&mut self) {
        self.consumed = true;
    }

    pub fn is_consumed(&self) -> bool {
        self.consumed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_start_unconsumed() {
        let event = KeyEvent::new(Key::Up);
        assert!(!event.is_consumed());
        assert!(!event.ctrl);
        assert!(!event.meta);
    }

    #[test]
    fn consume_is_sticky() {
        let mut event = KeyEvent::ctrl(Key::Char('k'));
        event.consume();
        event.consume();
        assert!(event.is_consumed());
    }

    #[test]
    fn modifier_constructors() {
        assert!(KeyEvent::ctrl(Key::Char('k')).ctrl);
        assert!(!KeyEvent::ctrl(Key::Char('k')).meta);
        assert!(KeyEvent::meta(Key::Char('k')).meta);
        assert!(!KeyEvent::meta(Key::Char('k')).ctrl);
    }
}

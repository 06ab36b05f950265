use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Key chord an app listens for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    pub fn new(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::NONE,
        }
    }

    pub fn ctrl(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::CONTROL,
        }
    }

    pub fn matches(&self, event: &KeyEvent) -> bool {
        // Shifted chars arrive with the SHIFT modifier set; match on the
        // produced character, not the modifier
        let relevant = event.modifiers.difference(KeyModifiers::SHIFT);
        self.code == event.code && self.modifiers == relevant
    }
}

impl From<KeyCode> for KeyBinding {
    fn from(code: KeyCode) -> Self {
        Self::new(code)
    }
}

/// Declarative input source an app subscribes to while in a given state.
///
/// Subscriptions are recomputed from state every frame: removing one
/// (e.g. the auto-advance interval while the user is interacting) cancels
/// its timer, and all timers die with the runtime, so a torn-down app can
/// never receive a stale tick.
pub enum Subscription<Msg> {
    Keyboard {
        binding: KeyBinding,
        description: &'static str,
        msg: Msg,
    },
    Interval {
        period: Duration,
        msg: Msg,
    },
    /// Raw key routing for a focused input widget; takes precedence over
    /// keyboard bindings while present
    Capture {
        handler: Box<dyn Fn(KeyEvent) -> Option<Msg> + Send>,
    },
}

impl<Msg> Subscription<Msg> {
    pub fn keyboard(
        binding: impl Into<KeyBinding>,
        description: &'static str,
        msg: Msg,
    ) -> Self {
        Subscription::Keyboard {
            binding: binding.into(),
            description,
            msg,
        }
    }

    pub fn interval(period: Duration, msg: Msg) -> Self {
        Subscription::Interval { period, msg }
    }

    pub fn capture(handler: impl Fn(KeyEvent) -> Option<Msg> + Send + 'static) -> Self {
        Subscription::Capture {
            handler: Box::new(handler),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventKind;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        let mut event = KeyEvent::new(code, modifiers);
        event.kind = KeyEventKind::Press;
        event
    }

    #[test]
    fn test_binding_matches_plain_key() {
        let binding = KeyBinding::new(KeyCode::Char('t'));
        assert!(binding.matches(&key(KeyCode::Char('t'), KeyModifiers::NONE)));
        assert!(!binding.matches(&key(KeyCode::Char('t'), KeyModifiers::CONTROL)));
    }

    #[test]
    fn test_binding_ignores_shift_on_chars() {
        let binding = KeyBinding::new(KeyCode::Char('T'));
        assert!(binding.matches(&key(KeyCode::Char('T'), KeyModifiers::SHIFT)));
    }

    #[test]
    fn test_ctrl_binding() {
        let binding = KeyBinding::ctrl(KeyCode::Char('c'));
        assert!(binding.matches(&key(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert!(!binding.matches(&key(KeyCode::Char('c'), KeyModifiers::NONE)));
    }
}

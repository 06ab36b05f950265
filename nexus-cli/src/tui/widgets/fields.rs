use crossterm::event::KeyCode;

use super::events::TextInputEvent;

/// Cursor and editing state for a single-line text input
#[derive(Debug, Clone, Default)]
pub struct TextInputState {
    cursor: usize,
}

impl TextInputState {
    pub fn set_cursor_to_end(&mut self, value: &str) {
        self.cursor = value.chars().count();
    }

    /// Apply an editing key against the current value.
    /// Returns the new value when the key changed it, None otherwise.
    pub fn handle_key(
        &mut self,
        key: KeyCode,
        current: &str,
        max_length: Option<usize>,
    ) -> Option<String> {
        let chars: Vec<char> = current.chars().collect();
        self.cursor = self.cursor.min(chars.len());

        match key {
            KeyCode::Char(c) => {
                if let Some(max) = max_length {
                    if chars.len() >= max {
                        return None;
                    }
                }
                let mut next: Vec<char> = chars;
                next.insert(self.cursor, c);
                self.cursor += 1;
                Some(next.into_iter().collect())
            }
            KeyCode::Backspace => {
                if self.cursor == 0 {
                    return None;
                }
                let mut next: Vec<char> = chars;
                next.remove(self.cursor - 1);
                self.cursor -= 1;
                Some(next.into_iter().collect())
            }
            KeyCode::Delete => {
                if self.cursor >= chars.len() {
                    return None;
                }
                let mut next: Vec<char> = chars;
                next.remove(self.cursor);
                Some(next.into_iter().collect())
            }
            KeyCode::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                None
            }
            KeyCode::Right => {
                self.cursor = (self.cursor + 1).min(chars.len());
                None
            }
            KeyCode::Home => {
                self.cursor = 0;
                None
            }
            KeyCode::End => {
                self.cursor = chars.len();
                None
            }
            _ => None,
        }
    }
}

/// Field that combines value + state for a text input widget
#[derive(Debug, Clone, Default)]
pub struct TextInputField {
    pub value: String,
    pub state: TextInputState,
}

impl TextInputField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle text input event.
    /// Returns Some(value) on Submit, None otherwise.
    pub fn handle_event(
        &mut self,
        event: TextInputEvent,
        max_length: Option<usize>,
    ) -> Option<String> {
        match event {
            TextInputEvent::Changed(key) => {
                if let Some(new_value) = self.state.handle_key(key, &self.value, max_length) {
                    self.value = new_value;
                }
                None
            }
            TextInputEvent::Submit => Some(self.value.clone()),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Set value (useful for initialization)
    /// Cursor is positioned at the end of the value
    pub fn set_value(&mut self, value: String) {
        self.value = value;
        self.state.set_cursor_to_end(&self.value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typing_and_cursor() {
        let mut field = TextInputField::new();
        for c in "hey".chars() {
            field.handle_event(TextInputEvent::Changed(KeyCode::Char(c)), None);
        }
        assert_eq!(field.value(), "hey");

        field.handle_event(TextInputEvent::Changed(KeyCode::Left), None);
        field.handle_event(TextInputEvent::Changed(KeyCode::Char('!')), None);
        assert_eq!(field.value(), "he!y");
    }

    #[test]
    fn test_backspace_at_start_is_noop() {
        let mut field = TextInputField::new();
        field.set_value("ab".into());
        field.handle_event(TextInputEvent::Changed(KeyCode::Home), None);
        field.handle_event(TextInputEvent::Changed(KeyCode::Backspace), None);
        assert_eq!(field.value(), "ab");
    }

    #[test]
    fn test_max_length_enforced() {
        let mut field = TextInputField::new();
        field.set_value("abc".into());
        field.handle_event(TextInputEvent::Changed(KeyCode::Char('d')), Some(3));
        assert_eq!(field.value(), "abc");
    }

    #[test]
    fn test_submit_returns_value() {
        let mut field = TextInputField::new();
        field.set_value("mail@nexus".into());
        let submitted = field.handle_event(TextInputEvent::Submit, None);
        assert_eq!(submitted.as_deref(), Some("mail@nexus"));
    }
}

use crossterm::event::KeyCode;

/// Events routed to a text input field by the owning app
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextInputEvent {
    Changed(KeyCode),
    Submit,
}

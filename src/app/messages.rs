use iced::keyboard::{Key, Modifiers};
use iced::widget::scrollable::RelativeOffset;
use std::time::Instant;

/// Messages emitted by the UI.
#[derive(Debug, Clone)]
pub enum Message {
    NavLinkClicked(&'static str),
    ToggleMenu,
    ToggleTheme,
    ContactNameChanged(String),
    ContactEmailChanged(String),
    ContactMessageChanged(String),
    ContactSubmitted,
    Scrolled {
        offset: RelativeOffset,
        viewport_height: f32,
        content_height: f32,
    },
    WindowResized {
        width: f32,
        height: f32,
    },
    WindowMoved {
        x: f32,
        y: f32,
    },
    KeyPressed {
        key: Key,
        modifiers: Modifiers,
    },
    Tick(Instant),
}

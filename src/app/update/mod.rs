use super::messages::Message;
use super::state::{App, PAGE_SCROLL_ID};
use iced::widget::scrollable::{self, RelativeOffset};
use iced::{Event, Subscription, Task, event, keyboard, time, window};
use std::path::Path;
use std::time::Duration;

mod appearance;
mod contact;
mod navigation;
mod scroll;

/// Describes work that must be performed outside the pure reducer.
pub(super) enum Effect {
    SaveConfig,
    ScrollTo(RelativeOffset),
}

impl App {
    pub fn subscription(app: &App) -> Subscription<Message> {
        let mut subscriptions: Vec<Subscription<Message>> =
            vec![event::listen_with(runtime_event_to_message)];

        // The coarse tick only runs while a deadline is waiting on it.
        if app.nav.relayout.is_pending() || app.contact.is_waiting() {
            subscriptions.push(time::every(Duration::from_millis(50)).map(Message::Tick));
        }

        Subscription::batch(subscriptions)
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let effects = self.reduce(message);
        if effects.is_empty() {
            Task::none()
        } else {
            Task::batch(effects.into_iter().map(|effect| self.run_effect(effect)))
        }
    }

    fn reduce(&mut self, message: Message) -> Vec<Effect> {
        let mut effects = Vec::new();

        match message {
            Message::NavLinkClicked(section_id) => {
                self.handle_nav_link_clicked(section_id, &mut effects)
            }
            Message::ToggleMenu => self.handle_toggle_menu(),
            Message::ToggleTheme => self.handle_toggle_theme(&mut effects),
            Message::ContactNameChanged(value) => self.handle_contact_name_changed(value),
            Message::ContactEmailChanged(value) => self.handle_contact_email_changed(value),
            Message::ContactMessageChanged(value) => self.handle_contact_message_changed(value),
            Message::ContactSubmitted => self.handle_contact_submitted(),
            Message::Scrolled {
                offset,
                viewport_height,
                content_height,
            } => self.handle_scrolled(offset, viewport_height, content_height),
            Message::WindowResized { width, height } => {
                self.handle_window_resized(width, height, &mut effects)
            }
            Message::WindowMoved { x, y } => self.handle_window_moved(x, y, &mut effects),
            Message::KeyPressed { key, modifiers } => {
                if let Some(message) = self.shortcut_message_for_key(key, modifiers) {
                    return self.reduce(message);
                }
            }
            Message::Tick(now) => {
                self.handle_relayout_tick(now);
                self.handle_contact_tick(now);
            }
        }

        effects
    }

    fn run_effect(&mut self, effect: Effect) -> Task<Message> {
        match effect {
            Effect::SaveConfig => {
                crate::config::save_config(Path::new(crate::config::CONFIG_PATH), &self.config);
                Task::none()
            }
            Effect::ScrollTo(offset) => scrollable::snap_to(PAGE_SCROLL_ID.clone(), offset),
        }
    }
}

fn runtime_event_to_message(
    event: Event,
    status: event::Status,
    _window_id: window::Id,
) -> Option<Message> {
    if status == event::Status::Captured {
        return None;
    }
    match event {
        Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized {
            width: size.width,
            height: size.height,
        }),
        Event::Window(window::Event::Moved(position)) => Some(Message::WindowMoved {
            x: position.x,
            y: position.y,
        }),
        Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
            Some(Message::KeyPressed { key, modifiers })
        }
        _ => None,
    }
}

use super::Effect;
use super::super::messages::Message;
use super::super::state::App;
use crate::content::SECTION_LINKS;
use iced::keyboard::{Key, Modifiers, key};
use iced::widget::scrollable::RelativeOffset;
use tracing::{debug, info};

impl App {
    pub(super) fn handle_nav_link_clicked(
        &mut self,
        section_id: &'static str,
        effects: &mut Vec<Effect>,
    ) {
        if self.nav.menu_open {
            self.nav.menu_open = false;
        }
        let viewport_height = self
            .nav
            .latest
            .map(|snapshot| snapshot.viewport_height)
            .unwrap_or(self.config.window_height);
        if let Some(y) = self.nav.sections.snap_offset(section_id, viewport_height) {
            if let Some(link) = SECTION_LINKS.iter().find(|link| link.id == section_id) {
                info!(section = link.id, path = link.path, "Navigating to section");
            }
            effects.push(Effect::ScrollTo(RelativeOffset { x: 0.0, y }));
        }
    }

    pub(super) fn handle_toggle_menu(&mut self) {
        self.nav.menu_open = !self.nav.menu_open;
        debug!(open = self.nav.menu_open, "Toggled navigation menu");
    }

    pub(super) fn shortcut_message_for_key(
        &self,
        key: Key,
        modifiers: Modifiers,
    ) -> Option<Message> {
        if matches!(key.as_ref(), Key::Named(key::Named::Escape)) {
            return self.nav.menu_open.then_some(Message::ToggleMenu);
        }

        let pressed = match key.as_ref() {
            Key::Character(ch) => ch.to_ascii_lowercase(),
            _ => return None,
        };

        Self::shortcut_matches(
            &self.config.key_toggle_theme,
            "ctrl+shift+d",
            &pressed,
            modifiers,
        )
        .then_some(Message::ToggleTheme)
    }

    pub(super) fn shortcut_matches(
        raw: &str,
        fallback: &str,
        pressed: &str,
        modifiers: Modifiers,
    ) -> bool {
        let normalized = raw.trim().to_ascii_lowercase();
        let binding = if normalized.is_empty() {
            fallback
        } else {
            normalized.as_str()
        };

        let mut required_ctrl = false;
        let mut required_alt = false;
        let mut required_logo = false;
        let mut required_shift = false;
        let mut required_key: Option<&str> = None;

        for token in binding.split('+').map(str::trim).filter(|s| !s.is_empty()) {
            match token {
                "ctrl" | "control" => required_ctrl = true,
                "alt" => required_alt = true,
                "logo" | "meta" | "super" | "cmd" | "command" => required_logo = true,
                "shift" => required_shift = true,
                key => required_key = Some(key),
            }
        }

        required_key == Some(pressed)
            && required_ctrl == modifiers.control()
            && required_alt == modifiers.alt()
            && required_logo == modifiers.logo()
            && required_shift == modifiers.shift()
    }
}

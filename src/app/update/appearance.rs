use super::Effect;
use super::super::state::App;
use crate::config::ThemeMode;
use tracing::info;

impl App {
    pub(super) fn handle_toggle_theme(&mut self, effects: &mut Vec<Effect>) {
        let next = match self.config.theme {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        };
        info!(dark_mode = matches!(next, ThemeMode::Dark), "Toggled theme");
        self.config.theme = next;
        effects.push(Effect::SaveConfig);
    }

    pub(super) fn handle_window_moved(&mut self, x: f32, y: f32, effects: &mut Vec<Effect>) {
        if x.is_finite() && y.is_finite() {
            self.config.window_pos_x = Some(x);
            self.config.window_pos_y = Some(y);
            effects.push(Effect::SaveConfig);
        }
    }
}

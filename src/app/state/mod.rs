mod constants;
mod contact;
mod nav;

use crate::config::AppConfig;
use crate::content;
use crate::rate_limit::{Debounce, Throttle};
use crate::scroll_tracker::NavTracker;
use crate::section_map::SectionMap;
use iced::Task;

use super::messages::Message;

pub(crate) use constants::*;
pub(in crate::app) use contact::{ContactState, SubmitStatus};
pub(in crate::app) use nav::NavState;

/// Core application state composed of sub-models.
pub struct App {
    pub(super) nav: NavState,
    pub(super) contact: ContactState,
    pub(super) config: AppConfig,
}

impl App {
    pub fn bootstrap(config: AppConfig) -> (Self, Task<Message>) {
        let sections = SectionMap::estimate(
            &content::SECTION_LINKS,
            config.window_width,
            config.window_height,
        );
        let app = App {
            nav: NavState {
                tracker: NavTracker::new(content::SECTION_LINKS[0].id),
                menu_open: false,
                sample_gate: Throttle::new(SCROLL_SAMPLE_INTERVAL),
                relayout: Debounce::new(RELAYOUT_DEBOUNCE),
                sections,
                latest: None,
            },
            contact: ContactState::empty(),
            config,
        };
        (app, Task::none())
    }
}

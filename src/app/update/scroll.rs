use super::super::state::{App, NavState};
use crate::content::SECTION_LINKS;
use crate::scroll_tracker::ScrollSnapshot;
use crate::section_map::{MappedSections, SectionMap};
use iced::widget::scrollable::RelativeOffset;
use std::time::Instant;
use tracing::debug;

impl App {
    /// Fold a raw scroll report into navigation state. Called at whatever
    /// rate the widget emits; the sample gate drops everything but the first
    /// report per frame interval.
    pub(super) fn handle_scrolled(
        &mut self,
        offset: RelativeOffset,
        viewport_height: f32,
        content_height: f32,
    ) {
        let snapshot = snapshot_from_widget(offset, viewport_height, content_height);
        self.nav.sections.set_measured_height(snapshot.scroll_height);
        self.nav.latest = Some(snapshot);

        let NavState {
            tracker,
            sample_gate,
            sections,
            ..
        } = &mut self.nav;
        sample_gate.call(Instant::now(), || {
            let geometry = MappedSections::new(sections, snapshot.scroll_top);
            if tracker.on_scroll_sample(snapshot, &geometry, &SECTION_LINKS) {
                debug!(
                    active = tracker.active_section(),
                    progress = tracker.progress(),
                    scrolled = tracker.scrolled(),
                    "Scroll state updated"
                );
            }
        });
    }

    pub(super) fn handle_window_resized(
        &mut self,
        width: f32,
        height: f32,
        effects: &mut Vec<super::Effect>,
    ) {
        if !(width.is_finite() && width > 0.0 && height.is_finite() && height > 0.0) {
            return;
        }
        self.config.window_width = width;
        self.config.window_height = height;
        self.nav.relayout.trigger(Instant::now());
        effects.push(super::Effect::SaveConfig);
    }

    /// Once a resize has settled, re-estimate section spans and replay the
    /// most recent sample so the active section stays coherent.
    pub(super) fn handle_relayout_tick(&mut self, now: Instant) {
        if !self.nav.relayout.fire_if_due(now) {
            return;
        }
        self.nav.sections = SectionMap::estimate(
            &SECTION_LINKS,
            self.config.window_width,
            self.config.window_height,
        );
        if let Some(snapshot) = self.nav.latest {
            self.nav.sections.set_measured_height(snapshot.scroll_height);
            let NavState {
                tracker, sections, ..
            } = &mut self.nav;
            let geometry = MappedSections::new(sections, snapshot.scroll_top);
            tracker.on_scroll_sample(snapshot, &geometry, &SECTION_LINKS);
        }
        debug!(
            width = self.config.window_width,
            height = self.config.window_height,
            "Re-estimated section spans after resize"
        );
    }
}

fn snapshot_from_widget(
    offset: RelativeOffset,
    viewport_height: f32,
    content_height: f32,
) -> ScrollSnapshot {
    let clean = |v: f32| if v.is_finite() { v.max(0.0) } else { 0.0 };
    let viewport_height = clean(viewport_height);
    let content_height = clean(content_height);
    let y = if offset.y.is_finite() {
        offset.y.clamp(0.0, 1.0)
    } else {
        0.0
    };
    // `RelativeOffset` is expressed over the scrollable range, not content.
    let scroll_top = y * (content_height - viewport_height).max(0.0);
    ScrollSnapshot::sanitized(scroll_top, content_height, viewport_height)
}

#[cfg(test)]
mod tests {
    use super::super::super::messages::Message;
    use super::super::super::state::App;
    use super::super::Effect;
    use super::*;
    use crate::config::AppConfig;

    fn build_test_app() -> App {
        let (app, _task) = App::bootstrap(AppConfig::default());
        app
    }

    fn scrolled(offset_y: f32) -> Message {
        Message::Scrolled {
            offset: RelativeOffset { x: 0.0, y: offset_y },
            viewport_height: 600.0,
            content_height: 2600.0,
        }
    }

    #[test]
    fn initial_state_matches_page_load() {
        let app = build_test_app();
        assert!(!app.nav.tracker.scrolled());
        assert_eq!(app.nav.tracker.progress(), 0.0);
        assert_eq!(app.nav.tracker.active_section(), "hero");
        assert!(!app.nav.menu_open);
    }

    #[test]
    fn scrolling_a_quarter_down_updates_header_state() {
        let mut app = build_test_app();

        // 25% of the 2000px scrollable range.
        let effects = app.reduce(scrolled(0.25));
        assert!(effects.is_empty(), "scroll samples produce no effects");
        assert!(app.nav.tracker.scrolled());
        assert_eq!(app.nav.tracker.progress(), 25.0);
    }

    #[test]
    fn top_of_page_clears_the_header_background() {
        let mut app = build_test_app();
        app.reduce(scrolled(0.25));
        // The sample gate is open for a frame; wait it out before resampling.
        std::thread::sleep(std::time::Duration::from_millis(20));
        app.reduce(scrolled(0.0));
        assert!(!app.nav.tracker.scrolled());
        assert_eq!(app.nav.tracker.progress(), 0.0);
    }

    #[test]
    fn measured_content_height_rescales_sections() {
        let mut app = build_test_app();
        app.reduce(scrolled(0.0));
        assert!((app.nav.sections.total_height() - 2600.0).abs() < 1e-3);
    }

    #[test]
    fn nav_click_emits_a_snap_effect_and_closes_the_menu() {
        let mut app = build_test_app();
        app.reduce(Message::ToggleMenu);
        assert!(app.nav.menu_open);

        let effects = app.reduce(Message::NavLinkClicked("contact"));
        assert!(!app.nav.menu_open);
        assert_eq!(effects.len(), 1);
        match &effects[0] {
            Effect::ScrollTo(offset) => {
                assert!(offset.y > 0.0 && offset.y <= 1.0);
            }
            _ => panic!("expected a scroll effect"),
        }
    }

    #[test]
    fn resize_arms_the_relayout_debounce() {
        let mut app = build_test_app();
        app.reduce(Message::WindowResized {
            width: 800.0,
            height: 600.0,
        });
        assert!(app.nav.relayout.is_pending());
        assert_eq!(app.config.window_width, 800.0);

        // Not due yet.
        app.reduce(Message::Tick(Instant::now()));
        assert!(app.nav.relayout.is_pending());

        // Due; spans now reflect the new viewport.
        app.reduce(Message::Tick(
            Instant::now() + std::time::Duration::from_millis(250),
        ));
        assert!(!app.nav.relayout.is_pending());
    }

    #[test]
    fn degenerate_widget_metrics_are_tolerated() {
        let mut app = build_test_app();
        let effects = app.reduce(Message::Scrolled {
            offset: RelativeOffset {
                x: 0.0,
                y: f32::NAN,
            },
            viewport_height: f32::INFINITY,
            content_height: -5.0,
        });
        assert!(effects.is_empty());
        assert_eq!(app.nav.tracker.progress(), 0.0);
    }
}

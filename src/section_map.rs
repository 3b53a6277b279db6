//! Estimated section geometry.
//!
//! The scroll widget reports offsets and total sizes but not where each child
//! landed, so section spans are estimated from the same constants `view.rs`
//! lays the page out with, then rescaled against the content height the
//! widget actually measures. Estimates only have to be good enough for the
//! probe line and for snap targets; they are re-derived whenever the window
//! geometry settles after a resize.

use crate::content::{self, SectionLink};
use crate::scroll_tracker::{SectionBounds, SectionGeometry};

// Keep these values in sync with the `view.rs` layout.
pub(crate) const HERO_MIN_HEIGHT_PX: f32 = 540.0;
pub(crate) const SECTION_HEADER_PX: f32 = 72.0;
pub(crate) const SECTION_PADDING_PX: f32 = 48.0;
pub(crate) const ABOUT_BODY_PX: f32 = 260.0;
pub(crate) const SKILL_ROW_PX: f32 = 96.0;
pub(crate) const SKILL_COLUMN_MIN_PX: f32 = 260.0;
pub(crate) const EDUCATION_EVENT_PX: f32 = 150.0;
pub(crate) const PROJECT_CARD_PX: f32 = 240.0;
pub(crate) const CONTACT_FORM_PX: f32 = 560.0;
pub(crate) const FALLBACK_SECTION_PX: f32 = 480.0;

#[derive(Debug, Clone, Copy)]
struct SectionSpan {
    id: &'static str,
    start: f32,
    end: f32,
}

/// Ordered document-space spans for every section, plus the scale factor that
/// reconciles the estimate with the measured content height.
#[derive(Debug, Clone)]
pub struct SectionMap {
    spans: Vec<SectionSpan>,
    estimated_height: f32,
    scale: f32,
}

impl SectionMap {
    pub fn estimate(sections: &[SectionLink], viewport_width: f32, viewport_height: f32) -> Self {
        let mut spans = Vec::with_capacity(sections.len());
        let mut cursor = 0.0;
        for section in sections {
            let height = estimated_section_height(section.id, viewport_width, viewport_height);
            spans.push(SectionSpan {
                id: section.id,
                start: cursor,
                end: cursor + height,
            });
            cursor += height;
        }
        Self {
            spans,
            estimated_height: cursor.max(1.0),
            scale: 1.0,
        }
    }

    /// Rescale spans so the estimate agrees with what the widget measured.
    pub fn set_measured_height(&mut self, content_height: f32) {
        if content_height.is_finite() && content_height > 0.0 {
            self.scale = content_height / self.estimated_height;
        }
    }

    pub fn total_height(&self) -> f32 {
        self.estimated_height * self.scale
    }

    /// Document-space start of a section, for snap targets.
    pub fn offset_of(&self, section_id: &str) -> Option<f32> {
        self.spans
            .iter()
            .find(|span| span.id == section_id)
            .map(|span| span.start * self.scale)
    }

    /// Viewport-relative bounds at the given scroll position.
    pub fn viewport_bounds(&self, section_id: &str, scroll_top: f32) -> Option<SectionBounds> {
        self.spans
            .iter()
            .find(|span| span.id == section_id)
            .map(|span| SectionBounds {
                top: span.start * self.scale - scroll_top,
                bottom: span.end * self.scale - scroll_top,
            })
    }

    /// Relative offset (0..=1) that puts the section start at the viewport
    /// top, expressed over the scrollable range the way `snap_to` expects.
    pub fn snap_offset(&self, section_id: &str, viewport_height: f32) -> Option<f32> {
        let start = self.offset_of(section_id)?;
        let scrollable = (self.total_height() - viewport_height).max(1.0);
        Some((start / scrollable).clamp(0.0, 1.0))
    }
}

/// Pairs the map with the scroll position of one sample so the tracker can
/// ask for viewport-relative boxes.
pub struct MappedSections<'a> {
    map: &'a SectionMap,
    scroll_top: f32,
}

impl<'a> MappedSections<'a> {
    pub fn new(map: &'a SectionMap, scroll_top: f32) -> Self {
        Self { map, scroll_top }
    }
}

impl SectionGeometry for MappedSections<'_> {
    fn bounds(&self, section_id: &str) -> Option<SectionBounds> {
        self.map.viewport_bounds(section_id, self.scroll_top)
    }
}

fn estimated_section_height(section_id: &str, viewport_width: f32, viewport_height: f32) -> f32 {
    match section_id {
        "hero" => viewport_height.max(HERO_MIN_HEIGHT_PX),
        "about" => SECTION_HEADER_PX + ABOUT_BODY_PX + SECTION_PADDING_PX,
        "skills" => {
            let columns = (viewport_width / SKILL_COLUMN_MIN_PX).floor().max(1.0) as usize;
            let rows = content::SKILLS.len().div_ceil(columns);
            SECTION_HEADER_PX + rows as f32 * SKILL_ROW_PX + SECTION_PADDING_PX
        }
        "education" => {
            SECTION_HEADER_PX
                + content::EDUCATION_EVENTS.len() as f32 * EDUCATION_EVENT_PX
                + SECTION_PADDING_PX
        }
        "projects" => {
            SECTION_HEADER_PX
                + content::PROJECTS.len() as f32 * PROJECT_CARD_PX
                + SECTION_PADDING_PX
        }
        "contact" => SECTION_HEADER_PX + CONTACT_FORM_PX + SECTION_PADDING_PX,
        _ => FALLBACK_SECTION_PX,
    }
}

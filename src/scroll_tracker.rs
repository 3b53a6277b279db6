//! Scroll-derived navigation state.
//!
//! Converts sampled scroll positions into the three values the header needs:
//! whether it should paint a solid background, how far down the page the
//! reader is, and which section currently crosses the probe line. The tracker
//! never talks to the windowing layer; geometry arrives through
//! [`SectionGeometry`], which keeps the logic exercisable from plain tests.

use crate::content::SectionLink;

/// Scroll distance (px) past which the header paints a solid background.
pub const SCROLL_BG_THRESHOLD_PX: f32 = 10.0;
/// Vertical offset (px) from the viewport top used to decide which section is
/// currently being read.
pub const SECTION_PROBE_PX: f32 = 100.0;

/// One sampled scroll position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollSnapshot {
    pub scroll_top: f32,
    pub scroll_height: f32,
    pub viewport_height: f32,
}

impl ScrollSnapshot {
    /// Build a snapshot from raw widget metrics, zeroing anything non-finite
    /// or negative.
    pub fn sanitized(scroll_top: f32, scroll_height: f32, viewport_height: f32) -> Self {
        let clean = |v: f32| if v.is_finite() { v.max(0.0) } else { 0.0 };
        Self {
            scroll_top: clean(scroll_top),
            scroll_height: clean(scroll_height),
            viewport_height: clean(viewport_height),
        }
    }
}

/// Viewport-relative bounding box of one section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBounds {
    pub top: f32,
    pub bottom: f32,
}

/// Where sections currently sit relative to the viewport.
///
/// `None` means the section is not laid out right now; the tracker skips it
/// for that sample instead of treating it as a fault.
pub trait SectionGeometry {
    fn bounds(&self, section_id: &str) -> Option<SectionBounds>;
}

/// The header's scroll-derived state register.
#[derive(Debug, Clone, PartialEq)]
pub struct NavTracker {
    scrolled: bool,
    progress: f32,
    active_section: &'static str,
}

impl NavTracker {
    pub fn new(initial_section: &'static str) -> Self {
        Self {
            scrolled: false,
            progress: 0.0,
            active_section: initial_section,
        }
    }

    pub fn scrolled(&self) -> bool {
        self.scrolled
    }

    /// Page scroll progress in percent, clamped to `[0, 100]`.
    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn active_section(&self) -> &'static str {
        self.active_section
    }

    /// Fold one scroll sample into the register. Returns whether anything
    /// observable changed.
    ///
    /// Sections are probed in declaration order and the first hit wins, even
    /// when several satisfy the probe at once; with no hit at all the
    /// previously active section stays put.
    pub fn on_scroll_sample<G>(
        &mut self,
        snapshot: ScrollSnapshot,
        geometry: &G,
        sections: &[SectionLink],
    ) -> bool
    where
        G: SectionGeometry,
    {
        let scrolled = snapshot.scroll_top > SCROLL_BG_THRESHOLD_PX;
        let scrollable = (snapshot.scroll_height - snapshot.viewport_height).max(1.0);
        let progress = (snapshot.scroll_top / scrollable * 100.0).clamp(0.0, 100.0);

        let active = sections
            .iter()
            .find_map(|section| {
                let bounds = geometry.bounds(section.id)?;
                (bounds.top <= SECTION_PROBE_PX && bounds.bottom >= SECTION_PROBE_PX)
                    .then_some(section.id)
            })
            .unwrap_or(self.active_section);

        let changed = scrolled != self.scrolled
            || progress != self.progress
            || active != self.active_section;
        self.scrolled = scrolled;
        self.progress = progress;
        self.active_section = active;
        changed
    }
}

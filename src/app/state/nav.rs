use crate::rate_limit::{Debounce, Throttle};
use crate::scroll_tracker::{NavTracker, ScrollSnapshot};
use crate::section_map::SectionMap;

/// Header and navigation model.
pub struct NavState {
    pub(in crate::app) tracker: NavTracker,
    pub(in crate::app) menu_open: bool,
    pub(in crate::app) sample_gate: Throttle<()>,
    pub(in crate::app) relayout: Debounce,
    pub(in crate::app) sections: SectionMap,
    pub(in crate::app) latest: Option<ScrollSnapshot>,
}

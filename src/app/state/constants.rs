use iced::widget::scrollable::Id as ScrollId;
use once_cell::sync::Lazy;
use std::time::Duration;

/// Scroll samples are folded at most once per frame interval; samples inside
/// an open window are dropped, not queued.
pub(crate) const SCROLL_SAMPLE_INTERVAL: Duration = Duration::from_millis(16);
/// Window resizes must settle this long before section spans are re-estimated.
pub(crate) const RELAYOUT_DEBOUNCE: Duration = Duration::from_millis(200);
/// How long a simulated contact send takes. Nothing ever leaves the machine.
pub(crate) const SIMULATED_SEND_LATENCY: Duration = Duration::from_millis(1500);
/// Lifetime of the post-send success banner.
pub(crate) const BANNER_LIFETIME: Duration = Duration::from_secs(4);

pub(crate) static PAGE_SCROLL_ID: Lazy<ScrollId> = Lazy::new(|| ScrollId::new("page-scroll"));

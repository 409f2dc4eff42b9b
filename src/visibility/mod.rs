//! Fire-once viewport-visibility detection.
//!
//! Animated sections reveal themselves the first time they scroll into view
//! and never hide again. The detector registers with the platform's
//! viewport-observation facility, waits for the first intersection ratio at
//! or above its threshold, flips a monotonic flag, and drops its
//! registration since no later report can change anything.
//!
//! Each section owns one [`VisibilityDetector`]; there is no global observer
//! registry. Headless or non-interactive rendering contexts have no facility
//! at all, in which case attaching fails open: the flag starts true so
//! content is never held back by an animation that cannot run.

mod detector;
mod facility;

pub use detector::{
    RatioSink, VisibilityConfig, VisibilityDetector, VisibilityError, VisibilitySignal,
    DEFAULT_THRESHOLD_RATIO,
};
pub use facility::{ObservationUnavailable, ViewportFacility, ViewportSubscription};

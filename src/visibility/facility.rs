use thiserror::Error;

use crate::visibility::detector::RatioSink;

/// The platform's viewport-observation facility cannot be used, typically
/// because the rendering context is headless or non-interactive.
#[derive(Debug, Error)]
#[error("viewport-observation facility unavailable")]
pub struct ObservationUnavailable;

/// Handle to one active registration with the viewport facility.
pub trait ViewportSubscription: Send {
    /// Stop delivering ratio reports for this registration.
    ///
    /// The detector calls this at most once per subscription.
    fn cancel(&mut self);
}

/// Seam to the platform service that reports how much of a region is
/// currently visible on screen.
pub trait ViewportFacility {
    /// Renderable region handle understood by this facility.
    type Target;

    /// Begin observing `target`, delivering intersection ratios to `sink`.
    ///
    /// The facility may deliver reports synchronously from inside this call
    /// (e.g. when the target is already on screen); the detector tolerates
    /// that ordering.
    fn observe(
        &self,
        target: &Self::Target,
        sink: RatioSink,
    ) -> Result<Box<dyn ViewportSubscription>, ObservationUnavailable>;
}

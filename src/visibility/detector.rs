use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use thiserror::Error;

use crate::visibility::facility::{ViewportFacility, ViewportSubscription};

/// Default fraction of a target that must be on screen to count as entered.
pub const DEFAULT_THRESHOLD_RATIO: f64 = 0.1;

/// Errors that can occur when attaching a detector.
#[derive(Debug, Error)]
pub enum VisibilityError {
    #[error("threshold ratio {0} is outside [0, 1]")]
    InvalidThreshold(f64),
}

/// Configuration for one visibility observation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibilityConfig {
    /// Fraction of the target's area that must be within the viewport for
    /// the target to count as entered. Must lie in `[0, 1]`.
    pub threshold_ratio: f64,
}

impl Default for VisibilityConfig {
    fn default() -> Self {
        Self {
            threshold_ratio: DEFAULT_THRESHOLD_RATIO,
        }
    }
}

struct DetectorInner {
    threshold: f64,
    /// Monotonic: flips false→true at most once, never back.
    entered: AtomicBool,
    /// Set by an explicit release; reports arriving after it are ignored
    /// even if the facility's cancellation races a callback in flight.
    released: AtomicBool,
    subscription: Mutex<Option<Box<dyn ViewportSubscription>>>,
}

impl DetectorInner {
    /// Cancel the registration, if one is still held. Idempotent.
    fn drop_subscription(&self) {
        if let Some(mut sub) = self.subscription.lock().take() {
            sub.cancel();
        }
    }
}

/// Cloneable handle the viewport facility uses to deliver intersection
/// ratios into a detector.
#[derive(Clone)]
pub struct RatioSink {
    inner: Arc<DetectorInner>,
}

impl RatioSink {
    /// Report the target's current intersection ratio.
    ///
    /// The first report at or above the threshold flips the entered flag
    /// and drops the registration; every other report is a no-op.
    pub fn report(&self, ratio: f64) {
        if self.inner.released.load(Ordering::SeqCst) {
            return;
        }
        if ratio >= self.inner.threshold && !self.inner.entered.swap(true, Ordering::SeqCst) {
            tracing::trace!(ratio, threshold = self.inner.threshold, "target entered view");
            self.inner.drop_subscription();
        }
    }
}

/// Cheap read handle a section can keep after handing the detector away.
#[derive(Clone)]
pub struct VisibilitySignal {
    inner: Arc<DetectorInner>,
}

impl VisibilitySignal {
    /// Whether the target has entered the viewport.
    pub fn has_entered(&self) -> bool {
        self.inner.entered.load(Ordering::SeqCst)
    }
}

/// Fire-once visibility detector for one target region.
///
/// Created when the owning section mounts, released (explicitly or on drop)
/// when it unmounts. The detector owns its registration with the viewport
/// facility and never outlives the target it observes.
pub struct VisibilityDetector {
    inner: Arc<DetectorInner>,
}

impl VisibilityDetector {
    /// Begin observing `target` through `facility`.
    ///
    /// When the facility is unavailable the detector fails open: it attaches
    /// with the entered flag already true, so animations gated on it never
    /// block content from appearing.
    ///
    /// # Errors
    /// Returns [`VisibilityError::InvalidThreshold`] when the configured
    /// ratio falls outside `[0, 1]`.
    pub fn attach<F: ViewportFacility>(
        facility: &F,
        target: &F::Target,
        config: VisibilityConfig,
    ) -> Result<Self, VisibilityError> {
        if !(0.0..=1.0).contains(&config.threshold_ratio) {
            return Err(VisibilityError::InvalidThreshold(config.threshold_ratio));
        }

        let inner = Arc::new(DetectorInner {
            threshold: config.threshold_ratio,
            entered: AtomicBool::new(false),
            released: AtomicBool::new(false),
            subscription: Mutex::new(None),
        });

        match facility.observe(target, RatioSink { inner: Arc::clone(&inner) }) {
            Ok(sub) => {
                let mut leftover = Some(sub);
                {
                    let mut slot = inner.subscription.lock();
                    if !inner.entered.load(Ordering::SeqCst) {
                        *slot = leftover.take();
                    }
                }
                // A qualifying ratio arrived synchronously during observe(),
                // before the handle could be stored: cancel it outside the
                // lock.
                if let Some(mut sub) = leftover {
                    sub.cancel();
                }
            }
            Err(_) => {
                tracing::debug!("viewport facility unavailable, revealing target immediately");
                inner.entered.store(true, Ordering::SeqCst);
            }
        }

        Ok(Self { inner })
    }

    /// Whether the target has entered the viewport.
    pub fn has_entered(&self) -> bool {
        self.inner.entered.load(Ordering::SeqCst)
    }

    /// A cloneable read handle onto the entered flag.
    pub fn signal(&self) -> VisibilitySignal {
        VisibilitySignal {
            inner: Arc::clone(&self.inner),
        }
    }

    /// Stop observing immediately, regardless of current state.
    ///
    /// Idempotent: safe to call repeatedly or after the detector already
    /// unsubscribed itself on entry. Releasing before a qualifying ratio
    /// was observed leaves the entered flag false permanently.
    pub fn release(&self) {
        self.inner.released.store(true, Ordering::SeqCst);
        self.inner.drop_subscription();
    }
}

impl Drop for VisibilityDetector {
    fn drop(&mut self) {
        self.release();
    }
}

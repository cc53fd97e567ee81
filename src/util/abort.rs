//! Cancellation handle tying list fetches to component teardown.
//!
//! The clientes and productos list pages abort their in-flight fetch when
//! the component unmounts; every other request runs to completion. After
//! an abort the completion handler must not touch page state, so the
//! handle also answers `is_aborted` for that guard.

#[cfg(test)]
#[path = "abort_test.rs"]
mod abort_test;

#[cfg(not(feature = "hydrate"))]
use std::sync::Arc;
#[cfg(not(feature = "hydrate"))]
use std::sync::atomic::{AtomicBool, Ordering};

/// Clonable wrapper over one `AbortController`; clones share the same
/// underlying controller so aborting from `on_cleanup` is observed by the
/// fetch task holding another clone.
#[derive(Clone, Debug)]
pub struct AbortHandle {
    #[cfg(feature = "hydrate")]
    controller: Option<web_sys::AbortController>,
    #[cfg(not(feature = "hydrate"))]
    aborted: Arc<AtomicBool>,
}

impl AbortHandle {
    /// Create a handle backed by a fresh controller.
    #[must_use]
    pub fn new() -> Self {
        #[cfg(feature = "hydrate")]
        {
            Self {
                controller: web_sys::AbortController::new().ok(),
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self {
                aborted: Arc::new(AtomicBool::new(false)),
            }
        }
    }

    /// The signal handed to the HTTP layer.
    #[cfg(feature = "hydrate")]
    #[must_use]
    pub fn signal(&self) -> Option<web_sys::AbortSignal> {
        self.controller
            .as_ref()
            .map(web_sys::AbortController::signal)
    }

    /// Abort the associated request, if any is in flight.
    pub fn abort(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(controller) = &self.controller {
                controller.abort();
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            self.aborted.store(true, Ordering::Relaxed);
        }
    }

    /// Whether `abort` has been called; checked before writing fetch
    /// results into page state.
    #[must_use]
    pub fn is_aborted(&self) -> bool {
        #[cfg(feature = "hydrate")]
        {
            self.controller
                .as_ref()
                .map_or(true, |c| c.signal().aborted())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            self.aborted.load(Ordering::Relaxed)
        }
    }
}

impl Default for AbortHandle {
    fn default() -> Self {
        Self::new()
    }
}

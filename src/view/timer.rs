//! Banner timers
//!
//! The banner hides itself after a delay. Waiting is platform specific, so
//! the controller asks a [`BannerTimer`] for a delay future at the moment a
//! banner is shown.

use std::future::{ready, Future, Ready};
use std::time::Duration;

/// Produces delay futures
pub trait BannerTimer {
    type Delay: Future<Output = ()>;

    /// A future that completes after `duration`, measured from this call
    fn delay(&self, duration: Duration) -> Self::Delay;
}

/// Completes immediately. Used by the CLI, which prints the banner once and
/// exits.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelay;

impl BannerTimer for NoDelay {
    type Delay = Ready<()>;

    fn delay(&self, _duration: Duration) -> Self::Delay {
        ready(())
    }
}

/// Tokio-backed timer
#[cfg(feature = "native")]
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioTimer;

#[cfg(feature = "native")]
impl BannerTimer for TokioTimer {
    type Delay = tokio::time::Sleep;

    fn delay(&self, duration: Duration) -> Self::Delay {
        tokio::time::sleep(duration)
    }
}

//! Pauses between screens.

use std::time::Duration;
use tracing::{instrument, trace};

/// Something that can hold the game for a moment.
///
/// Injected into the console so tests can run without delays.
pub trait Pacer {
    /// Blocks for `duration`.
    fn pause(&mut self, duration: Duration);
}

/// Sleeps the current thread.
#[derive(Debug, Clone, Copy, Default)]
pub struct SleepPacer;

impl Pacer for SleepPacer {
    #[instrument(skip(self))]
    fn pause(&mut self, duration: Duration) {
        if duration.is_zero() {
            return;
        }
        trace!("Sleeping");
        std::thread::sleep(duration);
    }
}

/// Never pauses.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPause;

impl Pacer for NoPause {
    fn pause(&mut self, _duration: Duration) {}
}

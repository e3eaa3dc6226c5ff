use button_monitor::{TimeDuration, TimeInstant, TimeSource};
use esp_hal::time::Instant;

/// Duration type using milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct EspDuration(pub u64);

impl TimeDuration for EspDuration {
    const ZERO: Self = EspDuration(0);

    fn as_millis(&self) -> u64 {
        self.0
    }

    fn from_millis(millis: u64) -> Self {
        EspDuration(millis)
    }

    fn saturating_sub(self, other: Self) -> Self {
        EspDuration(self.0.saturating_sub(other.0))
    }
}

/// Milliseconds since boot
///
/// The system timer is 52/64-bit, so this does not wrap in practice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct EspInstant(u64);

impl EspInstant {
    /// Returns the instant as milliseconds since startup
    pub fn as_millis(&self) -> u64 {
        self.0
    }
}

impl TimeInstant for EspInstant {
    type Duration = EspDuration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        EspDuration(self.0.saturating_sub(earlier.0))
    }
}

/// Time source reading the `esp-hal` system timer
pub struct EspTimeSource;

impl EspTimeSource {
    pub fn new() -> Self {
        Self
    }
}

impl Default for EspTimeSource {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeSource<EspInstant> for EspTimeSource {
    fn now(&self) -> EspInstant {
        EspInstant(Instant::now().duration_since_epoch().as_millis())
    }
}

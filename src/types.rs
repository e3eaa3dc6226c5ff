//! Core types shared by the button state and the monitor.

use crate::time::TimeDuration;

/// Default time the interrupt stays attached after startup (milliseconds).
pub const DEFAULT_TIMEOUT_MS: u64 = 60_000;

/// Baud rate the serial console is opened at.
pub const DEFAULT_BAUD_RATE: u32 = 9600;

/// Identifier of a digital input line (GPIO number).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinId(pub u8);

impl core::fmt::Display for PinId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "GPIO{}", self.0)
    }
}

/// Registration state of the edge interrupt.
///
/// `Attached` moves to `Detached` exactly once and never back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InterruptState {
    /// Handler bound to the pin; edges are counted.
    Attached,
    /// Handler removed; count and flag are frozen.
    Detached,
}

/// A line emitted on the serial channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Report {
    /// At least one unreported press was observed.
    Pressed {
        /// Button number shown to the user.
        button: u8,
        /// Total press count at the time of the report.
        count: u32,
    },

    /// The interrupt was unregistered after the timeout.
    Detached,
}

impl core::fmt::Display for Report {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Report::Pressed { button, count } => {
                write!(f, "Button {} has been pressed {} times", button, count)
            }
            Report::Detached => write!(f, "Interrupt Detached!"),
        }
    }
}

/// Timing information returned by [`ButtonMonitor::poll`](crate::ButtonMonitor::poll).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PollTiming<D> {
    /// Interrupt still attached. The timeout fires once this much more time has passed.
    ///
    /// Presses can arrive at any moment, so a timer-driven caller should still
    /// poll at its usual rate and treat this as an upper bound.
    Deadline(D),

    /// Interrupt detached. Only an already pending press can still be reported.
    Detached,
}

/// Compile-time settings for a [`ButtonMonitor`](crate::ButtonMonitor).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonitorConfig<D: TimeDuration> {
    /// Button number used in press reports.
    pub button: u8,

    /// How long the interrupt stays attached. Detaches once elapsed time exceeds this.
    pub timeout: D,
}

impl<D: TimeDuration> MonitorConfig<D> {
    /// Creates a config for button 1 with the given timeout.
    #[inline]
    pub fn new(timeout: D) -> Self {
        Self { button: 1, timeout }
    }

    /// Sets the button number shown in press reports.
    #[inline]
    pub fn with_button(mut self, button: u8) -> Self {
        self.button = button;
        self
    }
}

impl<D: TimeDuration> Default for MonitorConfig<D> {
    fn default() -> Self {
        Self::new(D::from_millis(DEFAULT_TIMEOUT_MS))
    }
}

#![no_std]
#![no_main]

use button_monitor::{
    ButtonMonitor, ButtonState, EdgeInterrupt, MonitorConfig, PinId, Report, ReportSink,
    TimeDuration, TimeInstant, TimeSource,
};
use cortex_m_rt::entry;
use panic_halt as _;

// ============================================================================
// Minimal Time Types
// ============================================================================

/// Minimal 32-bit millisecond duration
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Duration32(u32);

impl TimeDuration for Duration32 {
    const ZERO: Self = Duration32(0);

    fn as_millis(&self) -> u64 {
        self.0 as u64
    }

    fn from_millis(millis: u64) -> Self {
        Duration32(millis as u32)
    }

    fn saturating_sub(self, other: Self) -> Self {
        Duration32(self.0.saturating_sub(other.0))
    }
}

/// Minimal 32-bit millisecond instant
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Instant32(u32);

impl TimeInstant for Instant32 {
    type Duration = Duration32;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        Duration32(self.0.wrapping_sub(earlier.0))
    }
}

// ============================================================================
// Minimal Hardware Implementations
// ============================================================================

/// Zero-size interrupt controller for measuring library overhead
pub struct MinimalInterrupt;

impl EdgeInterrupt for MinimalInterrupt {
    fn attach(&mut self, pin: PinId) {
        core::hint::black_box(pin);
    }

    fn detach(&mut self, pin: PinId) {
        core::hint::black_box(pin);
    }
}

/// Zero-size sink; formatting is left to the board so it is not measured here
pub struct MinimalSink;

impl ReportSink for MinimalSink {
    fn emit(&mut self, report: &Report) {
        core::hint::black_box(report);
    }
}

pub struct MinimalTimeSource;

impl TimeSource<Instant32> for MinimalTimeSource {
    fn now(&self) -> Instant32 {
        Instant32(core::hint::black_box(0))
    }
}

static BUTTON: ButtonState = ButtonState::new(PinId(0));

#[entry]
fn main() -> ! {
    let time_source = MinimalTimeSource;
    let mut monitor = ButtonMonitor::new(
        &BUTTON,
        MinimalInterrupt,
        MinimalSink,
        &time_source,
        MonitorConfig::default(),
    );

    // Stands in for the interrupt handler so record_edge is linked
    BUTTON.record_edge();

    monitor.run(cortex_m::asm::nop)
}

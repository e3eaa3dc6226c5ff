//! Shared test infrastructure for button-monitor integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use core::cell::{Cell, RefCell};

use button_monitor::{
    ButtonState, EdgeInterrupt, PinId, Report, ReportSink, TimeDuration, TimeInstant, TimeSource,
};

// ============================================================================
// Mock Time Types
// ============================================================================

/// Mock duration type for testing (wraps milliseconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestDuration(pub u64);

impl TimeDuration for TestDuration {
    const ZERO: Self = TestDuration(0);

    fn as_millis(&self) -> u64 {
        self.0
    }

    fn from_millis(millis: u64) -> Self {
        TestDuration(millis)
    }

    fn saturating_sub(self, other: Self) -> Self {
        TestDuration(self.0.saturating_sub(other.0))
    }
}

/// Mock instant type for testing
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestInstant(pub u64);

impl TimeInstant for TestInstant {
    type Duration = TestDuration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        TestDuration(self.0 - earlier.0)
    }
}

/// 32-bit millisecond tick that wraps, like a SysTick counter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WrappingInstant(pub u32);

impl TimeInstant for WrappingInstant {
    type Duration = TestDuration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        TestDuration(self.0.wrapping_sub(earlier.0) as u64)
    }
}

// ============================================================================
// Mock Time Source
// ============================================================================

/// Mock time source with controllable time advancement
pub struct MockTimeSource {
    current_time: Cell<TestInstant>,
}

impl MockTimeSource {
    pub fn new() -> Self {
        Self {
            current_time: Cell::new(TestInstant(0)),
        }
    }

    /// Advance time by the given duration
    pub fn advance(&self, duration: TestDuration) {
        let current = self.current_time.get();
        self.current_time.set(TestInstant(current.0 + duration.0));
    }

    pub fn set_time(&self, time: TestInstant) {
        self.current_time.set(time);
    }
}

impl TimeSource<TestInstant> for MockTimeSource {
    fn now(&self) -> TestInstant {
        self.current_time.get()
    }
}

/// Wrapping 32-bit time source
pub struct WrappingTimeSource {
    ticks: Cell<u32>,
}

impl WrappingTimeSource {
    pub fn starting_at(ticks: u32) -> Self {
        Self {
            ticks: Cell::new(ticks),
        }
    }

    pub fn advance(&self, millis: u32) {
        self.ticks.set(self.ticks.get().wrapping_add(millis));
    }
}

impl TimeSource<WrappingInstant> for WrappingTimeSource {
    fn now(&self) -> WrappingInstant {
        WrappingInstant(self.ticks.get())
    }
}

// ============================================================================
// Mock Interrupt Controller
// ============================================================================

/// Records attach/detach calls and gates simulated edges on the attach state.
///
/// Stands in for the hardware: [`MockInterrupt::fire`] only reaches the button
/// state while the handler is registered.
pub struct MockInterrupt<'a> {
    state: &'a ButtonState,
    attached: Cell<bool>,
    attach_calls: Cell<u32>,
    detach_calls: Cell<u32>,
    pending_on_detach: Cell<u32>,
}

impl<'a> MockInterrupt<'a> {
    pub fn new(state: &'a ButtonState) -> Self {
        Self {
            state,
            attached: Cell::new(false),
            attach_calls: Cell::new(0),
            detach_calls: Cell::new(0),
            pending_on_detach: Cell::new(0),
        }
    }

    /// Simulate a falling edge on the pin
    pub fn fire(&self) {
        if self.attached.get() {
            self.state.record_edge();
        }
    }

    /// Simulate `n` edges landing right before the detach takes effect
    pub fn edges_during_detach(&self, n: u32) {
        self.pending_on_detach.set(n);
    }

    pub fn is_attached(&self) -> bool {
        self.attached.get()
    }

    pub fn attach_calls(&self) -> u32 {
        self.attach_calls.get()
    }

    pub fn detach_calls(&self) -> u32 {
        self.detach_calls.get()
    }
}

impl EdgeInterrupt for &MockInterrupt<'_> {
    fn attach(&mut self, pin: PinId) {
        assert_eq!(pin, self.state.pin());
        self.attached.set(true);
        self.attach_calls.set(self.attach_calls.get() + 1);
    }

    fn detach(&mut self, pin: PinId) {
        assert_eq!(pin, self.state.pin());
        for _ in 0..self.pending_on_detach.replace(0) {
            self.fire();
        }
        self.attached.set(false);
        self.detach_calls.set(self.detach_calls.get() + 1);
    }
}

// ============================================================================
// Mock Serial Sink
// ============================================================================

/// Mock serial output that records every emitted line
pub struct MockSink {
    lines: RefCell<heapless::Vec<heapless::String<64>, 512>>,
}

impl MockSink {
    pub fn new() -> Self {
        Self {
            lines: RefCell::new(heapless::Vec::new()),
        }
    }

    pub fn lines(&self) -> heapless::Vec<heapless::String<64>, 512> {
        self.lines.borrow().clone()
    }

    pub fn line_count(&self) -> usize {
        self.lines.borrow().len()
    }

    pub fn count_of(&self, text: &str) -> usize {
        self.lines.borrow().iter().filter(|l| l.as_str() == text).count()
    }

    pub fn last_line(&self) -> Option<heapless::String<64>> {
        self.lines.borrow().last().cloned()
    }
}

impl ReportSink for &MockSink {
    fn emit(&mut self, report: &Report) {
        use core::fmt::Write;

        let mut line = heapless::String::<64>::new();
        let _ = write!(line, "{}", report);
        let _ = self.lines.borrow_mut().push(line);
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

pub const PRESSED_1: &str = "Button 1 has been pressed 1 times";
pub const PRESSED_2: &str = "Button 1 has been pressed 2 times";
pub const DETACHED: &str = "Interrupt Detached!";

//! Interrupt-driven button monitor with a one-shot detach timeout.
//!
//! Provides [`ButtonMonitor`], which drains the [`ButtonState`] filled in by the
//! interrupt handler, reports presses to a [`ReportSink`], and unregisters the
//! interrupt through [`EdgeInterrupt`] once the configured timeout has passed.

use crate::state::ButtonState;
use crate::time::{TimeDuration, TimeInstant, TimeSource};
use crate::types::{InterruptState, MonitorConfig, PinId, PollTiming, Report};

/// Trait for abstracting the falling-edge interrupt on the button pin.
///
/// Implement this for your GPIO/interrupt controller. The handler bound by
/// `attach` must do nothing but call [`ButtonState::record_edge`] and clear the
/// hardware pending bit. Handle any hardware errors internally - these methods
/// cannot fail.
pub trait EdgeInterrupt {
    /// Registers the falling-edge handler for `pin`.
    fn attach(&mut self, pin: PinId);

    /// Unregisters the handler. Edges after this call are not counted.
    fn detach(&mut self, pin: PinId);
}

/// Trait for abstracting the serial output channel.
pub trait ReportSink {
    /// Writes the report as one line.
    ///
    /// Use the report's `Display` impl for the text and terminate the line
    /// yourself. Handle any I/O errors internally - this method cannot fail.
    fn emit(&mut self, report: &Report);
}

/// Polls a single button's shared state and manages its interrupt lifetime.
///
/// # Type Parameters
/// * `'a` - Lifetime of the shared state and time source references
/// * `I` - Time instant type
/// * `E` - Edge interrupt implementation type
/// * `S` - Report sink implementation type
/// * `T` - Time source implementation type
pub struct ButtonMonitor<'a, I: TimeInstant, E: EdgeInterrupt, S: ReportSink, T: TimeSource<I>> {
    state: &'a ButtonState,
    interrupt: E,
    sink: S,
    time_source: &'a T,
    config: MonitorConfig<I::Duration>,
    started: I,
    interrupt_state: InterruptState,
    last_reported: Option<u32>,
}

impl<'a, I: TimeInstant, E: EdgeInterrupt, S: ReportSink, T: TimeSource<I>>
    ButtonMonitor<'a, I, E, S, T>
{
    /// Attaches the interrupt and starts the detach timer.
    pub fn new(
        state: &'a ButtonState,
        mut interrupt: E,
        sink: S,
        time_source: &'a T,
        config: MonitorConfig<I::Duration>,
    ) -> Self {
        interrupt.attach(state.pin());

        Self {
            state,
            interrupt,
            sink,
            time_source,
            config,
            started: time_source.now(),
            interrupt_state: InterruptState::Attached,
            last_reported: None,
        }
    }

    /// Runs one iteration of the polling loop.
    ///
    /// First reports a pending press, if any, then detaches the interrupt if
    /// more than `config.timeout` has elapsed since construction. The two
    /// checks are independent: a press latched before the detach is still
    /// reported on a later poll. A count that was already reported is never
    /// emitted again.
    ///
    /// # Returns
    /// - `PollTiming::Deadline(remaining)` - Still attached, timeout fires after `remaining`
    /// - `PollTiming::Detached` - Interrupt has been detached
    pub fn poll(&mut self) -> PollTiming<I::Duration> {
        if let Some(count) = self.state.take_pressed() {
            // An edge between the flag swap and the count load re-sets the flag
            // for a count this poll already reports.
            if self.last_reported != Some(count) {
                self.sink.emit(&Report::Pressed {
                    button: self.config.button,
                    count,
                });
                self.last_reported = Some(count);
            }
        }

        match self.interrupt_state {
            InterruptState::Attached => {
                let elapsed = self.elapsed();
                if elapsed.as_millis() > self.config.timeout.as_millis() {
                    self.interrupt.detach(self.state.pin());
                    self.sink.emit(&Report::Detached);
                    self.interrupt_state = InterruptState::Detached;
                    PollTiming::Detached
                } else {
                    PollTiming::Deadline(self.config.timeout.saturating_sub(elapsed))
                }
            }
            InterruptState::Detached => PollTiming::Detached,
        }
    }

    /// Polls forever, calling `delay` between iterations.
    ///
    /// Pass a no-op closure to busy-poll.
    pub fn run<F: FnMut()>(&mut self, mut delay: F) -> ! {
        loop {
            self.poll();
            delay();
        }
    }

    /// Returns the current interrupt registration state.
    pub fn interrupt_state(&self) -> InterruptState {
        self.interrupt_state
    }

    /// Returns true once the timeout has fired.
    pub fn is_detached(&self) -> bool {
        self.interrupt_state == InterruptState::Detached
    }

    /// Returns the time since the monitor was created.
    pub fn elapsed(&self) -> I::Duration {
        self.time_source.now().duration_since(self.started)
    }

    /// Returns the shared button state.
    pub fn state(&self) -> &ButtonState {
        self.state
    }

    /// Returns the monitor configuration.
    pub fn config(&self) -> &MonitorConfig<I::Duration> {
        &self.config
    }

    /// Returns a reference to the report sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Returns a mutable reference to the report sink.
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Consumes the monitor and returns the interrupt and sink.
    ///
    /// Does not detach; the interrupt stays in whatever state it is in.
    pub fn release(self) -> (E, S) {
        (self.interrupt, self.sink)
    }
}

use core::fmt::Write;

use button_monitor::{Report, ReportSink};
use esp_hal::Blocking;
use esp_hal::uart::Uart;

/// Serial console sink writing one report per line over UART.
///
/// Write errors are dropped.
pub struct UartSink<'d> {
    uart: Uart<'d, Blocking>,
}

impl<'d> UartSink<'d> {
    /// Wraps an already configured UART (see `DEFAULT_BAUD_RATE`).
    pub fn new(uart: Uart<'d, Blocking>) -> Self {
        Self { uart }
    }
}

impl ReportSink for UartSink<'_> {
    fn emit(&mut self, report: &Report) {
        let _ = writeln!(self.uart, "{}", report);
    }
}

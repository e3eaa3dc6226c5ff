#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`ButtonState`**: Lock-free press counter and pressed flag shared with the interrupt handler
//! - **`ButtonMonitor`**: Polling loop that reports presses and detaches the interrupt after a timeout
//! - **`EdgeInterrupt`**: Trait to implement for your GPIO interrupt controller
//! - **`ReportSink`**: Trait to implement for your serial output
//! - **`TimeSource`**: Trait to implement for your timing system
//! - **`Report`**: A line written to the serial output
//! - **`PollTiming`**: How long until the detach timeout fires
//!
//! The interrupt handler's only job is [`ButtonState::record_edge`]. Everything
//! else, including all serial output, happens in [`ButtonMonitor::poll`].

pub mod monitor;
pub mod state;
pub mod time;
pub mod types;

pub use monitor::{ButtonMonitor, EdgeInterrupt, ReportSink};
pub use state::ButtonState;
pub use time::{TimeDuration, TimeInstant, TimeSource};
pub use types::{
    DEFAULT_BAUD_RATE, DEFAULT_TIMEOUT_MS, InterruptState, MonitorConfig, PinId, PollTiming,
    Report,
};

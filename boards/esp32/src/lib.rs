#![no_std]

//! `esp-hal` implementations of the `button-monitor` hardware traits.

pub mod interrupt;
pub mod serial;
pub mod time_source;

/// GPIO the push-button is wired to (active low, internal pull-up).
#[cfg(feature = "esp32s3")]
pub const BUTTON_GPIO: u8 = 38;

/// GPIO the push-button is wired to (BOOT button).
#[cfg(feature = "esp32")]
pub const BUTTON_GPIO: u8 = 0;

/// GPIO the push-button is wired to (BOOT button).
#[cfg(feature = "esp32c3")]
pub const BUTTON_GPIO: u8 = 9;

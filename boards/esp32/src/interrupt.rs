//! GPIO falling-edge interrupt wiring.
//!
//! The handler needs `'static` access to both the shared [`ButtonState`] and the
//! [`Input`] driver (to clear the pending bit), so both live in statics here.
//! The driver sits behind a `critical_section::Mutex` as in the `esp-hal` GPIO
//! interrupt examples; the button state itself is lock-free.

use core::cell::RefCell;

use button_monitor::{ButtonState, EdgeInterrupt, PinId};
use critical_section::Mutex;
use esp_hal::gpio::{Event, Input};
use esp_hal::{handler, ram};
use log::debug;

use crate::BUTTON_GPIO;

/// Press counter and flag shared with the polling loop.
pub static BUTTON: ButtonState = ButtonState::new(PinId(BUTTON_GPIO));

/// Button input driver, reachable from the interrupt handler.
static BUTTON_INPUT: Mutex<RefCell<Option<Input<'static>>>> = Mutex::new(RefCell::new(None));

/// GPIO interrupt handler.
///
/// Register with `Io::set_interrupt_handler`. Placed in RAM so it runs while
/// flash cache is disabled.
#[handler]
#[ram]
pub fn gpio_handler() {
    critical_section::with(|cs| {
        let mut input = BUTTON_INPUT.borrow_ref_mut(cs);
        let Some(input) = input.as_mut() else {
            // GPIO interrupt from before the button was installed
            return;
        };
        if input.is_interrupt_set() {
            BUTTON.record_edge();
            input.clear_interrupt();
        }
    });
}

/// Hands the configured button input over to the interrupt handler.
///
/// Call once at startup, before creating the monitor.
pub fn install(input: Input<'static>) {
    critical_section::with(|cs| {
        BUTTON_INPUT.borrow_ref_mut(cs).replace(input);
    });
}

/// [`EdgeInterrupt`] backed by the installed GPIO input.
///
/// Does nothing if [`install`] was never called.
pub struct GpioEdgeInterrupt;

impl EdgeInterrupt for GpioEdgeInterrupt {
    fn attach(&mut self, pin: PinId) {
        critical_section::with(|cs| {
            if let Some(input) = BUTTON_INPUT.borrow_ref_mut(cs).as_mut() {
                input.listen(Event::FallingEdge);
            }
        });
        debug!("falling-edge interrupt attached on {}", pin);
    }

    fn detach(&mut self, pin: PinId) {
        critical_section::with(|cs| {
            if let Some(input) = BUTTON_INPUT.borrow_ref_mut(cs).as_mut() {
                input.unlisten();
                input.clear_interrupt();
            }
        });
        debug!("falling-edge interrupt detached from {}", pin);
    }
}

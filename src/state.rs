//! Button state shared between the interrupt handler and the polling loop.
//!
//! Provides [`ButtonState`], a lock-free pair of press counter and pressed flag.
//! The interrupt handler is the only writer of the counter and the only setter
//! of the flag; the polling loop is the only clearer of the flag.

use crate::types::PinId;
use portable_atomic::{AtomicBool, AtomicU32, Ordering};

/// Press counter and edge flag for a single button.
///
/// Meant to live in a `static` so the interrupt handler can reach it:
///
/// ```
/// use button_monitor::{ButtonState, PinId};
///
/// static BUTTON: ButtonState = ButtonState::new(PinId(38));
///
/// // inside the GPIO interrupt handler
/// BUTTON.record_edge();
///
/// // inside the polling loop
/// assert_eq!(BUTTON.take_pressed(), Some(1));
/// assert_eq!(BUTTON.take_pressed(), None);
/// ```
#[derive(Debug)]
pub struct ButtonState {
    pin: PinId,
    press_count: AtomicU32,
    pressed: AtomicBool,
}

impl ButtonState {
    /// Creates a state with zero presses and the flag clear.
    pub const fn new(pin: PinId) -> Self {
        Self {
            pin,
            press_count: AtomicU32::new(0),
            pressed: AtomicBool::new(false),
        }
    }

    /// Returns the input line this button is wired to.
    #[inline]
    pub fn pin(&self) -> PinId {
        self.pin
    }

    /// Records one falling edge. Call this from the interrupt handler.
    ///
    /// Never blocks, allocates or fails. The counter wraps on overflow.
    #[inline]
    pub fn record_edge(&self) {
        self.press_count.fetch_add(1, Ordering::Relaxed);
        // Release pairs with the Acquire swap in `take_pressed`, so the
        // increment above is visible to whoever observes the flag.
        self.pressed.store(true, Ordering::Release);
    }

    /// Clears the pressed flag and returns the count if it was set.
    ///
    /// Several edges between two calls produce a single `Some`; the count
    /// itself stays exact. An edge landing between the flag swap and the
    /// count load leaves the flag set for a count already returned, so the
    /// next call can return the same value again.
    #[inline]
    pub fn take_pressed(&self) -> Option<u32> {
        if self.pressed.swap(false, Ordering::Acquire) {
            Some(self.press_count.load(Ordering::Relaxed))
        } else {
            None
        }
    }

    /// Returns the total number of recorded edges.
    #[inline]
    pub fn press_count(&self) -> u32 {
        self.press_count.load(Ordering::Relaxed)
    }

    /// Returns true if an edge is waiting to be reported.
    #[inline]
    pub fn is_pressed(&self) -> bool {
        self.pressed.load(Ordering::Acquire)
    }

    /// Sets the flag without counting an edge, as seen by a poll whose swap
    /// was preempted before it loaded the count.
    #[cfg(test)]
    pub(crate) fn raise_flag_only(&self) {
        self.pressed.store(true, Ordering::Release);
    }

    #[cfg(test)]
    fn with_count(pin: PinId, count: u32) -> Self {
        Self {
            pin,
            press_count: AtomicU32::new(count),
            pressed: AtomicBool::new(false),
        }
    }
}

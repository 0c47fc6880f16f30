//! GPIO pin abstractions
//!
//! Minimal digital I/O traits for pins that cannot fail. Backends whose
//! pins already implement `embedded_hal::digital` can use
//! [`crate::EhPins`] instead of implementing these directly.

/// Digital output pin
pub trait OutputPin {
    /// Set the pin high (logic 1)
    fn set_high(&mut self);

    /// Set the pin low (logic 0)
    fn set_low(&mut self);

    /// Set the pin to a specific state
    fn set_state(&mut self, high: bool) {
        if high {
            self.set_high();
        } else {
            self.set_low();
        }
    }
}

/// Digital input pin
pub trait InputPin {
    /// Check if the pin reads high (logic 1)
    fn is_high(&mut self) -> bool;

    /// Check if the pin reads low (logic 0)
    fn is_low(&mut self) -> bool {
        !self.is_high()
    }
}

/// Pin whose direction can be switched at runtime
///
/// The SDA line of a bit-banged bus is driven by the master while it
/// transmits and released to the target while it acknowledges or
/// sends data.
pub trait FlexPin: OutputPin + InputPin {
    /// Reconfigure the pin as an input
    fn set_as_input(&mut self);

    /// Reconfigure the pin as an output, keeping the latched level
    fn set_as_output(&mut self);
}

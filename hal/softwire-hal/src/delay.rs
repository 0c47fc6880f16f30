//! Busy-wait delay

/// Blocking delay measured in backend-defined ticks
///
/// The engine never interprets a tick; it only passes the configured
/// half-period through. Backends built on `embedded_hal::delay::DelayNs`
/// treat one tick as one microsecond.
pub trait TickDelay {
    /// Block for `ticks` ticks
    fn delay_ticks(&mut self, ticks: u32);
}

impl<T: TickDelay + ?Sized> TickDelay for &mut T {
    fn delay_ticks(&mut self, ticks: u32) {
        (**self).delay_ticks(ticks)
    }
}

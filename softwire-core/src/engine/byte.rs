//! Byte transfer and acknowledge detection

use softwire_hal::{BusPins, Direction};

use super::BusHandle;
use crate::error::BusError;

impl<P: BusPins> BusHandle<P> {
    /// Clock out one byte, MSB first, and wait for the target's acknowledge
    ///
    /// # Errors
    ///
    /// [`BusError::AckTimeout`] if the target never pulls SDA low. The bus
    /// has been STOPped by then, so the caller can simply retry.
    pub fn write_byte(&mut self, byte: u8) -> Result<(), BusError> {
        let mut byte = byte;
        for _ in 0..8 {
            self.pins.set_scl(false);
            self.half_period();
            self.pins.set_sda(byte & 0x80 != 0);
            self.pins.set_scl(true);
            self.half_period();
            byte <<= 1;
        }

        self.wait_ack()
    }

    /// Clock in one byte, MSB first, then acknowledge it or not
    ///
    /// Pass `ack = true` when more bytes are expected; the last byte of a
    /// read is NACKed so the target stops driving SDA.
    pub fn read_byte(&mut self, ack: bool) -> u8 {
        let mut byte = 0u8;

        self.pins.set_sda_direction(Direction::Input);
        for _ in 0..8 {
            byte <<= 1;
            self.pins.set_scl(false);
            self.half_period();
            self.pins.set_scl(true);
            if self.pins.read_sda() {
                byte |= 0x01;
            }
            self.half_period();
        }

        if ack {
            self.ack();
        } else {
            self.nack();
        }
        byte
    }

    /// Ninth clock of a written byte: poll SDA for the target's acknowledge
    ///
    /// The poll is bounded by `ack_poll_budget` samples, not wall-clock
    /// time. On success SDA is driven high again; on timeout the bus is
    /// STOPped.
    pub(crate) fn wait_ack(&mut self) -> Result<(), BusError> {
        self.pins.set_scl(false);
        self.pins.set_sda_direction(Direction::Input);
        self.half_period();
        self.pins.set_scl(true);

        let mut acked = false;
        for _ in 0..self.config.ack_poll_budget {
            if !self.pins.read_sda() {
                acked = true;
                break;
            }
        }

        if !acked {
            #[cfg(feature = "defmt")]
            defmt::debug!(
                "ack timeout after {} samples",
                self.config.ack_poll_budget
            );
            self.pins.set_sda(true);
            self.pins.set_sda_direction(Direction::Output);
            self.stop();
            return Err(BusError::AckTimeout);
        }

        self.half_period();
        self.pins.set_scl(false);
        self.pins.set_sda(true);
        self.pins.set_sda_direction(Direction::Output);
        Ok(())
    }
}

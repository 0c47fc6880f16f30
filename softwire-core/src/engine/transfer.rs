//! Multi-message transfers

use softwire_hal::BusPins;

use super::BusHandle;
use crate::error::BusError;
use crate::message::{Message, Payload};

impl<P: BusPins> BusHandle<P> {
    /// Run `messages` as one transaction, ending with a STOP
    ///
    /// Legs not flagged `no_start` begin with a START (a repeated START for
    /// the second message) and their address byte. Written bytes each
    /// replace the status, so only the last byte's acknowledge is reported.
    /// Read legs ACK every byte but the last and always count as success,
    /// even when their address byte timed out. A timeout still standing
    /// after a write leg ends the loop.
    ///
    /// Transactions with more than two legs get a plain START from the third
    /// leg onwards; use [`transfer_strict`](Self::transfer_strict) for
    /// per-leg repeated STARTs and first-failure reporting.
    pub fn transfer(&mut self, messages: &mut [Message<'_>]) -> Result<(), BusError> {
        let mut status = Ok(());

        for (index, message) in messages.iter_mut().enumerate() {
            if !message.no_start {
                if index == 1 {
                    self.restart();
                } else {
                    self.start();
                }
                status = self.write_byte(message.address_byte());
            }

            match &mut message.payload {
                Payload::Write(data) => {
                    for &byte in data.iter() {
                        status = self.write_byte(byte);
                    }
                }
                Payload::Read(buf) => {
                    self.read_into(buf);
                    status = Ok(());
                }
            }

            if status.is_err() {
                break;
            }
        }

        self.stop();
        status
    }

    /// Run `messages` as one transaction, stopping at the first timeout
    ///
    /// Every leg after the first that is not flagged `no_start` gets a
    /// repeated START.
    ///
    /// # Errors
    ///
    /// [`BusError::AckTimeout`] from the first unacknowledged byte. The
    /// remaining bytes and legs are skipped; the bus is left STOPped.
    pub fn transfer_strict(&mut self, messages: &mut [Message<'_>]) -> Result<(), BusError> {
        for (index, message) in messages.iter_mut().enumerate() {
            if !message.no_start {
                if index == 0 {
                    self.start();
                } else {
                    self.restart();
                }
                self.write_byte(message.address_byte())?;
            }

            match &mut message.payload {
                Payload::Write(data) => self.write_all(data)?,
                Payload::Read(buf) => self.read_into(buf),
            }
        }

        self.stop();
        Ok(())
    }

    /// Write every byte, giving up at the first timeout
    pub(crate) fn write_all(&mut self, data: &[u8]) -> Result<(), BusError> {
        for &byte in data {
            self.write_byte(byte)?;
        }
        Ok(())
    }

    /// Fill `buf`, ACKing all bytes but the last
    pub(crate) fn read_into(&mut self, buf: &mut [u8]) {
        let last = buf.len().saturating_sub(1);
        for (index, slot) in buf.iter_mut().enumerate() {
            *slot = self.read_byte(index != last);
        }
    }
}

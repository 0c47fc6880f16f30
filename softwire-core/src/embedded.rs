//! embedded-hal 1.0 `I2c` implementation
//!
//! Lets existing embedded-hal device drivers run on a bit-banged bus.
//! Follows the embedded-hal transaction contract: one START, a repeated
//! START and address byte whenever the direction changes, a single STOP at
//! the end, and the first missing acknowledge aborts the transaction.

use embedded_hal::i2c::{ErrorType, I2c, Operation, SevenBitAddress};
use softwire_hal::BusPins;

use crate::engine::BusHandle;
use crate::error::BusError;
use crate::message::address_byte;

impl<P: BusPins> ErrorType for BusHandle<P> {
    type Error = BusError;
}

impl<P: BusPins> I2c<SevenBitAddress> for BusHandle<P> {
    fn transaction(
        &mut self,
        address: SevenBitAddress,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        if operations.is_empty() {
            return Ok(());
        }

        let mut previous_read = None;
        for index in 0..operations.len() {
            let is_read = matches!(operations[index], Operation::Read(_));
            // Empty reads clock nothing, so they cannot carry the final NACK
            let more_reads_follow = operations[index + 1..]
                .iter()
                .take_while(|op| matches!(op, Operation::Read(_)))
                .any(|op| matches!(op, Operation::Read(buf) if !buf.is_empty()));

            if previous_read != Some(is_read) {
                if previous_read.is_none() {
                    self.start();
                } else {
                    self.restart();
                }
                self.write_byte(address_byte(address, is_read))?;
            }

            match &mut operations[index] {
                Operation::Write(data) => self.write_all(data)?,
                Operation::Read(buf) => {
                    // Adjacent reads form one stream: only its final byte is NACKed
                    let last = buf.len().saturating_sub(1);
                    for (i, slot) in buf.iter_mut().enumerate() {
                        *slot = self.read_byte(i != last || more_reads_follow);
                    }
                }
            }
            previous_read = Some(is_read);
        }

        self.stop();
        Ok(())
    }
}

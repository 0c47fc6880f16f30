//! Addressed register access
//!
//! The common device pattern: write the register address, then either keep
//! writing data or issue a repeated START and read. These helpers drive the
//! signal and byte primitives directly instead of building messages.

use heapless::Vec;
use softwire_hal::{BusPins, RegisterAccess, RegisterAddress};

use super::BusHandle;
use crate::error::BusError;
use crate::message::address_byte;

/// Lowest non-reserved 7-bit address
pub const FIRST_SCAN_ADDRESS: u8 = 0x08;

/// Highest non-reserved 7-bit address
pub const LAST_SCAN_ADDRESS: u8 = 0x77;

/// Number of addresses probed by [`BusHandle::scan`]
pub const SCAN_CAPACITY: usize = (LAST_SCAN_ADDRESS - FIRST_SCAN_ADDRESS + 1) as usize;

impl<P: BusPins> BusHandle<P> {
    /// Write `data` to register `reg` of device `address`
    ///
    /// Every byte's acknowledge replaces the previous one, so the result
    /// only reflects the last byte sent. An earlier timeout followed by a
    /// later acknowledge reads as success; see
    /// [`write_register_strict`](Self::write_register_strict).
    pub fn write_register(
        &mut self,
        address: u8,
        reg: impl Into<RegisterAddress>,
        data: &[u8],
    ) -> Result<(), BusError> {
        let reg = reg.into();
        let reg_bytes = reg.to_bytes();

        self.start();
        let mut status = self.write_byte(address_byte(address, false));
        for &byte in reg_bytes[..reg.byte_len()].iter().chain(data) {
            status = self.write_byte(byte);
        }
        self.stop();
        status
    }

    /// Read `buf.len()` bytes from register `reg` of device `address`
    ///
    /// Acknowledge timeouts are not reported; on a silent device `buf` holds
    /// whatever the released line read as. See
    /// [`read_register_checked`](Self::read_register_checked).
    pub fn read_register(&mut self, address: u8, reg: impl Into<RegisterAddress>, buf: &mut [u8]) {
        let reg = reg.into();
        let reg_bytes = reg.to_bytes();

        self.start();
        self.write_byte(address_byte(address, false)).ok();
        for &byte in &reg_bytes[..reg.byte_len()] {
            self.write_byte(byte).ok();
        }
        self.restart();
        self.write_byte(address_byte(address, true)).ok();
        self.read_into(buf);
        self.stop();
    }

    /// [`write_register`](Self::write_register) with an 8-bit register address
    pub fn write_register8(&mut self, address: u8, reg: u8, data: &[u8]) -> Result<(), BusError> {
        self.write_register(address, RegisterAddress::U8(reg), data)
    }

    /// [`write_register`](Self::write_register) with a 16-bit register address
    pub fn write_register16(&mut self, address: u8, reg: u16, data: &[u8]) -> Result<(), BusError> {
        self.write_register(address, RegisterAddress::U16(reg), data)
    }

    /// [`read_register`](Self::read_register) with an 8-bit register address
    pub fn read_register8(&mut self, address: u8, reg: u8, buf: &mut [u8]) {
        self.read_register(address, RegisterAddress::U8(reg), buf)
    }

    /// [`read_register`](Self::read_register) with a 16-bit register address
    pub fn read_register16(&mut self, address: u8, reg: u16, buf: &mut [u8]) {
        self.read_register(address, RegisterAddress::U16(reg), buf)
    }

    /// Write to a register, giving up at the first unacknowledged byte
    ///
    /// # Errors
    ///
    /// [`BusError::AckTimeout`] from the first byte the device did not
    /// acknowledge. Nothing after it is sent.
    pub fn write_register_strict(
        &mut self,
        address: u8,
        reg: impl Into<RegisterAddress>,
        data: &[u8],
    ) -> Result<(), BusError> {
        let reg = reg.into();
        let reg_bytes = reg.to_bytes();

        // A timeout has already STOPped the bus
        self.start();
        self.write_byte(address_byte(address, false))?;
        self.write_all(&reg_bytes[..reg.byte_len()])?;
        self.write_all(data)?;
        self.stop();
        Ok(())
    }

    /// Read from a register, reporting acknowledge timeouts
    ///
    /// # Errors
    ///
    /// [`BusError::AckTimeout`] if the device refuses its address or the
    /// register address; `buf` is left untouched.
    pub fn read_register_checked(
        &mut self,
        address: u8,
        reg: impl Into<RegisterAddress>,
        buf: &mut [u8],
    ) -> Result<(), BusError> {
        let reg = reg.into();
        let reg_bytes = reg.to_bytes();

        self.start();
        self.write_byte(address_byte(address, false))?;
        self.write_all(&reg_bytes[..reg.byte_len()])?;
        self.restart();
        self.write_byte(address_byte(address, true))?;
        self.read_into(buf);
        self.stop();
        Ok(())
    }

    /// Check whether a device acknowledges its write address
    pub fn probe(&mut self, address: u8) -> bool {
        self.start();
        let acked = self.write_byte(address_byte(address, false)).is_ok();
        if acked {
            self.stop();
        }
        acked
    }

    /// Probe every non-reserved address, returning those that answered
    pub fn scan(&mut self) -> Vec<u8, SCAN_CAPACITY> {
        let mut found = Vec::new();
        for address in FIRST_SCAN_ADDRESS..=LAST_SCAN_ADDRESS {
            if self.probe(address) {
                #[cfg(feature = "defmt")]
                defmt::debug!("device at {=u8:#x}", address);
                // One slot per probed address
                found.push(address).ok();
            }
        }
        found
    }
}

impl<P: BusPins> RegisterAccess for BusHandle<P> {
    type Error = BusError;

    fn write_register(
        &mut self,
        address: u8,
        reg: RegisterAddress,
        data: &[u8],
    ) -> Result<(), Self::Error> {
        self.write_register_strict(address, reg, data)
    }

    fn read_register(
        &mut self,
        address: u8,
        reg: RegisterAddress,
        buf: &mut [u8],
    ) -> Result<(), Self::Error> {
        self.read_register_checked(address, reg, buf)
    }

    fn probe(&mut self, address: u8) -> bool {
        BusHandle::probe(self, address)
    }
}

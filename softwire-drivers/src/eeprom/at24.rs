//! 24Cxx serial EEPROM
//!
//! The 24Cxx family stores bytes behind a register-style address:
//!
//! - Small parts (24C01–24C16) take a one-byte word address; parts above
//!   256 bytes put the upper address bits into the device address
//!   (A8–A10 replace A0–A2).
//! - Larger parts (24C32 and up) take a two-byte, big-endian word address.
//!
//! Writes are limited to one page at a time. After each page the device
//! goes deaf for its internal write cycle, which is detected by polling
//! for an acknowledge.

use softwire_hal::{RegisterAccess, RegisterAddress};

/// Base 7-bit address with A0–A2 tied low
pub const DEFAULT_ADDRESS: u8 = 0x50;

/// Word address width
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AddressWidth {
    /// One byte, upper bits carried in the device address
    OneByte,
    /// Two bytes, high byte first
    TwoByte,
}

/// EEPROM geometry and wiring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct At24Config {
    /// 7-bit device address
    pub address: u8,
    /// Total size in bytes
    pub capacity: u32,
    /// Page size in bytes
    pub page_size: u32,
    /// Word address width
    pub address_width: AddressWidth,
    /// Acknowledge polls allowed per write cycle
    pub write_cycle_polls: u32,
}

impl At24Config {
    /// 24C02: 256 bytes, 8-byte pages
    pub const AT24C02: Self = Self::new(256, 8, AddressWidth::OneByte);

    /// 24C04: 512 bytes, 16-byte pages
    pub const AT24C04: Self = Self::new(512, 16, AddressWidth::OneByte);

    /// 24C32: 4 KiB, 32-byte pages
    pub const AT24C32: Self = Self::new(4096, 32, AddressWidth::TwoByte);

    /// 24C256: 32 KiB, 64-byte pages
    pub const AT24C256: Self = Self::new(32768, 64, AddressWidth::TwoByte);

    /// Geometry at the default address
    pub const fn new(capacity: u32, page_size: u32, address_width: AddressWidth) -> Self {
        Self {
            address: DEFAULT_ADDRESS,
            capacity,
            page_size,
            address_width,
            write_cycle_polls: 100,
        }
    }

    /// Same geometry at another device address
    pub const fn at_address(mut self, address: u8) -> Self {
        self.address = address;
        self
    }
}

/// EEPROM operation error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EepromError<E> {
    /// Bus failure
    Bus(E),
    /// Access extends past the end of the memory
    OutOfRange,
    /// Device still busy after the allowed write-cycle polls
    WriteCycleTimeout,
    /// Zero capacity or page size
    InvalidConfig,
}

/// 24Cxx EEPROM driver
pub struct At24<B> {
    bus: B,
    config: At24Config,
}

impl<B: RegisterAccess> At24<B> {
    /// Create a driver
    ///
    /// # Errors
    ///
    /// [`EepromError::InvalidConfig`] if the capacity or page size is zero.
    pub fn new(bus: B, config: At24Config) -> Result<Self, EepromError<B::Error>> {
        if config.capacity == 0 || config.page_size == 0 {
            return Err(EepromError::InvalidConfig);
        }
        Ok(Self { bus, config })
    }

    /// Device geometry
    pub fn config(&self) -> &At24Config {
        &self.config
    }

    /// Check whether the device acknowledges
    pub fn is_present(&mut self) -> bool {
        self.bus.probe(self.config.address)
    }

    /// Read `buf.len()` bytes starting at `offset`
    pub fn read(&mut self, offset: u32, buf: &mut [u8]) -> Result<(), EepromError<B::Error>> {
        self.check_range(offset, buf.len())?;

        // One-byte parts can only address 256 bytes per transaction
        let chunk = match self.config.address_width {
            AddressWidth::OneByte => 256,
            AddressWidth::TwoByte => self.config.capacity,
        };

        let mut offset = offset;
        let mut remaining = buf;
        while !remaining.is_empty() {
            let len = span(offset, chunk, remaining.len());
            let (head, tail) = core::mem::take(&mut remaining).split_at_mut(len);
            let (device, reg) = self.locate(offset);
            self.bus
                .read_register(device, reg, head)
                .map_err(EepromError::Bus)?;
            offset += len as u32;
            remaining = tail;
        }
        Ok(())
    }

    /// Write `data` starting at `offset`, one page per write cycle
    pub fn write(&mut self, offset: u32, data: &[u8]) -> Result<(), EepromError<B::Error>> {
        self.check_range(offset, data.len())?;

        let mut offset = offset;
        let mut remaining = data;
        while !remaining.is_empty() {
            let len = span(offset, self.config.page_size, remaining.len());
            let (page, tail) = remaining.split_at(len);
            let (device, reg) = self.locate(offset);
            self.bus
                .write_register(device, reg, page)
                .map_err(EepromError::Bus)?;
            self.wait_write_cycle(device)?;
            offset += len as u32;
            remaining = tail;
        }
        Ok(())
    }

    /// Give the bus back
    pub fn release(self) -> B {
        self.bus
    }

    fn check_range(&self, offset: u32, len: usize) -> Result<(), EepromError<B::Error>> {
        let end = u64::from(offset) + len as u64;
        if end > u64::from(self.config.capacity) {
            return Err(EepromError::OutOfRange);
        }
        Ok(())
    }

    /// Device address and word address of a memory offset
    fn locate(&self, offset: u32) -> (u8, RegisterAddress) {
        match self.config.address_width {
            AddressWidth::OneByte => {
                let block = ((offset >> 8) & 0x07) as u8;
                (self.config.address | block, RegisterAddress::U8(offset as u8))
            }
            AddressWidth::TwoByte => (self.config.address, RegisterAddress::U16(offset as u16)),
        }
    }

    fn wait_write_cycle(&mut self, device: u8) -> Result<(), EepromError<B::Error>> {
        for _ in 0..self.config.write_cycle_polls {
            if self.bus.probe(device) {
                return Ok(());
            }
        }
        #[cfg(feature = "defmt")]
        defmt::warn!("eeprom {=u8:#x} busy after write", device);
        Err(EepromError::WriteCycleTimeout)
    }
}

/// Bytes from `offset` up to the next multiple of `boundary`, capped at `len`
fn span(offset: u32, boundary: u32, len: usize) -> usize {
    let to_boundary = (boundary - offset % boundary) as usize;
    to_boundary.min(len)
}

//! I2C register access
//!
//! Most I2C peripherals expose a register file: the master writes a register
//! address, then either keeps writing data or issues a repeated start and
//! reads. Drivers are written against [`RegisterAccess`] so they can be
//! tested on the host without a bus.

/// Register address sent after the device address byte
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RegisterAddress {
    /// One-byte register address
    U8(u8),
    /// Two-byte register address, sent high byte first
    U16(u16),
}

impl RegisterAddress {
    /// Wire bytes of the address, most significant first
    ///
    /// Only the first [`byte_len`](Self::byte_len) bytes are meaningful.
    pub fn to_bytes(self) -> [u8; 2] {
        match self {
            RegisterAddress::U8(reg) => [reg, 0],
            RegisterAddress::U16(reg) => reg.to_be_bytes(),
        }
    }

    /// Number of address bytes on the wire
    pub fn byte_len(self) -> usize {
        match self {
            RegisterAddress::U8(_) => 1,
            RegisterAddress::U16(_) => 2,
        }
    }
}

impl From<u8> for RegisterAddress {
    fn from(reg: u8) -> Self {
        RegisterAddress::U8(reg)
    }
}

impl From<u16> for RegisterAddress {
    fn from(reg: u16) -> Self {
        RegisterAddress::U16(reg)
    }
}

/// Register-oriented I2C master
///
/// Implementations report the first failure of a transaction and leave the
/// bus idle afterwards.
pub trait RegisterAccess {
    /// Error type for bus operations
    type Error;

    /// Write `data` starting at register `reg` of device `address`
    ///
    /// # Arguments
    /// * `address` - 7-bit I2C address
    /// * `reg` - Register address
    /// * `data` - Bytes to write
    fn write_register(
        &mut self,
        address: u8,
        reg: RegisterAddress,
        data: &[u8],
    ) -> Result<(), Self::Error>;

    /// Read `buf.len()` bytes starting at register `reg` of device `address`
    ///
    /// # Arguments
    /// * `address` - 7-bit I2C address
    /// * `reg` - Register address
    /// * `buf` - Buffer to read into
    fn read_register(
        &mut self,
        address: u8,
        reg: RegisterAddress,
        buf: &mut [u8],
    ) -> Result<(), Self::Error>;

    /// Check whether a device acknowledges `address`
    fn probe(&mut self, address: u8) -> bool;
}

impl<T: RegisterAccess + ?Sized> RegisterAccess for &mut T {
    type Error = T::Error;

    fn write_register(
        &mut self,
        address: u8,
        reg: RegisterAddress,
        data: &[u8],
    ) -> Result<(), Self::Error> {
        (**self).write_register(address, reg, data)
    }

    fn read_register(
        &mut self,
        address: u8,
        reg: RegisterAddress,
        buf: &mut [u8],
    ) -> Result<(), Self::Error> {
        (**self).read_register(address, reg, buf)
    }

    fn probe(&mut self, address: u8) -> bool {
        (**self).probe(address)
    }
}

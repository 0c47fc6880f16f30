//! Transfer messages
//!
//! A [`Message`] is one leg of a transaction: an address phase followed by
//! a payload travelling in one direction.

/// Payload of one message; the variant is the transfer direction
#[derive(Debug, PartialEq, Eq)]
pub enum Payload<'a> {
    /// Bytes sent to the target
    Write(&'a [u8]),
    /// Buffer filled from the target
    Read(&'a mut [u8]),
}

/// One leg of a multi-leg transfer
#[derive(Debug, PartialEq, Eq)]
pub struct Message<'a> {
    /// 7-bit target address
    pub address: u8,
    /// Continue the previous leg without a START and address phase
    pub no_start: bool,
    /// Direction and data
    pub payload: Payload<'a>,
}

impl<'a> Message<'a> {
    /// Message writing `data` to `address`
    pub fn write(address: u8, data: &'a [u8]) -> Self {
        Self {
            address,
            no_start: false,
            payload: Payload::Write(data),
        }
    }

    /// Message reading `buf.len()` bytes from `address`
    pub fn read(address: u8, buf: &'a mut [u8]) -> Self {
        Self {
            address,
            no_start: false,
            payload: Payload::Read(buf),
        }
    }

    /// Skip the START and address phase for this leg
    pub fn without_start(mut self) -> Self {
        self.no_start = true;
        self
    }

    /// Whether this leg reads from the target
    pub fn is_read(&self) -> bool {
        matches!(self.payload, Payload::Read(_))
    }

    /// Address byte on the wire, R/W bit taken from the direction
    pub fn address_byte(&self) -> u8 {
        address_byte(self.address, self.is_read())
    }
}

/// Wire form of a 7-bit address: bit 0 is 1 for reads, 0 for writes
pub(crate) fn address_byte(address: u8, read: bool) -> u8 {
    ((address & 0x7F) << 1) | u8::from(read)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_byte_direction() {
        let data = [0u8; 2];
        let mut buf = [0u8; 2];

        assert_eq!(Message::write(0x50, &data).address_byte(), 0xA0);
        assert_eq!(Message::read(0x50, &mut buf).address_byte(), 0xA1);
    }

    #[test]
    fn test_address_byte_ignores_high_bit() {
        // Only the low 7 bits are an address; direction always wins bit 0
        assert_eq!(address_byte(0xD0, false), 0xA0);
        assert_eq!(address_byte(0xFF, true), 0xFF);
        assert_eq!(address_byte(0xFF, false), 0xFE);
    }

    #[test]
    fn test_without_start() {
        let data = [1u8];
        let msg = Message::write(0x10, &data);
        assert!(!msg.no_start);
        assert!(!msg.is_read());

        let msg = msg.without_start();
        assert!(msg.no_start);
    }
}

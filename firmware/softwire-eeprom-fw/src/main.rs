//! Softwire EEPROM demo firmware
//!
//! Runs a bit-banged I2C bus on two ordinary GPIOs of an STM32F042K6,
//! registers it by name, scans it, and keeps a boot counter in a 24C02
//! EEPROM at address 0x50.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_stm32::gpio::{Flex, Level, Output, Speed};
use embassy_time::{Duration, Timer};
use softwire_core::{BusConfig, BusHandle, Registry};
use softwire_drivers::eeprom::{At24, At24Config, EepromError};
use softwire_hal_stm32f0::{parse_pin_string, Stm32Pins};
use {defmt_rtt as _, panic_probe as _};

/// Name the bus is registered under
const BUS_NAME: &str = "i2c0";

/// Board wiring, as printed on the silkscreen
///
/// Must name the peripherals handed to `Output::new`/`Flex::new` in `main`
/// (`p.PB6`, `p.PB7`); embassy pins are typed, so the string only labels them.
const SCL_PIN: &str = "PB6";
const SDA_PIN: &str = "PB7";

/// Standard mode
const BUS_FREQUENCY_HZ: u32 = 100_000;

/// EEPROM offset of the boot counter
const BOOT_COUNTER_OFFSET: u32 = 0x00;

/// Rescan interval
const SCAN_INTERVAL_MS: u64 = 5000;

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Softwire EEPROM demo starting...");

    let p = embassy_stm32::init(Default::default());

    if let (Some(scl), Some(sda)) = (parse_pin_string(SCL_PIN), parse_pin_string(SDA_PIN)) {
        info!("{}: SCL={} SDA={}", BUS_NAME, scl, sda);
    }

    // SCL push-pull, SDA switches direction for acknowledge and read phases
    let scl = Output::new(p.PB6, Level::High, Speed::High);
    let sda = Flex::new(p.PB7);
    let pins = softwire_hal_stm32f0::bus_pins(scl, sda);

    let config = unwrap!(BusConfig::from_frequency(BUS_FREQUENCY_HZ).with_name(BUS_NAME));
    let mut registry: Registry<Stm32Pins<'static>, 1> = Registry::new();
    if let Err(e) = registry.register(BusHandle::new(pins, config)) {
        error!("Failed to register bus: {:?}", e);
        return;
    }

    let Some(bus) = registry.find(BUS_NAME) else {
        error!("Bus {} not registered", BUS_NAME);
        return;
    };

    let found = bus.scan();
    info!("Found {} device(s): {=[u8]:#x}", found.len(), found.as_slice());

    match At24::new(&mut *bus, At24Config::AT24C02) {
        Ok(mut eeprom) => {
            if !eeprom.is_present() {
                warn!("No EEPROM at {=u8:#x}", eeprom.config().address);
            } else {
                match bump_boot_counter(&mut eeprom) {
                    Ok(count) => info!("Boot count: {}", count),
                    Err(e) => warn!("EEPROM access failed: {:?}", e),
                }
            }
        }
        Err(e) => warn!("EEPROM config rejected: {:?}", e),
    }

    loop {
        Timer::after(Duration::from_millis(SCAN_INTERVAL_MS)).await;
        let found = bus.scan();
        debug!("Scan: {=[u8]:#x}", found.as_slice());
    }
}

/// Read, increment and store the 32-bit boot counter
fn bump_boot_counter<B: softwire_hal::RegisterAccess>(
    eeprom: &mut At24<B>,
) -> Result<u32, EepromError<B::Error>> {
    let mut raw = [0u8; 4];
    eeprom.read(BOOT_COUNTER_OFFSET, &mut raw)?;

    // Erased cells read as 0xFF
    let count = match u32::from_le_bytes(raw) {
        u32::MAX => 1,
        n => n.wrapping_add(1),
    };
    eeprom.write(BOOT_COUNTER_OFFSET, &count.to_le_bytes())?;
    Ok(count)
}

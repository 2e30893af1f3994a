//! Register bus transport for the LSM6DSOX
//!
//! This module implements the `device-driver` register interface on top of an
//! `embedded-hal` SPI device configured for 16-bit words. Every register
//! access is a single full-duplex word exchange:
//!
//! - read: transmit `address | READ_BIT`, the low byte of the reply is the
//!   register value
//! - write: transmit `address | data`, the reply is discarded
//!
//! There is no pipelining and no burst mode.

use crate::READ_BIT;
use device_driver::RegisterInterface;

/// SPI interface for the LSM6DSOX
///
/// # Note on Chip Select
///
/// This interface uses the `SpiDevice` trait from `embedded-hal`, which manages
/// the chip select (CS) pin automatically. The SPI device must be set up for
/// 16-bit frames, mode 0.
///
/// If using `embedded-hal-bus`, you would typically create an `SpiDevice` like:
/// ```ignore
/// let spi_device = embedded_hal_bus::spi::ExclusiveDevice::new(spi_bus, cs_pin, delay);
/// let interface = SpiInterface::new(spi_device);
/// ```
pub struct SpiInterface<SPI> {
    spi: SPI,
}

impl<SPI> SpiInterface<SPI> {
    /// Create a new SPI interface with the given SPI device
    pub const fn new(spi: SPI) -> Self {
        Self { spi }
    }

    /// Consume the interface and return the SPI device
    pub fn release(self) -> SPI {
        self.spi
    }
}

impl<SPI, E> SpiInterface<SPI>
where
    SPI: embedded_hal::spi::SpiDevice<u16, Error = E>,
{
    /// Perform one blocking word exchange and return the received word
    ///
    /// # Errors
    ///
    /// Returns the SPI error if the transfer fails. The caller has no retry
    /// policy for this.
    pub fn exchange(&mut self, tx: u16) -> Result<u16, E> {
        let mut word = [tx];
        match self.spi.transfer_in_place(&mut word) {
            Ok(()) => Ok(word[0]),
            Err(e) => {
                #[cfg(feature = "defmt")]
                defmt::error!("SPI transfer failed, transmitted: {=u16:#x}", tx);
                Err(e)
            }
        }
    }
}

/// Word offset between consecutive registers
const REGISTER_STRIDE: u16 = 0x0100;

impl<SPI, E> RegisterInterface for SpiInterface<SPI>
where
    SPI: embedded_hal::spi::SpiDevice<u16, Error = E>,
{
    type Error = E;
    type AddressType = u16;

    fn read_register(
        &mut self,
        address: Self::AddressType,
        size_bits: u32,
        read_data: &mut [u8],
    ) -> Result<(), Self::Error> {
        let _ = size_bits; // Size is implicit in read_data.len()
        let mut register = address;
        for byte in read_data.iter_mut() {
            let rx = self.exchange(register | READ_BIT)?;
            *byte = rx.to_le_bytes()[0];
            register = register.wrapping_add(REGISTER_STRIDE);
        }
        Ok(())
    }

    fn write_register(
        &mut self,
        address: Self::AddressType,
        size_bits: u32,
        write_data: &[u8],
    ) -> Result<(), Self::Error> {
        let _ = size_bits; // Size is implicit in write_data.len()
        let mut register = address & !READ_BIT;
        for &byte in write_data {
            self.exchange(register | u16::from(byte))?;
            register = register.wrapping_add(REGISTER_STRIDE);
        }
        Ok(())
    }
}

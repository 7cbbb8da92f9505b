//! Blocking I2C driver for TMP100.

use crate::data_types::{Config, Resolution, Temperature};
use crate::error::Error;
use crate::registers::{ConfigBits, DEFAULT_I2C_ADDRESS, MAX_I2C_ADDRESS, Register, raw_from_wire, raw_to_e4};

/// TMP100 driver.
///
/// `I2C` may be an owned bus or `&mut` to one; in the latter case the bus must
/// outlive the driver, which the borrow enforces. No internal locking: share a
/// driver across contexts only behind external mutual exclusion.
pub struct Tmp100<I2C> {
    i2c: I2C,
    address: u8,
    resolution: Resolution,
    configured: bool,
}

impl<I2C> Tmp100<I2C> {
    /// Create a new driver instance with the default I2C address (0x48).
    pub fn new(i2c: I2C) -> Self {
        Self {
            i2c,
            address: DEFAULT_I2C_ADDRESS,
            resolution: Resolution::default(),
            configured: false,
        }
    }

    /// Create a new driver instance with a custom 7-bit I2C address.
    /// Returns `None` for addresses above 0x7F.
    pub fn with_address(i2c: I2C, address: u8) -> Option<Self> {
        if address > MAX_I2C_ADDRESS {
            return None;
        }
        Some(Self {
            address,
            ..Self::new(i2c)
        })
    }

    /// Return the 7-bit I2C address configured for this instance.
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Resolution used for conversion: the last one written successfully, or 12-bit.
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    /// Whether the configuration register has been written by this instance.
    pub fn is_configured(&self) -> bool {
        self.configured
    }

    /// Give the bus back.
    pub fn free(self) -> I2C {
        self.i2c
    }
}

impl<I2C> Tmp100<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    /// Configure resolution with the default fault queue, shutdown disabled,
    /// comparator mode and active-low ALERT.
    pub fn init(&mut self, resolution: Resolution) -> Result<(), Error<I2C::Error>> {
        self.configure(Config::new(resolution))
    }

    /// Write the configuration register.
    pub fn configure(&mut self, config: Config) -> Result<(), Error<I2C::Error>> {
        self.write_register(Register::Config, config.to_bits().bits())
    }

    /// Read back and decode the configuration register.
    pub fn read_config(&mut self) -> Result<Config, Error<I2C::Error>> {
        let val = self.read_register_u8(Register::Config)?;
        Ok(Config::from_bits(ConfigBits::from_bits_truncate(val)))
    }

    /// Write a single byte to a register.
    ///
    /// A write to [`Register::Config`] also switches the conversion resolution, but
    /// only once the write has been acknowledged.
    pub fn write_register(&mut self, reg: Register, value: u8) -> Result<(), Error<I2C::Error>> {
        self.i2c
            .write(self.address, &[reg.addr(), value])
            .map_err(Error::I2c)?;
        if reg == Register::Config {
            self.resolution = Resolution::from_config_bits(ConfigBits::from_bits_truncate(value));
            self.configured = true;
        }
        Ok(())
    }

    /// Read a single-byte register.
    pub fn read_register_u8(&mut self, reg: Register) -> Result<u8, Error<I2C::Error>> {
        let mut buf = [0u8; 1];
        self.i2c
            .write_read(self.address, &[reg.addr()], &mut buf)
            .map_err(Error::I2c)?;
        Ok(buf[0])
    }

    /// Read a two-byte register, MSB first on the wire.
    pub fn read_register(&mut self, reg: Register) -> Result<u16, Error<I2C::Error>> {
        let mut buf = [0u8; 2];
        self.i2c
            .write_read(self.address, &[reg.addr()], &mut buf)
            .map_err(Error::I2c)?;
        Ok(raw_from_wire(buf))
    }

    /// Raw left-justified temperature register value.
    pub fn read_raw_temperature(&mut self) -> Result<u16, Error<I2C::Error>> {
        self.read_register(Register::Temperature)
    }

    /// Read and convert the temperature at the current resolution.
    pub fn read_temperature(&mut self) -> Result<Temperature, Error<I2C::Error>> {
        let raw = self.read_raw_temperature()?;
        Ok(Temperature::from_e4(raw_to_e4(raw, self.resolution)))
    }

    /// Like [`Self::read_temperature`], but a bus error yields
    /// [`Temperature::SENTINEL`] instead of an error.
    pub fn read_temperature_or_sentinel(&mut self) -> Temperature {
        self.read_temperature().unwrap_or(Temperature::SENTINEL)
    }
}

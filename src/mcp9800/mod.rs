//! MCP9800/1/2/3 2-wire high-accuracy temperature sensor.
//!
//! - Resolution: 0.5 to 0.0625°C (9 to 12 bit ADC)
//! - Address(7bit): 0x48 to 0x4F, selected by the A2..A0 pins
//!
//! Temperatures are exchanged as °C*10000 so the full resolution survives
//! without floating point. The `*_celsius` methods wrap them as `f32`.

use embedded_hal_1::i2c::I2c;

mod config;
pub mod temperature;

pub use config::*;

/// Address with A2..A0 tied low.
pub const BASE_ADDRESS: u8 = 0x48;

const ADDRESS_PINS_MSK: u8 = 0x07;
const CONFIG_REGISTER: u8 = 0x01;

/// Temperature registers.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Register {
    /// Live measurement, read-only
    Ambient = 0x00,
    Hysteresis = 0x02,
    LimitSet = 0x03,
}

impl Register {
    pub fn is_writable(&self) -> bool {
        !matches!(self, Register::Ambient)
    }
}

/// MCP9800 errors
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// No bus bound yet (forgot to call `Mcp9800::init`)
    Unbound,
    /// I²C bus error
    I2c(E),
}

/// MCP9800 device handle.
///
/// Starts out unbound; `init` attaches the bus. Pass `&mut bus` to keep the
/// bus owned by the caller.
#[derive(Debug)]
pub struct Mcp9800<I2C> {
    i2c: Option<I2C>,
    address: u8,
}

impl<I2C> Default for Mcp9800<I2C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I2C> Mcp9800<I2C> {
    /// Create an unbound device handle.
    pub fn new() -> Self {
        Mcp9800 {
            i2c: None,
            address: BASE_ADDRESS,
        }
    }

    /// Bind the bus, given the level of the A2..A0 pins (0-7). No I/O is done.
    pub fn init(&mut self, i2c: I2C, a2_a0: u8) {
        self.address = BASE_ADDRESS | (a2_a0 & ADDRESS_PINS_MSK);
        self.i2c = Some(i2c);

        #[cfg(feature = "defmt")]
        defmt::debug!("mcp9800 bound at {=u8:#x}", self.address);
    }

    /// 7-bit bus address, if bound.
    pub fn address(&self) -> Option<u8> {
        self.i2c.as_ref().map(|_| self.address)
    }

    pub fn is_bound(&self) -> bool {
        self.i2c.is_some()
    }

    pub fn release(self) -> Option<I2C> {
        self.i2c
    }
}

impl<I2C> Mcp9800<I2C>
where
    I2C: I2c,
{
    /// Read one of the temperature registers, in °C*10000.
    pub fn read_temp(&mut self, register: Register) -> Result<i32, Error<I2C::Error>> {
        let mut data = [0u8; 2];
        self.read_register(register as u8, &mut data)?;
        Ok(temperature::decode(data))
    }

    pub fn read_temp_celsius(&mut self, register: Register) -> Result<f32, Error<I2C::Error>> {
        self.read_temp(register).map(temperature::to_celsius)
    }

    /// Read one of the temperature registers, in °F*10.
    pub fn read_temp_fahrenheit_x10(&mut self, register: Register) -> Result<i32, Error<I2C::Error>> {
        self.read_temp(register).map(temperature::to_fahrenheit_x10)
    }

    /// Write the Hysteresis or Limit-Set register, `value` in °C*10000.
    ///
    /// The registers hold half degrees, anything finer is dropped. Writes to
    /// the read-only Ambient register are ignored and return `Ok`.
    pub fn write_temp(&mut self, register: Register, value: i32) -> Result<(), Error<I2C::Error>> {
        let i2c = self.i2c.as_mut().ok_or(Error::Unbound)?;
        if !register.is_writable() {
            return Ok(());
        }
        let [msb, lsb] = temperature::encode(value);

        #[cfg(feature = "defmt")]
        defmt::trace!("mcp9800 write {}: {:02x} {:02x}", register, msb, lsb);

        i2c.write(self.address, &[register as u8, msb, lsb]).map_err(Error::I2c)
    }

    pub fn write_temp_celsius(&mut self, register: Register, celsius: f32) -> Result<(), Error<I2C::Error>> {
        self.write_temp(register, temperature::from_celsius(celsius))
    }

    pub fn read_config(&mut self) -> Result<Config, Error<I2C::Error>> {
        self.read_config_raw().map(Config::from_bits)
    }

    pub fn read_config_raw(&mut self) -> Result<u8, Error<I2C::Error>> {
        let mut data = [0u8; 1];
        self.read_register(CONFIG_REGISTER, &mut data)?;
        Ok(data[0])
    }

    /// Write the configuration register, see the `ONE_SHOT`, `ADC_RES_*`, ...
    /// masks or build the byte from a [`Config`].
    pub fn write_config(&mut self, value: u8) -> Result<(), Error<I2C::Error>> {
        let i2c = self.i2c.as_mut().ok_or(Error::Unbound)?;

        #[cfg(feature = "defmt")]
        defmt::trace!("mcp9800 write config: {:02x}", value);

        i2c.write(self.address, &[CONFIG_REGISTER, value]).map_err(Error::I2c)
    }

    // pointer write, then a separate read
    fn read_register(&mut self, register: u8, data: &mut [u8]) -> Result<(), Error<I2C::Error>> {
        let i2c = self.i2c.as_mut().ok_or(Error::Unbound)?;
        i2c.write(self.address, &[register]).map_err(Error::I2c)?;
        i2c.read(self.address, data).map_err(Error::I2c)?;

        #[cfg(feature = "defmt")]
        defmt::trace!("mcp9800 read {=u8:#x}: {=[u8]:02x}", register, &data[..]);

        Ok(())
    }
}

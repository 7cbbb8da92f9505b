//! TMP100 Rust Driver
//!
//! Blocking, `no_std` driver for the Texas Instruments TMP100 digital temperature
//! sensor on top of the `embedded-hal` 1.0 I2C traits.
//!
//! The driver holds the bus handle it is given. Pass `&mut bus` to keep the bus
//! owned elsewhere; the borrow then guarantees the bus outlives the driver.
//!
//! ```ignore
//! use tmp100_rs::{Resolution, Tmp100};
//!
//! let mut sensor = Tmp100::new(&mut i2c);
//! sensor.init(Resolution::Bits12)?;
//! let t = sensor.read_temperature()?;
//! // t.as_e4() is in 1e-4 °C, t.celsius() in °C
//! ```

#![no_std]

pub mod data_types;
pub mod driver;
pub mod error;
pub mod registers;

pub use data_types::{Config, FaultQueue, Resolution, Temperature};
pub use driver::Tmp100;
pub use error::Error;
pub use registers::{DEFAULT_I2C_ADDRESS, Register};

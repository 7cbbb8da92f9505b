//! Register map and constants for TMP100.
//! Pointer values and bit positions follow the TMP100 datasheet (SBOS231).

use crate::data_types::Resolution;

/// Default I2C address (ADD1 = ADD0 = 0).
pub const DEFAULT_I2C_ADDRESS: u8 = 0x48;
/// Highest valid 7-bit I2C address.
pub const MAX_I2C_ADDRESS: u8 = 0x7F;

/// Pointer register values.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u8)]
pub enum Register {
    /// Temperature result, read-only, 2 bytes, left-justified two's complement.
    Temperature = 0x00,
    /// Configuration, read-write, 1 byte.
    Config = 0x01,
    /// Low threshold (thermostat), 2 bytes.
    TLow = 0x02,
    /// High threshold (thermostat), 2 bytes.
    THigh = 0x03,
}

impl Register {
    /// Pointer byte sent on the wire.
    pub const fn addr(self) -> u8 {
        self as u8
    }
}

bitflags::bitflags! {
    /// Configuration register bits (0x01).
    #[derive(Clone, Copy, Debug, Eq, PartialEq)]
    pub struct ConfigBits: u8 {
        /// Bit 0: Shutdown mode.
        const SD  = 1 << 0;
        /// Bit 1: Thermostat mode (0 = comparator, 1 = interrupt).
        const TM  = 1 << 1;
        /// Bit 2: ALERT polarity (0 = active low, 1 = active high).
        const POL = 1 << 2;
        /// Bits 3-4: Fault queue depth.
        const F0  = 1 << 3;
        const F1  = 1 << 4;
        /// Bits 5-6: Converter resolution.
        const R0  = 1 << 5;
        const R1  = 1 << 6;
        /// Bit 7: One-shot / ALERT.
        const OS  = 1 << 7;
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for ConfigBits {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "ConfigBits({=u8:#x})", self.bits())
    }
}

/// Mask covering the resolution field (R1:R0).
pub const RESOLUTION_MASK: ConfigBits = ConfigBits::R0.union(ConfigBits::R1);
/// Mask covering the fault queue field (F1:F0).
pub const FAULT_QUEUE_MASK: ConfigBits = ConfigBits::F0.union(ConfigBits::F1);

/// Assemble a 16-bit register value from wire order (MSB first).
///
/// The sensor always sends the high byte first; host byte order plays no part.
pub fn raw_from_wire(bytes: [u8; 2]) -> u16 {
    u16::from_be_bytes(bytes)
}

/// Sign-extend a right-justified code of `resolution` significant bits to `i16`.
/// Bits above the significant range are ignored.
pub fn sign_extend(code: u16, resolution: Resolution) -> i16 {
    let bits = resolution.significant_bits();
    let high = !((1u16 << bits) - 1);
    let code = code & !high;
    if code & (1 << (bits - 1)) != 0 {
        (code | high) as i16
    } else {
        code as i16
    }
}

/// Drop the insignificant low bits of a left-justified raw reading and sign-extend.
pub fn right_justify(raw: u16, resolution: Resolution) -> i16 {
    sign_extend(raw >> resolution.shift(), resolution)
}

/// Convert a left-justified raw reading to ten-thousandths of a degree Celsius.
pub fn raw_to_e4(raw: u16, resolution: Resolution) -> i32 {
    i32::from(right_justify(raw, resolution)) * i32::from(resolution.step_e4())
}

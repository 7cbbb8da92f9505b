//! Data types for TMP100 driver (based on datasheet).

use crate::registers::{ConfigBits, FAULT_QUEUE_MASK, RESOLUTION_MASK};

/// Converter resolution (R1:R0).
///
/// The power-on value of the part is 9 bits, but readings are left-justified, so
/// interpreting any reading at 12 bits is still exact. That makes `Bits12` the
/// safe assumption before the configuration register is written.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Resolution {
    /// 0.5 °C
    Bits9,
    /// 0.25 °C
    Bits10,
    /// 0.125 °C
    Bits11,
    /// 0.0625 °C
    #[default]
    Bits12,
}

impl Resolution {
    pub const ALL: [Resolution; 4] = [
        Resolution::Bits9,
        Resolution::Bits10,
        Resolution::Bits11,
        Resolution::Bits12,
    ];

    /// R1:R0 bits as they sit in the configuration register.
    pub fn config_bits(self) -> ConfigBits {
        match self {
            Resolution::Bits9 => ConfigBits::empty(),
            Resolution::Bits10 => ConfigBits::R0,
            Resolution::Bits11 => ConfigBits::R1,
            Resolution::Bits12 => ConfigBits::R0 | ConfigBits::R1,
        }
    }

    /// Decode R1:R0 from a configuration register value; other bits are ignored.
    pub fn from_config_bits(bits: ConfigBits) -> Self {
        let r = bits & RESOLUTION_MASK;
        if r == ConfigBits::R0 | ConfigBits::R1 {
            Resolution::Bits12
        } else if r == ConfigBits::R1 {
            Resolution::Bits11
        } else if r == ConfigBits::R0 {
            Resolution::Bits10
        } else {
            Resolution::Bits9
        }
    }

    pub fn significant_bits(self) -> u8 {
        match self {
            Resolution::Bits9 => 9,
            Resolution::Bits10 => 10,
            Resolution::Bits11 => 11,
            Resolution::Bits12 => 12,
        }
    }

    /// Number of always-zero low bits in the 16-bit temperature register.
    pub fn shift(self) -> u8 {
        16 - self.significant_bits()
    }

    /// Step size in 1e-4 °C.
    pub fn step_e4(self) -> u16 {
        match self {
            Resolution::Bits9 => 5000,
            Resolution::Bits10 => 2500,
            Resolution::Bits11 => 1250,
            Resolution::Bits12 => 625,
        }
    }

    /// Step size in °C.
    pub fn step_celsius(self) -> f32 {
        match self {
            Resolution::Bits9 => 0.5,
            Resolution::Bits10 => 0.25,
            Resolution::Bits11 => 0.125,
            Resolution::Bits12 => 0.0625,
        }
    }
}

/// Consecutive out-of-limit conversions before ALERT asserts (F1:F0).
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FaultQueue {
    One,
    Two,
    Four,
    Six,
}

impl FaultQueue {
    pub fn config_bits(self) -> ConfigBits {
        match self {
            FaultQueue::One => ConfigBits::empty(),
            FaultQueue::Two => ConfigBits::F0,
            FaultQueue::Four => ConfigBits::F1,
            FaultQueue::Six => ConfigBits::F0 | ConfigBits::F1,
        }
    }

    pub fn from_config_bits(bits: ConfigBits) -> Self {
        let f = bits & FAULT_QUEUE_MASK;
        if f == ConfigBits::F0 | ConfigBits::F1 {
            FaultQueue::Six
        } else if f == ConfigBits::F1 {
            FaultQueue::Four
        } else if f == ConfigBits::F0 {
            FaultQueue::Two
        } else {
            FaultQueue::One
        }
    }
}

/// Fault queue depth written by [`Config::new`].
pub const DEFAULT_FAULT_QUEUE: FaultQueue = FaultQueue::One;

/// Configuration register contents managed by the driver.
///
/// Shutdown is always disabled, the thermostat stays in comparator mode and
/// ALERT is active low.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Config {
    pub resolution: Resolution,
    pub fault_queue: FaultQueue,
}

impl Config {
    pub const fn new(resolution: Resolution) -> Self {
        Self {
            resolution,
            fault_queue: DEFAULT_FAULT_QUEUE,
        }
    }

    pub fn to_bits(self) -> ConfigBits {
        self.resolution.config_bits() | self.fault_queue.config_bits()
    }

    /// Decode resolution and fault queue; mode/polarity/shutdown bits are dropped.
    pub fn from_bits(bits: ConfigBits) -> Self {
        Self {
            resolution: Resolution::from_config_bits(bits),
            fault_queue: FaultQueue::from_config_bits(bits),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(Resolution::default())
    }
}

/// Temperature in fixed point, 1e-4 °C per LSB.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd)]
pub struct Temperature(i32);

impl Temperature {
    /// Reported in place of a reading when the bus transaction failed.
    /// Far outside the sensor's -55..=125 °C range.
    pub const SENTINEL: Temperature = Temperature(i32::MAX);

    pub const fn from_e4(e4: i32) -> Self {
        Self(e4)
    }

    /// Value in 1e-4 °C.
    pub const fn as_e4(self) -> i32 {
        self.0
    }

    /// Value in m°C, truncated toward zero.
    pub const fn milli_celsius(self) -> i32 {
        self.0 / 10
    }

    /// Value in 0.1 °C, truncated toward zero.
    pub const fn deci_celsius(self) -> i32 {
        self.0 / 1000
    }

    pub fn celsius(self) -> f32 {
        self.0 as f32 / 10_000.0
    }

    pub const fn is_sentinel(self) -> bool {
        self.0 == i32::MAX
    }
}

impl core::fmt::Display for Temperature {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if self.is_sentinel() {
            return write!(f, "invalid");
        }
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{}{}.{:04} °C", sign, abs / 10_000, abs % 10_000)
    }
}

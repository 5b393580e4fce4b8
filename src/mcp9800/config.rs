//! Configuration register fields.

/// One-shot conversion, only honored while in shutdown.
pub const ONE_SHOT: u8 = 0x80;
pub const ADC_RES_9BITS: u8 = 0x00;
pub const ADC_RES_10BITS: u8 = 0x20;
pub const ADC_RES_11BITS: u8 = 0x40;
pub const ADC_RES_12BITS: u8 = 0x60;
pub const FAULT_QUEUE_1: u8 = 0x00;
pub const FAULT_QUEUE_2: u8 = 0x08;
pub const FAULT_QUEUE_4: u8 = 0x10;
pub const FAULT_QUEUE_6: u8 = 0x18;
pub const ALERT_POLARITY_HIGH: u8 = 0x04;
pub const INTERRUPT_MODE: u8 = 0x02;
pub const SHUTDOWN: u8 = 0x01;

const ADC_RES_MSK: u8 = 0x60;
const ADC_RES_POS: u8 = 5;
const FAULT_QUEUE_MSK: u8 = 0x18;
const FAULT_QUEUE_POS: u8 = 3;

/// ADC resolution.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Resolution {
    /// 0.5°C, power-on default
    Bits9 = 0,
    /// 0.25°C
    Bits10 = 1,
    /// 0.125°C
    Bits11 = 2,
    /// 0.0625°C
    Bits12 = 3,
}

impl Resolution {
    fn from_field(field: u8) -> Self {
        match field & 0b11 {
            0 => Resolution::Bits9,
            1 => Resolution::Bits10,
            2 => Resolution::Bits11,
            _ => Resolution::Bits12,
        }
    }

    pub fn bits(&self) -> u8 {
        match self {
            Resolution::Bits9 => 9,
            Resolution::Bits10 => 10,
            Resolution::Bits11 => 11,
            Resolution::Bits12 => 12,
        }
    }

    /// Weight of the least significant bit, in °C*10000.
    pub fn step(&self) -> i32 {
        match self {
            Resolution::Bits9 => 5000,
            Resolution::Bits10 => 2500,
            Resolution::Bits11 => 1250,
            Resolution::Bits12 => 625,
        }
    }

    /// Typical conversion time from the Electrical Characteristics table.
    pub fn conversion_time_ms(&self) -> u16 {
        match self {
            Resolution::Bits9 => 30,
            Resolution::Bits10 => 60,
            Resolution::Bits11 => 120,
            Resolution::Bits12 => 240,
        }
    }
}

impl Default for Resolution {
    fn default() -> Self {
        Resolution::Bits9
    }
}

/// Number of consecutive faults before the alert output asserts.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FaultQueue {
    One = 0,
    Two = 1,
    Four = 2,
    Six = 3,
}

impl FaultQueue {
    fn from_field(field: u8) -> Self {
        match field & 0b11 {
            0 => FaultQueue::One,
            1 => FaultQueue::Two,
            2 => FaultQueue::Four,
            _ => FaultQueue::Six,
        }
    }

    pub fn count(&self) -> u8 {
        match self {
            FaultQueue::One => 1,
            FaultQueue::Two => 2,
            FaultQueue::Four => 4,
            FaultQueue::Six => 6,
        }
    }
}

impl Default for FaultQueue {
    fn default() -> Self {
        FaultQueue::One
    }
}

/// Decoded configuration register.
///
/// Every one of the 256 register values maps to exactly one `Config` and back.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    pub one_shot: bool,
    pub resolution: Resolution,
    pub fault_queue: FaultQueue,
    /// ALERT pin is active-high
    pub alert_polarity_high: bool,
    /// Interrupt mode, comparator mode otherwise
    pub interrupt_mode: bool,
    pub shutdown: bool,
}

impl Config {
    pub fn from_bits(raw: u8) -> Self {
        Config {
            one_shot: raw & ONE_SHOT != 0,
            resolution: Resolution::from_field((raw & ADC_RES_MSK) >> ADC_RES_POS),
            fault_queue: FaultQueue::from_field((raw & FAULT_QUEUE_MSK) >> FAULT_QUEUE_POS),
            alert_polarity_high: raw & ALERT_POLARITY_HIGH != 0,
            interrupt_mode: raw & INTERRUPT_MODE != 0,
            shutdown: raw & SHUTDOWN != 0,
        }
    }

    pub fn bits(&self) -> u8 {
        let mut raw = ((self.resolution as u8) << ADC_RES_POS) | ((self.fault_queue as u8) << FAULT_QUEUE_POS);
        if self.one_shot {
            raw |= ONE_SHOT;
        }
        if self.alert_polarity_high {
            raw |= ALERT_POLARITY_HIGH;
        }
        if self.interrupt_mode {
            raw |= INTERRUPT_MODE;
        }
        if self.shutdown {
            raw |= SHUTDOWN;
        }
        raw
    }
}

impl From<u8> for Config {
    fn from(raw: u8) -> Self {
        Config::from_bits(raw)
    }
}

impl From<Config> for u8 {
    fn from(config: Config) -> Self {
        config.bits()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_0x65() {
        let config = Config::from_bits(0x65);
        assert!(!config.one_shot);
        assert_eq!(config.resolution, Resolution::Bits12);
        assert_eq!(config.fault_queue, FaultQueue::One);
        assert!(config.alert_polarity_high);
        assert!(!config.interrupt_mode);
        assert!(config.shutdown);
    }

    #[test]
    fn every_byte_is_lossless() {
        for raw in 0..=255u8 {
            let config = Config::from(raw);
            assert_eq!(u8::from(config), raw, "raw {:#04x}", raw);

            assert_eq!(config.one_shot, raw & ONE_SHOT != 0);
            assert_eq!(config.resolution as u8, (raw & 0x60) >> 5);
            assert_eq!(config.fault_queue as u8, (raw & 0x18) >> 3);
            assert_eq!(config.alert_polarity_high, raw & ALERT_POLARITY_HIGH != 0);
            assert_eq!(config.interrupt_mode, raw & INTERRUPT_MODE != 0);
            assert_eq!(config.shutdown, raw & SHUTDOWN != 0);
        }
    }

    #[test]
    fn field_masks_match_constants() {
        assert_eq!(Config::from_bits(ADC_RES_10BITS).resolution, Resolution::Bits10);
        assert_eq!(Config::from_bits(ADC_RES_11BITS).resolution, Resolution::Bits11);
        assert_eq!(Config::from_bits(FAULT_QUEUE_4).fault_queue.count(), 4);
        assert_eq!(Config::from_bits(FAULT_QUEUE_6).fault_queue.count(), 6);

        let config = Config {
            resolution: Resolution::Bits12,
            fault_queue: FaultQueue::Two,
            interrupt_mode: true,
            ..Default::default()
        };
        assert_eq!(config.bits(), ADC_RES_12BITS | FAULT_QUEUE_2 | INTERRUPT_MODE);
    }

    #[test]
    fn power_on_default() {
        assert_eq!(Config::default().bits(), 0x00);
        assert_eq!(Config::default().resolution.bits(), 9);
        assert_eq!(Resolution::Bits12.step(), 625);
        assert_eq!(Resolution::Bits12.conversion_time_ms(), 240);
    }
}

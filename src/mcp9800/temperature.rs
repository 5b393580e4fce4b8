//! Ambient, Hysteresis and Limit-Set register format.
//!
//! Byte 0 carries the sign in bit 7 and the integer degrees in bits 6..0.
//! Byte 1 carries the fraction in bits 7..4 (0.5, 0.25, 0.125, 0.0625 °C).
//! Bits below the configured ADC resolution read back as zero.

use num_traits::float::Float;

/// Temperatures are passed around as °C * SCALE.
pub const SCALE: i32 = 10_000;

const HALF: u32 = 5_000;
const MAX_DEGREES: u32 = 0x7f;
const SIGN: u8 = 0x80;
const HALF_DEGREE: u8 = 0x80;

// bit 7..4 of the fraction byte
const FRACTION_WEIGHTS: [i32; 4] = [5000, 2500, 1250, 625];

/// Decode a register into °C*10000.
pub fn decode(raw: [u8; 2]) -> i32 {
    let [msb, lsb] = raw;
    let mut value = (msb & !SIGN) as i32 * SCALE;
    for (i, weight) in FRACTION_WEIGHTS.iter().enumerate() {
        if lsb & (0x80 >> i) != 0 {
            value += weight;
        }
    }
    if msb & SIGN != 0 {
        -value
    } else {
        value
    }
}

/// Encode °C*10000 into a Hysteresis / Limit-Set payload.
///
/// Only half-degree granularity is kept: the fraction byte is `0x80` when the
/// remainder is at least 0.5°C and zero otherwise. Magnitudes past 127.5°C
/// saturate to 127.5°C.
pub fn encode(value: i32) -> [u8; 2] {
    let mut degrees = (value / SCALE).unsigned_abs();
    let mut half = (value % SCALE).unsigned_abs() >= HALF;
    if degrees > MAX_DEGREES {
        degrees = MAX_DEGREES;
        half = true;
    }

    let mut msb = degrees as u8;
    let lsb = if half { HALF_DEGREE } else { 0x00 };
    if value < 0 && (msb != 0 || half) {
        msb |= SIGN;
    }
    [msb, lsb]
}

pub fn to_celsius(value: i32) -> f32 {
    value as f32 / SCALE as f32
}

pub fn from_celsius(celsius: f32) -> i32 {
    Float::round(celsius * SCALE as f32) as i32
}

/// °C*10000 to °F*10.
pub fn to_fahrenheit_x10(value: i32) -> i32 {
    (value as i64 * 9 / 5000 + 320) as i32
}

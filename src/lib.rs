//! Platform-agnostic drivers for the Microchip MCP9800/1/2/3 temperature
//! sensors, based on the `embedded-hal` I2C traits.

#![cfg_attr(not(test), no_std)]

pub mod compat;
pub mod mcp9800;

pub use crate::mcp9800::{Config, Error, FaultQueue, Mcp9800, Register, Resolution};

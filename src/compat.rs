//! Drive the sensors from an embedded-hal 0.2 blocking I2C bus.

use core::fmt::Debug;

use embedded_hal_02::blocking::i2c::{Read, Write};
use embedded_hal_1::i2c::{ErrorKind, ErrorType, I2c, Operation};

/// Wraps an embedded-hal 0.2 bus so it implements the 1.0 [`I2c`] trait.
#[derive(Debug)]
pub struct Eh02Bus<I>(pub I);

impl<I> Eh02Bus<I> {
    pub fn new(i2c: I) -> Self {
        Eh02Bus(i2c)
    }

    pub fn release(self) -> I {
        self.0
    }
}

/// Error of the wrapped bus, reported as [`ErrorKind::Other`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Eh02Error<E>(pub E);

impl<E: Debug> embedded_hal_1::i2c::Error for Eh02Error<E> {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

impl<I, E> ErrorType for Eh02Bus<I>
where
    I: Write<Error = E> + Read<Error = E>,
    E: Debug,
{
    type Error = Eh02Error<E>;
}

impl<I, E> I2c for Eh02Bus<I>
where
    I: Write<Error = E> + Read<Error = E>,
    E: Debug,
{
    fn transaction(&mut self, address: u8, operations: &mut [Operation<'_>]) -> Result<(), Self::Error> {
        // 0.2 has no repeated start, every operation is its own transfer
        for op in operations {
            match op {
                Operation::Read(buf) => self.0.read(address, buf).map_err(Eh02Error)?,
                Operation::Write(bytes) => self.0.write(address, bytes).map_err(Eh02Error)?,
            }
        }
        Ok(())
    }
}

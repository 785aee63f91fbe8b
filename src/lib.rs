//! IR remote codec for the Toshiba RAS-10PKVP-ND heat pump.
//!
//! Reproduces the signals of the WH-H07JE remote: a [`Command`] is packed
//! into a [`Frame`] of 7, 9 or 10 bytes and serialized into a 38kHz
//! mark/space pulse train. Captured pulse trains can be matched back into
//! bits with [`pulse::decode`].

pub mod command;
pub mod frame;
pub mod pulse;

pub use command::{Command, Fan, Mode, Settings};
pub use frame::Frame;
pub use pulse::{decode, pulses, Bit, DecodeError, Decoded, FREQUENCY};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("temperature {0}°C is outside the 17-30°C range")]
    Temperature(u8),
    #[error("no mode has code {0:#x}")]
    ModeCode(u8),
    #[error("no fan speed has code {0:#x}")]
    FanCode(u8),
}

/// Capability to drive an IR LED: a modulated carrier that can be held on
/// ("mark") or off ("space") for a number of microseconds.
pub trait Transmitter {
    type Error;

    /// Set the carrier frequency in Hz for the following marks.
    fn carrier(&mut self, freq: u16) -> Result<(), Self::Error>;
    /// Keep the carrier on for `micros` microseconds.
    fn mark(&mut self, micros: u16) -> Result<(), Self::Error>;
    /// Keep the carrier off for `micros` microseconds. A duration of zero
    /// means "leave the output off": it ends the transmission rather than
    /// timing an interval.
    fn space(&mut self, micros: u16) -> Result<(), Self::Error>;
}

/// Transmit one command, blocking until the whole frame has been played out
/// (15-25ms depending on the frame length).
pub fn send<T>(tx: &mut T, command: &Command) -> Result<(), T::Error>
where
    T: Transmitter,
{
    tx.carrier(FREQUENCY)?;
    for bit in pulses(&command.frame()) {
        tx.mark(bit.on)?;
        tx.space(bit.off)?;
    }
    Ok(())
}

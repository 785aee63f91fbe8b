//! Byte frames of the WH-H07JE remote.
//!
//! The remote sends three frame lengths. Settable commands travel in a
//! 9-byte frame whose last byte is the XOR of the first eight; the fixed
//! toggle commands use 7- or 10-byte frames ending in constant trailer
//! bytes. The trailer constants were read off captured signals and are not
//! a checksum, so they are kept verbatim rather than computed.

use crate::command::Command;

const MAX_BYTES: usize = 10;

const POWER_HEADER: [u8; 5] = [0xf2, 0x0d, 0x03, 0xfc, 0x01];
const HIGH_POWER: [u8; 10] = [0xf2, 0x0d, 0x04, 0xfb, 0x09, 0x00, 0x00, 0x00, 0x01, 0x08];
const SLEEP: [u8; 10] = [0xf2, 0x0d, 0x04, 0xfb, 0x09, 0x00, 0x00, 0x00, 0x03, 0x0a];
const SWING: [u8; 7] = [0xf2, 0x0d, 0x01, 0xfe, 0x21, 0x04, 0x25];
const UP_DOWN: [u8; 7] = [0xf2, 0x0d, 0x01, 0xfe, 0x21, 0x00, 0x21];

/// One complete command frame of 7, 9 or 10 bytes, ready for pulse
/// encoding. Immutable once built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    buf: [u8; MAX_BYTES],
    len: usize,
}

impl Frame {
    fn from_slice(bytes: &[u8]) -> Self {
        let mut buf = [0; MAX_BYTES];
        buf[..bytes.len()].copy_from_slice(bytes);
        Self {
            buf,
            len: bytes.len(),
        }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn bit_len(&self) -> usize {
        self.len * 8
    }
}

impl AsRef<[u8]> for Frame {
    fn as_ref(&self) -> &[u8] {
        self.bytes()
    }
}

impl Command {
    /// Build the byte frame for this command.
    pub fn frame(&self) -> Frame {
        match self {
            Command::Power(settings) => {
                let mut bytes = [0; 9];
                bytes[..5].copy_from_slice(&POWER_HEADER);
                bytes[5..8].copy_from_slice(&settings.pack());
                bytes[8] = bytes[..8].iter().fold(0, |parity, byte| parity ^ byte);
                Frame::from_slice(&bytes)
            }
            Command::HighPower => Frame::from_slice(&HIGH_POWER),
            Command::Sleep => Frame::from_slice(&SLEEP),
            Command::Swing => Frame::from_slice(&SWING),
            Command::UpDown => Frame::from_slice(&UP_DOWN),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::{Fan, Mode, Settings};

    #[test]
    fn swing_frame() {
        let frame = Command::Swing.frame();
        assert_eq!(
            frame.bytes(),
            [0xf2, 0x0d, 0x01, 0xfe, 0x21, 0x04, 0x25]
        );
        assert_eq!(frame.bit_len(), 56);
    }

    #[test]
    fn up_down_frame() {
        let frame = Command::UpDown.frame();
        assert_eq!(
            frame.bytes(),
            [0xf2, 0x0d, 0x01, 0xfe, 0x21, 0x00, 0x21]
        );
    }

    #[test]
    fn fixed_trailers() {
        assert_eq!(&Command::HighPower.frame().bytes()[8..], [0x01, 0x08]);
        assert_eq!(&Command::Sleep.frame().bytes()[8..], [0x03, 0x0a]);
        assert_eq!(Command::HighPower.frame().bit_len(), 80);
        assert_eq!(Command::Sleep.frame().bit_len(), 80);
    }

    #[test]
    fn power_frame_23c_auto() {
        let settings = Settings::new(23, Mode::Auto, Fan::Auto, false).unwrap();
        let frame = Command::Power(settings).frame();
        let parity = 0xf2 ^ 0x0d ^ 0x03 ^ 0xfc ^ 0x01 ^ 0x06;
        assert_eq!(
            frame.bytes(),
            [0xf2, 0x0d, 0x03, 0xfc, 0x01, 0x06, 0x00, 0x00, parity]
        );
        assert_eq!(frame.bit_len(), 72);
    }

    #[test]
    fn power_frame_parity_over_all_settings() {
        for celsius in 17..=30 {
            for mode in [Mode::Auto, Mode::Cool, Mode::Dry, Mode::Heat, Mode::Off] {
                for fan in [
                    Fan::Auto,
                    Fan::Speed1,
                    Fan::Speed2,
                    Fan::Speed3,
                    Fan::Speed4,
                    Fan::Speed5,
                ] {
                    let settings = Settings::new(celsius, mode, fan, false).unwrap();
                    let frame = Command::Power(settings).frame();
                    assert_eq!(frame.len(), 9);
                    let parity = frame.bytes()[..8].iter().fold(0, |p, b| p ^ b);
                    assert_eq!(frame.bytes()[8], parity);
                }
            }
        }
    }

    #[test]
    fn off_frame() {
        let frame = Command::Power(Settings::off()).frame();
        assert_eq!(
            frame.bytes(),
            [0xf2, 0x0d, 0x03, 0xfc, 0x01, 0x00, 0x07, 0x00, 0x06]
        );
    }
}

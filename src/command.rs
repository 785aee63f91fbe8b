//! Logical remote commands and the 3-byte setting payload of the power
//! frame.

use crate::Error;

/// One button press of the WH-H07JE remote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Power on/off and climate settings. The only command that carries
    /// parameters.
    Power(Settings),
    /// Toggle horizontal swing.
    Swing,
    /// High power mode.
    HighPower,
    /// Sleep mode.
    Sleep,
    /// Step the vertical vane.
    UpDown,
}

/// Operating mode, as encoded in the low nibble of setting byte 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumString, strum::FromRepr)]
#[strum(serialize_all = "lowercase")]
#[repr(u8)]
pub enum Mode {
    Auto = 0,
    Cool = 1,
    Dry = 2,
    Heat = 3,
    Off = 7,
}

/// Fan speed, as encoded in bits 4-6 of setting byte 1. Code 1 is unused
/// by the remote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumString, strum::FromRepr)]
#[repr(u8)]
pub enum Fan {
    #[strum(serialize = "auto")]
    Auto = 0,
    #[strum(serialize = "1")]
    Speed1 = 2,
    #[strum(serialize = "2")]
    Speed2 = 3,
    #[strum(serialize = "3")]
    Speed3 = 4,
    #[strum(serialize = "4")]
    Speed4 = 5,
    #[strum(serialize = "5")]
    Speed5 = 6,
}

/// Base of the temperature scale: offset 0 means 17°C.
const HEAT_BASE: u8 = 17;

/// Climate settings carried by [`Command::Power`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    temp_offset: u8,
    mode: Mode,
    fan: Fan,
    pure: bool,
}

impl Settings {
    /// Settings for `celsius` degrees (17-30°C), an operating mode, a fan
    /// speed and the air purifier flag.
    pub fn new(celsius: u8, mode: Mode, fan: Fan, pure: bool) -> Result<Self, Error> {
        if !(HEAT_BASE..=30).contains(&celsius) {
            return Err(Error::Temperature(celsius));
        }
        Ok(Self {
            temp_offset: celsius - HEAT_BASE,
            mode,
            fan,
            pure,
        })
    }

    /// The power-off payload: mode 7, everything else zero.
    pub fn off() -> Self {
        Self {
            temp_offset: 0,
            mode: Mode::Off,
            fan: Fan::Auto,
            pure: false,
        }
    }

    pub fn celsius(&self) -> u8 {
        self.temp_offset + HEAT_BASE
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn fan(&self) -> Fan {
        self.fan
    }

    pub fn pure(&self) -> bool {
        self.pure
    }

    /// Pack into the three setting bytes of the 9-byte power frame.
    ///
    /// Bit layout (bit 0 = least significant):
    /// * byte 0: bits 0-3 temperature offset (celsius - 17), bits 4-7 zero
    /// * byte 1: bits 0-3 mode, bits 4-6 fan, bit 7 zero
    /// * byte 2: bit 4 purifier, all other bits zero
    pub fn pack(&self) -> [u8; 3] {
        [
            self.temp_offset & 0x0f,
            (self.mode as u8 & 0x0f) | ((self.fan as u8 & 0x07) << 4),
            (self.pure as u8) << 4,
        ]
    }

    /// Inverse of [`Settings::pack`]. Fails on a mode or fan code the
    /// remote never emits.
    pub fn unpack(bytes: [u8; 3]) -> Result<Self, Error> {
        let mode_code = bytes[1] & 0x0f;
        let fan_code = (bytes[1] >> 4) & 0x07;
        Ok(Self {
            temp_offset: bytes[0] & 0x0f,
            mode: Mode::from_repr(mode_code).ok_or(Error::ModeCode(mode_code))?,
            fan: Fan::from_repr(fan_code).ok_or(Error::FanCode(fan_code))?,
            pure: bytes[2] & 0x10 != 0,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn pack_positions() {
        let settings = Settings::new(23, Mode::Heat, Fan::Speed5, true).unwrap();
        assert_eq!(settings.pack(), [0x06, 0x63, 0x10]);
    }

    #[test]
    fn off_payload() {
        assert_eq!(Settings::off().pack(), [0x00, 0x07, 0x00]);
    }

    #[test]
    fn temperature_range() {
        assert!(Settings::new(16, Mode::Auto, Fan::Auto, false).is_err());
        assert!(Settings::new(31, Mode::Auto, Fan::Auto, false).is_err());
        let coldest = Settings::new(17, Mode::Auto, Fan::Auto, false).unwrap();
        assert_eq!(coldest.pack()[0], 0x00);
        let hottest = Settings::new(30, Mode::Auto, Fan::Auto, false).unwrap();
        assert_eq!(hottest.pack()[0], 0x0d);
    }

    #[test]
    fn pack_unpack_inverse() {
        let settings = Settings::new(21, Mode::Dry, Fan::Speed2, false).unwrap();
        assert_eq!(Settings::unpack(settings.pack()).unwrap(), settings);
        assert_eq!(Settings::unpack(Settings::off().pack()).unwrap(), Settings::off());
    }

    #[test]
    fn unpack_rejects_unknown_codes() {
        // mode 5 and fan 1 do not exist on this remote
        assert!(Settings::unpack([0x00, 0x05, 0x00]).is_err());
        assert!(Settings::unpack([0x00, 0x10, 0x00]).is_err());
    }

    #[test]
    fn string_forms() {
        assert_eq!(Mode::from_str("heat").unwrap(), Mode::Heat);
        assert_eq!(Fan::from_str("auto").unwrap(), Fan::Auto);
        assert_eq!(Fan::from_str("3").unwrap(), Fan::Speed3);
        assert!(Mode::from_str("fan").is_err());
        assert!(Fan::from_str("6").is_err());
    }
}

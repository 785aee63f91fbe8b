//! Pulse-level encoding and decoding.
//!
//! Timing of the WH-H07JE, read off captured signals:
//!
//! * header: 4400µs mark, 4400µs space
//! * bit: 550µs mark, then 1600µs space for a one or 550µs space for a zero
//! * trailer: 550µs mark, carrier left off
//! * 38kHz carrier
//!
//! Bits travel most-significant-first within each byte.

use crate::frame::Frame;

/// Carrier frequency in Hz.
pub const FREQUENCY: u16 = 38_000;

pub const HDR_MARK: u16 = 4400;
pub const HDR_SPACE: u16 = 4400;
pub const BIT_MARK: u16 = 550;
pub const ONE_SPACE: u16 = 1600;
pub const ZERO_SPACE: u16 = 550;

/// Accepted deviation of a captured duration from its nominal value.
const TOLERANCE_PCT: u32 = 25;

/// One carrier-on interval followed by one carrier-off interval, in
/// microseconds. `off == 0` marks the end of the train: the transmitter
/// leaves the output off instead of timing a space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bit {
    pub on: u16,
    pub off: u16,
}

/// Serialize a frame into its pulse train.
pub fn pulses(frame: &Frame) -> Vec<Bit> {
    let mut bits = vec![Bit {
        on: HDR_MARK,
        off: HDR_SPACE,
    }];
    for &byte in frame.bytes() {
        for k in (0..8).rev() {
            if byte & (1 << k) == 0 {
                bits.push(Bit {
                    on: BIT_MARK,
                    off: ZERO_SPACE,
                });
            } else {
                bits.push(Bit {
                    on: BIT_MARK,
                    off: ONE_SPACE,
                });
            }
        }
    }
    bits.push(Bit {
        on: BIT_MARK,
        off: 0,
    });
    bits
}

/// Why a captured train was not recognized as a WH-H07JE frame.
///
/// Offsets index the captured buffer passed to [`decode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("{0} captured durations do not form a 56-, 72- or 80-bit frame")]
    Length(usize),
    #[error("header mark of {0}µs does not match {HDR_MARK}µs")]
    HeaderMark(u16),
    #[error("header space of {0}µs does not match {HDR_SPACE}µs")]
    HeaderSpace(u16),
    #[error("mark of {1}µs at offset {0} does not match {BIT_MARK}µs")]
    BitMark(usize, u16),
    #[error("space of {1}µs at offset {0} is neither a one nor a zero")]
    BitSpace(usize, u16),
}

/// A recognized frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decoded {
    /// Payload length of the whole frame: 56, 72 or 80 bits.
    pub bits: usize,
    /// The first 32 payload bits, most-significant-first. The rest of the
    /// frame is length-checked but not kept.
    pub value: u32,
}

/// Match a captured train of alternating mark/space durations against the
/// protocol timing. `raw[0]` is the gap before the frame and is skipped.
///
/// Only the first 32 bits are accumulated into [`Decoded::value`]; an error
/// means "not this protocol" and callers may hand the capture to other
/// decoders.
pub fn decode(raw: &[u16]) -> Result<Decoded, DecodeError> {
    let bits = raw.len().saturating_sub(3) / 2;
    if !matches!(bits, 56 | 72 | 80) {
        return Err(DecodeError::Length(raw.len()));
    }

    let mut offset = 1;
    if !in_tolerance(raw[offset], HDR_MARK) {
        return Err(DecodeError::HeaderMark(raw[offset]));
    }
    offset += 1;
    if !in_tolerance(raw[offset], HDR_SPACE) {
        return Err(DecodeError::HeaderSpace(raw[offset]));
    }
    offset += 1;

    let mut value: u32 = 0;
    for _ in 0..32 {
        if !in_tolerance(raw[offset], BIT_MARK) {
            return Err(DecodeError::BitMark(offset, raw[offset]));
        }
        offset += 1;
        value = if in_tolerance(raw[offset], ONE_SPACE) {
            (value << 1) | 1
        } else if in_tolerance(raw[offset], ZERO_SPACE) {
            value << 1
        } else {
            return Err(DecodeError::BitSpace(offset, raw[offset]));
        };
        offset += 1;
    }

    Ok(Decoded { bits, value })
}

fn in_tolerance(measured: u16, nominal: u16) -> bool {
    let slack = u32::from(nominal) * TOLERANCE_PCT / 100;
    let measured = u32::from(measured);
    u32::from(nominal) - slack <= measured && measured <= u32::from(nominal) + slack
}

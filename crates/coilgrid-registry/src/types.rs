use crate::error::{RegisterError, Result};
use crate::value::{FlagSet, Value};

/// A named ordered set of boolean flags.
///
/// Flag `i` lives at bit `i` of the payload, with bytes combined
/// little-endian: byte 0 carries bits 0–7, byte 1 carries bits 8–15.
/// Declaration order therefore fixes the wire layout and is part of the
/// protocol.
#[derive(Debug, PartialEq, Eq)]
pub struct Bitfield {
    name: &'static str,
    flags: &'static [&'static str],
}

impl Bitfield {
    /// Flags beyond this would not fit the 32-bit accumulator.
    pub const MAX_FLAGS: usize = 32;

    /// Declare a bitfield. Panics at compile time when used in a `static`
    /// with no flags or more than [`MAX_FLAGS`](Self::MAX_FLAGS).
    pub const fn new(name: &'static str, flags: &'static [&'static str]) -> Self {
        assert!(!flags.is_empty(), "bitfield must declare at least one flag");
        assert!(
            flags.len() <= Self::MAX_FLAGS,
            "bitfield exceeds 32 flags"
        );
        Self { name, flags }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub const fn flags(&self) -> &'static [&'static str] {
        self.flags
    }

    /// Payload bytes needed to carry every declared flag.
    pub const fn width(&self) -> usize {
        self.flags.len().div_ceil(8)
    }
}

/// The closed set of payload types a register can carry.
///
/// Scalars are little-endian and fixed-width. `Raw` passes the payload
/// through untouched for registers whose layout is opaque to this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterType {
    U8,
    U16,
    I16,
    U32,
    F32,
    Bits(&'static Bitfield),
    Raw,
}

impl RegisterType {
    /// Minimum payload length this type decodes from.
    pub const fn width(&self) -> usize {
        match self {
            Self::U8 => 1,
            Self::U16 | Self::I16 => 2,
            Self::U32 | Self::F32 => 4,
            Self::Bits(field) => field.width(),
            Self::Raw => 0,
        }
    }

    /// Human-readable type label, used in listings and error messages.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::U8 => "uint8",
            Self::U16 => "uint16",
            Self::I16 => "int16",
            Self::U32 => "uint32",
            Self::F32 => "float32",
            Self::Bits(field) => field.name(),
            Self::Raw => "raw",
        }
    }

    /// Decode the leading bytes of `payload` as this type.
    ///
    /// Scalars and bitfields consume exactly [`width`](Self::width) bytes
    /// and ignore any trailing ones; `Raw` takes the whole payload. Fails
    /// when fewer than `width` bytes are present.
    pub fn decode(&self, payload: &[u8]) -> Result<Value> {
        let needed = self.width();
        if payload.len() < needed {
            return Err(RegisterError::ShortPayload {
                type_name: self.label(),
                needed,
                got: payload.len(),
            });
        }

        Ok(match self {
            Self::U8 => Value::U8(payload[0]),
            Self::U16 => Value::U16(u16::from_le_bytes([payload[0], payload[1]])),
            Self::I16 => Value::I16(i16::from_le_bytes([payload[0], payload[1]])),
            Self::U32 => Value::U32(u32::from_le_bytes([
                payload[0], payload[1], payload[2], payload[3],
            ])),
            Self::F32 => Value::F32(f32::from_le_bytes([
                payload[0], payload[1], payload[2], payload[3],
            ])),
            Self::Bits(field) => {
                let mut bits = 0u32;
                for (i, &byte) in payload[..needed].iter().enumerate() {
                    bits |= (byte as u32) << (8 * i);
                }
                Value::Flags(FlagSet::new(field, bits))
            }
            Self::Raw => Value::Bytes(payload.to_vec()),
        })
    }
}

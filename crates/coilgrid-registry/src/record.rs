use crate::error::RegisterError;
use crate::value::Value;

/// One unstuffed frame split into its register id and payload.
///
/// Borrows the frame; nothing is copied until a type decode asks for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Message<'a> {
    pub register: u8,
    pub payload: &'a [u8],
}

impl<'a> Message<'a> {
    /// Split a frame into register id and payload.
    ///
    /// Returns `None` for frames under two bytes: too short to carry both
    /// an id and any payload, and not worth an error record.
    pub fn parse(frame: &'a [u8]) -> Option<Self> {
        if frame.len() < 2 {
            return None;
        }
        Some(Self {
            register: frame[0],
            payload: &frame[1..],
        })
    }
}

/// A successfully decoded register: its catalog name and typed value.
#[derive(Debug, Clone, PartialEq)]
pub struct Reading {
    pub name: &'static str,
    pub value: Value,
}

/// Outcome of decoding one message against a register map.
///
/// The register id is always known; the payload either decoded to a
/// [`Reading`] or produced a per-register error. Either way the stream
/// carries on with the next message.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedRecord {
    pub register: u8,
    pub result: Result<Reading, RegisterError>,
}

impl DecodedRecord {
    pub fn reading(&self) -> Option<&Reading> {
        self.result.as_ref().ok()
    }

    pub fn error(&self) -> Option<&RegisterError> {
        self.result.as_ref().err()
    }
}

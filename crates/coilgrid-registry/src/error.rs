/// Per-register decode failure.
///
/// Carried inside a [`DecodedRecord`](crate::record::DecodedRecord) rather
/// than returned from the decode call: one unreadable register must not
/// abort a stream of otherwise good messages.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegisterError {
    #[error("unknown register 0x{register:02x}")]
    UnknownRegister { register: u8 },

    #[error("{type_name} payload needs {needed} bytes, got {got}")]
    ShortPayload {
        type_name: &'static str,
        needed: usize,
        got: usize,
    },
}

pub type Result<T> = std::result::Result<T, RegisterError>;

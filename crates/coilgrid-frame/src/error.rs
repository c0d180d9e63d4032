/// Errors that can occur while unstuffing or streaming framed bytes.
///
/// Every variant except [`FrameError::Io`] signals framing corruption: the
/// affected frame cannot be recovered and must be dropped by the caller.
#[derive(Debug, thiserror::Error)]
pub enum FrameError {
    /// Stuffed data contained a length code of zero.
    #[error("zero length code at offset {offset}")]
    ZeroCode { offset: usize },

    /// A run's declared length reads past the end of the frame.
    #[error("run of {declared} bytes at offset {offset} exceeds the {available} remaining")]
    RunOverrun {
        offset: usize,
        declared: usize,
        available: usize,
    },

    /// A frame grew beyond the configured maximum before its delimiter.
    #[error("frame exceeds maximum size ({max} bytes)")]
    FrameTooLarge { max: usize },

    /// The stream ended inside a frame, before its closing delimiter.
    #[error("stream ended with {buffered} unterminated bytes")]
    UnterminatedFrame { buffered: usize },

    /// An I/O error occurred while reading or writing framed bytes.
    #[error("frame I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, FrameError>;

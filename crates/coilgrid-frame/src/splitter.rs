use bytes::{BufMut, Bytes, BytesMut};

use crate::codec::{self, DELIMITER};
use crate::error::{FrameError, Result};

/// Default cap on a single buffered frame.
///
/// Register messages are a handful of bytes; anything near this size means
/// the stream has lost its delimiters.
pub const DEFAULT_MAX_FRAME: usize = 1024;

/// Push-based frame accumulator for a delimited byte stream.
///
/// Feed wire bytes in arrival order with [`push`](Self::push); whenever a
/// delimiter completes a frame, the stuffed body is decoded and yielded.
/// Consecutive delimiters (idle line) produce nothing. A corrupt or
/// over-size frame is dropped and the splitter resynchronizes at the next
/// delimiter, so one damaged frame never poisons the rest of the stream.
#[derive(Debug)]
pub struct FrameSplitter {
    buf: BytesMut,
    max_frame: usize,
    /// Bytes seen since the last delimiter, counting discarded ones.
    frame_len: usize,
    discarding: bool,
}

impl FrameSplitter {
    pub fn new() -> Self {
        Self::with_max_frame(DEFAULT_MAX_FRAME)
    }

    /// Splitter that drops any frame growing beyond `max_frame` wire bytes.
    pub fn with_max_frame(max_frame: usize) -> Self {
        Self {
            buf: BytesMut::new(),
            max_frame,
            frame_len: 0,
            discarding: false,
        }
    }

    /// Wire bytes buffered for the frame in progress.
    pub fn pending(&self) -> usize {
        self.frame_len
    }

    /// Feed one wire byte.
    ///
    /// Returns `Ok(Some(body))` when `byte` completed a frame, `Ok(None)`
    /// when more input is needed. Errors are per-frame: an over-size frame
    /// fails once at the byte that crossed the limit, a corrupt frame fails
    /// at its closing delimiter, and either way the splitter is already
    /// positioned to accept the next frame.
    pub fn push(&mut self, byte: u8) -> Result<Option<Bytes>> {
        if byte == DELIMITER {
            let was_discarding = self.discarding;
            let stuffed = self.buf.split().freeze();
            self.frame_len = 0;
            self.discarding = false;

            if was_discarding || stuffed.is_empty() {
                return Ok(None);
            }
            return codec::decode(&stuffed).map(Some);
        }

        self.frame_len += 1;
        if self.discarding {
            return Ok(None);
        }
        if self.frame_len > self.max_frame {
            tracing::debug!(
                max = self.max_frame,
                "frame exceeded size limit, discarding until next delimiter"
            );
            self.buf.clear();
            self.discarding = true;
            return Err(FrameError::FrameTooLarge {
                max: self.max_frame,
            });
        }
        self.buf.put_u8(byte);
        Ok(None)
    }

    /// Declare end of input.
    ///
    /// Fails if the stream stopped mid-frame; a well-formed capture always
    /// ends with a delimiter. The partial frame is dropped, so a repeat
    /// call reports a clean end.
    pub fn finish(&mut self) -> Result<()> {
        let buffered = self.frame_len;
        self.buf.clear();
        self.frame_len = 0;
        self.discarding = false;
        if buffered > 0 {
            return Err(FrameError::UnterminatedFrame { buffered });
        }
        Ok(())
    }
}

impl Default for FrameSplitter {
    fn default() -> Self {
        Self::new()
    }
}

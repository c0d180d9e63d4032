use std::io::{ErrorKind, Read};

use bytes::{Buf, Bytes, BytesMut};

use crate::error::Result;
use crate::splitter::FrameSplitter;

const READ_CHUNK_SIZE: usize = 8 * 1024;

/// Reads complete unstuffed frames from any `Read` stream.
///
/// Partial reads are absorbed internally, so callers only ever see whole
/// frames. A corrupt frame surfaces as an error for that call only; the
/// reader stays usable and picks up at the next delimiter.
pub struct FrameReader<T> {
    inner: T,
    splitter: FrameSplitter,
    /// Wire bytes read but not yet fed to the splitter. Keeps bytes after a
    /// corrupt frame so the stream resumes exactly where it stopped.
    pending: BytesMut,
}

impl<T: Read> FrameReader<T> {
    pub fn new(inner: T) -> Self {
        Self::with_splitter(inner, FrameSplitter::new())
    }

    /// Reader with an explicitly configured splitter (frame size limit).
    pub fn with_splitter(inner: T, splitter: FrameSplitter) -> Self {
        Self {
            inner,
            splitter,
            pending: BytesMut::new(),
        }
    }

    /// Read the next complete frame (blocking).
    ///
    /// Returns `Ok(None)` once the stream ends cleanly on a frame boundary.
    /// A stream that ends mid-frame yields an unterminated-frame error.
    pub fn read_frame(&mut self) -> Result<Option<Bytes>> {
        loop {
            while !self.pending.is_empty() {
                let byte = self.pending[0];
                self.pending.advance(1);
                if let Some(frame) = self.splitter.push(byte)? {
                    return Ok(Some(frame));
                }
            }

            let mut chunk = [0u8; READ_CHUNK_SIZE];
            let read = match self.inner.read(&mut chunk) {
                Ok(n) => n,
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) => return Err(err.into()),
            };

            if read == 0 {
                self.splitter.finish()?;
                return Ok(None);
            }

            self.pending.extend_from_slice(&chunk[..read]);
        }
    }

    /// Borrow the underlying stream.
    pub fn get_ref(&self) -> &T {
        &self.inner
    }

    /// Mutably borrow the underlying stream.
    pub fn get_mut(&mut self) -> &mut T {
        &mut self.inner
    }

    /// Consume the reader and return the inner stream.
    pub fn into_inner(self) -> T {
        self.inner
    }
}

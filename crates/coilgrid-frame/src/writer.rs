use std::io::{ErrorKind, Write};

use bytes::{BufMut, BytesMut};

use crate::codec::{self, DELIMITER};
use crate::error::{FrameError, Result};

const INITIAL_BUFFER_CAPACITY: usize = 1024;

/// Writes delimited frames to any `Write` stream.
///
/// Each payload is byte-stuffed, terminated with the zero delimiter, and
/// written through. Interrupted and short writes are retried internally.
pub struct FrameWriter<T> {
    inner: T,
    buf: BytesMut,
}

impl<T: Write> FrameWriter<T> {
    pub fn new(inner: T) -> Self {
        Self {
            inner,
            buf: BytesMut::with_capacity(INITIAL_BUFFER_CAPACITY),
        }
    }

    /// Stuff `body`, append the delimiter, and write the frame (blocking).
    pub fn write_frame(&mut self, body: &[u8]) -> Result<()> {
        self.buf.clear();
        codec::encode_into(body, &mut self.buf);
        self.buf.put_u8(DELIMITER);

        let mut offset = 0usize;
        while offset < self.buf.len() {
            match self.inner.write(&self.buf[offset..]) {
                Ok(0) => {
                    return Err(FrameError::Io(std::io::Error::from(ErrorKind::WriteZero)));
                }
                Ok(n) => offset += n,
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) if err.kind() == ErrorKind::WouldBlock => continue,
                Err(err) => return Err(FrameError::Io(err)),
            }
        }

        self.flush()
    }

    /// Flush the underlying stream.
    pub fn flush(&mut self) -> Result<()> {
        loop {
            match self.inner.flush() {
                Ok(()) => return Ok(()),
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) if err.kind() == ErrorKind::WouldBlock => continue,
                Err(err) => return Err(FrameError::Io(err)),
            }
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

    /// Consume the writer and return the inner stream.
    pub fn into_inner(self) -> T {
        self.inner
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    use super::*;
    use crate::reader::FrameReader;

    #[test]
    fn write_single_frame() {
        let cursor = Cursor::new(Vec::<u8>::new());
        let mut writer = FrameWriter::new(cursor);

        writer.write_frame(&[0x04, 0x05, 0x00, 0x01]).unwrap();

        let wire = writer.into_inner().into_inner();
        assert_eq!(wire.last(), Some(&DELIMITER));
        let body = codec::decode(&wire[..wire.len() - 1]).unwrap();
        assert_eq!(body.as_ref(), &[0x04, 0x05, 0x00, 0x01]);
    }

    #[test]
    fn every_frame_gets_exactly_one_delimiter() {
        let cursor = Cursor::new(Vec::<u8>::new());
        let mut writer = FrameWriter::new(cursor);

        writer.write_frame(&[0x10, 0x00, 0x00]).unwrap();
        writer.write_frame(&[0x20, 0xFF]).unwrap();
        writer.write_frame(&[]).unwrap();

        let wire = writer.into_inner().into_inner();
        let zeros = wire.iter().filter(|&&b| b == DELIMITER).count();
        assert_eq!(zeros, 3);
        assert_eq!(wire.last(), Some(&DELIMITER));
    }

    #[test]
    fn written_frames_read_back() {
        let cursor = Cursor::new(Vec::<u8>::new());
        let mut writer = FrameWriter::new(cursor);

        writer.write_frame(&[0x0b, 0x2C, 0x01]).unwrap();
        writer.write_frame(&[0x30, 0xF6, 0xFF]).unwrap();

        let wire = writer.into_inner().into_inner();
        let mut reader = FrameReader::new(Cursor::new(wire));
        assert_eq!(
            reader.read_frame().unwrap().unwrap().as_ref(),
            &[0x0b, 0x2C, 0x01]
        );
        assert_eq!(
            reader.read_frame().unwrap().unwrap().as_ref(),
            &[0x30, 0xF6, 0xFF]
        );
        assert!(reader.read_frame().unwrap().is_none());
    }

    #[test]
    fn handles_short_writes() {
        let sink = DribbleWriter { data: Vec::new() };
        let mut writer = FrameWriter::new(sink);

        writer.write_frame(&[0x01, 0x02, 0x03, 0x04, 0x05]).unwrap();

        let wire = writer.into_inner().data;
        let body = codec::decode(&wire[..wire.len() - 1]).unwrap();
        assert_eq!(body.as_ref(), &[0x01, 0x02, 0x03, 0x04, 0x05]);
    }

    #[test]
    fn handles_interrupted_write_and_flush() {
        let sink = InterruptedWriteThenFlush {
            wrote_once: false,
            flush_interrupted: false,
            data: Vec::new(),
        };

        let mut writer = FrameWriter::new(sink);
        writer.write_frame(b"retry").unwrap();

        let inner = writer.into_inner();
        assert!(!inner.data.is_empty());
    }

    #[test]
    fn write_zero_is_error() {
        let mut writer = FrameWriter::new(ZeroWriter);
        let err = writer.write_frame(b"x").unwrap_err();
        assert!(matches!(err, FrameError::Io(e) if e.kind() == ErrorKind::WriteZero));
    }

    #[test]
    fn flush_propagates() {
        let sink = FlushTrackingWriter::default();
        let flag = Arc::clone(&sink.flushed);
        let mut writer = FrameWriter::new(sink);

        writer.write_frame(b"x").unwrap();

        assert!(flag.load(Ordering::SeqCst));
    }

    #[test]
    fn accessors_and_into_inner() {
        let cursor = Cursor::new(Vec::<u8>::new());
        let mut writer = FrameWriter::new(cursor);

        let _ = writer.get_ref();
        let _ = writer.get_mut();
        let _inner = writer.into_inner();
    }

    #[test]
    #[cfg(unix)]
    fn roundtrip_over_pipe() {
        let (left, right) = std::os::unix::net::UnixStream::pair().unwrap();
        let mut writer = FrameWriter::new(left);
        let mut reader = FrameReader::new(right);

        writer.write_frame(&[0x12, 0x03]).unwrap();
        writer.write_frame(&[0x21, 0x01]).unwrap();

        assert_eq!(
            reader.read_frame().unwrap().unwrap().as_ref(),
            &[0x12, 0x03]
        );
        assert_eq!(
            reader.read_frame().unwrap().unwrap().as_ref(),
            &[0x21, 0x01]
        );
    }

    /// Writes at most two bytes per call.
    struct DribbleWriter {
        data: Vec<u8>,
    }

    impl Write for DribbleWriter {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            let n = buf.len().min(2);
            self.data.extend_from_slice(&buf[..n]);
            Ok(n)
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    struct InterruptedWriteThenFlush {
        wrote_once: bool,
        flush_interrupted: bool,
        data: Vec<u8>,
    }

    impl Write for InterruptedWriteThenFlush {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            if !self.wrote_once {
                self.wrote_once = true;
                return Err(std::io::Error::from(ErrorKind::Interrupted));
            }
            self.data.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            if !self.flush_interrupted {
                self.flush_interrupted = true;
                return Err(std::io::Error::from(ErrorKind::Interrupted));
            }
            Ok(())
        }
    }

    struct ZeroWriter;

    impl Write for ZeroWriter {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Ok(0)
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[derive(Default)]
    struct FlushTrackingWriter {
        flushed: Arc<AtomicBool>,
        data: Vec<u8>,
    }

    impl Write for FlushTrackingWriter {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.data.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            self.flushed.store(true, Ordering::SeqCst);
            Ok(())
        }
    }
}

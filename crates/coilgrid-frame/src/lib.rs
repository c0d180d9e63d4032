//! Zero-delimited byte-stuffing framing for the coil bus serial link.
//!
//! Frames on the coil bus are separated by `0x00` bytes. Before a frame goes
//! on the wire its body is byte-stuffed so that it contains no zero byte at
//! all: the body is rewritten as a sequence of runs, each prefixed by a
//! one-byte length code, with every zero byte implied by a code instead of
//! transmitted. The receiver can therefore split the stream on `0x00` without
//! ever looking inside a frame.
//!
//! - [`codec`] — the pure stuff/unstuff transform
//! - [`splitter`] — push-based delimiter splitting for raw byte streams
//! - [`reader`] / [`writer`] — blocking frame I/O over any `Read`/`Write`

pub mod codec;
pub mod error;
pub mod reader;
pub mod splitter;
pub mod writer;

pub use codec::{decode, decode_into, encode, encode_into, DELIMITER, MAX_RUN};
pub use error::{FrameError, Result};
pub use reader::FrameReader;
pub use splitter::{FrameSplitter, DEFAULT_MAX_FRAME};
pub use writer::FrameWriter;

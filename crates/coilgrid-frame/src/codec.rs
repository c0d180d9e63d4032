use bytes::{BufMut, Bytes, BytesMut};

use crate::error::{FrameError, Result};

/// Frame delimiter on the wire. Stuffed frame bodies never contain it.
pub const DELIMITER: u8 = 0x00;

/// Longest run a single length code can carry.
///
/// A run of exactly this length is written with the continuation code `0xFF`,
/// which tells the decoder not to re-insert a zero after it.
pub const MAX_RUN: usize = 254;

/// Worst-case stuffed size for a body of `len` bytes.
///
/// One code byte per started run of 254, plus one for the (possibly empty)
/// final run.
pub const fn max_encoded_len(len: usize) -> usize {
    len + len / MAX_RUN + 1
}

/// Byte-stuff `data` so the result contains no [`DELIMITER`] byte.
///
/// The body is split into runs at each zero byte (and at the [`MAX_RUN`]
/// cap). Each run is emitted as one length code (`run length + 1`) followed
/// by the run's bytes verbatim; the zero that ended a run is implied by its
/// code and never copied. Stuffing always succeeds: empty input encodes to
/// the single byte `0x01`.
///
/// ```text
/// body:    11 22 00 33
/// stuffed: 03 11 22 02 33
///          │  └ run ┘ │  └ run
///          └ code 3: 2 bytes then an implied zero
/// ```
pub fn encode(data: &[u8]) -> Bytes {
    let mut dst = BytesMut::with_capacity(max_encoded_len(data.len()));
    encode_into(data, &mut dst);
    dst.freeze()
}

/// Byte-stuff `data`, appending the result to `dst`.
pub fn encode_into(data: &[u8], dst: &mut BytesMut) {
    dst.reserve(max_encoded_len(data.len()));

    let mut rest = data;
    loop {
        let cap = rest.len().min(MAX_RUN);
        match rest[..cap].iter().position(|&b| b == DELIMITER) {
            // Run ended by a zero byte: the code implies it, and another run
            // always follows (even an empty one at end of input).
            Some(n) => {
                dst.put_u8(n as u8 + 1);
                dst.put_slice(&rest[..n]);
                rest = &rest[n + 1..];
            }
            // Full run: continuation code, no implied zero.
            None if cap == MAX_RUN => {
                dst.put_u8(0xFF);
                dst.put_slice(&rest[..MAX_RUN]);
                rest = &rest[MAX_RUN..];
                if rest.is_empty() {
                    break;
                }
            }
            // Final short run, possibly empty.
            None => {
                dst.put_u8(cap as u8 + 1);
                dst.put_slice(rest);
                break;
            }
        }
    }
}

/// Reverse [`encode`]: recover the original body from stuffed bytes.
///
/// Fails when a length code of zero appears or a run's declared length reads
/// past the end of the input. Both mean the frame was corrupted in transit
/// and cannot be recovered.
pub fn decode(framed: &[u8]) -> Result<Bytes> {
    let mut dst = BytesMut::with_capacity(framed.len());
    decode_into(framed, &mut dst)?;
    Ok(dst.freeze())
}

/// Reverse [`encode`], appending the recovered body to `dst`.
///
/// On error `dst` may hold a partially recovered prefix; callers that reuse
/// buffers should treat its contents as garbage after a failure.
pub fn decode_into(framed: &[u8], dst: &mut BytesMut) -> Result<()> {
    dst.reserve(framed.len());

    let mut i = 0usize;
    while i < framed.len() {
        let code = framed[i];
        if code == 0 {
            return Err(FrameError::ZeroCode { offset: i });
        }

        let declared = code as usize - 1;
        let start = i + 1;
        let end = start + declared;
        if end > framed.len() {
            return Err(FrameError::RunOverrun {
                offset: i,
                declared,
                available: framed.len() - start,
            });
        }

        dst.put_slice(&framed[start..end]);
        i = end;

        // A short run is followed by an implied zero unless it ends the
        // frame; a full run (code 0xFF) never is.
        if code < 0xFF && i < framed.len() {
            dst.put_u8(DELIMITER);
        }
    }

    Ok(())
}

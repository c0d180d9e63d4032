//! Register catalogs and typed decoding for coil bus messages.
//!
//! A message is one unstuffed frame: a register id byte followed by a
//! typed payload. The catalogs in [`tables`] say what each id means for a
//! node class; [`RegisterMap::decode`] turns raw frames into named, typed
//! readings.
//!
//! Decode failures stay local: an unknown register or an undersized
//! payload produces an error *inside* the returned record, so one bad
//! message never stops a stream. Only frames too short to carry a
//! register id and payload yield nothing at all.

pub mod error;
pub mod map;
pub mod record;
pub mod tables;
pub mod types;
pub mod value;

pub use error::{RegisterError, Result};
pub use map::{RegisterEntry, RegisterMap};
pub use record::{DecodedRecord, Message, Reading};
pub use tables::{MASTER, TILE};
pub use types::{Bitfield, RegisterType};
pub use value::{FlagSet, Value};

//! Frame and register decoding toolkit for the coil bus.
//!
//! coilgrid turns the raw serial byte stream of a coil/HV power-control
//! network into named, typed register readings, and stuffs outgoing
//! payloads back into delimiter-safe frames.
//!
//! # Crate Structure
//!
//! - [`frame`] — Zero-delimited byte-stuffing codec plus stream helpers
//!   (splitter, blocking reader/writer)
//! - [`registry`] — Register catalogs and the typed message decoder
//!
//! The `coilgrid` binary (behind the default `cli` feature) decodes
//! captured streams, stuffs payloads, and lists the register catalogs.

/// Re-export framing types.
pub mod frame {
    pub use coilgrid_frame::*;
}

/// Re-export registry types.
pub mod registry {
    pub use coilgrid_registry::*;
}

//! fedwire Codec - Envelope framing and primitive value codecs
//!
//! This crate implements the byte-level encoding of federation events:
//! - Byte cursor buffer (big-endian appends, explicit-endianness reads)
//! - Event envelope (24-byte header plus length-prefixed payload)
//! - Primitive codecs under the message buffer and standard conventions
//! - Attribute bindings that tie a name to a kind and a convention

pub mod binding;
pub mod buffer;
pub mod config;
pub mod convention;
pub mod envelope;
pub mod message_buffer;
pub mod standard;

pub use binding::*;
pub use buffer::*;
pub use config::*;
pub use convention::*;
pub use envelope::*;

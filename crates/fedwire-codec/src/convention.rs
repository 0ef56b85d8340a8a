//! Wire convention selection
//!
//! The caller picks the convention per attribute. It is never detected
//! from the bytes, and the two must not be mixed inside one payload.
//! Each convention handles every [`PrimitiveKind`] in an exhaustive match,
//! so adding a kind fails to compile until both conventions cover it.

use std::fmt;

use bytes::Bytes;
use fedwire_core::{FedError, FedResult, PrimitiveKind, PrimitiveValue};
use serde::{Deserialize, Serialize};

use crate::{message_buffer, standard};

/// Byte-level encoding rule set for primitive values
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Convention {
    /// Length-prefixed message buffer, able to pack several values
    MessageBuffer,
    /// HLA 1516e basic data representation, with array aggregates
    #[default]
    Standard,
}

impl Convention {
    fn unsupported(self, operation: &str) -> FedError {
        FedError::UnsupportedValueKind(format!("{} under the {} convention", operation, self))
    }

    /// Encode a value declared as `kind`
    pub fn encode(self, kind: PrimitiveKind, value: &PrimitiveValue) -> FedResult<Bytes> {
        match self {
            Convention::MessageBuffer => message_buffer::encode(kind, value),
            Convention::Standard => standard::encode(kind, value),
        }
    }

    /// Encode a value under its own kind
    pub fn encode_value(self, value: &PrimitiveValue) -> FedResult<Bytes> {
        self.encode(value.kind(), value)
    }

    /// Decode bytes expected to hold a value of `kind`
    pub fn decode(self, kind: PrimitiveKind, bytes: &[u8]) -> FedResult<PrimitiveValue> {
        match self {
            Convention::MessageBuffer => message_buffer::decode(kind, bytes),
            Convention::Standard => standard::decode(kind, bytes),
        }
    }

    /// Pack several values into one payload (message buffer only)
    pub fn encode_sequence(self, values: &[PrimitiveValue]) -> FedResult<Bytes> {
        match self {
            Convention::MessageBuffer => message_buffer::encode_sequence(values),
            Convention::Standard => Err(self.unsupported("message buffer sequence")),
        }
    }

    pub fn decode_sequence(self, kinds: &[PrimitiveKind], bytes: &[u8]) -> FedResult<Vec<PrimitiveValue>> {
        match self {
            Convention::MessageBuffer => message_buffer::decode_sequence(kinds, bytes),
            Convention::Standard => Err(self.unsupported("message buffer sequence")),
        }
    }

    /// Count-prefixed array of `kind` (standard only)
    pub fn encode_variable_array(self, kind: PrimitiveKind, values: &[PrimitiveValue]) -> FedResult<Bytes> {
        match self {
            Convention::Standard => standard::encode_variable_array(kind, values),
            Convention::MessageBuffer => Err(self.unsupported(&format!("variable array of {}", kind))),
        }
    }

    pub fn decode_variable_array(self, kind: PrimitiveKind, bytes: &[u8]) -> FedResult<Vec<PrimitiveValue>> {
        match self {
            Convention::Standard => standard::decode_variable_array(kind, bytes),
            Convention::MessageBuffer => Err(self.unsupported(&format!("variable array of {}", kind))),
        }
    }

    /// Array of `kind` with an agreed length (standard only)
    pub fn encode_fixed_array(self, kind: PrimitiveKind, values: &[PrimitiveValue]) -> FedResult<Bytes> {
        match self {
            Convention::Standard => standard::encode_fixed_array(kind, values),
            Convention::MessageBuffer => Err(self.unsupported(&format!("fixed array of {}", kind))),
        }
    }

    pub fn decode_fixed_array(self, kind: PrimitiveKind, len: usize, bytes: &[u8]) -> FedResult<Vec<PrimitiveValue>> {
        match self {
            Convention::Standard => standard::decode_fixed_array(kind, len, bytes),
            Convention::MessageBuffer => Err(self.unsupported(&format!("fixed array of {}", kind))),
        }
    }
}

impl fmt::Display for Convention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Convention::MessageBuffer => f.write_str("message buffer"),
            Convention::Standard => f.write_str("standard"),
        }
    }
}

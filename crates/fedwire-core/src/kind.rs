//! Primitive kind definitions
//!
//! A payload carries exactly one value from a closed set of kinds:
//! - Boolean, UnsignedByte: one byte
//! - Short, Int, Long: 16/32/64-bit signed integers
//! - Float, Double: IEEE-754 single and double precision
//! - String: variable length text
//!
//! The kind never travels on the wire. Both ends agree on it out of band.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{FedError, FedResult};

/// Primitive payload kind
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
#[repr(u8)]
pub enum PrimitiveKind {
    Boolean = 0x00,
    UnsignedByte = 0x01,
    Short = 0x02,
    Int = 0x03,
    Long = 0x04,
    Float = 0x05,
    Double = 0x06,
    String = 0x07,
}

impl PrimitiveKind {
    /// Every supported kind, in tag order
    pub const ALL: [PrimitiveKind; 8] = [
        PrimitiveKind::Boolean,
        PrimitiveKind::UnsignedByte,
        PrimitiveKind::Short,
        PrimitiveKind::Int,
        PrimitiveKind::Long,
        PrimitiveKind::Float,
        PrimitiveKind::Double,
        PrimitiveKind::String,
    ];

    /// Parse from a registration tag
    pub fn from_byte(b: u8) -> Option<Self> {
        match b {
            0x00 => Some(PrimitiveKind::Boolean),
            0x01 => Some(PrimitiveKind::UnsignedByte),
            0x02 => Some(PrimitiveKind::Short),
            0x03 => Some(PrimitiveKind::Int),
            0x04 => Some(PrimitiveKind::Long),
            0x05 => Some(PrimitiveKind::Float),
            0x06 => Some(PrimitiveKind::Double),
            0x07 => Some(PrimitiveKind::String),
            _ => None,
        }
    }

    /// Like [`PrimitiveKind::from_byte`], rejecting unknown tags as an error
    pub fn from_tag(tag: u8) -> FedResult<Self> {
        Self::from_byte(tag)
            .ok_or_else(|| FedError::UnsupportedValueKind(format!("tag {}", tag)))
    }

    #[inline]
    pub fn to_byte(self) -> u8 {
        self as u8
    }

    /// Encoded width in bytes, `None` for variable-length kinds
    pub fn fixed_width(self) -> Option<usize> {
        match self {
            PrimitiveKind::Boolean | PrimitiveKind::UnsignedByte => Some(1),
            PrimitiveKind::Short => Some(2),
            PrimitiveKind::Int | PrimitiveKind::Float => Some(4),
            PrimitiveKind::Long | PrimitiveKind::Double => Some(8),
            PrimitiveKind::String => None,
        }
    }

    /// Type name as used by attribute registrations
    pub fn name(self) -> &'static str {
        match self {
            PrimitiveKind::Boolean => "boolean",
            PrimitiveKind::UnsignedByte => "unsignedByte",
            PrimitiveKind::Short => "short",
            PrimitiveKind::Int => "int",
            PrimitiveKind::Long => "long",
            PrimitiveKind::Float => "float",
            PrimitiveKind::Double => "double",
            PrimitiveKind::String => "string",
        }
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PrimitiveKind {
    type Err = FedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PrimitiveKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| FedError::UnsupportedValueKind(s.to_string()))
    }
}

impl TryFrom<String> for PrimitiveKind {
    type Error = FedError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<PrimitiveKind> for String {
    fn from(kind: PrimitiveKind) -> Self {
        kind.name().to_string()
    }
}

//! Primitive payload values
//!
//! Floating point variants compare and hash by bit pattern, so a decoded
//! value equals the encoded one exactly, NaN payloads included.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::PrimitiveKind;

/// A value of one of the eight primitive kinds
#[derive(Clone, Debug)]
pub enum PrimitiveValue {
    Boolean(bool),
    UnsignedByte(u8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    String(String),
}

impl PrimitiveValue {
    /// Kind of this value
    pub fn kind(&self) -> PrimitiveKind {
        match self {
            PrimitiveValue::Boolean(_) => PrimitiveKind::Boolean,
            PrimitiveValue::UnsignedByte(_) => PrimitiveKind::UnsignedByte,
            PrimitiveValue::Short(_) => PrimitiveKind::Short,
            PrimitiveValue::Int(_) => PrimitiveKind::Int,
            PrimitiveValue::Long(_) => PrimitiveKind::Long,
            PrimitiveValue::Float(_) => PrimitiveKind::Float,
            PrimitiveValue::Double(_) => PrimitiveKind::Double,
            PrimitiveValue::String(_) => PrimitiveKind::String,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            PrimitiveValue::Double(v) => Some(*v),
            PrimitiveValue::Float(v) => Some(*v as f64),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            PrimitiveValue::UnsignedByte(v) => Some(*v as i64),
            PrimitiveValue::Short(v) => Some(*v as i64),
            PrimitiveValue::Int(v) => Some(*v as i64),
            PrimitiveValue::Long(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            PrimitiveValue::String(s) => Some(s),
            _ => None,
        }
    }
}

impl PartialEq for PrimitiveValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (PrimitiveValue::Boolean(a), PrimitiveValue::Boolean(b)) => a == b,
            (PrimitiveValue::UnsignedByte(a), PrimitiveValue::UnsignedByte(b)) => a == b,
            (PrimitiveValue::Short(a), PrimitiveValue::Short(b)) => a == b,
            (PrimitiveValue::Int(a), PrimitiveValue::Int(b)) => a == b,
            (PrimitiveValue::Long(a), PrimitiveValue::Long(b)) => a == b,
            (PrimitiveValue::Float(a), PrimitiveValue::Float(b)) => a.to_bits() == b.to_bits(),
            (PrimitiveValue::Double(a), PrimitiveValue::Double(b)) => a.to_bits() == b.to_bits(),
            (PrimitiveValue::String(a), PrimitiveValue::String(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for PrimitiveValue {}

impl Hash for PrimitiveValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.kind().hash(state);
        match self {
            PrimitiveValue::Boolean(v) => v.hash(state),
            PrimitiveValue::UnsignedByte(v) => v.hash(state),
            PrimitiveValue::Short(v) => v.hash(state),
            PrimitiveValue::Int(v) => v.hash(state),
            PrimitiveValue::Long(v) => v.hash(state),
            PrimitiveValue::Float(v) => v.to_bits().hash(state),
            PrimitiveValue::Double(v) => v.to_bits().hash(state),
            PrimitiveValue::String(v) => v.hash(state),
        }
    }
}

impl fmt::Display for PrimitiveValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrimitiveValue::Boolean(v) => write!(f, "{}", v),
            PrimitiveValue::UnsignedByte(v) => write!(f, "{}ub", v),
            PrimitiveValue::Short(v) => write!(f, "{}s", v),
            PrimitiveValue::Int(v) => write!(f, "{}", v),
            PrimitiveValue::Long(v) => write!(f, "{}L", v),
            PrimitiveValue::Float(v) => write!(f, "{}f", v),
            PrimitiveValue::Double(v) => write!(f, "{:?}", v),
            PrimitiveValue::String(v) => write!(f, "{:?}", v),
        }
    }
}

impl From<bool> for PrimitiveValue {
    fn from(v: bool) -> Self {
        PrimitiveValue::Boolean(v)
    }
}

impl From<u8> for PrimitiveValue {
    fn from(v: u8) -> Self {
        PrimitiveValue::UnsignedByte(v)
    }
}

impl From<i16> for PrimitiveValue {
    fn from(v: i16) -> Self {
        PrimitiveValue::Short(v)
    }
}

impl From<i32> for PrimitiveValue {
    fn from(v: i32) -> Self {
        PrimitiveValue::Int(v)
    }
}

impl From<i64> for PrimitiveValue {
    fn from(v: i64) -> Self {
        PrimitiveValue::Long(v)
    }
}

impl From<f32> for PrimitiveValue {
    fn from(v: f32) -> Self {
        PrimitiveValue::Float(v)
    }
}

impl From<f64> for PrimitiveValue {
    fn from(v: f64) -> Self {
        PrimitiveValue::Double(v)
    }
}

impl From<String> for PrimitiveValue {
    fn from(v: String) -> Self {
        PrimitiveValue::String(v)
    }
}

impl From<&str> for PrimitiveValue {
    fn from(v: &str) -> Self {
        PrimitiveValue::String(v.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_kind_of_value() {
        assert_eq!(PrimitiveValue::from(true).kind(), PrimitiveKind::Boolean);
        assert_eq!(PrimitiveValue::from(7u8).kind(), PrimitiveKind::UnsignedByte);
        assert_eq!(PrimitiveValue::from(7i16).kind(), PrimitiveKind::Short);
        assert_eq!(PrimitiveValue::from(7i32).kind(), PrimitiveKind::Int);
        assert_eq!(PrimitiveValue::from(7i64).kind(), PrimitiveKind::Long);
        assert_eq!(PrimitiveValue::from(7.0f32).kind(), PrimitiveKind::Float);
        assert_eq!(PrimitiveValue::from(7.0f64).kind(), PrimitiveKind::Double);
        assert_eq!(PrimitiveValue::from("x").kind(), PrimitiveKind::String);
    }

    #[test]
    fn test_float_equality_is_bitwise() {
        let nan = PrimitiveValue::Double(f64::NAN);
        assert_eq!(nan, nan.clone());
        assert_ne!(PrimitiveValue::Double(0.0), PrimitiveValue::Double(-0.0));
        assert_ne!(PrimitiveValue::Int(1), PrimitiveValue::Long(1));
    }

    #[test]
    fn test_hash_consistent_with_eq() {
        let mut set = HashSet::new();
        set.insert(PrimitiveValue::Float(f32::NAN));
        set.insert(PrimitiveValue::Float(f32::NAN));
        set.insert(PrimitiveValue::Int(1));
        set.insert(PrimitiveValue::Long(1));
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_accessors() {
        assert_eq!(PrimitiveValue::Short(-3).as_i64(), Some(-3));
        assert_eq!(PrimitiveValue::Float(0.5).as_f64(), Some(0.5));
        assert_eq!(PrimitiveValue::from("hi").as_str(), Some("hi"));
        assert_eq!(PrimitiveValue::Boolean(true).as_i64(), None);
    }
}

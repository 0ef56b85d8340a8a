//! Identity types for fedwire
//!
//! Origins are 32-bit, matching the object instance handles the RTI hands
//! out for registered instances.

use std::fmt;

/// Origin identity - the participant or object instance that produced an event
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct OriginId(pub i32);

impl OriginId {
    pub const ZERO: OriginId = OriginId(0);

    #[inline]
    pub fn new(id: i32) -> Self {
        OriginId(id)
    }

    #[inline]
    pub fn get(self) -> i32 {
        self.0
    }

    #[inline]
    pub fn to_bytes(self) -> [u8; 4] {
        self.0.to_be_bytes()
    }

    #[inline]
    pub fn from_bytes(bytes: [u8; 4]) -> Self {
        OriginId(i32::from_be_bytes(bytes))
    }
}

impl From<i32> for OriginId {
    fn from(id: i32) -> Self {
        OriginId(id)
    }
}

impl fmt::Debug for OriginId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Origin({})", self.0)
    }
}

impl fmt::Display for OriginId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

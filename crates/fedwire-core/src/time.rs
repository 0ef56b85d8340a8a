//! Logical time for federation events
//!
//! Federates advance in logical (model) time, carried on the wire as an
//! IEEE-754 double. `LogicalTime` gives that double a total order and a
//! hash consistent with equality so it can key event queues:
//! - `-0.0` and `0.0` are the same instant
//! - every NaN is equal to every other NaN and sorts after `+inf`

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Sub};

/// Logical delivery time of an event
#[derive(Clone, Copy, Default)]
pub struct LogicalTime(pub f64);

impl LogicalTime {
    pub const ZERO: LogicalTime = LogicalTime(0.0);
    pub const INFINITY: LogicalTime = LogicalTime(f64::INFINITY);

    #[inline]
    pub fn new(t: f64) -> Self {
        LogicalTime(t)
    }

    #[inline]
    pub fn as_f64(self) -> f64 {
        self.0
    }

    /// Time shifted by a lookahead, as used when stamping outgoing updates
    #[inline]
    pub fn with_lookahead(self, lookahead: f64) -> Self {
        LogicalTime(self.0 + lookahead)
    }

    /// Bit pattern with zero signs and NaN payloads folded together
    #[inline]
    fn canonical_bits(self) -> u64 {
        if self.0 == 0.0 {
            0
        } else if self.0.is_nan() {
            f64::NAN.to_bits()
        } else {
            self.0.to_bits()
        }
    }

    #[inline]
    fn canonical(self) -> f64 {
        f64::from_bits(self.canonical_bits())
    }
}

impl PartialEq for LogicalTime {
    fn eq(&self, other: &Self) -> bool {
        self.canonical_bits() == other.canonical_bits()
    }
}

impl Eq for LogicalTime {}

impl Hash for LogicalTime {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical_bits().hash(state);
    }
}

impl PartialOrd for LogicalTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LogicalTime {
    fn cmp(&self, other: &Self) -> Ordering {
        self.canonical().total_cmp(&other.canonical())
    }
}

impl From<f64> for LogicalTime {
    fn from(t: f64) -> Self {
        LogicalTime(t)
    }
}

impl From<LogicalTime> for f64 {
    fn from(t: LogicalTime) -> Self {
        t.0
    }
}

impl Add<f64> for LogicalTime {
    type Output = LogicalTime;

    #[inline]
    fn add(self, rhs: f64) -> Self::Output {
        LogicalTime(self.0 + rhs)
    }
}

impl Sub<LogicalTime> for LogicalTime {
    type Output = f64;

    #[inline]
    fn sub(self, rhs: LogicalTime) -> Self::Output {
        self.0 - rhs.0
    }
}

impl fmt::Debug for LogicalTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t({})", self.0)
    }
}

impl fmt::Display for LogicalTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of(t: LogicalTime) -> u64 {
        let mut h = DefaultHasher::new();
        t.hash(&mut h);
        h.finish()
    }

    #[test]
    fn test_signed_zero_is_one_instant() {
        let pos = LogicalTime(0.0);
        let neg = LogicalTime(-0.0);
        assert_eq!(pos, neg);
        assert_eq!(hash_of(pos), hash_of(neg));
        assert_eq!(pos.cmp(&neg), Ordering::Equal);
    }

    #[test]
    fn test_nan_equal_and_last() {
        let a = LogicalTime(f64::NAN);
        let b = LogicalTime(-f64::NAN);
        assert_eq!(a, b);
        assert_eq!(hash_of(a), hash_of(b));
        assert!(a > LogicalTime::INFINITY);
    }

    #[test]
    fn test_ordering() {
        let mut times = vec![LogicalTime(2.5), LogicalTime(-1.0), LogicalTime(0.25)];
        times.sort();
        assert_eq!(times, vec![LogicalTime(-1.0), LogicalTime(0.25), LogicalTime(2.5)]);
    }

    #[test]
    fn test_lookahead() {
        let t = LogicalTime::new(1.0).with_lookahead(0.5);
        assert_eq!(t, LogicalTime(1.5));
        assert_eq!(t - LogicalTime(1.0), 0.5);
    }

    proptest! {
        #[test]
        fn eq_agrees_with_ordering(a in any::<f64>(), b in any::<f64>()) {
            let (a, b) = (LogicalTime(a), LogicalTime(b));
            prop_assert_eq!(a == b, a.cmp(&b) == Ordering::Equal);
            if a == b {
                prop_assert_eq!(hash_of(a), hash_of(b));
            }
        }
    }
}

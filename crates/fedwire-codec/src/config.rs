//! Wire configuration
//!
//! The per-attribute agreement on kind and convention, in a form that can
//! be loaded from any serde format.

use fedwire_core::PrimitiveKind;
use serde::{Deserialize, Serialize};

use crate::convention::Convention;

/// Default payload limit in bytes
pub const DEFAULT_MAX_PAYLOAD_LEN: usize = 65_536;

/// One attribute registration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeEntry {
    pub name: String,
    pub kind: PrimitiveKind,
    /// Falls back to `WireConfig::default_convention` when omitted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub convention: Option<Convention>,
}

impl AttributeEntry {
    pub fn new(name: impl Into<String>, kind: PrimitiveKind) -> Self {
        AttributeEntry {
            name: name.into(),
            kind,
            convention: None,
        }
    }

    pub fn with_convention(mut self, convention: Convention) -> Self {
        self.convention = Some(convention);
        self
    }
}

/// fedwire wire configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WireConfig {
    /// Convention for attributes that do not name one
    pub default_convention: Convention,
    /// Largest encoded payload an envelope may carry
    pub max_payload_len: usize,
    pub attributes: Vec<AttributeEntry>,
}

impl WireConfig {
    /// Convention an entry resolves to
    pub fn convention_for(&self, entry: &AttributeEntry) -> Convention {
        entry.convention.unwrap_or(self.default_convention)
    }
}

impl Default for WireConfig {
    fn default() -> Self {
        WireConfig {
            default_convention: Convention::default(),
            max_payload_len: DEFAULT_MAX_PAYLOAD_LEN,
            attributes: Vec::new(),
        }
    }
}

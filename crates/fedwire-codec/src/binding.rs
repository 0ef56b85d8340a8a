//! Attribute bindings
//!
//! A binding records the out-of-band agreement for one attribute: which
//! kind its payload holds and which convention encodes it. The table
//! turns outgoing values into envelopes and incoming envelopes into
//! originated events.

use std::collections::HashMap;

use bytes::Bytes;
use fedwire_core::{
    FedError, FedResult, LogicalTime, OriginId, OriginatedEvent, PrimitiveKind, PrimitiveValue,
};

use crate::config::{WireConfig, DEFAULT_MAX_PAYLOAD_LEN};
use crate::convention::Convention;
use crate::envelope::EventEnvelope;

/// Kind and convention agreed for one attribute
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AttributeBinding {
    pub name: String,
    pub kind: PrimitiveKind,
    pub convention: Convention,
}

impl AttributeBinding {
    pub fn new(name: impl Into<String>, kind: PrimitiveKind, convention: Convention) -> Self {
        AttributeBinding {
            name: name.into(),
            kind,
            convention,
        }
    }

    #[inline]
    pub fn encode(&self, value: &PrimitiveValue) -> FedResult<Bytes> {
        self.convention.encode(self.kind, value)
    }

    #[inline]
    pub fn decode(&self, bytes: &[u8]) -> FedResult<PrimitiveValue> {
        self.convention.decode(self.kind, bytes)
    }
}

/// Registered bindings, keyed by attribute name
#[derive(Clone, Debug)]
pub struct BindingTable {
    bindings: HashMap<String, AttributeBinding>,
    max_payload_len: usize,
}

impl BindingTable {
    pub fn new() -> Self {
        Self::with_max_payload_len(DEFAULT_MAX_PAYLOAD_LEN)
    }

    pub fn with_max_payload_len(max_payload_len: usize) -> Self {
        BindingTable {
            bindings: HashMap::new(),
            max_payload_len,
        }
    }

    /// Build a table from configuration.
    /// The payload limit must fit the envelope's i32 length prefix.
    pub fn from_config(config: &WireConfig) -> FedResult<Self> {
        let limit = i32::MAX as usize;
        if config.max_payload_len > limit {
            return Err(FedError::PayloadTooLarge {
                size: config.max_payload_len,
                limit,
            });
        }

        let mut table = Self::with_max_payload_len(config.max_payload_len);
        for entry in &config.attributes {
            let binding = AttributeBinding::new(&entry.name, entry.kind, config.convention_for(entry));
            if table.register(binding).is_some() {
                tracing::warn!("attribute {} registered twice, keeping the last entry", entry.name);
            }
        }
        Ok(table)
    }

    /// Register a binding, returning the one it replaces
    pub fn register(&mut self, binding: AttributeBinding) -> Option<AttributeBinding> {
        self.bindings.insert(binding.name.clone(), binding)
    }

    pub fn get(&self, name: &str) -> FedResult<&AttributeBinding> {
        self.bindings
            .get(name)
            .ok_or_else(|| FedError::UnknownAttribute(name.to_owned()))
    }

    #[inline]
    pub fn max_payload_len(&self) -> usize {
        self.max_payload_len
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &AttributeBinding> {
        self.bindings.values()
    }

    /// Encode an attribute update and frame it for the transport
    pub fn encode_update(
        &self,
        name: &str,
        time: LogicalTime,
        step: i32,
        source_time: f64,
        value: &PrimitiveValue,
    ) -> FedResult<EventEnvelope> {
        let binding = self.get(name)?;
        let payload = binding.encode(value)?;
        if payload.len() > self.max_payload_len {
            return Err(FedError::PayloadTooLarge {
                size: payload.len(),
                limit: self.max_payload_len,
            });
        }

        let envelope = EventEnvelope::new(time.as_f64(), step, source_time, &payload)?;
        tracing::debug!(
            "encoded {} ({}, {}) at {:?}: {} bytes",
            name,
            binding.kind,
            binding.convention,
            time,
            envelope.len()
        );
        Ok(envelope)
    }

    /// Unframe a received reflection and decode its value
    pub fn decode_reflection(
        &self,
        name: &str,
        raw: &[u8],
        origin: OriginId,
    ) -> FedResult<OriginatedEvent<PrimitiveValue>> {
        let binding = self.get(name)?;
        let result = Self::unframe(binding, raw);
        match &result {
            Ok((time, _)) => tracing::debug!("reflected {} from {} at {:?}", name, origin, time),
            Err(e) => tracing::warn!("dropping reflection of {} from {}: {}", name, origin, e),
        }
        let (time, value) = result?;
        Ok(OriginatedEvent::new(time, value, origin))
    }

    fn unframe(binding: &AttributeBinding, raw: &[u8]) -> FedResult<(LogicalTime, PrimitiveValue)> {
        let envelope = EventEnvelope::from_bytes(raw);
        let time = LogicalTime::new(envelope.logical_time()?);
        let value = binding.decode(envelope.payload()?)?;
        Ok((time, value))
    }
}

impl Default for BindingTable {
    fn default() -> Self {
        Self::new()
    }
}

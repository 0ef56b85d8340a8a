//! Loopback federation
//!
//! One publishing federate and one subscribing federate joined by a
//! [`ChaosLink`]. Updates go out as envelopes, come back as originated
//! events in delivery order, and undecodable reflections are counted
//! rather than delivered.

use fedwire_codec::{BindingTable, WireConfig};
use fedwire_core::{FedResult, LogicalTime, OriginId, OriginatedEvent, PrimitiveValue};

use crate::chaos::{ChaosConfig, ChaosLink, ChaosPacket};

/// Loopback statistics
#[derive(Clone, Debug, Default)]
pub struct LoopbackStats {
    pub updates_sent: u64,
    pub events_delivered: u64,
    pub reflections_rejected: u64,
}

/// Publisher and subscriber sharing one wire configuration
pub struct LoopbackFederation {
    publisher: BindingTable,
    subscriber: BindingTable,
    origin: OriginId,
    link: ChaosLink,
    step: i32,
    stats: LoopbackStats,
}

impl LoopbackFederation {
    pub fn new(config: &WireConfig, origin: OriginId, chaos: ChaosConfig, seed: u64) -> FedResult<Self> {
        Ok(LoopbackFederation {
            publisher: BindingTable::from_config(config)?,
            subscriber: BindingTable::from_config(config)?,
            origin,
            link: ChaosLink::new(chaos, seed),
            step: 0,
            stats: LoopbackStats::default(),
        })
    }

    /// Publish an update with the source time of the publisher's clock.
    /// Encoding failures are returned and nothing is sent.
    pub fn publish(
        &mut self,
        attribute: &str,
        time: LogicalTime,
        source_time: f64,
        value: &PrimitiveValue,
    ) -> FedResult<()> {
        let envelope = self
            .publisher
            .encode_update(attribute, time, self.step, source_time, value)?;
        self.step = self.step.wrapping_add(1);
        self.stats.updates_sent += 1;
        self.link.send(attribute, envelope.to_bytes());
        Ok(())
    }

    /// Advance the link one tick and reflect what arrives
    pub fn tick(&mut self) -> Vec<OriginatedEvent<PrimitiveValue>> {
        let packets = self.link.tick();
        self.reflect(packets)
    }

    /// Deliver everything still in flight
    pub fn drain(&mut self) -> Vec<OriginatedEvent<PrimitiveValue>> {
        let packets = self.link.flush();
        self.reflect(packets)
    }

    fn reflect(&mut self, packets: Vec<ChaosPacket>) -> Vec<OriginatedEvent<PrimitiveValue>> {
        let mut events = Vec::with_capacity(packets.len());
        for packet in packets {
            match self
                .subscriber
                .decode_reflection(&packet.attribute, &packet.data, self.origin)
            {
                Ok(event) => events.push(event),
                Err(_) => self.stats.reflections_rejected += 1,
            }
        }
        events.sort_by(OriginatedEvent::delivery_cmp);
        self.stats.events_delivered += events.len() as u64;
        events
    }

    pub fn link(&self) -> &ChaosLink {
        &self.link
    }

    pub fn stats(&self) -> &LoopbackStats {
        &self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::init_tracing;
    use fedwire_codec::{AttributeEntry, Convention};
    use fedwire_core::PrimitiveKind;

    fn config() -> WireConfig {
        WireConfig {
            attributes: vec![
                AttributeEntry::new("pitch", PrimitiveKind::Double).with_convention(Convention::MessageBuffer),
                AttributeEntry::new("armed", PrimitiveKind::Boolean),
                AttributeEntry::new("callsign", PrimitiveKind::String),
            ],
            ..WireConfig::default()
        }
    }

    #[test]
    fn test_perfect_link_delivers_everything() {
        init_tracing();
        let mut fed = LoopbackFederation::new(&config(), OriginId::new(3), ChaosConfig::perfect(), 1).unwrap();

        fed.publish("pitch", LogicalTime::new(2.0), 1.9, &PrimitiveValue::Double(0.5))
            .unwrap();
        fed.publish("armed", LogicalTime::new(1.0), 0.9, &PrimitiveValue::Boolean(true))
            .unwrap();
        fed.publish("callsign", LogicalTime::new(1.0), 0.9, &PrimitiveValue::from("UAV"))
            .unwrap();

        let events = fed.tick();
        assert_eq!(events.len(), 3);
        // Time order, whatever the send order
        assert_eq!(events[0].time(), LogicalTime::new(1.0));
        assert_eq!(events[2], OriginatedEvent::new(2.0, PrimitiveValue::Double(0.5), 3));
        assert!(events.iter().all(|e| e.origin() == OriginId::new(3)));
        assert_eq!(fed.stats().reflections_rejected, 0);
    }

    #[test]
    fn test_encode_failure_sends_nothing() {
        let mut fed = LoopbackFederation::new(&config(), OriginId::ZERO, ChaosConfig::perfect(), 1).unwrap();
        assert!(fed
            .publish("callsign", LogicalTime::ZERO, 0.0, &PrimitiveValue::from("Ärger"))
            .is_err());
        assert!(fed
            .publish("unknown", LogicalTime::ZERO, 0.0, &PrimitiveValue::Int(1))
            .is_err());
        assert_eq!(fed.stats().updates_sent, 0);
        assert_eq!(fed.link().in_flight(), 0);
    }

    #[test]
    fn test_hostile_link_never_delivers_garbage() {
        init_tracing();
        let mut fed = LoopbackFederation::new(&config(), OriginId::new(1), ChaosConfig::hostile(), 42).unwrap();

        for i in 0..200 {
            let t = LogicalTime::new(i as f64);
            fed.publish("pitch", t, i as f64, &PrimitiveValue::Double(i as f64 / 10.0))
                .unwrap();
        }
        let events = fed.drain();

        assert!(fed.stats().reflections_rejected > 0);
        assert!(events.windows(2).all(|w| w[0].time() <= w[1].time()));
        for event in &events {
            let expected = event.time().as_f64() / 10.0;
            assert_eq!(event.payload(), &PrimitiveValue::Double(expected));
        }
    }
}

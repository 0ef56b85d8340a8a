//! Chaos link for fedwire envelopes
//!
//! Simulates a hostile transport between two federates:
//! - Loss
//! - Delay (and the reordering it causes)
//! - Duplication
//! - Truncation

use bytes::Bytes;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Link chaos configuration
#[derive(Clone, Debug)]
pub struct ChaosConfig {
    /// Packet loss rate (0.0 - 1.0)
    pub loss_rate: f64,
    /// Largest delivery delay, in ticks
    pub max_delay_ticks: u32,
    /// Duplicate probability
    pub duplicate_prob: f64,
    /// Probability a packet loses a random tail
    pub truncate_prob: f64,
}

impl Default for ChaosConfig {
    fn default() -> Self {
        ChaosConfig {
            loss_rate: 0.01,
            max_delay_ticks: 2,
            duplicate_prob: 0.01,
            truncate_prob: 0.0,
        }
    }
}

impl ChaosConfig {
    /// Lossless, in-order link
    pub fn perfect() -> Self {
        ChaosConfig {
            loss_rate: 0.0,
            max_delay_ticks: 0,
            duplicate_prob: 0.0,
            truncate_prob: 0.0,
        }
    }

    pub fn poor() -> Self {
        ChaosConfig {
            loss_rate: 0.05,
            max_delay_ticks: 5,
            duplicate_prob: 0.02,
            truncate_prob: 0.02,
        }
    }

    pub fn hostile() -> Self {
        ChaosConfig {
            loss_rate: 0.15,
            max_delay_ticks: 10,
            duplicate_prob: 0.05,
            truncate_prob: 0.1,
        }
    }
}

/// Packet on the link
#[derive(Clone, Debug)]
pub struct ChaosPacket {
    /// Attribute the envelope updates
    pub attribute: String,
    pub data: Bytes,
    /// Tick on which the packet arrives
    pub deliver_at: u64,
    /// Sequence number (for tracking)
    pub seq: u64,
}

/// Link statistics
#[derive(Clone, Debug, Default)]
pub struct ChaosStats {
    pub packets_sent: u64,
    pub packets_delivered: u64,
    pub packets_lost: u64,
    pub packets_duplicated: u64,
    pub packets_truncated: u64,
}

impl ChaosStats {
    pub fn loss_rate(&self) -> f64 {
        if self.packets_sent == 0 {
            0.0
        } else {
            self.packets_lost as f64 / self.packets_sent as f64
        }
    }
}

/// Seeded chaos link
pub struct ChaosLink {
    config: ChaosConfig,
    rng: StdRng,
    in_flight: Vec<ChaosPacket>,
    current_tick: u64,
    next_seq: u64,
    stats: ChaosStats,
}

impl ChaosLink {
    pub fn new(config: ChaosConfig, seed: u64) -> Self {
        ChaosLink {
            config,
            rng: StdRng::seed_from_u64(seed),
            in_flight: Vec::new(),
            current_tick: 0,
            next_seq: 0,
            stats: ChaosStats::default(),
        }
    }

    /// Send an envelope for `attribute` into the link
    pub fn send(&mut self, attribute: &str, data: Bytes) {
        self.stats.packets_sent += 1;
        let seq = self.next_seq;
        self.next_seq += 1;

        if self.rng.gen::<f64>() < self.config.loss_rate {
            self.stats.packets_lost += 1;
            return;
        }

        let data = if !data.is_empty() && self.rng.gen::<f64>() < self.config.truncate_prob {
            self.stats.packets_truncated += 1;
            let keep = self.rng.gen_range(0..data.len());
            data.slice(..keep)
        } else {
            data
        };

        let copies = if self.rng.gen::<f64>() < self.config.duplicate_prob {
            self.stats.packets_duplicated += 1;
            2
        } else {
            1
        };
        for _ in 0..copies {
            let delay = self.rng.gen_range(0..=self.config.max_delay_ticks);
            self.in_flight.push(ChaosPacket {
                attribute: attribute.to_owned(),
                data: data.clone(),
                deliver_at: self.current_tick + u64::from(delay),
                seq,
            });
        }
    }

    /// Advance one tick and return what arrives, in arrival order
    pub fn tick(&mut self) -> Vec<ChaosPacket> {
        let now = self.current_tick;
        self.current_tick += 1;

        let (mut arrived, pending): (Vec<_>, Vec<_>) =
            self.in_flight.drain(..).partition(|p| p.deliver_at <= now);
        self.in_flight = pending;
        arrived.sort_by_key(|p| (p.deliver_at, p.seq));

        self.stats.packets_delivered += arrived.len() as u64;
        arrived
    }

    /// Tick until nothing is in flight
    pub fn flush(&mut self) -> Vec<ChaosPacket> {
        let mut delivered = Vec::new();
        while !self.in_flight.is_empty() {
            delivered.extend(self.tick());
        }
        delivered
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight.len()
    }

    pub fn stats(&self) -> &ChaosStats {
        &self.stats
    }

    pub fn current_tick(&self) -> u64 {
        self.current_tick
    }
}

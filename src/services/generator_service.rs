use chrono::{DateTime, Duration, Utc};
use lazy_static::lazy_static;

use crate::models::{ChannelSet, Transaction, TxStatus};
use crate::utils::Mulberry32;

/// 2025-01-15T09:30:00Z, the instant the newest mock row is stamped with
const BASE_EPOCH_SECONDS: i64 = 1_736_933_400;
/// Gap between consecutive mock rows
const ROW_STEP_SECONDS: i64 = 41;
/// Draws above this are errors, i.e. a 5% error rate
const ERROR_THRESHOLD: f64 = 0.95;
const AMOUNT_SCALE: f64 = 1_000_000.0;
const FIRST_TX_NUMBER: usize = 1000;

/// Seed used for the throughput chart bars
pub const THROUGHPUT_SEED: u32 = 777;
const THROUGHPUT_POINTS: usize = 24;
const THROUGHPUT_STEP_MINUTES: i64 = 5;

lazy_static! {
    /// Fixed, clock-independent base instant for every generation
    pub static ref BASE_INSTANT: DateTime<Utc> =
        DateTime::from_timestamp(BASE_EPOCH_SECONDS, 0).unwrap_or_default();
}

/// Inputs to the mock transaction generator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub seed: u32,
    pub count: usize,
    pub channels: ChannelSet,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            count: 12,
            channels: ChannelSet::Banks,
        }
    }
}

/// Generate `count` mock transactions, newest first
///
/// Each row consumes three draws in order: amount, status, channel.
pub fn generate_transactions(config: &GeneratorConfig) -> Vec<Transaction> {
    let mut rng = Mulberry32::new(config.seed);
    (0..config.count)
        .map(|i| {
            let at = *BASE_INSTANT - Duration::seconds(ROW_STEP_SECONDS * i as i64);
            let amount = (rng.next_unit() * AMOUNT_SCALE).floor() as u64;
            let status = if rng.next_unit() > ERROR_THRESHOLD {
                TxStatus::Error
            } else {
                TxStatus::Ok
            };
            let channel = config.channels.pick(rng.next_unit());

            Transaction::new(
                format!("TX-{}", FIRST_TX_NUMBER + i),
                at.format("%H:%M:%S").to_string(),
                amount,
                status,
                channel,
            )
        })
        .collect()
}

/// One bar of the throughput chart
#[derive(Debug, Clone, PartialEq)]
pub struct ThroughputPoint {
    /// "HH:MM"
    pub label: String,
    /// Transactions per second, 300..900
    pub tps: u32,
    /// Bar height in percent, 20..100
    pub height: f64,
}

/// Deterministic throughput series, oldest first, ending at the base instant
pub fn generate_throughput() -> Vec<ThroughputPoint> {
    let mut rng = Mulberry32::new(THROUGHPUT_SEED);
    (0..THROUGHPUT_POINTS)
        .map(|i| {
            let minutes_back = (THROUGHPUT_POINTS - 1 - i) as i64 * THROUGHPUT_STEP_MINUTES;
            let at = *BASE_INSTANT - Duration::minutes(minutes_back);
            let tps = (300.0 + rng.next_unit() * 600.0).floor() as u32;
            let height = 20.0 + rng.next_unit() * 80.0;
            ThroughputPoint {
                label: at.format("%H:%M").to_string(),
                tps,
                height,
            }
        })
        .collect()
}

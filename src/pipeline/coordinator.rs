//! Aftersales Coordinator - drives one simulation tick end to end
//!
//! ```text
//! simulate → record in history → classify → (findings?) → response pipeline
//! ```
//!
//! The response pipeline ONLY runs when the Sentinel raised a finding.

use std::time::Instant;

use rand::rngs::StdRng;
use rand::Rng;
use tracing::{debug, info};

use super::ResponsePipeline;
use crate::agents::SentinelAgent;
use crate::history::SensorHistory;
use crate::sensors::SignalSimulator;
use crate::types::{Baseline, Reading, TickReport};

/// Running counters for a coordinator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CoordinatorStats {
    pub ticks_processed: u64,
    pub anomalous_ticks: u64,
    pub critical_ticks: u64,
}

pub struct AftersalesCoordinator<R: Rng = StdRng> {
    simulator: SignalSimulator<R>,
    sentinel: SentinelAgent,
    pipeline: ResponsePipeline,
    /// Rolling window of simulated readings
    history: SensorHistory,
    stats: CoordinatorStats,
}

impl<R: Rng> AftersalesCoordinator<R> {
    pub fn new(simulator: SignalSimulator<R>, pipeline: ResponsePipeline) -> Self {
        info!(backend = pipeline.backend_name(), "Aftersales coordinator initialized");
        Self {
            simulator,
            sentinel: SentinelAgent,
            pipeline,
            history: SensorHistory::default(),
            stats: CoordinatorStats::default(),
        }
    }

    #[must_use]
    pub fn with_history(mut self, history: SensorHistory) -> Self {
        self.history = history;
        self
    }

    /// Simulate a reading from `baseline` and process it
    pub async fn tick(&mut self, baseline: &Baseline, noise_level: f64) -> TickReport {
        let reading = self.simulator.simulate(baseline, noise_level);
        self.process(reading).await
    }

    /// Record, classify and (when anomalous) respond to one reading
    pub async fn process(&mut self, reading: Reading) -> TickReport {
        let start = Instant::now();
        self.history.push(reading);
        self.stats.ticks_processed += 1;

        let verdict = self.sentinel.classify(&reading);
        if verdict.is_anomalous() {
            self.stats.anomalous_ticks += 1;
        }
        if verdict.is_critical {
            self.stats.critical_ticks += 1;
        }

        let response = self.pipeline.respond(&reading, &verdict).await;

        debug!(
            tick = self.stats.ticks_processed,
            findings = verdict.findings.len(),
            responded = response.is_some(),
            latency_ms = start.elapsed().as_millis(),
            "Tick processed"
        );

        TickReport {
            reading,
            verdict,
            response,
        }
    }

    pub fn history(&self) -> &SensorHistory {
        &self.history
    }

    pub fn stats(&self) -> CoordinatorStats {
        self.stats
    }

    pub fn pipeline(&self) -> &ResponsePipeline {
        &self.pipeline
    }
}

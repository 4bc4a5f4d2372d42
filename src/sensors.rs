//! Signal Simulator - noisy vehicle telemetry from baseline values
//!
//! Each reading perturbs the baseline with zero-mean Gaussian noise:
//!
//! | Signal | Noise stddev | Floor |
//! |---|---|---|
//! | temperature | `noise_level` | 50 °C |
//! | vibration | `noise_level × 0.1` | 0 G |
//! | voltage | `noise_level × 0.05` | 8 V |
//!
//! The RNG is owned by the simulator so tests can seed it.

use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};

use crate::config::SimulationConfig;
use crate::types::{simulator_floors, Baseline, Reading};

/// Noise model scale factors, relative to the temperature noise level
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoiseModel {
    pub vibration_factor: f64,
    pub voltage_factor: f64,
}

impl Default for NoiseModel {
    fn default() -> Self {
        let sim = SimulationConfig::default();
        Self {
            vibration_factor: sim.vibration_noise_factor,
            voltage_factor: sim.voltage_noise_factor,
        }
    }
}

impl From<&SimulationConfig> for NoiseModel {
    fn from(config: &SimulationConfig) -> Self {
        Self {
            vibration_factor: config.vibration_noise_factor,
            voltage_factor: config.voltage_noise_factor,
        }
    }
}

/// Gaussian telemetry simulator with an injectable random source
pub struct SignalSimulator<R: Rng = StdRng> {
    rng: R,
    noise: NoiseModel,
}

impl SignalSimulator<StdRng> {
    /// Simulator seeded from OS entropy
    pub fn from_entropy() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Reproducible simulator
    pub fn from_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> SignalSimulator<R> {
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng,
            noise: NoiseModel::default(),
        }
    }

    #[must_use]
    pub fn with_noise_model(mut self, noise: NoiseModel) -> Self {
        self.noise = noise;
        self
    }

    pub fn noise_model(&self) -> NoiseModel {
        self.noise
    }

    /// Produce a reading stamped with the current time
    pub fn simulate(&mut self, baseline: &Baseline, noise_level: f64) -> Reading {
        self.simulate_at(baseline, noise_level, Utc::now())
    }

    /// Produce a reading with an explicit timestamp
    pub fn simulate_at(
        &mut self,
        baseline: &Baseline,
        noise_level: f64,
        timestamp: DateTime<Utc>,
    ) -> Reading {
        let sigma = sanitize_noise(noise_level);

        let temperature = (baseline.temperature + self.sample(sigma))
            .max(simulator_floors::TEMPERATURE_MIN);
        let vibration = (baseline.vibration + self.sample(sigma * self.noise.vibration_factor))
            .max(simulator_floors::VIBRATION_MIN);
        let voltage = (baseline.voltage + self.sample(sigma * self.noise.voltage_factor))
            .max(simulator_floors::VOLTAGE_MIN);

        Reading::new(temperature, vibration, voltage, timestamp)
    }

    /// Draw one zero-mean sample. A degenerate stddev yields no noise.
    fn sample(&mut self, std_dev: f64) -> f64 {
        if std_dev <= 0.0 {
            return 0.0;
        }
        match Normal::new(0.0, std_dev) {
            Ok(dist) => dist.sample(&mut self.rng),
            Err(e) => {
                tracing::warn!(std_dev, error = %e, "Invalid noise distribution, using zero noise");
                0.0
            }
        }
    }
}

/// Clamp a caller-supplied noise level to something `Normal` accepts
fn sanitize_noise(noise_level: f64) -> f64 {
    if noise_level.is_finite() && noise_level >= 0.0 {
        noise_level
    } else {
        tracing::warn!(noise_level, "Noise level must be finite and non-negative, using zero noise");
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Preset;

    #[test]
    fn test_zero_noise_reproduces_baseline() {
        let mut sim = SignalSimulator::from_seed(7);
        let baseline = Baseline::new(80.0, 3.0, 12.6);
        let reading = sim.simulate(&baseline, 0.0);
        assert_eq!(reading.temperature, 80.0);
        assert_eq!(reading.vibration, 3.0);
        assert_eq!(reading.voltage, 12.6);
    }

    #[test]
    fn test_same_seed_same_readings() {
        let ts = Utc::now();
        let baseline = Preset::Warning.baseline();
        let mut a = SignalSimulator::from_seed(42);
        let mut b = SignalSimulator::from_seed(42);
        for _ in 0..20 {
            assert_eq!(a.simulate_at(&baseline, 2.0, ts), b.simulate_at(&baseline, 2.0, ts));
        }
    }

    #[test]
    fn test_floors_are_respected() {
        let mut sim = SignalSimulator::from_seed(3);
        let baseline = Baseline::new(0.0, -5.0, 0.0);
        for _ in 0..100 {
            let r = sim.simulate(&baseline, 5.0);
            assert!(r.temperature >= 50.0);
            assert!(r.vibration >= 0.0);
            assert!(r.voltage >= 8.0);
        }
    }

    #[test]
    fn test_invalid_noise_level_is_treated_as_zero() {
        let mut sim = SignalSimulator::from_seed(1);
        let baseline = Preset::Healthy.baseline();
        for noise in [-1.0, f64::NAN, f64::INFINITY] {
            let r = sim.simulate(&baseline, noise);
            assert_eq!(r.temperature, baseline.temperature);
            assert_eq!(r.vibration, baseline.vibration);
            assert_eq!(r.voltage, baseline.voltage);
        }
    }

    #[test]
    fn test_noise_scale_per_signal() {
        // Temperature noise should dwarf voltage noise (ratio 20:1)
        let mut sim = SignalSimulator::from_seed(11);
        let baseline = Baseline::new(90.0, 4.0, 12.5);
        let n = 2_000;
        let (mut temp_sq, mut volt_sq) = (0.0, 0.0);
        for _ in 0..n {
            let r = sim.simulate(&baseline, 2.0);
            temp_sq += (r.temperature - baseline.temperature).powi(2);
            volt_sq += (r.voltage - baseline.voltage).powi(2);
        }
        let temp_sd = (temp_sq / n as f64).sqrt();
        let volt_sd = (volt_sq / n as f64).sqrt();
        assert!((temp_sd - 2.0).abs() < 0.2, "temp sd {temp_sd}");
        assert!((volt_sd - 0.1).abs() < 0.02, "volt sd {volt_sd}");
    }
}

//! Sensor History - bounded rolling buffer of recent readings
//!
//! Oldest readings are evicted once the buffer reaches capacity.

use std::collections::VecDeque;

use crate::config::defaults::{HISTORY_BUFFER_SIZE, RAW_DATA_ROWS};
use crate::types::Reading;

#[derive(Debug, Clone)]
pub struct SensorHistory {
    readings: VecDeque<Reading>,
    capacity: usize,
}

impl Default for SensorHistory {
    fn default() -> Self {
        Self::new(HISTORY_BUFFER_SIZE)
    }
}

impl SensorHistory {
    /// Buffer holding at most `capacity` readings (minimum 1)
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            readings: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, reading: Reading) {
        if self.readings.len() == self.capacity {
            self.readings.pop_front();
        }
        self.readings.push_back(reading);
    }

    /// Up to `n` most recent readings, oldest first
    pub fn recent(&self, n: usize) -> impl Iterator<Item = &Reading> {
        self.readings.iter().skip(self.readings.len().saturating_sub(n))
    }

    /// The raw-data view shown alongside each tick
    pub fn raw_rows(&self) -> impl Iterator<Item = &Reading> {
        self.recent(RAW_DATA_ROWS)
    }

    pub fn latest(&self) -> Option<&Reading> {
        self.readings.back()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Reading> {
        self.readings.iter()
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.readings.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading(temperature: f64) -> Reading {
        Reading::now(temperature, 2.0, 13.2)
    }

    #[test]
    fn test_evicts_oldest_at_capacity() {
        let mut history = SensorHistory::new(3);
        for t in [70.0, 71.0, 72.0, 73.0] {
            history.push(reading(t));
        }
        assert_eq!(history.len(), 3);
        let temps: Vec<f64> = history.iter().map(|r| r.temperature).collect();
        assert_eq!(temps, vec![71.0, 72.0, 73.0]);
        assert_eq!(history.latest().map(|r| r.temperature), Some(73.0));
    }

    #[test]
    fn test_recent_returns_tail_in_order() {
        let mut history = SensorHistory::default();
        for i in 0..15 {
            history.push(reading(60.0 + f64::from(i)));
        }
        let tail: Vec<f64> = history.raw_rows().map(|r| r.temperature).collect();
        assert_eq!(tail.len(), 10);
        assert_eq!(tail.first(), Some(&65.0));
        assert_eq!(tail.last(), Some(&74.0));
        assert_eq!(history.recent(100).count(), 15);
    }

    #[test]
    fn test_zero_capacity_is_clamped() {
        let mut history = SensorHistory::new(0);
        history.push(reading(70.0));
        history.push(reading(80.0));
        assert_eq!(history.capacity(), 1);
        assert_eq!(history.len(), 1);
        history.clear();
        assert!(history.is_empty());
    }
}

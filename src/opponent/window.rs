//! Fixed-capacity window of boolean observations.

use std::collections::VecDeque;

/// Most recent `capacity` observations; the oldest is evicted on insert.
#[derive(Debug, Clone)]
pub struct SlidingWindow {
    values: VecDeque<bool>,
    capacity: usize,
}

impl SlidingWindow {
    /// Create an empty window. A zero capacity is raised to 1.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self { values: VecDeque::with_capacity(capacity), capacity }
    }

    /// Record an observation.
    pub fn push(&mut self, value: bool) {
        if self.values.len() == self.capacity {
            self.values.pop_front();
        }
        self.values.push_back(value);
    }

    /// Number of observations held.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if nothing has been observed.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Maximum number of observations held.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Fraction of `true` observations, `None` when empty.
    pub fn rate(&self) -> Option<f64> {
        if self.values.is_empty() {
            return None;
        }
        let hits = self.values.iter().filter(|&&v| v).count();
        Some(hits as f64 / self.values.len() as f64)
    }

    /// Fraction of `true` observations, or `default` when empty.
    pub fn rate_or(&self, default: f64) -> f64 {
        self.rate().unwrap_or(default)
    }
}

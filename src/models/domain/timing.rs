use std::{collections::BTreeMap, fmt, time::Duration};

use serde::{Serialize, Serializer};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Stage {
    Search,
    Fetch,
    Inference,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Search => "search",
            Stage::Fetch => "fetch",
            Stage::Inference => "inference",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Elapsed milliseconds per pipeline stage. Recording the same stage twice
/// adds to the existing value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TimingMetrics {
    stages: BTreeMap<Stage, f64>,
}

impl TimingMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, stage: Stage, elapsed_ms: f64) {
        let elapsed_ms = if elapsed_ms.is_finite() {
            elapsed_ms.max(0.0)
        } else {
            0.0
        };
        *self.stages.entry(stage).or_insert(0.0) += elapsed_ms;
    }

    pub fn get(&self, stage: Stage) -> Option<f64> {
        self.stages.get(&stage).copied()
    }

    pub fn total_ms(&self) -> f64 {
        self.stages.values().sum()
    }
}

impl Serialize for TimingMetrics {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.stages.iter().map(|(k, v)| (k.as_str(), v)))
    }
}

impl fmt::Display for TimingMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .stages
            .iter()
            .map(|(stage, ms)| format!("{}_ms={}", stage, round_ms(*ms)))
            .collect();
        write!(f, "{}", parts.join(" "))
    }
}

pub fn elapsed_ms(elapsed: Duration) -> f64 {
    elapsed.as_secs_f64() * 1000.0
}

/// Two-decimal rounding for log output.
pub fn round_ms(ms: f64) -> f64 {
    (ms * 100.0).round() / 100.0
}

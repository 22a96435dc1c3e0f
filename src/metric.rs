use serde::{Serialize, Deserialize};
use chrono::{DateTime, Utc};
use std::collections::VecDeque;
use tokio::sync::Mutex;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MetricKind {
    Scheduled,
    OneShot,
}

impl std::fmt::Display for MetricKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Scheduled => write!(f,"Scheduled"),
            Self::OneShot => write!(f,"OneShot"),
        }
    }
}

/// One recorded queue run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricData {
    pub queue_id: u64,
    pub queue_name: String,
    pub kind: MetricKind,
    pub success: bool,
    pub tasks_executed: usize,
    pub tasks_failed: usize,
    pub execution_time_ms: u64,
    pub timestamp: DateTime<Utc>
}

#[derive(Debug, Clone, Default)]
/// Represents the conditions used for filtering the run history.
///
/// # Fields
///
/// - `kind`: (Optional) Only runs of this kind.
/// - `queue_id`: (Optional) Only runs of this queue.
/// - `limit`: (Optional) Maximum number of records returned, newest first.
pub struct MetricListConditions {
    pub kind: Option<MetricKind>,
    pub queue_id: Option<u64>,
    pub limit: Option<usize>,
}

/// Bounded in-memory run history. The oldest record is evicted first.
#[derive(Debug)]
pub struct Metric {
    records: Mutex<VecDeque<MetricData>>,
    capacity: usize,
}

impl Default for Metric {
    fn default() -> Self {
        Self::new(500)
    }
}

impl Metric {

    pub fn new(capacity: usize) -> Self {
        Self {
            records: Mutex::new(VecDeque::with_capacity(capacity.min(1024))),
            capacity: capacity.max(1),
        }
    }

    pub async fn create(&self, data: MetricData) {
        let mut records = self.records.lock().await;
        if records.len() >= self.capacity {
            records.pop_front();
        }
        records.push_back(data);
    }

    pub async fn list(&self, conditions: MetricListConditions) -> Vec<MetricData> {
        let records = self.records.lock().await;
        records.iter()
            .rev()
            .filter(|item| conditions.kind.map_or(true, |kind| item.kind == kind))
            .filter(|item| conditions.queue_id.map_or(true, |id| item.queue_id == id))
            .take(conditions.limit.unwrap_or(usize::MAX))
            .cloned()
            .collect()
    }

    pub async fn purge(&self) -> u64 {
        let mut records = self.records.lock().await;
        let total: u64 = records.len() as u64;
        records.clear();
        total
    }
}

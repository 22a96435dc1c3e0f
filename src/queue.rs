use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QueueState {
    Stopped,
    Paused,
    Error,
    Running,
    Locked,
}

impl std::fmt::Display for QueueState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Stopped => write!(f,"Stopped"),
            Self::Paused => write!(f,"Paused"),
            Self::Error => write!(f,"Error"),
            Self::Running => write!(f,"Running"),
            Self::Locked => write!(f,"Locked"),
        }
    }
}

/// What a run does when a task's resources are already held by someone else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum LockStrategy {
    /// Wait for the resources, then run the task.
    #[default]
    PauseOnLock,
    /// Skip the task and move on to the next one.
    SkipTask,
}

impl std::fmt::Display for LockStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PauseOnLock => write!(f,"PauseOnLock"),
            Self::SkipTask => write!(f,"SkipTask"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// A named, ordered list of task references with its own cron schedule.
///
/// # Fields
///
/// - `id`: Stable identifier used by the engine's schedule table and the one-shot entrypoint.
/// - `name`: Human readable label used in logs and notifications.
/// - `task_ids`: Ordered task identifiers. The order is the execution order. Ids may point at tasks that no longer exist.
/// - `schedule`: Cron expression, 5, 6 or 7 fields. See [`crate::cron_schedule::CronSchedule`].
/// - `is_active`: Whether the queue is picked up by the bootstrap/restart sequence. Inactive queues can still be executed on demand.
/// - `state`: Last known state as persisted by the store. The engine keeps its own live status, see [`QueueStatus`].
/// - `current_task_name`: Last active task label as persisted by the store.
/// - `lock_strategy`: Policy applied when a task's resources are busy. Default: PauseOnLock
pub struct Queue {
    pub id: u64,
    pub name: String,
    pub task_ids: Vec<u64>,
    pub schedule: String,
    pub is_active: bool,
    pub state: QueueState,
    pub current_task_name: Option<String>,
    pub lock_strategy: LockStrategy,
}

impl Default for Queue {
    fn default() -> Self {
        Self {
            id: 0,
            name: String::new(),
            task_ids: Vec::new(),
            schedule: "0 * * * *".to_string(),
            is_active: true,
            state: QueueState::Stopped,
            current_task_name: None,
            lock_strategy: LockStrategy::default(),
        }
    }
}

impl Queue {
    pub fn new(id: u64, name: &str, schedule: &str, task_ids: Vec<u64>) -> Self {
        Self {
            id,
            name: name.to_string(),
            schedule: schedule.to_string(),
            task_ids,
            ..Default::default()
        }
    }
}

/// Live, engine-side status of a queue. Never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueueStatus {
    pub state: QueueState,
    pub current_task_name: Option<String>,
    pub last_run: Option<DateTime<Utc>>,
}

impl Default for QueueStatus {
    fn default() -> Self {
        Self {
            state: QueueState::Stopped,
            current_task_name: None,
            last_run: None,
        }
    }
}

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use crate::lock::ResourceLocks;
use crate::scratchpad::Scratchpad;
use crate::session::{Session, SessionPool};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
/// A unit of work identified by an execution type and an opaque payload.
///
/// # Fields
///
/// - `id`: Stable identifier referenced by [`crate::queue::Queue::task_ids`].
/// - `name`: Human readable label used in logs and in the queue status.
/// - `exe_type`: Selects the processor registered in the [`crate::registry::ProcessorRegistry`].
/// - `payload`: Processor defined encoding, usually JSON.
/// - `dependencies`: Other task ids. Informational only, the engine never reorders by them.
pub struct Task {
    pub id: u64,
    pub name: String,
    pub exe_type: String,
    pub payload: String,
    #[serde(default)]
    pub dependencies: Vec<u64>,
}

impl Task {
    pub fn new(id: u64, name: &str, exe_type: &str, payload: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            exe_type: exe_type.to_string(),
            payload: payload.to_string(),
            dependencies: Vec::new(),
        }
    }

    /// Decodes the payload as JSON into `T`.
    pub fn payload_json<T: DeserializeOwned>(&self) -> Result<T,String> {
        match serde_json::from_str::<T>(&self.payload) {
            Ok(value) => Ok(value),
            Err(error) => Err(format!("invalid payload for task {} ({}): {}",self.id,self.name,error))
        }
    }
}

/// What a processor can reach besides its task and the scratchpad.
pub struct TaskContext<'a> {
    pub sessions: &'a SessionPool,
    pub locks: &'a ResourceLocks,
}

impl<'a> TaskContext<'a> {
    /// Looks up a named session, `None` meaning the default one.
    pub async fn session(&self, name: Option<&str>) -> Option<Arc<dyn Session>> {
        self.sessions.get(name).await
    }

    /// Same as [`TaskContext::session`] but turns a missing session into the task's error.
    pub async fn require_session(&self, name: Option<&str>) -> Result<Arc<dyn Session>,String> {
        match self.sessions.get(name).await {
            Some(session) => Ok(session),
            None => Err(format!("session {} is not available",name.unwrap_or(crate::session::DEFAULT_SESSION)))
        }
    }
}

/// The pluggable executor registered for one task execution type.
///
/// Resources named by `blocked_resources` are held by the engine for the whole
/// `execute` call and released on every exit path, so implementations only need
/// to return an error message when something goes wrong.
#[async_trait]
pub trait TaskProcessor: Send + Sync {
    fn name(&self) -> &str;
    fn description(&self) -> &str;
    fn blocked_resources(&self) -> Vec<String> {
        Vec::new()
    }
    async fn execute(&self, task: &Task, scratchpad: &mut Scratchpad, context: &TaskContext<'_>) -> Result<(),String>;
}

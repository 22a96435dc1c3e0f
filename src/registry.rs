use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;
use crate::lock::ResourceLocks;
use crate::session::{Session, SessionPool};
use crate::task::{TaskContext, TaskProcessor};

/// One row of [`ProcessorRegistry::describe`].
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessorInfo {
    pub exe_type: String,
    pub name: String,
    pub description: String,
    pub blocked_resources: Vec<String>,
}

/// Maps task execution types to processors and owns the session pool and
/// the resource lock coordinator processors share.
///
/// Lookups never fail loudly: a missing processor or session is reported as `None`.
#[derive(Default)]
pub struct ProcessorRegistry {
    items: RwLock<HashMap<String, Arc<dyn TaskProcessor>>>,
    sessions: SessionPool,
    locks: ResourceLocks,
}

impl std::fmt::Debug for ProcessorRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProcessorRegistry")
            .field("sessions",&self.sessions)
            .field("locks",&self.locks)
            .finish_non_exhaustive()
    }
}

impl ProcessorRegistry {

    pub async fn new() -> Self {
        Self::default()
    }

    /// Associates `exe_type` with `processor`, replacing any previous entry.
    pub async fn register(&self, exe_type: &str, processor: Arc<dyn TaskProcessor>) -> bool {
        info!("registered processor {} for {}",processor.name(),exe_type);
        self.items.write().await.insert(exe_type.to_string(), processor);
        true
    }

    /// Swaps the whole processor table for `processors`.
    pub async fn register_all(&self, processors: HashMap<String, Arc<dyn TaskProcessor>>) -> usize {
        let total: usize = processors.len();
        *self.items.write().await = processors;
        info!("processor table replaced with {} entries",total);
        total
    }

    pub async fn get_processor(&self, exe_type: &str) -> Option<Arc<dyn TaskProcessor>> {
        self.items.read().await.get(exe_type).cloned()
    }

    pub async fn describe(&self) -> Vec<ProcessorInfo> {
        let mut items: Vec<ProcessorInfo> = self.items.read().await
            .iter()
            .map(|(exe_type, processor)| ProcessorInfo {
                exe_type: exe_type.clone(),
                name: processor.name().to_string(),
                description: processor.description().to_string(),
                blocked_resources: processor.blocked_resources(),
            })
            .collect();
        items.sort_by(|a, b| a.exe_type.cmp(&b.exe_type));
        items
    }

    pub async fn set_session(&self, name: Option<&str>, handle: Arc<dyn Session>) -> Option<Arc<dyn Session>> {
        self.sessions.set(name, handle).await
    }

    pub async fn get_session(&self, name: Option<&str>) -> Option<Arc<dyn Session>> {
        self.sessions.get(name).await
    }

    pub fn sessions(&self) -> &SessionPool {
        &self.sessions
    }

    pub fn locks(&self) -> &ResourceLocks {
        &self.locks
    }

    pub fn acquire_lock(&self, name: &str) -> bool {
        self.locks.acquire_lock(name)
    }

    pub fn release_lock(&self, name: &str) -> bool {
        self.locks.release_lock(name)
    }

    pub fn is_locked(&self, name: &str) -> bool {
        self.locks.is_locked(name)
    }

    pub fn context(&self) -> TaskContext<'_> {
        TaskContext {
            sessions: &self.sessions,
            locks: &self.locks,
        }
    }
}

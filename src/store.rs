use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use crate::queue::Queue;
use crate::task::Task;

#[async_trait]
pub trait QueueStore: Send + Sync {
    /// Queues with `is_active` set, the ones picked up by bootstrap and restart.
    async fn find_active(&self) -> Result<Vec<Queue>,String>;
    async fn find_all(&self) -> Result<Vec<Queue>,String>;
}

#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Tasks matching `ids`, in any order. Unknown ids are simply absent.
    async fn find_by_ids(&self, ids: &[u64]) -> Result<Vec<Task>,String>;
}

/// In-process store for queues and tasks, ordered by id.
#[derive(Debug, Default)]
pub struct MemoryStore {
    queues: RwLock<HashMap<u64, Queue>>,
    tasks: RwLock<HashMap<u64, Task>>,
}

impl MemoryStore {

    pub async fn new() -> Self {
        Self::default()
    }

    pub async fn upsert_queue(&self, queue: Queue) -> Option<Queue> {
        self.queues.write().await.insert(queue.id, queue)
    }

    pub async fn remove_queue(&self, id: u64) -> Option<Queue> {
        self.queues.write().await.remove(&id)
    }

    pub async fn upsert_task(&self, task: Task) -> Option<Task> {
        self.tasks.write().await.insert(task.id, task)
    }

    pub async fn remove_task(&self, id: u64) -> Option<Task> {
        self.tasks.write().await.remove(&id)
    }

    pub async fn set_active(&self, id: u64, is_active: bool) -> Result<Queue,String> {
        match self.queues.write().await.get_mut(&id) {
            Some(queue) => {
                queue.is_active = is_active;
                Ok(queue.clone())
            }
            None => Err(format!("queue {} not found",id))
        }
    }

    pub async fn purge(&self) -> u64 {
        let mut queues = self.queues.write().await;
        let mut tasks = self.tasks.write().await;
        let total: u64 = (queues.len() + tasks.len()) as u64;
        queues.clear();
        tasks.clear();
        total
    }
}

#[async_trait]
impl QueueStore for MemoryStore {
    async fn find_active(&self) -> Result<Vec<Queue>,String> {
        let mut queues: Vec<Queue> = self.queues.read().await
            .values()
            .filter(|queue| queue.is_active)
            .cloned()
            .collect();
        queues.sort_by_key(|queue| queue.id);
        Ok(queues)
    }

    async fn find_all(&self) -> Result<Vec<Queue>,String> {
        let mut queues: Vec<Queue> = self.queues.read().await.values().cloned().collect();
        queues.sort_by_key(|queue| queue.id);
        Ok(queues)
    }
}

#[async_trait]
impl TaskStore for MemoryStore {
    async fn find_by_ids(&self, ids: &[u64]) -> Result<Vec<Task>,String> {
        let tasks = self.tasks.read().await;
        let mut found: Vec<Task> = ids.iter()
            .filter_map(|id| tasks.get(id))
            .cloned()
            .collect();
        found.sort_by_key(|task| task.id);
        found.dedup_by_key(|task| task.id);
        Ok(found)
    }
}

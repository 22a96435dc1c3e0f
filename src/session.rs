use async_trait::async_trait;
use std::any::Any;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use crate::config::SessionConfig;

pub const DEFAULT_SESSION: &str = "default";

/// Long-lived automation handle (a browser, typically) shared by processors.
#[async_trait]
pub trait Session: Send + Sync {
    fn id(&self) -> &str;
    async fn close(&self) -> Result<(),String>;
    /// Lets processors downcast to the concrete handle they know how to drive.
    fn as_any(&self) -> &dyn Any;
}

/// External connect call used by the bootstrap/restart sequence.
#[async_trait]
pub trait SessionProvider: Send + Sync {
    async fn open(&self, config: &SessionConfig) -> Result<Arc<dyn Session>,String>;
}

/// Named session handles. `None` and `"default"` address the same slot.
#[derive(Default)]
pub struct SessionPool {
    items: RwLock<HashMap<String, Arc<dyn Session>>>
}

impl std::fmt::Debug for SessionPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionPool").finish_non_exhaustive()
    }
}

fn slot(name: Option<&str>) -> String {
    name.unwrap_or(DEFAULT_SESSION).to_string()
}

impl SessionPool {

    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `handle` under `name`, returning the handle it replaced.
    pub async fn set(&self, name: Option<&str>, handle: Arc<dyn Session>) -> Option<Arc<dyn Session>> {
        self.items.write().await.insert(slot(name), handle)
    }

    pub async fn get(&self, name: Option<&str>) -> Option<Arc<dyn Session>> {
        self.items.read().await.get(&slot(name)).cloned()
    }

    pub async fn take(&self, name: Option<&str>) -> Option<Arc<dyn Session>> {
        self.items.write().await.remove(&slot(name))
    }

    pub async fn drain(&self) -> Vec<(String, Arc<dyn Session>)> {
        self.items.write().await.drain().collect()
    }

    pub async fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.items.read().await.keys().cloned().collect();
        names.sort();
        names
    }
}

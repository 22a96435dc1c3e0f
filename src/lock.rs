use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::OwnedMutexGuard;
use tracing::debug;

type Gate = Arc<tokio::sync::Mutex<()>>;

fn guarded<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Tracks which named resources are in use.
///
/// Every resource name owns one async gate. The engine holds gates through a
/// [`ResourceGuard`] for the duration of a task, processors can still take a
/// gate cooperatively with [`ResourceLocks::acquire_lock`]. Both paths contend
/// on the same gate, so a resource is never used by two holders at once.
#[derive(Debug, Default)]
pub struct ResourceLocks {
    gates: Mutex<HashMap<String, Gate>>,
    cooperative: Mutex<HashMap<String, OwnedMutexGuard<()>>>,
}

/// Holds a set of resource gates; dropping it releases all of them.
#[derive(Debug)]
pub struct ResourceGuard {
    names: Vec<String>,
    _guards: Vec<OwnedMutexGuard<()>>,
}

impl ResourceGuard {
    pub fn names(&self) -> &[String] {
        &self.names
    }
}

impl Drop for ResourceGuard {
    fn drop(&mut self) {
        if !self.names.is_empty() {
            debug!("released resource(s) {}",self.names.join(", "));
        }
    }
}

impl ResourceLocks {

    pub fn new() -> Self {
        Self::default()
    }

    fn gate(&self, name: &str) -> Gate {
        guarded(&self.gates)
            .entry(name.to_string())
            .or_insert_with(|| Arc::new(tokio::sync::Mutex::new(())))
            .clone()
    }

    /// Sorted and de-duplicated so that every caller takes gates in the same order.
    fn normalize(names: &[String]) -> Vec<String> {
        let mut names: Vec<String> = names.to_vec();
        names.sort();
        names.dedup();
        names
    }

    /// Cooperatively marks `name` as held. Returns `false` when it was already held.
    pub fn acquire_lock(&self, name: &str) -> bool {
        match self.gate(name).try_lock_owned() {
            Ok(guard) => {
                guarded(&self.cooperative).insert(name.to_string(), guard);
                debug!("resource {} acquired",name);
                true
            }
            Err(_) => false
        }
    }

    /// Releases a cooperative hold on `name`. Returns `false` when there was nothing to release.
    pub fn release_lock(&self, name: &str) -> bool {
        let released: bool = guarded(&self.cooperative).remove(name).is_some();
        if released {
            debug!("resource {} released",name);
        }
        released
    }

    pub fn is_locked(&self, name: &str) -> bool {
        match guarded(&self.gates).get(name) {
            Some(gate) => gate.try_lock().is_err(),
            None => false
        }
    }

    /// Names of all resources currently held, sorted.
    pub fn locked(&self) -> Vec<String> {
        let mut names: Vec<String> = guarded(&self.gates)
            .iter()
            .filter(|(_, gate)| gate.try_lock().is_err())
            .map(|(name, _)| name.clone())
            .collect();
        names.sort();
        names
    }

    /// Waits until every resource in `names` is free and takes them all.
    pub async fn lock(&self, names: &[String]) -> ResourceGuard {
        let names: Vec<String> = Self::normalize(names);
        let mut guards: Vec<OwnedMutexGuard<()>> = Vec::with_capacity(names.len());
        for name in names.iter() {
            guards.push(self.gate(name).lock_owned().await);
        }
        ResourceGuard { names, _guards: guards }
    }

    /// Takes every resource in `names` or none of them.
    pub fn try_lock(&self, names: &[String]) -> Option<ResourceGuard> {
        let names: Vec<String> = Self::normalize(names);
        let mut guards: Vec<OwnedMutexGuard<()>> = Vec::with_capacity(names.len());
        for name in names.iter() {
            match self.gate(name).try_lock_owned() {
                Ok(guard) => guards.push(guard),
                Err(_) => return None
            }
        }
        Some(ResourceGuard { names, _guards: guards })
    }
}

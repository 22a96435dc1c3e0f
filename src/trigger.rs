use chrono::{DateTime, Local};
use futures::future::BoxFuture;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::task::JoinHandle;
use tracing::{debug, warn};
use uuid::Uuid;
use crate::cron_schedule::CronSchedule;

/// Called on every fire. Each returned future runs as its own tokio task.
pub type FireCallback = Arc<dyn Fn() -> BoxFuture<'static, ()> + Send + Sync>;

/// Capability that turns a cron expression and a callback into a running trigger.
pub trait Trigger: Send + Sync {
    fn schedule(&self, cron: &CronSchedule, callback: FireCallback) -> Result<TriggerHandle,String>;
}

/// A running trigger. Stopping it prevents future fires but never interrupts a
/// fire already in progress. Dropping the handle stops the trigger.
#[derive(Debug)]
pub struct TriggerHandle {
    id: Uuid,
    stopped: Arc<AtomicBool>,
    task: Option<JoinHandle<()>>,
}

impl TriggerHandle {

    /// Wraps an externally driven trigger. `stopped` is flipped by [`TriggerHandle::stop`].
    pub fn new(stopped: Arc<AtomicBool>, task: Option<JoinHandle<()>>) -> Self {
        Self {
            id: Uuid::new_v4(),
            stopped,
            task,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn stop(&self) {
        self.stopped.store(true, Ordering::SeqCst);
        if let Some(task) = &self.task {
            task.abort();
        }
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::SeqCst)
    }
}

impl Drop for TriggerHandle {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Tokio backed trigger: one lightweight task per schedule that sleeps until the next fire.
#[derive(Debug, Default, Clone)]
pub struct CronTrigger;

impl CronTrigger {
    pub fn new() -> Self {
        Self
    }
}

impl Trigger for CronTrigger {
    fn schedule(&self, cron: &CronSchedule, callback: FireCallback) -> Result<TriggerHandle,String> {
        let runtime: tokio::runtime::Handle = match tokio::runtime::Handle::try_current() {
            Ok(runtime) => runtime,
            Err(error) => return Err(error.to_string())
        };
        let cron: CronSchedule = cron.clone();
        let stopped: Arc<AtomicBool> = Arc::new(AtomicBool::new(false));
        let flag: Arc<AtomicBool> = stopped.clone();
        let task: JoinHandle<()> = runtime.spawn(async move {
            loop {
                let next: DateTime<Local> = match cron.upcoming() {
                    Some(next) => next,
                    None => {
                        warn!("no upcoming fire time for '{}', trigger exits",cron.expression());
                        break;
                    }
                };
                let wait: std::time::Duration = (next - Local::now()).to_std().unwrap_or_default();
                debug!("next fire for '{}' at {}",cron.expression(),next);
                tokio::time::sleep(wait).await;
                if flag.load(Ordering::SeqCst) {
                    break;
                }
                tokio::spawn((callback)());
            }
        });
        Ok(TriggerHandle::new(stopped, Some(task)))
    }
}

use chrono::{DateTime, Local, Utc};
use futures::FutureExt;
use serde::{Deserialize, Serialize};
use std::any::Any;
use std::collections::HashMap;
use std::panic::AssertUnwindSafe;
use std::path::PathBuf;
use std::sync::{Arc, Weak};
use std::time::Instant;
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, error, info, instrument, warn};
use uuid::Uuid;
use crate::config::SessionConfig;
use crate::cron_schedule::CronSchedule;
use crate::error::EngineError;
use crate::lock::ResourceGuard;
use crate::metric::{Metric, MetricData, MetricKind};
use crate::notify::{render_summary, NotificationCallback};
use crate::queue::{LockStrategy, Queue, QueueState, QueueStatus};
use crate::registry::ProcessorRegistry;
use crate::scratchpad::Scratchpad;
use crate::session::SessionProvider;
use crate::store::{QueueStore, TaskStore};
use crate::task::{Task, TaskContext};
use crate::trigger::{CronTrigger, FireCallback, Trigger, TriggerHandle};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
/// Aggregate of one queue run, scheduled or on demand.
///
/// # Fields
///
/// - `success`: `true` when no task failed and the run was not aborted.
/// - `execution_time_ms`: Wall clock time from queue resolution to the end of the last task.
/// - `tasks_executed`: Tasks whose processor was called, i.e. `tasks_successful + tasks_failed`.
/// - `tasks_skipped`: Tasks without a registered processor, or skipped because their resources were locked.
/// - `log`: Everything worth relaying about the run, in order.
/// - `clean_messages`: Non-blank message lines written by successful tasks.
/// - `screenshot_files`: Files collected in the scratchpad during the run.
/// - `error`: Set only when the whole run was aborted, e.g. queue not found.
pub struct ExecutionResult {
    pub success: bool,
    pub execution_time_ms: u64,
    pub tasks_executed: usize,
    pub tasks_successful: usize,
    pub tasks_failed: usize,
    pub tasks_skipped: usize,
    pub log: Vec<String>,
    pub clean_messages: Vec<String>,
    pub screenshot_files: Vec<PathBuf>,
    pub error: Option<String>,
}

impl ExecutionResult {
    fn aborted(error: String, mut log: Vec<String>, started: Instant) -> Self {
        log.push(error.clone());
        Self {
            success: false,
            execution_time_ms: started.elapsed().as_millis() as u64,
            log,
            error: Some(error),
            ..Default::default()
        }
    }
}

/// A live schedule: the armed trigger plus what was resolved when it was created.
///
/// `tasks` is `None` when the task store could not be read at creation time;
/// the next fire resolves them and freezes the result.
#[derive(Debug)]
pub struct Schedule {
    pub queue: Queue,
    pub cron: CronSchedule,
    pub tasks: Option<Vec<Task>>,
    pub paused: bool,
    pub last_scratchpad: Option<Scratchpad>,
    handle: TriggerHandle,
}

impl Schedule {
    pub fn trigger_id(&self) -> Uuid {
        self.handle.id()
    }

    pub fn is_armed(&self) -> bool {
        !self.handle.is_stopped()
    }
}

/// The engine's schedule table, keyed by queue id.
#[derive(Debug, Default)]
pub struct SchedulerState {
    schedules: HashMap<u64, Schedule>
}

impl SchedulerState {

    /// Inserts `schedule`, stopping and returning the one it replaces.
    pub fn insert(&mut self, schedule: Schedule) -> Option<Schedule> {
        let previous: Option<Schedule> = self.schedules.insert(schedule.queue.id, schedule);
        if let Some(item) = &previous {
            item.handle.stop();
        }
        previous
    }

    pub fn remove(&mut self, queue_id: u64) -> Option<Schedule> {
        let removed: Option<Schedule> = self.schedules.remove(&queue_id);
        if let Some(item) = &removed {
            item.handle.stop();
        }
        removed
    }

    /// Stops every trigger and empties the table. Returns how many were stopped.
    pub fn stop_all(&mut self) -> usize {
        let total: usize = self.schedules.len();
        for (_, schedule) in self.schedules.drain() {
            schedule.handle.stop();
        }
        total
    }

    pub fn get(&self, queue_id: u64) -> Option<&Schedule> {
        self.schedules.get(&queue_id)
    }

    pub fn get_mut(&mut self, queue_id: u64) -> Option<&mut Schedule> {
        self.schedules.get_mut(&queue_id)
    }

    pub fn ids(&self) -> Vec<u64> {
        let mut ids: Vec<u64> = self.schedules.keys().copied().collect();
        ids.sort();
        ids
    }

    pub fn len(&self) -> usize {
        self.schedules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schedules.is_empty()
    }
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        return format!("panicked: {}",message);
    }
    if let Some(message) = payload.downcast_ref::<String>() {
        return format!("panicked: {}",message);
    }
    "panicked".to_string()
}

pub struct QueueEngineBuilder {
    queue_store: Arc<dyn QueueStore>,
    task_store: Arc<dyn TaskStore>,
    registry: Arc<ProcessorRegistry>,
    session_provider: Arc<dyn SessionProvider>,
    session_config: SessionConfig,
    trigger: Arc<dyn Trigger>,
    metric_capacity: usize,
}

impl QueueEngineBuilder {

    pub fn session_config(mut self, config: SessionConfig) -> Self {
        self.session_config = config;
        self
    }

    pub fn trigger(mut self, trigger: Arc<dyn Trigger>) -> Self {
        self.trigger = trigger;
        self
    }

    pub fn metric_capacity(mut self, capacity: usize) -> Self {
        self.metric_capacity = capacity;
        self
    }

    pub fn build(self) -> Arc<QueueEngine> {
        Arc::new_cyclic(|this| QueueEngine {
            queue_store: self.queue_store,
            task_store: self.task_store,
            registry: self.registry,
            session_provider: self.session_provider,
            session_config: self.session_config,
            trigger: self.trigger,
            state: Mutex::new(SchedulerState::default()),
            statuses: Mutex::new(HashMap::new()),
            notifier: RwLock::new(None),
            restarting: Mutex::new(()),
            metric: Metric::new(self.metric_capacity),
            this: this.clone(),
        })
    }
}

/// Owns the schedule table and drives queue runs.
///
/// Cron fires and [`QueueEngine::execute_queue_once`] share the same pipeline:
/// tasks run strictly in the queue's stored order against one scratchpad, a
/// failing task is logged and counted but never stops the tasks after it.
pub struct QueueEngine {
    queue_store: Arc<dyn QueueStore>,
    task_store: Arc<dyn TaskStore>,
    registry: Arc<ProcessorRegistry>,
    session_provider: Arc<dyn SessionProvider>,
    session_config: SessionConfig,
    trigger: Arc<dyn Trigger>,
    state: Mutex<SchedulerState>,
    statuses: Mutex<HashMap<u64, QueueStatus>>,
    notifier: RwLock<Option<NotificationCallback>>,
    restarting: Mutex<()>,
    metric: Metric,
    this: Weak<QueueEngine>,
}

impl std::fmt::Debug for QueueEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueueEngine")
            .field("registry",&self.registry)
            .field("session_config",&self.session_config)
            .finish_non_exhaustive()
    }
}

impl QueueEngine {

    /// Starts building an engine. Defaults: [`CronTrigger`], [`SessionConfig::default`], 500 metric records.
    pub fn builder(
        queue_store: Arc<dyn QueueStore>,
        task_store: Arc<dyn TaskStore>,
        registry: Arc<ProcessorRegistry>,
        session_provider: Arc<dyn SessionProvider>
    ) -> QueueEngineBuilder {
        QueueEngineBuilder {
            queue_store,
            task_store,
            registry,
            session_provider,
            session_config: SessionConfig::default(),
            trigger: Arc::new(CronTrigger::new()),
            metric_capacity: 500,
        }
    }

    pub fn registry(&self) -> &Arc<ProcessorRegistry> {
        &self.registry
    }

    pub fn metrics(&self) -> &Metric {
        &self.metric
    }

    pub async fn set_notification_callback<F>(&self, callback: F)
    where
        F: Fn(String) + Send + Sync + 'static,
    {
        *self.notifier.write().await = Some(Arc::new(callback));
    }

    pub async fn clear_notification_callback(&self) {
        *self.notifier.write().await = None;
    }

    #[instrument(skip_all)]
    /// Bootstrap/restart sequence.
    ///
    /// Stops every trigger and drops the schedule table, closes the previous
    /// default session (close errors are only logged), opens a new one, then
    /// schedules every active queue. A queue that cannot be scheduled is logged
    /// and skipped. Returns the number of queues scheduled.
    ///
    /// Runs already in progress keep going with what they resolved when they started.
    pub async fn restart(&self) -> Result<usize,EngineError> {
        let _restarting = self.restarting.lock().await;
        let stopped: usize = self.state.lock().await.stop_all();
        info!("stopped {} schedule(s)",stopped);

        if let Some(previous) = self.registry.sessions().take(None).await {
            match previous.close().await {
                Ok(_) => info!("closed session {}",previous.id()),
                Err(error) => warn!("unable to close session {}: {}",previous.id(),error)
            }
        }
        match self.session_provider.open(&self.session_config).await {
            Ok(session) => {
                info!("opened session {}",session.id());
                self.registry.set_session(None, session).await;
            }
            Err(error) => {
                error!("unable to open session at {}: {}",self.session_config.endpoint,error);
            }
        }

        let queues: Vec<Queue> = match self.queue_store.find_active().await {
            Ok(queues) => queues,
            Err(error) => {
                error!("unable to load active queues: {}",error);
                return Err(EngineError::Store(error));
            }
        };
        let total: usize = queues.len();
        let mut scheduled: usize = 0;
        for queue in queues {
            match self.schedule_queue(queue).await {
                Ok(_) => scheduled += 1,
                Err(error) => error!("{}",error)
            }
        }
        info!("restart complete: {} of {} active queue(s) scheduled",scheduled,total);
        Ok(scheduled)
    }

    /// Creates or replaces the schedule of one queue without touching the others.
    pub async fn add_schedule(&self, queue: Queue) -> Result<(),EngineError> {
        let _restarting = self.restarting.lock().await;
        self.schedule_queue(queue).await
    }

    /// Stops and removes the schedule of one queue. Returns `false` when it was not scheduled.
    pub async fn remove_schedule(&self, queue_id: u64) -> bool {
        let _restarting = self.restarting.lock().await;
        let removed: bool = self.state.lock().await.remove(queue_id).is_some();
        if removed {
            info!("schedule for queue {} removed",queue_id);
        }
        removed
    }

    /// Re-reads one queue from storage and applies it: scheduled when active, removed otherwise.
    ///
    /// Returns whether the queue ends up scheduled. A queue missing from storage
    /// loses its schedule and yields [`EngineError::QueueNotFound`].
    pub async fn resync_queue(&self, queue_id: u64) -> Result<bool,EngineError> {
        let _restarting = self.restarting.lock().await;
        let queues: Vec<Queue> = match self.queue_store.find_all().await {
            Ok(queues) => queues,
            Err(error) => return Err(EngineError::Store(error))
        };
        match queues.into_iter().find(|item| item.id == queue_id) {
            Some(queue) if queue.is_active => {
                self.schedule_queue(queue).await?;
                Ok(true)
            }
            Some(_) => {
                if self.state.lock().await.remove(queue_id).is_some() {
                    info!("schedule for queue {} removed on resync",queue_id);
                }
                Ok(false)
            }
            None => {
                if self.state.lock().await.remove(queue_id).is_some() {
                    info!("schedule for queue {} removed, queue no longer stored",queue_id);
                }
                Err(EngineError::QueueNotFound(queue_id))
            }
        }
    }

    async fn schedule_queue(&self, queue: Queue) -> Result<(),EngineError> {
        let cron: CronSchedule = match CronSchedule::parse(&queue.schedule) {
            Ok(cron) => cron,
            Err(reason) => return Err(EngineError::InvalidCron {
                queue: queue.name.clone(),
                expression: queue.schedule.clone(),
                reason
            })
        };
        let mut log: Vec<String> = Vec::new();
        let tasks: Option<Vec<Task>> = match self.resolve_tasks(&queue, &mut log).await {
            Ok(tasks) => Some(tasks),
            Err(error) => {
                warn!("tasks of queue {} ({}) not resolved, retrying on next fire: {}",queue.id,queue.name,error);
                None
            }
        };

        let queue_id: u64 = queue.id;
        let engine: Weak<QueueEngine> = self.this.clone();
        let callback: FireCallback = Arc::new(move || {
            let engine: Weak<QueueEngine> = engine.clone();
            async move {
                if let Some(engine) = engine.upgrade() {
                    engine.fire(queue_id).await;
                }
            }.boxed()
        });
        let handle: TriggerHandle = match self.trigger.schedule(&cron, callback) {
            Ok(handle) => handle,
            Err(error) => return Err(EngineError::Trigger(error))
        };

        match &tasks {
            Some(items) => info!("queue {} ({}) scheduled at '{}' with {} task(s)",queue.id,queue.name,cron.expression(),items.len()),
            None => info!("queue {} ({}) scheduled at '{}', tasks pending",queue.id,queue.name,cron.expression())
        }
        let previous: Option<Schedule> = self.state.lock().await.insert(Schedule {
            queue,
            cron,
            tasks,
            paused: false,
            last_scratchpad: None,
            handle,
        });
        if previous.is_some() {
            info!("previous schedule for queue {} replaced",queue_id);
        }
        Ok(())
    }

    /// Stops all triggers and closes every session. Runs in progress are not interrupted.
    pub async fn shutdown(&self) -> usize {
        let _restarting = self.restarting.lock().await;
        let stopped: usize = self.state.lock().await.stop_all();
        for (name, session) in self.registry.sessions().drain().await {
            if let Err(error) = session.close().await {
                warn!("unable to close session {} ({}): {}",name,session.id(),error);
            }
        }
        info!("engine shut down, {} schedule(s) stopped",stopped);
        stopped
    }

    pub async fn pause_queue(&self, queue_id: u64) -> bool {
        match self.state.lock().await.get_mut(queue_id) {
            Some(schedule) => {
                schedule.paused = true;
                info!("queue {} paused",queue_id);
                true
            }
            None => false
        }
    }

    pub async fn resume_queue(&self, queue_id: u64) -> bool {
        match self.state.lock().await.get_mut(queue_id) {
            Some(schedule) => {
                schedule.paused = false;
                info!("queue {} resumed",queue_id);
                true
            }
            None => false
        }
    }

    pub async fn scheduled_queue_ids(&self) -> Vec<u64> {
        self.state.lock().await.ids()
    }

    pub async fn next_fire(&self, queue_id: u64) -> Option<DateTime<Local>> {
        match self.state.lock().await.get(queue_id) {
            Some(schedule) => schedule.cron.upcoming(),
            None => None
        }
    }

    pub async fn trigger_id(&self, queue_id: u64) -> Option<Uuid> {
        self.state.lock().await.get(queue_id).map(Schedule::trigger_id)
    }

    /// Scratchpad left behind by the latest scheduled run of a queue.
    pub async fn last_scratchpad(&self, queue_id: u64) -> Option<Scratchpad> {
        match self.state.lock().await.get(queue_id) {
            Some(schedule) => schedule.last_scratchpad.clone(),
            None => None
        }
    }

    /// Live status of a queue. Paused schedules report `Paused` while idle.
    pub async fn queue_status(&self, queue_id: u64) -> QueueStatus {
        let mut status: QueueStatus = self.statuses.lock().await.get(&queue_id).cloned().unwrap_or_default();
        if status.state == QueueState::Stopped || status.state == QueueState::Error {
            if let Some(schedule) = self.state.lock().await.get(queue_id) {
                if schedule.paused {
                    status.state = QueueState::Paused;
                }
            }
        }
        status
    }

    async fn set_status(&self, queue_id: u64, state: QueueState, current_task_name: Option<String>) {
        let mut statuses = self.statuses.lock().await;
        let status: &mut QueueStatus = statuses.entry(queue_id).or_default();
        status.state = state;
        status.current_task_name = current_task_name;
        if state == QueueState::Stopped || state == QueueState::Error {
            status.last_run = Some(Utc::now());
        }
    }

    #[instrument(skip(self))]
    /// Runs a queue immediately, bypassing its schedule.
    ///
    /// The queue and its tasks are resolved fresh from storage, so this also
    /// works for inactive queues and picks up edits not yet applied to the schedule.
    /// Never fails: a missing queue yields `success = false` with `error` set.
    pub async fn execute_queue_once(&self, queue_id: u64) -> ExecutionResult {
        let started: Instant = Instant::now();
        let mut log: Vec<String> = Vec::new();
        let queue: Queue = match self.queue_store.find_all().await {
            Ok(queues) => match queues.into_iter().find(|item| item.id == queue_id) {
                Some(queue) => queue,
                None => {
                    let message: String = format!("queue {} not found",queue_id);
                    error!("{}",message);
                    return ExecutionResult::aborted(message, log, started);
                }
            },
            Err(error) => {
                error!("queue store: {}",error);
                return ExecutionResult::aborted(format!("queue store: {}",error), log, started);
            }
        };
        let tasks: Vec<Task> = match self.resolve_tasks(&queue, &mut log).await {
            Ok(tasks) => tasks,
            Err(error) => {
                error!("{}",error);
                let result: ExecutionResult = ExecutionResult::aborted(error, log, started);
                self.record(&queue, MetricKind::OneShot, &result).await;
                return result;
            }
        };
        let (result, _) = self.run_tasks(&queue, tasks, log, started).await;
        self.record(&queue, MetricKind::OneShot, &result).await;
        result
    }

    #[instrument(skip(self))]
    async fn fire(&self, queue_id: u64) {
        let (queue, frozen) = match self.state.lock().await.get(queue_id) {
            Some(schedule) if schedule.paused => {
                info!("queue {} ({}) is paused, fire skipped",queue_id,schedule.queue.name);
                return;
            }
            Some(schedule) => (schedule.queue.clone(), schedule.tasks.clone()),
            None => {
                warn!("fire for unscheduled queue {}",queue_id);
                return;
            }
        };
        info!("queue {} ({}) fired",queue.id,queue.name);
        let started: Instant = Instant::now();
        let mut log: Vec<String> = Vec::new();
        let tasks: Vec<Task> = match frozen {
            Some(tasks) => tasks,
            None => match self.resolve_tasks(&queue, &mut log).await {
                Ok(tasks) => {
                    if let Some(schedule) = self.state.lock().await.get_mut(queue_id) {
                        if schedule.tasks.is_none() {
                            schedule.tasks = Some(tasks.clone());
                        }
                    }
                    tasks
                }
                Err(error) => {
                    error!("{}",error);
                    let result: ExecutionResult = ExecutionResult::aborted(error, log, started);
                    self.set_status(queue_id, QueueState::Error, None).await;
                    self.record(&queue, MetricKind::Scheduled, &result).await;
                    self.notify(&queue.name, &result).await;
                    return;
                }
            }
        };
        let (result, scratchpad) = self.run_tasks(&queue, tasks, log, started).await;
        self.record(&queue, MetricKind::Scheduled, &result).await;
        if let Some(schedule) = self.state.lock().await.get_mut(queue_id) {
            schedule.last_scratchpad = Some(scratchpad);
        }
        self.notify(&queue.name, &result).await;
    }

    async fn notify(&self, queue_name: &str, result: &ExecutionResult) {
        let notifier: Option<NotificationCallback> = self.notifier.read().await.clone();
        if let Some(callback) = notifier {
            callback(render_summary(queue_name, result));
        }
    }

    /// Orders the stored tasks by the queue's `task_ids`, logging ids that no longer exist.
    async fn resolve_tasks(&self, queue: &Queue, log: &mut Vec<String>) -> Result<Vec<Task>,String> {
        if queue.task_ids.is_empty() {
            return Ok(Vec::new());
        }
        let found: Vec<Task> = match self.task_store.find_by_ids(&queue.task_ids).await {
            Ok(tasks) => tasks,
            Err(error) => return Err(format!("task store: {}",error))
        };
        let by_id: HashMap<u64, Task> = found.into_iter().map(|task| (task.id, task)).collect();
        let mut tasks: Vec<Task> = Vec::with_capacity(queue.task_ids.len());
        for id in queue.task_ids.iter() {
            match by_id.get(id) {
                Some(task) => tasks.push(task.clone()),
                None => {
                    let line: String = format!("task {} referenced by queue {} ({}) not found, skipped",id,queue.id,queue.name);
                    warn!("{}",line);
                    log.push(line);
                }
            }
        }
        Ok(tasks)
    }

    async fn run_tasks(&self, queue: &Queue, tasks: Vec<Task>, mut log: Vec<String>, started: Instant) -> (ExecutionResult, Scratchpad) {
        let mut result: ExecutionResult = ExecutionResult::default();
        let mut scratchpad: Scratchpad = Scratchpad::new();

        if tasks.is_empty() {
            let line: String = format!("queue {} ({}) has no tasks to execute",queue.id,queue.name);
            info!("{}",line);
            log.push(line);
            self.set_status(queue.id, QueueState::Stopped, None).await;
            result.success = true;
            result.log = log;
            result.execution_time_ms = started.elapsed().as_millis() as u64;
            return (result, scratchpad);
        }

        let context: TaskContext<'_> = self.registry.context();
        for task in tasks.iter() {
            let processor = match self.registry.get_processor(&task.exe_type).await {
                Some(processor) => processor,
                None => {
                    let line: String = format!("task {} ({}) skipped: no processor registered for '{}'",task.id,task.name,task.exe_type);
                    warn!("{}",line);
                    log.push(line);
                    result.tasks_skipped += 1;
                    continue;
                }
            };

            let resources: Vec<String> = processor.blocked_resources();
            let guard: ResourceGuard = match self.registry.locks().try_lock(&resources) {
                Some(guard) => guard,
                None => match queue.lock_strategy {
                    LockStrategy::SkipTask => {
                        let line: String = format!("task {} ({}) skipped: resource(s) {} locked",task.id,task.name,resources.join(", "));
                        warn!("{}",line);
                        log.push(line);
                        result.tasks_skipped += 1;
                        continue;
                    }
                    LockStrategy::PauseOnLock => {
                        info!("queue {} waiting for resource(s) {}",queue.id,resources.join(", "));
                        self.set_status(queue.id, QueueState::Locked, Some(task.name.clone())).await;
                        self.registry.locks().lock(&resources).await
                    }
                }
            };

            self.set_status(queue.id, QueueState::Running, Some(task.name.clone())).await;
            debug!("executing task {} ({}) with {}",task.id,task.name,processor.name());
            let outcome: Result<(),String> = match AssertUnwindSafe(processor.execute(task, &mut scratchpad, &context)).catch_unwind().await {
                Ok(outcome) => outcome,
                Err(payload) => Err(panic_message(payload))
            };
            drop(guard);

            let lines: Vec<String> = scratchpad.take_lines();
            match outcome {
                Ok(_) => {
                    result.tasks_successful += 1;
                    info!("task {} ({}) completed",task.id,task.name);
                    for line in lines {
                        log.push(line.clone());
                        result.clean_messages.push(line);
                    }
                }
                Err(error) => {
                    result.tasks_failed += 1;
                    let line: String = format!("task {} ({}) failed: {}",task.id,task.name,error);
                    error!("{}",line);
                    log.push(line);
                    if !lines.is_empty() {
                        debug!("discarded {} message line(s) from task {}",lines.len(),task.id);
                    }
                }
            }
        }

        result.tasks_executed = result.tasks_successful + result.tasks_failed;
        result.success = result.tasks_failed == 0;
        result.screenshot_files = scratchpad.screenshot_files.clone();
        result.log = log;
        result.execution_time_ms = started.elapsed().as_millis() as u64;
        self.set_status(queue.id, if result.success { QueueState::Stopped } else { QueueState::Error }, None).await;
        info!(
            "queue {} ({}) finished: {} executed, {} failed, {} skipped in {} ms",
            queue.id,queue.name,result.tasks_executed,result.tasks_failed,result.tasks_skipped,result.execution_time_ms
        );
        (result, scratchpad)
    }

    async fn record(&self, queue: &Queue, kind: MetricKind, result: &ExecutionResult) {
        self.metric.create(MetricData {
            queue_id: queue.id,
            queue_name: queue.name.clone(),
            kind,
            success: result.success,
            tasks_executed: result.tasks_executed,
            tasks_failed: result.tasks_failed,
            execution_time_ms: result.execution_time_ms,
            timestamp: Utc::now(),
        }).await;
    }
}

use crossbeam::channel::{Receiver, Sender, TryRecvError};
use std::sync::Arc;
use tokio::task::JoinSet;
use tokio::time::{Duration, Instant};
use tracing::{error, info, instrument, warn};
use crate::config::ManagerConfig;
use crate::engine::{ExecutionResult, QueueEngine};
use crate::error::EngineError;
use crate::Command;

/// Process level entrypoint: installs logging, boots the engine and relays commands to it.
#[derive(Debug)]
pub struct Manager {
    engine: Arc<QueueEngine>,
    config: ManagerConfig,
    join_set: JoinSet<()>
}

impl Manager {

    /// Initializes the `Manager` and the `tracing` subscriber. A subscriber that is already installed is kept.
    pub async fn new(engine: Arc<QueueEngine>, config: ManagerConfig) -> Self {
        let _ = tracing_subscriber::fmt()
            .with_max_level(config.log_level)
            .with_line_number(true)
            .try_init();
        Self {
            engine,
            config,
            join_set: JoinSet::new()
        }
    }

    pub fn engine(&self) -> &Arc<QueueEngine> {
        &self.engine
    }

    /// Runs the bootstrap sequence: opens the session and schedules every active queue.
    pub async fn start(&self) -> Result<usize,EngineError> {
        self.engine.restart().await
    }

    /// Launches the loop that polls `rx` and applies each [`Command`] to the engine.
    ///
    /// # Parameters
    ///
    /// - `rx`: a crossbeam channel ```Receiver```. The loop ends on `Command::Shutdown` or when every sender is dropped.
    pub async fn listen(&mut self, rx: Receiver<Command>) -> Result<(),String> {
        let engine: Arc<QueueEngine> = self.engine.clone();
        let poll_interval: u64 = self.config.command_poll_interval_ms.max(1);
        self.join_set.spawn(async move {
            listen_loop(engine, rx, poll_interval).await;
        });
        Ok(())
    }

    pub async fn send_command(&self, command: Command, tx: Sender<Command>) -> Result<(),String> {
        match tx.send(command) {
            Ok(_) => Ok(()),
            Err(error) => Err(error.to_string())
        }
    }

    /// Waits for the command loops to complete.
    pub async fn wait(self) -> Vec<()> {
        self.join_set.join_all().await
    }
}

#[instrument(skip_all)]
async fn listen_loop(engine: Arc<QueueEngine>, rx: Receiver<Command>, poll_interval: u64) {
    info!("command listener started");
    loop {
        match rx.try_recv() {
            Ok(Command::Shutdown) => {
                engine.shutdown().await;
                info!("command listener stopped");
                break;
            }
            Ok(command) => {
                apply(&engine, command).await;
                continue;
            }
            Err(TryRecvError::Disconnected) => {
                info!("command channel closed, listener stopped");
                break;
            }
            Err(TryRecvError::Empty) => {}
        }
        tokio::time::sleep_until(Instant::now() + Duration::from_millis(poll_interval)).await;
    }
}

async fn apply(engine: &Arc<QueueEngine>, command: Command) {
    match command {
        Command::Restart => {
            if let Err(error) = engine.restart().await {
                error!("restart failed: {}",error);
            }
        }
        Command::Resync(queue_id) => {
            match engine.resync_queue(queue_id).await {
                Ok(scheduled) => info!("queue {} resynced, scheduled: {}",queue_id,scheduled),
                Err(error) => error!("resync of queue {} failed: {}",queue_id,error)
            }
        }
        Command::Pause(queue_id) => {
            if !engine.pause_queue(queue_id).await {
                warn!("queue {} is not scheduled, nothing to pause",queue_id);
            }
        }
        Command::Resume(queue_id) => {
            if !engine.resume_queue(queue_id).await {
                warn!("queue {} is not scheduled, nothing to resume",queue_id);
            }
        }
        Command::Execute { queue_id, reply } => {
            // one task per run, the listener keeps polling
            let engine: Arc<QueueEngine> = engine.clone();
            tokio::spawn(async move {
                let result: ExecutionResult = engine.execute_queue_once(queue_id).await;
                if let Some(reply) = reply {
                    if let Err(error) = reply.send(result) {
                        warn!("unable to reply with the result of queue {}: {}",queue_id,error);
                    }
                }
            });
        }
        Command::Shutdown => {
            engine.shutdown().await;
        }
    }
}

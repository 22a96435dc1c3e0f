//! pila runs recurring, multi-step automation jobs.
//!
//! A [`queue::Queue`] is an ordered list of [`task::Task`]s fired by a cron
//! expression. Each task is handed to the [`task::TaskProcessor`] registered for
//! its execution type, against a per-run [`scratchpad::Scratchpad`] and a shared,
//! long-lived [`session::Session`]. The [`engine::QueueEngine`] owns the schedules
//! and can also run any queue on demand.

use crossbeam::channel::Sender;
use crate::engine::ExecutionResult;

pub mod config;
pub mod cron_schedule;
pub mod engine;
pub mod error;
pub mod lock;
pub mod manager;
pub mod metric;
pub mod notify;
pub mod processors;
pub mod queue;
pub mod registry;
pub mod scratchpad;
pub mod session;
pub mod store;
pub mod task;
pub mod trigger;

#[cfg(test)]
mod tests;

/// Instructions accepted by [`manager::Manager::listen`].
#[derive(Debug, Clone)]
pub enum Command {
    Restart,
    Resync(u64),
    Pause(u64),
    Resume(u64),
    Execute {
        queue_id: u64,
        reply: Option<Sender<ExecutionResult>>
    },
    Shutdown,
}

//! Generic processors that do not depend on any particular session type.

use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::Arc;
use crate::scratchpad::Scratchpad;
use crate::task::{Task, TaskContext, TaskProcessor};

#[derive(Debug, Deserialize)]
struct MessagePayload {
    text: String,
}

/// Appends `{"text": "..."}` to the run's message.
#[derive(Debug, Default)]
pub struct MessageProcessor;

#[async_trait]
impl TaskProcessor for MessageProcessor {
    fn name(&self) -> &str {
        "message"
    }

    fn description(&self) -> &str {
        "Adds a fixed text to the run's notification message"
    }

    async fn execute(&self, task: &Task, scratchpad: &mut Scratchpad, _context: &TaskContext<'_>) -> Result<(),String> {
        let payload: MessagePayload = task.payload_json()?;
        scratchpad.push_line(&payload.text);
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
struct DelayPayload {
    ms: u64,
}

/// Sleeps for `{"ms": N}` milliseconds, e.g. to let a page settle between two steps.
#[derive(Debug, Default)]
pub struct DelayProcessor;

#[async_trait]
impl TaskProcessor for DelayProcessor {
    fn name(&self) -> &str {
        "delay"
    }

    fn description(&self) -> &str {
        "Waits for a fixed number of milliseconds"
    }

    async fn execute(&self, task: &Task, _scratchpad: &mut Scratchpad, _context: &TaskContext<'_>) -> Result<(),String> {
        let payload: DelayPayload = task.payload_json()?;
        tokio::time::sleep(std::time::Duration::from_millis(payload.ms)).await;
        Ok(())
    }
}

/// Table of the built-in processors, keyed by execution type.
pub fn builtin() -> HashMap<String, Arc<dyn TaskProcessor>> {
    let mut items: HashMap<String, Arc<dyn TaskProcessor>> = HashMap::new();
    items.insert("message".to_string(), Arc::new(MessageProcessor));
    items.insert("delay".to_string(), Arc::new(DelayProcessor));
    items
}

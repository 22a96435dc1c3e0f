use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::path::PathBuf;

/// Mutable map shared by every task of a single run.
///
/// One instance is created per execution and passed by reference through the
/// whole ordered task sequence, so later tasks can read what earlier tasks wrote
/// into `data`. `message` is harvested and cleared by the engine after each task.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Scratchpad {
    pub message: String,
    pub screenshot_files: Vec<PathBuf>,
    pub data: HashMap<String, Value>,
}

impl Scratchpad {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one line to the message accumulator.
    pub fn push_line(&mut self, line: &str) {
        if !self.message.is_empty() && !self.message.ends_with('\n') {
            self.message.push('\n');
        }
        self.message.push_str(line);
    }

    pub fn add_screenshot(&mut self, path: impl Into<PathBuf>) {
        self.screenshot_files.push(path.into());
    }

    pub fn set(&mut self, key: &str, value: Value) -> Option<Value> {
        self.data.insert(key.to_string(), value)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.data.get(key)
    }

    /// Removes the accumulated message and returns its non-blank lines, trimmed.
    pub fn take_lines(&mut self) -> Vec<String> {
        let message: String = std::mem::take(&mut self.message);
        message
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect()
    }
}

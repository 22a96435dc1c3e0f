use std::sync::Arc;
use crate::engine::ExecutionResult;

/// Sink for the per-run summary of scheduled executions. Delivery (chat, push) is up to the caller.
pub type NotificationCallback = Arc<dyn Fn(String) + Send + Sync>;

/// Renders a run into the single message handed to the notification callback.
///
/// Messages written by tasks are passed through verbatim under a one line header.
/// Without them a generic count summary is sent instead.
pub fn render_summary(queue_name: &str, result: &ExecutionResult) -> String {
    if let Some(error) = &result.error {
        return format!("❌ {}: {}",queue_name,error);
    }
    if !result.clean_messages.is_empty() {
        let body: String = result.clean_messages.join("\n");
        if result.success {
            return format!("✅ {}\n{}",queue_name,body);
        }
        return format!("⚠️ {} ({} failed)\n{}",queue_name,result.tasks_failed,body);
    }
    format!(
        "{} {}: {} tasks, {} ms, {} failed",
        if result.success { "✅" } else { "⚠️" },
        queue_name,
        result.tasks_executed,
        result.execution_time_ms,
        result.tasks_failed
    )
}

#[cfg(test)]
mod test_trigger {
    use futures::FutureExt;
    use std::sync::{Arc, Mutex};
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::time::Duration;
    use crate::cron_schedule::CronSchedule;
    use crate::engine::QueueEngine;
    use crate::queue::Queue;
    use crate::registry::ProcessorRegistry;
    use crate::store::MemoryStore;
    use crate::task::Task;
    use crate::tests::test_helper::{seed, session_config, CountingSessionProvider, EchoProcessor};
    use crate::trigger::{CronTrigger, FireCallback, Trigger, TriggerHandle};

    #[tokio::test]
    async fn test_fires_until_stopped() {
        let fires: Arc<AtomicUsize> = Arc::new(AtomicUsize::new(0));
        let counter: Arc<AtomicUsize> = fires.clone();
        let callback: FireCallback = Arc::new(move || {
            let counter: Arc<AtomicUsize> = counter.clone();
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
            }.boxed()
        });
        let cron: CronSchedule = CronSchedule::parse("* * * * * *").unwrap();
        let result: Result<TriggerHandle, String> = CronTrigger::new().schedule(&cron, callback);
        assert!(result.is_ok(),"{:?}",result.err());
        let handle: TriggerHandle = result.unwrap();

        tokio::time::sleep(Duration::from_millis(2500)).await;
        assert!(fires.load(Ordering::SeqCst) >= 1);

        handle.stop();
        assert!(handle.is_stopped());
        tokio::time::sleep(Duration::from_millis(100)).await;
        let stopped_at: usize = fires.load(Ordering::SeqCst);
        tokio::time::sleep(Duration::from_millis(1500)).await;
        assert_eq!(fires.load(Ordering::SeqCst),stopped_at);
    }

    #[tokio::test]
    async fn test_stop_does_not_interrupt_running_fire() {
        let started: Arc<AtomicBool> = Arc::new(AtomicBool::new(false));
        let finished: Arc<AtomicBool> = Arc::new(AtomicBool::new(false));
        let (started_flag, finished_flag) = (started.clone(), finished.clone());
        let callback: FireCallback = Arc::new(move || {
            let (started, finished) = (started_flag.clone(), finished_flag.clone());
            async move {
                if started.swap(true, Ordering::SeqCst) {
                    return;
                }
                tokio::time::sleep(Duration::from_millis(800)).await;
                finished.store(true, Ordering::SeqCst);
            }.boxed()
        });
        let cron: CronSchedule = CronSchedule::parse("* * * * * *").unwrap();
        let handle: TriggerHandle = CronTrigger::new().schedule(&cron, callback).unwrap();

        for _ in 0..30 {
            if started.load(Ordering::SeqCst) {
                break;
            }
            tokio::time::sleep(Duration::from_millis(100)).await;
        }
        assert!(started.load(Ordering::SeqCst));
        drop(handle);
        tokio::time::sleep(Duration::from_millis(1200)).await;
        assert!(finished.load(Ordering::SeqCst));
    }

    #[test]
    fn test_requires_runtime() {
        let callback: FireCallback = Arc::new(|| async {}.boxed());
        let cron: CronSchedule = CronSchedule::parse("0 * * * *").unwrap();
        assert!(CronTrigger::new().schedule(&cron, callback).is_err());
    }

    #[tokio::test]
    async fn test_engine_with_cron_trigger() {
        let store: Arc<MemoryStore> = Arc::new(MemoryStore::new().await);
        let registry: Arc<ProcessorRegistry> = Arc::new(ProcessorRegistry::new().await);
        registry.register("echo", Arc::new(EchoProcessor { calls: Arc::new(Mutex::new(Vec::new())) })).await;
        seed(&store, vec![Queue::new(1, "ticker", "* * * * * *", vec![1])], vec![
            Task::new(1, "tick", "echo", "tick"),
        ]).await;
        let engine: Arc<QueueEngine> = QueueEngine::builder(store.clone(), store, registry, Arc::new(CountingSessionProvider::default()))
            .session_config(session_config())
            .build();
        let notifications: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
        let sink: Arc<Mutex<Vec<String>>> = notifications.clone();
        engine.set_notification_callback(move |message: String| {
            sink.lock().unwrap().push(message);
        }).await;

        assert_eq!(engine.restart().await,Ok(1));
        tokio::time::sleep(Duration::from_millis(2500)).await;
        assert_eq!(engine.shutdown().await,1);
        let notifications: Vec<String> = notifications.lock().unwrap().clone();
        assert!(!notifications.is_empty());
        assert_eq!(notifications[0],"✅ ticker\ntick");
    }
}

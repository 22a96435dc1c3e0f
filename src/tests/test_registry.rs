#[cfg(test)]
mod test_registry {
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};
    use crate::processors::builtin;
    use crate::registry::{ProcessorInfo, ProcessorRegistry};
    use crate::session::Session;
    use crate::task::TaskProcessor;
    use crate::tests::test_helper::{BrowserProcessor, RecordingProcessor, TestSession};

    #[tokio::test]
    async fn test_register_and_lookup() {
        let registry: ProcessorRegistry = ProcessorRegistry::new().await;
        assert!(registry.get_processor("recording").await.is_none());

        let calls: Arc<Mutex<Vec<u64>>> = Arc::new(Mutex::new(Vec::new()));
        assert!(registry.register("recording", Arc::new(RecordingProcessor { calls, message: None })).await);
        assert!(registry.register("browser", Arc::new(BrowserProcessor::new(0, false))).await);

        let processor: Option<Arc<dyn TaskProcessor>> = registry.get_processor("recording").await;
        assert!(processor.is_some());
        assert_eq!(processor.unwrap().name(),"recording");
        assert!(registry.get_processor("Recording").await.is_none());

        let items: Vec<ProcessorInfo> = registry.describe().await;
        assert_eq!(items.len(),2);
        assert_eq!(items[0].exe_type,"browser");
        assert_eq!(items[0].blocked_resources,vec!["browser".to_string()]);
        assert_eq!(items[1].exe_type,"recording");
    }

    #[tokio::test]
    async fn test_register_all_replaces_table() {
        let registry: ProcessorRegistry = ProcessorRegistry::new().await;
        let calls: Arc<Mutex<Vec<u64>>> = Arc::new(Mutex::new(Vec::new()));
        registry.register("recording", Arc::new(RecordingProcessor { calls, message: None })).await;

        let processors: HashMap<String, Arc<dyn TaskProcessor>> = builtin();
        assert_eq!(registry.register_all(processors).await,2);
        assert!(registry.get_processor("recording").await.is_none());
        assert!(registry.get_processor("message").await.is_some());
        assert!(registry.get_processor("delay").await.is_some());
    }

    #[tokio::test]
    async fn test_named_sessions() {
        let registry: ProcessorRegistry = ProcessorRegistry::new().await;
        assert!(registry.get_session(None).await.is_none());

        let closes = Arc::new(std::sync::atomic::AtomicUsize::new(0));
        let main: Arc<dyn Session> = Arc::new(TestSession { id: "main".to_string(), closes: closes.clone(), fail_close: false });
        let work: Arc<dyn Session> = Arc::new(TestSession { id: "work".to_string(), closes, fail_close: false });
        assert!(registry.set_session(None, main).await.is_none());
        assert!(registry.set_session(Some("work"), work).await.is_none());

        assert_eq!(registry.get_session(None).await.unwrap().id(),"main");
        assert_eq!(registry.get_session(Some("default")).await.unwrap().id(),"main");
        assert_eq!(registry.get_session(Some("work")).await.unwrap().id(),"work");
        assert!(registry.get_session(Some("personal")).await.is_none());
        assert_eq!(registry.sessions().names().await,vec!["default".to_string(), "work".to_string()]);

        let context = registry.context();
        assert!(context.require_session(Some("personal")).await.is_err());
        assert!(context.require_session(None).await.is_ok());
    }

    #[tokio::test]
    async fn test_lock_delegation() {
        let registry: ProcessorRegistry = ProcessorRegistry::new().await;
        assert!(registry.acquire_lock("browser"));
        assert!(registry.is_locked("browser"));
        assert!(registry.context().locks.is_locked("browser"));
        assert!(registry.release_lock("browser"));
        assert!(!registry.is_locked("browser"));
    }
}

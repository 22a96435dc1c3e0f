#[cfg(test)]
mod test_lock {
    use std::sync::Arc;
    use std::time::Duration;
    use crate::lock::{ResourceGuard, ResourceLocks};

    #[test]
    fn test_cooperative_idempotent() {
        let locks: ResourceLocks = ResourceLocks::new();
        assert!(!locks.is_locked("browser"));
        assert!(!locks.release_lock("browser"));

        assert!(locks.acquire_lock("browser"));
        assert!(!locks.acquire_lock("browser"));
        assert!(locks.is_locked("browser"));
        assert_eq!(locks.locked(),vec!["browser".to_string()]);

        assert!(locks.release_lock("browser"));
        assert!(!locks.release_lock("browser"));
        assert!(!locks.is_locked("browser"));
        assert!(locks.locked().is_empty());
    }

    #[test]
    fn test_guard_releases_on_drop() {
        let locks: ResourceLocks = ResourceLocks::new();
        let names: Vec<String> = vec!["profile-b".to_string(), "browser".to_string(), "browser".to_string()];
        {
            let guard: Option<ResourceGuard> = locks.try_lock(&names);
            assert!(guard.is_some());
            assert_eq!(guard.as_ref().unwrap().names(),&["browser".to_string(), "profile-b".to_string()]);
            assert!(locks.is_locked("browser"));
            assert!(locks.is_locked("profile-b"));
            assert!(locks.try_lock(&["browser".to_string()]).is_none());
            // held by the guard, so a cooperative acquire is a no-op
            assert!(!locks.acquire_lock("browser"));
            assert!(!locks.release_lock("browser"));
        }
        assert!(!locks.is_locked("browser"));
        assert!(!locks.is_locked("profile-b"));
    }

    #[test]
    fn test_try_lock_all_or_nothing() {
        let locks: ResourceLocks = ResourceLocks::new();
        assert!(locks.acquire_lock("profile-b"));
        let guard: Option<ResourceGuard> = locks.try_lock(&["browser".to_string(), "profile-b".to_string()]);
        assert!(guard.is_none());
        assert!(!locks.is_locked("browser"));
        assert!(locks.try_lock(&[]).is_some());
    }

    #[tokio::test]
    async fn test_lock_waits_for_release() {
        let locks: Arc<ResourceLocks> = Arc::new(ResourceLocks::new());
        assert!(locks.acquire_lock("browser"));

        let waiter: Arc<ResourceLocks> = locks.clone();
        let task = tokio::spawn(async move {
            let guard: ResourceGuard = waiter.lock(&["browser".to_string()]).await;
            guard.names().len()
        });
        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(!task.is_finished());

        assert!(locks.release_lock("browser"));
        let result = tokio::time::timeout(Duration::from_secs(2), task).await;
        assert!(result.is_ok(),"waiter never got the lock");
        assert_eq!(result.unwrap().unwrap(),1);
        assert!(!locks.is_locked("browser"));
    }
}

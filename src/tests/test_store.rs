#[cfg(test)]
mod test_store {
    use fake::{Fake, faker::name::en::Name};
    use crate::queue::Queue;
    use crate::store::{MemoryStore, QueueStore, TaskStore};
    use crate::task::Task;
    use crate::tests::test_helper::seed;

    #[tokio::test]
    async fn test_find_active_and_all() {
        let store: MemoryStore = MemoryStore::new().await;
        let mut inactive: Queue = Queue::new(2, &Name().fake::<String>(), "0 * * * *", vec![]);
        inactive.is_active = false;
        seed(&store, vec![
            Queue::new(3, &Name().fake::<String>(), "0 * * * *", vec![]),
            inactive,
            Queue::new(1, &Name().fake::<String>(), "0 * * * *", vec![]),
        ], vec![]).await;

        let result: Result<Vec<Queue>, String> = store.find_active().await;
        assert!(result.is_ok(),"{:?}",result.err());
        let ids: Vec<u64> = result.unwrap().iter().map(|queue| queue.id).collect();
        assert_eq!(ids,vec![1, 3]);

        let result: Result<Vec<Queue>, String> = store.find_all().await;
        assert!(result.is_ok(),"{:?}",result.err());
        assert_eq!(result.unwrap().len(),3);

        let result: Result<Queue, String> = store.set_active(2, true).await;
        assert!(result.is_ok(),"{:?}",result.err());
        assert_eq!(store.find_active().await.unwrap().len(),3);
        assert!(store.set_active(99, true).await.is_err());
    }

    #[tokio::test]
    async fn test_find_by_ids_tolerates_missing() {
        let store: MemoryStore = MemoryStore::new().await;
        seed(&store, vec![], vec![
            Task::new(10, "first", "message", "{}"),
            Task::new(20, "second", "message", "{}"),
        ]).await;

        let result: Result<Vec<Task>, String> = store.find_by_ids(&[20, 30, 10, 20]).await;
        assert!(result.is_ok(),"{:?}",result.err());
        let ids: Vec<u64> = result.unwrap().iter().map(|task| task.id).collect();
        assert_eq!(ids,vec![10, 20]);

        assert!(store.remove_task(10).await.is_some());
        assert_eq!(store.find_by_ids(&[10]).await.unwrap().len(),0);
        assert_eq!(store.purge().await,1);
    }
}

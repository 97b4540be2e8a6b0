use std::collections::BTreeSet;
use std::sync::Arc;

use mindcare_core::model::{ModuleId, ProgressRecord, RoomId};
use storage::KeyValueStore;

/// Storage key holding the whole progress record as one JSON object.
pub const PROGRESS_STORAGE_KEY: &str = "mental-health-progress";

/// Best-effort persistence of module completion flags.
///
/// Every operation fails soft: a missing, unreadable or corrupt record reads
/// as empty, and write failures are logged and dropped. A store built with
/// [`ProgressStore::detached`] has no backend at all and never persists.
#[derive(Clone)]
pub struct ProgressStore {
    kv: Option<Arc<dyn KeyValueStore>>,
}

impl ProgressStore {
    #[must_use]
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        Self { kv: Some(kv) }
    }

    /// A store with no backend: writes are no-ops, reads are empty.
    #[must_use]
    pub fn detached() -> Self {
        Self { kv: None }
    }

    #[must_use]
    pub fn is_detached(&self) -> bool {
        self.kv.is_none()
    }

    /// Current record, or an empty one if nothing usable is stored.
    pub async fn snapshot(&self) -> ProgressRecord {
        let Some(kv) = &self.kv else {
            return ProgressRecord::default();
        };

        let raw = match kv.get(PROGRESS_STORAGE_KEY).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return ProgressRecord::default(),
            Err(err) => {
                tracing::warn!(error = %err, "progress read failed; treating as empty");
                return ProgressRecord::default();
            }
        };

        serde_json::from_str(&raw).unwrap_or_else(|err| {
            tracing::warn!(error = %err, "stored progress is corrupt; treating as empty");
            ProgressRecord::default()
        })
    }

    async fn save(&self, record: &ProgressRecord) {
        let Some(kv) = &self.kv else {
            return;
        };

        let raw = match serde_json::to_string(record) {
            Ok(raw) => raw,
            Err(err) => {
                tracing::warn!(error = %err, "progress could not be encoded; dropping write");
                return;
            }
        };

        if let Err(err) = kv.set(PROGRESS_STORAGE_KEY, &raw).await {
            tracing::warn!(error = %err, "progress write failed");
        }
    }

    /// Flags the module as complete. Writes only when the flag changes.
    pub async fn mark_complete(&self, room_id: &RoomId, module_id: ModuleId) {
        let mut record = self.snapshot().await;
        if record.mark_complete(room_id, module_id) {
            tracing::debug!(room = %room_id, module = %module_id, "module completed");
            self.save(&record).await;
        }
    }

    pub async fn is_complete(&self, room_id: &RoomId, module_id: ModuleId) -> bool {
        self.snapshot().await.is_complete(room_id, module_id)
    }

    /// Rounded completion percent; 0 when `total_modules` is 0.
    pub async fn room_progress(&self, room_id: &RoomId, total_modules: usize) -> u8 {
        self.snapshot().await.room_percent(room_id, total_modules)
    }

    pub async fn completed_modules(&self, room_id: &RoomId) -> BTreeSet<ModuleId> {
        self.snapshot().await.completed_modules(room_id)
    }

    /// Forgets every flag for the room. Other rooms are untouched.
    pub async fn reset_room(&self, room_id: &RoomId) {
        let mut record = self.snapshot().await;
        if record.reset_room(room_id) {
            tracing::debug!(room = %room_id, "room progress reset");
            self.save(&record).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use async_trait::async_trait;
    use storage::{InMemoryStore, StorageError};

    fn room() -> RoomId {
        RoomId::new("anxiety")
    }

    fn store() -> (ProgressStore, InMemoryStore) {
        let kv = InMemoryStore::new();
        (ProgressStore::new(Arc::new(kv.clone())), kv)
    }

    struct FailingStore;

    #[async_trait]
    impl KeyValueStore for FailingStore {
        async fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Connection("offline".into()))
        }

        async fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Connection("offline".into()))
        }

        async fn delete(&self, _key: &str) -> Result<(), StorageError> {
            Err(StorageError::Connection("offline".into()))
        }
    }

    #[tokio::test]
    async fn empty_store_reads_as_nothing_completed() {
        let (progress, _) = store();
        assert!(!progress.is_complete(&room(), ModuleId::new(1)).await);
        assert_eq!(progress.room_progress(&room(), 7).await, 0);
    }

    #[tokio::test]
    async fn zero_modules_is_zero_percent() {
        let (progress, _) = store();
        progress.mark_complete(&room(), ModuleId::new(1)).await;
        assert_eq!(progress.room_progress(&room(), 0).await, 0);
    }

    #[tokio::test]
    async fn mark_complete_only_touches_that_module() {
        let (progress, _) = store();
        progress.mark_complete(&room(), ModuleId::new(1)).await;

        assert!(progress.is_complete(&room(), ModuleId::new(1)).await);
        assert!(!progress.is_complete(&room(), ModuleId::new(2)).await);
        assert!(
            !progress
                .is_complete(&RoomId::new("stress"), ModuleId::new(1))
                .await
        );
    }

    #[tokio::test]
    async fn mark_complete_is_idempotent() {
        let (progress, kv) = store();
        progress.mark_complete(&room(), ModuleId::new(1)).await;
        let once = kv.get(PROGRESS_STORAGE_KEY).await.unwrap();
        progress.mark_complete(&room(), ModuleId::new(1)).await;
        let twice = kv.get(PROGRESS_STORAGE_KEY).await.unwrap();

        assert_eq!(once, twice);
        assert_eq!(once.as_deref(), Some(r#"{"anxiety":{"1":true}}"#));
    }

    #[tokio::test]
    async fn two_of_four_is_fifty_percent() {
        let (progress, _) = store();
        progress.mark_complete(&room(), ModuleId::new(1)).await;
        progress.mark_complete(&room(), ModuleId::new(2)).await;
        assert_eq!(progress.room_progress(&room(), 4).await, 50);
        assert_eq!(
            progress.completed_modules(&room()).await,
            BTreeSet::from([ModuleId::new(1), ModuleId::new(2)])
        );
    }

    #[tokio::test]
    async fn reset_room_clears_only_that_room() {
        let (progress, _) = store();
        let stress = RoomId::new("stress");
        for id in 1..=3 {
            progress.mark_complete(&room(), ModuleId::new(id)).await;
        }
        progress.mark_complete(&stress, ModuleId::new(1)).await;

        progress.reset_room(&room()).await;

        assert_eq!(progress.room_progress(&room(), 7).await, 0);
        for id in 1..=7 {
            assert!(!progress.is_complete(&room(), ModuleId::new(id)).await);
        }
        assert!(progress.is_complete(&stress, ModuleId::new(1)).await);
    }

    #[tokio::test]
    async fn corrupt_blob_reads_as_empty_and_is_replaced_on_write() {
        let (progress, kv) = store();
        kv.set(PROGRESS_STORAGE_KEY, "{not json").await.unwrap();

        assert!(progress.snapshot().await.is_empty());
        assert_eq!(progress.room_progress(&room(), 4).await, 0);

        progress.mark_complete(&room(), ModuleId::new(2)).await;
        assert!(progress.is_complete(&room(), ModuleId::new(2)).await);
        assert_eq!(
            kv.get(PROGRESS_STORAGE_KEY).await.unwrap().as_deref(),
            Some(r#"{"anxiety":{"2":true}}"#)
        );
    }

    #[tokio::test]
    async fn per_room_array_layout_is_not_understood() {
        let (progress, kv) = store();
        kv.set(PROGRESS_STORAGE_KEY, "[1,2,3]").await.unwrap();
        assert!(progress.snapshot().await.is_empty());
    }

    #[tokio::test]
    async fn failing_backend_degrades_to_empty() {
        let progress = ProgressStore::new(Arc::new(FailingStore));
        progress.mark_complete(&room(), ModuleId::new(1)).await;
        assert!(!progress.is_complete(&room(), ModuleId::new(1)).await);
        progress.reset_room(&room()).await;
    }

    #[tokio::test]
    async fn detached_store_is_a_no_op() {
        let progress = ProgressStore::detached();
        assert!(progress.is_detached());
        progress.mark_complete(&room(), ModuleId::new(1)).await;
        assert!(!progress.is_complete(&room(), ModuleId::new(1)).await);
        assert_eq!(progress.room_progress(&room(), 1).await, 0);
    }
}

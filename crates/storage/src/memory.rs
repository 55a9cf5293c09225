//! In-process media store.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use bytes::Bytes;
use maya_core::storage::{MediaStore, StorageError};
use tokio::sync::RwLock;

/// An object held by [`InMemoryMediaStore`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredObject {
    pub body: Bytes,
    pub content_type: String,
}

/// Keeps uploads in a map. Can be told to fail every write.
#[derive(Debug)]
pub struct InMemoryMediaStore {
    public_base_url: String,
    objects: RwLock<HashMap<String, StoredObject>>,
    fail_writes: AtomicBool,
}

impl InMemoryMediaStore {
    pub fn new(public_base_url: impl Into<String>) -> Self {
        Self {
            public_base_url: public_base_url.into(),
            objects: RwLock::new(HashMap::new()),
            fail_writes: AtomicBool::new(false),
        }
    }

    /// Make subsequent `put` calls fail with a backend error.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    pub async fn get(&self, key: &str) -> Option<StoredObject> {
        self.objects.read().await.get(key).cloned()
    }

    pub async fn len(&self) -> usize {
        self.objects.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.objects.read().await.is_empty()
    }
}

#[async_trait]
impl MediaStore for InMemoryMediaStore {
    async fn put(&self, key: &str, body: Bytes, content_type: &str) -> Result<(), StorageError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StorageError("simulated storage outage".into()));
        }
        self.objects.write().await.insert(
            key.to_string(),
            StoredObject {
                body,
                content_type: content_type.to_string(),
            },
        );
        Ok(())
    }

    fn public_url(&self, key: &str) -> String {
        crate::join_public_url(&self.public_base_url, key)
    }
}

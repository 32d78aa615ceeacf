use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{CrudRepository, Resource, StoreKey, UniqueKey};
use crate::errors::ServiceError;

/// Map-backed repository; records are kept ordered by id.
///
/// Each call takes the lock once, so a service-level check followed by an
/// insert is still two separate steps.
pub struct InMemoryRepository<T: Resource> {
    inner: RwLock<MemoryState<T>>,
}

struct MemoryState<T: Resource> {
    rows: BTreeMap<T::Id, T::Record>,
    seq: u64,
}

impl<T: Resource> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self { inner: RwLock::new(MemoryState { rows: BTreeMap::new(), seq: 0 }) }
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.rows.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl<T: Resource> Default for InMemoryRepository<T> {
    fn default() -> Self { Self::new() }
}

#[async_trait]
impl<T: Resource> CrudRepository<T> for InMemoryRepository<T> {
    async fn find_by_id(&self, id: T::Id) -> Result<Option<T::Record>, ServiceError> {
        let state = self.inner.read().await;
        Ok(state.rows.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<T::Record>, ServiceError> {
        let state = self.inner.read().await;
        Ok(state.rows.values().cloned().collect())
    }

    async fn find_page(&self, offset: u64, limit: u64) -> Result<Vec<T::Record>, ServiceError> {
        let state = self.inner.read().await;
        let skip = usize::try_from(offset).unwrap_or(usize::MAX);
        let take = usize::try_from(limit).unwrap_or(usize::MAX);
        Ok(state.rows.values().skip(skip).take(take).cloned().collect())
    }

    async fn find_by_unique(&self, key: &UniqueKey) -> Result<Option<T::Record>, ServiceError> {
        let state = self.inner.read().await;
        Ok(state
            .rows
            .values()
            .find(|r| T::unique_value(r, key.field).as_deref() == Some(key.value.as_str()))
            .cloned())
    }

    async fn insert(&self, draft: T::Draft) -> Result<T::Record, ServiceError> {
        let mut state = self.inner.write().await;
        state.seq += 1;
        let id = T::Id::generate(state.seq);
        if state.rows.contains_key(&id) {
            return Err(ServiceError::Db(format!("{} id {} already taken", T::NAME, id)));
        }
        let record = T::assemble(id, draft);
        state.rows.insert(id, record.clone());
        Ok(record)
    }

    async fn update(&self, record: T::Record) -> Result<Option<T::Record>, ServiceError> {
        let mut state = self.inner.write().await;
        match state.rows.get_mut(&T::id_of(&record)) {
            Some(slot) => {
                *slot = record.clone();
                Ok(Some(record))
            }
            None => Ok(None),
        }
    }

    async fn delete_by_id(&self, id: T::Id) -> Result<bool, ServiceError> {
        let mut state = self.inner.write().await;
        Ok(state.rows.remove(&id).is_some())
    }
}

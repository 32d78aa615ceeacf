use std::marker::PhantomData;
use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use super::{CrudRepository, Resource};
use crate::errors::ServiceError;
use crate::pagination::Pagination;

/// Application service for one resource kind.
///
/// The create path checks unique keys and then inserts; there is no
/// transaction around the two steps, so concurrent creates with the same key
/// can both succeed.
pub struct CrudService<T: Resource, R: ?Sized = dyn CrudRepository<T>> {
    repo: Arc<R>,
    _marker: PhantomData<fn() -> T>,
}

impl<T: Resource, R: ?Sized> Clone for CrudService<T, R> {
    fn clone(&self) -> Self {
        Self { repo: Arc::clone(&self.repo), _marker: PhantomData }
    }
}

impl<T, R> CrudService<T, R>
where
    T: Resource,
    R: CrudRepository<T> + ?Sized,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo, _marker: PhantomData }
    }

    pub fn repository(&self) -> &Arc<R> {
        &self.repo
    }

    /// Persist a new record built from `dto`; any id in `dto` is ignored.
    #[instrument(skip(self, dto), fields(resource = T::NAME))]
    pub async fn create(&self, dto: T::Dto) -> Result<T::Dto, ServiceError> {
        let draft = T::draft(dto);
        for key in T::unique_keys(&draft) {
            if self.repo.find_by_unique(&key).await?.is_some() {
                warn!(resource = T::NAME, field = key.field, value = %key.value, "unique_key_taken");
                return Err(ServiceError::conflict(T::NAME, key));
            }
        }
        let record = self.repo.insert(draft).await?;
        info!(resource = T::NAME, id = %T::id_of(&record), "created");
        Ok(T::to_dto(record))
    }

    /// Absence is `Ok(None)`, never an error.
    pub async fn get(&self, id: T::Id) -> Result<Option<T::Dto>, ServiceError> {
        Ok(self.repo.find_by_id(id).await?.map(T::to_dto))
    }

    pub async fn list(&self) -> Result<Vec<T::Dto>, ServiceError> {
        let records = self.repo.find_all().await?;
        debug!(resource = T::NAME, count = records.len(), "listed");
        Ok(records.into_iter().map(T::to_dto).collect())
    }

    pub async fn list_page(&self, page: Pagination) -> Result<Vec<T::Dto>, ServiceError> {
        let (offset, limit) = page.offset_limit();
        let records = self.repo.find_page(offset, limit).await?;
        Ok(records.into_iter().map(T::to_dto).collect())
    }

    /// Overwrite the mutable fields of an existing record.
    #[instrument(skip(self, dto), fields(resource = T::NAME))]
    pub async fn update(&self, id: T::Id, dto: T::Dto) -> Result<T::Dto, ServiceError> {
        let mut record = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found(T::NAME))?;
        T::apply(&mut record, T::draft(dto));
        let updated = self
            .repo
            .update(record)
            .await?
            .ok_or_else(|| ServiceError::not_found(T::NAME))?;
        info!(resource = T::NAME, id = %id, "updated");
        Ok(T::to_dto(updated))
    }

    /// Delete-if-exists; a missing row is not an error.
    pub async fn delete(&self, id: T::Id) -> Result<(), ServiceError> {
        let existed = self.repo.delete_by_id(id).await?;
        if existed {
            info!(resource = T::NAME, id = %id, "deleted");
        } else {
            debug!(resource = T::NAME, id = %id, "delete_of_missing_row");
        }
        Ok(())
    }
}

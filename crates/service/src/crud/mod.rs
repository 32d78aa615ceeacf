//! Generic CRUD contract shared by every managed resource.
//!
//! A resource is described once through [`Resource`] (its id, DTO, draft and
//! stored record types plus the mapping between them). Storage sits behind
//! [`CrudRepository`]; [`CrudService`] enforces uniqueness and maps records
//! back to DTOs on top of any repository.

use std::fmt::{Debug, Display};
use std::hash::Hash;

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use uuid::Uuid;

use crate::errors::ServiceError;

pub mod memory;
pub mod seaorm;
pub mod service;

pub use memory::InMemoryRepository;
pub use seaorm::{SeaOrmRepository, SeaOrmResource};
pub use service::CrudService;

/// Identifier type assigned by a store.
pub trait StoreKey: Copy + Ord + Hash + Display + Debug + Send + Sync + 'static {
    /// Key for the `seq`-th insert into a store that assigns ids itself.
    /// `seq` starts at 1.
    fn generate(seq: u64) -> Self;
}

impl StoreKey for i32 {
    fn generate(seq: u64) -> Self { i32::try_from(seq).unwrap_or(i32::MAX) }
}

impl StoreKey for i64 {
    fn generate(seq: u64) -> Self { i64::try_from(seq).unwrap_or(i64::MAX) }
}

impl StoreKey for Uuid {
    fn generate(_seq: u64) -> Self { Uuid::new_v4() }
}

/// A field whose value must not repeat across records of one resource.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UniqueKey {
    pub field: &'static str,
    pub value: String,
}

impl UniqueKey {
    pub fn new(field: &'static str, value: impl Into<String>) -> Self {
        Self { field, value: value.into() }
    }
}

/// Describes one resource kind: how a request DTO becomes a draft, how a
/// stored record is built, updated and projected back into a DTO.
pub trait Resource: Send + Sync + 'static {
    /// Singular name used in messages and logs, e.g. `employee`.
    const NAME: &'static str;

    type Id: StoreKey;
    type Dto: Clone + Debug + Serialize + DeserializeOwned + Send + Sync + 'static;
    /// Mutable fields only; never carries an id.
    type Draft: Clone + Debug + Send + Sync + 'static;
    type Record: Clone + Debug + Send + Sync + 'static;

    /// Drops any client-supplied id.
    fn draft(dto: Self::Dto) -> Self::Draft;

    /// Keys that must be free before a create.
    fn unique_keys(_draft: &Self::Draft) -> Vec<UniqueKey> { Vec::new() }

    fn id_of(record: &Self::Record) -> Self::Id;

    fn dto_id(dto: &Self::Dto) -> Option<Self::Id>;

    fn to_dto(record: Self::Record) -> Self::Dto;

    /// Build a stored record for a freshly assigned id.
    fn assemble(id: Self::Id, draft: Self::Draft) -> Self::Record;

    /// Copy the mutable fields of `draft` onto `record`. The id is untouched.
    fn apply(record: &mut Self::Record, draft: Self::Draft);

    /// Current value of a unique field on a stored record.
    fn unique_value(_record: &Self::Record, _field: &str) -> Option<String> { None }
}

/// Storage collaborator for a resource. Implementations own id assignment.
#[async_trait]
pub trait CrudRepository<T: Resource>: Send + Sync {
    async fn find_by_id(&self, id: T::Id) -> Result<Option<T::Record>, ServiceError>;

    async fn find_all(&self) -> Result<Vec<T::Record>, ServiceError>;

    async fn find_page(&self, offset: u64, limit: u64) -> Result<Vec<T::Record>, ServiceError>;

    async fn find_by_unique(&self, key: &UniqueKey) -> Result<Option<T::Record>, ServiceError>;

    async fn insert(&self, draft: T::Draft) -> Result<T::Record, ServiceError>;

    /// Persist an existing record. `None` when no row has its id.
    async fn update(&self, record: T::Record) -> Result<Option<T::Record>, ServiceError>;

    /// Whether a row was removed.
    async fn delete_by_id(&self, id: T::Id) -> Result<bool, ServiceError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_keys_follow_sequence() {
        assert_eq!(<i32 as StoreKey>::generate(1), 1);
        assert_eq!(<i64 as StoreKey>::generate(42), 42);
        assert_eq!(<i32 as StoreKey>::generate(u64::MAX), i32::MAX);
    }

    #[test]
    fn uuid_keys_are_random() {
        assert_ne!(<Uuid as StoreKey>::generate(1), <Uuid as StoreKey>::generate(1));
    }
}

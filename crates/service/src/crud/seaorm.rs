use std::marker::PhantomData;

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel, Iterable,
    PrimaryKeyToColumn, PrimaryKeyTrait, QueryFilter, QueryOrder, QuerySelect, Select,
};

use super::{CrudRepository, Resource, UniqueKey};
use crate::errors::ServiceError;

/// Binds a [`Resource`] to a SeaORM entity.
pub trait SeaOrmResource: Resource {
    type Entity: EntityTrait;

    /// Active model for a new row. Auto-increment keys stay `NotSet`.
    fn insert_model(draft: Self::Draft) -> <Self::Entity as EntityTrait>::ActiveModel;

    fn unique_column(field: &str) -> Option<<Self::Entity as EntityTrait>::Column>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmRepository<T> {
    db: DatabaseConnection,
    _marker: PhantomData<fn() -> T>,
}

impl<T> SeaOrmRepository<T> {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db, _marker: PhantomData }
    }
}

impl<T> Clone for SeaOrmRepository<T> {
    fn clone(&self) -> Self {
        Self::new(self.db.clone())
    }
}

/// `SELECT *` ordered by primary key.
fn ordered<E: EntityTrait>() -> Select<E> {
    let mut query = E::find();
    for key in E::PrimaryKey::iter() {
        query = query.order_by_asc(key.into_column());
    }
    query
}

#[async_trait]
impl<T, E> CrudRepository<T> for SeaOrmRepository<T>
where
    E: EntityTrait,
    T: SeaOrmResource<Entity = E> + Resource<Record = E::Model>,
    T::Id: Into<<E::PrimaryKey as PrimaryKeyTrait>::ValueType>,
    E::Model: IntoActiveModel<E::ActiveModel> + Sync,
    E::ActiveModel: Send,
{
    async fn find_by_id(&self, id: T::Id) -> Result<Option<T::Record>, ServiceError> {
        Ok(E::find_by_id(id).one(&self.db).await?)
    }

    async fn find_all(&self) -> Result<Vec<T::Record>, ServiceError> {
        Ok(ordered::<E>().all(&self.db).await?)
    }

    async fn find_page(&self, offset: u64, limit: u64) -> Result<Vec<T::Record>, ServiceError> {
        Ok(ordered::<E>().offset(offset).limit(limit).all(&self.db).await?)
    }

    async fn find_by_unique(&self, key: &UniqueKey) -> Result<Option<T::Record>, ServiceError> {
        let column = T::unique_column(key.field)
            .ok_or_else(|| ServiceError::Db(format!("{} has no column for unique field {}", T::NAME, key.field)))?;
        Ok(E::find().filter(column.eq(key.value.clone())).one(&self.db).await?)
    }

    async fn insert(&self, draft: T::Draft) -> Result<T::Record, ServiceError> {
        Ok(T::insert_model(draft).insert(&self.db).await?)
    }

    async fn update(&self, record: T::Record) -> Result<Option<T::Record>, ServiceError> {
        // every column marked changed so the whole record is written back
        let am = record.into_active_model().reset_all();
        match am.update(&self.db).await {
            Ok(m) => Ok(Some(m)),
            Err(DbErr::RecordNotUpdated) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn delete_by_id(&self, id: T::Id) -> Result<bool, ServiceError> {
        let res = E::delete_by_id(id).exec(&self.db).await?;
        Ok(res.rows_affected > 0)
    }
}

use thiserror::Error;

use crate::crud::UniqueKey;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error("{resource} already exists with given {field}: {value}")]
    Conflict {
        resource: &'static str,
        field: &'static str,
        value: String,
    },
    #[error("database error: {0}")]
    Db(String),
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self { Self::NotFound(format!("{} not found", entity)) }

    pub fn conflict(resource: &'static str, key: UniqueKey) -> Self {
        Self::Conflict { resource, field: key.field, value: key.value }
    }
}

impl From<sea_orm::DbErr> for ServiceError {
    fn from(e: sea_orm::DbErr) -> Self { Self::Db(e.to_string()) }
}

//! Service layer providing business-oriented CRUD operations on top of models.
//! - Separates business logic from data access.
//! - One generic `CrudService` serves every resource described by `crud::Resource`.
//! - Provides clear error types and documented interfaces.

pub mod errors;
pub mod pagination;
pub mod crud;
pub mod resources;
#[cfg(test)]
pub mod test_support;

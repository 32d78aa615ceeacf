//! HTTP surface shared by every resource: create, read, list, update, delete.
//! Extractor rejections are answered with the same JSON error body as
//! service errors.

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::{de::DeserializeOwned, Deserialize};

use common::types::Message;
use service::crud::{CrudService, Resource};
use service::pagination::Pagination;

use crate::errors::JsonApiError;

pub struct CrudState<T: Resource> {
    svc: CrudService<T>,
    base: Arc<str>,
}

impl<T: Resource> Clone for CrudState<T> {
    fn clone(&self) -> Self {
        Self { svc: self.svc.clone(), base: Arc::clone(&self.base) }
    }
}

/// Optional paging; without either parameter the whole collection is returned.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

impl ListQuery {
    fn pagination(&self) -> Option<Pagination> {
        if self.page.is_none() && self.per_page.is_none() {
            return None;
        }
        let default = Pagination::default();
        Some(Pagination {
            page: self.page.unwrap_or(default.page),
            per_page: self.per_page.unwrap_or(default.per_page),
        })
    }
}

pub fn crud_router<T>(base: &str, svc: CrudService<T>) -> Router
where
    T: Resource,
    T::Id: DeserializeOwned,
{
    let state = CrudState { svc, base: Arc::from(base) };
    Router::new()
        .route(base, get(list::<T>).post(create::<T>))
        .route(&format!("{base}/:id"), get(get_one::<T>).put(update::<T>).delete(delete_one::<T>))
        .with_state(state)
}

/// `employee` -> `Employee`
fn title(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

async fn create<T: Resource>(
    State(state): State<CrudState<T>>,
    body: Result<Json<T::Dto>, JsonRejection>,
) -> Result<impl IntoResponse, JsonApiError> {
    let Json(dto) = body?;
    let created = state.svc.create(dto).await?;
    let location = match T::dto_id(&created) {
        Some(id) => format!("{}/{}", state.base, id),
        None => state.base.to_string(),
    };
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(created)))
}

async fn get_one<T>(
    State(state): State<CrudState<T>>,
    id: Result<Path<T::Id>, PathRejection>,
) -> Result<Json<T::Dto>, JsonApiError>
where
    T: Resource,
    T::Id: DeserializeOwned,
{
    let Path(id) = id?;
    match state.svc.get(id).await? {
        Some(dto) => Ok(Json(dto)),
        None => Err(JsonApiError::not_found(T::NAME)),
    }
}

async fn list<T: Resource>(
    State(state): State<CrudState<T>>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Result<Json<Vec<T::Dto>>, JsonApiError> {
    let Query(query) = query?;
    let items = match query.pagination() {
        Some(page) => state.svc.list_page(page).await?,
        None => state.svc.list().await?,
    };
    Ok(Json(items))
}

async fn update<T>(
    State(state): State<CrudState<T>>,
    id: Result<Path<T::Id>, PathRejection>,
    body: Result<Json<T::Dto>, JsonRejection>,
) -> Result<Json<T::Dto>, JsonApiError>
where
    T: Resource,
    T::Id: DeserializeOwned,
{
    let Path(id) = id?;
    let Json(dto) = body?;
    Ok(Json(state.svc.update(id, dto).await?))
}

async fn delete_one<T>(
    State(state): State<CrudState<T>>,
    id: Result<Path<T::Id>, PathRejection>,
) -> Result<Json<Message>, JsonApiError>
where
    T: Resource,
    T::Id: DeserializeOwned,
{
    let Path(id) = id?;
    state.svc.delete(id).await?;
    Ok(Json(Message::new(format!("{} deleted successfully!", title(T::NAME)))))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_capitalizes_first_letter() {
        assert_eq!(title("employee"), "Employee");
        assert_eq!(title(""), "");
    }

    #[test]
    fn no_query_means_full_list() {
        assert_eq!(ListQuery::default().pagination(), None);
    }

    #[test]
    fn partial_query_fills_defaults() {
        let q = ListQuery { page: Some(3), per_page: None };
        assert_eq!(q.pagination(), Some(Pagination { page: 3, per_page: 20 }));
        let q = ListQuery { page: None, per_page: Some(5) };
        assert_eq!(q.pagination(), Some(Pagination { page: 1, per_page: 5 }));
    }
}

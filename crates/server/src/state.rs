use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::crud::{CrudRepository, CrudService, InMemoryRepository, Resource, SeaOrmRepository};
use service::resources::{Customer, Employee, Student};

/// One service per managed resource, each behind a type-erased repository.
#[derive(Clone)]
pub struct AppState {
    pub employees: CrudService<Employee>,
    pub students: CrudService<Student>,
    pub customers: CrudService<Customer>,
}

fn service_for<T, R>(repo: R) -> CrudService<T>
where
    T: Resource,
    R: CrudRepository<T> + 'static,
{
    let repo: Arc<dyn CrudRepository<T>> = Arc::new(repo);
    CrudService::new(repo)
}

impl AppState {
    pub fn with_database(db: DatabaseConnection) -> Self {
        Self {
            employees: service_for(SeaOrmRepository::<Employee>::new(db.clone())),
            students: service_for(SeaOrmRepository::<Student>::new(db.clone())),
            customers: service_for(SeaOrmRepository::<Customer>::new(db)),
        }
    }

    pub fn in_memory() -> Self {
        Self {
            employees: service_for(InMemoryRepository::<Employee>::new()),
            students: service_for(InMemoryRepository::<Student>::new()),
            customers: service_for(InMemoryRepository::<Customer>::new()),
        }
    }
}

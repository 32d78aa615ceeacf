use models::customer;
use sea_orm::Set;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::crud::{Resource, SeaOrmResource};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerDto {
    #[serde(default)]
    pub id: Option<Uuid>,
    pub name: String,
}

impl CustomerDto {
    pub fn new(name: &str) -> Self {
        Self { id: None, name: name.to_string() }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CustomerDraft {
    pub name: String,
}

/// `/api/v1/customer`
pub struct Customer;

impl Resource for Customer {
    const NAME: &'static str = "customer";

    type Id = Uuid;
    type Dto = CustomerDto;
    type Draft = CustomerDraft;
    type Record = customer::Model;

    fn draft(dto: CustomerDto) -> CustomerDraft { CustomerDraft { name: dto.name } }

    fn id_of(m: &customer::Model) -> Uuid { m.id }

    fn dto_id(dto: &CustomerDto) -> Option<Uuid> { dto.id }

    fn to_dto(m: customer::Model) -> CustomerDto { CustomerDto { id: Some(m.id), name: m.name } }

    fn assemble(id: Uuid, d: CustomerDraft) -> customer::Model { customer::Model { id, name: d.name } }

    fn apply(m: &mut customer::Model, d: CustomerDraft) { m.name = d.name; }
}

impl SeaOrmResource for Customer {
    type Entity = customer::Entity;

    // uuid keys are minted here rather than by the database
    fn insert_model(d: CustomerDraft) -> customer::ActiveModel {
        customer::ActiveModel { id: Set(Uuid::new_v4()), name: Set(d.name) }
    }

    fn unique_column(_field: &str) -> Option<customer::Column> { None }
}

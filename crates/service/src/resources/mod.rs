//! Concrete resources served by the generic CRUD service.

mod customer;
mod person;

pub use customer::{Customer, CustomerDraft, CustomerDto};
pub use person::{Employee, PersonDraft, PersonDto, Student};

//! SeaORM entities for the managed resources and pool setup.

pub mod db;
pub mod employee;
pub mod student;
pub mod customer;

#[cfg(test)]
mod tests;

//! CrudService: generic CRUD over a DocumentStore, with field allowlisting.

mod crud;
mod fields;
pub use crud::CrudService;
pub use fields::{FieldFilter, WriteMode};

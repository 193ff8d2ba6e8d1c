// Domain models (business entities)
pub mod models;

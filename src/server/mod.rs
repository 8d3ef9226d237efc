pub mod app;
mod deserializers;
pub mod error;
mod extract;
pub mod pagination;
pub mod quiz;
mod routes;

pub mod config;
pub mod error;
pub mod export;
pub mod hunt;
pub mod models;
pub mod providers;
pub mod routes;
pub mod sink;

//! invoice-core: Shared infrastructure for the invoice share service.
pub mod config;
pub mod error;
pub mod middleware;
pub mod observability;

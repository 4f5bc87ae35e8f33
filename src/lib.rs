pub mod config;
pub mod error;
pub mod gateway;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod session;
pub mod state;

#[cfg(test)]
pub(crate) mod testing;

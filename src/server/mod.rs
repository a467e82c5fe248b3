pub mod backend;
pub mod config;
pub mod proxy;
pub mod routes;
pub mod state;

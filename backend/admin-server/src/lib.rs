pub mod app;
pub mod configs;
pub mod consts;
pub mod error;
pub mod factories;
pub mod logger;
pub mod routes;
pub mod services;
pub mod utils;

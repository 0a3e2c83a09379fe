pub mod configuration;
pub mod domain;
pub mod errors;
pub mod routes;
pub mod services;
pub mod startup;

pub mod catalog;
pub mod models;
pub mod ports;
pub mod services;

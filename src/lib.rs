pub mod app_state;
pub mod config;
pub mod errors;
pub mod models;
pub mod repositories;
pub mod routing;
pub mod services;
pub mod store;
pub mod views;

#[cfg(test)]
pub mod test_utils;

//! ai-service: static event and interest recommendations over HTTP.
pub mod config;
pub mod handlers;
pub mod models;
pub mod services;
pub mod startup;

//! HTTP API: routing, request/response mapping, configuration, bootstrap.

pub mod app;
pub mod config;
pub mod telemetry;

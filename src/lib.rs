//! salaries - salary records API with aggregate statistics
//!
//! Layers, leaves first: `storage` (SQLite record store), `service` (access
//! layer), `auth` (credential check and bearer tokens), `http_server` (axum
//! routes), `cli` (configuration and commands).

pub mod auth;
pub mod cli;
pub mod http_server;
pub mod observability;
pub mod salary;
pub mod service;
pub mod storage;

//! Lazzat web server library.
//!
//! Exposes the server's modules so the CLI and tests can reuse the
//! configuration, repositories, and router. The binary in `main.rs` is a
//! thin wrapper around [`routes::routes`].

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;

//! malo-id-generator web service library.
//!
//! This crate primarily ships a `malo-id-generator` binary, but we expose a
//! small library surface to enable integration testing and reuse.

pub mod api;
pub mod config;
pub mod render;
pub mod state;

//! TCM Movies CLI Library
//!
//! This module exposes the catalog, cache, filter and output modules for use
//! by the binary and in integration tests.

pub mod cache;
pub mod cli;
pub mod data;
pub mod filter;
pub mod logging;
pub mod render;

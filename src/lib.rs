//! Curator Server Library
//!
//! This library exposes the internal modules for testing and potential reuse.

pub mod catalog_store;
pub mod config;
pub mod curation;
pub mod search;
pub mod server;

//! Custom extractors for Axum handlers.
//!
//! This module provides reusable extractors that standardize error
//! handling across your API.

pub mod json;

pub use json::JsonBody;

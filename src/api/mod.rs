//! REST API client module for the CRM.
//!
//! This module provides the `ApiClient` for querying plant records, the
//! pipeline list entries, and individual people.
//!
//! Requests authenticate with a static bearer token read from disk.

pub mod client;
pub mod error;

pub use client::ApiClient;
pub use error::ApiError;

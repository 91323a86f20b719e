//! Territory map data fetcher.
//!
//! Pulls plant records and their sales-pipeline stage from the CRM, places
//! each plant by city, attaches its main contact, and writes the result as a
//! JSON array for the map.

pub mod api;
pub mod app;
pub mod auth;
pub mod config;
pub mod geo;
pub mod models;
pub mod pipeline;
pub mod report;

//! rulekit HTTP Server Library
//!
//! Provides the REST API components and the rule service for testing and reuse.

pub mod api;
pub mod config;
pub mod error;
pub mod service;

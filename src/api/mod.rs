//! JSON API and redirect layer.
//!
//! Translates HTTP requests into engine calls and formats the responses.
//!
//! # Modules
//!
//! - [`dto`] - Request/response serialization
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Rate limiting and request tracing
//! - [`routes`] - Route configuration

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;

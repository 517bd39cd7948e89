//! Utility functions shared across layers.
//!
//! - [`code_generator`] - Random short code generation
//! - [`db_error`] - SQLx error classification
//! - [`location`] - Redirect `Location` header values
//! - [`short_link`] - Public short link composition

pub mod code_generator;
pub mod db_error;
pub mod location;
pub mod short_link;

//! Core types and trait definitions for the tagcard contact service.
//!
//! This crate is deliberately free of HTTP and database dependencies. The
//! formatter, the storage backends and the JSON API all build on it.

pub mod contact;
pub mod error;
pub mod memory;
pub mod store;

pub use error::{Error, FieldViolation, Result};

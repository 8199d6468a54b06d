//! CLI command implementations.

pub mod builtin;
pub mod common;
pub mod config;
pub mod convert;
pub mod inspect;

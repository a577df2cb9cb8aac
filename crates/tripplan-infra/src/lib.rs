//! Infrastructure layer for the trip plan builder.
//!
//! Everything that touches the filesystem or stdin lives here: data
//! directory resolution, `config.toml` loading, sample template loading,
//! and reading form values from JSON documents.

pub mod config;
pub mod form;
pub mod template;

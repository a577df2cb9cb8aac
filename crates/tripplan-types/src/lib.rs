//! Shared domain types for the trip plan payload builder.
//!
//! This crate holds the wire contract shared by every layer: the loosely
//! typed `FormValues` coming from a UI, the `RequestPayload` sent to the
//! planning backend, the `SampleRequest` template used for fallbacks, and
//! their associated error types.
//!
//! Zero infrastructure dependencies -- only serde, serde_json, thiserror.

pub mod config;
pub mod error;
pub mod form;
pub mod request;
pub mod sample;
pub mod secret;

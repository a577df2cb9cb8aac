//! Payload construction logic for the trip plan builder.
//!
//! This crate turns raw `FormValues` into a complete `RequestPayload`,
//! filling gaps from a `SampleRequest` template. It depends only on
//! `tripplan-types` -- never on `tripplan-infra` or any IO crate.

pub mod payload;

pub use payload::builder::{build_request_payload, PayloadBuilder};
pub use payload::purpose::{infer_purpose, Objective};

//! Form-to-payload adaptation.
//!
//! Defines the two fallback rules (truthy and nullish), the objective to
//! purpose mapping, and the `PayloadBuilder` that applies them field by
//! field against a template.

pub mod builder;
pub mod fallback;
pub mod purpose;

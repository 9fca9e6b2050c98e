//! Core data model types for message inputs, decoded bodies, and render plans.

pub mod message;
pub mod plan;

//! `mailview` — turn a raw email message into something displayable.
//!
//! This crate provides the core library for decoding MIME message bodies,
//! segmenting plain-text replies into new content and quoted history, and
//! selecting a render plan for a consuming UI.

pub mod config;
pub mod error;
pub mod model;
pub mod parser;
pub mod render;

//! Concept Map Core Types
//!
//! This crate provides the foundational types shared by the concept-map
//! crates:
//!
//! - **Identifiers**: interned, label-derived topic ids ([`identifier::Id`])
//! - **Topics**: the topic graph model ([`topic`] module)
//! - **Builder**: graph normalization and validation ([`builder::build`])
//! - **Geometry**: points, sizes and bounds ([`geometry`] module)
//! - **Colors**: CSS color parsing ([`color::Color`])

pub mod builder;
pub mod color;
pub mod geometry;
pub mod identifier;
pub mod topic;

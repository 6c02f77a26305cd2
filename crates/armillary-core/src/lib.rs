//! Armillary Core Types and Definitions
//!
//! This crate provides the foundational types for the Armillary diagram
//! generator. It includes:
//!
//! - **Identifiers**: Efficient string-interned identifiers ([`identifier::Id`])
//! - **Model**: The declarative entity-relationship model ([`model`] module):
//!   entities with typed attributes, labeled groups, and labeled directed
//!   relationships, plus structural validation.

pub mod identifier;
pub mod model;

//! CMV Core Types
//!
//! This crate provides the foundational types used throughout CMV:
//! - Identity handles (EntityKind, Subject)
//! - The component model (Module, Specification, Implementation, Dependency,
//!   Message, Property and the references between them)
//! - Coerced property values (the Value enum)
//! - Version parsing and comparison
//! - Common error types

mod dependency;
mod entity;
mod error;
mod id;
mod message;
mod property;
mod reference;
mod value;
mod version;

pub use dependency::*;
pub use entity::*;
pub use error::*;
pub use id::*;
pub use message::*;
pub use property::*;
pub use reference::*;
pub use value::*;
pub use version::*;

//! # Domain Layer
//!
//! Entities, value objects and invariant errors. Free of I/O.

pub mod entities;
pub mod errors;
pub mod value_objects;

//! # Application Layer
//!
//! Use cases over the domain and the persistence/client ports.

pub mod dto;
pub mod error;
pub mod services;

//! # Infrastructure Layer
//!
//! Adapters to the outside world: persistence and remote lookup clients.

pub mod clients;
pub mod persistence;

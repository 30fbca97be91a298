//! # Tour Ratings
//!
//! REST service for customer ratings of tours.
//!
//! Customers rate a tour with a score from 0 to 5 and an optional comment.
//! Ratings are keyed by tour and customer; a customer rates a tour at most
//! once. The service also exposes the tour catalog and read-only lookups
//! against remote guest and room services.
//!
//! # Architecture
//!
//! - [`domain`]: entities, value objects, validation errors
//! - [`application`]: rating and catalog use cases
//! - [`infrastructure`]: in-memory and PostgreSQL stores, HTTP lookup clients
//! - [`api`]: axum REST surface
//! - [`config`] and [`bootstrap`]: settings and startup wiring

pub mod api;
pub mod application;
pub mod bootstrap;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use bootstrap::{BootstrapError, build_state, init_tracing, run};
pub use config::AppConfig;

//! # API Layer
//!
//! Inbound adapters. Only REST is exposed.

pub mod rest;

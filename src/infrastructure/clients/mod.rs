//! # Remote Lookup Clients
//!
//! Explicit client objects for the guest and room services.
//!
//! - [`GuestClient`]: `/guests` lookups, falls back when the service is unavailable
//! - [`RoomClient`]: `/rooms` lookups, no fallback
//!
//! Both share the [`HttpClient`] wrapper and report failures as
//! [`ClientError`].

pub mod error;
pub mod fallback;
pub mod guest_client;
pub mod http_client;
pub mod room_client;
pub mod traits;

pub use error::{ClientError, ClientResult};
pub use fallback::FallbackPolicy;
pub use guest_client::GuestClient;
pub use http_client::HttpClient;
pub use room_client::RoomClient;
pub use traits::{GuestLookup, RoomLookup};

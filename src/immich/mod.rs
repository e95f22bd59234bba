//! Immich API integration
//!
//! Read-only access to the album collection of an Immich server.
//! The rest of the crate only ever sees [`Album`] values and [`FetchError`];
//! the wire shape lives in `dto` and the transport in `client`.
//!
//! API docs: https://immich.app/docs/api

pub mod dto;
mod client;

pub use client::{FetchError, ImmichClient};
pub use dto::Album;

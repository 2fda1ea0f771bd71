//! Networking: the HTTP dictionary service and its client
//!
//! This module provides:
//! - `GET /validate-word/{word}` served with axum over a shared word repository
//! - An HTTP [`DictionaryClient`](crate::game::DictionaryClient) built on reqwest
//! - The JSON wire format both sides agree on

pub mod client;
pub mod protocol;
pub mod server;

pub use client::{HttpDictionary, DEFAULT_DICTIONARY_URL};
pub use protocol::ValidationResponse;
pub use server::{router, serve, DEFAULT_PORT};

//! HTTP networking module
//!
//! Provides the shared HTTP client used for chat, embedding and search calls.

mod client;

pub use client::{HttpClient, HttpResponse};

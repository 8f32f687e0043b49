//! API Access
//!
//! HTTP client functions and the wire types they exchange.

pub mod client;
pub mod types;

pub use client::*;

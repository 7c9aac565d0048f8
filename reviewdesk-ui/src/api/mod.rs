//! API Access
//!
//! Browser-side HTTP calls to the reviews backend.

pub mod client;

pub use client::*;

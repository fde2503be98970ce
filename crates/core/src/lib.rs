//! Cartwheel Core - Shared types library.
//!
//! This crate provides the domain types used across all Cartwheel components:
//! - `store` - The headless cart library (store, catalog gateway, state handle)
//! - `cli` - The command-line consumer that renders the cart
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients, no async.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - `ItemId` newtype and the `CartItem` wire/domain type

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;

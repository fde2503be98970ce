//! Core types for Cartwheel.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod item;

pub use id::ItemId;
pub use item::CartItem;

//! Cartwheel Store - headless cart library.
//!
//! Owns canonical cart state and synchronizes it once with a remote catalog.
//! The UI layer is an external collaborator: it dispatches the named
//! operations exposed here and reads the derived aggregates back, it never
//! touches the state directly.
//!
//! # Architecture
//!
//! - [`store`] - the cart state owner and its transition operations
//! - [`catalog`] - one-shot fetch of the initial item list over HTTP
//! - [`modal`] - the open/closed flag the UI renders alongside the cart
//! - [`state`] - a cheaply-cloneable handle bundling the above for consumers
//! - [`config`] - environment-driven configuration
//!
//! # Example
//!
//! ```rust,ignore
//! use cartwheel_store::{AppState, CartConfig};
//!
//! let state = AppState::new(CartConfig::from_env()?)?;
//! state.load_initial_items("random").await;
//!
//! let mut cart = state.cart_mut();
//! cart.recompute_totals();
//! println!("{} items", cart.total_quantity());
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod config;
pub mod modal;
pub mod state;
pub mod store;

pub use catalog::{CatalogClient, CatalogError};
pub use config::{CartConfig, ConfigError};
pub use modal::ModalFlag;
pub use state::AppState;
pub use store::{CartError, CartStore, LoadState};

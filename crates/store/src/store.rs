//! The cart store: canonical cart state and its transition operations.
//!
//! The store is the exclusive owner of cart state; every write goes through
//! a named operation taking `&mut self`, and reads go through `&self`
//! accessors. There is no hidden bookkeeping: the derived aggregates are
//! only brought back in sync by an explicit [`CartStore::recompute_totals`]
//! call, which the consumer must issue after every mutation and once after
//! the initial fetch resolves. Between a mutation and that call the totals
//! are stale; that window is part of the contract, not a bug to paper over.

use rust_decimal::Decimal;
use thiserror::Error;

use cartwheel_core::{CartItem, ItemId};

use crate::catalog::CatalogError;

/// Errors returned by cart mutation operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CartError {
    /// The referenced item is not in the cart.
    #[error("No cart item with id: {0}")]
    NotFound(ItemId),
}

/// Load lifecycle of the cart contents.
///
/// `Pending` from construction until the initial fetch resolves; resolution
/// (success or failure alike) moves the store to `Ready` exactly once, and
/// nothing moves it back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Pending,
    Ready,
}

/// Canonical cart state and its transition operations.
///
/// Created once per session with an empty item list; mutated in place and
/// never reordered (item order is the fetch response order). Single-writer:
/// the `&mut self` receivers serialize all writes, and sharing across tasks
/// goes through [`crate::state::AppState`].
#[derive(Debug)]
pub struct CartStore {
    items: Vec<CartItem>,
    total_quantity: u64,
    total_price: Decimal,
    load_state: LoadState,
    last_fetch_error: Option<String>,
}

impl CartStore {
    /// Create an empty cart in the `Pending` load state.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            items: Vec::new(),
            total_quantity: 0,
            total_price: Decimal::ZERO,
            load_state: LoadState::Pending,
            last_fetch_error: None,
        }
    }

    // =========================================================================
    // Read surface
    // =========================================================================

    /// The cart line items, in fetch response order.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Total quantity across all lines, as of the last recompute.
    #[must_use]
    pub const fn total_quantity(&self) -> u64 {
        self.total_quantity
    }

    /// Total price across all lines, as of the last recompute.
    #[must_use]
    pub const fn total_price(&self) -> Decimal {
        self.total_price
    }

    /// True until the initial fetch resolves.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.load_state == LoadState::Pending
    }

    /// Message from the most recent failed fetch, if any.
    ///
    /// Lets consumers tell an empty catalog apart from a failed load.
    #[must_use]
    pub fn last_fetch_error(&self) -> Option<&str> {
        self.last_fetch_error.as_deref()
    }

    // =========================================================================
    // Mutation operations
    // =========================================================================

    /// Remove every item from the cart.
    ///
    /// Totals are stale until [`Self::recompute_totals`] is called.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Remove the item with the given id.
    ///
    /// A missing id is a no-op, not an error. Totals are stale until
    /// [`Self::recompute_totals`] is called.
    pub fn remove_item(&mut self, id: &ItemId) {
        self.items.retain(|item| &item.id != id);
    }

    /// Increment the amount of the item with the given id by one.
    ///
    /// Totals are stale until [`Self::recompute_totals`] is called.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::NotFound`] if the id is not in the cart.
    pub fn increase(&mut self, id: &ItemId) -> Result<(), CartError> {
        let item = self.find_mut(id)?;
        item.amount += 1;
        Ok(())
    }

    /// Decrement the amount of the item with the given id by one.
    ///
    /// The amount saturates at zero and the line stays in the cart: a
    /// zero-amount item still renders and is only removed explicitly.
    /// Totals are stale until [`Self::recompute_totals`] is called.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::NotFound`] if the id is not in the cart.
    pub fn decrease(&mut self, id: &ItemId) -> Result<(), CartError> {
        let item = self.find_mut(id)?;
        item.amount = item.amount.saturating_sub(1);
        Ok(())
    }

    /// Recompute both aggregates from the item list in one linear scan.
    ///
    /// Idempotent. The consumer calls this after every mutation and once
    /// after the initial fetch resolves; mutations never trigger it
    /// themselves.
    pub fn recompute_totals(&mut self) {
        let mut quantity: u64 = 0;
        let mut price = Decimal::ZERO;
        for item in &self.items {
            quantity += u64::from(item.amount);
            price += item.line_total();
        }
        self.total_quantity = quantity;
        self.total_price = price;
    }

    /// Apply the outcome of the initial catalog fetch.
    ///
    /// The single transition point for the load lifecycle:
    /// - success replaces `items` wholesale with the fetched list, silently
    ///   discarding any mutations made while the fetch was in flight (last
    ///   write wins), and clears any previous fetch error;
    /// - failure leaves `items` untouched and records the error message.
    ///
    /// Either way the store becomes `Ready` and never returns to `Pending`.
    /// Totals are stale until [`Self::recompute_totals`] is called.
    pub fn apply_fetch(&mut self, outcome: Result<Vec<CartItem>, CatalogError>) {
        match outcome {
            Ok(items) => {
                self.items = items;
                self.last_fetch_error = None;
            }
            Err(e) => {
                tracing::error!("Initial catalog fetch failed: {e}");
                self.last_fetch_error = Some(e.to_string());
            }
        }
        self.load_state = LoadState::Ready;
    }

    fn find_mut(&mut self, id: &ItemId) -> Result<&mut CartItem, CartError> {
        self.items
            .iter_mut()
            .find(|item| &item.id == id)
            .ok_or_else(|| CartError::NotFound(id.clone()))
    }
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new()
    }
}

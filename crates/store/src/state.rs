//! Application state shared across consumers.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::catalog::{CatalogClient, CatalogError};
use crate::config::CartConfig;
use crate::modal::ModalFlag;
use crate::store::CartStore;

/// Application state shared across all consumers.
///
/// This struct is cheaply cloneable via `Arc` and is the explicit handle
/// consumers hold instead of reaching for a global singleton. Writes follow
/// a single-writer discipline: one mutation completes fully before the next
/// begins, and guards are never held across an `.await`.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: CartConfig,
    catalog: CatalogClient,
    cart: RwLock<CartStore>,
    modal: RwLock<ModalFlag>,
}

impl AppState {
    /// Create a new application state with an empty, still-loading cart.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog HTTP client fails to build.
    pub fn new(config: CartConfig) -> Result<Self, CatalogError> {
        let catalog = CatalogClient::new(&config)?;

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog,
                cart: RwLock::new(CartStore::new()),
                modal: RwLock::new(ModalFlag::default()),
            }),
        })
    }

    /// Get a reference to the configuration.
    #[must_use]
    pub fn config(&self) -> &CartConfig {
        &self.inner.config
    }

    /// Get a reference to the catalog client.
    #[must_use]
    pub fn catalog(&self) -> &CatalogClient {
        &self.inner.catalog
    }

    /// Read access to the cart store (the polling interface).
    #[must_use]
    pub fn cart(&self) -> RwLockReadGuard<'_, CartStore> {
        self.inner.cart.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Write access to the cart store.
    ///
    /// Callers are the single writer; drop the guard before awaiting.
    #[must_use]
    pub fn cart_mut(&self) -> RwLockWriteGuard<'_, CartStore> {
        self.inner
            .cart
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Read access to the modal flag.
    #[must_use]
    pub fn modal(&self) -> RwLockReadGuard<'_, ModalFlag> {
        self.inner
            .modal
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Write access to the modal flag.
    #[must_use]
    pub fn modal_mut(&self) -> RwLockWriteGuard<'_, ModalFlag> {
        self.inner
            .modal
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Fetch the initial items and apply the outcome to the cart store.
    ///
    /// The fetch runs without holding any guard; the outcome is applied in
    /// one write at resolution, so a fetch that resolves after interleaved
    /// mutations replaces the items wholesale (last write wins). The caller
    /// is still responsible for `recompute_totals` afterwards, exactly as
    /// after any mutation.
    pub async fn load_initial_items(&self, query: &str) {
        let outcome = self.inner.catalog.fetch_initial_items(query).await;
        self.cart_mut().apply_fetch(outcome);
    }
}

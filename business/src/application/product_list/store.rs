use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::domain::product::model::Product;
use crate::domain::product_list::state::{ProductListEvent, ProductListState, RefreshTicket};

/// Holds the last fetched product list.
#[derive(Debug, Default)]
pub struct ProductListStore {
    state: Mutex<ProductListState>,
    tickets: AtomicU64,
}

impl ProductListStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draws the ticket for a list request about to be issued.
    pub fn next_ticket(&self) -> RefreshTicket {
        self.tickets.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn dispatch(&self, event: ProductListEvent) -> ProductListState {
        let mut guard = self.lock();
        let next = std::mem::take(&mut *guard).apply(event);
        *guard = next.clone();
        next
    }

    pub fn snapshot(&self) -> ProductListState {
        self.lock().clone()
    }

    pub fn products(&self) -> Vec<Product> {
        self.lock().products.clone()
    }

    fn lock(&self) -> MutexGuard<'_, ProductListState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

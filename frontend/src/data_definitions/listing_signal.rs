use common::product_listing::{ListingStateCell, ProductListState};
use dioxus::prelude::*;

/// Keeps the listing state in a signal so the page re-renders on every change.
#[derive(Clone, Copy, PartialEq)]
pub struct ListingSignal(pub Signal<ProductListState>);

impl ListingStateCell for ListingSignal {
    fn with_state<T>(&self, f: impl FnOnce(&ProductListState) -> T) -> T {
        f(&self.0.read())
    }

    fn update_state<T>(&self, f: impl FnOnce(&mut ProductListState) -> T) -> T {
        let mut signal = self.0;
        let mut state = signal.write();
        f(&mut state)
    }
}

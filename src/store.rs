//! Dashboard State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::collection;
use crate::models::Food;
use crate::sync::SyncResult;

/// Everything the dashboard renders from
#[derive(Clone, Debug, Default, Store)]
pub struct DashboardState {
    /// Foods in backend order
    pub foods: Vec<Food>,
    /// Snapshot loaded into the edit form
    pub editing_food: Option<Food>,
    pub add_modal_open: bool,
    pub edit_modal_open: bool,
}

/// Type alias for the store
pub type DashboardStore = Store<DashboardState>;

// ========================
// Store Helper Functions
// ========================
//
// The `store_apply_*` helpers take the outcome of a sync call. Failures are
// logged and leave the store as it was.

/// Replace the whole collection (initial load)
pub fn store_apply_loaded(store: &DashboardStore, result: SyncResult<Vec<Food>>) {
    match result {
        Ok(foods) => *store.foods().write() = foods,
        Err(err) => log::error!("failed to load foods: {}", err),
    }
}

/// Append a created food
pub fn store_apply_created(store: &DashboardStore, result: SyncResult<Food>) {
    match result {
        Ok(food) => collection::append_food(&mut store.foods().write(), food),
        Err(err) => log::error!("failed to create food: {}", err),
    }
}

/// Replace an updated food by ID
pub fn store_apply_updated(store: &DashboardStore, result: SyncResult<Food>) {
    match result {
        Ok(food) => collection::replace_food(&mut store.foods().write(), food),
        Err(err) => log::error!("failed to update food: {}", err),
    }
}

/// Remove a deleted food by ID
pub fn store_apply_deleted(store: &DashboardStore, result: SyncResult<u32>) {
    match result {
        Ok(id) => collection::remove_food(&mut store.foods().write(), id),
        Err(err) => log::error!("failed to delete food: {}", err),
    }
}

pub fn store_toggle_add_modal(store: &DashboardStore) {
    let mut binding = store.add_modal_open();
    let mut open = binding.write();
    *open = !*open;
}

pub fn store_toggle_edit_modal(store: &DashboardStore) {
    let mut binding = store.edit_modal_open();
    let mut open = binding.write();
    *open = !*open;
}

/// Select `food` for editing and open the edit modal.
///
/// Overwrites any previous target, even while the modal is open.
pub fn store_begin_edit(store: &DashboardStore, food: Food) {
    *store.editing_food().write() = Some(food);
    *store.edit_modal_open().write() = true;
}

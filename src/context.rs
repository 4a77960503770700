//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use leptos::prelude::*;

use crate::api::HttpFoodApi;
use crate::store::DashboardStore;

/// Dashboard-wide handles provided via context
#[derive(Clone, Copy)]
pub struct DashboardContext {
    pub store: DashboardStore,
    api: StoredValue<HttpFoodApi, LocalStorage>,
}

impl DashboardContext {
    pub fn new(store: DashboardStore, api: HttpFoodApi) -> Self {
        Self {
            store,
            api: StoredValue::new_local(api),
        }
    }

    /// Client handle to move into a spawned request
    pub fn api(&self) -> HttpFoodApi {
        self.api.get_value()
    }
}

pub fn use_dashboard() -> DashboardContext {
    use_context::<DashboardContext>().expect("DashboardContext should be provided")
}

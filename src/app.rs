//! Food Dashboard App
//!
//! Root component: owns the store and the API client for the page's lifetime.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::api::HttpFoodApi;
use crate::config::DashboardConfig;
use crate::context::DashboardContext;
use crate::dashboard::FoodDashboard;
use crate::store::DashboardState;

#[component]
pub fn App(config: DashboardConfig) -> impl IntoView {
    let store = Store::new(DashboardState::default());

    // Provide context to all children
    provide_context(DashboardContext::new(store, HttpFoodApi::new(config.api_url)));

    view! {
        <main class="app-layout">
            <FoodDashboard />
        </main>
    }
}

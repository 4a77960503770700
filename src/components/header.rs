//! Header Component

use leptos::prelude::*;

/// Brand bar with the "new dish" trigger
#[component]
pub fn Header(#[prop(into)] on_open_modal: Callback<()>) -> impl IntoView {
    view! {
        <header class="dashboard-header">
            <nav class="header-content">
                <span class="header-brand">"GoRestaurant"</span>
                <button type="button" class="new-food-btn" on:click=move |_| on_open_modal.run(())>
                    <span class="new-food-text">"New dish"</span>
                    <span class="new-food-icon">"+"</span>
                </button>
            </nav>
        </header>
    }
}

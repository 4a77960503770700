//! Food Dashboard
//!
//! The single screen: header, food list and the add/edit modals. Every user
//! action runs a sync operation and applies the backend's answer to the store.
//! Failures are logged and leave the store untouched.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{FoodCard, Header, ModalAddFood, ModalEditFood};
use crate::context::use_dashboard;
use crate::models::{Food, FoodDraft, FoodPatch};
use crate::store::{
    store_apply_created, store_apply_deleted, store_apply_loaded, store_apply_updated,
    store_begin_edit, store_toggle_add_modal, store_toggle_edit_modal, DashboardStateStoreFields,
};
use crate::sync;

#[component]
pub fn FoodDashboard() -> impl IntoView {
    let ctx = use_dashboard();
    let store = ctx.store;

    // Load foods once on mount
    Effect::new(move |_| {
        let api = ctx.api();
        spawn_local(async move {
            store_apply_loaded(&store, sync::load_foods(&api).await);
        });
    });

    let handle_add_food = move |draft: FoodDraft| {
        let api = ctx.api();
        spawn_local(async move {
            store_apply_created(&store, sync::add_food(&api, draft).await);
        });
    };

    let handle_update_food = move |draft: FoodDraft| {
        let api = ctx.api();
        let editing = store.editing_food().get_untracked();
        spawn_local(async move {
            let result = sync::update_food(&api, editing.as_ref(), FoodPatch::from(draft)).await;
            store_apply_updated(&store, result);
        });
    };

    let handle_toggle_available = move |food: Food| {
        let api = ctx.api();
        spawn_local(async move {
            store_apply_updated(&store, sync::toggle_availability(&api, &food).await);
        });
    };

    let handle_delete_food = move |id: u32| {
        let api = ctx.api();
        spawn_local(async move {
            store_apply_deleted(&store, sync::delete_food(&api, id).await);
        });
    };

    let toggle_modal = move |_: ()| store_toggle_add_modal(&store);
    let toggle_edit_modal = move |_: ()| store_toggle_edit_modal(&store);
    let handle_edit_food = move |food: Food| store_begin_edit(&store, food);

    view! {
        <Header on_open_modal=toggle_modal />
        <ModalAddFood
            is_open=Signal::derive(move || store.add_modal_open().get())
            set_is_open=toggle_modal
            on_add_food=handle_add_food
        />
        <ModalEditFood
            is_open=Signal::derive(move || store.edit_modal_open().get())
            set_is_open=toggle_edit_modal
            editing_food=Signal::derive(move || store.editing_food().get())
            on_update_food=handle_update_food
        />

        <div class="foods-container" data-testid="foods-list">
            {move || {
                store
                    .foods()
                    .get()
                    .into_iter()
                    .map(|food| view! {
                        <FoodCard
                            food=food
                            on_edit=handle_edit_food
                            on_delete=handle_delete_food
                            on_toggle_available=handle_toggle_available
                        />
                    })
                    .collect_view()
            }}
        </div>
    }
}

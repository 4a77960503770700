//! Food Form Fields
//!
//! Inputs shared by the add and edit modals, bound to a draft signal.

use leptos::prelude::*;

use crate::models::{DraftField, FoodDraft};

/// Single text input bound to one draft field
#[component]
fn DraftInput(draft: RwSignal<FoodDraft>, field: DraftField) -> impl IntoView {
    view! {
        <input
            type="text"
            class="form-input"
            name=field.name()
            placeholder=field.placeholder()
            prop:value=move || draft.with(|d| field.get(d).to_string())
            on:input=move |ev| {
                let value = event_target_value(&ev);
                draft.update(|d| field.set(d, value));
            }
        />
    }
}

/// All food inputs in form order
#[component]
pub fn FoodFormFields(draft: RwSignal<FoodDraft>) -> impl IntoView {
    view! {
        <div class="food-form-fields">
            {DraftField::ALL
                .iter()
                .map(|field| view! { <DraftInput draft=draft field=*field /> })
                .collect_view()}
        </div>
    }
}

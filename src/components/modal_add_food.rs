//! Add Food Modal
//!
//! Form for creating a new dish.

use leptos::prelude::*;

use crate::components::food_form::FoodFormFields;
use crate::components::modal::Modal;
use crate::models::FoodDraft;

/// Dispatches the draft, clears the form and closes itself on submit
#[component]
pub fn ModalAddFood(
    #[prop(into)] is_open: Signal<bool>,
    #[prop(into)] set_is_open: Callback<()>,
    #[prop(into)] on_add_food: Callback<FoodDraft>,
) -> impl IntoView {
    let draft = RwSignal::new(FoodDraft::default());

    let handle_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        on_add_food.run(draft.get_untracked());
        draft.set(FoodDraft::default());
        set_is_open.run(());
    };

    view! {
        <Modal is_open=is_open set_is_open=set_is_open>
            <form class="food-form" on:submit=handle_submit>
                <h1>"New dish"</h1>
                <FoodFormFields draft=draft />
                <button type="submit" class="form-submit" data-testid="add-food-button">
                    "Add dish"
                </button>
            </form>
        </Modal>
    }
}

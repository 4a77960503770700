//! Edit Food Modal
//!
//! Form for editing the selected dish, seeded from the edit target.

use leptos::prelude::*;

use crate::components::food_form::FoodFormFields;
use crate::components::modal::Modal;
use crate::models::{Food, FoodDraft};

#[component]
pub fn ModalEditFood(
    #[prop(into)] is_open: Signal<bool>,
    #[prop(into)] set_is_open: Callback<()>,
    #[prop(into)] editing_food: Signal<Option<Food>>,
    #[prop(into)] on_update_food: Callback<FoodDraft>,
) -> impl IntoView {
    let draft = RwSignal::new(FoodDraft::default());

    // Reseed whenever a (possibly different) food is selected
    Effect::new(move |_| {
        if let Some(food) = editing_food.get() {
            draft.set(FoodDraft::from(&food));
        }
    });

    let handle_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        on_update_food.run(draft.get_untracked());
        set_is_open.run(());
    };

    view! {
        <Modal is_open=is_open set_is_open=set_is_open>
            <form class="food-form" on:submit=handle_submit>
                <h1>"Edit dish"</h1>
                <FoodFormFields draft=draft />
                <button type="submit" class="form-submit" data-testid="edit-food-button">
                    "Save dish"
                </button>
            </form>
        </Modal>
    }
}

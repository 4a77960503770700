//! Food Card Component
//!
//! One dish in the list with edit, delete and availability controls.

use leptos::prelude::*;

use crate::models::Food;

#[component]
pub fn FoodCard(
    food: Food,
    #[prop(into)] on_edit: Callback<Food>,
    #[prop(into)] on_delete: Callback<u32>,
    #[prop(into)] on_toggle_available: Callback<Food>,
) -> impl IntoView {
    let id = food.id;
    let available = food.available;
    let card_class = if available { "food-card" } else { "food-card unavailable" };
    let switch_id = format!("available-switch-{}", id);
    let switch_label_for = switch_id.clone();
    let Food { name, description, price, image, .. } = food.clone();
    let alt = name.clone();
    let edit_target = food.clone();
    let toggle_target = food;

    view! {
        <div class=card_class>
            <header class="food-image">
                <img src=image alt=alt />
            </header>
            <section class="food-body">
                <h2>{name}</h2>
                <p>{description}</p>
                <p class="food-price">"$ " <b>{price}</b></p>
            </section>
            <section class="food-footer">
                <div class="icon-container">
                    <button
                        type="button"
                        class="icon edit-btn"
                        data-testid=format!("edit-food-{}", id)
                        on:click=move |_| on_edit.run(edit_target.clone())
                    >
                        "✎"
                    </button>
                    <button
                        type="button"
                        class="icon delete-btn"
                        data-testid=format!("remove-food-{}", id)
                        on:click=move |_| on_delete.run(id)
                    >
                        "×"
                    </button>
                </div>
                <div class="availability-container">
                    <p>{if available { "Available" } else { "Unavailable" }}</p>
                    <label class="switch" for=switch_label_for>
                        <input
                            id=switch_id
                            type="checkbox"
                            prop:checked=available
                            data-testid=format!("change-status-food-{}", id)
                            on:change=move |ev| {
                                // The store drives the switch; undo the browser's own flip
                                event_target::<web_sys::HtmlInputElement>(&ev).set_checked(available);
                                on_toggle_available.run(toggle_target.clone());
                            }
                        />
                        <span class="slider"></span>
                    </label>
                </div>
            </section>
        </div>
    }
}

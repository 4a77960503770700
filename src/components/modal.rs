//! Modal Component
//!
//! Overlay dialog shown while `is_open` is true. Clicking the backdrop asks
//! the owner to close it.

use leptos::prelude::*;

#[component]
pub fn Modal(
    #[prop(into)] is_open: Signal<bool>,
    #[prop(into)] set_is_open: Callback<()>,
    children: ChildrenFn,
) -> impl IntoView {
    view! {
        <Show when=move || is_open.get()>
            <div class="modal-overlay" on:click=move |_| set_is_open.run(())>
                <div class="modal-content" on:click=|ev| ev.stop_propagation()>
                    {children()}
                </div>
            </div>
        </Show>
    }
}

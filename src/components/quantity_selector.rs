use leptos::*;

use crate::core::quantity::Quantity;

#[component]
pub fn QuantitySelector(
    quantity: RwSignal<Quantity>,
) -> impl IntoView {
    view! {
        <div class="quantity-selector">
            <button
                class="quantity-btn quantity-btn-left"
                aria-label="Decrease quantity"
                disabled=move || !quantity.get().can_decrease()
                on:click=move |_| quantity.update(|q| *q = q.decrease())
            >
                "−"
            </button>
            <input
                type="number"
                class="quantity-input"
                min="1"
                prop:value=move || quantity.get().get().to_string()
                on:input=move |ev| {
                    let raw = event_target_value(&ev);
                    quantity.update(|q| *q = q.set_from_text(&raw));
                }
            />
            <button
                class="quantity-btn quantity-btn-right"
                aria-label="Increase quantity"
                on:click=move |_| quantity.update(|q| *q = q.increase())
            >
                "+"
            </button>
        </div>
    }
}

//! Cart Panel Component
//!
//! Cart lines with remove controls and the running total. The total is
//! recomputed from the ledger on every render, never cached.

use leptos::prelude::*;

use crate::cart;
use crate::context::AppContext;

#[component]
pub fn CartPanel() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let total = move || cart::format_amount(cart::cart_total(&ctx.cart.get()));

    view! {
        <aside class="cart-panel">
            <h3 class="cart-header">"Your Cart"</h3>

            <ul class="cart-list">
                <For
                    each=move || ctx.cart.get()
                    key=|item| (item.id.clone(), item.quantity)
                    children=move |item| {
                        let id = item.id.clone();
                        view! {
                            <li class="cart-item">
                                <span class="cart-item-info">
                                    {item.name.clone()}
                                    <span class="cart-item-price">
                                        "$" {cart::format_amount(item.price)} " × " {item.quantity}
                                    </span>
                                </span>
                                <button
                                    class="cart-remove-btn"
                                    on:click=move |_| ctx.remove_from_cart(&id)
                                >
                                    "✕"
                                </button>
                            </li>
                        }
                    }
                />
            </ul>

            <Show when=move || ctx.cart.get().is_empty()>
                <p class="cart-empty-message">"No items added yet."</p>
            </Show>

            <div class="cart-total-row">
                "Total: $" <span class="cart-total">{total}</span>
            </div>
        </aside>
    }
}

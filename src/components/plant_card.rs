//! Plant Card Component
//!
//! One catalog card: image, clickable name (opens the detail modal), short
//! description, category badge, price, add-to-cart button.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::models::Plant;

#[component]
pub fn PlantCard(plant: Plant) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let id = plant.id.clone();
    let name = plant.display_name().to_string();
    let image = plant.display_image().to_string();
    let description = plant.display_short_description().to_string();
    let category = plant.display_category().to_string();
    let price = plant.display_price().to_string();

    view! {
        <div class="plant-card">
            <figure class="plant-card-figure">
                <img src=image alt=name.clone() />
            </figure>
            <div class="plant-card-body">
                <h2
                    class="plant-card-title"
                    on:click=move |_| ctx.open_detail(id.clone())
                >
                    {name.clone()}
                </h2>

                <p class="plant-card-description">{description}</p>

                <div class="plant-card-meta">
                    <span class="category-badge">{category}</span>
                    <span class="plant-price">"$" {price}</span>
                </div>

                <button
                    class="add-to-cart-btn"
                    on:click=move |_| ctx.add_to_cart(&plant)
                >
                    "Add to Cart"
                </button>
            </div>
        </div>
    }
}

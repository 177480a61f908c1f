//! Green Earth Frontend App
//!
//! Main application component with three-column layout: categories on the
//! left, the plant grid in the center, the cart on the right.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::cart::CartItem;
use crate::catalog::{self, ALL_TREES};
use crate::components::{CartPanel, CategorySidebar, DetailModal, PlantGrid};
use crate::context::{AppContext, DetailRequest};
use crate::fallback;
use crate::models::Plant;

#[component]
pub fn App() -> impl IntoView {
    // State
    let (all_plants, set_all_plants) = signal(Vec::<Plant>::new());
    let (displayed_plants, set_displayed_plants) = signal(Vec::<Plant>::new());
    let (active_category, set_active_category) = signal(ALL_TREES.to_string());
    let (loading, set_loading) = signal(true);
    let (cart, set_cart) = signal(Vec::<CartItem>::new());
    let (detail_request, set_detail_request) = signal::<Option<DetailRequest>>(None);

    // Provide context to all children
    provide_context(AppContext::new(
        (cart, set_cart),
        (detail_request, set_detail_request),
    ));

    // Load the catalog on mount. The categories fetch is attempted first but
    // its payload is discarded; the rendered category list is hardcoded.
    Effect::new(move |_| {
        spawn_local(async move {
            if let Err(e) = api::fetch_categories().await {
                web_sys::console::error_1(&format!("[APP] Error loading categories: {e}").into());
            }

            match api::fetch_all_plants().await {
                Ok(plants) if !plants.is_empty() => {
                    web_sys::console::log_1(&format!("[APP] Loaded {} plants", plants.len()).into());
                    set_all_plants.set(plants);
                }
                Ok(_) => {
                    web_sys::console::log_1(&"[APP] Empty catalog, using fallback".into());
                    set_all_plants.set(fallback::fallback_plants());
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[APP] Error loading plants: {e}").into());
                    set_all_plants.set(fallback::fallback_plants());
                }
            }
            set_loading.set(false);
        });
    });

    // Recompute the displayed subset whenever the catalog or selection change.
    Effect::new(move |_| {
        let plants = all_plants.get();
        let label = active_category.get();
        set_displayed_plants.set(catalog::displayed_for(&plants, &label));
    });

    view! {
        <div class="app-layout">
            // Left: Category Sidebar
            <CategorySidebar
                active_category=active_category
                set_active_category=set_active_category
            />

            // Center: Plant Grid
            <main class="main-content">
                <h1>"Green Earth"</h1>
                <PlantGrid plants=displayed_plants loading=loading />
            </main>

            // Right: Cart Panel
            <CartPanel />

            <DetailModal all_plants=all_plants />
        </div>
    }
}

//! Detail Modal Component
//!
//! Opens immediately with a loading placeholder, then fetches the plant
//! fresh from the detail endpoint. Responses are matched against the request
//! sequence number and discarded when a newer request exists. On network
//! failure the locally cached record backs the modal; if even that lookup
//! fails, a terminal error message is shown.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::AppContext;
use crate::models::Plant;

#[derive(Clone, PartialEq)]
enum DetailState {
    Loading,
    Loaded(Plant),
    Error(&'static str),
}

#[component]
pub fn DetailModal(all_plants: ReadSignal<Vec<Plant>>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (state, set_state) = signal(DetailState::Loading);

    Effect::new(move |_| {
        let Some(request) = ctx.detail_request.get() else {
            return;
        };
        set_state.set(DetailState::Loading);

        spawn_local(async move {
            let result = api::fetch_plant_by_id(&request.id).await;
            if ctx.detail_is_stale(request.seq) {
                web_sys::console::log_1(
                    &format!("[DETAIL] Discarding stale response for plant {}", request.id).into(),
                );
                return;
            }
            match result {
                Ok(Some(plant)) => set_state.set(DetailState::Loaded(plant)),
                Ok(None) => set_state.set(DetailState::Error("Could not load plant details.")),
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("[DETAIL] Error loading plant {}: {}", request.id, e).into(),
                    );
                    let cached = all_plants
                        .get_untracked()
                        .iter()
                        .find(|plant| plant.id == request.id)
                        .cloned();
                    match cached {
                        Some(plant) => set_state.set(DetailState::Loaded(plant)),
                        None => {
                            set_state.set(DetailState::Error("Failed to load plant details."))
                        }
                    }
                }
            }
        });
    });

    view! {
        <Show when=move || ctx.detail_request.get().is_some()>
            <div class="modal-overlay" on:click=move |_| ctx.close_detail()>
                <div class="modal-box" on:click=move |ev| ev.stop_propagation()>
                    <button class="modal-close-btn" on:click=move |_| ctx.close_detail()>
                        "✕"
                    </button>
                    {move || match state.get() {
                        DetailState::Loading => view! {
                            <div class="modal-loading">
                                <span class="loading-spinner"></span>
                                <p>"Loading details..."</p>
                            </div>
                        }.into_any(),
                        DetailState::Loaded(plant) => {
                            let name = plant.display_name().to_string();
                            let image = plant.display_image().to_string();
                            let price = plant.display_price().to_string();
                            let description = plant.display_description().to_string();
                            let category = plant.display_category().to_string();
                            let life_span = plant.life_span.clone().unwrap_or_else(|| "N/A".to_string());
                            let native_region = plant.native_region.clone().unwrap_or_else(|| "N/A".to_string());
                            let water_needs = plant.water_needs.clone().unwrap_or_else(|| "N/A".to_string());
                            view! {
                                <h3 class="modal-title">{name.clone()}</h3>
                                <div class="modal-detail">
                                    <figure class="modal-figure">
                                        <img src=image alt=name />
                                    </figure>
                                    <div class="modal-info">
                                        <p class="modal-price">"Price: $" {price}</p>
                                        <p class="modal-description">{description}</p>
                                        <ul class="modal-facts">
                                            <li><strong>"Category: "</strong> {category}</li>
                                            <li><strong>"Life Span: "</strong> {life_span}</li>
                                            <li><strong>"Native Region: "</strong> {native_region}</li>
                                            <li><strong>"Water Needs: "</strong> {water_needs}</li>
                                        </ul>
                                    </div>
                                </div>
                                <div class="modal-actions">
                                    <button
                                        class="add-to-cart-btn"
                                        on:click=move |_| {
                                            ctx.add_to_cart(&plant);
                                            ctx.close_detail();
                                        }
                                    >
                                        "Add to Cart"
                                    </button>
                                </div>
                            }.into_any()
                        }
                        DetailState::Error(message) => view! {
                            <p class="modal-error">{message}</p>
                        }.into_any(),
                    }}
                </div>
            </div>
        </Show>
    }
}

//! Plant Grid Component
//!
//! Card grid for the currently displayed plants, with a loading spinner and
//! an empty-state message.

use leptos::prelude::*;

use crate::components::PlantCard;
use crate::models::Plant;

#[component]
pub fn PlantGrid(plants: ReadSignal<Vec<Plant>>, loading: ReadSignal<bool>) -> impl IntoView {
    view! {
        <section class="trees-section">
            <Show when=move || loading.get()>
                <div class="loading-spinner">"Loading..."</div>
            </Show>

            <Show when=move || !loading.get()>
                {move || if plants.get().is_empty() {
                    view! { <p class="no-plants-message">"No plants found."</p> }.into_any()
                } else {
                    view! {
                        <div class="trees-grid">
                            <For
                                each=move || plants.get()
                                key=|plant| plant.id.clone()
                                children=move |plant| view! { <PlantCard plant=plant /> }
                            />
                        </div>
                    }.into_any()
                }}
            </Show>
        </section>
    }
}

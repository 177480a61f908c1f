//! Category Sidebar Component
//!
//! Left sidebar with the hardcoded category buttons. Exactly one button is
//! active at a time; the main "All Trees" entry carries a dot marker.

use leptos::prelude::*;

use crate::catalog::CATEGORIES;

#[component]
pub fn CategorySidebar(
    active_category: ReadSignal<String>,
    set_active_category: WriteSignal<String>,
) -> impl IntoView {
    view! {
        <aside class="category-sidebar">
            <h3 class="category-header">"Categories"</h3>
            <div class="category-list">
                {CATEGORIES.iter().map(|category| {
                    let name = category.name;
                    let base = if category.is_main {
                        "category-btn category-all"
                    } else {
                        "category-btn category-sub"
                    };
                    let is_active = move || active_category.get() == name;
                    view! {
                        <button
                            class=move || {
                                if is_active() {
                                    format!("{base} active-category")
                                } else {
                                    base.to_string()
                                }
                            }
                            on:click=move |_| set_active_category.set(name.to_string())
                        >
                            {category.is_main.then(|| view! { <span class="category-dot">"●"</span> })}
                            {name}
                        </button>
                    }
                }).collect_view()}
            </div>
        </aside>
    }
}

//! Pagination Bar Component
//!
//! Previous / numbered / Next buttons under a resource list.

use leptos::prelude::*;

use crate::pagination::PaginationView;

#[component]
pub fn PaginationBar(
    #[prop(into)] state: Signal<PaginationView>,
    #[prop(into)] on_page: Callback<u32>,
) -> impl IntoView {
    view! {
        <Show when=move || state.with(|v| v.visible)>
            <div class="pagination">
                <span class="pagination-summary">{move || state.with(|v| v.summary.clone())}</span>
                <div class="pagination-buttons">
                    <button
                        class="page-btn"
                        disabled=move || !state.with(|v| v.previous.enabled)
                        on:click=move |_| on_page.run(state.with_untracked(|v| v.previous.target))
                    >
                        "Previous"
                    </button>
                    <For
                        each=move || state.with(|v| v.pages.clone())
                        key=|button| (button.number, button.current)
                        children=move |button| {
                            let class = if button.current { "page-btn active" } else { "page-btn" };
                            view! {
                                <button
                                    class=class
                                    on:click=move |_| on_page.run(button.number)
                                >
                                    {button.number}
                                </button>
                            }
                        }
                    />
                    <button
                        class="page-btn"
                        disabled=move || !state.with(|v| v.next.enabled)
                        on:click=move |_| on_page.run(state.with_untracked(|v| v.next.target))
                    >
                        "Next"
                    </button>
                </div>
            </div>
        </Show>
    }
}

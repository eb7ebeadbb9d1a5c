//! Numbered pager shared by the back-office tables.

use leptos::prelude::*;

use crate::util::table::page_window;

const WINDOW: usize = 5;

#[component]
pub fn Pagination(
    #[prop(into)] page: Signal<usize>,
    #[prop(into)] total_pages: Signal<usize>,
    on_change: Callback<usize>,
) -> impl IntoView {
    let go = move |target: usize| {
        if target >= 1 && target <= total_pages.get_untracked() && target != page.get_untracked() {
            on_change.run(target);
        }
    };

    view! {
        <Show when=move || { total_pages.get() > 1 }>
            <nav class="pagination" aria-label="Paginación">
                <button
                    class="pagination__btn"
                    disabled=move || page.get() <= 1
                    on:click=move |_| go(page.get_untracked().saturating_sub(1))
                >
                    "‹"
                </button>
                {move || {
                    page_window(page.get(), total_pages.get(), WINDOW)
                        .into_iter()
                        .map(|n| {
                            view! {
                                <button
                                    class="pagination__btn"
                                    class:pagination__btn--active=move || page.get() == n
                                    on:click=move |_| go(n)
                                >
                                    {n}
                                </button>
                            }
                        })
                        .collect_view()
                }}
                <button
                    class="pagination__btn"
                    disabled=move || page.get() >= total_pages.get()
                    on:click=move |_| go(page.get_untracked() + 1)
                >
                    "›"
                </button>
                <span class="pagination__info">
                    {move || format!("Página {} de {}", page.get(), total_pages.get())}
                </span>
            </nav>
        </Show>
    }
}

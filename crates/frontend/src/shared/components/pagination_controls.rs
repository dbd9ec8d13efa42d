use crate::shared::config::PAGE_SIZE_OPTIONS;
use crate::shared::icons::icon;
use contracts::shared::pagination::{page_range, PageSlot, DEFAULT_PAGE_WINDOW};
use leptos::prelude::*;

/// PaginationControls component - reusable pagination strip
///
/// Shows "Mostrando X–Y de N", previous/next buttons, the numbered strip
/// from `page_range` and an optional page-size selector.
#[component]
pub fn PaginationControls(
    /// Current page (1-based)
    #[prop(into)]
    current_page: Signal<usize>,

    /// Total number of pages
    #[prop(into)]
    total_pages: Signal<usize>,

    /// Total count of items
    #[prop(into)]
    total_count: Signal<usize>,

    /// Current page size
    #[prop(into)]
    page_size: Signal<usize>,

    /// Callback when page changes (1-based)
    on_page_change: Callback<usize>,

    /// Callback when page size changes; the selector is hidden without it
    #[prop(optional)]
    on_page_size_change: Option<Callback<usize>>,

    /// Available page size options (defaults to `PAGE_SIZE_OPTIONS`)
    #[prop(optional)]
    page_size_options: Option<Vec<usize>>,
) -> impl IntoView {
    let page_size_opts = page_size_options.unwrap_or_else(|| PAGE_SIZE_OPTIONS.to_vec());

    let range_label = move || {
        let count = total_count.get();
        if count == 0 {
            return "Sin resultados".to_string();
        }
        let size = page_size.get().max(1);
        let from = (current_page.get().max(1) - 1) * size + 1;
        let to = (from + size - 1).min(count);
        format!("Mostrando {}–{} de {}", from, to, count)
    };

    let slots = move || page_range(current_page.get(), total_pages.get(), DEFAULT_PAGE_WINDOW);

    view! {
        <div class="pagination-controls">
            <span class="pagination-info">{range_label}</span>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get();
                    if page > 1 {
                        on_page_change.run(page - 1);
                    }
                }
                disabled=move || current_page.get() <= 1
                title="Página anterior"
            >
                {icon("chevron-left")}
            </button>
            {move || slots().into_iter().map(|slot| match slot {
                PageSlot::Page(n) => view! {
                    <button
                        class="pagination-btn pagination-btn--page"
                        class:pagination-btn--active=move || current_page.get() == n
                        on:click=move |_| {
                            if current_page.get_untracked() != n {
                                on_page_change.run(n);
                            }
                        }
                    >
                        {n.to_string()}
                    </button>
                }.into_any(),
                PageSlot::Ellipsis => view! {
                    <span class="pagination-ellipsis">"…"</span>
                }.into_any(),
            }).collect_view()}
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get();
                    if page < total_pages.get() {
                        on_page_change.run(page + 1);
                    }
                }
                disabled=move || current_page.get() >= total_pages.get()
                title="Página siguiente"
            >
                {icon("chevron-right")}
            </button>
            {on_page_size_change.map(|on_size| view! {
                <select
                    class="page-size-select"
                    on:change=move |ev| {
                        if let Ok(val) = event_target_value(&ev).parse() {
                            on_size.run(val);
                        }
                    }
                    prop:value=move || page_size.get().to_string()
                >
                    {page_size_opts.iter().map(|&size| {
                        view! {
                            <option value={size.to_string()} selected=move || page_size.get() == size>
                                {format!("{} por página", size)}
                            </option>
                        }
                    }).collect_view()}
                </select>
            })}
        </div>
    }
}

use crate::shared::config::SEARCH_DEBOUNCE_MS;
use crate::shared::debounce::Debounce;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Search box that reports its value once typing pauses for
/// `SEARCH_DEBOUNCE_MS`; the clear button reports immediately.
#[component]
pub fn SearchInput(
    /// Value applied by the parent (used to reset the box)
    #[prop(into)]
    value: Signal<String>,
    /// Called with the debounced value
    #[prop(into)]
    on_change: Callback<String>,
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Buscar...".to_string()
    } else {
        placeholder
    };

    let input_value = RwSignal::new(value.get_untracked());
    let debounce = Debounce::new(SEARCH_DEBOUNCE_MS);

    // Follow resets coming from the parent
    Effect::new(move |_| {
        let applied = value.get();
        if input_value.get_untracked().trim() != applied.trim() {
            input_value.set(applied);
        }
    });

    let on_input = move |ev: leptos::ev::Event| {
        let raw = event_target_value(&ev);
        input_value.set(raw.clone());
        debounce.run(move || on_change.run(raw));
    };

    let on_clear = move |_| {
        debounce.cancel();
        input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            <span class="search-input__icon">{icon("search")}</span>
            <input
                type="search"
                class="search-input__field"
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=on_input
            />
            <Show when=move || !input_value.get().is_empty()>
                <button class="search-input__clear" title="Limpiar" on:click=on_clear>
                    {icon("x")}
                </button>
            </Show>
        </div>
    }
}

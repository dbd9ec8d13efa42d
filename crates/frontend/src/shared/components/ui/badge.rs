use contracts::shared::BadgeVariant;
use leptos::prelude::*;

/// Badge component with different variants
#[component]
pub fn Badge(
    variant: BadgeVariant,
    /// Badge content
    children: Children,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <span class=move || format!("badge badge--{} {}", variant.as_str(), additional_class())>
            {children()}
        </span>
    }
}

/// Badge whose variant and text follow a signal, for statuses that change
/// in place (order status selector, payment status after a new payment).
#[component]
pub fn StatusBadge(
    #[prop(into)]
    variant: Signal<BadgeVariant>,
    #[prop(into)]
    label: Signal<String>,
) -> impl IntoView {
    view! {
        <span class=move || format!("badge badge--status badge--{}", variant.get().as_str())>
            {move || label.get()}
        </span>
    }
}

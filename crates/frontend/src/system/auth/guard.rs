use leptos::prelude::*;

use super::context::use_auth;

pub const FORBIDDEN_SECTION: &str = "No tenés permisos para ver esta sección.";

/// Component that requires admin privileges
/// Shows fallback if not admin
#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();

    view! {
        <Show
            when=move || auth.is_admin()
            fallback=|| view! { <div class="alert alert--error">{FORBIDDEN_SECTION}</div> }
        >
            {children()}
        </Show>
    }
}

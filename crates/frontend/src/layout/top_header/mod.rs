//! Application top bar: sidebar toggle, brand, signed-in user and logout.

use crate::layout::global_context::use_global_context;
use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_global_context();
    let auth = use_auth();

    let is_sidebar_visible = move || ctx.left_open.get();

    let display_name = move || {
        auth.user()
            .map(|u| u.display_name())
            .unwrap_or_default()
    };
    let role_label = move || auth.user().map(|u| u.role.label()).unwrap_or_default();

    let avatar = move || match auth.user() {
        Some(user) => match user.avatar_url.clone().filter(|u| !u.trim().is_empty()) {
            Some(url) => view! { <img class="avatar" src=url alt="" /> }.into_any(),
            None => view! { <div class="avatar">{user.initials()}</div> }.into_any(),
        },
        None => view! { <div class="avatar">{icon("user")}</div> }.into_any(),
    };

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if is_sidebar_visible() { "Ocultar menú" } else { "Mostrar menú" }
                >
                    {move || if is_sidebar_visible() {
                        icon("panel-left-close")
                    } else {
                        icon("panel-left-open")
                    }}
                </button>
                <span class="top-header__title">"Autosplash"</span>
            </div>

            <div class="top-header__actions">
                <button
                    class="top-header__icon-btn"
                    title="Nueva orden"
                    on:click=move |_| ctx.open_tab("u101_create_order", "Nueva orden")
                >
                    {icon("new-order")}
                </button>

                <div
                    class="top-header__user"
                    title="Configuración"
                    on:click=move |_| ctx.open_tab("sys_settings", "Configuración")
                >
                    {avatar}
                    <div class="top-header__user-text">
                        <span class="top-header__user-name">{display_name}</span>
                        <span class="top-header__user-role">{role_label}</span>
                    </div>
                </div>

                <button class="top-header__icon-btn" on:click=move |_| auth.logout() title="Cerrar sesión">
                    {icon("log-out")}
                </button>
            </div>
        </div>
    }
}

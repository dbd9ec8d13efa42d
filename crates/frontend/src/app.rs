use crate::layout::global_context::{use_global_context, AppGlobalContext, Tab as TabData};
use crate::layout::left::Sidebar;
use crate::layout::tabs::TabPage;
use crate::layout::Shell;
use crate::shared::notify::{NotificationStack, Notifier};
use crate::system::auth::context::{use_auth, AuthContext, AuthStatus};
use crate::system::pages::login::LoginPage;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let notifier = Notifier::new();
    provide_context(notifier);

    let auth = AuthContext::new(notifier);
    provide_context(auth);
    auth.init();

    provide_context(AppGlobalContext::new());

    view! {
        <ErrorBoundary fallback=|errors| view! {
            <div class="error-screen">
                <h2>"Algo salió mal"</h2>
                <ul>
                    {move || errors.get()
                        .into_iter()
                        .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                        .collect_view()}
                </ul>
                <button
                    class="btn-primary"
                    on:click=move |_| {
                        if let Some(w) = web_sys::window() {
                            let _ = w.location().reload();
                        }
                    }
                >
                    "Recargar la página"
                </button>
            </div>
        }>
            <AppShell />
        </ErrorBoundary>
        <NotificationStack />
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Gate {
    Checking,
    Login,
    Main,
}

/// Auth gate: session check, then the login page or the main layout.
/// Profile refreshes keep the same gate, so open tabs are not rebuilt.
#[component]
fn AppShell() -> impl IntoView {
    let auth = use_auth();
    let gate = Memo::new(move |_| {
        auth.status.with(|s| match s {
            AuthStatus::Checking => Gate::Checking,
            AuthStatus::Anonymous => Gate::Login,
            AuthStatus::Authenticated(_) => Gate::Main,
        })
    });

    move || match gate.get() {
        Gate::Checking => view! { <div class="session-check">"Verificando sesión..."</div> }.into_any(),
        Gate::Login => view! { <LoginPage /> }.into_any(),
        Gate::Main => view! { <MainLayout /> }.into_any(),
    }
}

#[component]
fn MainLayout() -> impl IntoView {
    let tabs_store = use_global_context();
    tabs_store.init_router_integration();

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=move || {
                view! {
                    <For
                        each=move || tabs_store.opened.get()
                        key=|tab| tab.key.clone()
                        children=move |tab: TabData| view! { <TabPage tab=tab tabs_store=tabs_store /> }
                    />
                }.into_any()
            }
        />
    }
}

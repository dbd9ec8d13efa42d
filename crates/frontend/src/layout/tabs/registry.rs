//! Maps a tab key to its view. Every tab key of the application is listed here.

use super::tab_labels::{CUSTOMER_DETAIL_PREFIX, ORDER_DETAIL_PREFIX};
use crate::dashboards::d100_summary::ui::SummaryDashboard;
use crate::domain::a001_price_item::ui::PriceCatalog;
use crate::domain::a002_customer::ui::details::CustomerProfile;
use crate::domain::a002_customer::ui::list::CustomersList;
use crate::domain::a003_order::ui::details::OrderDetail;
use crate::domain::a003_order::ui::list::OrdersList;
use crate::layout::global_context::AppGlobalContext;
use crate::system::pages::settings::SettingsPage;
use crate::system::users::ui::list::UsersListPage;
use crate::usecases::u101_create_order::CreateOrderWizard;
use leptos::logging::log;
use leptos::prelude::*;

/// Renders the content of the tab `key`; unknown keys get a placeholder.
/// `tabs_store` lets detail views close their own tab.
pub fn render_tab_content(key: &str, tabs_store: AppGlobalContext) -> AnyView {
    let key_for_close = key.to_string();
    let close_self = Callback::new(move |_| tabs_store.close_tab(&key_for_close));

    match key {
        "d100_summary" => view! { <SummaryDashboard /> }.into_any(),

        "u101_create_order" => view! { <CreateOrderWizard /> }.into_any(),

        "a001_price_item" => view! { <PriceCatalog /> }.into_any(),

        "a002_customer" => view! { <CustomersList /> }.into_any(),
        k if k.starts_with(CUSTOMER_DETAIL_PREFIX) => {
            let id = k[CUSTOMER_DETAIL_PREFIX.len()..].to_string();
            view! { <CustomerProfile id=id on_close=close_self /> }.into_any()
        }

        "a003_order" => view! { <OrdersList /> }.into_any(),
        k if k.starts_with(ORDER_DETAIL_PREFIX) => {
            let id = k[ORDER_DETAIL_PREFIX.len()..].to_string();
            view! { <OrderDetail id=id on_close=close_self /> }.into_any()
        }

        "sys_users" => view! { <UsersListPage /> }.into_any(),
        "sys_settings" => view! { <SettingsPage /> }.into_any(),

        _ => {
            log!("Unknown tab key: {}", key);
            view! { <div class="placeholder">"Sección no disponible"</div> }.into_any()
        }
    }
}

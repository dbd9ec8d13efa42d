use contracts::domain::a002_customer::{Customer, CustomerStats};
use contracts::domain::a003_order::Order;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::view::CustomerForm;
use crate::domain::a002_customer::api;
use crate::layout::global_context::use_global_context;
use crate::layout::tabs::detail_tab_label;
use crate::layout::tabs::tab_labels::{customer_detail_key, order_detail_key};
use crate::shared::components::stat_card::StatCard;
use crate::shared::components::ui::Badge;
use crate::shared::dialog::confirm;
use crate::shared::format::{format_currency, format_date_opt};
use crate::shared::http::ApiClient;
use crate::shared::icons::icon;
use crate::shared::notify::use_notifier;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;

#[component]
pub fn CustomerProfile(id: String, on_close: Callback<()>) -> impl IntoView {
    let client = ApiClient::from_context();
    let notifier = use_notifier();
    let tabs = use_global_context();
    let id = StoredValue::new(id);

    let customer: RwSignal<Option<Customer>> = RwSignal::new(None);
    let stats: RwSignal<Option<CustomerStats>> = RwSignal::new(None);
    let orders: RwSignal<Vec<Order>> = RwSignal::new(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (editing, set_editing) = signal(false);

    let load = move || {
        let id = id.get_value();
        spawn_local(async move {
            match api::fetch_customer(client, &id).await {
                Ok(c) => {
                    tabs.update_tab_title(
                        &customer_detail_key(&id),
                        &detail_tab_label("Cliente", &c.full_name()),
                    );
                    customer.set(Some(c));
                }
                Err(e) => {
                    set_error.set(Some(e.user_message("No se pudo cargar el cliente")));
                    return;
                }
            }
            match api::fetch_customer_stats(client, &id).await {
                Ok(s) => stats.set(Some(s)),
                Err(e) => log::warn!("Failed to load stats for customer {}: {}", id, e),
            }
            match api::fetch_customer_orders(client, &id).await {
                Ok(list) => orders.set(list),
                Err(e) => log::warn!("Failed to load orders for customer {}: {}", id, e),
            }
        });
    };

    Effect::new(move |_| load());

    let handle_delete = move |_| {
        let Some(c) = customer.get_untracked() else {
            return;
        };
        if !confirm(&format!("¿Eliminar al cliente {}?", c.full_name())) {
            return;
        }
        spawn_local(async move {
            match api::delete_customer(client, &c.id).await {
                Ok(()) => {
                    notifier.success("Cliente eliminado correctamente");
                    on_close.run(());
                }
                Err(e) => notifier.error(e.user_message("No se pudo eliminar el cliente")),
            }
        });
    };

    let open_order = move |order: &Order| {
        tabs.open_tab(
            &order_detail_key(&order.id),
            &detail_tab_label("Orden", &order.number_label()),
        );
    };

    let field = move |f: fn(&Customer) -> Option<String>| {
        move || {
            customer
                .with(|c| c.as_ref().and_then(f))
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| "-".to_string())
        }
    };

    view! {
        <PageFrame page_id="a002_customer--detail" category=PAGE_CAT_DETAIL>
            <div class="page__header">
                <div class="page__header-left">
                    {icon("user")}
                    <h1 class="page__title">
                        {move || customer.with(|c| c.as_ref().map(Customer::full_name).unwrap_or_default())}
                    </h1>
                </div>
                <div class="page__header-right">
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| set_editing.set(true)>
                        {icon("edit")}
                        " Editar"
                    </Button>
                    <Button appearance=ButtonAppearance::Secondary on_click=handle_delete>
                        {icon("trash")}
                        " Eliminar"
                    </Button>
                    <Button appearance=ButtonAppearance::Subtle on_click=move |_| on_close.run(())>
                        {icon("x")}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <section class="card">
                    <dl class="details-grid">
                        <dt>"Teléfono"</dt>
                        <dd>{field(|c| c.phone.clone())}</dd>
                        <dt>"Email"</dt>
                        <dd>{field(|c| c.email.clone())}</dd>
                        <dt>"Dirección"</dt>
                        <dd>{field(|c| c.address.clone())}</dd>
                        <dt>"Cliente desde"</dt>
                        <dd>{move || customer.with(|c| format_date_opt(&c.as_ref().and_then(|c| c.created_at)))}</dd>
                    </dl>
                </section>

                <div class="stat-cards">
                    <StatCard
                        label="Órdenes"
                        icon_name="orders"
                        value=Signal::derive(move || stats.with(|s| s.as_ref().map(|s| s.total_orders.to_string())))
                    />
                    <StatCard
                        label="Total gastado"
                        icon_name="dollar-sign"
                        value=Signal::derive(move || stats.with(|s| s.as_ref().map(|s| format_currency(s.total_spent))))
                    />
                    <StatCard
                        label="Última orden"
                        icon_name="clock"
                        value=Signal::derive(move || stats.with(|s| s.as_ref().map(|s| format_date_opt(&s.last_order_date))))
                    />
                </div>

                <h2 class="section__title">"Historial de órdenes"</h2>
                <Show
                    when=move || orders.with(|o| !o.is_empty())
                    fallback=|| view! { <div class="empty-state">"Este cliente todavía no tiene órdenes"</div> }
                >
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Orden"</TableHeaderCell>
                                <TableHeaderCell>"Fecha"</TableHeaderCell>
                                <TableHeaderCell>"Estado"</TableHeaderCell>
                                <TableHeaderCell>"Total"</TableHeaderCell>
                                <TableHeaderCell>"Pagado"</TableHeaderCell>
                                <TableHeaderCell>"Pago"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || orders.get()
                                key=|o| o.id.clone()
                                children=move |order| {
                                    let payment = order.payment_status();
                                    let number = order.number_label();
                                    let created = format_date_opt(&order.created_at);
                                    let status_variant = order.status.badge();
                                    let status_code = order.status.code();
                                    let total = format_currency(order.total);
                                    let paid = format_currency(order.paid);
                                    let payment_variant = payment.badge();
                                    let payment_label = payment.label();
                                    let for_open = order;
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <a
                                                    href="#"
                                                    class="table__link"
                                                    on:click=move |ev| {
                                                        ev.prevent_default();
                                                        open_order(&for_open);
                                                    }
                                                >
                                                    {number}
                                                </a>
                                            </TableCell>
                                            <TableCell>{created}</TableCell>
                                            <TableCell>
                                                <Badge variant=status_variant>{status_code}</Badge>
                                            </TableCell>
                                            <TableCell>{total}</TableCell>
                                            <TableCell>{paid}</TableCell>
                                            <TableCell>
                                                <Badge variant=payment_variant>{payment_label}</Badge>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                </Show>

                {move || editing.get().then(|| view! {
                    <CustomerForm
                        customer=customer.get_untracked()
                        on_close=Callback::new(move |_| set_editing.set(false))
                        on_saved=Callback::new(move |_| {
                            set_editing.set(false);
                            notifier.success("Cliente actualizado correctamente");
                            load();
                        })
                    />
                })}
            </div>
        </PageFrame>
    }
}

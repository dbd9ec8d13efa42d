use contracts::dashboards::d100_summary::{DashboardStats, DelayedOrders, TopCustomer};
use contracts::domain::a003_order::OrderStatus;
use contracts::shared::BadgeVariant;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::dashboards::d100_summary::api;
use crate::layout::global_context::use_global_context;
use crate::layout::tabs::detail_tab_label;
use crate::layout::tabs::tab_labels::order_detail_key;
use crate::shared::components::stat_card::{CardTone, StatCard};
use crate::shared::components::ui::Badge;
use crate::shared::format::{format_currency, format_date_opt};
use crate::shared::http::ApiClient;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;

/// Landing dashboard with the daily KPIs.
#[component]
pub fn SummaryDashboard() -> impl IntoView {
    let client = ApiClient::from_context();
    let tabs = use_global_context();

    let stats: RwSignal<Option<DashboardStats>> = RwSignal::new(None);
    let top: RwSignal<Vec<TopCustomer>> = RwSignal::new(Vec::new());
    let delayed: RwSignal<DelayedOrders> = RwSignal::new(DelayedOrders::default());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);

    let load_data = move || {
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::fetch_stats(client).await {
                Ok(s) => stats.set(Some(s)),
                Err(e) => {
                    log::error!("Failed to load dashboard stats: {}", e);
                    set_error.set(Some(e.user_message("Error al cargar las estadísticas")));
                }
            }
            match api::fetch_top_customers(client).await {
                Ok(list) => top.set(list),
                Err(e) => log::warn!("Failed to load top customers: {}", e),
            }
            match api::fetch_delayed_orders(client).await {
                Ok(d) => delayed.set(d),
                Err(e) => log::warn!("Failed to load delayed orders: {}", e),
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| load_data());

    let kpi = move |read: fn(&DashboardStats) -> String| {
        Signal::derive(move || stats.with(|s| s.as_ref().map(read)))
    };

    view! {
        <PageFrame page_id="d100_summary--dashboard" category=PAGE_CAT_DASHBOARD>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Panel"</h1>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| tabs.open_tab("u101_create_order", "Nueva orden")
                    >
                        {icon("plus")}
                        " Nueva orden"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load_data()
                        disabled=Signal::derive(move || loading.get())
                    >
                        {icon("refresh")}
                        {move || if loading.get() { " Cargando..." } else { " Actualizar" }}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <div class="stat-grid">
                    <StatCard
                        label="Ingresos del mes"
                        icon_name="dollar-sign"
                        value=kpi(|s| format_currency(s.revenue_this_month))
                        tone=CardTone::Good
                    />
                    <StatCard
                        label="Saldo pendiente"
                        icon_name="clock"
                        value=kpi(|s| format_currency(s.outstanding_balance))
                        tone=CardTone::Warning
                    />
                    <StatCard
                        label="Órdenes en progreso"
                        icon_name="activity"
                        value=kpi(|s| s.in_progress_orders.to_string())
                    />
                    <StatCard
                        label="Órdenes de hoy"
                        icon_name="orders"
                        value=kpi(|s| s.today_orders.to_string())
                        subtitle=kpi(|s| format!("{} órdenes en total", s.total_orders()))
                    />
                </div>

                <div class="detail-grid">
                    <section class="card">
                        <div class="card__header">
                            {icon("activity")}
                            <h2 class="card__title">"Órdenes por estado"</h2>
                        </div>
                        <Table attr:style="width: 100%;">
                            <TableHeader>
                                <TableRow>
                                    <TableHeaderCell>"Estado"</TableHeaderCell>
                                    <TableHeaderCell>"Cantidad"</TableHeaderCell>
                                    <TableHeaderCell min_width=160.0>"Porcentaje"</TableHeaderCell>
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                {move || stats.with(|s| s.as_ref().map(|s| s.status_shares()).unwrap_or_default())
                                    .into_iter()
                                    .map(|share| {
                                        let variant = share.status.map(|st| st.badge()).unwrap_or(BadgeVariant::Neutral);
                                        let width = format!("width: {:.0}%;", share.percent);
                                        view! {
                                            <TableRow>
                                                <TableCell>
                                                    <Badge variant=variant>{share.label.clone()}</Badge>
                                                </TableCell>
                                                <TableCell>{share.count.to_string()}</TableCell>
                                                <TableCell>
                                                    <div class="share-bar">
                                                        <div class="share-bar__fill" style=width></div>
                                                        <span class="share-bar__label">{format!("{:.1}%", share.percent)}</span>
                                                    </div>
                                                </TableCell>
                                            </TableRow>
                                        }
                                    })
                                    .collect_view()}
                            </TableBody>
                        </Table>
                    </section>

                    <section class="card">
                        <div class="card__header">
                            {icon("customers")}
                            <h2 class="card__title">"Mejores clientes"</h2>
                        </div>
                        <Show
                            when=move || top.with(|t| !t.is_empty())
                            fallback=|| view! { <div class="empty-state">"Sin datos todavía"</div> }
                        >
                            <Table attr:style="width: 100%;">
                                <TableHeader>
                                    <TableRow>
                                        <TableHeaderCell>"Cliente"</TableHeaderCell>
                                        <TableHeaderCell>"Abonado"</TableHeaderCell>
                                        <TableHeaderCell>"Pagos"</TableHeaderCell>
                                        <TableHeaderCell>"Último pago"</TableHeaderCell>
                                    </TableRow>
                                </TableHeader>
                                <TableBody>
                                    {move || top.get().into_iter().map(|c| view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{c.name.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>{format_currency(c.amount_paid)}</TableCell>
                                            <TableCell>{c.payment_count.to_string()}</TableCell>
                                            <TableCell>{format_date_opt(&c.last_date)}</TableCell>
                                        </TableRow>
                                    }).collect_view()}
                                </TableBody>
                            </Table>
                        </Show>
                    </section>
                </div>

                <section class="card">
                    <div class="card__header">
                        {icon("alert-triangle")}
                        <h2 class="card__title">"Órdenes demoradas"</h2>
                        <span class="badge badge--warning">
                            {move || delayed.with(|d| d.total_count).to_string()}
                        </span>
                    </div>
                    <p class="card__description">"Órdenes sin completar después de 3 días."</p>
                    <Show
                        when=move || delayed.with(|d| !d.orders.is_empty())
                        fallback=|| view! { <div class="empty-state">"No hay órdenes demoradas"</div> }
                    >
                        <Table attr:style="width: 100%;">
                            <TableHeader>
                                <TableRow>
                                    <TableHeaderCell>"Cliente"</TableHeaderCell>
                                    <TableHeaderCell>"Estado"</TableHeaderCell>
                                    <TableHeaderCell>"Fecha"</TableHeaderCell>
                                    <TableHeaderCell>""</TableHeaderCell>
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                {move || delayed.with(|d| d.orders.clone()).into_iter().map(|order| {
                                    let variant = OrderStatus::from_code(&order.status)
                                        .map(|st| st.badge())
                                        .unwrap_or(BadgeVariant::Neutral);
                                    let id = order.id.clone();
                                    let name = order.name.clone();
                                    view! {
                                        <TableRow>
                                            <TableCell>{order.name.clone()}</TableCell>
                                            <TableCell>
                                                <Badge variant=variant>{order.status.clone()}</Badge>
                                            </TableCell>
                                            <TableCell>{format_date_opt(&order.date)}</TableCell>
                                            <TableCell>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| tabs.open_tab(
                                                        &order_detail_key(&id),
                                                        &detail_tab_label("Orden", &name),
                                                    )
                                                    attr:title="Ver orden"
                                                >
                                                    {icon("eye")}
                                                </Button>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }).collect_view()}
                            </TableBody>
                        </Table>
                        <Show when=move || delayed.with(|d| d.hidden_count() > 0)>
                            <p class="card__description">
                                {move || format!("Y {} órdenes demoradas más", delayed.with(|d| d.hidden_count()))}
                            </p>
                        </Show>
                    </Show>
                </section>
            </div>
        </PageFrame>
    }
}

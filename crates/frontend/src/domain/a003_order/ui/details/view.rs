use contracts::domain::a003_order::{OrderStatus, UpdateOrderRequest};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::items::OrderItemsPanel;
use super::payments::PaymentsPanel;
use super::view_model::OrderDetailVm;
use crate::domain::a003_order::{api, receipt};
use crate::domain::a004_payment::api as payments_api;
use crate::layout::global_context::use_global_context;
use crate::layout::tabs::detail_tab_label;
use crate::layout::tabs::tab_labels::{customer_detail_key, order_detail_key};
use crate::shared::components::stat_card::{CardTone, StatCard};
use crate::shared::components::ui::StatusBadge;
use crate::shared::dialog::confirm;
use crate::shared::format::{format_currency, format_datetime_opt};
use crate::shared::http::ApiClient;
use crate::shared::icons::icon;
use crate::shared::notify::use_notifier;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;

pub const OVERPAID_WARNING: &str = "Esta orden tiene pagos que superan el total estimado";

#[component]
pub fn OrderDetail(id: String, on_close: Callback<()>) -> impl IntoView {
    let client = ApiClient::from_context();
    let notifier = use_notifier();
    let tabs = use_global_context();
    let vm = OrderDetailVm::new();
    let id = StoredValue::new(id);
    let (saving, set_saving) = signal(false);

    let load_payments = move || {
        let id = id.get_value();
        spawn_local(async move {
            match payments_api::fetch_payments(client, &id).await {
                Ok(list) => vm.payments.set(list),
                Err(e) => {
                    log::warn!("Failed to load payments for order {}: {}", id, e);
                    notifier.error(e.user_message("No se pudieron cargar los pagos"));
                }
            }
        });
    };

    let load_order = move || {
        let id = id.get_value();
        spawn_local(async move {
            match api::fetch_order(client, &id).await {
                Ok(order) => {
                    tabs.update_tab_title(
                        &order_detail_key(&id),
                        &detail_tab_label("Orden", &order.number_label()),
                    );
                    vm.error.set(None);
                    vm.apply_order(order);
                }
                Err(e) => {
                    log::error!("Failed to load order {}: {}", id, e);
                    vm.error.set(Some(e.user_message("No se pudo cargar la orden")));
                }
            }
        });
    };

    let reload = move || {
        load_order();
        load_payments();
    };

    Effect::new(move |_| reload());

    let save_status = move |_| {
        let request = UpdateOrderRequest::status(vm.status.get_untracked());
        set_saving.set(true);
        spawn_local(async move {
            match api::update_order(client, &id.get_value(), &request).await {
                Ok(()) => {
                    notifier.success("Cambios guardados correctamente");
                    load_order();
                }
                Err(e) => notifier.error(e.user_message("No se pudieron guardar los cambios")),
            }
            set_saving.set(false);
        });
    };

    let download = move |_| {
        spawn_local(async move {
            if let Err(msg) = receipt::download_receipt(client, &id.get_value()).await {
                notifier.error(msg);
            }
        });
    };

    let delete = move |_| {
        let label = vm
            .order
            .with_untracked(|o| o.as_ref().map(|o| o.number_label()))
            .unwrap_or_default();
        if !confirm(&format!("¿Eliminar la orden {}?", label)) {
            return;
        }
        spawn_local(async move {
            match api::delete_order(client, &id.get_value()).await {
                Ok(()) => {
                    notifier.success("Orden eliminada correctamente");
                    on_close.run(());
                }
                Err(e) => notifier.error(e.user_message("No se pudo eliminar la orden")),
            }
        });
    };

    let open_customer = move || {
        let target = vm.order.with_untracked(|o| {
            o.as_ref().and_then(|o| {
                let customer = o.customer.as_ref()?;
                Some((customer.id()?.to_string(), o.customer_name()))
            })
        });
        if let Some((customer_id, name)) = target {
            tabs.open_tab(
                &customer_detail_key(&customer_id),
                &detail_tab_label("Cliente", &name),
            );
        }
    };

    let on_changed = Callback::new(move |_: ()| reload());
    let summary = Memo::new(move |_| vm.summary());

    view! {
        <PageFrame page_id="a003_order--detail" category=PAGE_CAT_DETAIL>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">
                        {move || vm.order.with(|o| {
                            o.as_ref()
                                .map(|o| format!("Orden {}", o.number_label()))
                                .unwrap_or_else(|| "Orden".to_string())
                        })}
                    </h1>
                    <StatusBadge
                        variant=Signal::derive(move || summary.get().status.badge())
                        label=Signal::derive(move || summary.get().status.label().to_string())
                    />
                </div>
                <div class="page__header-right">
                    <Button appearance=ButtonAppearance::Secondary on_click=download>
                        {icon("download")}
                        " Comprobante"
                    </Button>
                    <Button appearance=ButtonAppearance::Secondary on_click=delete>
                        {icon("trash")}
                        " Eliminar"
                    </Button>
                    <Button appearance=ButtonAppearance::Subtle on_click=move |_| on_close.run(())>
                        {icon("x")}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || vm.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <Show when=move || vm.order.with(Option::is_some)>
                    <Show when=move || summary.get().is_overpaid()>
                        <div class="alert alert--warning">
                            {icon("alert-triangle")}
                            {OVERPAID_WARNING}
                        </div>
                    </Show>

                    <div class="stat-grid">
                        <StatCard
                            label="Total"
                            icon_name="orders"
                            value=Signal::derive(move || Some(format_currency(summary.get().total)))
                        />
                        <StatCard
                            label="Pagado"
                            icon_name="dollar-sign"
                            value=Signal::derive(move || Some(format_currency(summary.get().paid)))
                            tone=CardTone::Good
                        />
                        <StatCard
                            label="Saldo pendiente"
                            icon_name="clock"
                            value=Signal::derive(move || Some(format_currency(summary.get().outstanding)))
                            tone=CardTone::Warning
                        />
                    </div>

                    <div class="detail-grid">
                        <section class="card">
                            <div class="card__header">
                                {icon("user")}
                                <h2 class="card__title">"Cliente"</h2>
                            </div>
                            {move || vm.order.with(|o| o.as_ref().map(|order| {
                                let contact = order.customer.as_ref().and_then(|c| c.summary()).cloned();
                                view! {
                                    <dl class="detail-list">
                                        <dt>"Nombre"</dt>
                                        <dd>
                                            <a href="#" class="table__link" on:click=move |ev| {
                                                ev.prevent_default();
                                                open_customer();
                                            }>
                                                {order.customer_name()}
                                            </a>
                                        </dd>
                                        <dt>"Teléfono"</dt>
                                        <dd>{contact.as_ref().and_then(|s| s.phone.clone()).unwrap_or_else(|| "—".into())}</dd>
                                        <dt>"Email"</dt>
                                        <dd>{contact.as_ref().and_then(|s| s.email.clone()).unwrap_or_else(|| "—".into())}</dd>
                                        <dt>"Dirección"</dt>
                                        <dd>{contact.as_ref().and_then(|s| s.address.clone()).unwrap_or_else(|| "—".into())}</dd>
                                    </dl>
                                }
                            }))}
                        </section>

                        <section class="card">
                            <div class="card__header">
                                {icon("info")}
                                <h2 class="card__title">"Detalle"</h2>
                            </div>
                            {move || vm.order.with(|o| o.as_ref().map(|order| view! {
                                <dl class="detail-list">
                                    <dt>"Fecha"</dt>
                                    <dd>{format_datetime_opt(&order.created_at)}</dd>
                                    <dt>"Entrega"</dt>
                                    <dd>{order.delivery_type.label()}</dd>
                                    <dt>"Cuidado"</dt>
                                    <dd>{order.care_level.label()}</dd>
                                    <dt>"Observaciones"</dt>
                                    <dd>{order.description.clone().filter(|d| !d.trim().is_empty()).unwrap_or_else(|| "—".into())}</dd>
                                </dl>
                            }))}
                            <div class="card__footer">
                                <div class="form__group">
                                    <Label>"Estado"</Label>
                                    <select
                                        class="form__select"
                                        prop:value=move || vm.status.get().code()
                                        on:change=move |ev| {
                                            if let Some(status) = OrderStatus::from_code(&event_target_value(&ev)) {
                                                vm.status.set(status);
                                            }
                                        }
                                    >
                                        {OrderStatus::all().into_iter().map(|s| view! {
                                            <option value=s.code()>{s.code()}</option>
                                        }).collect_view()}
                                    </select>
                                </div>
                                <StatusBadge
                                    variant=Signal::derive(move || vm.status.get().badge())
                                    label=Signal::derive(move || vm.status.get().code().to_string())
                                />
                                <Button
                                    appearance=ButtonAppearance::Primary
                                    on_click=save_status
                                    disabled=Signal::derive(move || saving.get() || !vm.status_changed())
                                >
                                    {icon("save")}
                                    {move || if saving.get() { " Guardando..." } else { " Guardar estado" }}
                                </Button>
                            </div>
                        </section>
                    </div>

                    <OrderItemsPanel vm=vm order_id=id.get_value() on_saved=on_changed />
                    <PaymentsPanel vm=vm order_id=id.get_value() on_changed=on_changed />
                </Show>
            </div>
        </PageFrame>
    }
}


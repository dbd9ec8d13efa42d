use contracts::domain::a001_price_item::PriceItem;
use contracts::domain::a002_customer::{Customer, CustomerListQuery};
use contracts::domain::a003_order::{Cart, CareLevel, DeliveryType, OrderStatus};
use contracts::domain::a004_payment::{PaymentMethod, PaymentSummary};
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u101_create_order::{CreateOrder, OrderRules, OrderWizard, WizardStep};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::api::HttpOrderGateway;
use super::finalize::{finalize, ORDER_CREATED, RECEIPT_WARNING};
use crate::domain::a001_price_item::api as prices_api;
use crate::domain::a002_customer::api as customers_api;
use crate::domain::a003_order::ui::details::CartEditor;
use crate::layout::global_context::use_global_context;
use crate::shared::components::search_input::SearchInput;
use crate::shared::components::stat_card::{CardTone, StatCard};
use crate::shared::components::ui::StatusBadge;
use crate::shared::config::CUSTOMER_PICKER_LIMIT;
use crate::shared::format::format_currency;
use crate::shared::http::ApiClient;
use crate::shared::icons::icon;
use crate::shared::notify::use_notifier;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_USECASE;

const ORDERS_TAB: &str = "a003_order";

/// Plain text input bound to a field of the wizard.
#[component]
fn WizardField(
    label: &'static str,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional)] input_type: &'static str,
    #[prop(optional)] placeholder: &'static str,
) -> impl IntoView {
    let input_type = if input_type.is_empty() { "text" } else { input_type };
    view! {
        <div class="form__group">
            <label class="form__label">{label}</label>
            <input
                class="form__input"
                type=input_type
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </div>
    }
}

fn step_class(current: WizardStep, step: WizardStep) -> &'static str {
    if current == step {
        "wizard-steps__item wizard-steps__item--active"
    } else if current.number() > step.number() {
        "wizard-steps__item wizard-steps__item--done"
    } else {
        "wizard-steps__item"
    }
}

/// Replaces the picker contents, keeping the selected customer listed even
/// when the new results no longer include it.
fn keep_selected(mut items: Vec<Customer>, previous: &[Customer], selected: Option<&str>) -> Vec<Customer> {
    let Some(id) = selected else {
        return items;
    };
    if items.iter().any(|c| c.id == id) {
        return items;
    }
    if let Some(current) = previous.iter().find(|c| c.id == id) {
        items.insert(0, current.clone());
    }
    items
}

#[component]
fn StepIndicator(#[prop(into)] current: Signal<WizardStep>) -> impl IntoView {
    view! {
        <ol class="wizard-steps">
            {WizardStep::all().into_iter().map(|step| view! {
                <li class=move || step_class(current.get(), step)>
                    <span class="wizard-steps__number">{step.number()}</span>
                    <span class="wizard-steps__title">{step.title()}</span>
                </li>
            }).collect_view()}
        </ol>
    }
}

#[component]
pub fn CreateOrderWizard() -> impl IntoView {
    let client = ApiClient::from_context();
    let notifier = use_notifier();
    let tabs = use_global_context();

    let rules = OrderRules::default();
    let wizard = RwSignal::new(OrderWizard::new(rules));
    let cart = RwSignal::new(Cart::new());
    let customers: RwSignal<Vec<Customer>> = RwSignal::new(Vec::new());
    let catalog: RwSignal<Vec<PriceItem>> = RwSignal::new(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (submitting, set_submitting) = signal(false);

    let picker_search = RwSignal::new(String::new());

    let load_customers = move || {
        let search = picker_search.get_untracked();
        spawn_local(async move {
            let query = CustomerListQuery::new(1, CUSTOMER_PICKER_LIMIT, &search);
            match customers_api::fetch_customers(client, &query).await {
                Ok(page) => {
                    let selected = wizard.with_untracked(|w| w.customer.existing_id().map(str::to_string));
                    customers.update(|list| *list = keep_selected(page.items, list.as_slice(), selected.as_deref()));
                }
                Err(e) => {
                    log::warn!("Failed to load customers for picker: {}", e);
                    notifier.error(e.user_message("Error al cargar los clientes"));
                }
            }
        });
    };

    Effect::new(move |_| {
        load_customers();
        spawn_local(async move {
            match prices_api::fetch_prices(client).await {
                Ok(items) => catalog.set(items),
                Err(e) => notifier.error(e.user_message("Error al cargar los precios")),
            }
        });
    });

    let step = Memo::new(move |_| wizard.with(|w| w.step()));
    let sync_cart = move || {
        let current = cart.get_untracked();
        wizard.update(|w| w.cart = current);
    };

    let go_next = move |_| {
        sync_cart();
        let mut result = Ok(WizardStep::Customer);
        wizard.update(|w| result = w.next());
        match result {
            Ok(_) => set_error.set(None),
            Err(e) => set_error.set(Some(e.to_string())),
        }
    };

    let go_back = move |_| {
        sync_cart();
        wizard.update(|w| {
            w.previous();
        });
        set_error.set(None);
    };

    let submit = move |_| {
        if submitting.get_untracked() {
            return;
        }
        sync_cart();
        let snapshot = wizard.get_untracked();
        set_submitting.set(true);
        set_error.set(None);
        spawn_local(async move {
            let gateway = HttpOrderGateway::new(client);
            let result = finalize(&gateway, &snapshot).await;
            set_submitting.set(false);
            match result {
                Ok(outcome) => {
                    notifier.success(ORDER_CREATED);
                    if !outcome.receipt_downloaded() {
                        notifier.warning(RECEIPT_WARNING);
                    }
                    tabs.replace_tab(&CreateOrder::full_name(), ORDERS_TAB);
                }
                Err(e) => {
                    // Stay on the last step with everything entered
                    if let Some(id) = e.created_customer_id() {
                        wizard.update(|w| w.customer.select_existing(id));
                        load_customers();
                    }
                    notifier.error(e.to_string());
                    set_error.set(Some(e.to_string()));
                }
            }
        });
    };

    let field = move |read: fn(&OrderWizard) -> String| Signal::derive(move || wizard.with(read));

    let customer_step = move || {
        view! {
            <section class="card">
                <div class="form__group">
                    <Label>"Cliente existente"</Label>
                    <SearchInput
                        value=Signal::derive(move || picker_search.get())
                        on_change=Callback::new(move |v: String| {
                            picker_search.set(v);
                            load_customers();
                        })
                        placeholder="Buscar cliente..."
                    />
                    <select
                        class="form__select"
                        prop:value=move || wizard.with(|w| w.customer.existing_id().unwrap_or_default().to_string())
                        on:change=move |ev| {
                            let id = event_target_value(&ev);
                            wizard.update(|w| w.customer.select_existing(&id));
                        }
                    >
                        <option value="">"Nuevo cliente"</option>
                        {move || customers.get().into_iter().map(|c| view! {
                            <option value=c.id.clone()>{c.full_name()}</option>
                        }).collect_view()}
                    </select>
                </div>
                <Show when=move || wizard.with(|w| w.customer.existing_id().is_none())>
                    <div class="form__grid">
                        <WizardField
                            label="Nombre"
                            value=field(|w| w.customer.first_name.clone())
                            on_input=Callback::new(move |v: String| wizard.update(|w| w.customer.first_name = v))
                        />
                        <WizardField
                            label="Apellido"
                            value=field(|w| w.customer.last_name.clone())
                            on_input=Callback::new(move |v: String| wizard.update(|w| w.customer.last_name = v))
                        />
                        <WizardField
                            label="Teléfono"
                            input_type="tel"
                            value=field(|w| w.customer.phone.clone())
                            on_input=Callback::new(move |v: String| wizard.update(|w| w.customer.phone = v))
                        />
                        <WizardField
                            label="Email"
                            input_type="email"
                            value=field(|w| w.customer.email.clone())
                            on_input=Callback::new(move |v: String| wizard.update(|w| w.customer.email = v))
                        />
                        <WizardField
                            label="Dirección"
                            value=field(|w| w.customer.address.clone())
                            on_input=Callback::new(move |v: String| wizard.update(|w| w.customer.address = v))
                        />
                    </div>
                </Show>
            </section>
        }
    };

    let details_step = move || {
        view! {
            <section class="card">
                <CartEditor cart=cart catalog=catalog policy=rules.duplicate_policy />
            </section>
            <section class="card">
                <div class="form__grid">
                    <div class="form__group">
                        <Label>"Estado"</Label>
                        <select
                            class="form__select"
                            prop:value=move || wizard.with(|w| w.details.status.code())
                            on:change=move |ev| {
                                if let Some(s) = OrderStatus::from_code(&event_target_value(&ev)) {
                                    wizard.update(|w| w.details.status = s);
                                }
                            }
                        >
                            {OrderStatus::all().into_iter().map(|s| view! {
                                <option value=s.code()>{s.code()}</option>
                            }).collect_view()}
                        </select>
                    </div>
                    <div class="form__group">
                        <Label>"Tipo de entrega"</Label>
                        <select
                            class="form__select"
                            prop:value=move || wizard.with(|w| w.details.delivery_type.code())
                            on:change=move |ev| {
                                if let Some(d) = DeliveryType::from_code(&event_target_value(&ev)) {
                                    wizard.update(|w| w.details.delivery_type = d);
                                }
                            }
                        >
                            {DeliveryType::all().into_iter().map(|d| view! {
                                <option value=d.code()>{d.label()}</option>
                            }).collect_view()}
                        </select>
                    </div>
                    <div class="form__group">
                        <Label>"Nivel de cuidado"</Label>
                        <select
                            class="form__select"
                            prop:value=move || wizard.with(|w| w.details.care_level.code())
                            on:change=move |ev| {
                                if let Some(c) = CareLevel::from_code(&event_target_value(&ev)) {
                                    wizard.update(|w| w.details.care_level = c);
                                }
                            }
                        >
                            {CareLevel::all().into_iter().map(|c| view! {
                                <option value=c.code()>{c.label()}</option>
                            }).collect_view()}
                        </select>
                    </div>
                </div>
                <div class="form__group">
                    <Label>"Observaciones"</Label>
                    <textarea
                        class="form__textarea"
                        rows="3"
                        prop:value=move || wizard.with(|w| w.details.description.clone())
                        on:input=move |ev| {
                            let text = event_target_value(&ev);
                            wizard.update(|w| w.details.description = text);
                        }
                    ></textarea>
                </div>
            </section>
        }
    };

    let summary = Memo::new(move |_| {
        let total = cart.with(|c| c.total());
        let paid = wizard.with(|w| w.paid_amount().unwrap_or(0.0));
        PaymentSummary::new(total, paid)
    });

    let payment_step = move || {
        view! {
            <section class="card">
                <div class="form__grid">
                    <WizardField
                        label="Monto pagado"
                        input_type="number"
                        placeholder="0.00"
                        value=field(|w| w.payment.paid_input.clone())
                        on_input=Callback::new(move |v: String| wizard.update(|w| w.payment.paid_input = v))
                    />
                    <div class="form__group">
                        <Label>"Método de pago"</Label>
                        <select
                            class="form__select"
                            prop:value=move || wizard.with(|w| w.payment.method.code())
                            on:change=move |ev| {
                                if let Some(m) = PaymentMethod::from_code(&event_target_value(&ev)) {
                                    wizard.update(|w| w.payment.method = m);
                                }
                            }
                        >
                            {PaymentMethod::selectable().into_iter().map(|m| view! {
                                <option value=m.code()>{m.label()}</option>
                            }).collect_view()}
                        </select>
                    </div>
                </div>
            </section>
            <div class="stat-grid">
                <StatCard
                    label="Total estimado"
                    icon_name="orders"
                    value=Signal::derive(move || Some(format_currency(summary.get().total)))
                    subtitle=Signal::derive(move || Some(format!("{} prendas", cart.with(|c| c.len()))))
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
            <div class="wizard__status">
                "Estado de pago: "
                <StatusBadge
                    variant=Signal::derive(move || summary.get().status.badge())
                    label=Signal::derive(move || summary.get().status.label().to_string())
                />
            </div>
        }
    };

    view! {
        <PageFrame page_id="u101_create_order--usecase" category=PAGE_CAT_USECASE>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{CreateOrder::display_name()}</h1>
                    <span class="page__subtitle">{CreateOrder::description()}</span>
                </div>
            </div>

            <div class="page__content wizard">
                <StepIndicator current=step />

                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                {move || match step.get() {
                    WizardStep::Customer => customer_step().into_any(),
                    WizardStep::ItemsAndDetails => details_step().into_any(),
                    WizardStep::PaymentSummary => payment_step().into_any(),
                }}

                <div class="wizard__actions">
                    <Show when=move || step.get() != WizardStep::Customer>
                        <Button appearance=ButtonAppearance::Secondary on_click=go_back>
                            {icon("chevron-left")}
                            " Atrás"
                        </Button>
                    </Show>
                    <Show
                        when=move || wizard.with(|w| w.is_last_step())
                        fallback=move || view! {
                            <Button appearance=ButtonAppearance::Primary on_click=go_next>
                                "Siguiente "
                                {icon("chevron-right")}
                            </Button>
                        }
                    >
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=submit
                            disabled=Signal::derive(move || submitting.get())
                        >
                            {icon("check")}
                            {move || if submitting.get() { " Creando..." } else { " Crear orden" }}
                        </Button>
                    </Show>
                </div>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn customer(id: &str) -> Customer {
        serde_json::from_value(serde_json::json!({ "_id": id, "firstName": id, "lastName": "" })).unwrap()
    }

    #[test]
    fn test_step_class_marks_current_and_done() {
        assert_eq!(
            step_class(WizardStep::ItemsAndDetails, WizardStep::Customer),
            "wizard-steps__item wizard-steps__item--done"
        );
        assert_eq!(
            step_class(WizardStep::ItemsAndDetails, WizardStep::ItemsAndDetails),
            "wizard-steps__item wizard-steps__item--active"
        );
        assert_eq!(
            step_class(WizardStep::ItemsAndDetails, WizardStep::PaymentSummary),
            "wizard-steps__item"
        );
    }

    #[test]
    fn test_keep_selected_customer_in_filtered_picker() {
        let previous = vec![customer("c1"), customer("c2")];
        let items = keep_selected(vec![customer("c3")], &previous, Some("c2"));
        let ids: Vec<&str> = items.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["c2", "c3"]);

        let items = keep_selected(vec![customer("c3")], &previous, None);
        assert_eq!(items.len(), 1);
    }
}

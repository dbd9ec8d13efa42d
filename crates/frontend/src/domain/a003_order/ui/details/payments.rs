use contracts::domain::a004_payment::{CreatePaymentRequest, PaymentMethod};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::view_model::OrderDetailVm;
use crate::domain::a004_payment::api;
use crate::shared::dialog::confirm;
use crate::shared::format::{format_currency, format_datetime_opt};
use crate::shared::http::ApiClient;
use crate::shared::icons::icon;
use crate::shared::notify::use_notifier;

/// Payments of one order and the form to add another.
#[component]
pub fn PaymentsPanel(vm: OrderDetailVm, order_id: String, on_changed: Callback<()>) -> impl IntoView {
    let client = ApiClient::from_context();
    let notifier = use_notifier();
    let order_id = StoredValue::new(order_id);

    let amount = RwSignal::new(String::new());
    let method = RwSignal::new(PaymentMethod::Cash);
    let (submitting, set_submitting) = signal(false);

    let add_payment = move |_| {
        let request = match CreatePaymentRequest::from_input(
            &order_id.get_value(),
            &amount.get_untracked(),
            method.get_untracked(),
        ) {
            Ok(request) => request,
            Err(msg) => {
                notifier.error(msg);
                return;
            }
        };

        set_submitting.set(true);
        spawn_local(async move {
            match api::create_payment(client, &request).await {
                Ok(()) => {
                    notifier.success("Pago agregado correctamente");
                    amount.set(String::new());
                    on_changed.run(());
                }
                Err(e) => notifier.error(e.user_message("No se pudo agregar el pago")),
            }
            set_submitting.set(false);
        });
    };

    let delete_payment = move |payment_id: String| {
        if !confirm("¿Eliminar este pago?") {
            return;
        }
        spawn_local(async move {
            match api::delete_payment(client, &payment_id).await {
                Ok(()) => {
                    notifier.success("Pago eliminado correctamente");
                    on_changed.run(());
                }
                Err(e) => notifier.error(e.user_message("No se pudo eliminar el pago")),
            }
        });
    };

    view! {
        <section class="card">
            <div class="card__header">
                {icon("dollar-sign")}
                <h2 class="card__title">"Pagos"</h2>
            </div>

            <Show
                when=move || vm.payments.with(|p| !p.is_empty())
                fallback=|| view! { <div class="empty-state">"Todavía no hay pagos registrados"</div> }
            >
                <Table attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>"Fecha"</TableHeaderCell>
                            <TableHeaderCell>"Método"</TableHeaderCell>
                            <TableHeaderCell>"Monto"</TableHeaderCell>
                            <TableHeaderCell>""</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <For
                            each=move || vm.payments.get()
                            key=|p| p.id.clone()
                            children=move |payment| {
                                let id = payment.id.clone();
                                view! {
                                    <TableRow>
                                        <TableCell>{format_datetime_opt(&payment.created_at)}</TableCell>
                                        <TableCell>{payment.method.label()}</TableCell>
                                        <TableCell>{format_currency(payment.amount)}</TableCell>
                                        <TableCell>
                                            <Button
                                                appearance=ButtonAppearance::Subtle
                                                on_click=move |_| delete_payment(id.clone())
                                                attr:title="Eliminar pago"
                                            >
                                                {icon("trash")}
                                            </Button>
                                        </TableCell>
                                    </TableRow>
                                }
                            }
                        />
                    </TableBody>
                </Table>
            </Show>

            <div class="card__footer payment-form">
                <div class="form__group">
                    <Label>"Monto"</Label>
                    <Input value=amount input_type=InputType::Number placeholder="0.00" />
                </div>
                <div class="form__group">
                    <Label>"Método"</Label>
                    <select
                        class="form__select"
                        prop:value=move || method.get().code()
                        on:change=move |ev| {
                            if let Some(m) = PaymentMethod::from_code(&event_target_value(&ev)) {
                                method.set(m);
                            }
                        }
                    >
                        {PaymentMethod::selectable().into_iter().map(|m| view! {
                            <option value=m.code()>{m.label()}</option>
                        }).collect_view()}
                    </select>
                </div>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=add_payment
                    disabled=Signal::derive(move || submitting.get())
                >
                    {icon("plus")}
                    {move || if submitting.get() { " Agregando..." } else { " Agregar pago" }}
                </Button>
            </div>
        </section>
    }
}

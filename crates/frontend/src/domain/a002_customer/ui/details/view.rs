use contracts::domain::a002_customer::Customer;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::view_model::CustomerFormVm;
use crate::domain::a002_customer::api;
use crate::shared::http::ApiClient;
use crate::shared::icons::icon;

/// Create (`customer = None`) or edit modal.
#[component]
pub fn CustomerForm(
    customer: Option<Customer>,
    on_close: Callback<()>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let client = ApiClient::from_context();
    let vm = CustomerFormVm::new(customer.as_ref());
    let customer_id = customer.as_ref().map(|c| c.id.clone());
    let title = match &customer {
        Some(c) => format!("Editar cliente: {}", c.full_name()),
        None => "Nuevo cliente".to_string(),
    };

    let on_save = move |_| {
        let Some(dto) = vm.build_dto() else {
            return;
        };
        let id = customer_id.clone();
        vm.saving.set(true);
        spawn_local(async move {
            let result = match id {
                Some(id) => api::update_customer(client, &id, &dto).await,
                None => api::create_customer(client, &dto).await.map(|_| ()),
            };
            match result {
                Ok(()) => on_saved.run(()),
                Err(e) => {
                    vm.error.set(Some(e.user_message("No se pudo guardar el cliente")));
                    vm.saving.set(false);
                }
            }
        });
    };

    let disabled = Signal::derive(move || vm.saving.get());

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class="modal" on:click=move |ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h2 class="modal-title">{title}</h2>
                    <Button appearance=ButtonAppearance::Subtle on_click=move |_| on_close.run(())>
                        {icon("x")}
                    </Button>
                </div>

                <div class="modal-body">
                    {move || vm.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                    <div class="form__row">
                        <div class="form__group">
                            <Label>"Nombre *"</Label>
                            <Input value=vm.first_name disabled=disabled />
                        </div>
                        <div class="form__group">
                            <Label>"Apellido *"</Label>
                            <Input value=vm.last_name disabled=disabled />
                        </div>
                    </div>
                    <div class="form__group">
                        <Label>"Teléfono"</Label>
                        <Input value=vm.phone input_type=InputType::Tel disabled=disabled />
                    </div>
                    <div class="form__group">
                        <Label>"Email"</Label>
                        <Input value=vm.email input_type=InputType::Email disabled=disabled />
                    </div>
                    <div class="form__group">
                        <Label>"Dirección"</Label>
                        <Input value=vm.address disabled=disabled />
                    </div>
                </div>

                <div class="modal-footer">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| on_close.run(())
                        disabled=disabled
                    >
                        "Cancelar"
                    </Button>
                    <Button appearance=ButtonAppearance::Primary on_click=on_save disabled=disabled>
                        {move || if vm.saving.get() { "Guardando..." } else { "Guardar" }}
                    </Button>
                </div>
            </div>
        </div>
    }
}

use contracts::domain::a001_price_item::PriceItem;
use contracts::domain::a003_order::{line_subtotal, DuplicatePolicy, UpdateOrderRequest};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::view_model::OrderDetailVm;
use crate::domain::a001_price_item::api as prices_api;
use crate::domain::a003_order::api;
use crate::shared::format::format_currency;
use crate::shared::http::ApiClient;
use crate::shared::icons::icon;
use crate::shared::notify::use_notifier;

/// Picker plus quantity table over the order's cart.
#[component]
pub fn CartEditor(
    /// Cart being edited
    cart: RwSignal<contracts::domain::a003_order::Cart>,
    /// Catalog offered in the picker
    #[prop(into)]
    catalog: Signal<Vec<PriceItem>>,
    #[prop(optional)]
    policy: DuplicatePolicy,
) -> impl IntoView {
    let selected = RwSignal::new(String::new());

    let add_selected = move |_| {
        let id = selected.get_untracked();
        let item = catalog.with_untracked(|c| c.iter().find(|i| i.id == id).cloned());
        if let Some(item) = item {
            cart.update(|c| {
                c.add_item(item, policy);
            });
            selected.set(String::new());
        }
    };

    view! {
        <div class="cart-editor">
            <Flex gap=FlexGap::Small align=FlexAlign::End>
                <div class="form__group" style="flex: 1;">
                    <Label>"Prenda"</Label>
                    <select
                        class="form__select"
                        prop:value=move || selected.get()
                        on:change=move |ev| selected.set(event_target_value(&ev))
                    >
                        <option value="">"Seleccioná una prenda..."</option>
                        {move || catalog.get().into_iter().map(|item| view! {
                            <option value=item.id.clone()>{item.option_label()}</option>
                        }).collect_view()}
                    </select>
                </div>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=add_selected
                    disabled=Signal::derive(move || selected.with(String::is_empty))
                >
                    {icon("plus")}
                    " Agregar"
                </Button>
            </Flex>

            <Show
                when=move || cart.with(|c| !c.is_empty())
                fallback=|| view! { <div class="empty-state">"No hay prendas en la orden"</div> }
            >
                <Table attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>"Prenda"</TableHeaderCell>
                            <TableHeaderCell>"Precio unitario"</TableHeaderCell>
                            <TableHeaderCell>"Cantidad"</TableHeaderCell>
                            <TableHeaderCell>"Subtotal"</TableHeaderCell>
                            <TableHeaderCell>""</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <For
                            each=move || cart.with(|c| c.lines().to_vec())
                            key=|line| (line.item_id().map(str::to_string), line.quantity)
                            children=move |line| {
                                let Some(item) = line.item.clone() else {
                                    return ().into_any();
                                };
                                let id = StoredValue::new(item.id.clone());
                                let quantity = line.quantity;
                                let unit_price = format_currency(item.effective_unit_price());
                                let subtotal = format_currency(line_subtotal(&line));
                                let name = item.name;
                                view! {
                                    <TableRow>
                                        <TableCell>{name}</TableCell>
                                        <TableCell>{unit_price}</TableCell>
                                        <TableCell>
                                            <div class="quantity-input">
                                                <button
                                                    class="quantity-input__btn"
                                                    on:click=move |_| cart.update(|c| c.set_quantity(&id.get_value(), i64::from(quantity) - 1))
                                                    title="Quitar uno"
                                                >
                                                    {icon("minus")}
                                                </button>
                                                <input
                                                    type="number"
                                                    min="1"
                                                    class="quantity-input__field"
                                                    prop:value=quantity.to_string()
                                                    on:change=move |ev| {
                                                        let raw = event_target_value(&ev);
                                                        cart.update(|c| c.set_quantity_input(&id.get_value(), &raw));
                                                    }
                                                />
                                                <button
                                                    class="quantity-input__btn"
                                                    on:click=move |_| cart.update(|c| c.set_quantity(&id.get_value(), i64::from(quantity) + 1))
                                                    title="Agregar uno"
                                                >
                                                    {icon("plus")}
                                                </button>
                                            </div>
                                        </TableCell>
                                        <TableCell>{subtotal}</TableCell>
                                        <TableCell>
                                            <Button
                                                appearance=ButtonAppearance::Subtle
                                                on_click=move |_| cart.update(|c| c.remove(&id.get_value()))
                                                attr:title="Quitar"
                                            >
                                                {icon("trash")}
                                            </Button>
                                        </TableCell>
                                    </TableRow>
                                }.into_any()
                            }
                        />
                    </TableBody>
                </Table>
                <div class="cart-editor__total">
                    "Total estimado: "
                    <strong>{move || format_currency(cart.with(|c| c.total()))}</strong>
                </div>
            </Show>
        </div>
    }
}

/// Line items of a saved order with a save button.
#[component]
pub fn OrderItemsPanel(vm: OrderDetailVm, order_id: String, on_saved: Callback<()>) -> impl IntoView {
    let client = ApiClient::from_context();
    let notifier = use_notifier();
    let catalog: RwSignal<Vec<PriceItem>> = RwSignal::new(Vec::new());
    let (saving, set_saving) = signal(false);
    let order_id = StoredValue::new(order_id);

    Effect::new(move |_| {
        spawn_local(async move {
            match prices_api::fetch_prices(client).await {
                Ok(items) => catalog.set(items),
                Err(e) => notifier.error(e.user_message("Error al cargar los precios")),
            }
        });
    });

    let save_items = move |_| {
        let request = UpdateOrderRequest::items(vm.cart.with_untracked(|c| c.to_update_items()));
        set_saving.set(true);
        spawn_local(async move {
            match api::update_order(client, &order_id.get_value(), &request).await {
                Ok(()) => {
                    notifier.success("Prendas actualizadas correctamente");
                    on_saved.run(());
                }
                Err(e) => notifier.error(e.user_message("No se pudieron actualizar las prendas")),
            }
            set_saving.set(false);
        });
    };

    let discard = move |_| {
        if let Some(order) = vm.order.get_untracked() {
            vm.apply_order(order);
        }
    };

    view! {
        <section class="card">
            <div class="card__header">
                {icon("tag")}
                <h2 class="card__title">"Prendas"</h2>
            </div>
            <CartEditor cart=vm.cart catalog=catalog />
            <Show when=move || vm.items_changed()>
                <div class="card__footer">
                    <Button appearance=ButtonAppearance::Secondary on_click=discard>
                        "Descartar"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=save_items
                        disabled=Signal::derive(move || saving.get())
                    >
                        {icon("save")}
                        {move || if saving.get() { " Guardando..." } else { " Guardar prendas" }}
                    </Button>
                </div>
            </Show>
        </section>
    }
}

mod state;

use contracts::domain::a003_order::{Order, OrderStatus};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a003_order::{api, receipt};
use crate::layout::global_context::use_global_context;
use crate::layout::tabs::detail_tab_label;
use crate::layout::tabs::tab_labels::order_detail_key;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::search_input::SearchInput;
use crate::shared::components::ui::Badge;
use crate::shared::dialog::confirm;
use crate::shared::format::{date_input_value, format_currency, format_date_opt, parse_date_input};
use crate::shared::http::ApiClient;
use crate::shared::icons::icon;
use crate::shared::notify::use_notifier;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use state::create_state;

#[component]
pub fn OrdersList() -> impl IntoView {
    let client = ApiClient::from_context();
    let notifier = use_notifier();
    let tabs = use_global_context();
    let state = create_state();
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);

    let load_data = move || {
        let query = state.with_untracked(|s| s.to_query());
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::fetch_orders(client, &query).await {
                Ok(page) => state.update(|s| {
                    s.items = page.items;
                    s.page = page.page;
                    s.total_pages = page.total_pages;
                    s.total_count = page.total_count;
                    s.is_loaded = true;
                }),
                Err(e) => {
                    log::error!("Failed to load orders: {}", e);
                    set_error.set(Some(e.user_message("Error al cargar las órdenes")));
                }
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| {
        if !state.with_untracked(|s| s.is_loaded) {
            load_data();
        }
    });

    let on_search = move |search: String| {
        if state.with_untracked(|s| s.search == search.trim()) {
            return;
        }
        state.update(|s| s.set_search(&search));
        load_data();
    };

    let on_status = move |ev: leptos::ev::Event| {
        let status = OrderStatus::from_code(&event_target_value(&ev));
        state.update(|s| s.set_status(status));
        load_data();
    };

    let on_from = move |ev: leptos::ev::Event| {
        let from = parse_date_input(&event_target_value(&ev));
        state.update(|s| {
            let to = s.date_to;
            s.set_range(from, to);
        });
        load_data();
    };

    let on_to = move |ev: leptos::ev::Event| {
        let to = parse_date_input(&event_target_value(&ev));
        state.update(|s| {
            let from = s.date_from;
            s.set_range(from, to);
        });
        load_data();
    };

    let clear_filters = move |_| {
        state.update(|s| s.clear_filters());
        load_data();
    };

    let go_to_page = move |page: usize| {
        state.update(|s| s.page = page);
        load_data();
    };

    let change_page_size = move |size: usize| {
        state.update(|s| s.set_page_size(size));
        load_data();
    };

    let open_order = move |order: &Order| {
        tabs.open_tab(
            &order_detail_key(&order.id),
            &detail_tab_label("Orden", &order.number_label()),
        );
    };

    let handle_receipt = move |order_id: String| {
        spawn_local(async move {
            if let Err(msg) = receipt::download_receipt(client, &order_id).await {
                notifier.error(msg);
            }
        });
    };

    let handle_delete = move |order: Order| {
        if !confirm(&format!("¿Eliminar la orden {}?", order.number_label())) {
            return;
        }
        spawn_local(async move {
            match api::delete_order(client, &order.id).await {
                Ok(()) => {
                    notifier.success("Orden eliminada correctamente");
                    tabs.close_tab(&order_detail_key(&order.id));
                    load_data();
                }
                Err(e) => notifier.error(e.user_message("No se pudo eliminar la orden")),
            }
        });
    };

    view! {
        <PageFrame page_id="a003_order--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Órdenes"</h1>
                    <span class="badge badge--neutral">
                        {move || state.with(|s| s.total_count).to_string()}
                    </span>
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

                <div class="filter-panel">
                    <div class="filter-panel-header">
                        <div class="filter-panel-header__left">
                            {icon("filter")}
                            <span class="filter-panel__title">"Filtros"</span>
                        </div>
                        <div class="filter-panel-header__right">
                            <Show when=move || state.with(|s| s.has_filters())>
                                <Button appearance=ButtonAppearance::Subtle on_click=clear_filters>
                                    "Limpiar filtros"
                                </Button>
                            </Show>
                        </div>
                    </div>
                    <div class="filter-panel-content">
                        <Flex gap=FlexGap::Small align=FlexAlign::End>
                            <div class="form__group" style="flex: 1; max-width: 320px;">
                                <Label>"Buscar"</Label>
                                <SearchInput
                                    value=Signal::derive(move || state.with(|s| s.search.clone()))
                                    on_change=Callback::new(on_search)
                                    placeholder="Cliente o número de orden..."
                                />
                            </div>
                            <div class="form__group">
                                <Label>"Estado"</Label>
                                <select
                                    class="form__select"
                                    prop:value=move || state.with(|s| s.status.map(|st| st.code()).unwrap_or_default())
                                    on:change=on_status
                                >
                                    <option value="">"Todos"</option>
                                    {OrderStatus::all().into_iter().map(|st| view! {
                                        <option value=st.code()>{st.code()}</option>
                                    }).collect_view()}
                                </select>
                            </div>
                            <div class="form__group">
                                <Label>"Desde"</Label>
                                <input
                                    type="date"
                                    class="form__input"
                                    prop:value=move || state.with(|s| date_input_value(s.date_from))
                                    on:change=on_from
                                />
                            </div>
                            <div class="form__group">
                                <Label>"Hasta"</Label>
                                <input
                                    type="date"
                                    class="form__input"
                                    prop:value=move || state.with(|s| date_input_value(s.date_to))
                                    on:change=on_to
                                />
                            </div>
                        </Flex>
                    </div>
                </div>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell min_width=80.0>"Orden"</TableHeaderCell>
                                <TableHeaderCell min_width=180.0>"Cliente"</TableHeaderCell>
                                <TableHeaderCell min_width=100.0>"Fecha"</TableHeaderCell>
                                <TableHeaderCell min_width=110.0>"Estado"</TableHeaderCell>
                                <TableHeaderCell min_width=110.0>"Total"</TableHeaderCell>
                                <TableHeaderCell min_width=110.0>"Pagado"</TableHeaderCell>
                                <TableHeaderCell min_width=100.0>"Pago"</TableHeaderCell>
                                <TableHeaderCell min_width=120.0>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || state.get().items
                                key=|o| (o.id.clone(), o.status, o.paid.to_bits())
                                children=move |order| {
                                    let payment = order.payment_status();
                                    let number = order.number_label();
                                    let customer_name = order.customer_name();
                                    let created = format_date_opt(&order.created_at);
                                    let status_variant = order.status.badge();
                                    let status_code = order.status.code();
                                    let total = format_currency(order.total);
                                    let paid = format_currency(order.paid);
                                    let payment_variant = payment.badge();
                                    let payment_label = payment.label();
                                    let receipt_id = order.id.clone();
                                    let for_link = order.clone();
                                    let for_view = order.clone();
                                    let for_delete = order;
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <a
                                                    href="#"
                                                    class="table__link"
                                                    on:click=move |ev| {
                                                        ev.prevent_default();
                                                        open_order(&for_link);
                                                    }
                                                >
                                                    {number}
                                                </a>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{customer_name}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{created}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <Badge variant=status_variant>{status_code}</Badge>
                                            </TableCell>
                                            <TableCell>{total}</TableCell>
                                            <TableCell>{paid}</TableCell>
                                            <TableCell>
                                                <Badge variant=payment_variant>{payment_label}</Badge>
                                            </TableCell>
                                            <TableCell>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| open_order(&for_view)
                                                    attr:title="Ver detalle"
                                                >
                                                    {icon("eye")}
                                                </Button>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| handle_receipt(receipt_id.clone())
                                                    attr:title="Descargar comprobante"
                                                >
                                                    {icon("download")}
                                                </Button>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| handle_delete(for_delete.clone())
                                                    attr:title="Eliminar"
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
                </div>

                <Show when=move || state.with(|s| s.is_loaded && s.items.is_empty())>
                    <div class="empty-state">"No se encontraron órdenes"</div>
                </Show>

                <PaginationControls
                    current_page=Signal::derive(move || state.with(|s| s.page))
                    total_pages=Signal::derive(move || state.with(|s| s.total_pages))
                    total_count=Signal::derive(move || state.with(|s| s.total_count))
                    page_size=Signal::derive(move || state.with(|s| s.page_size))
                    on_page_change=Callback::new(go_to_page)
                    on_page_size_change=Callback::new(change_page_size)
                />
            </div>
        </PageFrame>
    }
}

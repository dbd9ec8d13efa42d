mod state;

use contracts::domain::a002_customer::Customer;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::details::CustomerForm;
use crate::domain::a002_customer::api;
use crate::layout::global_context::use_global_context;
use crate::layout::tabs::detail_tab_label;
use crate::layout::tabs::tab_labels::customer_detail_key;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::search_input::SearchInput;
use crate::shared::dialog::confirm;
use crate::shared::format::format_date_opt;
use crate::shared::http::ApiClient;
use crate::shared::icons::icon;
use crate::shared::notify::use_notifier;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use state::create_state;

fn or_dash(value: &Option<String>) -> String {
    value
        .as_deref()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or("-")
        .to_string()
}

#[component]
pub fn CustomersList() -> impl IntoView {
    let client = ApiClient::from_context();
    let notifier = use_notifier();
    let tabs = use_global_context();
    let state = create_state();
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);
    let (show_create_form, set_show_create_form) = signal(false);
    let editing: RwSignal<Option<Customer>> = RwSignal::new(None);

    let load_data = move || {
        let query = state.with_untracked(|s| s.query());
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::fetch_customers(client, &query).await {
                Ok(page) => state.update(|s| {
                    s.items = page.items;
                    s.page = page.page;
                    s.total_pages = page.total_pages;
                    s.total_count = page.total_count;
                    s.is_loaded = true;
                }),
                Err(e) => {
                    log::error!("Failed to load customers: {}", e);
                    set_error.set(Some(e.user_message("Error al cargar los clientes")));
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
        let mut changed = false;
        state.update(|s| changed = s.set_search(&search));
        if changed {
            load_data();
        }
    };

    let go_to_page = move |page: usize| {
        state.update(|s| s.page = page);
        load_data();
    };

    let change_page_size = move |size: usize| {
        state.update(|s| s.set_page_size(size));
        load_data();
    };

    let open_profile = move |customer: &Customer| {
        tabs.open_tab(
            &customer_detail_key(&customer.id),
            &detail_tab_label("Cliente", &customer.full_name()),
        );
    };

    let handle_delete = move |customer: Customer| {
        if !confirm(&format!("¿Eliminar al cliente {}?", customer.full_name())) {
            return;
        }
        spawn_local(async move {
            match api::delete_customer(client, &customer.id).await {
                Ok(()) => {
                    notifier.success("Cliente eliminado correctamente");
                    load_data();
                }
                Err(e) => notifier.error(e.user_message("No se pudo eliminar el cliente")),
            }
        });
    };

    view! {
        <PageFrame page_id="a002_customer--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Clientes"</h1>
                    <span class="badge badge--neutral">
                        {move || state.with(|s| s.total_count).to_string()}
                    </span>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| set_show_create_form.set(true)
                    >
                        {icon("plus")}
                        " Nuevo cliente"
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
                    <div class="filter-panel-content">
                        <SearchInput
                            value=Signal::derive(move || state.with(|s| s.search.clone()))
                            on_change=Callback::new(on_search)
                            placeholder="Nombre, teléfono o email..."
                        />
                    </div>
                </div>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell min_width=180.0>"Nombre"</TableHeaderCell>
                                <TableHeaderCell min_width=120.0>"Teléfono"</TableHeaderCell>
                                <TableHeaderCell min_width=180.0>"Email"</TableHeaderCell>
                                <TableHeaderCell min_width=180.0>"Dirección"</TableHeaderCell>
                                <TableHeaderCell min_width=100.0>"Alta"</TableHeaderCell>
                                <TableHeaderCell min_width=120.0>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || state.get().items
                                key=|c| c.id.clone()
                                children=move |customer| {
                                    let name = customer.full_name();
                                    let phone = or_dash(&customer.phone);
                                    let email = or_dash(&customer.email);
                                    let address = or_dash(&customer.address);
                                    let created = format_date_opt(&customer.created_at);
                                    let for_profile = customer.clone();
                                    let for_link = customer.clone();
                                    let for_edit = customer.clone();
                                    let for_delete = customer;
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <a
                                                        href="#"
                                                        class="table__link"
                                                        on:click=move |ev| {
                                                            ev.prevent_default();
                                                            open_profile(&for_link);
                                                        }
                                                    >
                                                        {name}
                                                    </a>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{phone}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{email}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{address}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{created}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| open_profile(&for_profile)
                                                    attr:title="Ver perfil"
                                                >
                                                    {icon("eye")}
                                                </Button>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| editing.set(Some(for_edit.clone()))
                                                    attr:title="Editar"
                                                >
                                                    {icon("edit")}
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
                    <div class="empty-state">"No se encontraron clientes"</div>
                </Show>

                <PaginationControls
                    current_page=Signal::derive(move || state.with(|s| s.page))
                    total_pages=Signal::derive(move || state.with(|s| s.total_pages))
                    total_count=Signal::derive(move || state.with(|s| s.total_count))
                    page_size=Signal::derive(move || state.with(|s| s.page_size))
                    on_page_change=Callback::new(go_to_page)
                    on_page_size_change=Callback::new(change_page_size)
                />

                <Show when=move || show_create_form.get()>
                    <CustomerForm
                        customer=None
                        on_close=Callback::new(move |_| set_show_create_form.set(false))
                        on_saved=Callback::new(move |_| {
                            set_show_create_form.set(false);
                            notifier.success("Cliente creado correctamente");
                            load_data();
                        })
                    />
                </Show>

                {move || editing.get().map(|customer| view! {
                    <CustomerForm
                        customer=Some(customer)
                        on_close=Callback::new(move |_| editing.set(None))
                        on_saved=Callback::new(move |_| {
                            editing.set(None);
                            notifier.success("Cliente actualizado correctamente");
                            load_data();
                        })
                    />
                })}
            </div>
        </PageFrame>
    }
}

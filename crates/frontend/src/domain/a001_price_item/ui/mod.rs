mod form;
mod state;

pub use form::NewPriceForm;
pub use state::PriceGridState;

use contracts::domain::a001_price_item::{PriceItem, PriceType};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::api;
use crate::shared::dialog::confirm;
use crate::shared::format::{format_currency, parse_amount};
use crate::shared::http::ApiClient;
use crate::shared::icons::icon;
use crate::shared::notify::use_notifier;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;

/// Editable price grid. Edits stay local until "Guardar cambios" sends one
/// update per changed row.
#[component]
pub fn PriceCatalog() -> impl IntoView {
    let client = ApiClient::from_context();
    let notifier = use_notifier();
    let state = RwSignal::new(PriceGridState::default());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);
    let (saving, set_saving) = signal(false);
    let (show_new_form, set_show_new_form) = signal(false);

    let load_data = move || {
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::fetch_prices(client).await {
                Ok(items) => state.update(|s| s.reset(items)),
                Err(e) => {
                    log::error!("Failed to load prices: {}", e);
                    set_error.set(Some(e.user_message("Error al cargar los precios")));
                }
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| load_data());

    let has_changes = Memo::new(move |_| state.with(|s| s.has_changes()));

    let save_all = move |_| {
        let pending = match state.with_untracked(|s| s.pending_updates()) {
            Ok(pending) => pending,
            Err(e) => {
                notifier.error(e.to_string());
                return;
            }
        };
        if pending.is_empty() {
            return;
        }

        set_saving.set(true);
        spawn_local(async move {
            let mut saved = Vec::with_capacity(pending.len());
            let mut failed = 0usize;
            for (id, dto) in &pending {
                match api::update_price(client, id, dto).await {
                    Ok(()) => saved.push(id.clone()),
                    Err(e) => {
                        log::error!("Failed to update price {}: {}", id, e);
                        failed += 1;
                    }
                }
            }
            state.update(|s| s.mark_saved(&saved));
            set_saving.set(false);
            if failed == 0 {
                notifier.success("Todos los precios fueron actualizados");
                load_data();
            } else {
                // Failed rows stay dirty so the user can retry
                notifier.error("Hubo un error al guardar los cambios");
            }
        });
    };

    let handle_delete = move |item: PriceItem| {
        if !confirm(&format!("¿Eliminar \"{}\" de la lista de precios?", item.name)) {
            return;
        }
        spawn_local(async move {
            match api::delete_price(client, &item.id).await {
                Ok(()) => {
                    notifier.success("Precio eliminado correctamente");
                    state.update(|s| s.remove(&item.id));
                }
                Err(e) => notifier.error(e.user_message("No se pudo eliminar el precio")),
            }
        });
    };

    view! {
        <PageFrame page_id="a001_price_item--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Precios"</h1>
                    <Show when=move || has_changes.get()>
                        <span class="badge badge--warning">"Cambios sin guardar"</span>
                    </Show>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| set_show_new_form.set(true)
                    >
                        {icon("plus")}
                        " Agregar prenda"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load_data()
                        disabled=Signal::derive(move || loading.get() || saving.get())
                    >
                        {icon("refresh")}
                        " Descartar y recargar"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=save_all
                        disabled=Signal::derive(move || !has_changes.get() || saving.get())
                    >
                        {icon("save")}
                        {move || if saving.get() { " Guardando..." } else { " Guardar cambios" }}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell min_width=220.0>"Prenda"</TableHeaderCell>
                                <TableHeaderCell min_width=140.0>"Tipo"</TableHeaderCell>
                                <TableHeaderCell min_width=120.0>"Precio"</TableHeaderCell>
                                <TableHeaderCell min_width=90.0>"Puntos"</TableHeaderCell>
                                <TableHeaderCell min_width=120.0>"Precio final"</TableHeaderCell>
                                <TableHeaderCell min_width=60.0>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || state.with(|s| s.ids())
                                key=|id| id.clone()
                                children=move |id| view! {
                                    <PriceRow id=id state=state on_delete=Callback::new(handle_delete) />
                                }
                            />
                        </TableBody>
                    </Table>
                </div>

                <Show when=move || state.with(|s| s.is_loaded && s.edited.is_empty())>
                    <div class="empty-state">"No hay precios cargados"</div>
                </Show>

                <Show when=move || show_new_form.get()>
                    <NewPriceForm
                        on_close=Callback::new(move |_| set_show_new_form.set(false))
                        on_created=Callback::new(move |_| {
                            set_show_new_form.set(false);
                            notifier.success("Prenda agregada correctamente");
                            load_data();
                        })
                    />
                </Show>
            </div>
        </PageFrame>
    }
}

#[component]
fn PriceRow(id: String, state: RwSignal<PriceGridState>, on_delete: Callback<PriceItem>) -> impl IntoView {
    let id = StoredValue::new(id);
    let item = move || state.with(|s| s.get(&id.get_value()).cloned());
    let edit = move |f: &dyn Fn(&mut PriceItem)| {
        state.update(|s| s.edit(&id.get_value(), f));
    };

    let is_dirty = move || state.with(|s| s.is_dirty(&id.get_value()));
    let is_per_garment = move || item().map(|i| i.kind == PriceType::PerGarment).unwrap_or(false);

    view! {
        <TableRow>
            <TableCell>
                <Show when=is_dirty>
                    <span class="dirty-dot" title="Modificado"></span>
                </Show>
                <input
                    class="grid-input"
                    prop:value=move || item().map(|i| i.name).unwrap_or_default()
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        edit(&|i| i.name = value.clone());
                    }
                />
            </TableCell>
            <TableCell>
                <select
                    class="grid-input"
                    prop:value=move || item().map(|i| i.kind.code()).unwrap_or_default()
                    on:change=move |ev| {
                        if let Some(kind) = PriceType::from_code(&event_target_value(&ev)) {
                            edit(&|i| {
                                i.kind = kind;
                                if kind == PriceType::PerGarment && i.points.is_none() {
                                    i.points = Some(1);
                                }
                            });
                        }
                    }
                >
                    {PriceType::all().into_iter().map(|t| view! {
                        <option value=t.code()>{t.label()}</option>
                    }).collect_view()}
                </select>
            </TableCell>
            <TableCell>
                <input
                    class="grid-input grid-input--number"
                    type="number"
                    min="0"
                    step="0.01"
                    prop:value=move || item().map(|i| i.unit_price.to_string()).unwrap_or_default()
                    on:change=move |ev| {
                        if let Some(price) = parse_amount(&event_target_value(&ev)) {
                            edit(&|i| i.unit_price = price);
                        }
                    }
                />
            </TableCell>
            <TableCell>
                <Show when=is_per_garment fallback=|| view! { <span class="muted">"-"</span> }>
                    <input
                        class="grid-input grid-input--number"
                        type="number"
                        min="1"
                        step="1"
                        prop:value=move || item().and_then(|i| i.points).unwrap_or(1).to_string()
                        on:change=move |ev| {
                            if let Ok(points) = event_target_value(&ev).trim().parse::<u32>() {
                                edit(&|i| i.points = Some(points));
                            }
                        }
                    />
                </Show>
            </TableCell>
            <TableCell>
                <TableCellLayout>
                    {move || item().map(|i| format_currency(i.effective_unit_price())).unwrap_or_default()}
                </TableCellLayout>
            </TableCell>
            <TableCell>
                <Button
                    appearance=ButtonAppearance::Subtle
                    on_click=move |_| {
                        if let Some(i) = item() {
                            on_delete.run(i);
                        }
                    }
                    attr:title="Eliminar"
                >
                    {icon("trash")}
                </Button>
            </TableCell>
        </TableRow>
    }
}

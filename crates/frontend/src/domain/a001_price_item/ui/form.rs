use contracts::domain::a001_price_item::{PriceItemDto, PriceType};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a001_price_item::api;
use crate::shared::format::parse_amount;
use crate::shared::http::ApiClient;
use crate::shared::icons::icon;

#[component]
pub fn NewPriceForm(on_close: Callback<()>, on_created: Callback<()>) -> impl IntoView {
    let client = ApiClient::from_context();
    let blank = PriceItemDto::new_blank();
    let name = RwSignal::new(blank.name);
    let kind = RwSignal::new(blank.kind);
    let price = RwSignal::new(String::new());
    let points = RwSignal::new(blank.points.unwrap_or(1).to_string());
    let (error, set_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);

    let build_dto = move || -> Result<PriceItemDto, String> {
        let price = parse_amount(&price.get_untracked())
            .ok_or_else(|| "Ingresá un precio válido".to_string())?;
        let kind = kind.get_untracked();
        let points = match kind {
            PriceType::PerGarment => Some(
                points
                    .get_untracked()
                    .trim()
                    .parse::<u32>()
                    .map_err(|_| "Los puntos deben ser un número entero".to_string())?,
            ),
            PriceType::Fixed => None,
        };
        let dto = PriceItemDto {
            name: name.get_untracked().trim().to_string(),
            kind,
            price,
            points,
        };
        dto.validate().map_err(|e| e.to_string())?;
        Ok(dto)
    };

    let on_save = move |_| {
        let dto = match build_dto() {
            Ok(dto) => dto,
            Err(msg) => {
                set_error.set(Some(msg));
                return;
            }
        };
        set_saving.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::create_price(client, &dto).await {
                Ok(()) => on_created.run(()),
                Err(e) => {
                    set_error.set(Some(e.user_message("No se pudo crear el precio")));
                    set_saving.set(false);
                }
            }
        });
    };

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class="modal" on:click=move |ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h2 class="modal-title">"Nueva prenda"</h2>
                    <Button appearance=ButtonAppearance::Subtle on_click=move |_| on_close.run(())>
                        {icon("x")}
                    </Button>
                </div>

                <div class="modal-body">
                    {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                    <div class="form__group">
                        <Label>"Nombre *"</Label>
                        <Input value=name placeholder="Camisa, Saco, Acolchado..." />
                    </div>
                    <div class="form__group">
                        <Label>"Tipo"</Label>
                        <select
                            class="form__select"
                            prop:value=move || kind.get().code()
                            on:change=move |ev| {
                                if let Some(k) = PriceType::from_code(&event_target_value(&ev)) {
                                    kind.set(k);
                                }
                            }
                        >
                            {PriceType::all().into_iter().map(|t| view! {
                                <option value=t.code()>{t.label()}</option>
                            }).collect_view()}
                        </select>
                    </div>
                    <div class="form__group">
                        <Label>"Precio *"</Label>
                        <Input value=price placeholder="0,00" />
                    </div>
                    <Show when=move || kind.get() == PriceType::PerGarment>
                        <div class="form__group">
                            <Label>"Puntos"</Label>
                            <Input value=points input_type=InputType::Number />
                        </div>
                    </Show>
                </div>

                <div class="modal-footer">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| on_close.run(())
                        disabled=Signal::derive(move || saving.get())
                    >
                        "Cancelar"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=on_save
                        disabled=Signal::derive(move || saving.get())
                    >
                        {move || if saving.get() { "Guardando..." } else { "Agregar" }}
                    </Button>
                </div>
            </div>
        </div>
    }
}

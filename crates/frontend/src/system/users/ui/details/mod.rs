use contracts::system::users::{CreateUserDto, UpdateUserDto, User, UserRole};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::shared::http::ApiClient;
use crate::shared::icons::icon;
use crate::system::users::api;

fn optional(value: String) -> Option<String> {
    let value = value.trim().to_string();
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

#[component]
fn RoleSelect(role: RwSignal<UserRole>, #[prop(into)] disabled: Signal<bool>) -> impl IntoView {
    view! {
        <select
            class="form__select"
            prop:value=move || role.get().code()
            on:change=move |ev| {
                if let Some(r) = UserRole::from_code(&event_target_value(&ev)) {
                    role.set(r);
                }
            }
            disabled=move || disabled.get()
        >
            {UserRole::all().into_iter().map(|r| view! {
                <option value=r.code() selected=move || role.get() == r>{r.label()}</option>
            }).collect_view()}
        </select>
    }
}

#[component]
pub fn CreateUserForm(on_close: Callback<()>, on_created: Callback<()>) -> impl IntoView {
    let client = ApiClient::from_context();
    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let avatar_url = RwSignal::new(String::new());
    let role = RwSignal::new(UserRole::default());
    let (error, set_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);

    let on_save = move |_| {
        let dto = CreateUserDto {
            first_name: first_name.get_untracked().trim().to_string(),
            last_name: last_name.get_untracked().trim().to_string(),
            email: email.get_untracked().trim().to_string(),
            password: password.get_untracked(),
            role: role.get_untracked(),
            avatar_url: optional(avatar_url.get_untracked()),
        };
        if let Err(msg) = dto.validate() {
            set_error.set(Some(msg));
            return;
        }

        set_saving.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::create_user(client, &dto).await {
                Ok(()) => on_created.run(()),
                Err(e) => {
                    set_error.set(Some(e.user_message("No se pudo crear el usuario")));
                    set_saving.set(false);
                }
            }
        });
    };

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class="modal" on:click=move |ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h2 class="modal-title">"Nuevo usuario"</h2>
                    <Button appearance=ButtonAppearance::Subtle on_click=move |_| on_close.run(())>
                        {icon("x")}
                    </Button>
                </div>

                <div class="modal-body">
                    {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                    <div class="form__group">
                        <Label>"Nombre *"</Label>
                        <Input value=first_name disabled=Signal::derive(move || saving.get()) />
                    </div>
                    <div class="form__group">
                        <Label>"Apellido *"</Label>
                        <Input value=last_name disabled=Signal::derive(move || saving.get()) />
                    </div>
                    <div class="form__group">
                        <Label>"Email *"</Label>
                        <Input value=email input_type=InputType::Email disabled=Signal::derive(move || saving.get()) />
                    </div>
                    <div class="form__group">
                        <Label>"Contraseña *"</Label>
                        <Input value=password input_type=InputType::Password disabled=Signal::derive(move || saving.get()) />
                    </div>
                    <div class="form__group">
                        <Label>"Rol"</Label>
                        <RoleSelect role=role disabled=Signal::derive(move || saving.get()) />
                    </div>
                    <div class="form__group">
                        <Label>"URL de imagen de perfil"</Label>
                        <Input value=avatar_url placeholder="https://..." disabled=Signal::derive(move || saving.get()) />
                    </div>
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
                        {move || if saving.get() { "Creando..." } else { "Crear usuario" }}
                    </Button>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn EditUserForm(user: User, on_close: Callback<()>, on_saved: Callback<()>) -> impl IntoView {
    let client = ApiClient::from_context();
    let initial = UpdateUserDto::from(&user);
    let user_id = user.id.clone();
    let title = format!("Editar: {}", user.full_name());

    let first_name = RwSignal::new(initial.first_name);
    let last_name = RwSignal::new(initial.last_name);
    let email = RwSignal::new(initial.email);
    let avatar_url = RwSignal::new(initial.avatar_url.unwrap_or_default());
    let role = RwSignal::new(initial.role);
    let (error, set_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);

    let on_save = move |_| {
        let dto = UpdateUserDto {
            first_name: first_name.get_untracked().trim().to_string(),
            last_name: last_name.get_untracked().trim().to_string(),
            email: email.get_untracked().trim().to_string(),
            role: role.get_untracked(),
            avatar_url: optional(avatar_url.get_untracked()),
        };
        if let Err(msg) = dto.validate() {
            set_error.set(Some(msg));
            return;
        }

        set_saving.set(true);
        set_error.set(None);
        let id = user_id.clone();
        spawn_local(async move {
            match api::update_user(client, &id, &dto).await {
                Ok(()) => on_saved.run(()),
                Err(e) => {
                    set_error.set(Some(e.user_message("No se pudo actualizar el usuario")));
                    set_saving.set(false);
                }
            }
        });
    };

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
                    {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                    <div class="form__group">
                        <Label>"Nombre *"</Label>
                        <Input value=first_name disabled=Signal::derive(move || saving.get()) />
                    </div>
                    <div class="form__group">
                        <Label>"Apellido *"</Label>
                        <Input value=last_name disabled=Signal::derive(move || saving.get()) />
                    </div>
                    <div class="form__group">
                        <Label>"Email *"</Label>
                        <Input value=email input_type=InputType::Email disabled=Signal::derive(move || saving.get()) />
                    </div>
                    <div class="form__group">
                        <Label>"Rol"</Label>
                        <RoleSelect role=role disabled=Signal::derive(move || saving.get()) />
                    </div>
                    <div class="form__group">
                        <Label>"URL de imagen de perfil"</Label>
                        <Input value=avatar_url placeholder="https://..." disabled=Signal::derive(move || saving.get()) />
                    </div>
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
                        {move || if saving.get() { "Guardando..." } else { "Guardar" }}
                    </Button>
                </div>
            </div>
        </div>
    }
}

use contracts::system::auth::{PasswordChangeForm, UpdateProfileRequest};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::shared::http::ApiClient;
use crate::shared::icons::icon;
use crate::shared::notify::use_notifier;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use crate::system::auth::api;
use crate::system::auth::context::use_auth;

/// Own profile and password.
#[component]
pub fn SettingsPage() -> impl IntoView {
    let auth = use_auth();
    let client = ApiClient::from_context();
    let notifier = use_notifier();

    let user = auth.status.with_untracked(|s| s.user().cloned());
    let email = user.as_ref().and_then(|u| u.email.clone()).unwrap_or_default();
    let first_name = RwSignal::new(user.as_ref().and_then(|u| u.first_name.clone()).unwrap_or_default());
    let last_name = RwSignal::new(user.as_ref().and_then(|u| u.last_name.clone()).unwrap_or_default());
    let avatar_url = RwSignal::new(user.as_ref().and_then(|u| u.avatar_url.clone()).unwrap_or_default());
    let (saving_profile, set_saving_profile) = signal(false);

    let current_password = RwSignal::new(String::new());
    let new_password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let (saving_password, set_saving_password) = signal(false);

    let initials = move || {
        auth.user()
            .map(|u| u.initials())
            .unwrap_or_else(|| "?".to_string())
    };

    let save_profile = move |_| {
        let request = match UpdateProfileRequest::from_form(
            &first_name.get_untracked(),
            &last_name.get_untracked(),
            &avatar_url.get_untracked(),
        ) {
            Ok(request) => request,
            Err(msg) => {
                notifier.error(msg);
                return;
            }
        };

        set_saving_profile.set(true);
        spawn_local(async move {
            match api::update_profile(client, &request).await {
                Ok(()) => {
                    notifier.success("Perfil actualizado correctamente");
                    auth.refresh();
                }
                Err(e) => notifier.error(e.user_message("Error al actualizar el perfil")),
            }
            set_saving_profile.set(false);
        });
    };

    let change_password = move |_| {
        let form = PasswordChangeForm {
            current_password: current_password.get_untracked(),
            new_password: new_password.get_untracked(),
            confirm_password: confirm_password.get_untracked(),
        };
        let request = match form.validate() {
            Ok(request) => request,
            Err(msg) => {
                notifier.error(msg);
                return;
            }
        };

        set_saving_password.set(true);
        spawn_local(async move {
            match api::change_password(client, &request).await {
                Ok(()) => {
                    notifier.success("Contraseña actualizada correctamente");
                    current_password.set(String::new());
                    new_password.set(String::new());
                    confirm_password.set(String::new());
                }
                Err(e) => notifier.error(e.user_message("Error al cambiar la contraseña")),
            }
            set_saving_password.set(false);
        });
    };

    view! {
        <PageFrame page_id="sys_settings--system" category=PAGE_CAT_SYSTEM>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Configuración"</h1>
                </div>
            </div>

            <div class="page__content settings">
                <section class="card">
                    <div class="card__header">
                        {icon("user")}
                        <h2 class="card__title">"Perfil"</h2>
                    </div>
                    <p class="card__description">
                        "Nombre, apellido e imagen de perfil. El email solo puede cambiarlo un administrador."
                    </p>
                    <div class="settings__profile">
                        {move || {
                            let url = avatar_url.get();
                            if url.trim().is_empty() {
                                view! { <div class="avatar avatar--large">{initials}</div> }.into_any()
                            } else {
                                view! { <img class="avatar avatar--large" src=url alt="" /> }.into_any()
                            }
                        }}
                        <div class="settings__fields">
                            <div class="form__group">
                                <Label>"Nombre"</Label>
                                <Input value=first_name placeholder="Tu nombre" />
                            </div>
                            <div class="form__group">
                                <Label>"Apellido"</Label>
                                <Input value=last_name placeholder="Tu apellido" />
                            </div>
                            <div class="form__group">
                                <Label>"Email"</Label>
                                <Input value=RwSignal::new(email) disabled=true />
                            </div>
                            <div class="form__group">
                                <Label>"URL de imagen de perfil"</Label>
                                <Input value=avatar_url placeholder="https://..." />
                            </div>
                        </div>
                    </div>
                    <div class="card__footer">
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=save_profile
                            disabled=Signal::derive(move || saving_profile.get())
                        >
                            {move || if saving_profile.get() { "Guardando..." } else { "Guardar perfil" }}
                        </Button>
                    </div>
                </section>

                <section class="card">
                    <div class="card__header">
                        {icon("settings")}
                        <h2 class="card__title">"Contraseña"</h2>
                    </div>
                    <div class="form__group">
                        <Label>"Contraseña actual"</Label>
                        <Input value=current_password input_type=InputType::Password />
                    </div>
                    <div class="form__group">
                        <Label>"Nueva contraseña"</Label>
                        <Input value=new_password input_type=InputType::Password />
                    </div>
                    <div class="form__group">
                        <Label>"Confirmar nueva contraseña"</Label>
                        <Input value=confirm_password input_type=InputType::Password />
                    </div>
                    <div class="card__footer">
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=change_password
                            disabled=Signal::derive(move || saving_password.get())
                        >
                            {move || if saving_password.get() { "Actualizando..." } else { "Cambiar contraseña" }}
                        </Button>
                    </div>
                </section>
            </div>
        </PageFrame>
    }
}

mod state;

use contracts::shared::BadgeVariant;
use contracts::system::users::{User, UserRole};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::details::{CreateUserForm, EditUserForm};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::ui::Badge;
use crate::shared::dialog::confirm;
use crate::shared::format::format_date_opt;
use crate::shared::http::{ApiClient, ApiError};
use crate::shared::icons::icon;
use crate::shared::notify::use_notifier;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use crate::system::auth::guard::{RequireAdmin, FORBIDDEN_SECTION};
use crate::system::users::api;
use state::create_state;

fn role_variant(role: UserRole) -> BadgeVariant {
    match role {
        UserRole::Admin => BadgeVariant::Warning,
        UserRole::Editor => BadgeVariant::Neutral,
    }
}

#[component]
pub fn UsersListPage() -> impl IntoView {
    view! {
        <RequireAdmin>
            <UsersList />
        </RequireAdmin>
    }
}

#[component]
fn UsersList() -> impl IntoView {
    let client = ApiClient::from_context();
    let notifier = use_notifier();
    let state = create_state();
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);
    let (show_create_form, set_show_create_form) = signal(false);
    let editing_user: RwSignal<Option<User>> = RwSignal::new(None);

    let load_data = move || {
        let query = state.with_untracked(|s| s.query());
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::fetch_users(client, &query).await {
                Ok(page) => {
                    state.update(|s| {
                        s.items = page.items;
                        s.page = page.page;
                        s.total_pages = page.total_pages;
                        s.total_count = page.total_count;
                        s.is_loaded = true;
                    });
                }
                Err(ApiError::Unauthorized { .. }) => {
                    set_error.set(Some(FORBIDDEN_SECTION.to_string()));
                }
                Err(e) => {
                    log::error!("Failed to load users: {}", e);
                    set_error.set(Some(e.user_message("Error al cargar los usuarios")));
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

    let go_to_page = move |page: usize| {
        state.update(|s| s.page = page);
        load_data();
    };

    let change_page_size = move |size: usize| {
        state.update(|s| s.set_page_size(size));
        load_data();
    };

    let handle_delete = move |user: User| {
        if !confirm(&format!("¿Eliminar al usuario {}?", user.full_name())) {
            return;
        }
        spawn_local(async move {
            match api::delete_user(client, &user.id).await {
                Ok(()) => {
                    notifier.success("Usuario eliminado correctamente");
                    load_data();
                }
                Err(e) => notifier.error(e.user_message("No se pudo eliminar el usuario")),
            }
        });
    };

    view! {
        <PageFrame page_id="sys_users--list" category=PAGE_CAT_SYSTEM>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Usuarios"</h1>
                    <Badge variant=BadgeVariant::Neutral>
                        {move || state.with(|s| s.total_count).to_string()}
                    </Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| set_show_create_form.set(true)
                    >
                        {icon("plus")}
                        " Nuevo usuario"
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

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell min_width=180.0>"Nombre"</TableHeaderCell>
                                <TableHeaderCell min_width=200.0>"Email"</TableHeaderCell>
                                <TableHeaderCell min_width=120.0>"Rol"</TableHeaderCell>
                                <TableHeaderCell min_width=110.0>"Creado"</TableHeaderCell>
                                <TableHeaderCell min_width=90.0>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || state.get().items
                                key=|u| u.id.clone()
                                children=move |user| {
                                    let name = user.full_name();
                                    let email = user.email.clone();
                                    let variant = role_variant(user.role);
                                    let role_label = user.role.label();
                                    let created = format_date_opt(&user.created_at);
                                    let for_edit = user.clone();
                                    let for_delete = user;
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span style="font-weight: 500;">{name}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{email}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <Badge variant=variant>{role_label}</Badge>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{created}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| editing_user.set(Some(for_edit.clone()))
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

                <PaginationControls
                    current_page=Signal::derive(move || state.with(|s| s.page))
                    total_pages=Signal::derive(move || state.with(|s| s.total_pages))
                    total_count=Signal::derive(move || state.with(|s| s.total_count))
                    page_size=Signal::derive(move || state.with(|s| s.page_size))
                    on_page_change=Callback::new(go_to_page)
                    on_page_size_change=Callback::new(change_page_size)
                />

                <Show when=move || show_create_form.get()>
                    <CreateUserForm
                        on_close=Callback::new(move |_| set_show_create_form.set(false))
                        on_created=Callback::new(move |_| {
                            set_show_create_form.set(false);
                            notifier.success("Usuario creado correctamente");
                            load_data();
                        })
                    />
                </Show>

                {move || editing_user.get().map(|user| view! {
                    <EditUserForm
                        user=user
                        on_close=Callback::new(move |_| editing_user.set(None))
                        on_saved=Callback::new(move |_| {
                            editing_user.set(None);
                            notifier.success("Usuario actualizado correctamente");
                            load_data();
                        })
                    />
                })}
            </div>
        </PageFrame>
    }
}

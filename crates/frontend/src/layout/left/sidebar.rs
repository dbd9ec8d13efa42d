//! Sidebar with collapsible menu groups.

use crate::layout::global_context::use_global_context;
use crate::layout::tabs::tab_label_for_key;
use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    items: Vec<(&'static str, &'static str)>, // (tab key, icon)
    admin_only: bool,
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "d100_summary",
            label: tab_label_for_key("d100_summary"),
            icon: "dashboard",
            items: vec![],
            admin_only: false,
        },
        MenuGroup {
            id: "orders",
            label: "Órdenes",
            icon: "orders",
            items: vec![("u101_create_order", "new-order"), ("a003_order", "orders")],
            admin_only: false,
        },
        MenuGroup {
            id: "a002_customer",
            label: tab_label_for_key("a002_customer"),
            icon: "customers",
            items: vec![],
            admin_only: false,
        },
        MenuGroup {
            id: "a001_price_item",
            label: tab_label_for_key("a001_price_item"),
            icon: "tag",
            items: vec![],
            admin_only: false,
        },
        MenuGroup {
            id: "sys_users",
            label: tab_label_for_key("sys_users"),
            icon: "users",
            items: vec![],
            admin_only: true,
        },
        MenuGroup {
            id: "sys_settings",
            label: tab_label_for_key("sys_settings"),
            icon: "settings",
            items: vec![],
            admin_only: false,
        },
    ]
}

fn visible_groups(is_admin: bool) -> Vec<MenuGroup> {
    get_menu_groups()
        .into_iter()
        .filter(|g| is_admin || !g.admin_only)
        .collect()
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_global_context();
    let auth = use_auth();
    let expanded_groups = RwSignal::new(vec!["orders".to_string()]);

    view! {
        <div class="app-sidebar__content">
            {move || visible_groups(auth.is_admin()).into_iter().map(|group| {
                let has_children = !group.items.is_empty();
                let group_id = group.id;

                view! {
                    <div>
                        <div
                            class="app-sidebar__item"
                            class:app-sidebar__item--active=move || {
                                !has_children && ctx.active.get().as_deref() == Some(group_id)
                            }
                            style:padding-left="12px"
                            on:click=move |_| {
                                if has_children {
                                    expanded_groups.update(|items| {
                                        if let Some(pos) = items.iter().position(|x| x == group_id) {
                                            items.remove(pos);
                                        } else {
                                            items.push(group_id.to_string());
                                        }
                                    });
                                } else {
                                    ctx.open_tab(group_id, group.label);
                                }
                            }
                        >
                            <div class="app-sidebar__item-content">
                                {icon(group.icon)}
                                <span>{group.label}</span>
                            </div>
                            {has_children.then(|| view! {
                                <div
                                    class="app-sidebar__chevron"
                                    class:app-sidebar__chevron--expanded=move || {
                                        expanded_groups.with(|g| g.iter().any(|x| x == group_id))
                                    }
                                >
                                    {icon("chevron-right")}
                                </div>
                            })}
                        </div>

                        {has_children.then(|| {
                            let items = StoredValue::new(group.items.clone());
                            view! {
                                <Show when=move || expanded_groups.with(|g| g.iter().any(|x| x == group_id))>
                                    <div class="app-sidebar__children">
                                        {items.get_value().into_iter().map(|(key, icon_name)| {
                                            let label = tab_label_for_key(key);
                                            view! {
                                                <div
                                                    class="app-sidebar__item"
                                                    class:app-sidebar__item--active=move || {
                                                        ctx.active.get().as_deref() == Some(key)
                                                    }
                                                    style:padding-left="10px"
                                                    on:click=move |_| ctx.open_tab(key, label)
                                                >
                                                    <div class="app-sidebar__item-content">
                                                        {icon(icon_name)}
                                                        <span>{label}</span>
                                                    </div>
                                                </div>
                                            }
                                        }).collect_view()}
                                    </div>
                                </Show>
                            }
                        })}
                    </div>
                }
            }).collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_users_group_is_admin_only() {
        let editor: Vec<_> = visible_groups(false).iter().map(|g| g.id).collect();
        assert!(!editor.contains(&"sys_users"));
        assert!(visible_groups(true).iter().any(|g| g.id == "sys_users"));
    }

    #[test]
    fn test_every_menu_key_has_a_label() {
        for group in get_menu_groups() {
            assert!(!group.label.is_empty(), "group {}", group.id);
            for (key, _) in group.items {
                assert!(!tab_label_for_key(key).is_empty(), "item {}", key);
            }
        }
    }
}

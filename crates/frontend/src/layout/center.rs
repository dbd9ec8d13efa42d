use crate::layout::global_context::{use_global_context, Tab as TabData};
use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;

#[component]
fn TabHandle(tab: TabData) -> impl IntoView {
    let ctx = use_global_context();

    let key_for_active = tab.key.clone();
    let is_active = Memo::new(move |_| ctx.active.get().as_deref() == Some(&key_for_active));

    let key_for_click = tab.key.clone();
    let key_for_close = tab.key.clone();
    let on_close = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
        ctx.close_tab(&key_for_close);
    };

    view! {
        <div
            class="tabs__handle"
            class:tabs__handle--active=is_active
            on:click=move |_| ctx.activate_tab(&key_for_click)
        >
            <span>{tab.title}</span>
            <button class="tabs__close" on:click=on_close title="Cerrar">
                {icon("x")}
            </button>
        </div>
    }
}

/// Content zone: the strip of open tabs above the tab pages.
#[component]
pub fn Center(children: Children) -> impl IntoView {
    let ctx = use_global_context();

    view! {
        <div data-zone="center" class="app-tabs" style="flex: 1; overflow: auto;">
            <div class="tabs__bar">
                <For
                    each=move || ctx.opened.get()
                    key=|tab| (tab.key.clone(), tab.title.clone())
                    children=move |tab| view! { <TabHandle tab=tab /> }
                />
            </div>
            {children()}
        </div>
    }
}

//! Toast notifications.
//!
//! `Notifier` lives in context next to `AppGlobalContext`; any view or API
//! call site pushes a message and it disappears after
//! `NOTIFICATION_LIFETIME_MS`.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::config::NOTIFICATION_LIFETIME_MS;
use super::icons::icon;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Info,
    Warning,
    Error,
}

impl NotificationKind {
    fn class(&self) -> &'static str {
        match self {
            NotificationKind::Success => "toast toast--success",
            NotificationKind::Info => "toast toast--info",
            NotificationKind::Warning => "toast toast--warning",
            NotificationKind::Error => "toast toast--error",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            NotificationKind::Success => "check",
            NotificationKind::Info => "info",
            NotificationKind::Warning => "alert-triangle",
            NotificationKind::Error => "x-circle",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: u64,
    pub kind: NotificationKind,
    pub message: String,
}

#[derive(Clone, Copy)]
pub struct Notifier {
    pub items: RwSignal<Vec<Notification>>,
    next_id: StoredValue<u64>,
}

impl Notifier {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(1),
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(NotificationKind::Success, message.into());
    }

    pub fn info(&self, message: impl Into<String>) {
        self.push(NotificationKind::Info, message.into());
    }

    pub fn warning(&self, message: impl Into<String>) {
        self.push(NotificationKind::Warning, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(NotificationKind::Error, message.into());
    }

    pub fn push(&self, kind: NotificationKind, message: String) {
        let mut id = 0;
        self.next_id.update_value(|next| {
            id = *next;
            *next += 1;
        });
        self.items.update(|items| items.push(Notification { id, kind, message }));

        let this = *self;
        spawn_local(async move {
            TimeoutFuture::new(NOTIFICATION_LIFETIME_MS).await;
            this.dismiss(id);
        });
    }

    pub fn dismiss(&self, id: u64) {
        // The owner may be gone if the app was torn down in the meantime
        let _ = self.items.try_update(|items| items.retain(|n| n.id != id));
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_notifier() -> Notifier {
    use_context::<Notifier>().expect("Notifier context not found")
}

/// Fixed stack of live notifications, rendered once at the app root.
#[component]
pub fn NotificationStack() -> impl IntoView {
    let notifier = use_notifier();

    view! {
        <div class="toast-stack" role="status" aria-live="polite">
            <For
                each=move || notifier.items.get()
                key=|n| n.id
                children=move |n: Notification| {
                    let id = n.id;
                    view! {
                        <div class=n.kind.class()>
                            <span class="toast__icon">{icon(n.kind.icon())}</span>
                            <span class="toast__message">{n.message.clone()}</span>
                            <button class="toast__close" on:click=move |_| notifier.dismiss(id)>
                                {icon("x")}
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}

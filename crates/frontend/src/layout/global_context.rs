use leptos::prelude::Effect;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

use super::tabs::tab_label_for_key;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub key: String,
    pub title: String,
}

/// Adds `key` unless already open. Returns true when a tab was added.
fn push_tab(tabs: &mut Vec<Tab>, key: &str, title: &str) -> bool {
    if tabs.iter().any(|t| t.key == key) {
        return false;
    }
    tabs.push(Tab {
        key: key.to_string(),
        title: title.to_string(),
    });
    true
}

/// Tab to activate after closing `closed` while `active` was selected.
fn next_active_after_close(tabs: &[Tab], active: Option<&str>, closed: &str) -> Option<String> {
    if active == Some(closed) {
        tabs.last().map(|t| t.key.clone())
    } else {
        active.map(str::to_string)
    }
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub opened: RwSignal<Vec<Tab>>,
    pub active: RwSignal<Option<String>>,
    pub left_open: RwSignal<bool>,
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            opened: RwSignal::new(vec![]),
            active: RwSignal::new(None),
            left_open: RwSignal::new(true),
        }
    }

    /// Restores the active tab from `?active=` and keeps the URL in sync.
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let params: HashMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        match params.get("active") {
            Some(key) if !key.is_empty() => {
                let title = match tab_label_for_key(key) {
                    "" => key.clone(),
                    label => label.to_string(),
                };
                self.open_tab(key, &title);
            }
            _ => self.open_tab("d100_summary", tab_label_for_key("d100_summary")),
        }

        let this = *self;
        Effect::new(move |_| {
            let Some(active_key) = this.active.get() else {
                return;
            };
            let query_string =
                serde_qs::to_string(&HashMap::from([("active".to_string(), active_key)]))
                    .unwrap_or_default();
            let new_url = format!("?{}", query_string);

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();
            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }

    pub fn open_tab(&self, key: &str, title: &str) {
        let mut added = false;
        self.opened.update(|tabs| added = push_tab(tabs, key, title));
        if added {
            leptos::logging::log!("open_tab: '{}'", key);
        }
        self.activate_tab(key);
    }

    pub fn activate_tab(&self, key: &str) {
        self.active.set(Some(key.to_string()));
    }

    pub fn update_tab_title(&self, key: &str, new_title: &str) {
        self.opened.update(|tabs| {
            if let Some(tab) = tabs.iter_mut().find(|t| t.key == key) {
                tab.title = new_title.to_string();
            }
        });
    }

    pub fn close_tab(&self, key: &str) {
        leptos::logging::log!("close_tab: '{}'", key);
        self.opened.update(|tabs| tabs.retain(|tab| tab.key != key));
        let next = self.opened.with_untracked(|tabs| {
            self.active
                .with_untracked(|active| next_active_after_close(tabs, active.as_deref(), key))
        });
        self.active.set(next);
    }

    /// Closes `key` and opens `target`, e.g. after a detail screen deletes
    /// its record or the wizard finishes.
    pub fn replace_tab(&self, key: &str, target: &str) {
        self.close_tab(key);
        self.open_tab(target, tab_label_for_key(target));
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

pub fn use_global_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext not found")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tabs(keys: &[&str]) -> Vec<Tab> {
        keys.iter()
            .map(|k| Tab {
                key: k.to_string(),
                title: k.to_string(),
            })
            .collect()
    }

    #[test]
    fn test_push_tab_ignores_open_key() {
        let mut list = tabs(&["a", "b"]);
        assert!(!push_tab(&mut list, "a", "again"));
        assert!(push_tab(&mut list, "c", "C"));
        assert_eq!(list.len(), 3);
        assert_eq!(list[0].title, "a");
    }

    #[test]
    fn test_close_active_tab_activates_last() {
        let list = tabs(&["a", "b"]);
        assert_eq!(
            next_active_after_close(&list, Some("c"), "c"),
            Some("b".to_string())
        );
        assert_eq!(next_active_after_close(&[], Some("c"), "c"), None);
    }

    #[test]
    fn test_close_other_tab_keeps_active() {
        let list = tabs(&["a", "b"]);
        assert_eq!(
            next_active_after_close(&list, Some("a"), "c"),
            Some("a".to_string())
        );
    }
}

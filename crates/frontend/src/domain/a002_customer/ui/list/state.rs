use contracts::domain::a002_customer::{Customer, CustomerListQuery};
use leptos::prelude::*;

use crate::shared::config::CUSTOMERS_PAGE_SIZE;

#[derive(Clone, Debug)]
pub struct CustomersListState {
    pub items: Vec<Customer>,
    /// 1-based
    pub page: usize,
    pub page_size: usize,
    pub total_count: usize,
    pub total_pages: usize,
    pub search: String,
    pub is_loaded: bool,
}

impl Default for CustomersListState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            page: 1,
            page_size: CUSTOMERS_PAGE_SIZE,
            total_count: 0,
            total_pages: 1,
            search: String::new(),
            is_loaded: false,
        }
    }
}

impl CustomersListState {
    pub fn query(&self) -> CustomerListQuery {
        CustomerListQuery::new(self.page, self.page_size, &self.search)
    }

    /// Returns false when the search did not change.
    pub fn set_search(&mut self, search: &str) -> bool {
        let search = search.trim();
        if self.search == search {
            return false;
        }
        self.search = search.to_string();
        self.page = 1;
        true
    }

    pub fn set_page_size(&mut self, size: usize) {
        self.page_size = size;
        self.page = 1;
    }
}

pub fn create_state() -> RwSignal<CustomersListState> {
    RwSignal::new(CustomersListState::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_change_resets_page() {
        let mut state = CustomersListState {
            page: 3,
            ..Default::default()
        };
        assert!(state.set_search("  gomez "));
        assert_eq!(state.page, 1);
        assert_eq!(state.query().search.as_deref(), Some("gomez"));
    }

    #[test]
    fn test_same_search_keeps_page() {
        let mut state = CustomersListState {
            page: 3,
            search: "ana".into(),
            ..Default::default()
        };
        assert!(!state.set_search("ana "));
        assert_eq!(state.page, 3);
    }

    #[test]
    fn test_blank_search_is_omitted() {
        let state = CustomersListState::default();
        assert_eq!(state.query().search, None);
        assert_eq!(state.query().limit, CUSTOMERS_PAGE_SIZE);
    }
}

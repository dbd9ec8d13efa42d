use chrono::NaiveDate;
use contracts::domain::a003_order::{Order, OrderListQuery, OrderStatus};
use leptos::prelude::*;

use crate::shared::config::ORDERS_PAGE_SIZE;

#[derive(Clone, Debug)]
pub struct OrdersListState {
    pub items: Vec<Order>,
    /// 1-based
    pub page: usize,
    pub page_size: usize,
    pub total_count: usize,
    pub total_pages: usize,

    /// None = all statuses
    pub status: Option<OrderStatus>,
    pub search: String,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,

    pub is_loaded: bool,
}

impl Default for OrdersListState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            page: 1,
            page_size: ORDERS_PAGE_SIZE,
            total_count: 0,
            total_pages: 1,
            status: None,
            search: String::new(),
            date_from: None,
            date_to: None,
            is_loaded: false,
        }
    }
}

impl OrdersListState {
    pub fn set_status(&mut self, status: Option<OrderStatus>) {
        self.status = status;
        self.page = 1;
    }

    pub fn set_search(&mut self, search: &str) {
        self.search = search.trim().to_string();
        self.page = 1;
    }

    pub fn set_range(&mut self, from: Option<NaiveDate>, to: Option<NaiveDate>) {
        self.date_from = from;
        self.date_to = to;
        self.page = 1;
    }

    pub fn set_page_size(&mut self, size: usize) {
        self.page_size = size;
        self.page = 1;
    }

    pub fn clear_filters(&mut self) {
        self.status = None;
        self.search.clear();
        self.date_from = None;
        self.date_to = None;
        self.page = 1;
    }

    pub fn has_filters(&self) -> bool {
        self.status.is_some()
            || !self.search.is_empty()
            || self.date_from.is_some()
            || self.date_to.is_some()
    }

    pub fn to_query(&self) -> OrderListQuery {
        OrderListQuery {
            page: self.page.max(1),
            limit: self.page_size,
            status: self.status,
            search: (!self.search.is_empty()).then(|| self.search.clone()),
            from: self.date_from,
            to: self.date_to,
        }
    }
}

pub fn create_state() -> RwSignal<OrdersListState> {
    RwSignal::new(OrdersListState::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn on_page(page: usize) -> OrdersListState {
        OrdersListState {
            page,
            ..Default::default()
        }
    }

    #[test]
    fn test_every_filter_resets_page() {
        let mut state = on_page(4);
        state.set_status(Some(OrderStatus::Completed));
        assert_eq!(state.page, 1);

        let mut state = on_page(4);
        state.set_search("perez");
        assert_eq!(state.page, 1);

        let mut state = on_page(4);
        state.set_range(NaiveDate::from_ymd_opt(2024, 1, 1), None);
        assert_eq!(state.page, 1);
    }

    #[test]
    fn test_all_statuses_emits_no_status_param() {
        let query = serde_qs::to_string(&OrdersListState::default().to_query()).unwrap();
        assert_eq!(query, "page=1&limit=10");
    }

    #[test]
    fn test_filters_map_to_query_params() {
        let mut state = OrdersListState::default();
        state.set_status(Some(OrderStatus::Completed));
        state.set_search(" 42 ");
        state.set_range(
            NaiveDate::from_ymd_opt(2024, 3, 1),
            NaiveDate::from_ymd_opt(2024, 3, 31),
        );
        let query = serde_qs::to_string(&state.to_query()).unwrap();
        assert_eq!(
            query,
            "page=1&limit=10&status=Completado&search=42&from=2024-03-01&to=2024-03-31"
        );
    }

    #[test]
    fn test_clear_filters() {
        let mut state = on_page(2);
        state.set_search("ana");
        assert!(state.has_filters());
        state.clear_filters();
        assert!(!state.has_filters());
    }
}

use contracts::system::users::{User, UserListQuery};
use leptos::prelude::*;

use crate::shared::config::USERS_PAGE_SIZE;

#[derive(Clone, Debug)]
pub struct UsersListState {
    pub items: Vec<User>,
    /// 1-based
    pub page: usize,
    pub page_size: usize,
    pub total_count: usize,
    pub total_pages: usize,
    pub is_loaded: bool,
}

impl Default for UsersListState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            page: 1,
            page_size: USERS_PAGE_SIZE,
            total_count: 0,
            total_pages: 1,
            is_loaded: false,
        }
    }
}

impl UsersListState {
    pub fn query(&self) -> UserListQuery {
        UserListQuery {
            page: self.page,
            limit: self.page_size,
        }
    }

    pub fn set_page_size(&mut self, size: usize) {
        self.page_size = size;
        self.page = 1;
    }
}

pub fn create_state() -> RwSignal<UsersListState> {
    RwSignal::new(UsersListState::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_size_change_resets_page() {
        let mut state = UsersListState {
            page: 4,
            ..Default::default()
        };
        state.set_page_size(50);
        assert_eq!(state.query(), UserListQuery { page: 1, limit: 50 });
    }
}

//! Page category constants.
//!
//! Every page rendered inside a tab declares:
//!   - HTML `id` in the format `{entity}--{category}` (e.g. `"a003_order--list"`)
//!   - `data-page-category` with one of the constants below

/// List of records with filters and pagination.
pub const PAGE_CAT_LIST: &str = "list";

/// Detail / edit form for a single record.
pub const PAGE_CAT_DETAIL: &str = "detail";

/// KPI dashboard.
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

/// Multi-step use case (order creation).
pub const PAGE_CAT_USECASE: &str = "usecase";

/// System administration page (users, profile).
pub const PAGE_CAT_SYSTEM: &str = "system";

pub const ALL_CATEGORIES: &[&str] = &[
    PAGE_CAT_LIST,
    PAGE_CAT_DETAIL,
    PAGE_CAT_DASHBOARD,
    PAGE_CAT_USECASE,
    PAGE_CAT_SYSTEM,
];

/// Validate that a page id matches the `{entity}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    let parts: Vec<&str> = id.splitn(2, "--").collect();
    parts.len() == 2 && !parts[0].is_empty() && ALL_CATEGORIES.contains(&parts[1])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_ids() {
        assert!(is_valid_page_id("a003_order--list"));
        assert!(is_valid_page_id("u101_create_order--usecase"));
        assert!(!is_valid_page_id("a003_order"));
        assert!(!is_valid_page_id("--list"));
        assert!(!is_valid_page_id("a003_order--pivot"));
    }
}

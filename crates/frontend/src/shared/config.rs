//! Client tunables.

/// Backend base URL baked in at build time. When unset the client talks to
/// port 3000 on the host that served the page.
pub const API_URL_OVERRIDE: Option<&str> = option_env!("AUTOSPLASH_API_URL");

/// Port used when no override is set.
pub const DEFAULT_API_PORT: u16 = 3000;

pub const ORDERS_PAGE_SIZE: usize = 10;
pub const CUSTOMERS_PAGE_SIZE: usize = 10;
pub const USERS_PAGE_SIZE: usize = 10;
pub const PAGE_SIZE_OPTIONS: [usize; 4] = [10, 20, 50, 100];

/// Customers shown in the wizard's customer picker.
pub const CUSTOMER_PICKER_LIMIT: usize = 100;

pub const SEARCH_DEBOUNCE_MS: u32 = 400;

/// Upper bound for the session check on startup.
pub const AUTH_CHECK_TIMEOUT_MS: u32 = 8000;

pub const NOTIFICATION_LIFETIME_MS: u32 = 4000;

/// Dates are shown in Argentina time (UTC-3, no daylight saving).
pub const DISPLAY_UTC_OFFSET_SECS: i32 = -3 * 3600;

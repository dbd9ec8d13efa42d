pub mod api_utils;
pub mod components;
pub mod config;
pub mod debounce;
pub mod dialog;
pub mod download;
pub mod format;
pub mod http;
pub mod icons;
pub mod notify;
pub mod page_frame;
pub mod page_standard;

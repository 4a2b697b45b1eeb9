pub mod api;
pub mod api_utils;
pub mod components;
pub mod date_utils;
pub mod dropdowns;
pub mod form;
pub mod icons;
pub mod page_state;

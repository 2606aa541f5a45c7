pub mod menu_settings;
pub mod url_utils;

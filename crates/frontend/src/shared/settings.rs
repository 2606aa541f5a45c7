use contracts::shared::menu_settings::{load_settings, MenuSettings};
use once_cell::sync::Lazy;

/// Настройки, встроенные в сборку фронтенда
const FRONTEND_SETTINGS: &str = include_str!("../../menu_settings.toml");

static SETTINGS: Lazy<MenuSettings> = Lazy::new(|| match load_settings(Some(FRONTEND_SETTINGS)) {
    Ok(settings) => settings,
    Err(e) => {
        log::error!("Invalid menu_settings.toml, using defaults: {}", e);
        MenuSettings::default()
    }
});

pub fn settings() -> &'static MenuSettings {
    &SETTINGS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_settings_are_valid() {
        assert!(load_settings(Some(FRONTEND_SETTINGS)).is_ok());
    }
}

use serde::{Deserialize, Serialize};

/// Настройки модуля меню
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct MenuSettings {
    #[serde(default)]
    pub search: SearchSettings,
    #[serde(default)]
    pub links: LinkSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSettings {
    /// Задержка перед поиском категорий и коллекций, мс
    pub debounce_ms: u32,
    /// Более короткие запросы ищут без фильтра
    pub min_chars: usize,
    /// Сколько кандидатов каждого вида показывать
    pub max_suggestions: usize,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            debounce_ms: 300,
            min_chars: 1,
            max_suggestions: 20,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkSettings {
    /// Схемы, при которых запрос считается ссылкой
    pub url_schemes: Vec<String>,
}

impl Default for LinkSettings {
    fn default() -> Self {
        Self {
            url_schemes: vec!["http".to_string(), "https".to_string()],
        }
    }
}

/// Default settings embedded in the binary
pub const DEFAULT_SETTINGS: &str = r#"
[search]
debounce_ms = 300
min_chars = 1
max_suggestions = 20

[links]
url_schemes = ["http", "https"]
"#;

/// Load settings from a TOML document.
///
/// Missing sections and keys take their defaults; `None` uses the embedded document.
pub fn load_settings(source: Option<&str>) -> anyhow::Result<MenuSettings> {
    let settings: MenuSettings = toml::from_str(source.unwrap_or(DEFAULT_SETTINGS))?;
    if settings.links.url_schemes.is_empty() {
        anyhow::bail!("links.url_schemes must not be empty");
    }
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_load() {
        let settings = load_settings(None).unwrap();
        assert_eq!(settings, MenuSettings::default());
    }

    #[test]
    fn test_partial_override() {
        let settings = load_settings(Some("[search]\ndebounce_ms = 150\n")).unwrap();
        assert_eq!(settings.search.debounce_ms, 150);
        assert_eq!(settings.search.max_suggestions, 20);
        assert_eq!(settings.links, LinkSettings::default());
    }

    #[test]
    fn test_invalid_settings() {
        assert!(load_settings(Some("[links]\nurl_schemes = []\n")).is_err());
        assert!(load_settings(Some("[search]\ndebounce_ms = \"soon\"\n")).is_err());
    }
}

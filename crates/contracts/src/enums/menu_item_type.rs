use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Тип цели, на которую ссылается пункт меню
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuItemType {
    Category,
    Collection,
    Link,
    Page,
}

/// Строка не является кодом типа пункта меню
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown menu item type `{0}`")]
pub struct UnknownMenuItemType(pub String);

impl MenuItemType {
    /// Код типа, используемый в ключах выбора
    pub fn code(&self) -> &'static str {
        match self {
            MenuItemType::Category => "category",
            MenuItemType::Collection => "collection",
            MenuItemType::Link => "link",
            MenuItemType::Page => "page",
        }
    }

    /// Получить человекочитаемое название
    pub fn display_name(&self) -> &'static str {
        match self {
            MenuItemType::Category => "Категория",
            MenuItemType::Collection => "Коллекция",
            MenuItemType::Link => "Ссылка",
            MenuItemType::Page => "Страница",
        }
    }

    pub fn all() -> Vec<MenuItemType> {
        vec![
            MenuItemType::Category,
            MenuItemType::Collection,
            MenuItemType::Link,
            MenuItemType::Page,
        ]
    }

    /// Парсинг из кода; регистр значим
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "category" => Some(MenuItemType::Category),
            "collection" => Some(MenuItemType::Collection),
            "link" => Some(MenuItemType::Link),
            "page" => Some(MenuItemType::Page),
            _ => None,
        }
    }
}

impl fmt::Display for MenuItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for MenuItemType {
    type Err = UnknownMenuItemType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| UnknownMenuItemType(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_roundtrip() {
        for t in MenuItemType::all() {
            assert_eq!(MenuItemType::from_code(t.code()), Some(t));
            assert_eq!(t.to_string(), t.code());
        }
    }

    #[test]
    fn test_unknown_code_is_rejected() {
        assert_eq!(
            "product".parse::<MenuItemType>(),
            Err(UnknownMenuItemType("product".to_string()))
        );
        assert!("Category".parse::<MenuItemType>().is_err());
        assert!("".parse::<MenuItemType>().is_err());
    }

    #[test]
    fn test_serde_uses_lowercase_codes() {
        let json = serde_json::to_string(&MenuItemType::Collection).unwrap();
        assert_eq!(json, "\"collection\"");
        let parsed: MenuItemType = serde_json::from_str("\"page\"").unwrap();
        assert_eq!(parsed, MenuItemType::Page);
    }
}

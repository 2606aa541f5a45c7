use crate::enums::menu_item_type::MenuItemType;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Разделитель типа и идентификатора в ключе выбора (`"<type>:<id>"`)
pub const SELECTION_SEPARATOR: char = ':';

/// Ошибки разбора и разрешения ключа выбора
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("selection key `{0}` has no type separator")]
    MissingSeparator(String),

    #[error("selection key `{key}` has unknown type `{type_code}`")]
    UnknownType { key: String, type_code: String },

    #[error("selection key `{0}` has an empty id")]
    EmptyId(String),

    #[error("selection key `{0}` is not present in the current options")]
    NotInTree(String),
}

/// Ссылка пункта меню на цель: категорию, коллекцию, страницу или URL
///
/// Для `Link` в `id` лежит сам URL.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MenuItemData {
    pub id: String,
    #[serde(rename = "type")]
    pub item_type: MenuItemType,
}

impl MenuItemData {
    pub fn new(item_type: MenuItemType, id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            item_type,
        }
    }

    pub fn link(url: impl Into<String>) -> Self {
        Self::new(MenuItemType::Link, url)
    }

    /// Ключ выбора для автокомплита
    pub fn selection_key(&self) -> String {
        format_selection_value(self.item_type, &self.id)
    }

    /// Есть ли у ссылки цель, которую можно сохранить
    pub fn has_target(&self) -> bool {
        !self.id.trim().is_empty()
    }
}

/// Данные формы диалога пункта меню
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItemDialogFormData {
    #[serde(flatten)]
    pub data: MenuItemData,
    /// Собственная подпись пункта меню, не зависит от названия цели
    pub name: String,
}

impl MenuItemDialogFormData {
    pub fn new(data: MenuItemData, name: impl Into<String>) -> Self {
        Self {
            data,
            name: name.into(),
        }
    }
}

impl Default for MenuItemDialogFormData {
    fn default() -> Self {
        Self {
            data: MenuItemData::new(MenuItemType::Category, ""),
            name: String::new(),
        }
    }
}

pub fn format_selection_value(item_type: MenuItemType, id: &str) -> String {
    format!("{}{}{}", item_type.code(), SELECTION_SEPARATOR, id)
}

/// Разбор ключа выбора `"<type>:<id>"`.
///
/// Делим только по первому `:`, всё остальное (включая `https://...`) идёт в `id`.
pub fn parse_selection_value(value: &str) -> Result<MenuItemData, SelectionError> {
    let (type_code, id) = value
        .split_once(SELECTION_SEPARATOR)
        .ok_or_else(|| SelectionError::MissingSeparator(value.to_string()))?;

    let item_type: MenuItemType = type_code.parse().map_err(|_| SelectionError::UnknownType {
        key: value.to_string(),
        type_code: type_code.to_string(),
    })?;

    if id.is_empty() && item_type != MenuItemType::Link {
        return Err(SelectionError::EmptyId(value.to_string()));
    }

    Ok(MenuItemData::new(item_type, id))
}

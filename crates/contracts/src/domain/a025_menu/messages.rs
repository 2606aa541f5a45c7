//! Тексты диалога пункта меню.
//!
//! Каталог передаётся в диалог явно, глобальной таблицы переводов нет.

use super::dialog_state::FormError;
use super::selection::SelectionError;

pub trait MenuMessages: Send + Sync {
    fn categories_group(&self) -> String;
    fn collections_group(&self) -> String;
    /// Подпись синтетического варианта со ссылкой
    fn link_option(&self, url: &str) -> String;
    fn dialog_title(&self, edit: bool) -> String;
    fn name_label(&self) -> String;
    fn link_label(&self) -> String;
    fn link_placeholder(&self) -> String;
    fn no_results(&self) -> String;
    fn loading(&self) -> String;
    fn submit(&self, edit: bool) -> String;
    fn cancel(&self) -> String;
    fn selection_error(&self, error: &SelectionError) -> String;
    fn form_error(&self, error: &FormError) -> String;
}

/// Русский каталог (язык дашборда по умолчанию)
#[derive(Debug, Clone, Copy, Default)]
pub struct RuMessages;

impl MenuMessages for RuMessages {
    fn categories_group(&self) -> String {
        "Категории".to_string()
    }

    fn collections_group(&self) -> String {
        "Коллекции".to_string()
    }

    fn link_option(&self, url: &str) -> String {
        format!("Ссылка на: {}", url)
    }

    fn dialog_title(&self, edit: bool) -> String {
        if edit {
            "Редактирование пункта меню".to_string()
        } else {
            "Новый пункт меню".to_string()
        }
    }

    fn name_label(&self) -> String {
        "Название".to_string()
    }

    fn link_label(&self) -> String {
        "Ссылка".to_string()
    }

    fn link_placeholder(&self) -> String {
        "Начните вводить название или URL".to_string()
    }

    fn no_results(&self) -> String {
        "Ничего не найдено".to_string()
    }

    fn loading(&self) -> String {
        "Загрузка...".to_string()
    }

    fn submit(&self, edit: bool) -> String {
        if edit {
            "Сохранить".to_string()
        } else {
            "Создать".to_string()
        }
    }

    fn cancel(&self) -> String {
        "Отмена".to_string()
    }

    fn selection_error(&self, error: &SelectionError) -> String {
        match error {
            SelectionError::MissingSeparator(key) => format!("Некорректный ключ выбора: {}", key),
            SelectionError::UnknownType { type_code, .. } => {
                format!("Неизвестный тип пункта меню: {}", type_code)
            }
            SelectionError::EmptyId(key) => format!("Не указан идентификатор: {}", key),
            SelectionError::NotInTree(_) => {
                "Выбранный вариант больше недоступен, повторите поиск".to_string()
            }
        }
    }

    fn form_error(&self, error: &FormError) -> String {
        match error {
            FormError::EmptyName => "Название обязательно для заполнения".to_string(),
            FormError::NoTarget => "Выберите категорию, коллекцию или введите ссылку".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct EnMessages;

impl MenuMessages for EnMessages {
    fn categories_group(&self) -> String {
        "Categories".to_string()
    }

    fn collections_group(&self) -> String {
        "Collections".to_string()
    }

    fn link_option(&self, url: &str) -> String {
        format!("Link to: {}", url)
    }

    fn dialog_title(&self, edit: bool) -> String {
        if edit {
            "Edit Item".to_string()
        } else {
            "Add Item".to_string()
        }
    }

    fn name_label(&self) -> String {
        "Name".to_string()
    }

    fn link_label(&self) -> String {
        "Link".to_string()
    }

    fn link_placeholder(&self) -> String {
        "Start typing to begin search...".to_string()
    }

    fn no_results(&self) -> String {
        "No results found".to_string()
    }

    fn loading(&self) -> String {
        "Loading...".to_string()
    }

    fn submit(&self, edit: bool) -> String {
        if edit {
            "Save".to_string()
        } else {
            "Create".to_string()
        }
    }

    fn cancel(&self) -> String {
        "Cancel".to_string()
    }

    fn selection_error(&self, error: &SelectionError) -> String {
        match error {
            SelectionError::NotInTree(_) => {
                "Selected option is no longer available, search again".to_string()
            }
            other => other.to_string(),
        }
    }

    fn form_error(&self, error: &FormError) -> String {
        match error {
            FormError::EmptyName => "Name is required".to_string(),
            FormError::NoTarget => "Select a category, a collection or enter a link".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_option_contains_url() {
        let url = "https://example.com";
        assert!(RuMessages.link_option(url).ends_with(url));
        assert_eq!(EnMessages.link_option(url), "Link to: https://example.com");
    }

    #[test]
    fn test_catalogues_are_object_safe() {
        let catalogues: [&dyn MenuMessages; 2] = [&RuMessages, &EnMessages];
        for m in catalogues {
            assert!(!m.categories_group().is_empty());
            assert_ne!(m.dialog_title(true), m.dialog_title(false));
        }
    }
}

use super::messages::MenuMessages;
use super::option_tree::{build_option_tree, resolve_selection, SearchCandidate, SelectMenuItem};
use super::selection::{MenuItemDialogFormData, SelectionError};
use crate::shared::menu_settings::LinkSettings;
use crate::shared::url_utils::is_url;
use thiserror::Error;

/// Ошибки проверки формы перед отправкой
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("menu item name is empty")]
    EmptyName,

    #[error("menu item has no target")]
    NoTarget,
}

/// Видимое состояние диалога
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogPhase {
    /// Цель не выбрана, запрос пуст
    Empty,
    /// Пользователь вводит запрос и ждёт результатов поиска
    Typing,
    /// id, type и подпись согласованы
    Selected,
}

/// Состояние диалога пункта меню.
///
/// Выбор варианта меняет `id`, `type` и подпись одним переходом, промежуточное
/// состояние снаружи не видно.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItemDialogState {
    pub form: MenuItemDialogFormData,
    /// Подпись выбранной цели, может быть пустой
    pub display_value: String,
    /// Последний запрос, распознанный как URL
    pub detected_url: Option<String>,
    pub query: String,
    pub error: Option<SelectionError>,
    url_schemes: Vec<String>,
}

impl MenuItemDialogState {
    pub fn new(links: &LinkSettings) -> Self {
        Self {
            form: MenuItemDialogFormData::default(),
            display_value: String::new(),
            detected_url: None,
            query: String::new(),
            error: None,
            url_schemes: links.url_schemes.clone(),
        }
    }

    /// Сбросить форму к внешнему начальному значению (открытие диалога
    /// или смена начальной подписи)
    pub fn reset(
        &mut self,
        initial: MenuItemDialogFormData,
        initial_display_value: impl Into<String>,
    ) {
        self.form = initial;
        self.display_value = initial_display_value.into();
        self.detected_url = None;
        self.query.clear();
        self.error = None;
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.form.name = name.into();
    }

    /// Обработать ввод в поле поиска.
    ///
    /// Возвращает сырой запрос для внешнего поиска, даже если это URL.
    pub fn on_query_change(&mut self, query: &str) -> String {
        self.query = query.to_string();
        let detected = is_url(query, &self.url_schemes).then(|| query.to_string());
        if detected != self.detected_url {
            match &detected {
                Some(url) => log::debug!("menu item dialog: query recognized as url {}", url),
                None => log::debug!("menu item dialog: url cleared"),
            }
        }
        self.detected_url = detected;
        query.to_string()
    }

    /// Дерево вариантов для текущих кандидатов
    pub fn options(
        &self,
        categories: &[SearchCandidate],
        collections: &[SearchCandidate],
        messages: &dyn MenuMessages,
    ) -> Vec<SelectMenuItem> {
        build_option_tree(categories, collections, self.detected_url.as_deref(), messages)
    }

    /// Применить выбор листа.
    ///
    /// `tree` должно быть построено из тех же кандидатов, что и показанный вариант.
    /// При ошибке форма не меняется, ошибка сохраняется для показа.
    pub fn select(&mut self, value: &str, tree: &[SelectMenuItem]) -> Result<(), SelectionError> {
        match resolve_selection(tree, value) {
            Ok((data, label)) => {
                log::debug!("menu item dialog: selected {} ({})", value, label);
                self.form.data = data;
                self.display_value = label;
                self.query.clear();
                self.detected_url = None;
                self.error = None;
                Ok(())
            }
            Err(e) => {
                log::warn!("menu item dialog: rejected selection: {}", e);
                self.error = Some(e.clone());
                Err(e)
            }
        }
    }

    pub fn phase(&self) -> DialogPhase {
        if self.form.data.has_target() && !self.display_value.is_empty() && self.query.is_empty() {
            DialogPhase::Selected
        } else if !self.query.trim().is_empty() {
            DialogPhase::Typing
        } else {
            DialogPhase::Empty
        }
    }

    pub fn validate(&self) -> Result<(), FormError> {
        if self.form.name.trim().is_empty() {
            return Err(FormError::EmptyName);
        }
        if !self.form.data.has_target() {
            return Err(FormError::NoTarget);
        }
        Ok(())
    }

    pub fn can_submit(&self) -> bool {
        self.validate().is_ok()
    }

    /// Данные для внешнего обработчика отправки
    pub fn submit(&self) -> Result<MenuItemDialogFormData, FormError> {
        self.validate()?;
        let mut data = self.form.clone();
        data.name = data.name.trim().to_string();
        Ok(data)
    }
}

impl Default for MenuItemDialogState {
    fn default() -> Self {
        Self::new(&LinkSettings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a025_menu::messages::EnMessages;
    use crate::domain::a025_menu::selection::MenuItemData;
    use crate::enums::menu_item_type::MenuItemType;

    fn categories() -> Vec<SearchCandidate> {
        vec![SearchCandidate::new("7", "Accessories")]
    }

    fn collections() -> Vec<SearchCandidate> {
        vec![SearchCandidate::new("42", "Summer Picks")]
    }

    #[test]
    fn test_initial_phase_is_empty() {
        let state = MenuItemDialogState::default();
        assert_eq!(state.phase(), DialogPhase::Empty);
        assert_eq!(state.validate(), Err(FormError::EmptyName));
    }

    #[test]
    fn test_query_change_detects_and_clears_url() {
        let mut state = MenuItemDialogState::default();

        assert_eq!(state.on_query_change("https://example.com"), "https://example.com");
        assert_eq!(state.detected_url.as_deref(), Some("https://example.com"));
        assert_eq!(state.phase(), DialogPhase::Typing);

        let tree = state.options(&categories(), &collections(), &EnMessages);
        assert_eq!(tree.len(), 1);
        assert_eq!(tree[0].value(), Some("link:https://example.com"));

        assert_eq!(state.on_query_change("https://"), "https://");
        assert_eq!(state.detected_url, None);
        assert_eq!(state.options(&categories(), &collections(), &EnMessages).len(), 2);
    }

    #[test]
    fn test_select_collection_updates_form_and_label() {
        let mut state = MenuItemDialogState::default();
        state.set_name("Лето");
        state.on_query_change("sum");
        let tree = state.options(&categories(), &collections(), &EnMessages);

        state.select("collection:42", &tree).unwrap();

        assert_eq!(state.form.data, MenuItemData::new(MenuItemType::Collection, "42"));
        assert_eq!(state.display_value, "Summer Picks");
        assert_eq!(state.phase(), DialogPhase::Selected);
        assert_eq!(
            state.submit(),
            Ok(MenuItemDialogFormData::new(
                MenuItemData::new(MenuItemType::Collection, "42"),
                "Лето"
            ))
        );
    }

    #[test]
    fn test_select_link_uses_url_as_label() {
        let mut state = MenuItemDialogState::default();
        state.set_name("Blog");
        state.on_query_change("https://blog.example.com/a:b");
        let tree = state.options(&categories(), &collections(), &EnMessages);

        state.select("link:https://blog.example.com/a:b", &tree).unwrap();

        assert_eq!(state.form.data, MenuItemData::link("https://blog.example.com/a:b"));
        assert_eq!(state.display_value, "https://blog.example.com/a:b");
        assert_eq!(state.detected_url, None);
        assert!(state.can_submit());
    }

    #[test]
    fn test_failed_select_keeps_previous_selection() {
        let mut state = MenuItemDialogState::default();
        let tree = state.options(&categories(), &collections(), &EnMessages);
        state.select("category:7", &tree).unwrap();

        let err = state.select("collection:99", &tree).unwrap_err();
        assert_eq!(err, SelectionError::NotInTree("collection:99".to_string()));
        assert_eq!(state.error, Some(err));
        assert_eq!(state.form.data, MenuItemData::new(MenuItemType::Category, "7"));
        assert_eq!(state.display_value, "Accessories");

        assert!(state.select("widget:1", &tree).is_err());
        assert_eq!(state.form.data.item_type, MenuItemType::Category);
    }

    #[test]
    fn test_reset_restores_external_initial_value() {
        let mut state = MenuItemDialogState::default();
        state.on_query_change("https://example.com");
        let _ = state.select("bad", &[]);

        let initial =
            MenuItemDialogFormData::new(MenuItemData::new(MenuItemType::Page, "p1"), "О нас");
        state.reset(initial.clone(), "About us");

        assert_eq!(state.form, initial);
        assert_eq!(state.display_value, "About us");
        assert_eq!(state.detected_url, None);
        assert_eq!(state.error, None);
        assert!(state.query.is_empty());
        assert_eq!(state.phase(), DialogPhase::Selected);
    }

    #[test]
    fn test_submit_requires_target_and_trims_name() {
        let mut state = MenuItemDialogState::default();
        state.set_name("  Акции  ");
        assert_eq!(state.submit(), Err(FormError::NoTarget));

        let tree = state.options(&categories(), &[], &EnMessages);
        state.select("category:7", &tree).unwrap();
        assert_eq!(state.submit().unwrap().name, "Акции");
    }
}

//! Источник данных экрана меню.
//!
//! Вместо HTTP API здесь демонстрационные данные из `contracts`, но
//! сигнатуры такие же, как у остальных моделей дашборда.

use contracts::domain::a025_menu::fixtures;
use contracts::domain::a025_menu::{
    MenuItem, MenuItemId, MenuItemInput, MenuItemTarget, SearchCandidate,
};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchResults {
    pub categories: Vec<SearchCandidate>,
    pub collections: Vec<SearchCandidate>,
}

pub async fn search_targets(
    query: String,
    min_chars: usize,
    limit: usize,
) -> Result<SearchResults, String> {
    let categories = fixtures::categories();
    let collections = fixtures::collections();
    Ok(SearchResults {
        categories: fixtures::search_candidates(&categories, &query, min_chars, limit),
        collections: fixtures::search_candidates(&collections, &query, min_chars, limit),
    })
}

/// Сохранить пункт меню: разрешить цель по идентификатору и вернуть готовый пункт
pub async fn save_menu_item(id: MenuItemId, input: MenuItemInput) -> Result<MenuItem, String> {
    let payload = serde_json::to_string(&input).map_err(|e| format!("{e}"))?;
    log::info!("save menu item {}: {}", id.as_str(), payload);

    let target = resolve_target(&input)?;
    Ok(MenuItem::new(id, input.name.trim(), target))
}

fn resolve_target(input: &MenuItemInput) -> Result<MenuItemTarget, String> {
    if let Some(id) = &input.category {
        let found = fixtures::find_candidate(&fixtures::categories(), id)
            .ok_or_else(|| format!("Категория {} не найдена", id))?;
        return Ok(MenuItemTarget::Category { id: found.id, name: found.name });
    }
    if let Some(id) = &input.collection {
        let found = fixtures::find_candidate(&fixtures::collections(), id)
            .ok_or_else(|| format!("Коллекция {} не найдена", id))?;
        return Ok(MenuItemTarget::Collection { id: found.id, name: found.name });
    }
    if let Some(id) = &input.page {
        let (id, title) = fixtures::pages()
            .into_iter()
            .find(|(page_id, _)| page_id == id)
            .ok_or_else(|| format!("Страница {} не найдена", id))?;
        return Ok(MenuItemTarget::Page { id, title });
    }
    match &input.url {
        Some(url) if !url.trim().is_empty() => Ok(MenuItemTarget::Url { url: url.clone() }),
        _ => Err("Не указана цель пункта меню".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_target() {
        let input = MenuItemInput {
            name: "Аксессуары".into(),
            category: Some("7".into()),
            ..Default::default()
        };
        assert_eq!(
            resolve_target(&input),
            Ok(MenuItemTarget::Category { id: "7".into(), name: "Accessories".into() })
        );

        let input = MenuItemInput {
            name: "Блог".into(),
            url: Some("https://blog.example.com".into()),
            ..Default::default()
        };
        assert_eq!(
            resolve_target(&input),
            Ok(MenuItemTarget::Url { url: "https://blog.example.com".into() })
        );
    }

    #[test]
    fn test_resolve_target_errors() {
        let missing = MenuItemInput {
            collection: Some("999".into()),
            ..Default::default()
        };
        assert!(resolve_target(&missing).is_err());
        assert!(resolve_target(&MenuItemInput::default()).is_err());
    }
}

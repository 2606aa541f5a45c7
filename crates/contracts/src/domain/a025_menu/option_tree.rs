use super::messages::MenuMessages;
use super::selection::{
    format_selection_value, parse_selection_value, MenuItemData, SelectionError,
};
use crate::enums::menu_item_type::MenuItemType;
use serde::{Deserialize, Serialize};

/// Кандидат поиска: категория или коллекция, пришедшая извне
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchCandidate {
    pub id: String,
    pub name: String,
}

impl SearchCandidate {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Узел дерева вариантов автокомплита: группа или лист с ключом выбора.
///
/// Глубина ровно два уровня (группа -> лист).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SelectMenuItem {
    Group {
        label: String,
        children: Vec<SelectMenuItem>,
    },
    Leaf {
        label: String,
        value: String,
    },
}

impl SelectMenuItem {
    pub fn group(label: impl Into<String>, children: Vec<SelectMenuItem>) -> Self {
        SelectMenuItem::Group {
            label: label.into(),
            children,
        }
    }

    pub fn leaf(label: impl Into<String>, value: impl Into<String>) -> Self {
        SelectMenuItem::Leaf {
            label: label.into(),
            value: value.into(),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            SelectMenuItem::Group { label, .. } | SelectMenuItem::Leaf { label, .. } => label,
        }
    }

    /// Ключ выбора; у группы его нет
    pub fn value(&self) -> Option<&str> {
        match self {
            SelectMenuItem::Group { .. } => None,
            SelectMenuItem::Leaf { value, .. } => Some(value),
        }
    }

    pub fn children(&self) -> &[SelectMenuItem] {
        match self {
            SelectMenuItem::Group { children, .. } => children,
            SelectMenuItem::Leaf { .. } => &[],
        }
    }
}

fn candidate_group(
    label: String,
    item_type: MenuItemType,
    candidates: &[SearchCandidate],
) -> SelectMenuItem {
    let children = candidates
        .iter()
        .map(|c| SelectMenuItem::leaf(c.name.clone(), format_selection_value(item_type, &c.id)))
        .collect();
    SelectMenuItem::group(label, children)
}

/// Собрать дерево вариантов для текущего рендера.
///
/// Найденный в запросе URL вытесняет все категории и коллекции.
pub fn build_option_tree(
    categories: &[SearchCandidate],
    collections: &[SearchCandidate],
    detected_url: Option<&str>,
    messages: &dyn MenuMessages,
) -> Vec<SelectMenuItem> {
    if let Some(url) = detected_url {
        return vec![SelectMenuItem::leaf(
            messages.link_option(url),
            format_selection_value(MenuItemType::Link, url),
        )];
    }

    let mut tree = Vec::with_capacity(2);
    if !categories.is_empty() {
        tree.push(candidate_group(
            messages.categories_group(),
            MenuItemType::Category,
            categories,
        ));
    }
    if !collections.is_empty() {
        tree.push(candidate_group(
            messages.collections_group(),
            MenuItemType::Collection,
            collections,
        ));
    }
    tree
}

/// Поиск листа по ключу выбора: в глубину, в порядке массива, первое совпадение
pub fn find_entry_by_value<'a>(
    tree: &'a [SelectMenuItem],
    value: &str,
) -> Option<&'a SelectMenuItem> {
    tree.iter().find_map(|node| match node {
        SelectMenuItem::Group { children, .. } => find_entry_by_value(children, value),
        SelectMenuItem::Leaf { value: v, .. } if v == value => Some(node),
        SelectMenuItem::Leaf { .. } => None,
    })
}

/// Разобрать ключ и найти для него подпись.
///
/// Для ссылки подписью служит сам URL, дерево не просматривается.
pub fn resolve_selection(
    tree: &[SelectMenuItem],
    value: &str,
) -> Result<(MenuItemData, String), SelectionError> {
    let data = parse_selection_value(value)?;
    if data.item_type == MenuItemType::Link {
        let label = data.id.clone();
        return Ok((data, label));
    }

    let entry = find_entry_by_value(tree, value)
        .ok_or_else(|| SelectionError::NotInTree(value.to_string()))?;
    Ok((data, entry.label().to_string()))
}

pub fn resolve_display_value(
    tree: &[SelectMenuItem],
    value: &str,
) -> Result<String, SelectionError> {
    resolve_selection(tree, value).map(|(_, label)| label)
}

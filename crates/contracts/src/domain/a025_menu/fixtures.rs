//! Демонстрационные данные модуля меню.
//!
//! Используются фронтендом вместо удалённого поиска и в тестах.

use super::aggregate::{Menu, MenuId, MenuItem, MenuItemId, MenuItemTarget};
use super::option_tree::SearchCandidate;

pub fn categories() -> Vec<SearchCandidate> {
    [
        ("7", "Accessories"),
        ("8", "Apparel"),
        ("9", "Belts"),
        ("10", "Groceries"),
        ("11", "Juices"),
        ("12", "Sweaters"),
        ("13", "Homewares"),
    ]
    .into_iter()
    .map(|(id, name)| SearchCandidate::new(id, name))
    .collect()
}

pub fn collections() -> Vec<SearchCandidate> {
    [
        ("42", "Summer Picks"),
        ("43", "Featured Products"),
        ("44", "Winter Sale"),
        ("45", "Accessories Under $20"),
    ]
    .into_iter()
    .map(|(id, name)| SearchCandidate::new(id, name))
    .collect()
}

/// Страницы: (id, заголовок)
pub fn pages() -> Vec<(String, String)> {
    [("p1", "About"), ("p2", "Shipping & Returns"), ("p3", "Contact")]
        .into_iter()
        .map(|(id, title)| (id.to_string(), title.to_string()))
        .collect()
}

fn category(id: &str) -> MenuItemTarget {
    let name = find_candidate(&categories(), id).map(|c| c.name).unwrap_or_default();
    MenuItemTarget::Category { id: id.to_string(), name }
}

fn collection(id: &str) -> MenuItemTarget {
    let name = find_candidate(&collections(), id).map(|c| c.name).unwrap_or_default();
    MenuItemTarget::Collection { id: id.to_string(), name }
}

fn page(id: &str) -> MenuItemTarget {
    let title = pages()
        .into_iter()
        .find(|(page_id, _)| page_id == id)
        .map(|(_, title)| title)
        .unwrap_or_default();
    MenuItemTarget::Page { id: id.to_string(), title }
}

fn url(url: &str) -> MenuItemTarget {
    MenuItemTarget::Url { url: url.to_string() }
}

fn item(id: &str, name: &str, target: MenuItemTarget) -> MenuItem {
    MenuItem::new(MenuItemId::new(id), name, target)
}

pub fn menus() -> Vec<Menu> {
    vec![
        Menu::new(
            MenuId::new("navbar"),
            "navbar",
            vec![
                item("navbar-1", "Accessories", category("7")).with_children(vec![
                    item("navbar-1-1", "Belts", category("9")),
                    item("navbar-1-2", "Under $20", collection("45")),
                ]),
                item("navbar-2", "Apparel", category("8")).with_children(vec![item(
                    "navbar-2-1",
                    "Sweaters",
                    category("12"),
                )]),
                item("navbar-3", "Groceries", category("10")),
                item("navbar-4", "Summer Picks", collection("42")),
            ],
        ),
        Menu::new(
            MenuId::new("footer"),
            "footer",
            vec![
                item("footer-1", "Company", page("p1")).with_children(vec![
                    item("footer-1-1", "Shipping", page("p2")),
                    item("footer-1-2", "Contact us", page("p3")),
                ]),
                item("footer-2", "Blog", url("https://blog.example.com/")),
                item(
                    "footer-3",
                    "Docs",
                    url("https://docs.example.com/guides?topic=menus#navigation"),
                ),
            ],
        ),
    ]
}

pub fn find_candidate(list: &[SearchCandidate], id: &str) -> Option<SearchCandidate> {
    list.iter().find(|c| c.id == id).cloned()
}

/// Поиск по названию без учёта регистра.
///
/// Запрос короче `min_chars` не фильтрует список.
pub fn search_candidates(
    list: &[SearchCandidate],
    query: &str,
    min_chars: usize,
    limit: usize,
) -> Vec<SearchCandidate> {
    let query = query.trim().to_lowercase();
    list.iter()
        .filter(|c| query.chars().count() < min_chars || c.name.to_lowercase().contains(&query))
        .take(limit)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a025_menu::messages::RuMessages;
    use crate::domain::a025_menu::option_tree::{build_option_tree, resolve_display_value};
    use crate::enums::menu_item_type::MenuItemType;

    fn walk<'a>(items: &'a [MenuItem], out: &mut Vec<&'a MenuItem>) {
        for i in items {
            out.push(i);
            walk(&i.children, out);
        }
    }

    #[test]
    fn test_fixture_items_resolve_in_full_tree() {
        let tree = build_option_tree(&categories(), &collections(), None, &RuMessages);
        for menu in menus() {
            let mut all = Vec::new();
            walk(&menu.items, &mut all);
            assert_eq!(all.len(), menu.items_count());
            for item in all {
                match item.target.item_type() {
                    MenuItemType::Page => assert!(!item.initial_display_value().is_empty()),
                    _ => assert_eq!(
                        resolve_display_value(&tree, &item.selection_key()),
                        Ok(item.initial_display_value()),
                        "{}",
                        item.id.as_str()
                    ),
                }
            }
        }
    }

    #[test]
    fn test_fixture_ids_are_unique() {
        let mut ids = Vec::new();
        for menu in menus() {
            let mut all = Vec::new();
            walk(&menu.items, &mut all);
            ids.extend(all.into_iter().map(|i| i.id.clone()));
        }
        let total = ids.len();
        ids.sort_by(|a, b| a.0.cmp(&b.0));
        ids.dedup();
        assert_eq!(ids.len(), total);
    }

    #[test]
    fn test_search_candidates() {
        let found = search_candidates(&categories(), "ACC", 1, 20);
        assert_eq!(found, vec![SearchCandidate::new("7", "Accessories")]);

        let found = search_candidates(&collections(), "acc", 1, 20);
        assert_eq!(found.len(), 1);

        assert_eq!(search_candidates(&categories(), "", 1, 3).len(), 3);
        assert_eq!(search_candidates(&categories(), "a", 2, 100).len(), categories().len());
        assert!(search_candidates(&categories(), "zzz", 1, 20).is_empty());
    }
}

use super::selection::{MenuItemData, MenuItemDialogFormData};
use crate::enums::menu_item_type::MenuItemType;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Types
// ============================================================================

/// Идентификатор меню навигации
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MenuId(pub String);

impl MenuId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Идентификатор пункта меню
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MenuItemId(pub String);

impl MenuItemId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// ============================================================================
// Menu item
// ============================================================================

/// Цель пункта меню вместе с её названием
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum MenuItemTarget {
    Category { id: String, name: String },
    Collection { id: String, name: String },
    Page { id: String, title: String },
    Url { url: String },
}

impl MenuItemTarget {
    pub fn item_type(&self) -> MenuItemType {
        match self {
            MenuItemTarget::Category { .. } => MenuItemType::Category,
            MenuItemTarget::Collection { .. } => MenuItemType::Collection,
            MenuItemTarget::Page { .. } => MenuItemType::Page,
            MenuItemTarget::Url { .. } => MenuItemType::Link,
        }
    }

    pub fn data(&self) -> MenuItemData {
        match self {
            MenuItemTarget::Category { id, .. }
            | MenuItemTarget::Collection { id, .. }
            | MenuItemTarget::Page { id, .. } => MenuItemData::new(self.item_type(), id.clone()),
            MenuItemTarget::Url { url } => MenuItemData::link(url.clone()),
        }
    }

    /// Название цели для поля выбора
    pub fn display_value(&self) -> &str {
        match self {
            MenuItemTarget::Category { name, .. } | MenuItemTarget::Collection { name, .. } => name,
            MenuItemTarget::Page { title, .. } => title,
            MenuItemTarget::Url { url } => url,
        }
    }
}

/// Пункт меню навигации
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: MenuItemId,
    pub name: String,
    pub target: MenuItemTarget,
    #[serde(default)]
    pub children: Vec<MenuItem>,
}

impl MenuItem {
    pub fn new(id: MenuItemId, name: impl Into<String>, target: MenuItemTarget) -> Self {
        Self {
            id,
            name: name.into(),
            target,
            children: Vec::new(),
        }
    }

    pub fn with_children(mut self, children: Vec<MenuItem>) -> Self {
        self.children = children;
        self
    }

    /// Начальные данные диалога редактирования
    pub fn dialog_initial(&self) -> MenuItemDialogFormData {
        MenuItemDialogFormData::new(self.target.data(), self.name.clone())
    }

    /// Начальная подпись поля выбора в диалоге редактирования
    pub fn initial_display_value(&self) -> String {
        self.target.display_value().to_string()
    }

    pub fn selection_key(&self) -> String {
        self.target.data().selection_key()
    }

    fn count(&self) -> usize {
        1 + self.children.iter().map(MenuItem::count).sum::<usize>()
    }
}

/// Данные для создания или изменения пункта меню.
///
/// Заполнено ровно одно из полей цели.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MenuItemInput {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl MenuItemInput {
    pub fn from_form(form: &MenuItemDialogFormData) -> Self {
        let mut input = MenuItemInput {
            name: form.name.clone(),
            ..Default::default()
        };
        let id = Some(form.data.id.clone());
        match form.data.item_type {
            MenuItemType::Category => input.category = id,
            MenuItemType::Collection => input.collection = id,
            MenuItemType::Page => input.page = id,
            MenuItemType::Link => input.url = id,
        }
        input
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Меню навигации сайта
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Menu {
    pub id: MenuId,
    pub name: String,
    #[serde(default)]
    pub items: Vec<MenuItem>,
}

impl Menu {
    pub fn new(id: MenuId, name: impl Into<String>, items: Vec<MenuItem>) -> Self {
        Self {
            id,
            name: name.into(),
            items,
        }
    }

    /// Количество пунктов с учётом вложенных
    pub fn items_count(&self) -> usize {
        self.items.iter().map(MenuItem::count).sum()
    }

    pub fn find_item(&self, id: &MenuItemId) -> Option<&MenuItem> {
        fn find<'a>(items: &'a [MenuItem], id: &MenuItemId) -> Option<&'a MenuItem> {
            items
                .iter()
                .find_map(|item| if &item.id == id { Some(item) } else { find(&item.children, id) })
        }
        find(&self.items, id)
    }

    fn find_item_mut(&mut self, id: &MenuItemId) -> Option<&mut MenuItem> {
        fn find<'a>(items: &'a mut [MenuItem], id: &MenuItemId) -> Option<&'a mut MenuItem> {
            for item in items.iter_mut() {
                if &item.id == id {
                    return Some(item);
                }
                if let Some(found) = find(&mut item.children, id) {
                    return Some(found);
                }
            }
            None
        }
        find(&mut self.items, id)
    }

    /// Заменить название и цель существующего пункта (дочерние сохраняются)
    /// или добавить новый пункт в конец верхнего уровня
    pub fn upsert_item(&mut self, item: MenuItem) {
        if let Some(existing) = self.find_item_mut(&item.id) {
            existing.name = item.name;
            existing.target = item.target;
        } else {
            self.items.push(item);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category_item() -> MenuItem {
        MenuItem::new(
            MenuItemId::new("i1"),
            "Аксессуары",
            MenuItemTarget::Category {
                id: "7".into(),
                name: "Accessories".into(),
            },
        )
    }

    #[test]
    fn test_dialog_initial_per_target() {
        let item = category_item();
        assert_eq!(
            item.dialog_initial(),
            MenuItemDialogFormData::new(
                MenuItemData::new(MenuItemType::Category, "7"),
                "Аксессуары",
            )
        );
        assert_eq!(item.initial_display_value(), "Accessories");

        let link = MenuItem::new(
            MenuItemId::new("i2"),
            "Блог",
            MenuItemTarget::Url {
                url: "https://blog.example.com".into(),
            },
        );
        assert_eq!(link.dialog_initial().data, MenuItemData::link("https://blog.example.com"));
        assert_eq!(link.initial_display_value(), "https://blog.example.com");
        assert_eq!(link.selection_key(), "link:https://blog.example.com");

        let page = MenuItem::new(
            MenuItemId::new("i3"),
            "О нас",
            MenuItemTarget::Page {
                id: "p1".into(),
                title: "About".into(),
            },
        );
        assert_eq!(page.dialog_initial().data.item_type, MenuItemType::Page);
        assert_eq!(page.initial_display_value(), "About");
    }

    #[test]
    fn test_input_sets_exactly_one_target() {
        let form =
            MenuItemDialogFormData::new(MenuItemData::new(MenuItemType::Collection, "42"), "Лето");
        assert_eq!(
            MenuItemInput::from_form(&form),
            MenuItemInput {
                name: "Лето".into(),
                collection: Some("42".into()),
                ..Default::default()
            }
        );

        let link = MenuItemDialogFormData::new(MenuItemData::link("https://a.b"), "A");
        let json = serde_json::to_value(MenuItemInput::from_form(&link)).unwrap();
        assert_eq!(json, serde_json::json!({ "name": "A", "url": "https://a.b" }));
    }

    #[test]
    fn test_items_count_and_find_nested() {
        let child = MenuItem::new(
            MenuItemId::new("c1"),
            "Ремни",
            MenuItemTarget::Category {
                id: "9".into(),
                name: "Belts".into(),
            },
        );
        let menu = Menu::new(
            MenuId::new("m"),
            "navbar",
            vec![category_item().with_children(vec![child.clone()])],
        );
        assert_eq!(menu.items_count(), 2);
        assert_eq!(menu.find_item(&MenuItemId::new("c1")), Some(&child));
        assert!(menu.find_item(&MenuItemId::new("zz")).is_none());
    }

    #[test]
    fn test_upsert_replaces_and_keeps_children() {
        let child = MenuItem::new(
            MenuItemId::new("c1"),
            "Ремни",
            MenuItemTarget::Url {
                url: "https://x.y".into(),
            },
        );
        let mut menu = Menu::new(
            MenuId::new("m"),
            "navbar",
            vec![category_item().with_children(vec![child])],
        );

        let edited = MenuItem::new(
            MenuItemId::new("i1"),
            "Летние товары",
            MenuItemTarget::Collection {
                id: "42".into(),
                name: "Summer Picks".into(),
            },
        );
        menu.upsert_item(edited);
        assert_eq!(menu.items.len(), 1);
        assert_eq!(menu.items[0].name, "Летние товары");
        assert_eq!(menu.items[0].target.item_type(), MenuItemType::Collection);
        assert_eq!(menu.items[0].children.len(), 1);

        menu.upsert_item(MenuItem::new(
            MenuItemId::new_v4(),
            "Новый",
            MenuItemTarget::Url { url: "https://new.example.com".into() },
        ));
        assert_eq!(menu.items.len(), 2);
        assert_eq!(menu.items_count(), 3);
    }
}

pub mod state;

use self::state::create_state;
use crate::shared::icons::icon;
use crate::shared::list_utils::{get_sort_class, get_sort_indicator, sort_list, Sortable};
use contracts::domain::a025_menu::{Menu, MenuId};
use leptos::prelude::*;
use std::cmp::Ordering;

#[derive(Clone, Debug, PartialEq)]
pub struct MenuRow {
    pub id: MenuId,
    pub name: String,
    pub items_count: usize,
}

impl From<&Menu> for MenuRow {
    fn from(m: &Menu) -> Self {
        Self {
            id: m.id.clone(),
            name: m.name.clone(),
            items_count: m.items_count(),
        }
    }
}

impl Sortable for MenuRow {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "name" => self.name.to_lowercase().cmp(&other.name.to_lowercase()),
            "items" => self.items_count.cmp(&other.items_count),
            _ => Ordering::Equal,
        }
    }
}

#[component]
#[allow(non_snake_case)]
pub fn MenuList(
    #[prop(into)] menus: Signal<Vec<Menu>>,
    on_open: Callback<MenuId>,
) -> impl IntoView {
    let state = create_state();

    let toggle_sort = move |field: &'static str| {
        move |_| {
            state.update(|s| {
                if s.sort_field == field {
                    s.sort_ascending = !s.sort_ascending;
                } else {
                    s.sort_field = field.to_string();
                    s.sort_ascending = true;
                }
            });
        }
    };

    let sorted_rows = move || {
        let mut rows: Vec<MenuRow> = menus.with(|list| list.iter().map(MenuRow::from).collect());
        let s = state.get();
        sort_list(&mut rows, &s.sort_field, s.sort_ascending);
        rows
    };

    view! {
        <div class="content">
            <div class="header">
                <h2>{icon("menu")}{"Навигация"}</h2>
            </div>

            <div class="table-container">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("name")>
                                "Меню"
                                <span class={move || get_sort_class(&state.get().sort_field, "name")}>
                                    {move || get_sort_indicator(&state.get().sort_field, "name", state.get().sort_ascending)}
                                </span>
                            </th>
                            <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("items")>
                                "Пунктов"
                                <span class={move || get_sort_class(&state.get().sort_field, "items")}>
                                    {move || get_sort_indicator(&state.get().sort_field, "items", state.get().sort_ascending)}
                                </span>
                            </th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || sorted_rows().into_iter().map(|row| {
                            let id = row.id.clone();
                            view! {
                                <tr class="table__row" on:click=move |_| on_open.run(id.clone())>
                                    <td class="table__cell">{row.name}</td>
                                    <td class="table__cell">{row.items_count}</td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a025_menu::fixtures;

    #[test]
    fn test_rows_from_fixtures() {
        let mut rows: Vec<MenuRow> = fixtures::menus().iter().map(MenuRow::from).collect();
        sort_list(&mut rows, "name", true);
        assert_eq!(rows[0].name, "footer");
        assert_eq!(rows[0].items_count, 5);
        assert_eq!(rows[1].name, "navbar");
        assert_eq!(rows[1].items_count, 7);

        sort_list(&mut rows, "items", false);
        assert_eq!(rows[0].name, "navbar");
    }
}

use super::view_model::MenuDetailsViewModel;
use crate::domain::a025_menu::ui::item_dialog::MenuItemDialog;
use crate::shared::icons::icon;
use contracts::domain::a025_menu::{Menu, MenuItem, MenuItemId, MenuMessages};
use leptos::prelude::*;
use std::sync::Arc;

#[component]
pub fn MenuDetails(
    menu: Menu,
    messages: Arc<dyn MenuMessages>,
    on_back: Callback<()>,
    /// Вызывается после каждого изменения пунктов
    on_changed: Callback<Menu>,
) -> impl IntoView {
    let vm = MenuDetailsViewModel::new(menu);

    Effect::new(move |prev: Option<()>| {
        let menu = vm.menu.get();
        if prev.is_some() {
            on_changed.run(menu);
        }
    });

    let on_edit = Callback::new(move |id: MenuItemId| vm.open_edit(id));

    view! {
        <div class="details-container menu-details">
            <div class="details-header">
                <button class="button button--icon" on:click=move |_| on_back.run(())>
                    {icon("arrow-left")}
                </button>
                <h3>{move || vm.menu.with(|m| m.name.clone())}</h3>
                <div class="header__actions">
                    <button class="button button--primary" on:click=move |_| vm.open_create()>
                        {icon("plus")}
                        {"Добавить пункт"}
                    </button>
                </div>
            </div>

            {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="menu-tree">
                {move || {
                    let items = vm.menu.with(|m| m.items.clone());
                    if items.is_empty() {
                        view! { <div class="menu-tree__empty">{"В меню нет пунктов"}</div> }.into_any()
                    } else {
                        render_items(items, on_edit)
                    }
                }}
            </div>

            <MenuItemDialog
                open=Signal::derive(move || vm.is_dialog_open())
                initial=Signal::derive(move || vm.dialog_initial())
                initial_display_value=Signal::derive(move || vm.dialog_display_value())
                categories=vm.categories
                collections=vm.collections
                loading=vm.loading
                disabled=vm.saving
                edit=Signal::derive(move || vm.is_edit_mode())
                messages=messages
                on_query_change=Callback::new(move |query: String| vm.search_command(query))
                on_submit=Callback::new(move |form| vm.submit_command(form))
                on_close=Callback::new(move |_| vm.close())
            />
        </div>
    }
}

fn render_items(items: Vec<MenuItem>, on_edit: Callback<MenuItemId>) -> AnyView {
    view! {
        <ul class="menu-tree__list">
            {items
                .into_iter()
                .map(|item| {
                    let id = item.id.clone();
                    let kind = item.target.item_type().display_name();
                    let target = item.initial_display_value();
                    let children = (!item.children.is_empty())
                        .then(|| render_items(item.children, on_edit));
                    view! {
                        <li class="menu-tree__item">
                            <div class="menu-tree__row" on:click=move |_| on_edit.run(id.clone())>
                                {icon("chevron-right")}
                                <span class="menu-tree__name">{item.name}</span>
                                <span class="menu-tree__target">{format!("{}: {}", kind, target)}</span>
                                {icon("edit")}
                            </div>
                            {children}
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
    .into_any()
}

use crate::domain::a025_menu::ui::details::MenuDetails;
use crate::domain::a025_menu::ui::list::MenuList;
use contracts::domain::a025_menu::{fixtures, Menu, MenuId, MenuMessages, RuMessages};
use leptos::prelude::*;
use std::sync::Arc;

#[component]
pub fn App() -> impl IntoView {
    let menus = RwSignal::new(fixtures::menus());
    let current = RwSignal::new(None::<MenuId>);
    let messages: Arc<dyn MenuMessages> = Arc::new(RuMessages);

    let on_open = Callback::new(move |id: MenuId| current.set(Some(id)));
    let on_back = Callback::new(move |_| current.set(None));
    let on_changed = Callback::new(move |menu: Menu| {
        menus.update(|list| {
            if let Some(slot) = list.iter_mut().find(|m| m.id == menu.id) {
                *slot = menu;
            }
        });
    });

    view! {
        {move || {
            let selected = current.get().and_then(|id| {
                menus.with_untracked(|list| list.iter().find(|m| m.id == id).cloned())
            });
            match selected {
                Some(menu) => view! {
                    <MenuDetails
                        menu=menu
                        messages=messages.clone()
                        on_back=on_back
                        on_changed=on_changed
                    />
                }
                .into_any(),
                None => view! { <MenuList menus=menus on_open=on_open /> }.into_any(),
            }
        }}
    }
}

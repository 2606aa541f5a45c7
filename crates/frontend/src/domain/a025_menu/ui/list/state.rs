use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct MenuListState {
    pub sort_field: String,
    pub sort_ascending: bool,
}

impl Default for MenuListState {
    fn default() -> Self {
        Self {
            sort_field: "name".to_string(),
            sort_ascending: true,
        }
    }
}

pub fn create_state() -> RwSignal<MenuListState> {
    RwSignal::new(MenuListState::default())
}

use super::model;
use crate::shared::settings::settings;
use contracts::domain::a025_menu::{
    Menu, MenuItemDialogFormData, MenuItemId, MenuItemInput, SearchCandidate,
};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;

/// Какой пункт редактирует открытый диалог
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemDialogMode {
    Create,
    Edit(MenuItemId),
}

/// ViewModel экрана меню и его диалога пункта
#[derive(Clone, Copy)]
pub struct MenuDetailsViewModel {
    pub menu: RwSignal<Menu>,
    pub dialog: RwSignal<Option<ItemDialogMode>>,
    pub categories: RwSignal<Vec<SearchCandidate>>,
    pub collections: RwSignal<Vec<SearchCandidate>>,
    pub loading: RwSignal<bool>,
    pub saving: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    query: RwSignal<String>,
}

impl MenuDetailsViewModel {
    pub fn new(menu: Menu) -> Self {
        Self {
            menu: RwSignal::new(menu),
            dialog: RwSignal::new(None),
            categories: RwSignal::new(Vec::new()),
            collections: RwSignal::new(Vec::new()),
            loading: RwSignal::new(false),
            saving: RwSignal::new(false),
            error: RwSignal::new(None),
            query: RwSignal::new(String::new()),
        }
    }

    pub fn is_dialog_open(&self) -> bool {
        self.dialog.get().is_some()
    }

    pub fn is_edit_mode(&self) -> bool {
        matches!(self.dialog.get(), Some(ItemDialogMode::Edit(_)))
    }

    pub fn open_create(&self) {
        self.open(ItemDialogMode::Create);
    }

    pub fn open_edit(&self, id: MenuItemId) {
        self.open(ItemDialogMode::Edit(id));
    }

    fn open(&self, mode: ItemDialogMode) {
        self.error.set(None);
        self.dialog.set(Some(mode));
        // стартовый список кандидатов без фильтра
        self.search_command(String::new());
    }

    pub fn close(&self) {
        self.dialog.set(None);
        self.query.set(String::new());
    }

    /// Начальные данные формы для текущего режима диалога
    pub fn dialog_initial(&self) -> MenuItemDialogFormData {
        match self.dialog.get() {
            Some(ItemDialogMode::Edit(id)) => self
                .menu
                .with(|m| m.find_item(&id).map(|item| item.dialog_initial()))
                .unwrap_or_default(),
            _ => MenuItemDialogFormData::default(),
        }
    }

    pub fn dialog_display_value(&self) -> String {
        match self.dialog.get() {
            Some(ItemDialogMode::Edit(id)) => self
                .menu
                .with(|m| m.find_item(&id).map(|item| item.initial_display_value()))
                .unwrap_or_default(),
            _ => String::new(),
        }
    }

    /// Поиск кандидатов с задержкой.
    ///
    /// Ответ для устаревшего запроса, закрытого диалога или уже закрытого
    /// экрана отбрасывается.
    pub fn search_command(&self, query: String) {
        self.query.set(query.clone());
        let vm = *self;
        let search = &settings().search;
        let (debounce_ms, min_chars, limit) =
            (search.debounce_ms, search.min_chars, search.max_suggestions);

        wasm_bindgen_futures::spawn_local(async move {
            TimeoutFuture::new(debounce_ms).await;
            if !vm.accepts_results(&query) {
                return;
            }

            vm.loading.set(true);
            let result = model::search_targets(query.clone(), min_chars, limit).await;
            if !vm.is_mounted() {
                return;
            }
            vm.loading.set(false);

            if !vm.accepts_results(&query) {
                log::debug!("menu search: dropping stale results for {:?}", query);
                return;
            }
            match result {
                Ok(found) => {
                    vm.categories.set(found.categories);
                    vm.collections.set(found.collections);
                }
                Err(e) => {
                    log::error!("menu search failed: {}", e);
                    vm.error.set(Some(format!("Ошибка поиска: {}", e)));
                }
            }
        });
    }

    /// Сигналы экрана ещё живы (после `await` экран мог быть закрыт)
    fn is_mounted(&self) -> bool {
        self.menu.try_with_untracked(|_| ()).is_some()
    }

    /// Ответ поиска по `query` ещё актуален: экран открыт, диалог открыт,
    /// запрос не сменился.
    fn accepts_results(&self, query: &str) -> bool {
        self.query.try_with_untracked(|q| q == query).unwrap_or(false)
            && self.dialog.try_with_untracked(Option::is_some).unwrap_or(false)
    }

    /// Сохранить данные диалога в меню
    pub fn submit_command(&self, form: MenuItemDialogFormData) {
        let id = match self.dialog.get_untracked() {
            Some(ItemDialogMode::Edit(id)) => id,
            Some(ItemDialogMode::Create) => MenuItemId::new_v4(),
            None => return,
        };
        let input = MenuItemInput::from_form(&form);
        let vm = *self;

        vm.saving.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            let result = model::save_menu_item(id, input).await;
            if !vm.is_mounted() {
                log::debug!("menu item saved after the menu screen was closed");
                return;
            }
            vm.saving.set(false);
            match result {
                Ok(item) => {
                    vm.menu.update(|m| m.upsert_item(item));
                    vm.close();
                }
                Err(e) => vm.error.set(Some(format!("Ошибка сохранения: {}", e))),
            }
        });
    }
}

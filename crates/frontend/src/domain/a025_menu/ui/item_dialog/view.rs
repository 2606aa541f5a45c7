use crate::shared::icons::icon;
use crate::shared::modal_frame::ModalFrame;
use crate::shared::settings::settings;
use contracts::domain::a025_menu::{
    MenuItemDialogFormData, MenuItemDialogState, MenuMessages, SearchCandidate, SelectMenuItem,
};
use leptos::ev;
use leptos::prelude::*;
use std::sync::Arc;

/// Диалог создания/редактирования пункта меню.
///
/// Категории и коллекции приходят снаружи; запрос поиска отдаётся наружу
/// через `on_query_change` на каждое нажатие клавиши.
#[component]
pub fn MenuItemDialog(
    /// Показан ли диалог
    #[prop(into)]
    open: Signal<bool>,
    /// Начальные данные формы
    #[prop(into)]
    initial: Signal<MenuItemDialogFormData>,
    /// Начальная подпись выбранной цели
    #[prop(into)]
    initial_display_value: Signal<String>,
    #[prop(into)]
    categories: Signal<Vec<SearchCandidate>>,
    #[prop(into)]
    collections: Signal<Vec<SearchCandidate>>,
    /// Идёт поиск кандидатов
    #[prop(into)]
    loading: Signal<bool>,
    /// Блокировка на время сохранения
    #[prop(into)]
    disabled: Signal<bool>,
    /// Режим редактирования (влияет только на тексты)
    #[prop(into)]
    edit: Signal<bool>,
    messages: Arc<dyn MenuMessages>,
    on_query_change: Callback<String>,
    on_submit: Callback<MenuItemDialogFormData>,
    on_close: Callback<()>,
) -> impl IntoView {
    let messages = StoredValue::new(messages);
    let state = RwSignal::new(MenuItemDialogState::new(&settings().links));

    // Внешняя синхронизация: при открытии и при смене начальной подписи
    Effect::new(move |_| {
        if open.get() {
            let initial = initial.get();
            let display_value = initial_display_value.get();
            state.update(|s| s.reset(initial, display_value));
        }
    });

    // Дерево пересобирается из текущих кандидатов при каждом обращении
    let options = move || {
        let categories = categories.get();
        let collections = collections.get();
        state.with(|s| messages.with_value(|m| s.options(&categories, &collections, &**m)))
    };

    let handle_query = move |ev: ev::Event| {
        let text = event_target_value(&ev);
        let query = state.try_update(|s| s.on_query_change(&text)).unwrap_or(text);
        on_query_change.run(query);
    };

    let handle_pick = Callback::new(move |value: String| {
        let tree = options();
        // ошибка уже сохранена в состоянии и будет показана под полем
        let _ = state.try_update(|s| s.select(&value, &tree));
    });

    let input_text = move || {
        state.with(|s| {
            if s.query.is_empty() {
                s.display_value.clone()
            } else {
                s.query.clone()
            }
        })
    };

    let show_options = move || state.with(|s| !s.query.is_empty());

    let error_text = move || {
        state.with(|s| {
            s.error
                .as_ref()
                .map(|e| messages.with_value(|m| m.selection_error(e)))
        })
    };

    let validation_hint = move || {
        state.with(|s| {
            s.validate()
                .err()
                .map(|e| messages.with_value(|m| m.form_error(&e)))
        })
    };

    let handle_submit = move |_| {
        if disabled.get_untracked() {
            return;
        }
        match state.with_untracked(|s| s.submit()) {
            Ok(data) => on_submit.run(data),
            Err(e) => log::warn!("menu item dialog: submit blocked: {}", e),
        }
    };

    let text = move |f: fn(&dyn MenuMessages) -> String| messages.with_value(|m| f(&**m));

    view! {
        <Show when=move || open.get()>
            <ModalFrame on_close=on_close modal_class="menu-item-dialog".to_string()>
                <div class="details-container">
                    <div class="details-header">
                        <h3>{move || messages.with_value(|m| m.dialog_title(edit.get()))}</h3>
                    </div>

                    <div class="details-form">
                        <div class="form-group">
                            <label for="menu-item-name">{text(|m| m.name_label())}</label>
                            <input
                                type="text"
                                id="menu-item-name"
                                disabled=move || disabled.get()
                                prop:value=move || state.with(|s| s.form.name.clone())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    state.update(|s| s.set_name(value));
                                }
                            />
                        </div>

                        <div class="form-group autocomplete">
                            <label for="menu-item-link">{text(|m| m.link_label())}</label>
                            <input
                                type="text"
                                id="menu-item-link"
                                autocomplete="off"
                                disabled=move || disabled.get()
                                placeholder=text(|m| m.link_placeholder())
                                prop:value=input_text
                                on:input=handle_query
                            />
                            <Show when=show_options>
                                <div class="autocomplete__dropdown">
                                    {move || {
                                        // вариант со ссылкой не зависит от поиска
                                        if loading.get() && state.with(|s| s.detected_url.is_none()) {
                                            return view! {
                                                <div class="autocomplete__status">{text(|m| m.loading())}</div>
                                            }
                                            .into_any();
                                        }
                                        let tree = options();
                                        if tree.is_empty() {
                                            return view! {
                                                <div class="autocomplete__status">{text(|m| m.no_results())}</div>
                                            }
                                            .into_any();
                                        }
                                        view! {
                                            <ul class="autocomplete__list">
                                                {tree
                                                    .into_iter()
                                                    .map(|node| render_option(node, handle_pick))
                                                    .collect_view()}
                                            </ul>
                                        }
                                        .into_any()
                                    }}
                                </div>
                            </Show>
                            {move || error_text().map(|e| view! { <div class="error">{e}</div> })}
                        </div>
                    </div>

                    <div class="details-actions">
                        {move || validation_hint().map(|h| view! { <span class="hint">{h}</span> })}
                        <button
                            class="button button--primary"
                            on:click=handle_submit
                            disabled=move || disabled.get() || !state.with(|s| s.can_submit())
                        >
                            {icon("save")}
                            {move || messages.with_value(|m| m.submit(edit.get()))}
                        </button>
                        <button class="button button--secondary" on:click=move |_| on_close.run(())>
                            {icon("cancel")}
                            {text(|m| m.cancel())}
                        </button>
                    </div>
                </div>
            </ModalFrame>
        </Show>
    }
}

fn render_option(node: SelectMenuItem, on_pick: Callback<String>) -> AnyView {
    match node {
        SelectMenuItem::Group { label, children } => view! {
            <li class="autocomplete__group">
                <div class="autocomplete__group-label">{label}</div>
                <ul>
                    {children
                        .into_iter()
                        .map(|child| render_option(child, on_pick))
                        .collect_view()}
                </ul>
            </li>
        }
        .into_any(),
        SelectMenuItem::Leaf { label, value } => {
            let is_link = value.starts_with("link:");
            view! {
                <li
                    class="autocomplete__option"
                    // mousedown, чтобы выбор срабатывал раньше потери фокуса полем
                    on:mousedown=move |ev: ev::MouseEvent| {
                        ev.prevent_default();
                        on_pick.run(value.clone());
                    }
                >
                    {is_link.then(|| icon("link"))}
                    {label}
                </li>
            }
            .into_any()
        }
    }
}

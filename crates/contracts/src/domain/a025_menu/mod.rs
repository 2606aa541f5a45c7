//! Меню навигации сайта и разрешение выбора цели пункта меню

pub mod aggregate;
pub mod dialog_state;
pub mod fixtures;
pub mod messages;
pub mod option_tree;
pub mod selection;

// Re-exports
pub use aggregate::{Menu, MenuId, MenuItem, MenuItemId, MenuItemInput, MenuItemTarget};
pub use dialog_state::{DialogPhase, FormError, MenuItemDialogState};
pub use messages::{EnMessages, MenuMessages, RuMessages};
pub use option_tree::{
    build_option_tree, find_entry_by_value, resolve_display_value, resolve_selection,
    SearchCandidate, SelectMenuItem,
};
pub use selection::{
    format_selection_value, parse_selection_value, MenuItemData, MenuItemDialogFormData,
    SelectionError,
};

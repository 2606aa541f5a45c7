pub mod details;
pub mod item_dialog;
pub mod list;

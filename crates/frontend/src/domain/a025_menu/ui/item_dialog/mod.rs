pub mod view;

pub use view::MenuItemDialog;

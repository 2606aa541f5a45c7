pub mod menu_item_type;

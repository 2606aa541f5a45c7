pub mod a025_menu;

pub mod icons;
pub mod list_utils;
pub mod modal_frame;
pub mod settings;

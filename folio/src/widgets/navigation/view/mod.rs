pub(crate) mod back_to_top_button;
pub(crate) mod nav_bar;
pub(crate) mod overlay_menu;

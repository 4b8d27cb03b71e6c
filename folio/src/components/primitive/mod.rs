pub(crate) mod badge;
pub(crate) mod card;
pub(crate) mod icon_button;
pub(crate) mod link_button;
pub(crate) mod progress_bar;
pub(crate) mod section_header;

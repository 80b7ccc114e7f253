pub mod contact;
pub mod footer;
pub mod gallery;
pub mod gallery_modal;
pub mod glitch_lines;
pub mod navbar;
pub mod progress_bar;
pub mod reveal;
pub mod scroll_snap;

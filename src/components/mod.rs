//! UI Components
//!
//! Reusable Leptos components.

mod category_modal;
mod category_select;
mod navbar;
mod notice_modal;
mod pagination;
mod rich_text_editor;
mod sidebar;
mod thumbnail_picker;

pub use category_modal::CategoryModal;
pub use category_select::{use_category_options, CategorySelect};
pub use navbar::Navbar;
pub use notice_modal::{DialogHost, NoticeModal};
pub use pagination::PaginationBar;
pub use rich_text_editor::RichTextEditor;
pub use sidebar::Sidebar;
pub use thumbnail_picker::ThumbnailPicker;

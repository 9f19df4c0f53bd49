//! UI Components
//!
//! Reusable Leptos components.

mod admin_nav;
mod delete_confirm_button;
mod pagination_bar;
mod resource_list;
mod image_upload;
mod form_actions;
mod post_form;
mod page_form;
mod portfolio_form;
mod file_tree;
mod template_editor;

pub use admin_nav::AdminNav;
pub use delete_confirm_button::DeleteConfirmButton;
pub use pagination_bar::PaginationBar;
pub use resource_list::ResourceList;
pub use image_upload::ImageUploadField;
pub use post_form::PostForm;
pub use page_form::PageForm;
pub use portfolio_form::PortfolioForm;
pub use file_tree::FileTree;
pub use template_editor::TemplateEditor;

//! Views
//!
//! One component per route.

mod article_form;
mod articles;
mod categories;
mod login;

pub use article_form::ArticleFormView;
pub use articles::ArticlesView;
pub use categories::CategoriesView;
pub use login::LoginView;

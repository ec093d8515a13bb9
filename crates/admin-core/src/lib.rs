//! Article Admin Core
//!
//! Layered architecture:
//! - domain: entities, pagination envelopes and errors
//! - api: the remote REST boundary (trait + reqwest implementation)
//! - session, list_query, forms, actions: the controllers the views drive
//! - markdown, text, route: rendering and formatting helpers
//!
//! Nothing in here touches the DOM, so everything is testable natively.

pub mod actions;
pub mod api;
pub mod config;
pub mod domain;
pub mod forms;
pub mod list_query;
pub mod markdown;
pub mod notice;
pub mod route;
pub mod session;
pub mod text;

#[cfg(test)]
pub(crate) mod testing;

pub use api::{AdminApi, HttpApi, ListSource};
pub use config::AdminConfig;
pub use domain::{
    ApiError, ApiResult, Article, ArticleInput, Category, CategoryRef, Credentials, ImageUpload,
    Page, Profile,
};
pub use notice::{Dialogs, Notice, NoticeKind};

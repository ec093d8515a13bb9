//! Form Controllers
//!
//! Draft state for the create/edit screens. Validation is presence-only and
//! fails closed: one notice, no per-field errors, no network traffic.

mod article_form;
mod category_form;

#[cfg(test)]
mod tests;

pub use article_form::{
    ArticleDraft, ArticleForm, FormStatus, SubmitOutcome, Submission, REQUIRED_FIELDS,
};
pub use category_form::{CategoryForm, NAME_REQUIRED, SAVE_FAILED};

use thiserror::Error;

use crate::domain::ApiError;
use crate::notice::Notice;

/// Whether a form creates a new entity or edits an existing one
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit { id: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{0}")]
    Validation(&'static str),

    /// Edit target could not be loaded
    #[error("Article not found or response invalid!")]
    Unavailable,

    /// A submission is already in flight
    #[error("Still saving, please wait")]
    Busy,

    #[error(transparent)]
    Api(#[from] ApiError),
}

impl FormError {
    /// Notice for this error; `fallback` covers API errors without a message
    pub fn notice(&self, fallback: &str) -> Notice {
        match self {
            FormError::Api(err) => Notice::failure(err, fallback),
            other => Notice::error(other.to_string()),
        }
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

//! Domain Layer
//!
//! Entities mirrored from the remote API plus the envelopes it wraps them in.
//! The API owns persistence; everything here is a read-only copy or a draft.

mod article;
mod category;
mod error;
mod page;
mod profile;

pub use article::{Article, ArticleInput, ImageUpload};
pub use category::{Category, CategoryInput, CategoryRef};
pub use error::{ApiError, ApiResult};
pub use page::{Envelope, Page};
pub use profile::{Credentials, LoginGrant, Profile};

//! Category Form
//!
//! Backs the add/edit category modal.

use tracing::info;

use super::{is_blank, FormError, FormMode};
use crate::api::AdminApi;
use crate::domain::CategoryInput;
use crate::notice::Notice;

pub const NAME_REQUIRED: &str = "Category name is required!";
pub const SAVE_FAILED: &str = "Failed to save category";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryForm {
    mode: FormMode,
    pub name: String,
}

impl CategoryForm {
    pub fn create() -> Self {
        Self {
            mode: FormMode::Create,
            name: String::new(),
        }
    }

    pub fn edit(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            mode: FormMode::Edit { id: id.into() },
            name: name.into(),
        }
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn is_edit(&self) -> bool {
        matches!(self.mode, FormMode::Edit { .. })
    }

    pub fn validate(&self) -> Result<(), FormError> {
        if is_blank(&self.name) {
            return Err(FormError::Validation(NAME_REQUIRED));
        }
        Ok(())
    }

    /// Create or rename, then clear the draft
    pub async fn submit<A: AdminApi + ?Sized>(&mut self, api: &A) -> Result<Notice, FormError> {
        self.validate()?;
        let input = CategoryInput {
            name: self.name.clone(),
        };
        let notice = match &self.mode {
            FormMode::Create => {
                api.create_category(&input).await?;
                info!(name = %input.name, "Category created");
                Notice::success("Category added!")
            }
            FormMode::Edit { id } => {
                api.update_category(id, &input).await?;
                info!(id = %id, "Category renamed");
                Notice::success("Category updated!")
            }
        };
        self.name.clear();
        Ok(notice)
    }
}

//! Article Form

use tracing::{debug, info};

use super::{is_blank, FormError, FormMode};
use crate::api::AdminApi;
use crate::domain::{ArticleInput, ImageUpload};
use crate::notice::Notice;

pub const REQUIRED_FIELDS: &str = "Title, content, and category are required!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormStatus {
    Ready,
    Submitting,
    /// Edit target missing; nothing editable is shown
    Unavailable,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ArticleDraft {
    pub title: String,
    /// Rich-text markup from the editor
    pub content: String,
    pub category_id: String,
    /// URL already stored on the article (edit mode)
    pub image_url: Option<String>,
    /// New file picked since the form opened
    pub thumbnail: Option<ImageUpload>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Enables the "Preview" affordance
    Created { id: String },
    /// Caller returns to the list
    Updated { id: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArticleForm {
    mode: FormMode,
    status: FormStatus,
    draft: ArticleDraft,
    created_id: Option<String>,
}

impl ArticleForm {
    pub fn create() -> Self {
        Self {
            mode: FormMode::Create,
            status: FormStatus::Ready,
            draft: ArticleDraft::default(),
            created_id: None,
        }
    }

    /// Edit form pre-populated from the stored article
    pub async fn load<A: AdminApi + ?Sized>(api: &A, id: &str) -> Result<Self, FormError> {
        let article = api.get_article(id).await?.ok_or(FormError::Unavailable)?;
        debug!(id, "Loaded article for editing");
        Ok(Self {
            mode: FormMode::Edit { id: id.to_string() },
            status: FormStatus::Ready,
            draft: ArticleDraft {
                title: article.title,
                content: article.content,
                category_id: article.category_id,
                image_url: article.image_url,
                thumbnail: None,
            },
            created_id: None,
        })
    }

    /// An edit form whose target could not be loaded
    pub fn unavailable(id: &str) -> Self {
        Self {
            mode: FormMode::Edit { id: id.to_string() },
            status: FormStatus::Unavailable,
            draft: ArticleDraft::default(),
            created_id: None,
        }
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn status(&self) -> FormStatus {
        self.status
    }

    pub fn is_editable(&self) -> bool {
        self.status != FormStatus::Unavailable
    }

    pub fn draft(&self) -> &ArticleDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut ArticleDraft {
        &mut self.draft
    }

    /// Id of the article this form created, once it has
    pub fn created_id(&self) -> Option<&str> {
        self.created_id.as_deref()
    }

    /// Attach or detach a new thumbnail; detaching falls back to the stored URL
    pub fn set_thumbnail(&mut self, thumbnail: Option<ImageUpload>) {
        self.draft.thumbnail = thumbnail;
    }

    pub fn validate(&self) -> Result<(), FormError> {
        let draft = &self.draft;
        if is_blank(&draft.title) || is_blank(&draft.content) || is_blank(&draft.category_id) {
            return Err(FormError::Validation(REQUIRED_FIELDS));
        }
        Ok(())
    }

    /// Validate, upload a new thumbnail if any, then create or update
    pub async fn submit<A: AdminApi + ?Sized>(&mut self, api: &A) -> Result<SubmitOutcome, FormError> {
        let submission = self.begin_submit()?;
        let result = submission.send(api).await;
        self.finish(&result);
        result
    }

    /// Validate and snapshot the draft; the form stays `Submitting` until
    /// `finish`
    pub fn begin_submit(&mut self) -> Result<Submission, FormError> {
        match self.status {
            FormStatus::Unavailable => return Err(FormError::Unavailable),
            FormStatus::Submitting => return Err(FormError::Busy),
            FormStatus::Ready => {}
        }
        self.validate()?;

        self.status = FormStatus::Submitting;
        Ok(Submission {
            mode: self.mode.clone(),
            thumbnail: self.draft.thumbnail.clone(),
            input: ArticleInput {
                title: self.draft.title.clone(),
                content: self.draft.content.clone(),
                category_id: self.draft.category_id.clone(),
                image_url: self.draft.image_url.clone(),
            },
        })
    }

    /// Record a submission result; the draft itself is left as it is
    pub fn finish(&mut self, result: &Result<SubmitOutcome, FormError>) {
        self.status = FormStatus::Ready;
        if let Ok(SubmitOutcome::Created { id }) = result {
            self.created_id = Some(id.clone());
        }
    }

    /// Clear every field and forget the created article
    pub fn reset(&mut self) {
        self.draft = ArticleDraft::default();
        self.created_id = None;
        self.status = FormStatus::Ready;
    }

    pub fn is_submitting(&self) -> bool {
        self.status == FormStatus::Submitting
    }

    pub fn success_notice(outcome: &SubmitOutcome) -> Notice {
        match outcome {
            SubmitOutcome::Created { .. } => Notice::success("Article uploaded successfully!"),
            SubmitOutcome::Updated { .. } => Notice::success("Article updated successfully!"),
        }
    }

    /// Canned text for API failures without a message
    pub fn failure_fallback(&self) -> &'static str {
        match self.mode {
            FormMode::Create => "Failed to upload article",
            FormMode::Edit { .. } => "Failed to update article",
        }
    }
}

/// What `begin_submit` captured; sent without borrowing the form
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    mode: FormMode,
    thumbnail: Option<ImageUpload>,
    input: ArticleInput,
}

impl Submission {
    pub async fn send<A: AdminApi + ?Sized>(self, api: &A) -> Result<SubmitOutcome, FormError> {
        let mut input = self.input;
        if let Some(thumbnail) = &self.thumbnail {
            input.image_url = Some(api.upload_image(thumbnail).await?);
        }

        match self.mode {
            FormMode::Create => {
                let id = api.create_article(&input).await?;
                info!(id = %id, "Article created");
                Ok(SubmitOutcome::Created { id })
            }
            FormMode::Edit { id } => {
                api.update_article(&id, &input).await?;
                info!(id = %id, "Article updated");
                Ok(SubmitOutcome::Updated { id })
            }
        }
    }
}

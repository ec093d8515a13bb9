//! Form Controller Tests

use super::*;
use crate::domain::{ApiError, ArticleInput, CategoryInput};
use crate::testing::{article, thumbnail, Call, RecordingApi};

fn filled_create_form() -> ArticleForm {
    let mut form = ArticleForm::create();
    let draft = form.draft_mut();
    draft.title = "Hello".to_string();
    draft.content = "<p>World</p>".to_string();
    draft.category_id = "c1".to_string();
    form
}

#[tokio::test]
async fn test_empty_title_blocks_every_call() {
    let api = RecordingApi::default();
    let mut form = filled_create_form();
    form.draft_mut().title.clear();
    form.set_thumbnail(Some(thumbnail()));

    let err = form.submit(&api).await.unwrap_err();

    assert_eq!(err, FormError::Validation("Title, content, and category are required!"));
    assert!(api.calls().is_empty());
}

#[tokio::test]
async fn test_whitespace_content_counts_as_missing() {
    let api = RecordingApi::default();
    let mut form = filled_create_form();
    form.draft_mut().content = "   ".to_string();

    assert!(matches!(form.submit(&api).await, Err(FormError::Validation(_))));
    assert!(api.calls().is_empty());
}

#[tokio::test]
async fn test_create_uploads_thumbnail_before_create() {
    let api = RecordingApi::default();
    api.set_upload_url(Ok("https://cdn.test/thumb.png".to_string()));
    let mut form = filled_create_form();
    form.set_thumbnail(Some(thumbnail()));

    let outcome = form.submit(&api).await.unwrap();

    assert_eq!(
        api.calls(),
        vec![
            Call::Upload("thumb.png".to_string()),
            Call::CreateArticle(ArticleInput {
                title: "Hello".to_string(),
                content: "<p>World</p>".to_string(),
                category_id: "c1".to_string(),
                image_url: Some("https://cdn.test/thumb.png".to_string()),
            }),
        ]
    );
    assert_eq!(outcome, SubmitOutcome::Created { id: "new-article".to_string() });
    assert_eq!(form.created_id(), Some("new-article"));
}

#[tokio::test]
async fn test_create_without_thumbnail_sends_no_image() {
    let api = RecordingApi::default();
    let mut form = filled_create_form();

    form.submit(&api).await.unwrap();

    match api.calls().as_slice() {
        [Call::CreateArticle(input)] => assert_eq!(input.image_url, None),
        other => panic!("unexpected calls: {:?}", other),
    }
}

#[tokio::test]
async fn test_failed_upload_skips_create() {
    let api = RecordingApi::default();
    api.set_upload_url(Err(ApiError::Transport("Network Error".to_string())));
    let mut form = filled_create_form();
    form.set_thumbnail(Some(thumbnail()));

    let err = form.submit(&api).await.unwrap_err();

    assert_eq!(api.calls(), vec![Call::Upload("thumb.png".to_string())]);
    assert_eq!(err.notice(form.failure_fallback()).text, "Network Error");
    assert_eq!(form.created_id(), None);
    assert_eq!(form.status(), FormStatus::Ready);
}

#[tokio::test]
async fn test_edit_prefills_from_stored_article() {
    let api = RecordingApi::default();
    api.set_article(Ok(Some(article("a1", Some("https://cdn.test/old.png")))));

    let form = ArticleForm::load(&api, "a1").await.unwrap();

    assert_eq!(form.mode(), &FormMode::Edit { id: "a1".to_string() });
    assert_eq!(form.draft().title, "Title a1");
    assert_eq!(form.draft().category_id, "c1");
    assert_eq!(form.draft().image_url.as_deref(), Some("https://cdn.test/old.png"));
}

#[tokio::test]
async fn test_edit_without_new_thumbnail_keeps_image_url() {
    let api = RecordingApi::default();
    api.set_article(Ok(Some(article("a1", Some("https://cdn.test/old.png")))));
    let mut form = ArticleForm::load(&api, "a1").await.unwrap();
    form.draft_mut().title = "Renamed".to_string();

    let outcome = form.submit(&api).await.unwrap();

    assert_eq!(outcome, SubmitOutcome::Updated { id: "a1".to_string() });
    match api.calls().last() {
        Some(Call::UpdateArticle(id, input)) => {
            assert_eq!(id, "a1");
            assert_eq!(input.title, "Renamed");
            assert_eq!(input.image_url.as_deref(), Some("https://cdn.test/old.png"));
        }
        other => panic!("expected update, got {:?}", other),
    }
    assert!(!api.calls().iter().any(|c| matches!(c, Call::Upload(_))));
}

#[tokio::test]
async fn test_edit_with_new_thumbnail_replaces_image_url() {
    let api = RecordingApi::default();
    api.set_article(Ok(Some(article("a1", Some("https://cdn.test/old.png")))));
    api.set_upload_url(Ok("https://cdn.test/new.png".to_string()));
    let mut form = ArticleForm::load(&api, "a1").await.unwrap();
    form.set_thumbnail(Some(thumbnail()));

    form.submit(&api).await.unwrap();

    match api.calls().last() {
        Some(Call::UpdateArticle(_, input)) => {
            assert_eq!(input.image_url.as_deref(), Some("https://cdn.test/new.png"))
        }
        other => panic!("expected update, got {:?}", other),
    }
}

#[tokio::test]
async fn test_missing_article_is_unavailable() {
    let api = RecordingApi::default();
    api.set_article(Ok(None));

    let err = ArticleForm::load(&api, "gone").await.unwrap_err();
    assert_eq!(err, FormError::Unavailable);
    assert_eq!(err.notice("unused").text, "Article not found or response invalid!");

    let mut form = ArticleForm::unavailable("gone");
    assert!(!form.is_editable());
    assert_eq!(form.submit(&api).await.unwrap_err(), FormError::Unavailable);
    assert_eq!(api.calls(), vec![Call::GetArticle("gone".to_string())]);
}

#[test]
fn test_reset_clears_everything() {
    let mut form = filled_create_form();
    form.set_thumbnail(Some(thumbnail()));
    form.reset();
    assert_eq!(form.draft(), &ArticleDraft::default());
    assert_eq!(form.created_id(), None);
}

#[tokio::test]
async fn test_reset_drops_picked_thumbnail_from_next_submit() {
    let api = RecordingApi::default();
    let mut form = filled_create_form();
    form.set_thumbnail(Some(thumbnail()));
    form.reset();

    let draft = form.draft_mut();
    draft.title = "Again".to_string();
    draft.content = "<p>Fresh</p>".to_string();
    draft.category_id = "c2".to_string();
    form.submit(&api).await.unwrap();

    assert!(!api.calls().iter().any(|c| matches!(c, Call::Upload(_))));
}

#[tokio::test]
async fn test_edits_made_while_saving_are_kept() {
    let api = RecordingApi::default();
    api.set_upload_url(Ok("https://cdn.test/thumb.png".to_string()));
    let mut form = filled_create_form();
    form.set_thumbnail(Some(thumbnail()));

    let submission = form.begin_submit().unwrap();
    assert!(form.is_submitting());
    form.draft_mut().title = "Typed during upload".to_string();

    let result = submission.send(&api).await;
    form.finish(&result);

    assert_eq!(result, Ok(SubmitOutcome::Created { id: "new-article".to_string() }));
    assert_eq!(form.draft().title, "Typed during upload");
    assert_eq!(form.created_id(), Some("new-article"));
    assert_eq!(form.status(), FormStatus::Ready);
    match api.calls().last() {
        Some(Call::CreateArticle(input)) => assert_eq!(input.title, "Hello"),
        other => panic!("expected create, got {:?}", other),
    }
}

#[test]
fn test_second_submission_is_refused_while_saving() {
    let mut form = filled_create_form();
    let _first = form.begin_submit().unwrap();
    assert_eq!(form.begin_submit().unwrap_err(), FormError::Busy);

    form.finish(&Err(FormError::Busy));
    assert!(form.begin_submit().is_ok());
}

#[tokio::test]
async fn test_category_name_required() {
    let api = RecordingApi::default();
    let mut form = CategoryForm::create();
    form.name = "  ".to_string();

    let err = form.submit(&api).await.unwrap_err();
    assert_eq!(err.notice("unused").text, "Category name is required!");
    assert!(api.calls().is_empty());
}

#[tokio::test]
async fn test_category_create_and_edit() {
    let api = RecordingApi::default();

    let mut create = CategoryForm::create();
    create.name = "Science".to_string();
    assert_eq!(create.submit(&api).await.unwrap().text, "Category added!");
    assert!(create.name.is_empty());

    let mut edit = CategoryForm::edit("c1", "Tech");
    assert!(edit.is_edit());
    assert_eq!(edit.submit(&api).await.unwrap().text, "Category updated!");

    assert_eq!(
        api.calls(),
        vec![
            Call::CreateCategory(CategoryInput { name: "Science".to_string() }),
            Call::UpdateCategory("c1".to_string(), CategoryInput { name: "Tech".to_string() }),
        ]
    );
}

#[tokio::test]
async fn test_category_failure_keeps_draft() {
    let api = RecordingApi::default();
    api.fail_mutations(ApiError::Transport(String::new()));
    let mut form = CategoryForm::create();
    form.name = "Science".to_string();

    let err = form.submit(&api).await.unwrap_err();
    assert_eq!(err.notice("Failed to save category").text, "Failed to save category");
    assert_eq!(form.name, "Science");
}

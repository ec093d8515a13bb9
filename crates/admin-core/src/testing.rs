//! Test Doubles
//!
//! An in-memory `AdminApi` that records every call, and a `Dialogs` that
//! answers confirmations from a script.

use std::cell::RefCell;

use async_trait::async_trait;

use crate::api::AdminApi;
use crate::domain::{
    ApiError, ApiResult, Article, ArticleInput, Category, CategoryInput, CategoryRef, Credentials,
    ImageUpload, LoginGrant, Page, Profile,
};
use crate::list_query::ListQuery;
use crate::notice::{Dialogs, Notice};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    ListCategories(ListQuery),
    ListArticles(ListQuery),
    GetArticle(String),
    CreateArticle(ArticleInput),
    UpdateArticle(String, ArticleInput),
    DeleteArticle(String),
    CreateCategory(CategoryInput),
    UpdateCategory(String, CategoryInput),
    DeleteCategory(String),
    Upload(String),
    Profile,
    Login(String),
}

pub fn article(id: &str, image_url: Option<&str>) -> Article {
    Article {
        id: id.to_string(),
        title: format!("Title {}", id),
        content: "<p>Body</p>".to_string(),
        category_id: "c1".to_string(),
        image_url: image_url.map(str::to_string),
        created_at: None,
        category: Some(CategoryRef {
            id: "c1".to_string(),
            name: "Tech".to_string(),
        }),
    }
}

pub fn thumbnail() -> ImageUpload {
    ImageUpload {
        file_name: "thumb.png".to_string(),
        mime_type: "image/png".to_string(),
        bytes: vec![1, 2, 3],
    }
}

pub struct RecordingApi {
    calls: RefCell<Vec<Call>>,
    articles: RefCell<ApiResult<Page<Article>>>,
    categories: RefCell<ApiResult<Page<Category>>>,
    article: RefCell<ApiResult<Option<Article>>>,
    profile: RefCell<ApiResult<Profile>>,
    upload_url: RefCell<ApiResult<String>>,
    mutation_error: RefCell<Option<ApiError>>,
}

impl Default for RecordingApi {
    fn default() -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            articles: RefCell::new(Ok(Page::new(Vec::new(), 0, 1))),
            categories: RefCell::new(Ok(Page::new(Vec::new(), 0, 1))),
            article: RefCell::new(Ok(None)),
            profile: RefCell::new(Err(ApiError::Unauthorized)),
            upload_url: RefCell::new(Ok("https://cdn.test/uploaded.png".to_string())),
            mutation_error: RefCell::new(None),
        }
    }
}

impl RecordingApi {
    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn set_articles(&self, page: ApiResult<Page<Article>>) {
        *self.articles.borrow_mut() = page;
    }

    pub fn set_categories(&self, page: ApiResult<Page<Category>>) {
        *self.categories.borrow_mut() = page;
    }

    pub fn set_article(&self, article: ApiResult<Option<Article>>) {
        *self.article.borrow_mut() = article;
    }

    pub fn set_profile(&self, profile: ApiResult<Profile>) {
        *self.profile.borrow_mut() = profile;
    }

    pub fn set_upload_url(&self, url: ApiResult<String>) {
        *self.upload_url.borrow_mut() = url;
    }

    /// Make every create/update/delete fail with `error`
    pub fn fail_mutations(&self, error: ApiError) {
        *self.mutation_error.borrow_mut() = Some(error);
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }

    fn mutation(&self, call: Call) -> ApiResult<()> {
        self.record(call);
        match self.mutation_error.borrow().clone() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

#[async_trait(?Send)]
impl AdminApi for RecordingApi {
    async fn list_categories(&self, query: &ListQuery, _limit: u32) -> ApiResult<Page<Category>> {
        self.record(Call::ListCategories(query.clone()));
        self.categories.borrow().clone()
    }

    async fn list_articles(&self, query: &ListQuery, _limit: u32) -> ApiResult<Page<Article>> {
        self.record(Call::ListArticles(query.clone()));
        self.articles.borrow().clone()
    }

    async fn get_article(&self, id: &str) -> ApiResult<Option<Article>> {
        self.record(Call::GetArticle(id.to_string()));
        self.article.borrow().clone()
    }

    async fn create_article(&self, input: &ArticleInput) -> ApiResult<String> {
        self.mutation(Call::CreateArticle(input.clone()))?;
        Ok("new-article".to_string())
    }

    async fn update_article(&self, id: &str, input: &ArticleInput) -> ApiResult<()> {
        self.mutation(Call::UpdateArticle(id.to_string(), input.clone()))
    }

    async fn delete_article(&self, id: &str) -> ApiResult<()> {
        self.mutation(Call::DeleteArticle(id.to_string()))
    }

    async fn create_category(&self, input: &CategoryInput) -> ApiResult<()> {
        self.mutation(Call::CreateCategory(input.clone()))
    }

    async fn update_category(&self, id: &str, input: &CategoryInput) -> ApiResult<()> {
        self.mutation(Call::UpdateCategory(id.to_string(), input.clone()))
    }

    async fn delete_category(&self, id: &str) -> ApiResult<()> {
        self.mutation(Call::DeleteCategory(id.to_string()))
    }

    async fn upload_image(&self, image: &ImageUpload) -> ApiResult<String> {
        self.record(Call::Upload(image.file_name.clone()));
        self.upload_url.borrow().clone()
    }

    async fn profile(&self) -> ApiResult<Profile> {
        self.record(Call::Profile);
        self.profile.borrow().clone()
    }

    async fn login(&self, credentials: &Credentials) -> ApiResult<LoginGrant> {
        self.record(Call::Login(credentials.username.clone()));
        Ok(LoginGrant {
            token: format!("token-for-{}", credentials.username),
            role: Some("Admin".to_string()),
        })
    }
}

/// Answers every confirmation with `answer` and keeps every notice shown
pub struct ScriptedDialogs {
    answer: bool,
    shown: RefCell<Vec<Notice>>,
}

impl ScriptedDialogs {
    pub fn answering(answer: bool) -> Self {
        Self {
            answer,
            shown: RefCell::new(Vec::new()),
        }
    }

    pub fn shown(&self) -> Vec<Notice> {
        self.shown.borrow().clone()
    }
}

#[async_trait(?Send)]
impl Dialogs for ScriptedDialogs {
    async fn alert(&self, notice: Notice) {
        self.shown.borrow_mut().push(notice);
    }

    async fn confirm(&self, notice: Notice) -> bool {
        self.shown.borrow_mut().push(notice);
        self.answer
    }
}

//! API Traits
//!
//! Futures are `?Send`: the dashboard runs on the browser's single thread.

use async_trait::async_trait;

use crate::domain::{
    ApiResult, Article, ArticleInput, Category, CategoryInput, Credentials, ImageUpload,
    LoginGrant, Page, Profile,
};
use crate::list_query::ListQuery;

/// Every endpoint the dashboard consumes
#[async_trait(?Send)]
pub trait AdminApi {
    /// `GET /categories?search=&page=&limit=`
    async fn list_categories(&self, query: &ListQuery, limit: u32) -> ApiResult<Page<Category>>;

    /// `GET /articles?category=&title=&page=&limit=`
    async fn list_articles(&self, query: &ListQuery, limit: u32) -> ApiResult<Page<Article>>;

    /// `GET /articles/{id}`; `None` when the API has no such article
    async fn get_article(&self, id: &str) -> ApiResult<Option<Article>>;

    /// `POST /articles`, returning the new article's id
    async fn create_article(&self, input: &ArticleInput) -> ApiResult<String>;

    /// `PUT /articles/{id}`
    async fn update_article(&self, id: &str, input: &ArticleInput) -> ApiResult<()>;

    /// `DELETE /articles/{id}`
    async fn delete_article(&self, id: &str) -> ApiResult<()>;

    /// `POST /categories`
    async fn create_category(&self, input: &CategoryInput) -> ApiResult<()>;

    /// `PUT /categories/{id}`
    async fn update_category(&self, id: &str, input: &CategoryInput) -> ApiResult<()>;

    /// `DELETE /categories/{id}`
    async fn delete_category(&self, id: &str) -> ApiResult<()>;

    /// `POST /upload` (multipart), returning the stored image URL
    async fn upload_image(&self, image: &ImageUpload) -> ApiResult<String>;

    /// `GET /auth/profile` for the stored credential
    async fn profile(&self) -> ApiResult<Profile>;

    /// `POST /auth/login`
    async fn login(&self, credentials: &Credentials) -> ApiResult<LoginGrant>;
}

/// A remote list the `ListQueryController` can page through
#[async_trait(?Send)]
pub trait ListSource<T> {
    async fn fetch_page(&self, query: &ListQuery, limit: u32) -> ApiResult<Page<T>>;
}

#[async_trait(?Send)]
impl<A: AdminApi + ?Sized> ListSource<Article> for A {
    async fn fetch_page(&self, query: &ListQuery, limit: u32) -> ApiResult<Page<Article>> {
        self.list_articles(query, limit).await
    }
}

#[async_trait(?Send)]
impl<A: AdminApi + ?Sized> ListSource<Category> for A {
    async fn fetch_page(&self, query: &ListQuery, limit: u32) -> ApiResult<Page<Category>> {
        self.list_categories(query, limit).await
    }
}

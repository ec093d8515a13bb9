//! HTTP Implementation
//!
//! reqwest client against the REST API. Authenticated endpoints take the
//! bearer token from the injected `Session`; without one they fail with
//! `ApiError::Unauthorized` before touching the network.

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, info};

use super::traits::AdminApi;
use crate::config::AdminConfig;
use crate::domain::{
    ApiError, ApiResult, Article, ArticleInput, Category, CategoryInput, Credentials, Envelope,
    ImageUpload, LoginGrant, Page, Profile,
};
use crate::list_query::ListQuery;
use crate::session::Session;

#[derive(Deserialize)]
struct CreatedId {
    id: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Uploaded {
    image_url: String,
}

/// REST client bound to one API root and one session
#[derive(Clone)]
pub struct HttpApi {
    client: Client,
    base_url: String,
    session: Session,
}

impl HttpApi {
    pub fn new(config: &AdminConfig, session: Session) -> ApiResult<Self> {
        Url::parse(&config.api_base_url)
            .map_err(|e| ApiError::Config(format!("{}: {}", config.api_base_url, e)))?;
        Ok(Self {
            client: Client::new(),
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            session,
        })
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorized(&self, request: RequestBuilder) -> ApiResult<RequestBuilder> {
        let token = self.session.token().ok_or(ApiError::Unauthorized)?;
        Ok(request.bearer_auth(token))
    }

    async fn send_json<T: DeserializeOwned>(request: RequestBuilder) -> ApiResult<T> {
        let body = Self::send(request).await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn send(request: RequestBuilder) -> ApiResult<String> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;
        if status.is_success() {
            Ok(body)
        } else {
            debug!(status = status.as_u16(), "API request failed");
            Err(ApiError::from_status(status.as_u16(), &body))
        }
    }
}

/// Non-empty filters only; the API treats a missing key as "any"
fn list_params(pairs: &[(&'static str, &str)], page: u32, limit: u32) -> Vec<(&'static str, String)> {
    let mut params: Vec<(&'static str, String)> = pairs
        .iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(key, value)| (*key, value.to_string()))
        .collect();
    params.push(("page", page.to_string()));
    params.push(("limit", limit.to_string()));
    params
}

#[async_trait(?Send)]
impl AdminApi for HttpApi {
    async fn list_categories(&self, query: &ListQuery, limit: u32) -> ApiResult<Page<Category>> {
        let params = list_params(&[("search", query.search_text.as_str())], query.page, limit);
        Self::send_json(self.client.get(self.url("/categories")).query(&params)).await
    }

    async fn list_articles(&self, query: &ListQuery, limit: u32) -> ApiResult<Page<Article>> {
        let category = query.category_filter.as_deref().unwrap_or("");
        let params = list_params(
            &[("category", category), ("title", query.search_text.as_str())],
            query.page,
            limit,
        );
        Self::send_json(self.client.get(self.url("/articles")).query(&params)).await
    }

    async fn get_article(&self, id: &str) -> ApiResult<Option<Article>> {
        let request = self.client.get(self.url(&format!("/articles/{}", id)));
        let request = match self.session.token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        };
        match Self::send_json::<Option<Envelope<Article>>>(request).await {
            Ok(found) => Ok(found.map(Envelope::into_inner)),
            Err(ApiError::NotFound) => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn create_article(&self, input: &ArticleInput) -> ApiResult<String> {
        info!(title = %input.title, "Creating article");
        let request = self.authorized(self.client.post(self.url("/articles")).json(input))?;
        let created: Envelope<CreatedId> = Self::send_json(request).await?;
        Ok(created.into_inner().id)
    }

    async fn update_article(&self, id: &str, input: &ArticleInput) -> ApiResult<()> {
        info!(id, "Updating article");
        let request = self.client.put(self.url(&format!("/articles/{}", id))).json(input);
        Self::send(self.authorized(request)?).await.map(|_| ())
    }

    async fn delete_article(&self, id: &str) -> ApiResult<()> {
        info!(id, "Deleting article");
        let request = self.client.delete(self.url(&format!("/articles/{}", id)));
        Self::send(self.authorized(request)?).await.map(|_| ())
    }

    async fn create_category(&self, input: &CategoryInput) -> ApiResult<()> {
        info!(name = %input.name, "Creating category");
        let request = self.client.post(self.url("/categories")).json(input);
        Self::send(self.authorized(request)?).await.map(|_| ())
    }

    async fn update_category(&self, id: &str, input: &CategoryInput) -> ApiResult<()> {
        info!(id, "Updating category");
        let request = self.client.put(self.url(&format!("/categories/{}", id))).json(input);
        Self::send(self.authorized(request)?).await.map(|_| ())
    }

    async fn delete_category(&self, id: &str) -> ApiResult<()> {
        info!(id, "Deleting category");
        let request = self.client.delete(self.url(&format!("/categories/{}", id)));
        Self::send(self.authorized(request)?).await.map(|_| ())
    }

    async fn upload_image(&self, image: &ImageUpload) -> ApiResult<String> {
        info!(file = %image.file_name, bytes = image.bytes.len(), "Uploading image");
        let part = Part::bytes(image.bytes.clone())
            .file_name(image.file_name.clone())
            .mime_str(&image.mime_type)?;
        let request = self
            .client
            .post(self.url("/upload"))
            .multipart(Form::new().part("image", part));
        let uploaded: Uploaded = Self::send_json(self.authorized(request)?).await?;
        Ok(uploaded.image_url)
    }

    async fn profile(&self) -> ApiResult<Profile> {
        let request = self.authorized(self.client.get(self.url("/auth/profile")))?;
        Self::send_json(request).await
    }

    async fn login(&self, credentials: &Credentials) -> ApiResult<LoginGrant> {
        info!(username = %credentials.username, "Signing in");
        Self::send_json(self.client.post(self.url("/auth/login")).json(credentials)).await
    }
}

//! HTTP Client Tests
//!
//! Exercised against a local mockito server.

use mockito::{Matcher, Server};

use super::{AdminApi, HttpApi};
use crate::config::AdminConfig;
use crate::domain::{ApiError, ArticleInput, CategoryInput, ImageUpload};
use crate::list_query::ListQuery;
use crate::session::Session;

fn api_for(server: &Server, token: Option<&str>) -> HttpApi {
    let session = Session::in_memory();
    if let Some(token) = token {
        session.sign_in(token);
    }
    let config = AdminConfig::default().with_api_base_url(server.url());
    HttpApi::new(&config, session).expect("valid base url")
}

fn input(image_url: Option<&str>) -> ArticleInput {
    ArticleInput {
        title: "Hello".to_string(),
        content: "<p>World</p>".to_string(),
        category_id: "c1".to_string(),
        image_url: image_url.map(str::to_string),
    }
}

#[test]
fn test_rejects_invalid_base_url() {
    let config = AdminConfig::default().with_api_base_url("not a url");
    assert!(matches!(
        HttpApi::new(&config, Session::in_memory()),
        Err(ApiError::Config(_))
    ));
}

#[tokio::test]
async fn test_list_articles_sends_filters() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/articles")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("category".into(), "c1".into()),
            Matcher::UrlEncoded("title".into(), "rust".into()),
            Matcher::UrlEncoded("page".into(), "2".into()),
            Matcher::UrlEncoded("limit".into(), "10".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
                "data": [{
                    "id": "a1",
                    "title": "Rust",
                    "categoryId": "c1",
                    "imageUrl": null,
                    "createdAt": "2025-04-19T04:21:34.221Z",
                    "category": {"id": "c1", "name": "Tech"}
                }],
                "total": 11,
                "page": 2,
                "limit": 10,
                "totalPages": 2
            }"#,
        )
        .create_async()
        .await;

    let api = api_for(&server, None);
    let query = ListQuery {
        search_text: "rust".to_string(),
        category_filter: Some("c1".to_string()),
        page: 2,
    };
    let page = api.list_articles(&query, 10).await.unwrap();

    mock.assert_async().await;
    assert_eq!(page.total, 11);
    assert_eq!(page.total_pages, 2);
    assert_eq!(page.data[0].category_name(), "Tech");
}

#[tokio::test]
async fn test_list_categories_omits_empty_search() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/categories")
        .match_query(Matcher::Regex("^page=1&limit=10$".into()))
        .with_status(200)
        .with_body(r#"{"data": [], "totalData": 0, "totalPages": 1}"#)
        .create_async()
        .await;

    let api = api_for(&server, None);
    let page = api.list_categories(&ListQuery::default(), 10).await.unwrap();

    mock.assert_async().await;
    assert!(page.data.is_empty());
}

#[tokio::test]
async fn test_get_article_not_found_is_none() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/articles/missing")
        .with_status(404)
        .create_async()
        .await;

    let api = api_for(&server, Some("tok"));
    assert_eq!(api.get_article("missing").await.unwrap(), None);
}

#[tokio::test]
async fn test_get_article_null_body_is_none() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/articles/a1")
        .with_status(200)
        .with_body("null")
        .create_async()
        .await;

    let api = api_for(&server, Some("tok"));
    assert_eq!(api.get_article("a1").await.unwrap(), None);
}

#[tokio::test]
async fn test_create_article_reads_wrapped_id() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/articles")
        .match_header("authorization", "Bearer tok")
        .match_body(Matcher::Json(serde_json::json!({
            "title": "Hello",
            "content": "<p>World</p>",
            "categoryId": "c1"
        })))
        .with_status(201)
        .with_body(r#"{"data": {"id": "new-id", "title": "Hello"}}"#)
        .create_async()
        .await;

    let api = api_for(&server, Some("tok"));
    let id = api.create_article(&input(None)).await.unwrap();

    mock.assert_async().await;
    assert_eq!(id, "new-id");
}

#[tokio::test]
async fn test_authenticated_call_without_token_skips_network() {
    let mut server = Server::new_async().await;
    let mock = server.mock("DELETE", Matcher::Any).expect(0).create_async().await;

    let api = api_for(&server, None);
    let err = api.delete_article("a1").await.unwrap_err();

    mock.assert_async().await;
    assert_eq!(err, ApiError::Unauthorized);
}

#[tokio::test]
async fn test_error_body_message_is_kept() {
    let mut server = Server::new_async().await;
    server
        .mock("PUT", "/categories/c1")
        .with_status(400)
        .with_body(r#"{"error": "Name already exists"}"#)
        .create_async()
        .await;

    let api = api_for(&server, Some("tok"));
    let err = api
        .update_category("c1", &CategoryInput { name: "Tech".to_string() })
        .await
        .unwrap_err();

    assert_eq!(err.user_message(), "Name already exists");
}

#[tokio::test]
async fn test_upload_image_returns_url() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/upload")
        .match_header("authorization", "Bearer tok")
        .match_header("content-type", Matcher::Regex("^multipart/form-data".into()))
        .match_body(Matcher::Regex(r#"name="image"; filename="cat.png""#.into()))
        .with_status(200)
        .with_body(r#"{"imageUrl": "https://cdn.example/cat.png"}"#)
        .create_async()
        .await;

    let api = api_for(&server, Some("tok"));
    let image = ImageUpload {
        file_name: "cat.png".to_string(),
        mime_type: "image/png".to_string(),
        bytes: b"fake-png-bytes".to_vec(),
    };
    let url = api.upload_image(&image).await.unwrap();

    mock.assert_async().await;
    assert_eq!(url, "https://cdn.example/cat.png");
}

#[tokio::test]
async fn test_profile_unauthorized() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/auth/profile")
        .with_status(401)
        .with_body(r#"{"message": "jwt expired"}"#)
        .create_async()
        .await;

    let api = api_for(&server, Some("expired"));
    assert_eq!(api.profile().await.unwrap_err(), ApiError::Unauthorized);
}

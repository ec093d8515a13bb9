//! Hash Routes
//!
//! The dashboard is a static bundle, so every view lives behind a
//! `#/...` fragment.

use percent_encoding::{percent_decode_str, utf8_percent_encode, NON_ALPHANUMERIC};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Articles,
    CreateArticle,
    EditArticle(String),
    Categories,
    Login,
    /// Anything else; rendered as the article list
    Unknown(String),
}

impl Route {
    /// Parse `location.hash` (with or without the leading `#`)
    pub fn parse(hash: &str) -> Self {
        let path = hash.trim_start_matches('#').trim_start_matches('/');
        let path = path.split('?').next().unwrap_or_default().trim_end_matches('/');
        let segments: Vec<&str> = path.split('/').collect();

        match segments.as_slice() {
            [""] => Route::Articles,
            ["articles", "create"] => Route::CreateArticle,
            ["articles", "edit", id] if !id.is_empty() => {
                Route::EditArticle(percent_decode_str(id).decode_utf8_lossy().into_owned())
            }
            ["category"] => Route::Categories,
            ["logins"] => Route::Login,
            _ => Route::Unknown(path.to_string()),
        }
    }

    pub fn to_hash(&self) -> String {
        match self {
            Route::Articles | Route::Unknown(_) => "#/".to_string(),
            Route::CreateArticle => "#/articles/create".to_string(),
            Route::EditArticle(id) => {
                format!("#/articles/edit/{}", utf8_percent_encode(id, NON_ALPHANUMERIC))
            }
            Route::Categories => "#/category".to_string(),
            Route::Login => "#/logins".to_string(),
        }
    }

    /// Every route except the login screen sits behind the session guard
    pub fn requires_session(&self) -> bool {
        !matches!(self, Route::Login)
    }

    /// Login renders without the sidebar and navbar
    pub fn hides_chrome(&self) -> bool {
        matches!(self, Route::Login)
    }

    /// Navbar heading
    pub fn title(&self) -> &'static str {
        match self {
            Route::Articles | Route::Unknown(_) => "Articles",
            Route::CreateArticle => "Create Article",
            Route::EditArticle(_) => "Edit Article",
            Route::Categories => "Category",
            Route::Login => "Login",
        }
    }

    /// Which sidebar entry is highlighted
    pub fn section(&self) -> Option<Section> {
        match self {
            Route::Articles | Route::CreateArticle | Route::EditArticle(_) | Route::Unknown(_) => {
                Some(Section::Articles)
            }
            Route::Categories => Some(Section::Categories),
            Route::Login => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Articles,
    Categories,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_routes() {
        assert_eq!(Route::parse(""), Route::Articles);
        assert_eq!(Route::parse("#/"), Route::Articles);
        assert_eq!(Route::parse("#/articles/create"), Route::CreateArticle);
        assert_eq!(Route::parse("#/articles/edit/a1"), Route::EditArticle("a1".to_string()));
        assert_eq!(Route::parse("#/category/"), Route::Categories);
        assert_eq!(Route::parse("#/logins"), Route::Login);
    }

    #[test]
    fn test_unknown_route_falls_back_to_list() {
        let route = Route::parse("#/nowhere");
        assert_eq!(route, Route::Unknown("nowhere".to_string()));
        assert_eq!(route.to_hash(), "#/");
        assert!(route.requires_session());
    }

    #[test]
    fn test_edit_id_is_encoded() {
        let route = Route::EditArticle("a b/c".to_string());
        let hash = route.to_hash();
        assert_eq!(hash, "#/articles/edit/a%20b%2Fc");
        assert_eq!(Route::parse(&hash), route);
    }

    #[test]
    fn test_login_is_public_and_bare() {
        assert!(!Route::Login.requires_session());
        assert!(Route::Login.hides_chrome());
        assert!(!Route::Categories.hides_chrome());
        assert_eq!(Route::Categories.section(), Some(Section::Categories));
    }
}

//! Route matching module
//!
//! Maps an HTTP method and request path onto the endpoints this server
//! exposes. Matching is exact: no trailing-slash normalization and no
//! nested segments under `/article/{id}`.

use hyper::Method;

/// The endpoints this server exposes.
///
/// Id segments are carried as raw strings; each handler parses its own id
/// so parse failures keep their endpoint-specific error message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    ListArticles,
    GetArticle(String),
    CreateArticle,
    DeleteArticle(String),
}

/// Find the route for a method and path.
///
/// The homepage accepts any method; every other endpoint is bound to one.
/// Returns None both for unknown paths and for known paths hit with the
/// wrong method; `allowed_methods` distinguishes the two.
pub fn match_route(method: &Method, path: &str) -> Option<Route> {
    match path {
        "/" => Some(Route::Home),
        "/articles" if *method == Method::GET => Some(Route::ListArticles),
        "/article" if *method == Method::POST => Some(Route::CreateArticle),
        _ => {
            let id = article_id_segment(path)?;
            match *method {
                Method::GET => Some(Route::GetArticle(id.to_string())),
                Method::DELETE => Some(Route::DeleteArticle(id.to_string())),
                _ => None,
            }
        }
    }
}

/// Methods accepted on a path, for the Allow header of 405 and OPTIONS
/// responses. None means the path is not routable at all.
pub fn allowed_methods(path: &str) -> Option<&'static str> {
    match path {
        "/" => Some("GET, POST, DELETE, OPTIONS"),
        "/articles" => Some("GET, OPTIONS"),
        "/article" => Some("POST, OPTIONS"),
        _ => article_id_segment(path).map(|_| "GET, DELETE, OPTIONS"),
    }
}

/// Extract the single id segment of an `/article/{id}` path.
fn article_id_segment(path: &str) -> Option<&str> {
    let id = path.strip_prefix("/article/")?;
    if id.is_empty() || id.contains('/') {
        return None;
    }
    Some(id)
}

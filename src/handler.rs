use http_body_util::{BodyExt, Full};
use hyper::body::{Body as _, Bytes};
use hyper::{HeaderMap, Method, Request, Response, StatusCode, Version};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use crate::articles;
use crate::config::AppState;
use crate::logger;
use crate::response;
use crate::routing::{self, Route};

/// Validate Content-Length header against max body size
/// Returns Some(413 response) if too large, None otherwise
fn check_body_size(headers: &HeaderMap, max_body_size: u64) -> Option<Response<Full<Bytes>>> {
    let content_length = headers.get("content-length")?;
    content_length.to_str().map_or_else(
        |_| {
            logger::log_warning("Content-Length header contains non-ASCII characters");
            None
        },
        |size_str| match size_str.parse::<u64>() {
            Ok(size) if size > max_body_size => {
                logger::log_error(&format!(
                    "Request body too large: {size} bytes (max: {max_body_size})"
                ));
                Some(response::build_413_response())
            }
            Err(_) => {
                logger::log_warning(&format!(
                    "Invalid Content-Length value: '{size_str}', skipping size check"
                ));
                None
            }
            _ => None,
        },
    )
}

fn format_version(version: Version) -> &'static str {
    match version {
        Version::HTTP_10 => "1.0",
        Version::HTTP_2 => "2",
        _ => "1.1",
    }
}

/// Entry point for every request on a served connection.
///
/// Enforces the body size limit, buffers the body (only the create
/// endpoint reads it), dispatches through the route table and writes one
/// access log line per request. Always answers; never fails the connection.
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    peer_addr: SocketAddr,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let started = Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let version = format_version(req.version());

    if state.config.logging.show_headers {
        logger::log_headers_count(req.headers().len());
    }

    let response = match check_body_size(req.headers(), state.config.http.max_body_size) {
        Some(resp) => resp,
        None => match req.into_body().collect().await {
            Ok(collected) => {
                let body = collected.to_bytes();
                route_request(&method, &path, &body, &state).await
            }
            Err(e) => {
                logger::log_error(&format!("Failed to read request body: {e}"));
                response::error_message(
                    StatusCode::BAD_REQUEST,
                    "Invalid request body",
                    &state.config.http,
                )
            }
        },
    };

    if state.config.logging.access_log {
        let mut entry =
            logger::AccessLogEntry::new(peer_addr.ip().to_string(), method.to_string(), path);
        entry.http_version = version.to_string();
        entry.status = response.status().as_u16();
        entry.body_bytes = response
            .body()
            .size_hint()
            .exact()
            .and_then(|n| usize::try_from(n).ok())
            .unwrap_or(0);
        entry.request_time_us =
            u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);
        logger::log_access(&entry, &state.config.logging.access_log_format);
    }

    Ok(response)
}

/// Dispatch a request to its endpoint handler.
///
/// OPTIONS is answered before routing; an unmatched path is a 404 and a
/// known path hit with an unsupported method is a 405 with an Allow header.
pub async fn route_request(
    method: &Method,
    path: &str,
    body: &Bytes,
    state: &Arc<AppState>,
) -> Response<Full<Bytes>> {
    if *method == Method::OPTIONS {
        return match routing::allowed_methods(path) {
            Some(allow) => response::build_options_response(allow, state.config.http.enable_cors),
            None => response::build_404_response(),
        };
    }

    match routing::match_route(method, path) {
        Some(Route::Home) => articles::home(state),
        Some(Route::ListArticles) => articles::list_articles(state).await,
        Some(Route::GetArticle(id)) => articles::get_article(&id, state).await,
        Some(Route::CreateArticle) => articles::create_article(body, state).await,
        Some(Route::DeleteArticle(id)) => articles::delete_article(&id, state).await,
        None => match routing::allowed_methods(path) {
            Some(allow) => {
                logger::log_warning(&format!("Method not allowed: {method} {path}"));
                response::build_405_response(allow)
            }
            None => response::build_404_response(),
        },
    }
}

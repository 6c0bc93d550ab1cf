// Article endpoint handlers
// Each handler parses its input, touches the store and serializes a response

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};
use std::sync::Arc;

use crate::config::AppState;
use crate::logger;
use crate::response;
use crate::store::NewArticle;

/// GET /: plain-text greeting.
pub fn home(state: &Arc<AppState>) -> Response<Full<Bytes>> {
    logger::log_endpoint_hit("home");
    response::text_response(
        StatusCode::OK,
        "Hello! welcome to my homepage",
        &state.config.http,
    )
}

/// GET /articles: all articles in insertion order.
pub async fn list_articles(state: &Arc<AppState>) -> Response<Full<Bytes>> {
    logger::log_endpoint_hit("list_articles");
    let store = state.store.read().await;
    response::json_response(StatusCode::OK, store.list(), &state.config.http)
}

/// GET /article/{id}: a single article.
///
/// A non-integer id and an unknown id both answer 400, with distinct
/// messages.
pub async fn get_article(raw_id: &str, state: &Arc<AppState>) -> Response<Full<Bytes>> {
    logger::log_endpoint_hit("get_article");

    let Ok(id) = raw_id.parse::<u64>() else {
        logger::log_warning(&format!("Unparseable article id: '{raw_id}'"));
        return response::error_message(
            StatusCode::BAD_REQUEST,
            "Wrong request format",
            &state.config.http,
        );
    };

    let store = state.store.read().await;
    match store.find_by_id(id) {
        Some(article) => response::json_response(StatusCode::OK, article, &state.config.http),
        None => response::error_message(
            StatusCode::BAD_REQUEST,
            "No matched article found",
            &state.config.http,
        ),
    }
}

/// POST /article: create a record and answer with the whole collection.
///
/// A client-supplied id is ignored; the store assigns one. Unparseable
/// JSON is rejected with a 400 rather than tolerated.
pub async fn create_article(body: &Bytes, state: &Arc<AppState>) -> Response<Full<Bytes>> {
    logger::log_endpoint_hit("create_article");

    let payload: NewArticle = match serde_json::from_slice(body) {
        Ok(payload) => payload,
        Err(e) => {
            logger::log_warning(&format!("Rejected create payload: {e}"));
            return response::error_message(
                StatusCode::BAD_REQUEST,
                "Invalid request body",
                &state.config.http,
            );
        }
    };

    let mut store = state.store.write().await;
    let article = store.create(payload);
    println!("[Store] Created article id {}", article.id);

    response::json_response(StatusCode::OK, store.list(), &state.config.http)
}

/// DELETE /article/{id}: remove a record and answer with the remainder.
pub async fn delete_article(raw_id: &str, state: &Arc<AppState>) -> Response<Full<Bytes>> {
    logger::log_endpoint_hit("delete_article");

    let Ok(id) = raw_id.parse::<u64>() else {
        logger::log_warning(&format!("Unparseable article id: '{raw_id}'"));
        return response::error_message(StatusCode::BAD_REQUEST, "Invalid ID", &state.config.http);
    };

    let mut store = state.store.write().await;
    if store.delete_by_id(id) {
        println!("[Store] Deleted article id {id}");
        response::json_response(StatusCode::OK, store.list(), &state.config.http)
    } else {
        response::error_message(
            StatusCode::NOT_FOUND,
            "No record deleted",
            &state.config.http,
        )
    }
}

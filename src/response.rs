//! HTTP response building module
//!
//! Builders for every response this server produces, decoupled from the
//! endpoint logic. Builders never panic: construction failures are logged
//! and degrade to a bare fallback response.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};
use serde::Serialize;

use crate::config::HttpConfig;
use crate::logger;

fn log_build_error(kind: &str, err: &hyper::http::Error) {
    logger::log_error(&format!("Failed to build {kind} response: {err}"));
}

/// Common response builder carrying the Server header and, when enabled,
/// the CORS allow-origin header.
fn base_builder(
    status: StatusCode,
    content_type: &str,
    http: &HttpConfig,
) -> hyper::http::response::Builder {
    let mut builder = Response::builder()
        .status(status)
        .header("Content-Type", content_type)
        .header("Server", &http.server_name);

    if http.enable_cors {
        builder = builder.header("Access-Control-Allow-Origin", "*");
    }

    builder
}

/// Serialize a value into a JSON response.
pub fn json_response<T: Serialize + ?Sized>(
    status: StatusCode,
    body: &T,
    http: &HttpConfig,
) -> Response<Full<Bytes>> {
    let json = match serde_json::to_string(body) {
        Ok(j) => j,
        Err(e) => {
            logger::log_error(&format!("Failed to serialize response: {e}"));
            return base_builder(
                StatusCode::INTERNAL_SERVER_ERROR,
                "application/json",
                http,
            )
            .body(Full::new(Bytes::from(
                r#"{"error":"Internal server error"}"#,
            )))
            .unwrap_or_else(|err| {
                log_build_error("500", &err);
                Response::new(Full::new(Bytes::from("Error")))
            });
        }
    };

    base_builder(status, "application/json", http)
        .body(Full::new(Bytes::from(json)))
        .unwrap_or_else(|e| {
            log_build_error("JSON", &e);
            Response::new(Full::new(Bytes::from("Error")))
        })
}

/// The `{"message": ...}` error envelope shared by all endpoint failures.
pub fn error_message(
    status: StatusCode,
    message: &str,
    http: &HttpConfig,
) -> Response<Full<Bytes>> {
    let body = serde_json::json!({ "message": message });
    base_builder(status, "application/json", http)
        .body(Full::new(Bytes::from(body.to_string())))
        .unwrap_or_else(|e| {
            log_build_error("error", &e);
            Response::new(Full::new(Bytes::from("Error")))
        })
}

/// Plain-text response (the homepage greeting).
pub fn text_response(status: StatusCode, text: &str, http: &HttpConfig) -> Response<Full<Bytes>> {
    base_builder(status, "text/plain; charset=utf-8", http)
        .body(Full::new(Bytes::from(text.to_string())))
        .unwrap_or_else(|e| {
            log_build_error("text", &e);
            Response::new(Full::new(Bytes::from("Error")))
        })
}

/// Build 404 Not Found response
pub fn build_404_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(404)
        .header("Content-Type", "text/plain")
        .body(Full::new(Bytes::from("404 Not Found")))
        .unwrap_or_else(|e| {
            log_build_error("404", &e);
            Response::new(Full::new(Bytes::from("404 Not Found")))
        })
}

/// Build 405 Method Not Allowed response
pub fn build_405_response(allow: &str) -> Response<Full<Bytes>> {
    Response::builder()
        .status(405)
        .header("Content-Type", "text/plain")
        .header("Allow", allow)
        .body(Full::new(Bytes::from("405 Method Not Allowed")))
        .unwrap_or_else(|e| {
            log_build_error("405", &e);
            Response::new(Full::new(Bytes::from("405 Method Not Allowed")))
        })
}

/// Build 413 Payload Too Large response
pub fn build_413_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(413)
        .header("Content-Type", "text/plain")
        .body(Full::new(Bytes::from("413 Payload Too Large")))
        .unwrap_or_else(|e| {
            log_build_error("413", &e);
            Response::new(Full::new(Bytes::from("413 Payload Too Large")))
        })
}

/// Build OPTIONS response (preflight request)
pub fn build_options_response(allow: &str, enable_cors: bool) -> Response<Full<Bytes>> {
    let mut builder = Response::builder().status(204).header("Allow", allow);

    if enable_cors {
        builder = builder
            .header("Access-Control-Allow-Origin", "*")
            .header("Access-Control-Allow-Methods", allow)
            .header("Access-Control-Allow-Headers", "Content-Type")
            .header("Access-Control-Max-Age", "86400");
    }

    builder.body(Full::new(Bytes::new())).unwrap_or_else(|e| {
        log_build_error("OPTIONS", &e);
        Response::new(Full::new(Bytes::new()))
    })
}

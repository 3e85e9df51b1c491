#![deny(missing_docs)]
//! A web server for the classic cipher toolkit, one page per cipher.

use askama::Template;
use axum::{
    Form, Json, Router,
    extract::{
        Path, Query,
        rejection::{FormRejection, JsonRejection},
    },
    http::{StatusCode, Uri, header},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use cipher_core::{CipherError, CipherKind, Mode, playfair};
use config::WebConfig;
use local_ip_address::local_ip;
use log::{error, info, warn};
use pages::{CipherPage, IndexPage};
use rust_embed::RustEmbed;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tower_http::cors::CorsLayer;

mod config;
mod pages;

#[derive(RustEmbed)]
#[folder = "static/"]
struct Asset;

/// Fields of the encrypt form.
#[derive(Deserialize)]
struct EncryptForm {
    #[serde(rename = "inputPlainText")]
    text: String,
    #[serde(rename = "inputKeyPlain")]
    key: String,
}

/// Fields of the decrypt form.
#[derive(Deserialize)]
struct DecryptForm {
    #[serde(rename = "inputCipherText")]
    text: String,
    #[serde(rename = "inputKeyCipher")]
    key: String,
}

/// A key in a JSON request, either a number like `3` or a string like `"3"`
/// or `"LEMON"`. Numbers are handed to the cipher as typed, so `3.5` fails
/// key parsing rather than deserialization.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawKey {
    Number(serde_json::Number),
    Text(String),
}

impl RawKey {
    fn into_string(self) -> String {
        match self {
            Self::Number(value) => value.to_string(),
            Self::Text(value) => value,
        }
    }
}

#[derive(Deserialize)]
struct OperationRequest {
    text: String,
    key: RawKey,
}

#[derive(Serialize)]
struct OperationResponse {
    cipher: CipherKind,
    mode: Mode,
    result: String,
}

#[derive(Deserialize)]
struct MatrixQuery {
    #[serde(default)]
    key: String,
}

/// Failures that end a request early.
#[derive(Debug, thiserror::Error)]
enum AppError {
    #[error(transparent)]
    Cipher(#[from] CipherError),
    #[error(transparent)]
    Form(#[from] FormRejection),
    #[error(transparent)]
    Json(#[from] JsonRejection),
    #[error("failed to render page: {0}")]
    Render(#[from] askama::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::Cipher(CipherError::UnknownCipher { .. } | CipherError::UnknownMode { .. }) => {
                StatusCode::NOT_FOUND
            }
            Self::Cipher(_) => StatusCode::BAD_REQUEST,
            Self::Form(rejection) => rejection.status(),
            Self::Json(rejection) => rejection.status(),
            Self::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status.is_server_error() {
            error!("{self}");
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[tokio::main]
async fn main() {
    env_logger::init();
    let config = WebConfig::from_env().unwrap_or_else(|e| {
        error!("Invalid configuration: {e}");
        std::process::exit(1);
    });

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await.unwrap_or_else(|e| {
        error!("Failed to bind {addr}: {e}");
        std::process::exit(1);
    });

    println!("listening on:");
    if let Ok(my_local_ip) = local_ip() {
        println!("  - http://{my_local_ip}:{}/", config.port);
    }
    println!("  - http://127.0.0.1:{}/", config.port);

    if let Err(e) = axum::serve(listener, app()).await {
        error!("Server stopped: {e}");
        std::process::exit(1);
    }
}

/// Builds the router. Kept apart from `main` so tests can drive it directly.
fn app() -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/index.html", get(index_handler))
        .route("/api/playfair/matrix", get(playfair_matrix_handler))
        .route("/api/{cipher}/{mode}", post(operation_handler))
        .route("/{cipher}", get(cipher_page_handler))
        .route("/{cipher}/encrypt", post(encrypt_form_handler))
        .route("/{cipher}/decrypt", post(decrypt_form_handler))
        .layer(CorsLayer::permissive())
        .fallback(static_path)
}

fn render<T: Template>(status: StatusCode, page: &T) -> Result<Response, AppError> {
    Ok((status, Html(page.render()?)).into_response())
}

async fn index_handler() -> Result<Response, AppError> {
    render(StatusCode::OK, &IndexPage::new())
}

async fn cipher_page_handler(Path(cipher): Path<String>) -> Result<Response, AppError> {
    let kind: CipherKind = cipher.parse()?;
    render(StatusCode::OK, &CipherPage::new(kind))
}

async fn encrypt_form_handler(
    Path(cipher): Path<String>,
    form: Result<Form<EncryptForm>, FormRejection>,
) -> Result<Response, AppError> {
    let Form(form) = form?;
    submit_form(&cipher, Mode::Encrypt, &form.text, &form.key)
}

async fn decrypt_form_handler(
    Path(cipher): Path<String>,
    form: Result<Form<DecryptForm>, FormRejection>,
) -> Result<Response, AppError> {
    let Form(form) = form?;
    submit_form(&cipher, Mode::Decrypt, &form.text, &form.key)
}

/// Runs a form submission and renders the cipher page with its outcome. A
/// rejected key or text is shown on the page with a 400 status.
fn submit_form(cipher: &str, mode: Mode, text: &str, key: &str) -> Result<Response, AppError> {
    let kind: CipherKind = cipher.parse()?;
    let page = CipherPage::new(kind).with_submission(mode, text, key);

    match cipher_core::run(kind, mode, text, key) {
        Ok(result) => {
            info!("Served {} {} request.", kind.slug(), mode);
            render(StatusCode::OK, &page.with_result(result))
        }
        Err(e) => {
            warn!("Rejected {} {} request: {e}", kind.slug(), mode);
            render(StatusCode::BAD_REQUEST, &page.with_error(e.to_string()))
        }
    }
}

async fn operation_handler(
    Path((cipher, mode)): Path<(String, String)>,
    payload: Result<Json<OperationRequest>, JsonRejection>,
) -> Result<Json<OperationResponse>, AppError> {
    let kind: CipherKind = cipher.parse()?;
    let mode: Mode = mode.parse()?;
    let Json(payload) = payload?;
    let result = cipher_core::run(kind, mode, &payload.text, &payload.key.into_string())?;
    Ok(Json(OperationResponse {
        cipher: kind,
        mode,
        result,
    }))
}

async fn playfair_matrix_handler(Query(query): Query<MatrixQuery>) -> impl IntoResponse {
    let matrix = playfair::create_matrix(&query.key);
    Json(json!({ "key": query.key, "matrix": matrix.rows() }))
}

async fn static_path(uri: Uri) -> Response {
    let path = uri.path().trim_start_matches('/');
    let path = path.strip_prefix("assets/").unwrap_or(path);

    match Asset::get(path) {
        Some(content) => {
            let mime = mime_guess::from_path(path).first_or_octet_stream();
            ([(header::CONTENT_TYPE, mime.to_string())], content.data).into_response()
        }
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::Request;
    use tower::ServiceExt;

    async fn send(request: Request<Body>) -> (StatusCode, String) {
        let response = app().oneshot(request).await.expect("router is infallible");
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body is readable");
        (status, String::from_utf8_lossy(&body).into_owned())
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::get(uri).body(Body::empty()).expect("valid request")
    }

    fn form_request(uri: &str, body: &'static str) -> Request<Body> {
        Request::post(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body))
            .expect("valid request")
    }

    fn json_request(uri: &str, body: &serde_json::Value) -> Request<Body> {
        Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("valid request")
    }

    #[tokio::test]
    async fn home_links_every_cipher() {
        let (status, body) = send(get_request("/")).await;
        assert_eq!(status, StatusCode::OK);
        for kind in CipherKind::ALL {
            assert!(body.contains(&format!("href=\"/{}\"", kind.slug())));
        }
        let (status, _) = send(get_request("/index.html")).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn cipher_page_has_both_forms() {
        let (status, body) = send(get_request("/playfair")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("action=\"/playfair/encrypt\""));
        assert!(body.contains("action=\"/playfair/decrypt\""));
        assert!(body.contains("name=\"inputKeyCipher\""));
    }

    #[tokio::test]
    async fn unknown_cipher_is_not_found() {
        let (status, body) = send(get_request("/enigma")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("unknown cipher"));
        let (status, _) = send(form_request("/enigma/encrypt", "inputPlainText=A&inputKeyPlain=1")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn caesar_form_renders_result_and_mode() {
        let (status, body) = send(form_request(
            "/caesar/encrypt",
            "inputPlainText=Hello%2C+World%21&inputKeyPlain=3",
        ))
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("<pre id=\"result\">Khoor, Zruog!</pre>"));
        assert!(body.contains("data-mode=\"encrypt\""));
    }

    #[tokio::test]
    async fn rail_fence_decrypt_form() {
        let (status, body) = send(form_request(
            "/railfence/decrypt",
            "inputCipherText=WECRLTEERDSOEEFEAOCAIVDEN&inputKeyCipher=3",
        ))
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("WEAREDISCOVEREDFLEEATONCE</pre>"));
        assert!(body.contains("data-mode=\"decrypt\""));
    }

    #[tokio::test]
    async fn rejected_key_is_shown_on_the_page() {
        let (status, body) = send(form_request(
            "/railfence/encrypt",
            "inputPlainText=HELLO&inputKeyPlain=1",
        ))
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.contains("at least 2"));
        assert!(!body.contains("id=\"result\""));

        let (status, body) = send(form_request(
            "/caesar/encrypt",
            "inputPlainText=HELLO&inputKeyPlain=abc",
        ))
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.contains("invalid key"));
    }

    #[tokio::test]
    async fn submitted_text_is_escaped() {
        let (status, body) = send(form_request(
            "/caesar/encrypt",
            "inputPlainText=%3Cb%3E&inputKeyPlain=0",
        ))
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(!body.contains("<b>"));
        assert!(body.contains("&lt;b&gt;"));
    }

    #[tokio::test]
    async fn json_api_accepts_numeric_and_text_keys() {
        let (status, body) = send(json_request(
            "/api/transposition/encrypt",
            &json!({ "text": "HELLOWORLD", "key": 3 }),
        ))
        .await;
        assert_eq!(status, StatusCode::OK);
        let value: serde_json::Value = serde_json::from_str(&body).expect("json body");
        assert_eq!(value["cipher"], "transposition");
        assert_eq!(value["mode"], "encrypt");
        assert_eq!(value["result"], "HLODEORLWL");

        let (status, body) = send(json_request(
            "/api/vigenere/decrypt",
            &json!({ "text": "LXFOPVEFRNHR", "key": "LEMON" }),
        ))
        .await;
        assert_eq!(status, StatusCode::OK);
        let value: serde_json::Value = serde_json::from_str(&body).expect("json body");
        assert_eq!(value["result"], "ATTACKATDAWN");
    }

    #[tokio::test]
    async fn json_api_errors() {
        let (status, body) = send(json_request(
            "/api/caesar/sideways",
            &json!({ "text": "ABC", "key": 1 }),
        ))
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("unknown mode"));

        let (status, body) = send(json_request(
            "/api/transposition/decrypt",
            &json!({ "text": "ABC", "key": 0 }),
        ))
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let value: serde_json::Value = serde_json::from_str(&body).expect("json body");
        assert!(
            value["error"]
                .as_str()
                .is_some_and(|message| message.contains("positive integer"))
        );
    }

    #[tokio::test]
    async fn json_api_reports_non_integer_number_keys() {
        let (status, body) = send(json_request(
            "/api/caesar/encrypt",
            &json!({ "text": "ABC", "key": 3.5 }),
        ))
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let value: serde_json::Value = serde_json::from_str(&body).expect("json body");
        assert_eq!(value["error"], "invalid key '3.5': expected an integer");
    }

    #[tokio::test]
    async fn malformed_bodies_get_a_json_error() {
        let (status, body) = send(json_request(
            "/api/caesar/encrypt",
            &json!({ "text": "ABC" }),
        ))
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        let value: serde_json::Value = serde_json::from_str(&body).expect("json body");
        assert!(
            value["error"]
                .as_str()
                .is_some_and(|message| message.contains("missing field `key`"))
        );

        let (status, body) = send(form_request("/caesar/encrypt", "inputPlainText=ABC")).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        let value: serde_json::Value = serde_json::from_str(&body).expect("json body");
        assert!(
            value["error"]
                .as_str()
                .is_some_and(|message| message.contains("inputKeyPlain"))
        );
    }

    #[tokio::test]
    async fn playfair_matrix_endpoint() {
        let (status, body) = send(get_request("/api/playfair/matrix?key=MONARCHY")).await;
        assert_eq!(status, StatusCode::OK);
        let value: serde_json::Value = serde_json::from_str(&body).expect("json body");
        assert_eq!(value["key"], "MONARCHY");
        assert_eq!(value["matrix"][0], json!(["M", "O", "N", "A", "R"]));
        assert_eq!(value["matrix"][4], json!(["U", "V", "W", "X", "Z"]));
    }

    #[tokio::test]
    async fn static_assets_are_served() {
        let response = app()
            .oneshot(get_request("/assets/style.css"))
            .await
            .expect("router is infallible");
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            mime_guess::mime::TEXT_CSS.as_ref()
        );

        let (status, _) = send(get_request("/assets/missing.js")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}

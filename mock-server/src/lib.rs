//! An axum server imitating the Steam Web API.
//!
//! Serves a canned JSON or XML body per endpoint at
//! `/{interface}/{method}/{version}`, enforces the API key on the endpoints
//! that need one, and answers the way the live service does when something
//! is off: 403 for a missing or wrong key, 404 for an unknown method or
//! version, 400 for a missing parameter or an unknown format.

use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use serde::Deserialize;
use tokio::net::TcpListener;

pub mod fixtures;

pub use fixtures::{Fixture, FIXTURES};

/// The key accepted by [`app`].
pub const TEST_KEY: &str = "test-key";

const JSON_CONTENT_TYPE: &str = "application/json; charset=UTF-8";
const XML_CONTENT_TYPE: &str = "text/xml; charset=UTF-8";
const HTML_CONTENT_TYPE: &str = "text/html; charset=UTF-8";

const FORBIDDEN_BODY: &str = "<html><head><title>Forbidden</title></head><body><h1>Forbidden</h1>Access is denied. Retrying will not help. Please verify your <pre>key=</pre> parameter.</body></html>";
const NOT_FOUND_BODY: &str =
    "<html><head><title>Not Found</title></head><body><h1>Not Found</h1></body></html>";

#[derive(Clone)]
struct AppState {
    key: Arc<str>,
}

/// Query parameters every endpoint understands. The rest are kept by name.
#[derive(Debug, Deserialize)]
pub struct CommonParams {
    pub key: Option<String>,
    pub format: Option<String>,
    #[serde(flatten)]
    pub rest: HashMap<String, String>,
}

/// Router accepting [`TEST_KEY`].
pub fn app() -> Router {
    app_with_key(TEST_KEY)
}

pub fn app_with_key(key: &str) -> Router {
    Router::new()
        .route("/{interface}/{method}/{version}", get(dispatch))
        .with_state(AppState {
            key: Arc::from(key),
        })
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

pub async fn run_with_key(listener: TcpListener, key: &str) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with_key(key)).await
}

async fn dispatch(
    State(state): State<AppState>,
    Path((interface, method, version)): Path<(String, String, String)>,
    Query(params): Query<CommonParams>,
) -> Response {
    let Some(fixture) = fixtures::find(&interface, &method, &version) else {
        return html(StatusCode::NOT_FOUND, NOT_FOUND_BODY);
    };

    match params.key.as_deref() {
        Some(key) if key != &*state.key => return html(StatusCode::FORBIDDEN, FORBIDDEN_BODY),
        None | Some("") if fixture.key_required => {
            return html(StatusCode::FORBIDDEN, FORBIDDEN_BODY)
        }
        _ => {}
    }

    if let Some(missing) = fixture
        .required_params
        .iter()
        .find(|name| !params.rest.contains_key(**name))
    {
        return bad_request(&format!("Required parameter '{missing}' is missing"));
    }

    match params.format.as_deref().unwrap_or("json") {
        "json" => body(JSON_CONTENT_TYPE, fixture.json),
        "xml" => body(XML_CONTENT_TYPE, fixture.xml),
        other => bad_request(&format!("Unsupported output format '{other}'")),
    }
}

fn body(content_type: &'static str, body: &'static str) -> Response {
    (StatusCode::OK, [(header::CONTENT_TYPE, content_type)], body).into_response()
}

fn html(status: StatusCode, body: &'static str) -> Response {
    (status, [(header::CONTENT_TYPE, HTML_CONTENT_TYPE)], body).into_response()
}

fn bad_request(reason: &str) -> Response {
    let body = format!(
        "<html><head><title>Bad Request</title></head><body><h1>Bad Request</h1>{reason}</body></html>"
    );
    (
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, HTML_CONTENT_TYPE)],
        body,
    )
        .into_response()
}

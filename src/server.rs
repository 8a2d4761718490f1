//! Web server module for gastbuch.
//!
//! Wires the four routes (home, submit, stats, reset) into an axum `Router`,
//! wraps every route in the visit-counting middleware, and serves plain HTTP
//! on the configured port. All shared state lives in `state::AppState`;
//! handlers only ever see snapshots or go through its scoped-lock methods.
//!
use std::sync::Arc;

use askama::Template;
use axum::{
    Form, Router,
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
};
use serde::Deserialize;
use tokio::net::TcpListener;

use crate::{
    config::CONFIG,
    html::IndexTemplate,
    state::{AppState, Message},
};

/// Form payload for `/submit`. Absent fields arrive as empty strings; empty
/// input is accepted as-is.
#[derive(Deserialize)]
struct SubmitForm {
    #[serde(default)]
    name: String,
    #[serde(default)]
    message: String,
}

/// Start the message board server on the configured port
pub async fn run() {
    let state = Arc::new(AppState::new());
    let app = router(state);

    let addr = format!("0.0.0.0:{}", CONFIG.port);
    let listener = TcpListener::bind(&addr)
        .await
        .expect("failed to bind listen port");

    println!("🚀 Server running at http://localhost:{}/", CONFIG.port);

    axum::serve(listener, app).await.expect("server error");
}

/// Build the route table. Every route runs through the counting middleware,
/// so each inbound request bumps its path's counter exactly once before the
/// handler sees it.
pub(crate) fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/submit", post(submit).fallback(reject_other_methods))
        .route("/stats", get(stats))
        .route("/reset", get(reset))
        .with_state(Arc::clone(&state))
        .layer(axum::middleware::from_fn_with_state(state, count_visit))
}

/// Middleware: count the request against its path, then hand it downstream
/// untouched. Runs before the method check on `/submit`, so rejected methods
/// are counted too.
async fn count_visit(State(state): State<Arc<AppState>>, req: Request, next: Next) -> Response {
    state.record_visit(req.uri().path()).await;
    next.run(req).await
}

/// Render the home page from a snapshot of the message log. The lock is held
/// only for the copy; rendering happens outside it.
async fn home(State(state): State<Arc<AppState>>) -> Response {
    let page = IndexTemplate {
        messages: state.messages().await,
    };
    match page.render() {
        Ok(body) => Html(body).into_response(),
        Err(err) => {
            tracing::error!("home page render failed: {err}");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// Append a new message and send the browser back to the home page
async fn submit(State(state): State<Arc<AppState>>, Form(form): Form<SubmitForm>) -> Redirect {
    tracing::info!(name = %form.name, "new message posted");
    state
        .push_message(Message {
            name: form.name,
            content: form.message,
        })
        .await;
    Redirect::to("/")
}

/// Any method other than POST on `/submit`
async fn reject_other_methods() -> (StatusCode, &'static str) {
    (StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed")
}

/// Report how often each path has been requested, one line per path
async fn stats(State(state): State<Arc<AppState>>) -> String {
    let mut report = String::new();
    for (path, count) in state.visit_counts().await {
        report.push_str(&format!("{path}: {count}\n"));
    }
    report
}

/// Clear the message log. Visit counters keep their values.
async fn reset(State(state): State<Arc<AppState>>) -> &'static str {
    tracing::info!("message log cleared");
    state.clear_messages().await;
    "All messages cleared.\n"
}

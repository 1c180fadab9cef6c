//! Web server: the board page and the post store JSON API

use anyhow::Result;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
    Form, Json, Router,
};
use serde::Deserialize;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::composer::Composer;
use crate::config::bind_host;
use crate::editor::HtmlEditor;
use crate::error::{ErrorKind, StoreError};
use crate::notify::NoticeLog;
use crate::store::{DynPostStore, NewPost};
use crate::templates::TemplateRenderer;
use crate::view::DateStyle;
use crate::Postboard;

/// Server state
pub struct ServerState {
    store: DynPostStore,
    renderer: TemplateRenderer,
    style: DateStyle,
    site_title: String,
}

impl ServerState {
    pub fn new(board: &Postboard, store: DynPostStore) -> Result<Self> {
        Ok(Self {
            store,
            renderer: TemplateRenderer::new()?,
            style: DateStyle::from_config(&board.config),
            site_title: board.config.title.clone(),
        })
    }

    /// A fresh composer for one page request
    fn composer(&self) -> (Composer<DynPostStore, HtmlEditor, NoticeLog>, NoticeLog) {
        let notices = NoticeLog::new();
        let composer = Composer::new(self.store.clone(), HtmlEditor::new(), notices.clone());
        (composer, notices)
    }

    fn render(
        &self,
        composer: &Composer<DynPostStore, HtmlEditor, NoticeLog>,
        notices: &NoticeLog,
    ) -> Response {
        let view = composer.view(notices.notices(), &self.style);
        match self.renderer.render_board(&self.site_title, &view) {
            Ok(html) => Html(html).into_response(),
            Err(e) => {
                tracing::error!("Template error: {:#}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Template error").into_response()
            }
        }
    }
}

/// Fields posted by the compose form
#[derive(Debug, Deserialize)]
pub struct ComposeForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub body: String,
}

/// Build the application router
pub fn router(state: Arc<ServerState>) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/compose", get(compose_handler).post(submit_handler))
        .route("/cancel", get(cancel_handler))
        .route("/api/posts", get(list_posts).post(create_post))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the server
pub async fn start(
    board: &Postboard,
    store: DynPostStore,
    ip: &str,
    port: u16,
    open: bool,
) -> Result<()> {
    let state = Arc::new(ServerState::new(board, store)?);
    let app = router(state);

    // Parse address - handle "localhost" specially
    let addr: SocketAddr = format!("{}:{}", bind_host(ip), port).parse()?;

    let url = format!("http://{}:{}", ip, port);
    println!("Server running at {}", url);
    println!("Post store API at {}/api/posts", url);
    println!("Press Ctrl+C to stop.");

    if open {
        if let Err(e) = open_browser(&url) {
            tracing::warn!("Failed to open browser: {}", e);
        }
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Board page with the feed
async fn index_handler(State(state): State<Arc<ServerState>>) -> Response {
    let (mut composer, notices) = state.composer();
    let _ = composer.start().await;
    state.render(&composer, &notices)
}

/// Board page with the compose form open
async fn compose_handler(State(state): State<Arc<ServerState>>) -> Response {
    let (mut composer, notices) = state.composer();
    let _ = composer.start().await;
    composer.open_compose();
    state.render(&composer, &notices)
}

/// Submit the compose form
///
/// Redirects to the feed on success. A rejected or failed submit shows the
/// form again with the draft and one notice; no further store call is made.
/// If the post was created but the reload failed, the page shows the
/// closed form and the load notice.
async fn submit_handler(
    State(state): State<Arc<ServerState>>,
    Form(form): Form<ComposeForm>,
) -> Response {
    let (mut composer, notices) = state.composer();
    composer.open_compose();
    composer.set_title(&form.title);
    composer.set_author(&form.author);
    composer.set_body(&form.body);

    match composer.submit_post().await {
        Ok(()) => Redirect::to("/").into_response(),
        Err(e) => {
            tracing::debug!("Submit failed: {}", e);
            let status = match e.kind() {
                ErrorKind::LoadFailed => StatusCode::OK,
                ErrorKind::ValidationFailed | ErrorKind::CreateFailed => {
                    StatusCode::UNPROCESSABLE_ENTITY
                }
            };
            (status, state.render(&composer, &notices)).into_response()
        }
    }
}

async fn cancel_handler() -> Redirect {
    Redirect::to("/")
}

/// Store failure as an API response
struct ApiError(StoreError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            StoreError::Rejected(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::BAD_GATEWAY,
        };
        (status, self.0.to_string()).into_response()
    }
}

async fn list_posts(State(state): State<Arc<ServerState>>) -> Result<Response, ApiError> {
    let posts = state.store.get_posts().await.map_err(ApiError)?;
    Ok(Json(posts).into_response())
}

async fn create_post(
    State(state): State<Arc<ServerState>>,
    Json(new_post): Json<NewPost>,
) -> Result<Response, ApiError> {
    let post = state
        .store
        .create_post(&new_post.title, &new_post.body, &new_post.author)
        .await
        .map_err(ApiError)?;
    tracing::info!("API created post {:?}", post.title);
    Ok((StatusCode::CREATED, Json(post)).into_response())
}

/// Open a URL in the default browser
fn open_browser(url: &str) -> Result<()> {
    #[cfg(target_os = "macos")]
    {
        std::process::Command::new("open").arg(url).spawn()?;
    }

    #[cfg(target_os = "linux")]
    {
        std::process::Command::new("xdg-open").arg(url).spawn()?;
    }

    #[cfg(target_os = "windows")]
    {
        std::process::Command::new("cmd")
            .args(["/c", "start", url])
            .spawn()?;
    }

    Ok(())
}

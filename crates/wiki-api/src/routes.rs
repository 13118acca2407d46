use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Redirect, Response};
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use wiki_core::store::{create_entry, require_entry};
use wiki_core::util::compact_text;
use wiki_core::validate::{normalize_content, normalize_query, normalize_title};
use wiki_core::{Entry, EntryRepository, FsEntryStore, SearchOutcome};

use crate::config::AppConfig;
use crate::error::AppError;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    store: FsEntryStore,
}

impl AppState {
    pub fn from_config(config: Arc<AppConfig>) -> Self {
        Self {
            store: config.store.open_store(),
            config,
        }
    }

    /// Run a store operation on the blocking pool.
    async fn with_store<T, F>(&self, operation: F) -> Result<T, AppError>
    where
        F: FnOnce(&FsEntryStore) -> T + Send + 'static,
        T: Send + 'static,
    {
        let store = self.store.clone();
        tokio::task::spawn_blocking(move || operation(&store))
            .await
            .map_err(|error| AppError::internal(format!("store task failed: {error}")))
    }
}

pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/wiki", get(index).post(new_page))
        .route("/wiki/{title}", get(page).put(edit_page))
        .route("/wiki/{title}/edit", get(edit_form))
        .route("/search", get(search))
        .route("/random", get(random_page))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_headers(Any)
                .allow_methods(Any),
        )
        .with_state(state)
}

/// Location of an entry page, percent-encoded
fn page_location(title: &str) -> String {
    format!("/wiki/{}", urlencoding::encode(title))
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    timestamp: i64,
}

async fn healthz() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        timestamp: Utc::now().timestamp(),
    })
}

async fn not_found() -> AppError {
    AppError::NotFound("Page not found".to_string())
}

#[derive(Debug, Serialize)]
struct IndexResponse {
    entries: Vec<String>,
}

async fn index(State(state): State<AppState>) -> Result<Json<IndexResponse>, AppError> {
    let entries = state.with_store(|store| store.list_entries()).await?;
    Ok(Json(IndexResponse { entries }))
}

#[derive(Debug, Serialize)]
struct PageResponse {
    title: String,
    content: String,
    body: String,
}

async fn page(
    State(state): State<AppState>,
    Path(title): Path<String>,
) -> Result<Json<PageResponse>, AppError> {
    let title = normalize_title(&title)?;
    let lookup = title.clone();
    let content = state
        .with_store(move |store| require_entry(store, &lookup))
        .await??;
    let entry = Entry::from_stored(title, &content);
    Ok(Json(PageResponse {
        title: entry.title,
        content,
        body: entry.content,
    }))
}

#[derive(Debug, Deserialize)]
struct NewPageRequest {
    title: String,
    content: String,
}

async fn new_page(
    State(state): State<AppState>,
    Json(request): Json<NewPageRequest>,
) -> Result<Redirect, AppError> {
    let title = normalize_title(&request.title)?;
    let content = normalize_content(&request.content)?;

    let target = title.clone();
    state
        .with_store(move |store| create_entry(store, &target, &content))
        .await??;

    tracing::info!(endpoint = "new_page", title = %title, "Created entry");
    Ok(Redirect::to(&page_location(&title)))
}

async fn edit_form(
    State(state): State<AppState>,
    Path(title): Path<String>,
) -> Result<Json<Entry>, AppError> {
    let title = normalize_title(&title)?;
    let lookup = title.clone();
    let stored = state
        .with_store(move |store| require_entry(store, &lookup))
        .await??;
    Ok(Json(Entry::from_stored(title, &stored)))
}

#[derive(Debug, Deserialize)]
struct EditPageRequest {
    content: String,
}

async fn edit_page(
    State(state): State<AppState>,
    Path(title): Path<String>,
    Json(request): Json<EditPageRequest>,
) -> Result<Redirect, AppError> {
    let title = normalize_title(&title)?;
    let content = normalize_content(&request.content)?;

    let target = title.clone();
    state
        .with_store(move |store| store.save_entry(&target, &content))
        .await??;

    tracing::info!(endpoint = "edit_page", title = %title, "Saved entry");
    Ok(Redirect::to(&page_location(&title)))
}

#[derive(Debug, Deserialize)]
struct SearchParams {
    q: Option<String>,
}

#[derive(Debug, Serialize)]
struct SearchResponse {
    query: String,
    entries: Vec<String>,
}

async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Response, AppError> {
    let query = normalize_query(params.q.as_deref().unwrap_or_default())?;

    let needle = query.clone();
    let outcome = state.with_store(move |store| store.search(&needle)).await?;

    let entries = match outcome {
        SearchOutcome::Exact(title) => {
            tracing::debug!(endpoint = "search", title = %title, "Exact match, redirecting");
            return Ok(Redirect::to(&page_location(&title)).into_response());
        }
        SearchOutcome::Matches(titles) => titles,
        SearchOutcome::Empty => Vec::new(),
    };

    tracing::debug!(
        endpoint = "search",
        query = %compact_text(&query),
        matches = entries.len(),
        "Search completed"
    );
    Ok(Json(SearchResponse { query, entries }).into_response())
}

async fn random_page(State(state): State<AppState>) -> Result<Redirect, AppError> {
    let picked = state.with_store(|store| store.random_entry()).await?;
    picked
        .map(|title| Redirect::to(&page_location(&title)))
        .ok_or_else(|| AppError::NotFound("No available page.".to_string()))
}

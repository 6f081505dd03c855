//! Page handlers
//!
//! Each handler runs Parse -> Validate -> Lookup -> Render and returns either
//! the rendered page or a classified [`PageError`].

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    response::Html,
};
use groupie_common::ArtistId;

use super::query::{id_from_query, parse_id, IdQuery};
use crate::error::{PageError, PageResult};
use crate::render::{PageData, Template};
use crate::AppState;

/// GET /
///
/// All artists in upstream order
pub async fn index(State(state): State<AppState>) -> PageResult<Html<String>> {
    let body = state
        .renderer
        .render(Template::Index, &PageData::Index(state.store.artists()))?;
    Ok(Html(body))
}

/// GET /artist?id=N
pub async fn artist_by_query(
    State(state): State<AppState>,
    query: Result<Query<IdQuery>, QueryRejection>,
) -> PageResult<Html<String>> {
    let id = id_from_query(query)?;
    render_artist(&state, id)
}

/// GET /artist/N
pub async fn artist_by_path(
    State(state): State<AppState>,
    Path(raw): Path<String>,
) -> PageResult<Html<String>> {
    let id = parse_id(&raw)?;
    render_artist(&state, id)
}

fn render_artist(state: &AppState, id: ArtistId) -> PageResult<Html<String>> {
    let details = state
        .store
        .find_artist_details(id)
        .ok_or_else(|| PageError::NotFound("Artist not found".to_string()))?;

    let body = state
        .renderer
        .render(Template::Artist, &PageData::Artist(details))?;
    Ok(Html(body))
}

/// GET /concerts?id=N
///
/// Concert schedule from the relation record sharing the artist's id
pub async fn concerts(
    State(state): State<AppState>,
    query: Result<Query<IdQuery>, QueryRejection>,
) -> PageResult<Html<String>> {
    let id = id_from_query(query)?;
    let relation = state
        .store
        .find_concerts(id)
        .ok_or_else(|| PageError::NotFound("Concerts not found".to_string()))?;

    let data = PageData::Concerts {
        artist: state.store.find_artist(id),
        relation,
    };
    let body = state.renderer.render(Template::Concerts, &data)?;
    Ok(Html(body))
}

/// GET /404 and every unrouted path
pub async fn not_found() -> PageError {
    PageError::NotFound("Page not found".to_string())
}

/// GET /500
pub async fn internal_error() -> PageError {
    PageError::Internal("Internal server error".to_string())
}

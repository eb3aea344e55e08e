//! Movie tag handlers.

use actix_web::{HttpResponse, web};

use cine_core::domain::TagsQuery;

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /movie/tags/{movie_id}
pub async fn tags(state: web::Data<AppState>, path: web::Path<i64>) -> AppResult<HttpResponse> {
    let query = TagsQuery::new(path.into_inner())?;

    tracing::info!(movie_id = query.movie_id, "Movie tags requested");

    let tags = state.service.get_movie_tags(query).await?;
    Ok(HttpResponse::Ok().json(tags))
}

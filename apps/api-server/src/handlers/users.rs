//! User profile and watch history handlers.

use actix_web::{HttpResponse, web};

use cine_core::domain::{HistoryQuery, ProfileQuery};
use cine_shared::dto::ProfileParams;

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /user/profile/{user_id}?year={year}&month={month}
pub async fn profile(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    params: web::Query<ProfileParams>,
) -> AppResult<HttpResponse> {
    let params = params.into_inner();
    let query = ProfileQuery::new(path.into_inner(), params.year, params.month)?;

    tracing::info!(
        user_id = query.user_id,
        year = query.year,
        month = query.month,
        "Profile requested"
    );

    let entries = state.service.get_user_profile(query).await?;
    Ok(HttpResponse::Ok().json(entries))
}

/// GET /user/watchhistory/{user_id}
pub async fn watch_history(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> AppResult<HttpResponse> {
    let query = HistoryQuery::new(path.into_inner())?;

    tracing::info!(user_id = query.user_id, "Watch history requested");

    let history = state.service.get_user_watch_history(query).await?;
    Ok(HttpResponse::Ok().json(history))
}

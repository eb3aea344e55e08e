//! PostgreSQL ratings repository.

use async_trait::async_trait;
use sea_orm::{DbBackend, DbConn, DbErr, FromQueryResult, Statement};

use cine_core::domain::RatingRecord;
use cine_core::error::RepoError;
use cine_core::ports::RatingsRepository;

/// Ratings of one user. Columns are cast so that `integer`/`bigint` ids and
/// `real`/`double precision`/`numeric` ratings all decode the same way.
const RATINGS_BY_USER_SQL: &str = r#"SELECT userid::bigint AS user_id,
       movieid::bigint AS movie_id,
       rating::float8 AS rating,
       "timestamp"::bigint AS "timestamp"
FROM ratings
WHERE userid = $1"#;

/// Raw row of the ratings query.
#[derive(Debug, Clone, PartialEq, FromQueryResult)]
pub struct RatingRow {
    pub user_id: i64,
    pub movie_id: i64,
    pub rating: f64,
    pub timestamp: i64,
}

impl From<RatingRow> for RatingRecord {
    fn from(row: RatingRow) -> Self {
        // Fractional ratings (e.g. 3.5) are truncated toward zero.
        RatingRecord::new(row.user_id, row.movie_id, row.rating.trunc() as i32, row.timestamp)
    }
}

/// PostgreSQL ratings repository.
///
/// Runs a single read statement on a pooled connection outside any transaction,
/// so every read is autocommitted.
pub struct PostgresRatingsRepository {
    db: DbConn,
}

impl PostgresRatingsRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

fn map_db_err(err: DbErr) -> RepoError {
    match err {
        DbErr::Conn(e) => RepoError::Connection(e.to_string()),
        DbErr::ConnectionAcquire(e) => RepoError::Connection(e.to_string()),
        DbErr::Type(msg) => RepoError::Decode(msg),
        other => RepoError::Query(other.to_string()),
    }
}

#[async_trait]
impl RatingsRepository for PostgresRatingsRepository {
    async fn fetch_ratings_by_user(&self, user_id: i64) -> Result<Vec<RatingRecord>, RepoError> {
        tracing::debug!(user_id, "Fetching ratings by user");

        let rows = RatingRow::find_by_statement(Statement::from_sql_and_values(
            DbBackend::Postgres,
            RATINGS_BY_USER_SQL,
            [user_id.into()],
        ))
        .all(&self.db)
        .await
        .map_err(map_db_err)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use crate::database::postgres_repo::PostgresRatingsRepository;
    use cine_core::domain::RatingRecord;
    use cine_core::error::RepoError;
    use cine_core::ports::RatingsRepository;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, Value};

    fn row(
        user_id: i64,
        movie_id: i64,
        rating: f64,
        timestamp: i64,
    ) -> BTreeMap<&'static str, Value> {
        BTreeMap::from([
            ("user_id", Value::BigInt(Some(user_id))),
            ("movie_id", Value::BigInt(Some(movie_id))),
            ("rating", Value::Double(Some(rating))),
            ("timestamp", Value::BigInt(Some(timestamp))),
        ])
    }

    #[tokio::test]
    async fn test_fetch_ratings_by_user_keeps_store_order() {
        // Mock the query expectation
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![
                row(42, 1061, 3.0, 1_260_759_182),
                row(42, 31, 2.5, 1_260_759_144),
                row(42, 1029, 3.0, 1_260_759_179),
            ]])
            .into_connection();

        let repo = PostgresRatingsRepository::new(db);

        let ratings = repo.fetch_ratings_by_user(42).await.unwrap();

        assert_eq!(
            ratings,
            vec![
                RatingRecord::new(42, 1061, 3, 1_260_759_182),
                RatingRecord::new(42, 31, 2, 1_260_759_144),
                RatingRecord::new(42, 1029, 3, 1_260_759_179),
            ]
        );
    }

    #[tokio::test]
    async fn test_no_rows_is_empty_not_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<BTreeMap<&str, Value>>::new()])
            .into_connection();

        let repo = PostgresRatingsRepository::new(db);

        assert!(repo.fetch_ratings_by_user(7).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_query_failure_is_explicit_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("relation \"ratings\" does not exist".to_owned())])
            .into_connection();

        let repo = PostgresRatingsRepository::new(db);

        let result = repo.fetch_ratings_by_user(7).await;
        assert!(matches!(result, Err(RepoError::Query(_))));
    }
}

// crates/db/src/queries/reviews.rs
// Review aggregations: per-genre totals and top games within a genre.

use crate::{DbResult, Warehouse};
use sqlx::Row;
use steamscope_core::Genre;

/// Row cap for the per-genre top games table.
pub const TOP_GAMES_LIMIT: i64 = 50;

/// Per-genre positive review total.
///
/// An app belonging to several genres contributes its reviews to each of
/// them, so these totals sum to more than the fact-table total whenever
/// multi-genre apps exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenreReviewTotal {
    pub genre: String,
    pub total_positive: i64,
}

impl<'r> sqlx::FromRow<'r, sqlx::sqlite::SqliteRow> for GenreReviewTotal {
    fn from_row(row: &'r sqlx::sqlite::SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            genre: row.try_get("genre")?,
            total_positive: row.try_get("total_positive")?,
        })
    }
}

/// One app and its positive review count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameReviewRow {
    pub app: String,
    pub positive_reviews: i64,
}

impl<'r> sqlx::FromRow<'r, sqlx::sqlite::SqliteRow> for GameReviewRow {
    fn from_row(row: &'r sqlx::sqlite::SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            app: row.try_get("app")?,
            positive_reviews: row.try_get("positive_reviews")?,
        })
    }
}

impl Warehouse {
    /// Total positive reviews per genre, most-reviewed first.
    pub async fn genre_review_totals(&self) -> DbResult<Vec<GenreReviewTotal>> {
        let rows = sqlx::query_as::<_, GenreReviewTotal>(
            r#"
            SELECT
                g.genreName AS genre,
                SUM(f.positiveReviews) AS total_positive
            FROM dim_genre g
            JOIN bridge_genre_group bgg ON bgg.genreSK = g.genreSK
            JOIN fact_steamgames f ON f.genreGroupKey = bgg.genreGroupKey
            GROUP BY g.genreSK, g.genreName
            ORDER BY total_positive DESC, g.genreName ASC
            "#,
        )
        .fetch_all(self.pool())
        .await?;

        Ok(rows)
    }

    /// The most positively reviewed apps within one genre, capped at
    /// [`TOP_GAMES_LIMIT`] rows.
    pub async fn top_games_for_genre(&self, genre: &Genre) -> DbResult<Vec<GameReviewRow>> {
        let rows = sqlx::query_as::<_, GameReviewRow>(
            r#"
            SELECT
                a.appName AS app,
                f.positiveReviews AS positive_reviews
            FROM fact_steamgames f
            JOIN dim_app a ON a.appSK = f.appSK
            JOIN bridge_genre_group bgg ON bgg.genreGroupKey = f.genreGroupKey
            JOIN dim_genre g ON g.genreSK = bgg.genreSK
            WHERE g.genreName = ?1
            ORDER BY f.positiveReviews DESC, a.appName ASC
            LIMIT ?2
            "#,
        )
        .bind(genre.as_str())
        .bind(TOP_GAMES_LIMIT)
        .fetch_all(self.pool())
        .await?;

        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    async fn genre(warehouse: &Warehouse, name: &str) -> Genre {
        let domain = warehouse.genre_names().await.expect("genre domain");
        Genre::validate(name, &domain).expect("known genre")
    }

    #[tokio::test]
    async fn test_genre_review_totals_ordering() {
        let warehouse = Warehouse::seeded().await.expect("seeded");
        let totals = warehouse.genre_review_totals().await.expect("totals");

        let expected = vec![
            ("Action", 1100),
            ("Indie", 700),
            ("Adventure", 300),
            ("Strategy", 150),
        ];
        let got: Vec<(&str, i64)> = totals
            .iter()
            .map(|t| (t.genre.as_str(), t.total_positive))
            .collect();
        assert_eq!(got, expected);
    }

    #[tokio::test]
    async fn test_multi_genre_apps_count_once_per_genre() {
        let warehouse = Warehouse::seeded().await.expect("seeded");

        let per_genre_sum: i64 = warehouse
            .genre_review_totals()
            .await
            .expect("totals")
            .iter()
            .map(|t| t.total_positive)
            .sum();

        let (fact_total,): (i64,) =
            sqlx::query_as("SELECT SUM(positiveReviews) FROM fact_steamgames")
                .fetch_one(warehouse.pool())
                .await
                .expect("fact total");

        // Rogue Depths (300 positive reviews) sits in two genres, so it is
        // counted twice across the per-genre totals.
        assert_eq!(per_genre_sum, fact_total + 300);
    }

    #[tokio::test]
    async fn test_single_membership_totals_sum_to_fact_total() {
        // With single-genre membership only, per-genre totals partition the
        // fact rows and their sum equals the fact-table total.
        let warehouse = Warehouse::fixture().await.expect("fixture");
        sqlx::raw_sql(
            r#"
            INSERT INTO dim_genre (genreSK, genreName) VALUES (1, 'Action'), (2, 'Indie');
            INSERT INTO dim_category (categorySK, categoryName) VALUES (1, 'Single-player');
            INSERT INTO dim_year (yearSK, releaseYear) VALUES (1, 2015);
            INSERT INTO dim_app (appSK, appName) VALUES (1, 'Alpha'), (2, 'Beta'), (3, 'Gamma');
            INSERT INTO bridge_genre_group (genreGroupKey, genreSK) VALUES (1, 1), (2, 2);
            INSERT INTO bridge_category_group (categoryGroupKey, categorySK) VALUES (1, 1);
            INSERT INTO fact_steamgames VALUES
                (1, 1, 1, 1, 120, 10, 4.0),
                (2, 1, 1, 1, 80, 5, 2.0),
                (3, 2, 1, 1, 40, 1, 1.0);
            "#,
        )
        .execute(warehouse.pool())
        .await
        .expect("seed single-membership world");

        let per_genre_sum: i64 = warehouse
            .genre_review_totals()
            .await
            .expect("totals")
            .iter()
            .map(|t| t.total_positive)
            .sum();

        let (fact_total,): (i64,) =
            sqlx::query_as("SELECT SUM(positiveReviews) FROM fact_steamgames")
                .fetch_one(warehouse.pool())
                .await
                .expect("fact total");

        assert_eq!(per_genre_sum, fact_total);
        assert_eq!(per_genre_sum, 240);
    }

    #[tokio::test]
    async fn test_top_games_belong_to_genre_sorted_desc() {
        let warehouse = Warehouse::seeded().await.expect("seeded");
        let action = genre(&warehouse, "Action").await;

        let games = warehouse
            .top_games_for_genre(&action)
            .await
            .expect("top games");

        assert!(games.len() <= TOP_GAMES_LIMIT as usize);
        let got: Vec<(&str, i64)> = games
            .iter()
            .map(|g| (g.app.as_str(), g.positive_reviews))
            .collect();
        assert_eq!(
            got,
            vec![
                ("Portal Strike", 500),
                ("Rogue Depths", 300),
                ("Star Courier", 250),
                ("Drift King", 50),
            ]
        );
        assert!(games.windows(2).all(|w| w[0].positive_reviews >= w[1].positive_reviews));
    }

    #[tokio::test]
    async fn test_top_games_other_genre_excludes_foreign_apps() {
        let warehouse = Warehouse::seeded().await.expect("seeded");
        let adventure = genre(&warehouse, "Adventure").await;

        let games = warehouse
            .top_games_for_genre(&adventure)
            .await
            .expect("top games");

        let names: Vec<&str> = games.iter().map(|g| g.app.as_str()).collect();
        assert_eq!(names, vec!["Cavern Tales", "Mire"]);
    }
}

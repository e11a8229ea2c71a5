// crates/db/src/queries/catalog.rs
// Dimension catalog queries: the domains that filter values are validated
// against, and the option lists the selectors display.

use crate::{DbResult, Warehouse};
use steamscope_core::Year;

impl Warehouse {
    /// All genre names, alphabetical. The validation domain for genre
    /// filters.
    pub async fn genre_names(&self) -> DbResult<Vec<String>> {
        let rows: Vec<(String,)> =
            sqlx::query_as("SELECT genreName FROM dim_genre ORDER BY genreName")
                .fetch_all(self.pool())
                .await?;
        Ok(rows.into_iter().map(|(name,)| name).collect())
    }

    /// All category names, alphabetical.
    pub async fn category_names(&self) -> DbResult<Vec<String>> {
        let rows: Vec<(String,)> =
            sqlx::query_as("SELECT categoryName FROM dim_category ORDER BY categoryName")
                .fetch_all(self.pool())
                .await?;
        Ok(rows.into_iter().map(|(name,)| name).collect())
    }

    /// All release years, ascending. The validation domain for year
    /// filters and the year selector's option list.
    pub async fn release_years(&self) -> DbResult<Vec<i64>> {
        let rows: Vec<(i64,)> =
            sqlx::query_as("SELECT releaseYear FROM dim_year ORDER BY releaseYear")
                .fetch_all(self.pool())
                .await?;
        Ok(rows.into_iter().map(|(year,)| year).collect())
    }

    /// Categories with at least one fact row in the given year,
    /// alphabetical. An empty result is a first-class outcome: the
    /// category selector shows a warning and dependent queries are
    /// skipped.
    pub async fn categories_for_year(&self, year: Year) -> DbResult<Vec<String>> {
        let rows: Vec<(String,)> = sqlx::query_as(
            r#"
            SELECT DISTINCT c.categoryName
            FROM fact_steamgames f
            JOIN dim_year y ON y.yearSK = f.yearSK
            JOIN bridge_category_group bcg ON bcg.categoryGroupKey = f.categoryGroupKey
            JOIN dim_category c ON c.categorySK = bcg.categorySK
            WHERE y.releaseYear = ?1
            ORDER BY c.categoryName
            "#,
        )
        .bind(year.value())
        .fetch_all(self.pool())
        .await?;
        Ok(rows.into_iter().map(|(name,)| name).collect())
    }
}

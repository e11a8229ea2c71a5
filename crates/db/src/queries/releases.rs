// crates/db/src/queries/releases.rs
// Release-volume aggregations: genre x category x year density, per-genre
// app counts for a (year, category) pair, and per-genre activity over a
// year range.

use crate::{DbResult, Warehouse};
use sqlx::Row;
use steamscope_core::{Category, Year, YearRange};

/// Row cap for the ranked genre tables and charts in this section.
pub const ACTIVITY_LIMIT: i64 = 10;

/// One populated genre x category x year cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DensityRow {
    pub genre: String,
    pub category: String,
    pub year: i64,
    pub app_count: i64,
}

impl<'r> sqlx::FromRow<'r, sqlx::sqlite::SqliteRow> for DensityRow {
    fn from_row(row: &'r sqlx::sqlite::SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            genre: row.try_get("genre")?,
            category: row.try_get("category")?,
            year: row.try_get("year")?,
            app_count: row.try_get("app_count")?,
        })
    }
}

/// A genre and how many apps it covers under the active filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenreAppCount {
    pub genre: String,
    pub app_count: i64,
}

impl<'r> sqlx::FromRow<'r, sqlx::sqlite::SqliteRow> for GenreAppCount {
    fn from_row(row: &'r sqlx::sqlite::SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            genre: row.try_get("genre")?,
            app_count: row.try_get("app_count")?,
        })
    }
}

impl Warehouse {
    /// App counts for every populated genre x category x year combination,
    /// ordered by genre, category, year.
    pub async fn release_density(&self) -> DbResult<Vec<DensityRow>> {
        let rows = sqlx::query_as::<_, DensityRow>(
            r#"
            SELECT
                g.genreName AS genre,
                c.categoryName AS category,
                y.releaseYear AS year,
                COUNT(f.appSK) AS app_count
            FROM fact_steamgames f
            JOIN bridge_genre_group bgg ON bgg.genreGroupKey = f.genreGroupKey
            JOIN dim_genre g ON g.genreSK = bgg.genreSK
            JOIN bridge_category_group bcg ON bcg.categoryGroupKey = f.categoryGroupKey
            JOIN dim_category c ON c.categorySK = bcg.categorySK
            JOIN dim_year y ON y.yearSK = f.yearSK
            GROUP BY g.genreName, c.categoryName, y.releaseYear
            ORDER BY g.genreName, c.categoryName, y.releaseYear
            "#,
        )
        .fetch_all(self.pool())
        .await?;

        Ok(rows)
    }

    /// Genres ranked by how many distinct apps they released in the given
    /// year under the given category, capped at [`ACTIVITY_LIMIT`].
    ///
    /// Callers validate `category` against [`Warehouse::categories_for_year`]
    /// first; an empty category domain means this query is never issued.
    pub async fn genre_app_counts(
        &self,
        year: Year,
        category: &Category,
    ) -> DbResult<Vec<GenreAppCount>> {
        let rows = sqlx::query_as::<_, GenreAppCount>(
            r#"
            SELECT
                g.genreName AS genre,
                COUNT(DISTINCT f.appSK) AS app_count
            FROM fact_steamgames f
            JOIN bridge_genre_group bgg ON bgg.genreGroupKey = f.genreGroupKey
            JOIN dim_genre g ON g.genreSK = bgg.genreSK
            JOIN bridge_category_group bcg ON bcg.categoryGroupKey = f.categoryGroupKey
            JOIN dim_category c ON c.categorySK = bcg.categorySK
            JOIN dim_year y ON y.yearSK = f.yearSK
            WHERE y.releaseYear = ?1 AND c.categoryName = ?2
            GROUP BY g.genreSK, g.genreName
            ORDER BY app_count DESC, g.genreName ASC
            LIMIT ?3
            "#,
        )
        .bind(year.value())
        .bind(category.as_str())
        .bind(ACTIVITY_LIMIT)
        .fetch_all(self.pool())
        .await?;

        Ok(rows)
    }

    /// Genres ranked by release count over an inclusive year range, capped
    /// at [`ACTIVITY_LIMIT`]. A fact row counts once per genre membership.
    pub async fn genre_activity(&self, range: YearRange) -> DbResult<Vec<GenreAppCount>> {
        let rows = sqlx::query_as::<_, GenreAppCount>(
            r#"
            SELECT
                g.genreName AS genre,
                COUNT(f.appSK) AS app_count
            FROM fact_steamgames f
            JOIN bridge_genre_group bgg ON bgg.genreGroupKey = f.genreGroupKey
            JOIN dim_genre g ON g.genreSK = bgg.genreSK
            JOIN dim_year y ON y.yearSK = f.yearSK
            WHERE y.releaseYear BETWEEN ?1 AND ?2
            GROUP BY g.genreSK, g.genreName
            ORDER BY app_count DESC, g.genreName ASC
            LIMIT ?3
            "#,
        )
        .bind(range.start())
        .bind(range.end())
        .bind(ACTIVITY_LIMIT)
        .fetch_all(self.pool())
        .await?;

        Ok(rows)
    }
}

// crates/db/src/queries/playtime.rs
// Two-week playtime aggregations per category and overall.

use crate::{DbResult, Warehouse};
use sqlx::Row;

/// Which mean "average playtime across all categories" refers to.
///
/// The source question is ambiguous, so both semantics are first-class:
/// the two agree only when every category has the same number of
/// bridge-expanded fact rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Weighting {
    /// AVG over fact rows expanded by category membership: a fact row is
    /// weighted once per category it belongs to.
    FactRows,
    /// Unweighted mean of the per-category averages.
    Categories,
}

/// Per-category average two-week playtime.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryPlaytime {
    pub category: String,
    pub avg_playtime: f64,
}

impl<'r> sqlx::FromRow<'r, sqlx::sqlite::SqliteRow> for CategoryPlaytime {
    fn from_row(row: &'r sqlx::sqlite::SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            category: row.try_get("category")?,
            avg_playtime: row.try_get("avg_playtime")?,
        })
    }
}

impl Warehouse {
    /// Average two-week playtime per category, most-played first.
    pub async fn category_playtime_averages(&self) -> DbResult<Vec<CategoryPlaytime>> {
        let rows = sqlx::query_as::<_, CategoryPlaytime>(
            r#"
            SELECT
                c.categoryName AS category,
                AVG(f.averagePlayTime_twoWeeks) AS avg_playtime
            FROM dim_category c
            JOIN bridge_category_group bcg ON bcg.categorySK = c.categorySK
            JOIN fact_steamgames f ON f.categoryGroupKey = bcg.categoryGroupKey
            GROUP BY c.categorySK, c.categoryName
            ORDER BY avg_playtime DESC, c.categoryName ASC
            "#,
        )
        .fetch_all(self.pool())
        .await?;

        Ok(rows)
    }

    /// Average two-week playtime across all categories under the given
    /// weighting. `None` when the warehouse holds no category-linked facts.
    pub async fn overall_playtime(&self, weighting: Weighting) -> DbResult<Option<f64>> {
        let sql = match weighting {
            Weighting::FactRows => {
                r#"
                SELECT AVG(f.averagePlayTime_twoWeeks)
                FROM fact_steamgames f
                JOIN bridge_category_group bcg ON bcg.categoryGroupKey = f.categoryGroupKey
                JOIN dim_category c ON c.categorySK = bcg.categorySK
                "#
            }
            Weighting::Categories => {
                r#"
                SELECT AVG(avg_playtime)
                FROM (
                    SELECT AVG(f.averagePlayTime_twoWeeks) AS avg_playtime
                    FROM dim_category c
                    JOIN bridge_category_group bcg ON bcg.categorySK = c.categorySK
                    JOIN fact_steamgames f ON f.categoryGroupKey = bcg.categoryGroupKey
                    GROUP BY c.categorySK
                )
                "#
            }
        };

        let (avg,): (Option<f64>,) = sqlx::query_as(sql).fetch_one(self.pool()).await?;
        Ok(avg)
    }
}

// crates/db/src/fixture.rs
//! Seeded in-memory warehouse for tests.
//!
//! The application owns no schema (the warehouse is built by an external
//! ETL), so the DDL here exists only to give tests a star schema to query.
//! Available to this crate's own tests and to downstream crates through the
//! `fixtures` feature.

use crate::{DbResult, Warehouse};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;

/// Star-schema DDL mirroring the production warehouse layout.
pub const SCHEMA: &str = r#"
CREATE TABLE dim_genre (
    genreSK INTEGER PRIMARY KEY,
    genreName TEXT NOT NULL UNIQUE
);
CREATE TABLE dim_category (
    categorySK INTEGER PRIMARY KEY,
    categoryName TEXT NOT NULL UNIQUE
);
CREATE TABLE dim_app (
    appSK INTEGER PRIMARY KEY,
    appName TEXT NOT NULL
);
CREATE TABLE dim_year (
    yearSK INTEGER PRIMARY KEY,
    releaseYear INTEGER NOT NULL UNIQUE
);
CREATE TABLE bridge_genre_group (
    genreGroupKey INTEGER NOT NULL,
    genreSK INTEGER NOT NULL REFERENCES dim_genre(genreSK),
    PRIMARY KEY (genreGroupKey, genreSK)
);
CREATE TABLE bridge_category_group (
    categoryGroupKey INTEGER NOT NULL,
    categorySK INTEGER NOT NULL REFERENCES dim_category(categorySK),
    PRIMARY KEY (categoryGroupKey, categorySK)
);
CREATE TABLE fact_steamgames (
    appSK INTEGER PRIMARY KEY REFERENCES dim_app(appSK),
    genreGroupKey INTEGER NOT NULL,
    categoryGroupKey INTEGER NOT NULL,
    yearSK INTEGER NOT NULL REFERENCES dim_year(yearSK),
    positiveReviews INTEGER NOT NULL,
    negativeReviews INTEGER NOT NULL,
    averagePlayTime_twoWeeks REAL NOT NULL
);
"#;

/// A small hand-checked world.
///
/// Notable shapes: Rogue Depths belongs to two genres and two categories
/// (group keys 2), category memberships are deliberately unequal in size,
/// and 2017 exists in `dim_year` with no fact rows at all.
const SEED: &str = r#"
INSERT INTO dim_genre (genreSK, genreName) VALUES
    (1, 'Action'), (2, 'Adventure'), (3, 'Indie'), (4, 'Strategy');

INSERT INTO dim_category (categorySK, categoryName) VALUES
    (1, 'Single-player'), (2, 'Multi-player'), (3, 'Co-op');

INSERT INTO dim_year (yearSK, releaseYear) VALUES
    (1, 2014), (2, 2015), (3, 2016), (4, 2017);

INSERT INTO dim_app (appSK, appName) VALUES
    (1, 'Portal Strike'),
    (2, 'Rogue Depths'),
    (3, 'Cavern Tales'),
    (4, 'Siege Lords'),
    (5, 'Pixel Farm'),
    (6, 'Star Courier'),
    (7, 'Mire'),
    (8, 'Drift King');

INSERT INTO bridge_genre_group (genreGroupKey, genreSK) VALUES
    (1, 1),
    (2, 1), (2, 3),
    (3, 2),
    (4, 4),
    (5, 3);

INSERT INTO bridge_category_group (categoryGroupKey, categorySK) VALUES
    (1, 1),
    (2, 1), (2, 2),
    (3, 3),
    (4, 2);

INSERT INTO fact_steamgames
    (appSK, genreGroupKey, categoryGroupKey, yearSK, positiveReviews, negativeReviews, averagePlayTime_twoWeeks)
VALUES
    (1, 1, 1, 1, 500, 50, 12.0),
    (2, 2, 2, 2, 300, 30, 8.0),
    (3, 3, 1, 2, 200, 20, 5.0),
    (4, 4, 4, 3, 150, 60, 20.0),
    (5, 5, 3, 3, 400, 10, 3.0),
    (6, 1, 2, 3, 250, 40, 15.0),
    (7, 3, 3, 1, 100, 5, 2.0),
    (8, 1, 1, 1, 50, 8, 1.0);
"#;

impl Warehouse {
    /// Empty in-memory warehouse with the star schema applied.
    ///
    /// A single never-recycled connection: the private `:memory:` database
    /// lives and dies with it, and concurrently running tests never share
    /// state.
    pub async fn fixture() -> DbResult<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?
            .busy_timeout(Duration::from_secs(5));
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;
        sqlx::raw_sql(SCHEMA).execute(&pool).await?;
        Ok(Self { pool })
    }

    /// Fixture seeded with the standard test world (see [`SEED`] shapes).
    pub async fn seeded() -> DbResult<Self> {
        let warehouse = Self::fixture().await?;
        sqlx::raw_sql(SEED).execute(warehouse.pool()).await?;
        Ok(warehouse)
    }
}

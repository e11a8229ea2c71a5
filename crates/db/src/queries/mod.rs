// crates/db/src/queries/mod.rs
// Query templates over the star schema, one module per dashboard section.
//
// Every template is a read-only aggregation with deterministic ordering
// (measure descending, name ascending as tiebreaker). Filter values arrive
// as validated types from steamscope-core and are always bound, never
// interpolated.

pub mod catalog;
pub mod playtime;
pub mod releases;
pub mod reviews;

// crates/core/src/lib.rs
//! Domain logic for the steamscope dashboard: validated filter values,
//! typed display artifacts, and pure result transforms.
//!
//! Nothing in this crate performs I/O. The query layer (`steamscope-db`)
//! produces rows, this crate shapes them into the payloads the server
//! hands to the frontend.

pub mod artifact;
pub mod filter;
pub mod transform;

pub use artifact::{
    Caption, DensityCell, DensityGrid, GroupedBar, GroupedBars, ProportionChart, ProportionSlice,
    RankedRow, RankedTable,
};
pub use filter::{Category, FilterError, Genre, Year, YearRange};
pub use transform::{ranked, range_title};

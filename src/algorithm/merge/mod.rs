//! Join and aggregate engine
//!
//! Turns row-level assignments into one merged row per organization.

pub mod aggregate;
pub mod dissolve;
pub mod join;

pub use aggregate::{district_lists, state_codes};
pub use dissolve::{dissolve_by_org, simplify_parts, union_polygons};
pub use join::{JoinedDistrict, filter_districts, join_districts, merge_sources, unique_index};

//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&SqlitePool` as the first argument.

pub mod villain_repo;

pub use villain_repo::{StoreNameLookup, VillainRepo};

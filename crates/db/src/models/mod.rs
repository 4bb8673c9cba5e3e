//! Row types for the `villains` table.

pub mod villain;

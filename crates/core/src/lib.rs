//! Domain layer for the villain card service.
//!
//! Holds the record types shared by the store and the HTTP layer, the error
//! taxonomy, and the submission validator. Nothing in here talks to a
//! database directly; the validator reaches the store through [`validation::NameLookup`].

pub mod error;
pub mod http_date;
pub mod messages;
pub mod types;
pub mod validation;

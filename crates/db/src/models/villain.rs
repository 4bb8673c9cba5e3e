use serde::Serialize;
use sqlx::FromRow;
use villain_core::types::{DbId, Timestamp};

/// A row from the `villains` table.
///
/// Serializes to the card shape the pages render: the rowid stays internal
/// and `date_added` is written as an HTTP date.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Villain {
    #[serde(skip_serializing)]
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub interests: String,
    pub url: String,
    #[serde(serialize_with = "villain_core::http_date::serialize")]
    pub date_added: Timestamp,
}

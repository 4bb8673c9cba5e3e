//! RFC 7231 HTTP-date rendering for timestamps (`Mon, 01 Jan 2024 12:00:00 GMT`).
//!
//! Used as a `serialize_with` target on record fields so the JSON carries the
//! same date shape browsers produce for `Date.prototype.toUTCString()`.

use serde::Serializer;

use crate::types::Timestamp;

const HTTP_DATE_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";

pub fn serialize<S>(ts: &Timestamp, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(&ts.format(HTTP_DATE_FORMAT))
}

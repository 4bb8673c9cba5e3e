//! Response envelope for write endpoints.
//!
//! Writes always answer with one of two shapes:
//!
//! ```text
//! {"status": "success"}
//! {"errors": ["...", "..."]}
//! ```
//!
//! User-facing failures travel in the second shape with a 200 status; see
//! [`crate::error::AppError`] for how errors end up here.

use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum OutcomeResponse {
    Success { status: &'static str },
    Errors { errors: Vec<String> },
}

impl OutcomeResponse {
    pub fn success() -> Self {
        OutcomeResponse::Success { status: "success" }
    }

    pub fn errors(errors: Vec<String>) -> Self {
        OutcomeResponse::Errors { errors }
    }
}

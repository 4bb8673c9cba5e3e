//! Submission validator for new villain cards.
//!
//! Checks run in a fixed order and are collected rather than short-circuited,
//! so a single response can report every problem at once:
//!
//! 1. name present
//! 2. description present
//! 3. interests present
//! 4. url present
//! 5. name not already taken (only asked when 1-4 pass)
//!
//! The browser pages and tests rely on that message order.

use async_trait::async_trait;
use serde::Deserialize;

use crate::error::CoreError;
use crate::messages;

/// Raw add-form fields as submitted. Any of them may be absent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VillainSubmission {
    pub name: Option<String>,
    pub description: Option<String>,
    pub interests: Option<String>,
    pub url: Option<String>,
}

/// A submission that passed every check and is ready to insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewVillain {
    pub name: String,
    pub description: String,
    pub interests: String,
    pub url: String,
}

/// Store-side existence check used by [`validate_submission`].
#[async_trait]
pub trait NameLookup: Send + Sync {
    async fn name_exists(&self, name: &str) -> Result<bool, CoreError>;
}

/// Absent and empty are both "missing". Whitespace counts as present.
fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

/// One message per missing field, in form order.
pub fn missing_field_errors(submission: &VillainSubmission) -> Vec<String> {
    [
        (&submission.name, messages::MISSING_NAME),
        (&submission.description, messages::MISSING_DESCRIPTION),
        (&submission.interests, messages::MISSING_INTERESTS),
        (&submission.url, messages::MISSING_URL),
    ]
    .into_iter()
    .filter(|(field, _)| present(field).is_none())
    .map(|(_, msg)| msg.to_string())
    .collect()
}

/// Run all checks against `submission`.
///
/// Returns the validated record, or `CoreError::Validation` carrying every
/// failed check's message. Errors from `lookup` are passed through unchanged.
pub async fn validate_submission(
    submission: VillainSubmission,
    lookup: &dyn NameLookup,
) -> Result<NewVillain, CoreError> {
    let errors = missing_field_errors(&submission);
    if !errors.is_empty() {
        return Err(CoreError::Validation(errors));
    }

    let VillainSubmission {
        name: Some(name),
        description: Some(description),
        interests: Some(interests),
        url: Some(url),
    } = submission
    else {
        return Err(CoreError::Internal(
            "submission fields vanished after presence check".into(),
        ));
    };

    if lookup.name_exists(&name).await? {
        return Err(CoreError::Validation(vec![messages::NAME_TAKEN.to_string()]));
    }

    Ok(NewVillain {
        name,
        description,
        interests,
        url,
    })
}

//! User-facing messages returned in `{"errors": [...]}` payloads.
//!
//! The browser pages display these verbatim, so the wording is part of the
//! API contract.

pub const MISSING_NAME: &str = "Oops! Looks like you forgot a name!";
pub const MISSING_DESCRIPTION: &str = "Oops! Looks like you forgot a description!";
pub const MISSING_INTERESTS: &str = "Oops! Looks like you forgot some interests!";
pub const MISSING_URL: &str = "Oops! Looks like you forgot an image!";

pub const NAME_TAKEN: &str = "Oops! A villain with that name already exists!";
pub const NAME_NOT_FOUND: &str = "Oops! A villain with that name doesn't exist!";

/// Shown in place of any internal failure detail.
pub const INTERNAL_ERROR: &str = "An internal error occurred";

//! REST API module.
//!
//! Handlers validate request shape, call the service, and map absent results
//! to 404. Bodies are the bare view models the frontend expects.

mod dashboard;
mod goals;
mod members;

pub use dashboard::*;
pub use goals::*;
pub use members::*;

use axum::extract::{FromRequest, FromRequestParts};

use crate::errors::AppError;
use crate::models::{Mood, MAX_DESCRIPTION_CHARS};

/// JSON body extractor that rejects with the API's `{ message }` shape.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

/// Path extractor that rejects with the API's `{ message }` shape.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct ApiPath<T>(pub T);

/// Check a goal description before it reaches the service.
pub fn validate_description(description: &str) -> Result<(), AppError> {
    if description.trim().is_empty() {
        return Err(AppError::Validation(
            "Goal description is required".to_string(),
        ));
    }
    if description.chars().count() > MAX_DESCRIPTION_CHARS {
        return Err(AppError::Validation(format!(
            "Goal description must be {} characters or less",
            MAX_DESCRIPTION_CHARS
        )));
    }
    Ok(())
}

/// Turn a raw mood ordinal from a request into a `Mood`.
pub fn parse_mood(ordinal: i64) -> Result<Mood, AppError> {
    Mood::try_from(ordinal).map_err(|_| AppError::Validation("Invalid mood value".to_string()))
}

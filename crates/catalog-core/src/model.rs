use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A stored product category
///
/// `created_at` serializes as an RFC 3339 string via chrono's serde
/// support; the timestamp format is fixed here at the type level rather
/// than by ambient serializer configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

/// Inbound payload for creating a category
///
/// Constraints are declared on the fields; the server's extractor runs
/// them before any handler logic sees the payload.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CategoryRequest {
    #[validate(custom(function = not_blank))]
    pub name: String,
    #[validate(custom(function = not_blank))]
    pub description: String,
}

fn not_blank(value: &str) -> Result<(), validator::ValidationError> {
    if value.trim().is_empty() {
        let mut error = validator::ValidationError::new("not_blank");
        error.message = Some("must not be blank".into());
        return Err(error);
    }
    Ok(())
}

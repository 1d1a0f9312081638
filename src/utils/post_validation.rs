use crate::utils::error::CustomError;
use serde_json::Value;

pub const CONTENT_MAX_CHARS: usize = 280;
pub const MAX_TAGS: usize = 5;

pub const CONTENT_LENGTH_MESSAGE: &str = "Content must be 1–280 characters";
pub const AUTHOR_REQUIRED_MESSAGE: &str = "Author is required";

/// A creation payload that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidPost {
    pub content: String,
    pub author: String,
    pub tags: Vec<String>,
}

/// Checks content first, then author. Only the first failure is reported.
pub fn validate_post(
    content: Option<&Value>,
    author: Option<&Value>,
    tags: Option<&Value>,
) -> Result<ValidPost, CustomError> {
    let content = match content.and_then(Value::as_str) {
        Some(c) if (1..=CONTENT_MAX_CHARS).contains(&c.chars().count()) => c.to_string(),
        _ => return Err(CustomError::ValidationError(CONTENT_LENGTH_MESSAGE.into())),
    };

    let author = match author.and_then(Value::as_str) {
        Some(a) if !a.is_empty() => a.to_string(),
        _ => return Err(CustomError::ValidationError(AUTHOR_REQUIRED_MESSAGE.into())),
    };

    Ok(ValidPost {
        content,
        author,
        tags: normalize_tags(tags),
    })
}

/// Keeps the first five entries of an array; anything else becomes empty.
pub fn normalize_tags(tags: Option<&Value>) -> Vec<String> {
    match tags {
        Some(Value::Array(items)) => items
            .iter()
            .take(MAX_TAGS)
            .filter_map(|t| t.as_str().map(str::to_string))
            .collect(),
        _ => Vec::new(),
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    Published,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Post {
    pub post_id: String,
    pub content: String,
    pub author: String,
    pub tags: Vec<String>,
    #[serde(with = "iso_millis")]
    pub created_at: DateTime<Utc>,
    pub likes: i64,
    pub status: PostStatus,
}

/// One entry of the persisted collection.
///
/// Records that do not have the exact shape of a `Post` (hand-edited ids,
/// other statuses, extra keys) are kept verbatim so a rewrite never drops them.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum StoredPost {
    Post(Post),
    Raw(Value),
}

/// Sort key for `createdAt`. Unparsable or missing timestamps order below
/// any valid one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum CreatedAt<'a> {
    Missing,
    Text(&'a str),
    Parsed(DateTime<Utc>),
}

impl StoredPost {
    pub fn created_at(&self) -> CreatedAt<'_> {
        match self {
            StoredPost::Post(post) => CreatedAt::Parsed(post.created_at),
            StoredPost::Raw(value) => match value.get("createdAt").and_then(Value::as_str) {
                Some(raw) => DateTime::parse_from_rfc3339(raw)
                    .map(|dt| CreatedAt::Parsed(dt.with_timezone(&Utc)))
                    .unwrap_or(CreatedAt::Text(raw)),
                None => CreatedAt::Missing,
            },
        }
    }
}

impl From<Post> for StoredPost {
    fn from(post: Post) -> Self {
        StoredPost::Post(post)
    }
}

/// Body of `POST /api/posts`.
///
/// Fields stay loosely typed so that a wrong JSON type is reported as a
/// validation failure rather than an extractor error.
#[derive(Debug, Deserialize)]
pub struct CreatePostRequest {
    #[serde(default)]
    pub content: Option<Value>,
    #[serde(default)]
    pub author: Option<Value>,
    #[serde(default)]
    pub tags: Option<Value>,
}

/// `createdAt` is written as `2025-01-31T12:00:00.123Z`.
mod iso_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}

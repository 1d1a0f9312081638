use chrono::{DateTime, SubsecRound, Utc};
use uuid::Uuid;

/// Generate a time-ordered post id (UUID v7)
pub fn generate_post_id() -> String {
    Uuid::now_v7().to_string()
}

/// Current time truncated to the millisecond precision we persist
pub fn now_millis() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}

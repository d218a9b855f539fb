use chrono::{DateTime, Utc};
use uuid::Uuid;

pub const USERNAME_MIN_CHARS: usize = 3;
pub const USERNAME_MAX_CHARS: usize = 20;
pub const PASSWORD_MIN_CHARS: usize = 8;

/// Public view of an account. The password hash never lives here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub display_name: Option<String>,
    pub bio: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Identity carried by a verified bearer token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    pub username: String,
}

pub fn normalize_username(raw: &str) -> &str {
    raw.trim()
}

/// Returns a message for every rule the username breaks. Input is expected
/// to be normalized already.
pub fn username_violations(username: &str) -> Vec<&'static str> {
    let len = username.chars().count();
    let mut out = Vec::new();
    if len == 0 {
        out.push("username is required");
    }
    if !(USERNAME_MIN_CHARS..=USERNAME_MAX_CHARS).contains(&len) {
        out.push("username must be between 3 and 20 characters");
    }
    if username.contains('\0') {
        out.push("username must not contain NUL characters");
    }
    out
}

pub fn password_violations(password: &str) -> Vec<&'static str> {
    let len = password.chars().count();
    let mut out = Vec::new();
    if len == 0 {
        out.push("password is required");
    }
    if len < PASSWORD_MIN_CHARS {
        out.push("password must be at least 8 characters");
    }
    out
}

use chrono::{DateTime, Utc};
use uuid::Uuid;

pub const CONTENT_MAX_CHARS: usize = 1000;

#[derive(Debug, Clone)]
pub struct Post {
    pub id: Uuid,
    pub user_id: Uuid,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// A post joined with the public fields of its author.
#[derive(Debug, Clone)]
pub struct PostWithAuthor {
    pub id: Uuid,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub user_id: Uuid,
    pub username: String,
    pub display_name: Option<String>,
}

/// Trims the content and checks it against the post rules.
pub fn normalize_content(raw: &str) -> Result<&str, &'static str> {
    let content = raw.trim();
    if content.is_empty() {
        return Err("content must not be empty");
    }
    if content.chars().count() > CONTENT_MAX_CHARS {
        return Err("content must not exceed 1000 characters");
    }
    if content.contains('\0') {
        return Err("content must not contain NUL characters");
    }
    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_only_is_empty() {
        assert_eq!(normalize_content(" \n\t "), Err("content must not be empty"));
    }

    #[test]
    fn limit_is_one_thousand_chars() {
        let exact = "x".repeat(1000);
        assert_eq!(normalize_content(&exact), Ok(exact.as_str()));
        assert!(normalize_content(&"x".repeat(1001)).is_err());
    }

    #[test]
    fn nul_in_content_is_rejected() {
        assert_eq!(
            normalize_content("hello\0world"),
            Err("content must not contain NUL characters")
        );
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        assert_eq!(normalize_content("  hello  "), Ok("hello"));
        let padded = format!("  {}  ", "y".repeat(1000));
        assert!(normalize_content(&padded).is_ok());
    }
}

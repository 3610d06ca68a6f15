// src/models/review.rs
use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Review {
    pub id: String,
    #[serde(default)]
    pub stall_id: String,
    #[serde(default)]
    pub user_id: String,
    pub user_name: String,
    pub comment: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Review {
    pub fn initial(&self) -> String {
        self.user_name
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }

    /// Calendar date of the review, if the backend sent a parseable timestamp.
    /// Accepts RFC 3339 and the offset-less ISO form.
    pub fn posted_on(&self) -> Option<String> {
        let raw = self.created_at.as_deref()?;
        let naive = DateTime::parse_from_rfc3339(raw)
            .map(|dt| dt.naive_utc())
            .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f"))
            .ok()?;
        Some(naive.format("%b %-d, %Y").to_string())
    }
}

/// Body of `POST /reviews`.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct NewReview {
    pub stall_id: String,
    pub comment: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn review(created_at: Option<&str>) -> Review {
        Review {
            id: "r1".into(),
            stall_id: "s1".into(),
            user_id: "u1".into(),
            user_name: "meera".into(),
            comment: "Clean counter".into(),
            created_at: created_at.map(str::to_string),
        }
    }

    #[test]
    fn test_posted_on_formats() {
        assert_eq!(
            review(Some("2024-05-01T10:00:00+00:00")).posted_on().as_deref(),
            Some("May 1, 2024")
        );
        assert_eq!(
            review(Some("2024-12-31T23:59:59.123456")).posted_on().as_deref(),
            Some("Dec 31, 2024")
        );
        assert_eq!(review(Some("yesterday")).posted_on(), None);
        assert_eq!(review(None).posted_on(), None);
    }

    #[test]
    fn test_review_decodes_minimal_body() {
        let body = r#"{"id": "r9", "user_name": "zoe", "comment": "ok"}"#;
        let parsed: Review = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.initial(), "Z");
        assert!(parsed.created_at.is_none());
    }
}

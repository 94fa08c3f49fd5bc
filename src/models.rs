//! Frontend Models
//!
//! Data structures matching the task API's JSON entities.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Task data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    pub description: String,
    pub is_deleted: bool,
    pub is_completed: bool,
    pub date_created: DateTime<Utc>,
    pub date_updated: DateTime<Utc>,
    pub user_id: String,
}

/// Where a task sits in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    Active,
    Completed,
    Trashed,
}

impl Task {
    /// Trashed wins over completed: a deleted task is trashed regardless of `is_completed`.
    pub fn lifecycle(&self) -> Lifecycle {
        if self.is_deleted {
            Lifecycle::Trashed
        } else if self.is_completed {
            Lifecycle::Completed
        } else {
            Lifecycle::Active
        }
    }

    /// Merge the present fields of `changes` into this task.
    pub fn apply(&mut self, changes: &TaskChanges) {
        if let Some(title) = &changes.title {
            self.title = title.clone();
        }
        if let Some(description) = &changes.description {
            self.description = description.clone();
        }
        if let Some(is_completed) = changes.is_completed {
            self.is_completed = is_completed;
        }
        if let Some(is_deleted) = changes.is_deleted {
            self.is_deleted = is_deleted;
        }
    }

    pub fn was_edited(&self) -> bool {
        self.date_updated != self.date_created
    }
}

/// Partial task fields reported by a task item after a confirmed mutation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub is_completed: Option<bool>,
    pub is_deleted: Option<bool>,
}

impl TaskChanges {
    pub fn completed(is_completed: bool) -> Self {
        Self {
            is_completed: Some(is_completed),
            ..Default::default()
        }
    }

    pub fn deleted(is_deleted: bool) -> Self {
        Self {
            is_deleted: Some(is_deleted),
            ..Default::default()
        }
    }
}

/// User data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub date_joined: DateTime<Utc>,
    pub last_profile_update: DateTime<Utc>,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Placeholder text for users without an avatar.
    pub fn initials(&self) -> String {
        self.first_name
            .chars()
            .take(1)
            .chain(self.last_name.chars().take(1))
            .collect()
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::{task, user};
    use super::*;

    #[test]
    fn test_lifecycle_trash_takes_precedence() {
        assert_eq!(task("a", false, false).lifecycle(), Lifecycle::Active);
        assert_eq!(task("a", true, false).lifecycle(), Lifecycle::Completed);
        assert_eq!(task("a", true, true).lifecycle(), Lifecycle::Trashed);
        assert_eq!(task("a", false, true).lifecycle(), Lifecycle::Trashed);
    }

    #[test]
    fn test_apply_only_touches_present_fields() {
        let mut t = task("a", false, false);
        t.apply(&TaskChanges {
            title: Some("Renamed".to_string()),
            ..Default::default()
        });
        assert_eq!(t.title, "Renamed");
        assert_eq!(t.description, "Description of a");
        assert!(!t.is_completed);

        t.apply(&TaskChanges::completed(true));
        assert!(t.is_completed);
        assert_eq!(t.title, "Renamed");
    }

    #[test]
    fn test_task_deserializes_camel_case() {
        let json = r#"{
            "id": "t1",
            "title": "Buy milk",
            "description": "2 litres",
            "isDeleted": false,
            "isCompleted": true,
            "dateCreated": "2024-03-01T09:30:00.000Z",
            "dateUpdated": "2024-03-02T10:00:00.000Z",
            "userId": "u-1"
        }"#;
        let t: Task = serde_json::from_str(json).unwrap();
        assert_eq!(t.id, "t1");
        assert!(t.is_completed);
        assert!(t.was_edited());
    }

    #[test]
    fn test_user_without_avatar() {
        let json = r#"{
            "id": "u-1",
            "firstName": "Ada",
            "lastName": "Lovelace",
            "username": "ada",
            "email": "ada@example.com",
            "dateJoined": "2023-11-05T12:00:00Z",
            "lastProfileUpdate": "2023-11-05T12:00:00Z"
        }"#;
        let u: User = serde_json::from_str(json).unwrap();
        assert_eq!(u.avatar, None);
        assert_eq!(u, user());
        assert_eq!(u.initials(), "AL");
        assert_eq!(u.full_name(), "Ada Lovelace");
    }
}

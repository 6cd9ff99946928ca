//! Payload validation.
//!
//! Pure functions from a raw JSON body to either a typed draft (create) or
//! patch (partial update), or a [`ValidationError`] naming every violated
//! field at once. Nothing here touches the store.
//!
//! Unknown fields are ignored, as are the server-managed `id`,
//! `lastUpdated`, and `version` fields, so a client echoing a fetched
//! entity back in a PATCH body is harmless. On patches, an explicit `null`
//! counts as absent: present-and-non-null overwrites, everything else
//! leaves the stored value unchanged.

use serde_json::{Map, Value};
use thiserror::Error;

use crate::models::{
    NewPageContent, NewQuickNavItem, NewSprint, NewTeamMember, PageContentPatch,
    QuickNavItemPatch, SprintPatch, TeamMemberPatch,
};

/// One violated field and what was wrong with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    pub field: String,
    pub message: String,
}

/// Validation failure carrying every violated field.
#[derive(Debug, Clone, Error)]
#[error("Validation error: {}", self.describe())]
pub struct ValidationError {
    pub issues: Vec<Issue>,
}

impl ValidationError {
    fn describe(&self) -> String {
        self.issues
            .iter()
            .map(|issue| format!("{} {}", issue.field, issue.message))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// Accumulates issues while a body is walked field by field.
#[derive(Debug, Default)]
struct Checker {
    issues: Vec<Issue>,
}

impl Checker {
    fn push(&mut self, field: &str, message: &str) {
        self.issues.push(Issue {
            field: field.to_string(),
            message: message.to_string(),
        });
    }

    /// Required string: missing or `null` is an error, as is a non-string.
    fn require_string(&mut self, body: &Map<String, Value>, field: &str) -> Option<String> {
        match body.get(field) {
            None | Some(Value::Null) => {
                self.push(field, "is required");
                None
            }
            Some(Value::String(s)) => Some(s.clone()),
            Some(_) => {
                self.push(field, "must be a string");
                None
            }
        }
    }

    /// Optional string: missing or `null` is fine, a non-string is not.
    fn optional_string(&mut self, body: &Map<String, Value>, field: &str) -> Option<String> {
        match body.get(field) {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) => Some(s.clone()),
            Some(_) => {
                self.push(field, "must be a string");
                None
            }
        }
    }

    /// Optional list of strings; any non-string element fails the field.
    fn optional_string_list(
        &mut self,
        body: &Map<String, Value>,
        field: &str,
    ) -> Option<Vec<String>> {
        match body.get(field) {
            None | Some(Value::Null) => None,
            Some(Value::Array(items)) => {
                let mut out = Vec::with_capacity(items.len());
                for item in items {
                    match item {
                        Value::String(s) => out.push(s.clone()),
                        _ => {
                            self.push(field, "must be an array of strings");
                            return None;
                        }
                    }
                }
                Some(out)
            }
            Some(_) => {
                self.push(field, "must be an array of strings");
                None
            }
        }
    }

    fn finish<T>(self, value: T) -> Result<T, ValidationError> {
        if self.issues.is_empty() {
            Ok(value)
        } else {
            Err(ValidationError {
                issues: self.issues,
            })
        }
    }
}

/// Bodies must be JSON objects; anything else is a single-issue failure.
fn as_object(body: &Value) -> Result<&Map<String, Value>, ValidationError> {
    body.as_object().ok_or_else(|| ValidationError {
        issues: vec![Issue {
            field: "body".into(),
            message: "must be a JSON object".into(),
        }],
    })
}

// =============================================================================
// Page contents
// =============================================================================

pub fn new_page_content(body: &Value) -> Result<NewPageContent, ValidationError> {
    let body = as_object(body)?;
    let mut check = Checker::default();

    let page_name = check.require_string(body, "pageName");
    let title = check.require_string(body, "title");
    let subtitle = check.optional_string(body, "subtitle");
    let content = check.require_string(body, "content");

    let draft = NewPageContent {
        page_name: page_name.unwrap_or_default(),
        title: title.unwrap_or_default(),
        subtitle,
        content: content.unwrap_or_default(),
    };
    check.finish(draft)
}

pub fn page_content_patch(body: &Value) -> Result<PageContentPatch, ValidationError> {
    let body = as_object(body)?;
    let mut check = Checker::default();

    let patch = PageContentPatch {
        title: check.optional_string(body, "title"),
        subtitle: check.optional_string(body, "subtitle"),
        content: check.optional_string(body, "content"),
    };
    check.finish(patch)
}

// =============================================================================
// Team members
// =============================================================================

pub fn new_team_member(body: &Value) -> Result<NewTeamMember, ValidationError> {
    let body = as_object(body)?;
    let mut check = Checker::default();

    let name = check.require_string(body, "name");
    let role = check.require_string(body, "role");
    let description = check.optional_string(body, "description");
    let initials = check.require_string(body, "initials");
    let skills = check.optional_string_list(body, "skills");

    let draft = NewTeamMember {
        name: name.unwrap_or_default(),
        role: role.unwrap_or_default(),
        description,
        initials: initials.unwrap_or_default(),
        skills: skills.unwrap_or_default(),
    };
    check.finish(draft)
}

pub fn team_member_patch(body: &Value) -> Result<TeamMemberPatch, ValidationError> {
    let body = as_object(body)?;
    let mut check = Checker::default();

    let patch = TeamMemberPatch {
        name: check.optional_string(body, "name"),
        role: check.optional_string(body, "role"),
        description: check.optional_string(body, "description"),
        initials: check.optional_string(body, "initials"),
        skills: check.optional_string_list(body, "skills"),
    };
    check.finish(patch)
}

// =============================================================================
// Sprints
// =============================================================================

pub fn new_sprint(body: &Value) -> Result<NewSprint, ValidationError> {
    let body = as_object(body)?;
    let mut check = Checker::default();

    let name = check.require_string(body, "name");
    let subtitle = check.optional_string(body, "subtitle");
    let date_range = check.require_string(body, "dateRange");
    let status = check.require_string(body, "status");
    let deliverables = check.optional_string_list(body, "deliverables");

    let draft = NewSprint {
        name: name.unwrap_or_default(),
        subtitle,
        date_range: date_range.unwrap_or_default(),
        status: status.unwrap_or_default(),
        deliverables: deliverables.unwrap_or_default(),
    };
    check.finish(draft)
}

pub fn sprint_patch(body: &Value) -> Result<SprintPatch, ValidationError> {
    let body = as_object(body)?;
    let mut check = Checker::default();

    let patch = SprintPatch {
        name: check.optional_string(body, "name"),
        subtitle: check.optional_string(body, "subtitle"),
        date_range: check.optional_string(body, "dateRange"),
        status: check.optional_string(body, "status"),
        deliverables: check.optional_string_list(body, "deliverables"),
    };
    check.finish(patch)
}

// =============================================================================
// Quick navigation items
// =============================================================================

pub fn new_quick_nav_item(body: &Value) -> Result<NewQuickNavItem, ValidationError> {
    let body = as_object(body)?;
    let mut check = Checker::default();

    let name = check.require_string(body, "name");
    let icon = check.require_string(body, "icon");
    let link = check.require_string(body, "link");

    let draft = NewQuickNavItem {
        name: name.unwrap_or_default(),
        icon: icon.unwrap_or_default(),
        link: link.unwrap_or_default(),
    };
    check.finish(draft)
}

pub fn quick_nav_item_patch(body: &Value) -> Result<QuickNavItemPatch, ValidationError> {
    let body = as_object(body)?;
    let mut check = Checker::default();

    let patch = QuickNavItemPatch {
        name: check.optional_string(body, "name"),
        icon: check.optional_string(body, "icon"),
        link: check.optional_string(body, "link"),
    };
    check.finish(patch)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_body_lists_every_missing_field() {
        let err = new_team_member(&json!({})).unwrap_err();

        let fields: Vec<&str> = err.issues.iter().map(|i| i.field.as_str()).collect();
        assert_eq!(fields, vec!["name", "role", "initials"]);

        let message = err.to_string();
        assert!(message.contains("name is required"));
        assert!(message.contains("role is required"));
        assert!(message.contains("initials is required"));
    }

    #[test]
    fn test_multiple_violations_reported_together() {
        let err = new_sprint(&json!({
            "name": 7,
            "dateRange": "Jul 1-14",
            "deliverables": ["X", 2],
        }))
        .unwrap_err();

        let fields: Vec<&str> = err.issues.iter().map(|i| i.field.as_str()).collect();
        assert_eq!(fields, vec!["name", "status", "deliverables"]);
    }

    #[test]
    fn test_valid_sprint_body() {
        let draft = new_sprint(&json!({
            "name": "Sprint 7",
            "dateRange": "Jul 1-14",
            "status": "Planned",
            "deliverables": ["X"],
        }))
        .unwrap();

        assert_eq!(draft.name, "Sprint 7");
        assert_eq!(draft.subtitle, None);
        assert_eq!(draft.deliverables, vec!["X".to_string()]);
    }

    #[test]
    fn test_server_managed_fields_ignored() {
        let draft = new_page_content(&json!({
            "pageName": "home",
            "title": "Home",
            "content": "{}",
            "id": 99,
            "version": 42,
            "lastUpdated": "2020-01-01T00:00:00Z",
        }))
        .unwrap();

        assert_eq!(draft.page_name, "home");
    }

    #[test]
    fn test_patch_all_fields_optional() {
        let patch = team_member_patch(&json!({})).unwrap();
        assert!(patch.name.is_none());
        assert!(patch.skills.is_none());
    }

    #[test]
    fn test_patch_null_treated_as_absent() {
        let patch = page_content_patch(&json!({"title": null, "content": "x"})).unwrap();
        assert!(patch.title.is_none());
        assert_eq!(patch.content.as_deref(), Some("x"));
    }

    #[test]
    fn test_patch_rejects_wrong_types() {
        let err = sprint_patch(&json!({"status": 3, "deliverables": "not-a-list"})).unwrap_err();
        let fields: Vec<&str> = err.issues.iter().map(|i| i.field.as_str()).collect();
        assert_eq!(fields, vec!["status", "deliverables"]);
    }

    #[test]
    fn test_non_object_body_rejected() {
        let err = new_quick_nav_item(&json!([1, 2, 3])).unwrap_err();
        assert_eq!(err.issues.len(), 1);
        assert_eq!(err.issues[0].field, "body");
    }
}

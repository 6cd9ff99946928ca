//! Entity, draft, and patch types.
//!
//! Each record type comes in three shapes:
//!
//! - the stored entity, serialized to the client in camelCase;
//! - a `New*` draft, the validated form of a create payload;
//! - a `*Patch`, the validated form of a partial-update payload, holding
//!   only the fields the client supplied.
//!
//! Server-managed fields (`id`, `lastUpdated`, `version`) appear only on
//! entities, never on drafts or patches.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// =============================================================================
// Page contents
// =============================================================================

/// A named, versioned document record driving one route of the front end.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageContent {
    /// Unique key; immutable after creation.
    pub page_name: String,
    pub title: String,
    pub subtitle: Option<String>,
    /// Opaque serialized text, typically page-specific nested JSON. The
    /// store only guarantees it is a string.
    pub content: String,
    /// Set by the store on every write; never client-supplied.
    pub last_updated: DateTime<Utc>,
    /// Starts at 1, incremented by the store on every update.
    pub version: u32,
}

/// Validated create payload for a page.
#[derive(Debug, Clone)]
pub struct NewPageContent {
    pub page_name: String,
    pub title: String,
    pub subtitle: Option<String>,
    pub content: String,
}

/// Validated partial-update payload for a page. `page_name` is the lookup
/// key and cannot be patched.
#[derive(Debug, Clone, Default)]
pub struct PageContentPatch {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub content: Option<String>,
}

impl PageContentPatch {
    /// Merge present fields onto an existing page. Version and timestamp
    /// bookkeeping is the store's job.
    pub fn apply(self, page: &mut PageContent) {
        if let Some(title) = self.title {
            page.title = title;
        }
        if let Some(subtitle) = self.subtitle {
            page.subtitle = Some(subtitle);
        }
        if let Some(content) = self.content {
            page.content = content;
        }
    }
}

// =============================================================================
// Team members
// =============================================================================

/// A member profile shown on the team page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub id: u64,
    pub name: String,
    pub role: String,
    pub description: Option<String>,
    pub initials: String,
    pub skills: Vec<String>,
}

/// Validated create payload for a team member.
#[derive(Debug, Clone)]
pub struct NewTeamMember {
    pub name: String,
    pub role: String,
    pub description: Option<String>,
    pub initials: String,
    pub skills: Vec<String>,
}

/// Validated partial-update payload for a team member.
#[derive(Debug, Clone, Default)]
pub struct TeamMemberPatch {
    pub name: Option<String>,
    pub role: Option<String>,
    pub description: Option<String>,
    pub initials: Option<String>,
    pub skills: Option<Vec<String>>,
}

impl TeamMemberPatch {
    pub fn apply(self, member: &mut TeamMember) {
        if let Some(name) = self.name {
            member.name = name;
        }
        if let Some(role) = self.role {
            member.role = role;
        }
        if let Some(description) = self.description {
            member.description = Some(description);
        }
        if let Some(initials) = self.initials {
            member.initials = initials;
        }
        if let Some(skills) = self.skills {
            member.skills = skills;
        }
    }
}

// =============================================================================
// Sprints
// =============================================================================

/// One sprint on the project timeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sprint {
    pub id: u64,
    pub name: String,
    pub subtitle: Option<String>,
    /// Free-text, e.g. "Apr 9 - Apr 22, 2025".
    pub date_range: String,
    /// Free-text; consumers compare it case-insensitively.
    pub status: String,
    pub deliverables: Vec<String>,
}

/// Validated create payload for a sprint.
#[derive(Debug, Clone)]
pub struct NewSprint {
    pub name: String,
    pub subtitle: Option<String>,
    pub date_range: String,
    pub status: String,
    pub deliverables: Vec<String>,
}

/// Validated partial-update payload for a sprint.
#[derive(Debug, Clone, Default)]
pub struct SprintPatch {
    pub name: Option<String>,
    pub subtitle: Option<String>,
    pub date_range: Option<String>,
    pub status: Option<String>,
    pub deliverables: Option<Vec<String>>,
}

impl SprintPatch {
    pub fn apply(self, sprint: &mut Sprint) {
        if let Some(name) = self.name {
            sprint.name = name;
        }
        if let Some(subtitle) = self.subtitle {
            sprint.subtitle = Some(subtitle);
        }
        if let Some(date_range) = self.date_range {
            sprint.date_range = date_range;
        }
        if let Some(status) = self.status {
            sprint.status = status;
        }
        if let Some(deliverables) = self.deliverables {
            sprint.deliverables = deliverables;
        }
    }
}

// =============================================================================
// Quick navigation items
// =============================================================================

/// A shortcut tile on the home page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickNavItem {
    pub id: u64,
    pub name: String,
    /// Icon identifier understood by the front end, e.g. "users".
    pub icon: String,
    /// Route path, e.g. "/team".
    pub link: String,
}

/// Validated create payload for a quick-nav item.
#[derive(Debug, Clone)]
pub struct NewQuickNavItem {
    pub name: String,
    pub icon: String,
    pub link: String,
}

/// Validated partial-update payload for a quick-nav item.
#[derive(Debug, Clone, Default)]
pub struct QuickNavItemPatch {
    pub name: Option<String>,
    pub icon: Option<String>,
    pub link: Option<String>,
}

impl QuickNavItemPatch {
    pub fn apply(self, item: &mut QuickNavItem) {
        if let Some(name) = self.name {
            item.name = name;
        }
        if let Some(icon) = self.icon {
            item.icon = icon;
        }
        if let Some(link) = self.link {
            item.link = link;
        }
    }
}

// =============================================================================
// Users
// =============================================================================

/// An admin account. Created only at seeding; read for login.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: u64,
    pub username: String,
    /// Plaintext; compared directly at login and never serialized out.
    #[serde(skip_serializing)]
    pub password: String,
}

/// Draft for a user record.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_content_wire_format() {
        let page = PageContent {
            page_name: "home".into(),
            title: "Home".into(),
            subtitle: None,
            content: "{}".into(),
            last_updated: Utc::now(),
            version: 1,
        };

        let json = serde_json::to_string(&page).unwrap();
        assert!(json.contains("\"pageName\":\"home\""));
        assert!(json.contains("\"lastUpdated\""));
        assert!(json.contains("\"version\":1"));
    }

    #[test]
    fn test_sprint_wire_format() {
        let sprint = Sprint {
            id: 3,
            name: "Sprint 3".into(),
            subtitle: Some("Planning".into()),
            date_range: "May 8 - May 21, 2025".into(),
            status: "Planned".into(),
            deliverables: vec!["Task assignments".into()],
        };

        let json = serde_json::to_string(&sprint).unwrap();
        assert!(json.contains("\"dateRange\":\"May 8 - May 21, 2025\""));
        assert!(json.contains("\"id\":3"));
    }

    #[test]
    fn test_user_password_never_serialized() {
        let user = User {
            id: 1,
            username: "admin".into(),
            password: "admin123".into(),
        };

        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("admin123"));
        assert!(!json.contains("password"));
    }

    #[test]
    fn test_patch_apply_merges_present_fields_only() {
        let mut member = TeamMember {
            id: 1,
            name: "Jane Doe".into(),
            role: "Project Manager".into(),
            description: Some("Leads the team.".into()),
            initials: "JD".into(),
            skills: vec!["Leadership".into()],
        };

        TeamMemberPatch {
            role: Some("Scrum Master".into()),
            ..Default::default()
        }
        .apply(&mut member);

        assert_eq!(member.role, "Scrum Master");
        assert_eq!(member.name, "Jane Doe");
        assert_eq!(member.description.as_deref(), Some("Leads the team."));
        assert_eq!(member.skills, vec!["Leadership".to_string()]);
    }
}

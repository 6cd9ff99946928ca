//! In-memory record store.
//!
//! [`MemStore`] is the authoritative holder of all entity state for the
//! lifetime of the process. One instance is constructed at startup and
//! handed to every handler through [`crate::state::AppState`]; tests build
//! their own isolated instances.
//!
//! All maps and id counters live behind a single `RwLock`, so every
//! mutation is all-or-nothing and immediately visible to subsequent reads.
//! Ids are allocated per type starting at 1 and are never reused, even
//! after deletes.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;

use crate::models::{
    NewPageContent, NewQuickNavItem, NewSprint, NewTeamMember, NewUser, PageContent,
    PageContentPatch, QuickNavItem, QuickNavItemPatch, Sprint, SprintPatch, TeamMember,
    TeamMemberPatch, User,
};

#[derive(Debug)]
struct Inner {
    users: HashMap<u64, User>,
    pages: HashMap<String, PageContent>,
    members: HashMap<u64, TeamMember>,
    sprints: HashMap<u64, Sprint>,
    nav_items: HashMap<u64, QuickNavItem>,
    next_user_id: u64,
    next_member_id: u64,
    next_sprint_id: u64,
    next_nav_id: u64,
}

impl Inner {
    fn new() -> Self {
        Self {
            users: HashMap::new(),
            pages: HashMap::new(),
            members: HashMap::new(),
            sprints: HashMap::new(),
            nav_items: HashMap::new(),
            next_user_id: 1,
            next_member_id: 1,
            next_sprint_id: 1,
            next_nav_id: 1,
        }
    }
}

/// Takes the current value and advances the counter; ids never go backwards.
fn alloc_id(counter: &mut u64) -> u64 {
    let id = *counter;
    *counter += 1;
    id
}

/// Shared in-memory store. Cloning is cheap and refers to the same state.
#[derive(Debug, Clone)]
pub struct MemStore {
    inner: Arc<RwLock<Inner>>,
}

impl MemStore {
    /// An empty store with no records.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(Inner::new())),
        }
    }

    /// A store seeded with the default site content.
    pub async fn with_defaults() -> Self {
        let store = Self::new();
        crate::seed::seed_defaults(&store).await;
        store
    }

    // -------------------------------------------------------------------------
    // Users
    // -------------------------------------------------------------------------

    pub async fn user(&self, id: u64) -> Option<User> {
        self.inner.read().await.users.get(&id).cloned()
    }

    pub async fn user_by_username(&self, username: &str) -> Option<User> {
        let inner = self.inner.read().await;
        inner
            .users
            .values()
            .find(|user| user.username == username)
            .cloned()
    }

    pub async fn create_user(&self, draft: NewUser) -> User {
        let mut inner = self.inner.write().await;
        let id = alloc_id(&mut inner.next_user_id);
        let user = User {
            id,
            username: draft.username,
            password: draft.password,
        };
        inner.users.insert(id, user.clone());
        user
    }

    // -------------------------------------------------------------------------
    // Page contents
    // -------------------------------------------------------------------------

    pub async fn page(&self, page_name: &str) -> Option<PageContent> {
        self.inner.read().await.pages.get(page_name).cloned()
    }

    pub async fn pages(&self) -> Vec<PageContent> {
        self.inner.read().await.pages.values().cloned().collect()
    }

    /// Insert a page under its caller-supplied name. An existing entry with
    /// the same name is silently replaced (last-write-wins) and versioning
    /// restarts at 1.
    pub async fn create_page(&self, draft: NewPageContent) -> PageContent {
        let page = PageContent {
            page_name: draft.page_name.clone(),
            title: draft.title,
            subtitle: draft.subtitle,
            content: draft.content,
            last_updated: Utc::now(),
            version: 1,
        };
        let mut inner = self.inner.write().await;
        inner.pages.insert(draft.page_name, page.clone());
        page
    }

    /// Merge a patch onto an existing page, stamping `last_updated` and
    /// incrementing `version`. `None` when the name is unknown; a missing
    /// page is never created here.
    pub async fn update_page(&self, page_name: &str, patch: PageContentPatch) -> Option<PageContent> {
        let mut inner = self.inner.write().await;
        let page = inner.pages.get_mut(page_name)?;
        patch.apply(page);
        page.last_updated = Utc::now();
        page.version += 1;
        Some(page.clone())
    }

    // -------------------------------------------------------------------------
    // Team members
    // -------------------------------------------------------------------------

    pub async fn member(&self, id: u64) -> Option<TeamMember> {
        self.inner.read().await.members.get(&id).cloned()
    }

    pub async fn members(&self) -> Vec<TeamMember> {
        self.inner.read().await.members.values().cloned().collect()
    }

    pub async fn create_member(&self, draft: NewTeamMember) -> TeamMember {
        let mut inner = self.inner.write().await;
        let id = alloc_id(&mut inner.next_member_id);
        let member = TeamMember {
            id,
            name: draft.name,
            role: draft.role,
            description: draft.description,
            initials: draft.initials,
            skills: draft.skills,
        };
        inner.members.insert(id, member.clone());
        member
    }

    pub async fn update_member(&self, id: u64, patch: TeamMemberPatch) -> Option<TeamMember> {
        let mut inner = self.inner.write().await;
        let member = inner.members.get_mut(&id)?;
        patch.apply(member);
        Some(member.clone())
    }

    pub async fn delete_member(&self, id: u64) -> bool {
        self.inner.write().await.members.remove(&id).is_some()
    }

    // -------------------------------------------------------------------------
    // Sprints
    // -------------------------------------------------------------------------

    pub async fn sprint(&self, id: u64) -> Option<Sprint> {
        self.inner.read().await.sprints.get(&id).cloned()
    }

    pub async fn sprints(&self) -> Vec<Sprint> {
        self.inner.read().await.sprints.values().cloned().collect()
    }

    pub async fn create_sprint(&self, draft: NewSprint) -> Sprint {
        let mut inner = self.inner.write().await;
        let id = alloc_id(&mut inner.next_sprint_id);
        let sprint = Sprint {
            id,
            name: draft.name,
            subtitle: draft.subtitle,
            date_range: draft.date_range,
            status: draft.status,
            deliverables: draft.deliverables,
        };
        inner.sprints.insert(id, sprint.clone());
        sprint
    }

    pub async fn update_sprint(&self, id: u64, patch: SprintPatch) -> Option<Sprint> {
        let mut inner = self.inner.write().await;
        let sprint = inner.sprints.get_mut(&id)?;
        patch.apply(sprint);
        Some(sprint.clone())
    }

    pub async fn delete_sprint(&self, id: u64) -> bool {
        self.inner.write().await.sprints.remove(&id).is_some()
    }

    // -------------------------------------------------------------------------
    // Quick navigation items
    // -------------------------------------------------------------------------

    pub async fn nav_item(&self, id: u64) -> Option<QuickNavItem> {
        self.inner.read().await.nav_items.get(&id).cloned()
    }

    pub async fn nav_items(&self) -> Vec<QuickNavItem> {
        self.inner.read().await.nav_items.values().cloned().collect()
    }

    pub async fn create_nav_item(&self, draft: NewQuickNavItem) -> QuickNavItem {
        let mut inner = self.inner.write().await;
        let id = alloc_id(&mut inner.next_nav_id);
        let item = QuickNavItem {
            id,
            name: draft.name,
            icon: draft.icon,
            link: draft.link,
        };
        inner.nav_items.insert(id, item.clone());
        item
    }

    pub async fn update_nav_item(&self, id: u64, patch: QuickNavItemPatch) -> Option<QuickNavItem> {
        let mut inner = self.inner.write().await;
        let item = inner.nav_items.get_mut(&id)?;
        patch.apply(item);
        Some(item.clone())
    }

    pub async fn delete_nav_item(&self, id: u64) -> bool {
        self.inner.write().await.nav_items.remove(&id).is_some()
    }
}

impl Default for MemStore {
    fn default() -> Self {
        Self::new()
    }
}

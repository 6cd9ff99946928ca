//! Default site content.
//!
//! Loaded once at startup into a fresh [`MemStore`]. The page `content`
//! blobs are JSON-encoded strings with page-specific shapes; the store
//! treats them as opaque text and the front end decodes them per page.

use serde_json::json;

use crate::models::{NewPageContent, NewQuickNavItem, NewSprint, NewTeamMember, NewUser};
use crate::store::MemStore;

/// Populate a store with the admin user, the eight known pages, the team
/// roster, the sprint timeline, and the home-page quick-nav tiles.
pub async fn seed_defaults(store: &MemStore) {
    store
        .create_user(NewUser {
            username: "admin".into(),
            password: "admin123".into(),
        })
        .await;

    for page in default_pages() {
        store.create_page(page).await;
    }
    for member in default_team_members() {
        store.create_member(member).await;
    }
    for sprint in default_sprints() {
        store.create_sprint(sprint).await;
    }
    for item in default_nav_items() {
        store.create_nav_item(item).await;
    }
}

fn page(name: &str, title: &str, subtitle: &str, content: serde_json::Value) -> NewPageContent {
    NewPageContent {
        page_name: name.into(),
        title: title.into(),
        subtitle: if subtitle.is_empty() {
            None
        } else {
            Some(subtitle.into())
        },
        content: content.to_string(),
    }
}

fn default_pages() -> Vec<NewPageContent> {
    vec![
        page(
            "home",
            "Project Documentation Hub",
            "Comprehensive documentation for our 12-week capstone project",
            json!({
                "intro": {
                    "title": "Welcome to Project Pilots",
                    "content": "This documentation hub serves as the central repository for all artifacts, progress updates, and deliverables related to our 12-week capstone project. Navigate through the different sections using the sidebar to explore team information, project sprints, and more."
                },
                "projectScope": {
                    "title": "Project Scope: Scope of Work",
                    "content": "We're partnering with The Knots Studio, a heart-first, style-savvy gifting startup from Bangalore, to design a clean, modern business website that reflects the brand's charm and purpose. Our scope includes crafting a mobile-friendly, SEO-optimized website that showcases their story, services, and gifting galleries, while making it easy for potential clients to discover, connect, and reach out."
                },
                "timeline": {
                    "title": "Project Timeline",
                    "content": "12 weeks (January 15 - April 8, 2025)",
                    "progress": 75,
                    "currentWeek": "Week 9 of 12"
                },
                "updates": {
                    "title": "Latest Updates",
                    "items": [
                        "Sprint 4 completed with all deliverables",
                        "Team retrospective scheduled for April 22",
                        "Client presentation draft submitted"
                    ]
                }
            }),
        ),
        page(
            "team",
            "Meet Project Pilots",
            "The dedicated members behind this project",
            json!({
                "intro": { "title": "Meet Project Pilots", "content": "" }
            }),
        ),
        page(
            "team-charter",
            "Team Charter",
            "Our guiding principles and project governance",
            json!({
                "intro": {
                    "title": "Project Pilots – The KnotStudio Capstone Team",
                    "content": "The Project Pilots are a team of six graduate students from Northeastern University's Project Management program, collaborating to deliver a real-world capstone project for The KnotStudio. This charter defines our shared purpose, working structure, communication practices, and guiding principles."
                },
                "mission": {
                    "title": "Purpose",
                    "content": "Our objective is to plan, manage, and execute a high-quality project using project management tools and methodologies. We are committed to aligning client expectations with academic outcomes through Agile, Scrum, and Waterfall practices."
                },
                "values": {
                    "title": "Team Composition & Strengths",
                    "items": [
                        { "title": "Team Composition", "content": "Our team members bring varied experience from event planning, IT, construction, biotech, and operations. We rotate the role of Scrum Master weekly to foster shared leadership and learning." },
                        { "title": "Scrum Master", "content": "Leads weekly planning, progress tracking, and team coordination." },
                        { "title": "Developer Team", "content": "Executes project deliverables with responsibilities adjusted weekly based on the project phase." },
                        { "title": "Team Strengths", "content": "Our team demonstrates strong organizational, analytical, and execution skills. Strengths like coaching and self-leadership contribute to positive morale and accountability." },
                        { "title": "Growth Areas", "content": "Recognizing areas for growth in strategic thinking and creative problem-solving, we proactively balance team responsibilities to develop in these areas." }
                    ]
                },
                "agreements": {
                    "title": "Tools & Communication",
                    "communication": {
                        "title": "Platforms",
                        "items": [
                            "Microsoft Teams (documentation, meetings)",
                            "Email (formal updates)",
                            "WhatsApp (real-time updates)"
                        ]
                    },
                    "decisions": {
                        "title": "Meetings",
                        "items": [
                            "Mondays: Virtual team meeting",
                            "Wednesdays: In-class check-in",
                            "Saturdays: Informal WhatsApp updates",
                            "Thursdays: Weekly client check-in (virtual)"
                        ]
                    }
                },
                "conflict": {
                    "title": "Ground Rules & Conflict Resolution",
                    "items": [
                        "Attendance is mandatory at all meetings unless excused in advance.",
                        "All assigned work must be completed on time. Missed contributions are addressed progressively through team support, discussion, and potential escalation.",
                        "Drafts are expected 48 hours prior to deadlines for peer review.",
                        "Final versions are submitted to the shared drive at least 4 hours before the official deadline.",
                        "Conflicts are addressed respectfully through open dialogue. If needed, the Scrum Master will mediate. If unresolved, the matter is escalated to the faculty advisor.",
                        "Major decisions are made through team consensus. For urgent or minor matters, the current Scrum Master or designated lead may make the call after brief consultation."
                    ]
                },
                "signatures": {
                    "title": "Team Member Signatures",
                    "content": "By signing this charter, each team member agrees to uphold these principles throughout the project."
                }
            }),
        ),
        page(
            "project-sprints",
            "Project Sprints",
            "",
            json!({
                "intro": { "title": "Project Sprints Timeline", "content": "" },
                "currentSprint": {
                    "title": "Current Sprint Details",
                    "name": "Sprint 2: Sponsor Research & Scope",
                    "date": "April 23 - May 7, 2025",
                    "status": "Completed",
                    "goals": [
                        "Gather sponsor information for The Knots Studio",
                        "Update team charter with client requirements",
                        "Create draft scope document",
                        "Prepare weekly status reports",
                        "Conduct initial client needs analysis"
                    ],
                    "progress": 100,
                    "tasks": "10 of 10 tasks completed (100%)",
                    "metrics": [
                        { "name": "Stories", "value": "12/12" },
                        { "name": "Story Points", "value": "45/45" },
                        { "name": "Tasks Completed", "value": "10" }
                    ]
                }
            }),
        ),
        page(
            "retrospective",
            "Retrospective",
            "Team reflections and continuous improvement",
            json!({
                "intro": {
                    "title": "Sprint Retrospectives",
                    "content": "Regular reflection on our process, achievements, and areas for improvement"
                },
                "placeholder": "Detailed retrospective content will be added following each sprint completion."
            }),
        ),
        page(
            "collaboration",
            "Collaboration",
            "",
            json!({
                "intro": { "title": "Team Collaboration", "content": "" },
                "placeholder": "Collaboration documentation is currently being updated."
            }),
        ),
        page(
            "jira",
            "Jira Integration",
            "Task tracking and project management",
            json!({
                "intro": {
                    "title": "Jira Dashboard",
                    "content": "Integration with our project management system"
                },
                "placeholder": "Jira integration is in progress."
            }),
        ),
        page(
            "clients-project",
            "Client's Project",
            "Details about our client and project scope",
            json!({
                "intro": {
                    "title": "Client Project Overview",
                    "content": "Information about our client and the project requirements"
                },
                "placeholder": "Client project information is currently being updated."
            }),
        ),
    ]
}

fn member(name: &str, role: &str, description: &str, initials: &str, skills: &[&str]) -> NewTeamMember {
    NewTeamMember {
        name: name.into(),
        role: role.into(),
        description: Some(description.into()),
        initials: initials.into(),
        skills: skills.iter().map(|s| s.to_string()).collect(),
    }
}

fn default_team_members() -> Vec<NewTeamMember> {
    vec![
        member(
            "Jane Doe",
            "Project Manager",
            "Experienced in leading cross-functional teams and ensuring project deliverables meet timelines.",
            "JD",
            &["Leadership", "Agile", "Communication"],
        ),
        member(
            "John Smith",
            "Lead Developer",
            "Focused on architecture and implementation of technical solutions with a focus on scalability.",
            "JS",
            &["Full-Stack", "API Design", "Cloud"],
        ),
        member(
            "Amy Lee",
            "UX Designer",
            "Creates user-centered designs with a focus on accessibility and intuitive interactions.",
            "AL",
            &["UI/UX", "Prototyping", "User Research"],
        ),
        member(
            "Michael Johnson",
            "Data Analyst",
            "Specializes in data modeling, analysis, and creating insightful visualizations for decision making.",
            "MJ",
            &["Analytics", "Data Science", "Visualization"],
        ),
        member(
            "Sarah Parker",
            "Business Analyst",
            "Bridges technical and business requirements, ensuring solutions align with stakeholder needs.",
            "SP",
            &["Requirements", "Documentation", "Testing"],
        ),
    ]
}

fn sprint(
    name: &str,
    subtitle: &str,
    date_range: &str,
    status: &str,
    deliverables: &[&str],
) -> NewSprint {
    NewSprint {
        name: name.into(),
        subtitle: Some(subtitle.into()),
        date_range: date_range.into(),
        status: status.into(),
        deliverables: deliverables.iter().map(|s| s.to_string()).collect(),
    }
}

fn default_sprints() -> Vec<NewSprint> {
    vec![
        sprint(
            "Sprint 1",
            "Team Setup & Foundation",
            "Apr 9 - Apr 22, 2025",
            "Completed",
            &[
                "Team member bios and profiles",
                "Team name and identity",
                "Project website setup",
                "Team charter creation",
                "Sprint planning",
                "Create Jira Scrum board",
            ],
        ),
        sprint(
            "Sprint 2",
            "Sponsor Research & Scope",
            "Apr 23 - May 7, 2025",
            "Completed",
            &[
                "Sponsor information gathering",
                "Charter updates",
                "Client scope requirements",
                "Draft scope document",
                "Status reports",
                "Team retrospective",
            ],
        ),
        sprint(
            "Sprint 3",
            "Project Planning & Tasks",
            "May 8 - May 21, 2025",
            "Planned",
            &[
                "Detailed project planning",
                "Task assignments",
                "Technical requirements",
                "Stakeholder communication plan",
            ],
        ),
        sprint(
            "Sprint 4",
            "Design & Development",
            "May 22 - Jun 4, 2025",
            "Planned",
            &[
                "Website mockups",
                "Branding guidelines",
                "Content development",
                "Initial prototype",
            ],
        ),
        sprint(
            "Sprint 5",
            "Implementation & Testing",
            "Jun 5 - Jun 18, 2025",
            "Planned",
            &[
                "Core functionality implementation",
                "Content integration",
                "User testing",
                "Optimization",
            ],
        ),
        sprint(
            "Sprint 6",
            "Final Delivery & Presentation",
            "Jun 19 - Jun 27, 2025",
            "Planned",
            &[
                "Final testing",
                "Client deliverable preparation",
                "Documentation completion",
                "Capstone presentation",
            ],
        ),
    ]
}

fn default_nav_items() -> Vec<NewQuickNavItem> {
    let items = [
        ("Team", "users", "/team"),
        ("Sprints", "zap", "/project-sprints"),
        ("Retrospective", "lightbulb", "/retrospective"),
        ("Client Project", "briefcase", "/clients-project"),
    ];
    items
        .into_iter()
        .map(|(name, icon, link)| NewQuickNavItem {
            name: name.into(),
            icon: icon.into(),
            link: link.into(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_seed_counts() {
        let store = MemStore::with_defaults().await;

        assert_eq!(store.pages().await.len(), 8);
        assert_eq!(store.members().await.len(), 5);
        assert_eq!(store.sprints().await.len(), 6);
        assert_eq!(store.nav_items().await.len(), 4);
        assert!(store.user_by_username("admin").await.is_some());
    }

    #[tokio::test]
    async fn test_seeded_pages_start_at_version_one() {
        let store = MemStore::with_defaults().await;
        for page in store.pages().await {
            assert_eq!(page.version, 1, "page {}", page.page_name);
        }
    }

    #[tokio::test]
    async fn test_seeded_page_content_is_json() {
        let store = MemStore::with_defaults().await;
        let home = store.page("home").await.unwrap();

        let decoded: serde_json::Value = serde_json::from_str(&home.content).unwrap();
        assert!(decoded.get("intro").is_some());
        assert!(decoded.get("timeline").is_some());
    }

    #[tokio::test]
    async fn test_next_sprint_id_follows_defaults() {
        let store = MemStore::with_defaults().await;
        let created = store
            .create_sprint(NewSprint {
                name: "Sprint 7".into(),
                subtitle: None,
                date_range: "Jul 1-14".into(),
                status: "Planned".into(),
                deliverables: vec!["X".into()],
            })
            .await;

        assert_eq!(created.id, 7);
    }
}

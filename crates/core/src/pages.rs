//! Static index of admin-panel pages.
//!
//! Used as the search fallback: when the cross-entity fan-out finds no
//! rows, the aggregator filters this list by substring instead so the
//! search box always leads somewhere useful.

use crate::search::SearchHit;

/// A navigable admin page.
#[derive(Debug, Clone, Copy)]
pub struct AdminPage {
    pub name: &'static str,
    pub description: &'static str,
    pub path: &'static str,
}

/// Every screen reachable from the admin sidebar.
pub const ADMIN_PAGES: &[AdminPage] = &[
    AdminPage {
        name: "Dashboard",
        description: "Overview of content counts and recent activity",
        path: "/admin",
    },
    AdminPage {
        name: "Projects",
        description: "Manage portfolio projects and their image galleries",
        path: "/admin/projects",
    },
    AdminPage {
        name: "Services",
        description: "Manage the services shown on the home page",
        path: "/admin/services",
    },
    AdminPage {
        name: "Skills",
        description: "Manage skills, proficiency levels and floating icons",
        path: "/admin/skills",
    },
    AdminPage {
        name: "Experience",
        description: "Manage work experience and education entries",
        path: "/admin/experience",
    },
    AdminPage {
        name: "Testimonials",
        description: "Review and approve client testimonials",
        path: "/admin/testimonials",
    },
    AdminPage {
        name: "Social Links",
        description: "Manage social media profiles and icons",
        path: "/admin/social-links",
    },
    AdminPage {
        name: "Banners",
        description: "Manage home page banner images",
        path: "/admin/banners",
    },
    AdminPage {
        name: "Messages",
        description: "Read contact form submissions",
        path: "/admin/messages",
    },
    AdminPage {
        name: "Settings",
        description: "Site settings and section visibility",
        path: "/admin/settings",
    },
];

/// Filter the page index by case-insensitive substring on name or
/// description, returning hits in the uniform search shape.
pub fn filter_pages(query: &str) -> Vec<SearchHit> {
    let needle = query.to_lowercase();
    ADMIN_PAGES
        .iter()
        .filter(|page| {
            page.name.to_lowercase().contains(&needle)
                || page.description.to_lowercase().contains(&needle)
        })
        .map(|page| SearchHit {
            kind: "page",
            id: None,
            title: page.name.to_string(),
            description: Some(page.description.to_string()),
            date: None,
            status: None,
            url: page.path.to_string(),
        })
        .collect()
}

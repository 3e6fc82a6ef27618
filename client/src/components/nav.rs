//! Navigation items for the admin and club sidebars.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::paths::{admin_path, club_path};

/// One sidebar link.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub href: String,
    /// Only mark the link current on an exact path match. Area roots set this
    /// so they are not highlighted on every page below them.
    pub exact: bool,
}

impl NavItem {
    fn new(label: &'static str, href: String) -> Self {
        Self { label, href, exact: false }
    }

    fn root(label: &'static str, href: String) -> Self {
        Self { label, href, exact: true }
    }
}

/// Links shown in the admin sidebar.
pub fn admin_nav_items() -> Vec<NavItem> {
    vec![
        NavItem::root("Dashboard", admin_path("")),
        NavItem::new("Clubs", admin_path("clubs")),
        NavItem::new("Members", admin_path("members")),
    ]
}

/// Links shown in the sidebar of one club.
pub fn club_nav_items(club_id: &str) -> Vec<NavItem> {
    vec![
        NavItem::root("Overview", club_path(club_id, "")),
        NavItem::new("Members", club_path(club_id, "members")),
        NavItem::new("Events", club_path(club_id, "events")),
    ]
}

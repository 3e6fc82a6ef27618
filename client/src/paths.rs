//! URL paths for the admin and club areas.
//!
//! Sidebars and redirects build links through these helpers so the route
//! table in `app` and the links rendered in chrome cannot drift apart.

#[cfg(test)]
#[path = "paths_test.rs"]
mod paths_test;

/// Mount point of the admin area.
pub const ADMIN_ROOT: &str = "/admin";

/// Mount point of the club area; followed by the club id.
pub const CLUB_ROOT: &str = "/club";

/// Path to a section of the admin area. An empty section is the area root.
pub fn admin_path(section: &str) -> String {
    join(ADMIN_ROOT, section)
}

/// Path to a section of one club's area. An empty section is the club root.
pub fn club_path(club_id: &str, section: &str) -> String {
    let club_root = format!("{CLUB_ROOT}/{}", club_id.trim_matches('/'));
    join(&club_root, section)
}

fn join(root: &str, section: &str) -> String {
    let section = section.trim_matches('/');
    if section.is_empty() {
        root.to_owned()
    } else {
        format!("{root}/{section}")
    }
}

use super::*;

#[test]
fn admin_path_empty_section_is_root() {
    assert_eq!(admin_path(""), "/admin");
}

#[test]
fn admin_path_appends_section() {
    assert_eq!(admin_path("clubs"), "/admin/clubs");
}

#[test]
fn admin_path_trims_slashes() {
    assert_eq!(admin_path("/members/"), "/admin/members");
    assert_eq!(admin_path("/"), "/admin");
}

#[test]
fn club_path_includes_club_id() {
    assert_eq!(club_path("chess", ""), "/club/chess");
    assert_eq!(club_path("chess", "events"), "/club/chess/events");
}

#[test]
fn club_path_trims_slashes_in_both_segments() {
    assert_eq!(club_path("/chess/", "/members"), "/club/chess/members");
}

use super::*;

#[test]
fn admin_nav_items_start_with_dashboard() {
    let items = admin_nav_items();
    assert_eq!(items[0], NavItem { label: "Dashboard", href: "/admin".to_owned(), exact: true });
}

#[test]
fn admin_nav_items_stay_inside_admin_area() {
    for item in admin_nav_items() {
        assert!(item.href.starts_with("/admin"), "{} -> {}", item.label, item.href);
    }
}

#[test]
fn club_nav_items_are_scoped_to_club() {
    let hrefs: Vec<_> = club_nav_items("rowing").into_iter().map(|item| item.href).collect();
    assert_eq!(hrefs, vec!["/club/rowing", "/club/rowing/members", "/club/rowing/events"]);
}

#[test]
fn nav_item_hrefs_are_unique() {
    let mut hrefs: Vec<_> = admin_nav_items().into_iter().map(|item| item.href).collect();
    hrefs.extend(club_nav_items("rowing").into_iter().map(|item| item.href));
    let count = hrefs.len();
    hrefs.sort();
    hrefs.dedup();
    assert_eq!(hrefs.len(), count);
}

#[test]
fn only_area_roots_match_exactly() {
    let exact: Vec<_> = admin_nav_items()
        .into_iter()
        .chain(club_nav_items("rowing"))
        .filter(|item| item.exact)
        .map(|item| item.href)
        .collect();
    assert_eq!(exact, vec!["/admin", "/club/rowing"]);
}
